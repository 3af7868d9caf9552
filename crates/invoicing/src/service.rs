//! Invoice pipeline orchestrator.

use std::sync::Arc;

use tracing::warn;

use tallyline_core::LineItem;

use crate::audit::AuditLogger;
use crate::channel::NotificationChannel;
use crate::discount::DiscountStrategy;
use crate::render::InvoiceRenderer;
use crate::tax::TaxRule;
use crate::totals::InvoiceTotals;

/// Stateless compute-then-dispatch pipeline for one invoice.
///
/// Collaborators are injected at construction time; `process` reads no
/// global state and holds no locks, so concurrent callers may share one
/// instance (the port traits require `Send + Sync` from the collaborators
/// for exactly this reason).
pub struct InvoiceService {
    tax_rule: TaxRule,
    renderer: Arc<dyn InvoiceRenderer>,
    channel: Arc<dyn NotificationChannel>,
    audit: Arc<dyn AuditLogger>,
}

impl InvoiceService {
    pub fn new(
        tax_rule: TaxRule,
        renderer: Arc<dyn InvoiceRenderer>,
        channel: Arc<dyn NotificationChannel>,
        audit: Arc<dyn AuditLogger>,
    ) -> Self {
        Self {
            tax_rule,
            renderer,
            channel,
            audit,
        }
    }

    /// Compute totals, render, dispatch, and return the rendered text.
    ///
    /// Fixed order: totals are computed first (see [`InvoiceTotals::compute`]
    /// for the arithmetic contract), the renderer produces the text, the
    /// notification channel is invoked only for a non-empty `recipient`,
    /// and the audit logger runs unconditionally last. A channel failure is
    /// logged and never blocks the audit line or the returned content.
    ///
    /// No input validation happens here; see the crate's permissive
    /// arithmetic policy on [`InvoiceTotals::compute`].
    pub fn process(
        &self,
        items: &[LineItem],
        discounts: &[DiscountStrategy],
        recipient: &str,
    ) -> String {
        let totals = InvoiceTotals::compute(items, discounts, &self.tax_rule);
        let content = self.renderer.render(items, &totals);

        if !recipient.is_empty() {
            if let Err(error) = self.channel.send(recipient, &content) {
                warn!(recipient, %error, "invoice notification failed");
            }
        }

        self.audit.log(&format!(
            "Invoice processed for {recipient} total={}",
            totals.grand_total
        ));

        content
    }
}
