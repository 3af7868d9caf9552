//! Audit logger backed by structured logging.

use tracing::info;

use tallyline_invoicing::AuditLogger;

/// Writes each audit line as a `tracing` event on a dedicated target, so
/// the audit trail can be filtered and shipped independently of ordinary
/// application logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditLogger;

impl AuditLogger for TracingAuditLogger {
    fn log(&self, message: &str) {
        info!(target: "tallyline::audit", "{message}");
    }
}
