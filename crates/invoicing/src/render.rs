//! Invoice rendering.

use std::fmt::Write;

use tallyline_core::LineItem;

use crate::totals::InvoiceTotals;

/// Renders one invoice to text.
///
/// Implementations must be pure: no IO, no randomness, byte-identical
/// output for identical inputs. The returned text is both handed to the
/// notification channel and returned to the caller, so any divergence
/// between calls would break the pipeline's idempotence contract.
pub trait InvoiceRenderer: Send + Sync {
    fn render(&self, items: &[LineItem], totals: &InvoiceTotals) -> String;
}

/// The fixed plain-text layout:
///
/// ```text
/// INVOICE
/// ITEM-001 x3 @ 100
/// ITEM-002 x1 @ 250
/// Subtotal: 550
/// Discounts: 55
/// Tax: 89.1
/// Total: 584.1
/// ```
///
/// One header line, one line per item in input order, then exactly four
/// summary lines in this order.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextRenderer;

impl InvoiceRenderer for PlainTextRenderer {
    fn render(&self, items: &[LineItem], totals: &InvoiceTotals) -> String {
        let mut out = String::from("INVOICE\n");
        for item in items {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{} x{} @ {}", item.sku, item.quantity, item.unit_price);
        }
        let _ = writeln!(out, "Subtotal: {}", totals.subtotal);
        let _ = writeln!(out, "Discounts: {}", totals.discount_total);
        let _ = writeln!(out, "Tax: {}", totals.tax);
        let _ = writeln!(out, "Total: {}", totals.grand_total);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tallyline_core::Money;

    use crate::discount::DiscountStrategy;
    use crate::tax::TaxRule;

    fn worked_example() -> (Vec<LineItem>, InvoiceTotals) {
        let items = vec![
            LineItem::new("ITEM-001", 3, Money::new(dec!(100.0))),
            LineItem::new("ITEM-002", 1, Money::new(dec!(250.0))),
        ];
        let discounts = vec![DiscountStrategy::PercentOff { percent: dec!(10) }];
        let totals = InvoiceTotals::compute(&items, &discounts, &TaxRule::standard());
        (items, totals)
    }

    #[test]
    fn layout_is_exact() {
        let (items, totals) = worked_example();
        let text = PlainTextRenderer.render(&items, &totals);

        assert_eq!(
            text,
            "INVOICE\n\
             ITEM-001 x3 @ 100\n\
             ITEM-002 x1 @ 250\n\
             Subtotal: 550\n\
             Discounts: 55\n\
             Tax: 89.1\n\
             Total: 584.1\n"
        );
    }

    #[test]
    fn empty_invoice_renders_header_and_summary_only() {
        let totals = InvoiceTotals::compute(&[], &[], &TaxRule::standard());
        let text = PlainTextRenderer.render(&[], &totals);

        assert_eq!(
            text,
            "INVOICE\nSubtotal: 0\nDiscounts: 0\nTax: 0\nTotal: 0\n"
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let (items, totals) = worked_example();
        let first = PlainTextRenderer.render(&items, &totals);
        let second = PlainTextRenderer.render(&items, &totals);
        assert_eq!(first.as_bytes(), second.as_bytes());
    }
}
