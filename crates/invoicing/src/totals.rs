//! Invoice totals computation.

use serde::{Deserialize, Serialize};

use tallyline_core::{LineItem, Money};

use crate::discount::DiscountStrategy;
use crate::tax::TaxRule;

/// The transient computation result of one invoice.
///
/// Born inside a single pipeline call, consumed by the renderer, and
/// discarded when the call returns. Never mutated after computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: Money,
    pub discount_total: Money,
    pub tax: Money,
    pub grand_total: Money,
}

impl InvoiceTotals {
    /// Compute all totals from the inputs, deterministically.
    ///
    /// The computation is deliberately permissive: negative quantities or
    /// prices, percentages outside `[0, 100]`, and flat discounts that
    /// exceed the subtotal all flow through the arithmetic. Over-discounting
    /// produces a negative taxable base, negative tax, and a negative grand
    /// total, none of which are clamped or rejected.
    pub fn compute(
        items: &[LineItem],
        discounts: &[DiscountStrategy],
        tax_rule: &TaxRule,
    ) -> Self {
        let subtotal: Money = items.iter().map(LineItem::extended).sum();

        // Every strategy sees the original subtotal: discounts are additive,
        // never applied to a running remainder.
        let discount_total: Money = discounts.iter().map(|d| d.compute(subtotal)).sum();

        let taxable_base = subtotal - discount_total;
        let tax = tax_rule.compute(taxable_base);

        Self {
            subtotal,
            discount_total,
            tax,
            grand_total: taxable_base + tax,
        }
    }

    /// `subtotal − discount_total`, the amount tax was computed on.
    /// Negative when discounts exceed the subtotal.
    pub fn taxable_base(&self) -> Money {
        self.subtotal - self.discount_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(d: rust_decimal::Decimal) -> Money {
        Money::new(d)
    }

    fn worked_example_items() -> Vec<LineItem> {
        vec![
            LineItem::new("ITEM-001", 3, money(dec!(100.0))),
            LineItem::new("ITEM-002", 1, money(dec!(250.0))),
        ]
    }

    #[test]
    fn worked_example_totals() {
        let items = worked_example_items();
        let discounts = vec![DiscountStrategy::PercentOff { percent: dec!(10) }];

        let totals = InvoiceTotals::compute(&items, &discounts, &TaxRule::standard());

        assert_eq!(totals.subtotal, money(dec!(550.0)));
        assert_eq!(totals.discount_total, money(dec!(55)));
        assert_eq!(totals.taxable_base(), money(dec!(495.0)));
        assert_eq!(totals.tax, money(dec!(89.1)));
        assert_eq!(totals.grand_total, money(dec!(584.1)));
    }

    #[test]
    fn no_items_and_no_discounts_is_all_zero() {
        let totals = InvoiceTotals::compute(&[], &[], &TaxRule::standard());

        assert_eq!(totals.subtotal, Money::ZERO);
        assert_eq!(totals.discount_total, Money::ZERO);
        assert_eq!(totals.tax, Money::ZERO);
        assert_eq!(totals.grand_total, Money::ZERO);
    }

    /// A flat discount larger than the subtotal drives the base, the tax,
    /// and the grand total negative. Nothing clamps or rejects this; the
    /// permissive arithmetic is intentional, documented behavior.
    #[test]
    fn over_discounting_goes_negative() {
        let items = vec![LineItem::new("ITEM-001", 1, money(dec!(100)))];
        let discounts = vec![DiscountStrategy::FlatOff {
            amount: money(dec!(1000)),
        }];

        let totals = InvoiceTotals::compute(&items, &discounts, &TaxRule::standard());

        assert_eq!(totals.subtotal, money(dec!(100)));
        assert_eq!(totals.discount_total, money(dec!(1000)));
        assert_eq!(totals.taxable_base(), money(dec!(-900)));
        assert_eq!(totals.tax, money(dec!(-162)));
        assert_eq!(totals.grand_total, money(dec!(-1062)));
    }

    /// Adding a second strategy never changes the first strategy's
    /// contribution: each strategy computes against the original subtotal.
    #[test]
    fn discounts_do_not_compound() {
        let items = worked_example_items();
        let percent = DiscountStrategy::PercentOff { percent: dec!(10) };
        let flat = DiscountStrategy::FlatOff {
            amount: money(dec!(20)),
        };

        let alone =
            InvoiceTotals::compute(&items, std::slice::from_ref(&percent), &TaxRule::standard());
        let combined = InvoiceTotals::compute(
            &items,
            &[percent.clone(), flat.clone()],
            &TaxRule::standard(),
        );

        // 10% of 550 stays 55 whether or not the flat discount is present.
        assert_eq!(alone.discount_total, money(dec!(55)));
        assert_eq!(combined.discount_total, money(dec!(75)));

        // Order of strategies does not matter either.
        let swapped = InvoiceTotals::compute(&items, &[flat, percent], &TaxRule::standard());
        assert_eq!(swapped.discount_total, combined.discount_total);
        assert_eq!(swapped.grand_total, combined.grand_total);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_item() -> impl Strategy<Value = LineItem> {
            ("[A-Z]{3}-[0-9]{3}", 0i64..1_000, -100_000i64..1_000_000).prop_map(
                |(sku, quantity, cents)| {
                    LineItem::new(sku, quantity, Money::new(rust_decimal::Decimal::new(cents, 2)))
                },
            )
        }

        fn arb_discount() -> impl Strategy<Value = DiscountStrategy> {
            prop_oneof![
                (-50i64..200).prop_map(|p| DiscountStrategy::PercentOff {
                    percent: rust_decimal::Decimal::from(p)
                }),
                (-10_000i64..1_000_000).prop_map(|cents| DiscountStrategy::FlatOff {
                    amount: Money::new(rust_decimal::Decimal::new(cents, 2))
                }),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Subtotal is the sum of extended prices, in any item order.
            #[test]
            fn subtotal_is_order_independent(items in prop::collection::vec(arb_item(), 0..12)) {
                let forward = InvoiceTotals::compute(&items, &[], &TaxRule::standard());

                let mut reversed = items.clone();
                reversed.reverse();
                let backward = InvoiceTotals::compute(&reversed, &[], &TaxRule::standard());

                let expected: Money = items.iter().map(LineItem::extended).sum();
                prop_assert_eq!(forward.subtotal, expected);
                prop_assert_eq!(backward.subtotal, expected);
            }

            /// The discount fold is additive over the original subtotal.
            #[test]
            fn discount_total_is_additive(
                items in prop::collection::vec(arb_item(), 0..8),
                discounts in prop::collection::vec(arb_discount(), 0..6),
            ) {
                let totals = InvoiceTotals::compute(&items, &discounts, &TaxRule::standard());

                let expected: Money = discounts
                    .iter()
                    .map(|d| d.compute(totals.subtotal))
                    .sum();
                prop_assert_eq!(totals.discount_total, expected);
            }

            /// `grand_total = subtotal − discount_total + tax`, exactly, and
            /// `tax` is 18% of the taxable base.
            #[test]
            fn total_identity_holds(
                items in prop::collection::vec(arb_item(), 0..8),
                discounts in prop::collection::vec(arb_discount(), 0..6),
            ) {
                let totals = InvoiceTotals::compute(&items, &discounts, &TaxRule::standard());

                prop_assert_eq!(
                    totals.tax,
                    totals.taxable_base().at_rate(rust_decimal::Decimal::new(18, 2))
                );
                prop_assert_eq!(
                    totals.grand_total,
                    totals.subtotal - totals.discount_total + totals.tax
                );
            }
        }
    }
}
