//! Discount strategies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tallyline_core::Money;

/// A pluggable discount computation: subtotal in, discount amount out.
///
/// The strategy set is closed, so this is a tagged variant with an
/// exhaustive match rather than a trait object. Adding a variant forces
/// every match site to handle it.
///
/// No variant constrains its parameters: a percentage outside `[0, 100]`
/// or a flat amount exceeding the subtotal is accepted and produces a
/// proportionally larger (or negative) discount. Bounding inputs is the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountStrategy {
    /// `subtotal × percent / 100`.
    PercentOff { percent: Decimal },
    /// A fixed amount, regardless of the subtotal.
    FlatOff { amount: Money },
}

impl DiscountStrategy {
    /// Pure function of the subtotal; no side effects.
    pub fn compute(&self, subtotal: Money) -> Money {
        match self {
            DiscountStrategy::PercentOff { percent } => subtotal.percent(*percent),
            DiscountStrategy::FlatOff { amount } => *amount,
        }
    }
}
