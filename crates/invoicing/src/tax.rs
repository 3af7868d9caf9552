//! Tax rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tallyline_core::Money;

/// A pluggable tax computation: taxable base in, tax amount out.
///
/// One concrete rule is in scope today (fixed-rate). Tiered or
/// jurisdiction-specific rules become new variants; the orchestrator never
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRule {
    /// `base × rate`, with `rate` a fraction (e.g. `0.18`).
    FixedRate { rate: Decimal },
}

impl TaxRule {
    /// The standard 18% rate.
    pub fn standard() -> Self {
        TaxRule::FixedRate {
            rate: Decimal::new(18, 2),
        }
    }

    /// Pure function of the base. The sign of `base` is not inspected:
    /// a negative base (over-discounted invoice) yields negative tax.
    pub fn compute(&self, base: Money) -> Money {
        match self {
            TaxRule::FixedRate { rate } => base.at_rate(*rate),
        }
    }
}
