//! Purchased line item value type.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::money::Money;

/// One purchased SKU with quantity and unit price.
///
/// Immutable once constructed and owned by the caller for the duration of a
/// single pipeline call; the pipeline never retains items beyond that call.
///
/// Fields are public and unchecked: the pipeline is deliberately permissive
/// and lets negative quantities and prices flow through the arithmetic.
/// Callers that want early rejection use [`LineItem::try_new`] at the
/// construction boundary instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub quantity: i64,
    pub unit_price: Money,
}

impl LineItem {
    pub fn new(sku: impl Into<String>, quantity: i64, unit_price: Money) -> Self {
        Self {
            sku: sku.into(),
            quantity,
            unit_price,
        }
    }

    /// Checked construction: non-empty SKU, non-negative quantity and price.
    pub fn try_new(
        sku: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> DomainResult<Self> {
        let sku = sku.into();
        if sku.is_empty() {
            return Err(DomainError::validation("sku must not be empty"));
        }
        if quantity < 0 {
            return Err(DomainError::validation("quantity must not be negative"));
        }
        if unit_price < Money::ZERO {
            return Err(DomainError::validation("unit_price must not be negative"));
        }
        Ok(Self {
            sku,
            quantity,
            unit_price,
        })
    }

    /// Extended price: `unit_price × quantity`.
    pub fn extended(&self) -> Money {
        self.unit_price * self.quantity
    }
}
