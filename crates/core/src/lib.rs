//! `tallyline-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the decimal [`Money`] value type, the [`LineItem`] value type, and the
//! domain error model.

pub mod error;
pub mod line_item;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use line_item::LineItem;
pub use money::Money;
