//! Invoice computation-and-dispatch pipeline.
//!
//! The computation half (discounts, tax, totals, rendering) is pure,
//! deterministic domain logic (no IO, no storage). The dispatch half talks
//! to injected collaborators through two narrow port traits,
//! [`NotificationChannel`] and [`AuditLogger`]; implementations live in
//! `tallyline-dispatch`.

pub mod audit;
pub mod channel;
pub mod discount;
pub mod render;
pub mod service;
pub mod tax;
pub mod totals;

pub use audit::AuditLogger;
pub use channel::{DispatchError, NotificationChannel};
pub use discount::DiscountStrategy;
pub use render::{InvoiceRenderer, PlainTextRenderer};
pub use service::InvoiceService;
pub use tax::TaxRule;
pub use totals::InvoiceTotals;
