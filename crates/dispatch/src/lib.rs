//! Collaborator implementations for the invoice pipeline.
//!
//! The pipeline in `tallyline-invoicing` talks to the outside world through
//! two narrow ports, `NotificationChannel` and `AuditLogger`. This crate
//! provides the production stand-ins (tracing-backed) and in-memory
//! recording implementations for tests/dev.

pub mod audit;
pub mod email;
pub mod recording;

pub use audit::TracingAuditLogger;
pub use email::LogEmailChannel;
pub use recording::{RecordingAuditLog, RecordingChannel};
