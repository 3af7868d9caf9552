//! Notification channel port.

use thiserror::Error;

/// Error surfaced by a notification channel.
///
/// The pipeline never propagates these: a failed send is logged and the
/// call continues (the audit trail and the returned content do not depend
/// on delivery). Retries and delivery guarantees are the channel's own
/// concern.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The transport behind the channel could not be reached.
    #[error("channel unavailable: {0}")]
    Unavailable(String),

    /// The recipient address was refused by the transport.
    #[error("recipient rejected: {0}")]
    Rejected(String),
}

/// Dispatches rendered invoice content to a recipient address.
///
/// Contract consumed by the pipeline: invoked **at most once per call**,
/// and only when the caller supplied a non-empty recipient address. An
/// empty address is the valid "no notification requested" path, not an
/// error.
///
/// Implementations must be safe for concurrent invocation: the pipeline
/// itself holds no locks, and concurrent callers may share one service
/// instance.
pub trait NotificationChannel: Send + Sync {
    fn send(&self, address: &str, content: &str) -> Result<(), DispatchError>;
}
