//! Audit logging port.

/// Records one audit line per pipeline call.
///
/// Contract consumed by the pipeline: invoked **exactly once per call,
/// unconditionally**, after the notification attempt (whether or not a
/// notification was sent), with a message naming the recipient (possibly
/// empty) and the computed grand total.
///
/// Infallible from the pipeline's perspective; implementations swallow
/// their own transport failures. Must be safe for concurrent invocation.
pub trait AuditLogger: Send + Sync {
    fn log(&self, message: &str);
}
