//! In-memory recording collaborators for tests/dev.

use std::sync::Mutex;

use tallyline_invoicing::{AuditLogger, DispatchError, NotificationChannel};

/// Records every send attempt; optionally fails each one.
///
/// - No IO / no async
/// - Mutex-guarded, safe to share across threads
/// - A failing instance still records the attempt before returning the
///   configured error, so tests can assert the pipeline tried to send
#[derive(Debug, Default)]
pub struct RecordingChannel {
    sent: Mutex<Vec<(String, String)>>,
    fail_with: Option<DispatchError>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A channel whose every send fails with `error`.
    pub fn failing(error: DispatchError) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(error),
        }
    }

    /// Snapshot of `(address, content)` pairs, in send order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl NotificationChannel for RecordingChannel {
    fn send(&self, address: &str, content: &str) -> Result<(), DispatchError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push((address.to_string(), content.to_string()));
        }
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/// Records every audit line.
#[derive(Debug, Default)]
pub struct RecordingAuditLog {
    messages: Mutex<Vec<String>>,
}

impl RecordingAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of audit messages, in log order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditLogger for RecordingAuditLog {
    fn log(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
