//! Notification sink seam.

use crate::session::StudentRecord;

/// Best-effort delivery of a verified student record.
///
/// Implementations must not block the caller and must not report back:
/// success and failure look the same from here and are only logged.
pub trait Notifier: Send + Sync {
    fn notify(&self, record: StudentRecord);
}

/// Drops every record. Used when no webhook is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, record: StudentRecord) {
        tracing::warn!(
            "No webhook configured, verified record for {} was not delivered",
            record.name
        );
    }
}
