//! Status-change notification hand-off.
//!
//! The ranking engine never delivers anything itself. When the caller
//! promotes an applicant it builds a [`StatusNotification`] and hands it to
//! whatever [`Notifier`] the surrounding system wired in. A failed delivery
//! is the caller's to downgrade; nothing here rolls back a status decision.

use thiserror::Error;
use tracing::info;

use crate::run_id;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

/// Structured payload for the external delivery collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNotification {
    /// Externally resolved delivery address.
    pub recipient: String,
    pub subject: String,
    pub body: String,
    /// ULID correlating the hand-off with log records.
    pub correlation_id: String,
}

impl StatusNotification {
    /// Builds the congratulation message sent when an applicant passes the
    /// selection stage.
    pub fn pass(recipient: impl Into<String>, full_name: &str, job_title: &str) -> Self {
        Self {
            recipient: recipient.into(),
            subject: format!("Application status update - {job_title}"),
            body: format!(
                "Dear {full_name},\n\n\
                 Congratulations on passing the selection stage for the {job_title} position. \
                 We appreciated the competence and potential you showed throughout the process.\n\n\
                 We will contact you shortly with the next steps. Please keep an eye on the \
                 email address and phone number you used to apply so that communication stays \
                 smooth.\n\n\
                 Kind regards,\n\
                 Human Capital"
            ),
            correlation_id: run_id::generate(),
        }
    }
}

/// Delivery collaborator. Implementations own transport, credentials and
/// retries entirely; the core only assembles payloads.
pub trait Notifier: Send + Sync {
    fn deliver(&self, notification: &StatusNotification) -> Result<(), NotifyError>;
}

/// Default collaborator: records the hand-off in the log instead of
/// delivering anywhere.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn deliver(&self, notification: &StatusNotification) -> Result<(), NotifyError> {
        info!(
            recipient = %notification.recipient,
            subject = %notification.subject,
            correlation_id = %notification.correlation_id,
            "status notification handed off"
        );
        Ok(())
    }
}
