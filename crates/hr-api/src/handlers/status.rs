use axum::{extract::State, Json};
use hr_common::notify::StatusNotification;
use hr_common::ranking::SelectionStatus;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ApiError;
use crate::SharedState;

#[derive(Debug, Clone, Deserialize)]
pub struct StatusDecisionRequest {
    pub applicant_id: i64,
    pub full_name: String,
    pub job_title: String,
    pub decision: SelectionStatus,
    /// Externally resolved delivery address; absent when none is on file.
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusDecisionResponse {
    pub applicant_id: i64,
    pub decision: SelectionStatus,
    pub notified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Accepts the caller's pass/fail decision and hands off the congratulation
/// notification for passing applicants.
///
/// The decision is committed regardless of delivery: a failed or impossible
/// hand-off comes back as a warning, never as an error.
pub async fn submit_decision(
    State(state): State<SharedState>,
    Json(payload): Json<StatusDecisionRequest>,
) -> Result<Json<StatusDecisionResponse>, ApiError> {
    let mut notified = false;
    let mut warning = None;

    if payload.decision == SelectionStatus::Pass {
        match payload.email.as_deref() {
            Some(email) => {
                let notification =
                    StatusNotification::pass(email, &payload.full_name, &payload.job_title);

                match state.notifier.deliver(&notification) {
                    Ok(()) => notified = true,
                    Err(err) => {
                        warn!(
                            applicant_id = payload.applicant_id,
                            correlation_id = %notification.correlation_id,
                            error = %err,
                            "status updated but notification failed"
                        );
                        warning = Some(format!(
                            "status updated, but the notification could not be delivered: {err}"
                        ));
                    }
                }
            }
            None => {
                warning = Some("status updated, but no email address is on file".into());
            }
        }
    }

    Ok(Json(StatusDecisionResponse {
        applicant_id: payload.applicant_id,
        decision: payload.decision,
        notified,
        warning,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hr_common::notify::{Notifier, NotifyError};

    use super::*;
    use crate::test_state_with_notifier;

    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn deliver(&self, _notification: &StatusNotification) -> Result<(), NotifyError> {
            Err(NotifyError::Delivery("smtp unreachable".into()))
        }
    }

    fn request(decision: SelectionStatus, email: Option<&str>) -> StatusDecisionRequest {
        StatusDecisionRequest {
            applicant_id: 7,
            full_name: "Rina Wijaya".into(),
            job_title: "Data Engineer".into(),
            decision,
            email: email.map(Into::into),
        }
    }

    #[tokio::test]
    async fn pass_with_email_notifies() {
        let state = crate::test_state();

        let Json(response) = submit_decision(
            State(state),
            Json(request(SelectionStatus::Pass, Some("rina@example.com"))),
        )
        .await
        .unwrap();

        assert!(response.notified);
        assert!(response.warning.is_none());
    }

    #[tokio::test]
    async fn delivery_failure_downgrades_to_warning() {
        let state = test_state_with_notifier(Arc::new(FailingNotifier));

        let Json(response) = submit_decision(
            State(state),
            Json(request(SelectionStatus::Pass, Some("rina@example.com"))),
        )
        .await
        .unwrap();

        assert!(!response.notified);
        let warning = response.warning.as_deref().unwrap();
        assert!(warning.contains("could not be delivered"));
        assert_eq!(response.decision, SelectionStatus::Pass);
    }

    #[tokio::test]
    async fn pass_without_email_warns() {
        let state = crate::test_state();

        let Json(response) = submit_decision(State(state), Json(request(SelectionStatus::Pass, None)))
            .await
            .unwrap();

        assert!(!response.notified);
        assert!(response.warning.as_deref().unwrap().contains("no email"));
    }

    #[tokio::test]
    async fn fail_decision_skips_notification() {
        let state = test_state_with_notifier(Arc::new(FailingNotifier));

        let Json(response) = submit_decision(
            State(state),
            Json(request(SelectionStatus::Fail, Some("rina@example.com"))),
        )
        .await
        .unwrap();

        assert!(!response.notified);
        assert!(response.warning.is_none());
    }
}
