use std::sync::Arc;

use shared::protocol::EnrollmentAction;
use tracing::{error, info, warn};

use crate::{
    error::ClientError,
    feedback::FeedbackChannel,
    view::{Feedback, SignupFormView},
    ActivityService,
};

pub const REJECTED_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";

/// What the visitor was told after one enrollment call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentOutcome {
    Accepted(String),
    Rejected { status: u16, message: String },
    Failed(String),
}

impl EnrollmentOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Accepted(message) | Self::Failed(message) => message.as_str(),
            Self::Rejected { message, .. } => message.as_str(),
        }
    }

    pub fn feedback(&self) -> Feedback {
        match self {
            Self::Accepted(message) => Feedback::success(message.clone()),
            Self::Rejected { message, .. } | Self::Failed(message) => {
                Feedback::error(message.clone())
            }
        }
    }
}

/// Sends signup/unregister calls and turns each reply into feedback.
///
/// Submissions are independent: nothing here serializes or de-duplicates
/// them, so whichever reply lands last owns the visible message.
pub struct EnrollmentSubmitter {
    service: Arc<dyn ActivityService>,
    form: Arc<dyn SignupFormView>,
    feedback: Arc<FeedbackChannel>,
}

impl EnrollmentSubmitter {
    pub fn new(
        service: Arc<dyn ActivityService>,
        form: Arc<dyn SignupFormView>,
        feedback: Arc<FeedbackChannel>,
    ) -> Self {
        Self {
            service,
            form,
            feedback,
        }
    }

    /// Values are passed through exactly as entered; the server validates.
    pub async fn submit(&self, email: &str, activity: &str) -> EnrollmentOutcome {
        let reply = self.service.enroll(activity, email).await;
        let outcome = classify(EnrollmentAction::Signup, activity, reply);
        if outcome.is_accepted() {
            self.form.reset();
        }
        self.feedback.show(outcome.feedback());
        outcome
    }

    /// Leaves the form alone whatever the reply.
    pub async fn withdraw(&self, email: &str, activity: &str) -> EnrollmentOutcome {
        let reply = self.service.withdraw(activity, email).await;
        let outcome = classify(EnrollmentAction::Unregister, activity, reply);
        self.feedback.show(outcome.feedback());
        outcome
    }
}

fn classify(
    action: EnrollmentAction,
    activity: &str,
    reply: Result<String, ClientError>,
) -> EnrollmentOutcome {
    let route = action.route_segment();
    match reply {
        Ok(message) => {
            info!(activity, route, "enrollment: accepted");
            EnrollmentOutcome::Accepted(message)
        }
        Err(ClientError::Rejected { status, detail }) => {
            warn!(activity, route, status, ?detail, "enrollment: rejected by server");
            EnrollmentOutcome::Rejected {
                status,
                message: detail.unwrap_or_else(|| REJECTED_FALLBACK.to_string()),
            }
        }
        Err(err) => {
            error!(activity, route, "enrollment: error during {route}: {err}");
            let fallback = match action {
                EnrollmentAction::Signup => SIGNUP_FAILED,
                EnrollmentAction::Unregister => UNREGISTER_FAILED,
            };
            EnrollmentOutcome::Failed(fallback.to_string())
        }
    }
}

#[cfg(test)]
#[path = "tests/enrollment_tests.rs"]
mod tests;
