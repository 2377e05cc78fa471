use serde::{Deserialize, Serialize};

/// Body returned by the enrollment endpoints on a success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentReply {
    pub message: String,
}

/// The two roster-changing calls the activity service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentAction {
    Signup,
    Unregister,
}

impl EnrollmentAction {
    /// Trailing path segment after `/activities/{name}`.
    pub fn route_segment(self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Unregister => "unregister",
        }
    }
}

pub fn activities_route() -> &'static str {
    "activities"
}

pub fn email_query_key() -> &'static str {
    "email"
}
