//! Error types for talking to the activity service.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("server url '{0}' cannot carry path segments")]
    CannotBeABase(String),

    #[error("activity name '{0}' cannot be sent as a url path segment")]
    DotSegment(String),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("server rejected request with status {status}")]
    Rejected { status: u16, detail: Option<String> },
}

impl ClientError {
    /// Server-chosen explanation attached to a rejection.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// True when the server answered with a failure status, as opposed to no
    /// usable response at all.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_exposes_detail() {
        let err = ClientError::Rejected {
            status: 400,
            detail: Some("Student already signed up".to_string()),
        };
        assert!(err.is_rejection());
        assert_eq!(err.detail(), Some("Student already signed up"));
        assert_eq!(err.to_string(), "server rejected request with status 400");
    }

    #[test]
    fn decode_failure_is_not_a_rejection() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ClientError::Decode {
            url: "http://127.0.0.1:8000/activities".to_string(),
            source,
        };
        assert!(!err.is_rejection());
        assert_eq!(err.detail(), None);
    }
}
