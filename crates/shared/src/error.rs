use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body the activity service sends with a failure status.
///
/// `detail` is kept loosely typed: validation failures carry a list of
/// objects there, and only a plain string is meant for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorReply {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorReply {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(Value::String(detail.into())),
        }
    }

    pub fn detail_text(&self) -> Option<&str> {
        self.detail.as_ref().and_then(Value::as_str)
    }

    /// Extracts the display text from a raw failure body, if there is one.
    pub fn detail_from_body(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorReply>(body)
            .ok()
            .and_then(|reply| reply.detail_text().map(str::to_owned))
    }
}
