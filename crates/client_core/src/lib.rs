use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use shared::{
    domain::Directory,
    error::ErrorReply,
    protocol::{activities_route, email_query_key, EnrollmentAction, EnrollmentReply},
};
use tracing::debug;
use url::Url;

pub mod config;
mod directory;
mod enrollment;
pub mod error;
mod feedback;
mod portal;
pub mod view;

pub use config::{load_settings, ClientSettings};
pub use directory::{DirectoryRenderer, RefreshStatus};
pub use enrollment::{
    EnrollmentOutcome, EnrollmentSubmitter, REJECTED_FALLBACK, SIGNUP_FAILED, UNREGISTER_FAILED,
};
pub use error::{ClientError, Result};
pub use feedback::{FeedbackChannel, FEEDBACK_HIDE_AFTER};
pub use portal::PortalController;

/// The two endpoints the portal consumes, plus the unregister call.
///
/// `enroll` and `withdraw` resolve to the server's confirmation text on a
/// success status and to [`ClientError::Rejected`] on a failure status.
#[async_trait]
pub trait ActivityService: Send + Sync {
    async fn list_activities(&self) -> Result<Directory>;
    async fn enroll(&self, activity: &str, email: &str) -> Result<String>;
    async fn withdraw(&self, activity: &str, email: &str) -> Result<String>;
}

pub struct ActivitiesClient {
    http: Client,
    base_url: Url,
}

impl ActivitiesClient {
    pub fn new(server_url: &str) -> Result<Self> {
        Self::with_http(server_url, Client::new())
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self> {
        let http = Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .map_err(|source| ClientError::Transport {
                url: settings.server_url.clone(),
                source,
            })?;
        Self::with_http(&settings.server_url, http)
    }

    fn with_http(server_url: &str, http: Client) -> Result<Self> {
        let base_url = Url::parse(server_url.trim()).map_err(|source| ClientError::InvalidUrl {
            url: server_url.to_string(),
            source,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::CannotBeABase(server_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn activities_url(&self) -> Result<Url> {
        self.endpoint(&[activities_route()])
    }

    /// `{base}/activities/{activity}/{action}?email={email}` with the activity
    /// encoded as a single path segment and the email form-encoded. Activities
    /// named `.` or `..` cannot be addressed and are refused.
    pub fn enrollment_url(
        &self,
        action: EnrollmentAction,
        activity: &str,
        email: &str,
    ) -> Result<Url> {
        // URL parsers collapse these (and their %2E spellings) instead of
        // keeping them as a segment.
        if matches!(activity, "." | "..") {
            return Err(ClientError::DotSegment(activity.to_string()));
        }
        let mut url = self.endpoint(&[activities_route(), activity, action.route_segment()])?;
        url.query_pairs_mut().append_pair(email_query_key(), email);
        Ok(url)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| ClientError::CannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, method: Method, url: Url) -> Result<(Response, String)> {
        let url_text = url.to_string();
        debug!(%method, url = %url_text, "activities: sending request");
        let response = self
            .http
            .request(method, url)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url_text.clone(),
                source,
            })?;
        Ok((response, url_text))
    }

    async fn enrollment(
        &self,
        action: EnrollmentAction,
        activity: &str,
        email: &str,
    ) -> Result<String> {
        let method = match action {
            EnrollmentAction::Signup => Method::POST,
            EnrollmentAction::Unregister => Method::DELETE,
        };
        let url = self.enrollment_url(action, activity, email)?;
        let (response, url) = self.send(method, url).await?;
        let status = response.status();
        let body = read_body(response, &url).await?;

        if !status.is_success() {
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                detail: ErrorReply::detail_from_body(&body),
            });
        }

        let reply: EnrollmentReply =
            serde_json::from_slice(&body).map_err(|source| ClientError::Decode { url, source })?;
        Ok(reply.message)
    }
}

async fn read_body(response: Response, url: &str) -> Result<Vec<u8>> {
    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|source| ClientError::Transport {
            url: url.to_string(),
            source,
        })
}

#[async_trait]
impl ActivityService for ActivitiesClient {
    async fn list_activities(&self) -> Result<Directory> {
        let (response, url) = self.send(Method::GET, self.activities_url()?).await?;
        let status = response.status();
        let body = read_body(response, &url).await?;

        if !status.is_success() {
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                detail: ErrorReply::detail_from_body(&body),
            });
        }

        serde_json::from_slice(&body).map_err(|source| ClientError::Decode { url, source })
    }

    async fn enroll(&self, activity: &str, email: &str) -> Result<String> {
        self.enrollment(EnrollmentAction::Signup, activity, email)
            .await
    }

    async fn withdraw(&self, activity: &str, email: &str) -> Result<String> {
        self.enrollment(EnrollmentAction::Unregister, activity, email)
            .await
    }
}

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
