use std::{sync::Arc, time::Duration};

use crate::{
    directory::{DirectoryRenderer, RefreshStatus},
    enrollment::{EnrollmentOutcome, EnrollmentSubmitter},
    feedback::FeedbackChannel,
    view::{ListContent, PortalViews},
    ActivityService,
};

/// One per page: owns the renderer, the submitter and their view handles.
///
/// Every operation takes `&self`, so a controller shared through an `Arc` can
/// have a refresh and any number of submissions in flight together. A
/// successful submission does not refresh the directory; capacity figures stay
/// as last fetched until the next refresh.
pub struct PortalController {
    renderer: DirectoryRenderer,
    submitter: EnrollmentSubmitter,
    views: PortalViews,
}

impl PortalController {
    pub fn new(service: Arc<dyn ActivityService>, views: PortalViews, hide_after: Duration) -> Self {
        let feedback = Arc::new(FeedbackChannel::new(views.message.clone(), hide_after));
        Self {
            renderer: DirectoryRenderer::new(
                service.clone(),
                views.list.clone(),
                views.select.clone(),
            ),
            submitter: EnrollmentSubmitter::new(service, views.form.clone(), feedback),
            views,
        }
    }

    /// Initial fetch-and-render pass.
    pub async fn start(&self) -> RefreshStatus {
        self.views.list.replace(ListContent::Loading);
        self.renderer.refresh().await
    }

    pub async fn refresh_directory(&self) -> RefreshStatus {
        self.renderer.refresh().await
    }

    pub async fn submit_enrollment(&self, email: &str, activity: &str) -> EnrollmentOutcome {
        self.submitter.submit(email, activity).await
    }

    pub async fn withdraw_enrollment(&self, email: &str, activity: &str) -> EnrollmentOutcome {
        self.submitter.withdraw(email, activity).await
    }
}

#[cfg(test)]
#[path = "tests/portal_tests.rs"]
mod tests;
