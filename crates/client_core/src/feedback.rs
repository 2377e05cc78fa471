use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use tokio::task::JoinHandle;

use crate::view::{Feedback, MessageView};

pub const FEEDBACK_HIDE_AFTER: Duration = Duration::from_secs(5);

/// Shows feedback messages and hides each one after a fixed delay.
///
/// Showing a new message cancels the pending hide of the previous one, so at
/// most one hide task is ever outstanding. Must be used inside a tokio runtime.
pub struct FeedbackChannel {
    view: Arc<dyn MessageView>,
    hide_after: Duration,
    pending_hide: Mutex<Option<JoinHandle<()>>>,
}

impl FeedbackChannel {
    pub fn new(view: Arc<dyn MessageView>, hide_after: Duration) -> Self {
        Self {
            view,
            hide_after,
            pending_hide: Mutex::new(None),
        }
    }

    pub fn hide_after(&self) -> Duration {
        self.hide_after
    }

    pub fn show(&self, feedback: Feedback) {
        // Held across show + reschedule so concurrent callers cannot leave
        // the timer of an older message armed.
        let mut pending = self
            .pending_hide
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(previous) = pending.take() {
            previous.abort();
        }
        self.view.show(&feedback);

        let view = Arc::clone(&self.view);
        let hide_after = self.hide_after;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(hide_after).await;
            view.hide();
        }));
    }

    pub fn has_pending_hide(&self) -> bool {
        self.pending_hide
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for FeedbackChannel {
    fn drop(&mut self) {
        let pending = self
            .pending_hide
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
#[path = "tests/feedback_tests.rs"]
mod tests;
