//! Page state shared between the egui thread and the backend worker.

use std::sync::{Mutex, MutexGuard};

use client_core::view::{
    ActivityListView, ActivitySelectView, Feedback, ListContent, MessageView, SelectOption,
    SignupFormView,
};

#[derive(Debug, Clone)]
pub struct PageState {
    pub list: ListContent,
    pub options: Vec<SelectOption>,
    pub email: String,
    /// Empty while the placeholder option is selected.
    pub selected_activity: String,
    pub feedback: Option<Feedback>,
    pub feedback_visible: bool,
    pub status: Option<String>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            list: ListContent::Loading,
            options: vec![SelectOption::placeholder()],
            email: String::new(),
            selected_activity: String::new(),
            feedback: None,
            feedback_visible: false,
            status: None,
        }
    }
}

impl PageState {
    pub fn visible_feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref().filter(|_| self.feedback_visible)
    }

    pub fn selected_label(&self) -> &str {
        self.options
            .iter()
            .find(|option| option.value == self.selected_activity)
            .map(|option| option.label.as_str())
            .unwrap_or(client_core::view::SELECT_PLACEHOLDER_LABEL)
    }
}

#[derive(Default)]
pub struct PortalPage {
    state: Mutex<PageState>,
}

impl PortalPage {
    pub fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_status(&self, status: impl Into<String>) {
        self.lock().status = Some(status.into());
    }
}

impl ActivityListView for PortalPage {
    fn replace(&self, content: ListContent) {
        self.lock().list = content;
    }
}

impl ActivitySelectView for PortalPage {
    /// Rebuilt options always start back on the placeholder.
    fn replace_options(&self, options: Vec<SelectOption>) {
        let mut state = self.lock();
        state.selected_activity.clear();
        state.options = options;
    }
}

impl SignupFormView for PortalPage {
    fn reset(&self) {
        let mut state = self.lock();
        state.email.clear();
        state.selected_activity.clear();
    }
}

impl MessageView for PortalPage {
    fn show(&self, feedback: &Feedback) {
        let mut state = self.lock();
        state.feedback = Some(feedback.clone());
        state.feedback_visible = true;
    }

    fn hide(&self) {
        self.lock().feedback_visible = false;
    }
}
