//! In-memory page and scripted service used by the controller suites.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use shared::{domain::Directory, protocol::EnrollmentAction};
use tokio::time::Instant;

use crate::{
    error::{ClientError, Result},
    view::{
        ActivityListView, ActivitySelectView, Feedback, ListContent, MessageView, PortalViews,
        SelectOption, SignupFormView,
    },
    ActivityService,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageEvent {
    Shown(Feedback),
    Hidden,
}

#[derive(Debug)]
pub struct PageState {
    pub list: ListContent,
    pub options: Vec<SelectOption>,
    pub email: String,
    pub selected_activity: String,
    pub message: Option<Feedback>,
    pub message_visible: bool,
    pub message_events: Vec<(Instant, MessageEvent)>,
    pub list_replacements: usize,
    pub option_replacements: usize,
    pub form_resets: usize,
}

/// Records everything the controller does to the page.
pub struct RecordingPage {
    state: Mutex<PageState>,
}

impl RecordingPage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(PageState {
                list: ListContent::Loading,
                options: vec![SelectOption::placeholder()],
                email: String::new(),
                selected_activity: String::new(),
                message: None,
                message_visible: false,
                message_events: Vec::new(),
                list_replacements: 0,
                option_replacements: 0,
                form_resets: 0,
            }),
        })
    }

    pub fn views(self: &Arc<Self>) -> PortalViews {
        PortalViews::from_page(self)
    }

    pub fn fill_form(&self, email: &str, activity: &str) {
        let mut state = self.state();
        state.email = email.to_string();
        state.selected_activity = activity.to_string();
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, PageState> {
        self.state.lock().expect("page state")
    }

    pub fn visible_message(&self) -> Option<Feedback> {
        let state = self.state();
        state.message.clone().filter(|_| state.message_visible)
    }

    pub fn hide_events(&self) -> Vec<Instant> {
        self.state()
            .message_events
            .iter()
            .filter(|(_, event)| *event == MessageEvent::Hidden)
            .map(|(at, _)| *at)
            .collect()
    }
}

impl ActivityListView for RecordingPage {
    fn replace(&self, content: ListContent) {
        let mut state = self.state();
        state.list = content;
        state.list_replacements += 1;
    }
}

impl ActivitySelectView for RecordingPage {
    fn replace_options(&self, options: Vec<SelectOption>) {
        let mut state = self.state();
        state.options = options;
        state.option_replacements += 1;
    }
}

impl SignupFormView for RecordingPage {
    fn reset(&self) {
        let mut state = self.state();
        state.email.clear();
        state.selected_activity.clear();
        state.form_resets += 1;
    }
}

impl MessageView for RecordingPage {
    fn show(&self, feedback: &Feedback) {
        let mut state = self.state();
        state.message = Some(feedback.clone());
        state.message_visible = true;
        state
            .message_events
            .push((Instant::now(), MessageEvent::Shown(feedback.clone())));
    }

    fn hide(&self) {
        let mut state = self.state();
        state.message_visible = false;
        state
            .message_events
            .push((Instant::now(), MessageEvent::Hidden));
    }
}

pub type ScriptedReply = (Duration, Result<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub action: EnrollmentAction,
    pub activity: String,
    pub email: String,
}

/// Answers each call from a queue; an exhausted queue answers with a decode
/// failure.
#[derive(Default)]
pub struct ScriptedService {
    directories: Mutex<VecDeque<Result<Directory>>>,
    replies: Mutex<VecDeque<ScriptedReply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_directory(&self, raw: &str) {
        let directory = serde_json::from_str(raw).expect("fixture directory");
        self.directories
            .lock()
            .expect("directories")
            .push_back(Ok(directory));
    }

    pub fn push_directory_failure(&self) {
        self.directories
            .lock()
            .expect("directories")
            .push_back(Err(decode_failure()));
    }

    pub fn push_reply(&self, delay: Duration, reply: Result<String>) {
        self.replies
            .lock()
            .expect("replies")
            .push_back((delay, reply));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls").clone()
    }

    async fn answer(
        &self,
        action: EnrollmentAction,
        activity: &str,
        email: &str,
    ) -> Result<String> {
        self.calls.lock().expect("calls").push(RecordedCall {
            action,
            activity: activity.to_string(),
            email: email.to_string(),
        });
        let scripted = self.replies.lock().expect("replies").pop_front();
        let (delay, reply) = scripted.unwrap_or_else(|| (Duration::ZERO, Err(decode_failure())));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        reply
    }
}

#[async_trait]
impl ActivityService for ScriptedService {
    async fn list_activities(&self) -> Result<Directory> {
        self.directories
            .lock()
            .expect("directories")
            .pop_front()
            .unwrap_or_else(|| Err(decode_failure()))
    }

    async fn enroll(&self, activity: &str, email: &str) -> Result<String> {
        self.answer(EnrollmentAction::Signup, activity, email).await
    }

    async fn withdraw(&self, activity: &str, email: &str) -> Result<String> {
        self.answer(EnrollmentAction::Unregister, activity, email)
            .await
    }
}

pub fn decode_failure() -> ClientError {
    ClientError::Decode {
        url: "http://127.0.0.1:0/activities".to_string(),
        source: serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
    }
}

pub fn rejected(status: u16, detail: Option<&str>) -> ClientError {
    ClientError::Rejected {
        status,
        detail: detail.map(str::to_owned),
    }
}

pub const CHESS_ONLY: &str = r#"{
    "Chess Club": {"description":"d","schedule":"Mon","max_participants":10,"participants":["a@x.com"]}
}"#;

pub const THREE_ACTIVITIES: &str = r#"{
    "Programming Class": {"description":"Learn programming","schedule":"Tue 3:30 PM","max_participants":20,"participants":["emma@x.com","sophia@x.com"]},
    "Gym Class": {"description":"Physical education","schedule":"Wed 2:00 PM","max_participants":1,"participants":["john@x.com","olivia@x.com"]},
    "Art Studio": {"description":"Painting","schedule":"Thu 4:00 PM","max_participants":8,"participants":[]}
}"#;
