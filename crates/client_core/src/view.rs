//! Render model and the view seams the controller writes into.
//!
//! A front end implements the four view traits on whatever holds its widgets;
//! the controller only ever replaces whole regions, it never patches them.

use std::sync::Arc;

use shared::domain::{Activity, Directory};

pub const NO_PARTICIPANTS_PLACEHOLDER: &str = "No participants yet";
pub const SELECT_PLACEHOLDER_LABEL: &str = "-- Select an activity --";
pub const DIRECTORY_LOAD_FAILURE: &str = "Failed to load activities. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantsSection {
    Roster(Vec<String>),
    /// Rendered as [`NO_PARTICIPANTS_PLACEHOLDER`].
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: ParticipantsSection,
}

impl ActivityCard {
    pub fn from_activity(name: &str, activity: &Activity) -> Self {
        let participants = match activity.participants() {
            [] => ParticipantsSection::Empty,
            roster => ParticipantsSection::Roster(roster.to_vec()),
        };
        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        }
    }

    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    Loading,
    Cards(Vec<ActivityCard>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: SELECT_PLACEHOLDER_LABEL.to_string(),
        }
    }

    pub fn activity(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FeedbackKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FeedbackKind::Error,
        }
    }
}

/// Cards and selector options for one directory snapshot, in listing order.
/// The selector always leads with the placeholder option.
pub fn render_directory(directory: &Directory) -> (Vec<ActivityCard>, Vec<SelectOption>) {
    let mut options = Vec::with_capacity(directory.len() + 1);
    options.push(SelectOption::placeholder());

    let cards = directory
        .iter()
        .map(|(name, activity)| {
            options.push(SelectOption::activity(name));
            ActivityCard::from_activity(name, activity)
        })
        .collect();

    (cards, options)
}

pub trait ActivityListView: Send + Sync {
    fn replace(&self, content: ListContent);
}

pub trait ActivitySelectView: Send + Sync {
    fn replace_options(&self, options: Vec<SelectOption>);
}

pub trait SignupFormView: Send + Sync {
    /// Clears the email field and returns the selector to its placeholder.
    fn reset(&self);
}

pub trait MessageView: Send + Sync {
    fn show(&self, feedback: &Feedback);
    fn hide(&self);
}

/// The four view handles a page hands to the controller once at startup.
#[derive(Clone)]
pub struct PortalViews {
    pub list: Arc<dyn ActivityListView>,
    pub select: Arc<dyn ActivitySelectView>,
    pub form: Arc<dyn SignupFormView>,
    pub message: Arc<dyn MessageView>,
}

impl PortalViews {
    /// Uses one object for every region, which is how most pages hold them.
    pub fn from_page<P>(page: &Arc<P>) -> Self
    where
        P: ActivityListView + ActivitySelectView + SignupFormView + MessageView + 'static,
    {
        Self {
            list: page.clone(),
            select: page.clone(),
            form: page.clone(),
            message: page.clone(),
        }
    }
}
