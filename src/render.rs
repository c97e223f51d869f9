//! Renderer view-models
//!
//! Turns an [`ActivitySnapshot`] into what the page shows: one card per
//! activity and the options of the activity select. The UI maps these
//! one-to-one onto DOM nodes, so everything observable about a render
//! (texts, counts, order, the values a remove button is bound to) lives here.

use crate::model::{Activity, ActivitySnapshot};

/// Shown in the list area until the first fetch completes
pub const LOADING_TEXT: &str = "Loading activities...";

/// Replaces the whole list area when a fetch fails
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// Participants section of a card with nobody signed up
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

/// Label of the blank option at the top of the activity select
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// One participant line with its remove control.
///
/// Owns the activity name and email it was rendered with; the remove action
/// uses these values, never a later lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub activity: String,
    pub email: String,
}

impl ParticipantRow {
    /// Tooltip of the remove control
    pub fn remove_title(&self) -> String {
        format!("Unregister {}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantsView {
    Empty,
    Listed(Vec<ParticipantRow>),
}

/// Everything one activity card displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: ParticipantsView,
}

impl ActivityCardView {
    pub fn from_activity(activity: &Activity) -> Self {
        let participants = if activity.participants.is_empty() {
            ParticipantsView::Empty
        } else {
            ParticipantsView::Listed(
                activity
                    .participants
                    .iter()
                    .map(|email| ParticipantRow {
                        activity: activity.name.clone(),
                        email: email.clone(),
                    })
                    .collect(),
            )
        };

        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        }
    }

    pub fn schedule_line(&self) -> String {
        format!("Schedule: {}", self.schedule)
    }

    pub fn availability_line(&self) -> String {
        format!("Availability: {} spots left", self.spots_left)
    }
}

/// Contents of the activities list area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListView {
    #[default]
    Loading,
    Loaded(Vec<ActivityCardView>),
    Failed,
}

impl ListView {
    pub fn from_snapshot(snapshot: &ActivitySnapshot) -> Self {
        ListView::Loaded(snapshot.iter().map(ActivityCardView::from_activity).collect())
    }
}

/// Options of the activity select after a refresh
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOptions {
    /// Activity names in snapshot order; the blank placeholder is implied first
    pub options: Vec<String>,
    /// Selection to restore; `None` selects the placeholder
    pub selected: Option<String>,
}

impl SelectOptions {
    /// Rebuild the options, keeping `previous` selected if it is still offered
    pub fn build(snapshot: &ActivitySnapshot, previous: &str) -> Self {
        let options: Vec<String> = snapshot.names().map(str::to_string).collect();
        let selected = options
            .iter()
            .find(|name| !previous.is_empty() && name.as_str() == previous)
            .cloned();
        Self { options, selected }
    }

    /// Value of the select element; empty for the placeholder
    pub fn selected_value(&self) -> &str {
        self.selected.as_deref().unwrap_or("")
    }
}
