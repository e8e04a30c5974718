use serde::{Deserialize, Serialize};

use crate::types::Assignment;

/// What a calendar entry represents.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A scheduled class meeting.
    Class,

    /// An assignment due date.
    Assignment,

    /// An exam.
    Exam,

    /// Anything else.
    Event,
}

/// A single entry on the calendar view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Event id.
    pub id: String,

    /// Display title.
    pub title: String,

    /// What the entry represents.
    #[serde(rename = "type")]
    pub kind: EventKind,

    /// Color of the associated course, if any.
    #[serde(default)]
    pub course_color: Option<String>,

    /// Calendar date, "YYYY-MM-DD".
    pub date: String,

    /// Start time, if the event is time-bounded.
    #[serde(default)]
    pub start_time: Option<String>,

    /// End time, if the event is time-bounded.
    #[serde(default)]
    pub end_time: Option<String>,

    /// Location, if any.
    #[serde(default)]
    pub location: Option<String>,
}

impl CalendarEvent {
    /// Builds the calendar entry for an assignment's due date.
    pub fn from_assignment(assignment: &Assignment) -> Self {
        Self {
            id: assignment.id.clone(),
            title: assignment.title.clone(),
            kind: EventKind::Assignment,
            course_color: if assignment.course_color.is_empty() {
                None
            } else {
                Some(assignment.course_color.clone())
            },
            date: assignment.due_date.date().to_string(),
            start_time: None,
            end_time: None,
            location: None,
        }
    }
}
