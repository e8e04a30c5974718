use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::types::Priority;

/// Submission state of an assignment, as computed by the backend from
/// the due date and the user's submission record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    /// Due date is in the future and nothing was submitted.
    Upcoming,

    /// Submitted but not yet graded.
    Submitted,

    /// Submitted and graded.
    Graded,

    /// Due date has passed without a submission.
    Past,
}

/// A course assignment with its due date and submission state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Canvas assignment id.
    pub id: String,

    /// Id of the owning course.
    pub course_id: String,

    /// Name of the owning course.
    pub course_name: String,

    /// Display color of the owning course, "#rrggbb".
    #[serde(default)]
    pub course_color: String,

    /// Assignment title.
    pub title: String,

    /// Description with HTML stripped by the backend.
    #[serde(default)]
    pub description: String,

    /// Due date; assignments without one are filtered out server-side.
    #[serde(with = "crate::utils::time")]
    pub due_date: OffsetDateTime,

    /// Points possible.
    #[serde(default)]
    pub points: f64,

    /// First submission type, e.g. "online_upload".
    #[serde(default)]
    pub submission_type: String,

    /// Submission state.
    pub status: AssignmentStatus,

    /// Priority, when a front-end has assigned one; never sent by the
    /// backend itself.
    #[serde(default)]
    pub priority: Option<Priority>,

    /// Grade received, if graded.
    #[serde(default)]
    pub grade: Option<f64>,
}

impl Assignment {
    /// Returns true if the assignment is still awaiting submission.
    pub fn is_upcoming(&self) -> bool {
        self.status == AssignmentStatus::Upcoming
    }

    /// Returns true if the assignment is due within `window` of `now`.
    ///
    /// Already-due assignments are excluded.
    pub fn due_within(&self, now: OffsetDateTime, window: Duration) -> bool {
        self.due_date >= now && self.due_date <= now + window
    }
}
