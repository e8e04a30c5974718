use serde::{Deserialize, Serialize};

use crate::types::Priority;

/// One actionable item on a daily study plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudyTask {
    /// Suggested start time; the generator does not always emit one.
    #[serde(default)]
    pub time: Option<String>,

    /// Estimated duration in hours.
    pub duration: f64,

    /// Course the task belongs to.
    pub subject: String,

    /// The specific action to take.
    pub task: String,

    /// Priority based on due-date proximity.
    pub priority: Priority,
}

/// Tasks scheduled for a single day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    /// Calendar date, "YYYY-MM-DD".
    pub date: String,

    /// Weekday name, e.g. "Monday".
    pub day_name: String,

    /// The day's tasks.
    pub tasks: Vec<StudyTask>,

    /// Sum of task durations for the day, in hours.
    #[serde(default)]
    pub total_hours: f64,
}

/// A generated study plan covering one date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    /// Plan id assigned by the backend.
    pub id: String,

    /// Generation timestamp; the backend emits a timezone-less ISO
    /// string, so it is not parsed here.
    #[serde(default)]
    pub generated_at: String,

    /// First day covered, "YYYY-MM-DD".
    pub week_start: String,

    /// Last day covered, "YYYY-MM-DD".
    pub week_end: String,

    /// Per-day plans in date order.
    pub daily_plans: Vec<DailyPlan>,

    /// Study tips for the period.
    #[serde(default)]
    pub tips: Vec<String>,
}

impl StudyPlan {
    /// Total planned hours across all days.
    pub fn total_hours(&self) -> f64 {
        self.daily_plans.iter().map(|day| day.total_hours).sum()
    }
}

/// Request body for `POST /api/study-plan/generate`.
///
/// Both bounds are optional; the backend defaults to the week starting
/// now.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlanRequest {
    /// First day to plan for, ISO format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Last day to plan for, ISO format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn study_plan_wire_form() {
        let json = r#"{
            "id": "plan_1756000000.0",
            "generatedAt": "2026-08-24T10:00:00",
            "weekStart": "2026-08-24",
            "weekEnd": "2026-08-30",
            "dailyPlans": [
                {
                    "date": "2026-08-24",
                    "dayName": "Monday",
                    "tasks": [
                        {
                            "duration": 2,
                            "subject": "Intro Biology",
                            "task": "Complete Chapter 9 Reading Guide questions 1-15",
                            "priority": "high"
                        }
                    ],
                    "totalHours": 2
                }
            ],
            "tips": ["Start with the highest-point assignment."]
        }"#;
        let plan: StudyPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.daily_plans.len(), 1);
        assert_eq!(plan.daily_plans[0].tasks[0].priority, Priority::High);
        assert!(plan.daily_plans[0].tasks[0].time.is_none());
        assert_eq!(plan.total_hours(), 2.0);
    }

    #[test]
    fn request_omits_unset_bounds() {
        let request = StudyPlanRequest::default();
        assert_eq!(serde_json::to_string(&request).unwrap(), "{}");

        let request = StudyPlanRequest {
            start_date: Some("2026-08-24".to_string()),
            end_date: None,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"startDate":"2026-08-24"}"#
        );
    }
}
