use serde::{Deserialize, Serialize};

/// A single meeting block on a course schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseSchedule {
    /// Day of the week.
    pub day: String,

    /// Start time, e.g. "10:00".
    pub start_time: String,

    /// End time, e.g. "11:15".
    pub end_time: String,

    /// Meeting location.
    pub location: String,
}

/// An active course enrollment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Canvas course id.
    pub id: String,

    /// Full course name.
    pub name: String,

    /// Short code, e.g. "BIO-201".
    #[serde(default)]
    pub course_code: String,

    /// Enrollment term name.
    #[serde(default)]
    pub term: String,

    /// Instructor display name; empty when the backend could not
    /// resolve a teacher enrollment.
    #[serde(default)]
    pub instructor: String,

    /// Display color derived from the course name, "#rrggbb".
    #[serde(default)]
    pub color: String,

    /// Current score, if a student enrollment reported one.
    #[serde(default)]
    pub grade: Option<f64>,

    /// Credit hours.
    #[serde(default)]
    pub credits: u32,

    /// Weekly schedule; the backend currently always sends an empty list.
    #[serde(default)]
    pub schedule: Vec<CourseSchedule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_wire_form() {
        let json = r##"{
            "id": "1101",
            "name": "Intro Biology",
            "courseCode": "BIO-201",
            "term": "Spring 2026",
            "instructor": "",
            "color": "#3fa2c1",
            "grade": 91.5,
            "credits": 3,
            "schedule": []
        }"##;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.course_code, "BIO-201");
        assert_eq!(course.grade, Some(91.5));
        assert!(course.schedule.is_empty());
    }

    #[test]
    fn grade_null_is_none() {
        let json = r#"{"id": "1", "name": "Seminar", "grade": null}"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert!(course.grade.is_none());
        assert_eq!(course.credits, 0);
    }
}
