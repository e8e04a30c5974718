// Public modules
pub mod assignment;
pub mod calendar_event;
pub mod course;
pub mod priority;
pub mod study_plan;
pub mod user_profile;

// Re-exports
pub use assignment::{Assignment, AssignmentStatus};
pub use calendar_event::{CalendarEvent, EventKind};
pub use course::{Course, CourseSchedule};
pub use priority::Priority;
pub use study_plan::{DailyPlan, StudyPlan, StudyPlanRequest, StudyTask};
pub use user_profile::{LoginResponse, UserProfile};
