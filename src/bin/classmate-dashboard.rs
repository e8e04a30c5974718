//! One-shot dashboard summary for the ClassMate backend.
//!
//! Authenticates against Canvas through the backend, loads courses and
//! assignments concurrently, prints a summary, and logs out.
//!
//! # Usage
//!
//! ```bash
//! export CANVAS_URL=https://canvas.example.edu
//! export CANVAS_API_KEY=...
//! classmate-dashboard
//!
//! # Also ask the backend for a study plan covering the coming week
//! classmate-dashboard --study-plan
//! ```

use std::env;

use arrrg::CommandLine;
use arrrg_derive::CommandLine;
use time::{Duration, OffsetDateTime};

use classmate::types::{Assignment, Course, StudyPlanRequest};
use classmate::{Classmate, Error};

/// Command-line arguments for the classmate-dashboard tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
struct DashboardArgs {
    /// Backend API base URL.
    #[arrrg(optional, "Backend API base URL (default: $CLASSMATE_API_URL)", "URL")]
    api_url: Option<String>,

    /// Canvas instance URL.
    #[arrrg(optional, "Canvas instance URL (default: $CANVAS_URL)", "URL")]
    canvas_url: Option<String>,

    /// Canvas API key.
    #[arrrg(optional, "Canvas API key (default: $CANVAS_API_KEY)", "KEY")]
    api_key: Option<String>,

    /// Request a study plan as well.
    #[arrrg(flag, "Also request a study plan for the coming week")]
    study_plan: bool,
}

/// Main entry point for the classmate-dashboard application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = DashboardArgs::from_command_line_relaxed("classmate-dashboard [OPTIONS]");

    let canvas_url = args
        .canvas_url
        .or_else(|| env::var("CANVAS_URL").ok())
        .ok_or_else(|| {
            Error::authentication("Canvas URL not provided and CANVAS_URL not set")
        })?;
    let api_key = args
        .api_key
        .or_else(|| env::var("CANVAS_API_KEY").ok())
        .ok_or_else(|| {
            Error::authentication("Canvas API key not provided and CANVAS_API_KEY not set")
        })?;

    let mut client = Classmate::new(args.api_url)?;
    let user = client.login(&canvas_url, &api_key).await?;
    println!("Signed in as {} <{}>\n", user.name, user.email);

    // Courses and assignments have no ordering dependency; load both
    // at once.
    let (courses, assignments) = futures::try_join!(client.courses(), client.assignments())?;

    print_courses(&courses);
    print_upcoming(&assignments);

    if args.study_plan {
        let plan = client.generate_study_plan(&StudyPlanRequest::default()).await?;
        println!(
            "Study plan {} to {} ({:.1}h planned):",
            plan.week_start,
            plan.week_end,
            plan.total_hours()
        );
        for day in &plan.daily_plans {
            println!("  {} ({}):", day.day_name, day.date);
            for task in &day.tasks {
                println!("    [{:?}] {} - {} ({}h)", task.priority, task.subject, task.task, task.duration);
            }
        }
        for tip in &plan.tips {
            println!("  tip: {tip}");
        }
        println!();
    }

    client.logout().await?;
    Ok(())
}

fn print_courses(courses: &[Course]) {
    println!("Courses ({}):", courses.len());
    for course in courses {
        let grade = course
            .grade
            .map(|g| format!("{g:.1}%"))
            .unwrap_or_else(|| "-".to_string());
        println!("  {:<12} {}  (grade: {})", course.course_code, course.name, grade);
    }
    println!();
}

fn print_upcoming(assignments: &[Assignment]) {
    let now = OffsetDateTime::now_utc();
    let mut upcoming: Vec<&Assignment> = assignments
        .iter()
        .filter(|a| a.due_within(now, Duration::weeks(1)))
        .collect();
    upcoming.sort_by_key(|a| a.due_date);

    println!("Due this week ({}):", upcoming.len());
    for assignment in upcoming {
        println!(
            "  {}  {} - {} ({} pts)",
            assignment.due_date.date(),
            assignment.course_name,
            assignment.title,
            assignment.points
        );
    }
    println!();
}
