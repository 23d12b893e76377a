//! Example demonstrating study plan generation with the library API.
//!
//! This example shows how to:
//! 1. Build a plan request with assignments and free time blocks
//! 2. Run the planner
//! 3. Inspect the scheduled sessions
//!
//! To run this example:
//! ```bash
//! cargo run --example generate_plan
//! ```

use chrono::{Duration, Utc};

use study_planner_rust::routes::plan::{
    Assignment, GeneratePlanRequest, StudentProfile, TimeSlot,
};
use study_planner_rust::services::generate_plan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Study Plan Generation ===\n");

    let today = Utc::now().date_naive();

    // Step 1: Describe the student and their workload
    println!("1. Building the request...");
    let request = GeneratePlanRequest {
        student_profile: StudentProfile {
            student_id: "s-42".to_string(),
            major: "computer science".to_string(),
            study_hours_per_week: 12,
            preferred_study_times: vec!["evening".to_string()],
        },
        assignments: vec![
            Assignment {
                course_name: "CS101".to_string(),
                assignment_title: "Problem set 3".to_string(),
                due_date: (today + Duration::days(1)).to_string(),
                estimated_difficulty: "hard".to_string(),
                estimated_hours: 3,
            },
            Assignment {
                course_name: "HIST1".to_string(),
                assignment_title: "Essay draft".to_string(),
                due_date: (today + Duration::days(9)).to_string(),
                estimated_difficulty: "medium".to_string(),
                estimated_hours: 4,
            },
            Assignment {
                course_name: "MATH2".to_string(),
                assignment_title: "Worksheet".to_string(),
                due_date: (today + Duration::days(2)).to_string(),
                estimated_difficulty: "easy".to_string(),
                estimated_hours: 1,
            },
        ],
        calendar_availability: vec![
            TimeSlot {
                scheduled_date: today.to_string(),
                start_time: "18:00".to_string(),
                end_time: "20:00".to_string(),
            },
            TimeSlot {
                scheduled_date: (today + Duration::days(1)).to_string(),
                start_time: "18:00".to_string(),
                end_time: "20:00".to_string(),
            },
            TimeSlot {
                scheduled_date: (today + Duration::days(2)).to_string(),
                start_time: "13:00".to_string(),
                end_time: "16:00".to_string(),
            },
        ],
    };
    println!(
        "   {} assignments, {} free blocks\n",
        request.assignments.len(),
        request.calendar_availability.len()
    );

    // Step 2: Run the planner
    println!("2. Generating the plan...");
    let plan = generate_plan(today, &request)?;
    println!("   {}\n", plan.weekly_overview);

    // Step 3: Inspect the result
    println!("3. Scheduled sessions:\n");
    for session in &plan.study_sessions {
        println!(
            "   • {} {}-{}  {} / {} [{}]",
            session.scheduled_date,
            session.start_time,
            session.end_time,
            session.course_name,
            session.assignment_title,
            session.priority_level
        );
    }
    println!();
    println!("   Total scheduled hours: {}", plan.total_scheduled_hours);
    println!("\n=== Done ===");

    Ok(())
}
