use anyhow::Result;
use conflictcal_core::NewCourse;
use conflictcal_core::time_interval::parse_clock_time;
use owo_colors::OwoColorize;

use super::CourseStore;

pub fn run(
    store: &CourseStore,
    name: String,
    start: &str,
    end: &str,
    days: Vec<String>,
) -> Result<()> {
    let mut schedule = store.load()?;

    let request = NewCourse {
        id: None,
        name,
        start_time: parse_clock_time(start)?,
        end_time: parse_clock_time(end)?,
        days,
    };

    let course = schedule.create(request)?.clone();
    store.save(&schedule)?;

    println!("{}", format!("  Created: {}", course).green());
    println!("{}", format!("  id: {}", course.id()).dimmed());

    if schedule.conflicts().contains(course.id()) {
        println!(
            "{}",
            "  Heads up: this course clashes with your schedule. Run `conflictcal conflicts`."
                .red()
        );
    }

    Ok(())
}
