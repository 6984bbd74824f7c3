use anyhow::Result;
use owo_colors::OwoColorize;

use super::CourseStore;
use crate::render::render_course;

pub fn run(store: &CourseStore) -> Result<()> {
    let schedule = store.load()?;

    if schedule.is_empty() {
        println!(
            "{}",
            format!(
                "No courses in {}. Add one with `conflictcal add`.",
                store.path().display()
            )
            .dimmed()
        );
        return Ok(());
    }

    let conflicts = schedule.conflicts();

    for course in schedule.courses() {
        println!("{}", render_course(course, conflicts.contains(course.id())));
    }

    Ok(())
}
