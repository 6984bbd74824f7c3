use anyhow::Result;
use owo_colors::OwoColorize;

use super::CourseStore;

pub fn run(store: &CourseStore, id: &str) -> Result<()> {
    let mut schedule = store.load()?;
    let course = schedule.delete(id)?;
    store.save(&schedule)?;

    println!("{}", format!("  Removed: {}", course.name()).red());

    Ok(())
}
