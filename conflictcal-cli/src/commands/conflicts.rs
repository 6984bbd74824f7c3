use anyhow::Result;
use owo_colors::OwoColorize;

use super::CourseStore;
use crate::render::render_conflict;

pub fn run(store: &CourseStore, json: bool) -> Result<()> {
    let schedule = store.load()?;
    let conflicts = schedule.conflicts();

    if json {
        println!("{}", serde_json::to_string_pretty(&conflicts)?);
        return Ok(());
    }

    if conflicts.is_empty() {
        println!("{}", "  No conflicts".green());
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "  {} of {} courses clash:",
            conflicts.len(),
            schedule.len()
        )
        .red()
    );

    for conflict in schedule.conflict_details() {
        // Both ids come from the schedule itself
        let (Some(first), Some(second)) =
            (schedule.get(&conflict.first), schedule.get(&conflict.second))
        else {
            continue;
        };
        println!("   {}", render_conflict(&conflict, first, second));
    }

    Ok(())
}
