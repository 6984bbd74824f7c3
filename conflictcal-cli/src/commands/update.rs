use anyhow::Result;
use conflictcal_core::CourseUpdate;
use owo_colors::OwoColorize;

use super::{CourseStore, parse_time_arg};

pub fn run(
    store: &CourseStore,
    id: &str,
    name: Option<String>,
    start: Option<&str>,
    end: Option<&str>,
    days: Option<Vec<String>>,
) -> Result<()> {
    let update = CourseUpdate {
        name,
        start_time: parse_time_arg(start)?,
        end_time: parse_time_arg(end)?,
        days,
    };

    if update == CourseUpdate::default() {
        anyhow::bail!("Nothing to update. Pass at least one of --name, --start, --end, --days");
    }

    let mut schedule = store.load()?;
    let course = schedule.update(id, &update)?.clone();
    store.save(&schedule)?;

    println!("{}", format!("  Updated: {}", course).yellow());

    Ok(())
}
