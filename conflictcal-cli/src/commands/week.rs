use anyhow::Result;
use chrono::NaiveDate;
use conflictcal_core::{ConflictCalError, week_dates};

use super::CourseStore;
use crate::render::render_week;

pub fn run(store: &CourseStore, anchor: NaiveDate) -> Result<()> {
    let schedule = store.load()?;
    let events = schedule.week(anchor)?;
    let dates = week_dates(anchor).ok_or(ConflictCalError::WeekOutOfRange(anchor))?;

    println!("{}", render_week(dates, &events));

    Ok(())
}
