//! Weekly calendar projection.
//!
//! Expands recurring courses into concrete events for one displayed week.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::conflict::ConflictSet;
use crate::course::{Course, CourseId};
use crate::error::{ConflictCalError, ConflictCalResult};
use crate::weekday::Weekday;

/// One occurrence of a course within the displayed week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// `{course_id}-{Weekday}`; stable across re-renders of the same week.
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub course_id: CourseId,
    pub weekday: Weekday,
    pub has_conflict: bool,
}

/// The Sunday on or before `anchor`, or `None` before the first representable Sunday.
pub fn week_start(anchor: NaiveDate) -> Option<NaiveDate> {
    let offset = u64::from(anchor.weekday().num_days_from_sunday());
    anchor.checked_sub_days(Days::new(offset))
}

/// The dates of the week containing `anchor`, Sunday through Saturday.
///
/// `None` when part of that week lies outside chrono's date range.
pub fn week_dates(anchor: NaiveDate) -> Option<[NaiveDate; 7]> {
    let sunday = week_start(anchor)?;

    let mut dates = [sunday; 7];
    for day in Weekday::ALL {
        dates[day.days_from_sunday() as usize] =
            sunday.checked_add_days(Days::new(u64::from(day.days_from_sunday())))?;
    }
    Some(dates)
}

/// Project courses onto the week containing `week_anchor`.
///
/// Emits one event per course per meeting day, sorted by start time then id.
pub fn project(
    courses: &[Course],
    conflict_ids: &ConflictSet,
    week_anchor: NaiveDate,
) -> ConflictCalResult<Vec<CalendarEvent>> {
    let dates = week_dates(week_anchor).ok_or(ConflictCalError::WeekOutOfRange(week_anchor))?;

    let mut events: Vec<CalendarEvent> = courses
        .iter()
        .flat_map(|course| {
            let has_conflict = conflict_ids.contains(course.id());
            course.days().iter().map(move |&day| {
                let date = dates[day.days_from_sunday() as usize];
                occurrence(course, day, date, has_conflict)
            })
        })
        .collect();

    events.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));

    tracing::debug!(
        week = %dates[0],
        events = events.len(),
        "projected courses onto week"
    );

    Ok(events)
}

fn occurrence(course: &Course, day: Weekday, date: NaiveDate, has_conflict: bool) -> CalendarEvent {
    let (start, end) = course.interval().on(date);

    CalendarEvent {
        id: format!("{}-{}", course.id(), day),
        title: course.name().to_string(),
        start,
        end,
        course_id: course.id().to_string(),
        weekday: day,
        has_conflict,
    }
}
