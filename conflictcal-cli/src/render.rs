//! Terminal rendering for conflictcal types.
//!
//! Conflicting courses and events are shown in red, everything else in green.

use chrono::NaiveDate;
use conflictcal_core::{CalendarEvent, Conflict, Course, Weekday};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for CalendarEvent {
    fn render(&self) -> String {
        let time = format!("{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"));

        if self.has_conflict {
            format!("{} {} {}", time.dimmed(), self.title.red(), "(conflict)".red())
        } else {
            format!("{} {}", time.dimmed(), self.title.green())
        }
    }
}

/// One course line for `list`, marked when it clashes with another course.
pub fn render_course(course: &Course, in_conflict: bool) -> String {
    let marker = if in_conflict {
        "!".red().to_string()
    } else {
        "•".green().to_string()
    };
    let label = course.to_string();
    let label = if in_conflict {
        label.red().to_string()
    } else {
        label
    };

    format!("{} {} {}", marker, label, course.id().dimmed())
}

/// Explain a clash: which courses, on which days, and for how long.
pub fn render_conflict(conflict: &Conflict, first: &Course, second: &Course) -> String {
    let days: Vec<&str> = conflict.days.iter().map(|d| d.short_name()).collect();

    format!(
        "{} {} {} {} {}",
        first.name().red(),
        "overlaps".dimmed(),
        second.name().red(),
        days.join("/"),
        format!(
            "{} ({} min)",
            conflict.overlap,
            conflict.overlap.duration_minutes()
        )
        .dimmed()
    )
}

/// Weekly agenda: one block per day, Sunday first.
pub fn render_week(dates: [NaiveDate; 7], events: &[CalendarEvent]) -> String {
    let mut lines = vec![format!("Week of {}", dates[0].format("%a %Y-%m-%d")).bold().to_string()];

    for (day, date) in Weekday::ALL.into_iter().zip(dates) {
        lines.push(format!("  {} {}", day.short_name(), date.format("%m/%d")));

        let mut any = false;
        for event in events.iter().filter(|e| e.weekday == day) {
            lines.push(format!("     {}", event.render()));
            any = true;
        }
        if !any {
            lines.push(format!("     {}", "-".dimmed()));
        }
    }

    let clashing = events.iter().filter(|e| e.has_conflict).count();
    if clashing > 0 {
        lines.push(String::new());
        lines.push(
            format!("  {} {} in conflict", clashing, pluralize("class", clashing))
                .red()
                .to_string(),
        );
    }

    lines.join("\n")
}

/// Top-level error line, including the chain of causes.
pub fn render_error(error: &anyhow::Error) -> String {
    format!("{} {:#}", "Error:".bold(), error).red().to_string()
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else if word.ends_with('s') {
        format!("{word}es")
    } else {
        format!("{word}s")
    }
}
