use chrono::NaiveDate;
use conflictcal_core::{ConflictCalError, CourseUpdate, NewCourse, Schedule, ValidationError};
use pretty_assertions::assert_eq;

/// Build a schedule the way the API layer does: from JSON request bodies.
fn schedule_from_requests(bodies: &[&str]) -> Schedule {
    let mut schedule = Schedule::new();
    for body in bodies {
        let request: NewCourse = serde_json::from_str(body).unwrap();
        schedule.create(request).unwrap();
    }
    schedule
}

fn conflict_ids(schedule: &Schedule) -> Vec<String> {
    schedule.conflicts().iter().map(String::from).collect()
}

#[test]
fn back_to_back_courses_are_compatible() {
    let schedule = schedule_from_requests(&[
        r#"{"id":"A","name":"Algebra","startTime":540,"endTime":600,"days":["Monday"]}"#,
        r#"{"id":"B","name":"Biology","startTime":600,"endTime":660,"days":["Monday"]}"#,
    ]);
    assert!(schedule.conflicts().is_empty());
}

#[test]
fn overlap_on_a_shared_day_conflicts() {
    let schedule = schedule_from_requests(&[
        r#"{"id":"A","name":"Algebra","startTime":540,"endTime":630,"days":["Monday","Wednesday"]}"#,
        r#"{"id":"B","name":"Biology","startTime":600,"endTime":660,"days":["Monday"]}"#,
    ]);
    assert_eq!(conflict_ids(&schedule), vec!["A", "B"]);
}

#[test]
fn same_time_on_different_days_is_compatible() {
    let schedule = schedule_from_requests(&[
        r#"{"id":"A","name":"Algebra","startTime":540,"endTime":600,"days":["Monday"]}"#,
        r#"{"id":"B","name":"Biology","startTime":540,"endTime":600,"days":["Tuesday"]}"#,
    ]);
    assert!(schedule.conflicts().is_empty());
}

#[test]
fn chained_overlaps_flag_every_participant() {
    let schedule = schedule_from_requests(&[
        r#"{"id":"A","name":"Algebra","startTime":540,"endTime":600,"days":["Monday"]}"#,
        r#"{"id":"B","name":"Biology","startTime":570,"endTime":630,"days":["Monday"]}"#,
        r#"{"id":"C","name":"Chemistry","startTime":615,"endTime":660,"days":["Monday"]}"#,
    ]);

    assert_eq!(conflict_ids(&schedule), vec!["A", "B", "C"]);

    let pairs: Vec<(String, String)> = schedule
        .conflict_details()
        .into_iter()
        .map(|c| (c.first, c.second))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("A".to_string(), "B".to_string()),
            ("B".to_string(), "C".to_string()),
        ]
    );
}

#[test]
fn week_view_marks_conflicting_occurrences() {
    let schedule = schedule_from_requests(&[
        r#"{"id":"A","name":"Algebra","startTime":540,"endTime":630,"days":["Monday","Wednesday","Friday"]}"#,
        r#"{"id":"B","name":"Biology","startTime":600,"endTime":660,"days":["Monday"]}"#,
        r#"{"id":"C","name":"Chemistry","startTime":780,"endTime":840,"days":["Tuesday"]}"#,
    ]);

    let anchor = NaiveDate::from_ymd_opt(2025, 9, 3).unwrap();
    let events = schedule.week(anchor).unwrap();

    let summary: Vec<(&str, bool)> = events
        .iter()
        .map(|e| (e.id.as_str(), e.has_conflict))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("A-Monday", true),
            ("B-Monday", true),
            ("C-Tuesday", false),
            ("A-Wednesday", true),
            ("A-Friday", true),
        ]
    );
    assert_eq!(schedule.week(anchor).unwrap(), events);
}

#[test]
fn editing_a_course_resolves_its_conflict() {
    let mut schedule = schedule_from_requests(&[
        r#"{"id":"A","name":"Algebra","startTime":540,"endTime":630,"days":["Monday"]}"#,
        r#"{"id":"B","name":"Biology","startTime":600,"endTime":660,"days":["Monday"]}"#,
    ]);

    let update: CourseUpdate = serde_json::from_str(r#"{"days":["Thursday"]}"#).unwrap();
    schedule.update("B", &update).unwrap();
    assert!(schedule.conflicts().is_empty());

    schedule.delete("B").unwrap();
    assert_eq!(schedule.len(), 1);
}

#[test]
fn unknown_day_in_request_is_rejected() {
    let mut schedule = Schedule::new();
    let request: NewCourse = serde_json::from_str(
        r#"{"name":"Algebra","startTime":540,"endTime":600,"days":["Mon"]}"#,
    )
    .unwrap();

    let err = schedule.create(request).unwrap_err();
    assert!(matches!(
        err,
        ConflictCalError::Validation(ValidationError::UnknownDay(day)) if day == "Mon"
    ));
}
