//! Pairwise overlap detection and conflict aggregation.
//!
//! Every unordered pair of courses is compared, so detection is O(n²) in the
//! number of courses. A student's course load is tens of courses at most,
//! which keeps the exhaustive scan well within budget; a sweep line keyed by
//! weekday would only pay off for far larger collections.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::course::{Course, CourseId};
use crate::time_interval::TimeInterval;
use crate::weekday::Weekday;

/// Whether two courses clash: they share a day and their intervals overlap.
///
/// Courses that end exactly when the other starts do not clash.
pub fn conflicts(a: &Course, b: &Course) -> bool {
    !a.days().is_disjoint(b.days()) && a.interval().overlaps(&b.interval())
}

/// Ids of every course involved in at least one conflict.
///
/// Iterates in id order, independent of the order courses were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConflictSet(BTreeSet<CourseId>);

impl ConflictSet {
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<CourseId> for ConflictSet {
    fn from_iter<I: IntoIterator<Item = CourseId>>(iter: I) -> Self {
        ConflictSet(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ConflictSet {
    type Item = &'a CourseId;
    type IntoIter = std::collections::btree_set::Iter<'a, CourseId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Collect the ids of all courses that clash with at least one other course.
pub fn compute_conflicts(courses: &[Course]) -> ConflictSet {
    let mut ids = BTreeSet::new();

    for (a, b) in unordered_pairs(courses) {
        if conflicts(a, b) {
            ids.insert(a.id().to_string());
            ids.insert(b.id().to_string());
        }
    }

    tracing::debug!(
        courses = courses.len(),
        conflicting = ids.len(),
        "computed conflict set"
    );

    ConflictSet(ids)
}

/// Why two courses clash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub first: CourseId,
    pub second: CourseId,
    /// Days both courses meet on, Sunday-first.
    pub days: Vec<Weekday>,
    /// The window during which both courses run.
    pub overlap: TimeInterval,
}

/// Describe the clash between two courses, if they clash.
pub fn conflict_between(a: &Course, b: &Course) -> Option<Conflict> {
    if !conflicts(a, b) {
        return None;
    }

    Some(Conflict {
        first: a.id().to_string(),
        second: b.id().to_string(),
        days: a.shared_days(b),
        overlap: a.interval().intersection(&b.interval())?,
    })
}

/// Every clashing pair, in input order.
pub fn find_conflicts(courses: &[Course]) -> Vec<Conflict> {
    unordered_pairs(courses)
        .filter_map(|(a, b)| conflict_between(a, b))
        .collect()
}

/// Pairs `(courses[i], courses[j])` with `i < j`. A course is never paired with itself.
fn unordered_pairs(courses: &[Course]) -> impl Iterator<Item = (&Course, &Course)> {
    courses
        .iter()
        .enumerate()
        .flat_map(move |(i, a)| courses[i + 1..].iter().map(move |b| (a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::NewCourse;
    use crate::time_interval::parse_clock_time;
    use pretty_assertions::assert_eq;

    fn course(id: &str, start: &str, end: &str, days: &[&str]) -> Course {
        Course::create(
            id,
            NewCourse {
                id: None,
                name: id.to_string(),
                start_time: parse_clock_time(start).unwrap(),
                end_time: parse_clock_time(end).unwrap(),
                days: days.iter().map(|d| d.to_string()).collect(),
            },
        )
        .unwrap()
    }

    fn ids(set: &ConflictSet) -> Vec<&str> {
        set.iter().collect()
    }

    #[test]
    fn back_to_back_courses_do_not_conflict() {
        let a = course("A", "09:00", "10:00", &["Monday"]);
        let b = course("B", "10:00", "11:00", &["Monday"]);
        assert!(!conflicts(&a, &b));
        assert!(compute_conflicts(&[a, b]).is_empty());
    }

    #[test]
    fn overlapping_courses_on_a_shared_day_conflict() {
        let a = course("A", "09:00", "10:30", &["Monday", "Wednesday"]);
        let b = course("B", "10:00", "11:00", &["Monday"]);
        assert!(conflicts(&a, &b));
        assert_eq!(ids(&compute_conflicts(&[a, b])), vec!["A", "B"]);
    }

    #[test]
    fn identical_times_on_different_days_do_not_conflict() {
        let a = course("A", "09:00", "10:00", &["Monday"]);
        let b = course("B", "09:00", "10:00", &["Tuesday"]);
        assert!(!conflicts(&a, &b));
    }

    #[test]
    fn contained_interval_conflicts() {
        let a = course("A", "08:00", "12:00", &["Friday"]);
        let b = course("B", "09:00", "10:00", &["Friday"]);
        assert!(conflicts(&a, &b));
        assert!(conflicts(&b, &a));
    }

    #[test]
    fn each_course_needs_its_own_direct_conflict() {
        let a = course("A", "09:00", "10:00", &["Monday"]);
        let b = course("B", "09:30", "10:30", &["Monday"]);
        let c = course("C", "10:15", "11:00", &["Monday"]);

        assert!(!conflicts(&a, &c));
        assert_eq!(ids(&compute_conflicts(&[a, b, c])), vec!["A", "B", "C"]);
    }

    #[test]
    fn courses_without_conflicts_are_left_out() {
        let a = course("A", "09:00", "10:00", &["Monday"]);
        let b = course("B", "09:30", "10:30", &["Monday"]);
        let c = course("C", "13:00", "14:00", &["Monday"]);
        assert_eq!(ids(&compute_conflicts(&[a, b, c])), vec!["A", "B"]);
    }

    #[test]
    fn ids_appear_once_however_many_conflicts() {
        let a = course("A", "09:00", "12:00", &["Monday"]);
        let b = course("B", "09:00", "10:00", &["Monday"]);
        let c = course("C", "10:00", "11:00", &["Monday"]);
        let d = course("D", "11:00", "12:00", &["Monday"]);

        let set = compute_conflicts(&[a, b, c, d]);
        assert_eq!(set.len(), 4);
        assert_eq!(ids(&set), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn single_course_never_conflicts() {
        let a = course("A", "09:00", "10:00", &["Monday"]);
        assert!(compute_conflicts(&[a]).is_empty());
        assert!(compute_conflicts(&[]).is_empty());
    }

    #[test]
    fn describes_shared_days_and_overlap() {
        let a = course("A", "09:00", "10:30", &["Monday", "Wednesday", "Friday"]);
        let b = course("B", "10:00", "11:00", &["Friday", "Monday"]);

        assert_eq!(
            conflict_between(&a, &b),
            Some(Conflict {
                first: "A".to_string(),
                second: "B".to_string(),
                days: vec![Weekday::Monday, Weekday::Friday],
                overlap: TimeInterval::from_clock("10:00", "10:30").unwrap(),
            })
        );
    }

    #[test]
    fn finds_every_clashing_pair() {
        let a = course("A", "09:00", "10:00", &["Monday"]);
        let b = course("B", "09:30", "10:30", &["Monday"]);
        let c = course("C", "10:15", "11:00", &["Monday"]);

        let pairs: Vec<(String, String)> = find_conflicts(&[a, b, c])
            .into_iter()
            .map(|c| (c.first, c.second))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("A".to_string(), "B".to_string()),
                ("B".to_string(), "C".to_string())
            ]
        );
    }

    #[test]
    fn conflict_set_serializes_as_id_list() {
        let set: ConflictSet = ["B".to_string(), "A".to_string()].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["A","B"]"#);
    }
}
