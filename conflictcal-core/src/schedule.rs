//! A user's course collection.
//!
//! `Schedule` owns an ordered snapshot of courses and applies create, update
//! and delete requests to it. Conflict detection and projection never mutate
//! it; they run on borrowed slices of the current snapshot.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::calendar::{self, CalendarEvent};
use crate::conflict::{self, Conflict, ConflictSet};
use crate::course::{Course, CourseUpdate, NewCourse};
use crate::error::{ConflictCalError, ConflictCalResult, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    courses: Vec<Course>,
}

impl Schedule {
    pub fn new() -> Self {
        Schedule::default()
    }

    /// Build a schedule from already validated courses, rejecting repeated ids.
    pub fn from_courses(courses: Vec<Course>) -> ConflictCalResult<Self> {
        for (i, course) in courses.iter().enumerate() {
            if courses[..i].iter().any(|c| c.id() == course.id()) {
                return Err(ConflictCalError::DuplicateId(course.id().to_string()));
            }
        }
        Ok(Schedule { courses })
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn into_courses(self) -> Vec<Course> {
        self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id() == id)
    }

    /// Validate and append a new course.
    ///
    /// A fresh id is generated unless the request carries one. Names must be
    /// unique, ignoring case and surrounding whitespace.
    pub fn create(&mut self, request: NewCourse) -> ConflictCalResult<&Course> {
        let id = match request.id.clone() {
            Some(id) => {
                if self.get(&id).is_some() {
                    return Err(ConflictCalError::DuplicateId(id));
                }
                id
            }
            None => Uuid::new_v4().to_string(),
        };

        self.ensure_unique_name(&request.name, None)?;
        let course = Course::create(id, request)?;

        tracing::debug!(id = course.id(), name = course.name(), "created course");

        let index = self.courses.len();
        self.courses.push(course);
        Ok(&self.courses[index])
    }

    /// Replace the fields named in `update` on the course with `id`.
    pub fn update(&mut self, id: &str, update: &CourseUpdate) -> ConflictCalResult<&Course> {
        let index = self.index_of(id)?;

        if let Some(name) = &update.name {
            self.ensure_unique_name(name, Some(id))?;
        }
        let updated = self.courses[index].apply(update)?;

        tracing::debug!(id, "updated course");

        self.courses[index] = updated;
        Ok(&self.courses[index])
    }

    /// Remove and return the course with `id`.
    pub fn delete(&mut self, id: &str) -> ConflictCalResult<Course> {
        let index = self.index_of(id)?;
        let course = self.courses.remove(index);

        tracing::debug!(id, "deleted course");

        Ok(course)
    }

    /// Ids of all courses that clash with another course.
    pub fn conflicts(&self) -> ConflictSet {
        conflict::compute_conflicts(&self.courses)
    }

    /// Every clashing pair with its shared days and overlap.
    pub fn conflict_details(&self) -> Vec<Conflict> {
        conflict::find_conflicts(&self.courses)
    }

    /// Calendar events for the week containing `anchor`.
    pub fn week(&self, anchor: NaiveDate) -> ConflictCalResult<Vec<CalendarEvent>> {
        calendar::project(&self.courses, &self.conflicts(), anchor)
    }

    fn index_of(&self, id: &str) -> ConflictCalResult<usize> {
        self.courses
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| ConflictCalError::CourseNotFound(id.to_string()))
    }

    fn ensure_unique_name(&self, name: &str, except_id: Option<&str>) -> ConflictCalResult<()> {
        let taken = self
            .courses
            .iter()
            .filter(|c| Some(c.id()) != except_id)
            .any(|c| c.has_name(name));

        if taken {
            return Err(ValidationError::DuplicateName(name.trim().to_string()).into());
        }
        Ok(())
    }
}
