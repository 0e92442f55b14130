use super::StudentStore;
use crate::error::{RosterError, Result};
use crate::model::{NewStudent, StudentId, StudentPatch, StudentRecord};
use chrono::Utc;
use tracing::{debug, info, warn};

/// Issues ids from the millisecond clock. Two ids requested within the same
/// millisecond (or after the clock stepped back) still come out strictly
/// increasing.
#[derive(Debug, Default)]
pub struct IdSource {
    last: i64,
}

impl IdSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_at(&mut self, now_millis: i64) -> Result<StudentId> {
        let floor = self
            .last
            .checked_add(1)
            .ok_or_else(|| RosterError::Api(format!("no student id left after {}", self.last)))?;
        self.last = now_millis.max(floor);
        Ok(StudentId::new(self.last.to_string()))
    }

    pub fn next(&mut self) -> Result<StudentId> {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Keeps future ids above an id that entered the store some other way.
    fn observe(&mut self, id: &StudentId) {
        if let Ok(n) = id.as_str().parse::<i64>() {
            self.last = self.last.max(n);
        }
    }
}

/// Ordered in-memory storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    students: Vec<StudentRecord>,
    ids: IdSource,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from existing records, kept in the given order. A record whose
    /// id is already taken by an earlier one is dropped.
    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        let mut ids = IdSource::new();
        let mut students: Vec<StudentRecord> = Vec::with_capacity(records.len());
        for mut record in records {
            if students.iter().any(|s| s.id == record.id) {
                warn!(id = %record.id, name = %record.name, "dropping student with duplicate id");
                continue;
            }
            ids.observe(&record.id);
            record.refresh_search_terms();
            students.push(record);
        }
        Self { students, ids }
    }

    /// The single student the dashboard ships with.
    pub fn seeded() -> Self {
        Self::with_records(vec![StudentRecord::from_new(
            StudentId::new("1"),
            NewStudent::new("John Doe", "john@example.com").with_course("React In Depth"),
        )])
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn position(&self, id: &StudentId) -> Option<usize> {
        self.students.iter().position(|s| &s.id == id)
    }
}

impl StudentStore for InMemoryStore {
    fn list(&self) -> Result<Vec<StudentRecord>> {
        Ok(self.students.clone())
    }

    fn get(&self, id: &StudentId) -> Result<Option<StudentRecord>> {
        Ok(self.students.iter().find(|s| &s.id == id).cloned())
    }

    fn create(&mut self, student: NewStudent) -> Result<StudentRecord> {
        let id = self.ids.next()?;
        let record = StudentRecord::from_new(id, student);
        debug!(id = %record.id, "storing new student");
        self.students.push(record.clone());
        Ok(record)
    }

    fn update(&mut self, id: &StudentId, patch: StudentPatch) -> Result<StudentRecord> {
        let index = self
            .position(id)
            .ok_or_else(|| RosterError::StudentNotFound(id.clone()))?;
        let record = &mut self.students[index];
        record.apply(patch);
        debug!(%id, "merged student update");
        Ok(record.clone())
    }

    fn delete(&mut self, id: &StudentId) -> Result<StudentId> {
        let before = self.students.len();
        self.students.retain(|s| &s.id != id);
        if self.students.len() < before {
            info!(%id, "removed student");
        } else {
            debug!(%id, "delete of unknown student ignored");
        }
        Ok(id.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_students(mut self, count: usize, course: &str) -> Self {
            for i in 0..count {
                let student = NewStudent::new(
                    format!("Test Student {}", i + 1),
                    format!("student{}@example.com", i + 1),
                )
                .with_course(course);
                self.store.create(student).unwrap();
            }
            self
        }

        pub fn with_student(mut self, name: &str, email: &str, course: &str) -> Self {
            let student = NewStudent::new(name, email).with_course(course);
            self.store.create(student).unwrap();
            self
        }

        pub fn with_completed_student(mut self, name: &str, course: &str) -> Self {
            let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
            let mut student = NewStudent::new(name, email).with_course(course);
            student.completed = true;
            self.store.create(student).unwrap();
            self
        }
    }
}
