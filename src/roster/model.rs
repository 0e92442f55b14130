use crate::search::{generate_search_terms, SearchSource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format used for `enrollment_date` strings.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const COMPLETED_STATUS: &str = "completed";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
}

impl Course {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The stub user shown by UI clients. There is no authentication behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// URL or `data:` URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub completed: bool,
    // Derived from name/email/course; rebuilt on every write, never read by search.
    #[serde(default)]
    pub search_terms: Vec<String>,
}

impl StudentRecord {
    pub fn from_new(id: StudentId, new: NewStudent) -> Self {
        let mut record = Self {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            course: new.course,
            address: new.address,
            image: new.image,
            bio: new.bio,
            enrollment_date: new.enrollment_date,
            status: new.status,
            notes: new.notes,
            completed: new.completed,
            search_terms: Vec::new(),
        };
        record.refresh_search_terms();
        record
    }

    pub fn refresh_search_terms(&mut self) {
        self.search_terms = generate_search_terms(&*self);
    }

    /// Counted as completed by the statistics aggregator.
    pub fn is_completed(&self) -> bool {
        self.completed
            || self
                .status
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(COMPLETED_STATUS))
    }

    /// Shallow merge: every field set in `patch` replaces the stored value.
    pub fn apply(&mut self, patch: StudentPatch) {
        let StudentPatch {
            name,
            email,
            phone,
            course,
            address,
            image,
            bio,
            enrollment_date,
            status,
            notes,
            completed,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        merge(&mut self.phone, phone);
        merge(&mut self.course, course);
        merge(&mut self.address, address);
        merge(&mut self.image, image);
        merge(&mut self.bio, bio);
        merge(&mut self.enrollment_date, enrollment_date);
        merge(&mut self.status, status);
        merge(&mut self.notes, notes);
        if let Some(completed) = completed {
            self.completed = completed;
        }
        self.refresh_search_terms();
    }
}

fn merge(slot: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *slot = value;
    }
}

impl SearchSource for StudentRecord {
    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn email(&self) -> Option<&str> {
        Some(self.email.as_str())
    }

    fn course(&self) -> Option<&str> {
        self.course.as_deref()
    }
}

/// Input for creating a student. The store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub enrollment_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    /// Fills what the add form fills on submit when left blank:
    /// the status and the enrollment date.
    pub fn with_form_defaults(mut self, default_status: &str, today: NaiveDate) -> Self {
        if is_blank(&self.status) {
            self.status = Some(default_status.to_string());
        }
        if is_blank(&self.enrollment_date) {
            self.enrollment_date = Some(today.format(DATE_FORMAT).to_string());
        }
        self
    }
}

fn is_blank(value: &Option<String>) -> bool {
    !matches!(value.as_deref(), Some(s) if !s.trim().is_empty())
}

impl SearchSource for NewStudent {
    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn email(&self) -> Option<&str> {
        Some(self.email.as_str())
    }

    fn course(&self) -> Option<&str> {
        self.course.as_deref()
    }
}

/// Partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub address: Option<String>,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub enrollment_date: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub completed: Option<bool>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> StudentRecord {
        StudentRecord::from_new(
            StudentId::new("1"),
            NewStudent::new("John Doe", "john@example.com").with_course("React In Depth"),
        )
    }

    #[test]
    fn from_new_populates_search_terms() {
        let record = john();
        assert!(record.search_terms.contains(&"jd".to_string()));
        assert!(record.search_terms.contains(&"react".to_string()));
    }

    #[test]
    fn apply_replaces_only_set_fields() {
        let mut record = john();
        record.apply(StudentPatch {
            email: Some("jdoe@school.edu".into()),
            ..StudentPatch::default()
        });

        assert_eq!(record.email, "jdoe@school.edu");
        assert_eq!(record.name, "John Doe");
        assert_eq!(record.course.as_deref(), Some("React In Depth"));
        assert!(record.search_terms.contains(&"jdoe".to_string()));
        assert!(!record.search_terms.contains(&"john@example.com".to_string()));
    }

    #[test]
    fn completed_status_counts_as_completed() {
        let mut record = john();
        assert!(!record.is_completed());
        record.status = Some("Completed".into());
        assert!(record.is_completed());
    }

    #[test]
    fn form_defaults_fill_blank_fields_only() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let filled =
            NewStudent::new("Ann Lee", "ann@example.com").with_form_defaults("active", today);
        assert_eq!(filled.status.as_deref(), Some("active"));
        assert_eq!(filled.enrollment_date.as_deref(), Some("2024-03-09"));

        let mut kept = NewStudent::new("Ann Lee", "ann@example.com");
        kept.status = Some("paused".into());
        let kept = kept.with_form_defaults("active", today);
        assert_eq!(kept.status.as_deref(), Some("paused"));
    }

    #[test]
    fn records_serialize_in_camel_case() {
        let mut record = john();
        record.enrollment_date = Some("2024-01-01".into());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["enrollmentDate"], "2024-01-01");
        assert!(json["searchTerms"].is_array());
        assert!(json.get("phone").is_none());
    }
}
