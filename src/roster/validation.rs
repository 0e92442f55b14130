//! Form-level validation.
//!
//! These rules belong to whatever collects student input. The store accepts
//! anything it is handed; UI clients call [`validate_student`] (or
//! [`validate_update`] for edits) before going through the API.

use crate::model::{NewStudent, StudentPatch, StudentRecord};
use email_address::EmailAddress;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const MIN_NAME_CHARS: usize = 3;
const MAX_BIO_CHARS: usize = 200;
const PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every rule that failed, in field order. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(())` when valid, the report as an error otherwise.
    pub fn into_result(self) -> crate::error::Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self.into())
        }
    }

    fn reject(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

struct Draft<'a> {
    name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    course: Option<&'a str>,
    image: Option<&'a str>,
    bio: Option<&'a str>,
}

pub fn validate_student(student: &NewStudent) -> ValidationReport {
    validate(&Draft {
        name: &student.name,
        email: &student.email,
        phone: student.phone.as_deref(),
        course: student.course.as_deref(),
        image: student.image.as_deref(),
        bio: student.bio.as_deref(),
    })
}

/// Validates the record as it would look after `patch` is merged in.
pub fn validate_update(current: &StudentRecord, patch: &StudentPatch) -> ValidationReport {
    validate(&Draft {
        name: patch.name.as_deref().unwrap_or(&current.name),
        email: patch.email.as_deref().unwrap_or(&current.email),
        phone: patch.phone.as_deref().or(current.phone.as_deref()),
        course: patch.course.as_deref().or(current.course.as_deref()),
        image: patch.image.as_deref().or(current.image.as_deref()),
        bio: patch.bio.as_deref().or(current.bio.as_deref()),
    })
}

fn validate(draft: &Draft<'_>) -> ValidationReport {
    let mut report = ValidationReport::default();

    if draft.name.trim().is_empty() {
        report.reject("name", "Name is required");
    } else if draft.name.trim().chars().count() < MIN_NAME_CHARS {
        report.reject(
            "name",
            format!("Name must be at least {MIN_NAME_CHARS} characters"),
        );
    }

    if draft.email.trim().is_empty() {
        report.reject("email", "Email is required");
    } else if !is_valid_email(draft.email.trim()) {
        report.reject("email", "Please enter a valid email");
    }

    if let Some(phone) = filled(draft.phone) {
        if phone.len() != PHONE_DIGITS || !phone.bytes().all(|b| b.is_ascii_digit()) {
            report.reject("phone", "Please enter a valid 10-digit phone number");
        }
    }

    if filled(draft.course).is_none() {
        report.reject("course", "Please select a course");
    }

    if let Some(image) = filled(draft.image) {
        if !is_image_source(image) {
            report.reject("image", "Please enter a valid URL");
        }
    }

    if let Some(bio) = draft.bio {
        if bio.chars().count() > MAX_BIO_CHARS {
            report.reject(
                "bio",
                format!("Bio must be at most {MAX_BIO_CHARS} characters"),
            );
        }
    }

    report
}

fn filled(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

// The dashboard also insists on a dotted domain, so `a@localhost` is rejected.
fn is_valid_email(email: &str) -> bool {
    EmailAddress::from_str(email)
        .map(|addr| addr.domain().contains('.'))
        .unwrap_or(false)
}

fn is_image_source(image: &str) -> bool {
    ["http://", "https://", "data:"]
        .iter()
        .any(|scheme| image.len() > scheme.len() && image.starts_with(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StudentId;

    fn valid() -> NewStudent {
        NewStudent::new("John Doe", "john@example.com").with_course("React In Depth")
    }

    #[test]
    fn accepts_complete_student() {
        let mut student = valid();
        student.phone = Some("0123456789".into());
        student.image = Some("https://img.example.com/john.png".into());
        assert!(validate_student(&student).is_valid());
    }

    #[test]
    fn requires_name_email_and_course() {
        let report = validate_student(&NewStudent::default());
        assert_eq!(report.message_for("name"), Some("Name is required"));
        assert_eq!(report.message_for("email"), Some("Email is required"));
        assert_eq!(report.message_for("course"), Some("Please select a course"));
    }

    #[test]
    fn rejects_short_name() {
        let mut student = valid();
        student.name = "Al".into();
        let report = validate_student(&student);
        assert!(report.message_for("name").is_some());
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["john", "john@", "john@localhost", "@example.com"] {
            let mut student = valid();
            student.email = email.into();
            assert!(
                validate_student(&student).message_for("email").is_some(),
                "{email} accepted"
            );
        }
    }

    #[test]
    fn phone_must_be_ten_digits_when_given() {
        let mut student = valid();
        student.phone = Some("012345678".into());
        assert!(validate_student(&student).message_for("phone").is_some());

        student.phone = Some("01234abc89".into());
        assert!(validate_student(&student).message_for("phone").is_some());

        student.phone = Some(String::new());
        assert!(validate_student(&student).is_valid());
    }

    #[test]
    fn bio_is_capped() {
        let mut student = valid();
        student.bio = Some("x".repeat(MAX_BIO_CHARS));
        assert!(validate_student(&student).is_valid());
        student.bio = Some("x".repeat(MAX_BIO_CHARS + 1));
        assert!(validate_student(&student).message_for("bio").is_some());
    }

    #[test]
    fn image_accepts_urls_and_data_uris() {
        let mut student = valid();
        student.image = Some("data:image/png;base64,AAAA".into());
        assert!(validate_student(&student).is_valid());
        student.image = Some("not a url".into());
        assert!(validate_student(&student).message_for("image").is_some());
    }

    #[test]
    fn update_is_checked_against_merged_record() {
        let current = StudentRecord::from_new(StudentId::new("1"), valid());
        let patch = StudentPatch {
            email: Some("broken".into()),
            ..StudentPatch::default()
        };
        let report = validate_update(&current, &patch);
        assert_eq!(report.errors.len(), 1);
        assert!(report.message_for("email").is_some());

        assert!(validate_update(&current, &StudentPatch::default()).is_valid());
    }

    #[test]
    fn report_converts_into_error() {
        let err = validate_student(&NewStudent::default())
            .into_result()
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid student: name: Name is required"));
    }
}
