use crate::model::StudentId;
use crate::validation::ValidationReport;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Student not found: {0}")]
    StudentNotFound(StudentId),

    #[error("Invalid student: {0}")]
    Validation(ValidationReport),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl From<ValidationReport> for RosterError {
    fn from(report: ValidationReport) -> Self {
        RosterError::Validation(report)
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
