use crate::catalog::CourseCatalog;
use crate::model::{Course, StudentId, StudentRecord};
use crate::stats::StudentStats;

pub mod courses;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod stats;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Warns about a course name the catalog does not know. Such students are
/// kept, but no course bucket in the stats counts them.
pub(crate) fn uncatalogued_course(
    catalog: &CourseCatalog,
    course: Option<&str>,
) -> Option<CmdMessage> {
    let course = course.filter(|c| !c.trim().is_empty())?;
    if catalog.find_by_name(course).is_some() {
        return None;
    }
    Some(CmdMessage::warning(format!(
        "\"{course}\" is not in the course catalog and will not show up in course stats"
    )))
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub students: Vec<StudentRecord>,
    pub courses: Vec<Course>,
    pub stats: Option<StudentStats>,
    pub deleted: Option<StudentId>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_students(mut self, students: Vec<StudentRecord>) -> Self {
        self.students = students;
        self
    }

    pub fn with_courses(mut self, courses: Vec<Course>) -> Self {
        self.courses = courses;
        self
    }

    pub fn with_stats(mut self, stats: StudentStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_deleted(mut self, id: StudentId) -> Self {
        self.deleted = Some(id);
        self
    }
}
