use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::StudentRecord;
use crate::search::filter_by_query;
use crate::store::StudentStore;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CourseFilter {
    #[default]
    All,
    /// Exact course name.
    Course(String),
}

impl CourseFilter {
    pub fn from_option(course: Option<String>) -> Self {
        course.map_or(CourseFilter::All, CourseFilter::Course)
    }

    pub fn admits(&self, student: &StudentRecord) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Course(name) => student.course.as_deref() == Some(name.as_str()),
        }
    }
}

/// What the dashboard narrows the roster by. The query runs first, then
/// the course filter; input order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub query: Option<String>,
    pub course: CourseFilter,
}

impl StudentFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = CourseFilter::Course(course.into());
        self
    }

    pub fn apply(&self, students: Vec<StudentRecord>) -> Vec<StudentRecord> {
        let matched = match &self.query {
            Some(query) => filter_by_query(students, query),
            None => students,
        };
        matched
            .into_iter()
            .filter(|s| self.course.admits(s))
            .collect()
    }
}

pub fn run<S: StudentStore>(store: &S, filter: &StudentFilter) -> Result<CmdResult> {
    let students = store.list()?;
    let total = students.len();
    let listed = filter.apply(students);
    debug!(total, shown = listed.len(), "listed students");
    Ok(CmdResult::default().with_students(listed))
}
