//! The built-in course catalog. Configuration may replace it wholesale
//! (see [`crate::config::RosterConfig::courses`]); nothing mutates it at runtime.

use crate::model::Course;
use once_cell::sync::Lazy;

static DEFAULT_COURSES: Lazy<Vec<Course>> = Lazy::new(|| {
    [
        ("c1", "React In Depth"),
        ("c2", "JavaScript Fundamentals"),
        ("c3", "HTML & CSS Basics"),
        ("c4", "Node.js Essentials"),
        ("c5", "TypeScript Mastery"),
    ]
    .into_iter()
    .map(|(id, name)| Course::new(id, name))
    .collect()
});

pub fn default_courses() -> &'static [Course] {
    &DEFAULT_COURSES
}

/// Read-only view over the courses a session was started with.
#[derive(Debug, Clone)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::new(default_courses().to_vec())
    }
}

impl CourseCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Exact, case-sensitive name lookup, the same match the stats use.
    pub fn find_by_name(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_contains_seed_course() {
        let catalog = CourseCatalog::default();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.find_by_name("React In Depth").is_some());
        assert!(catalog.find_by_name("react in depth").is_none());
    }

    #[test]
    fn custom_catalog_replaces_defaults() {
        let catalog = CourseCatalog::new(vec![Course::new("x", "Rust")]);
        assert_eq!(catalog.courses(), &[Course::new("x", "Rust")]);
    }
}
