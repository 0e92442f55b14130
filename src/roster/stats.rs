//! Dashboard statistics.
//!
//! Per-course buckets match on the exact course name. A student whose course
//! is missing or unknown still counts toward the overall totals but lands in
//! no bucket, so per-course denominators only ever cover that course.

use crate::model::{Course, StudentRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStat {
    pub course: String,
    pub count: usize,
    /// Whole percent, 0 for an empty course.
    pub completion_rate: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStats {
    pub total_students: usize,
    pub total_courses: usize,
    pub completion_rate: u32,
    pub average_students_per_course: usize,
    /// One entry per catalog course, in catalog order.
    pub per_course: Vec<CourseStat>,
}

impl StudentStats {
    pub fn count_for(&self, course: &str) -> Option<usize> {
        self.course(course).map(|c| c.count)
    }

    pub fn completion_rate_for(&self, course: &str) -> Option<u32> {
        self.course(course).map(|c| c.completion_rate)
    }

    fn course(&self, name: &str) -> Option<&CourseStat> {
        self.per_course.iter().find(|c| c.course == name)
    }
}

pub fn compute_stats(students: &[StudentRecord], courses: &[Course]) -> StudentStats {
    let completed = students.iter().filter(|s| s.is_completed()).count();

    let per_course = courses
        .iter()
        .map(|course| {
            let enrolled: Vec<&StudentRecord> = students
                .iter()
                .filter(|s| s.course.as_deref() == Some(course.name.as_str()))
                .collect();
            let done = enrolled.iter().filter(|s| s.is_completed()).count();
            CourseStat {
                course: course.name.clone(),
                count: enrolled.len(),
                completion_rate: percent(done, enrolled.len()),
            }
        })
        .collect();

    StudentStats {
        total_students: students.len(),
        total_courses: courses.len(),
        completion_rate: percent(completed, students.len()),
        average_students_per_course: rounded_ratio(students.len(), courses.len()),
        per_course,
    }
}

/// `round(100 * part / whole)`, half rounding up, 0 when `whole` is 0.
fn percent(part: usize, whole: usize) -> u32 {
    u32::try_from(rounded_ratio(part * 100, whole)).unwrap_or(u32::MAX)
}

fn rounded_ratio(numerator: usize, denominator: usize) -> usize {
    if denominator == 0 {
        return 0;
    }
    (2 * numerator + denominator) / (2 * denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewStudent, StudentId};

    fn student(id: &str, course: Option<&str>, completed: bool) -> StudentRecord {
        let mut new = NewStudent::new(format!("Student {id}"), format!("s{id}@example.com"));
        new.course = course.map(String::from);
        new.completed = completed;
        StudentRecord::from_new(StudentId::new(id), new)
    }

    #[test]
    fn empty_inputs_do_not_divide_by_zero() {
        let stats = compute_stats(&[], &[]);
        assert_eq!(stats.total_students, 0);
        assert_eq!(stats.total_courses, 0);
        assert_eq!(stats.completion_rate, 0);
        assert_eq!(stats.average_students_per_course, 0);
        assert!(stats.per_course.is_empty());
    }

    #[test]
    fn counts_students_per_course() {
        let courses = vec![Course::new("c1", "React"), Course::new("c2", "Vue")];
        let students = vec![
            student("1", Some("React"), false),
            student("2", Some("React"), false),
            student("3", Some("Vue"), false),
        ];

        let stats = compute_stats(&students, &courses);
        assert_eq!(stats.count_for("React"), Some(2));
        assert_eq!(stats.count_for("Vue"), Some(1));
        assert_eq!(stats.per_course[0].course, "React");
        assert_eq!(stats.average_students_per_course, 2);
    }

    #[test]
    fn completion_rates_round_half_up() {
        let courses = vec![Course::new("c1", "React"), Course::new("c2", "Vue")];
        let students = vec![
            student("1", Some("React"), true),
            student("2", Some("React"), false),
            student("3", Some("React"), false),
            student("4", Some("Vue"), false),
            student("5", Some("Vue"), true),
            student("6", None, true),
            student("7", Some("Elm"), false),
            student("8", Some("Elm"), false),
        ];

        let stats = compute_stats(&students, &courses);
        // 3 of 8
        assert_eq!(stats.completion_rate, 38);
        // 1 of 3
        assert_eq!(stats.completion_rate_for("React"), Some(33));
        // 1 of 2
        assert_eq!(stats.completion_rate_for("Vue"), Some(50));
    }

    #[test]
    fn unknown_courses_only_count_overall() {
        let courses = vec![Course::new("c1", "React")];
        let students = vec![student("1", Some("react"), true), student("2", None, false)];

        let stats = compute_stats(&students, &courses);
        assert_eq!(stats.total_students, 2);
        assert_eq!(stats.count_for("React"), Some(0));
        assert_eq!(stats.completion_rate_for("React"), Some(0));
        assert_eq!(stats.completion_rate, 50);
    }
}
