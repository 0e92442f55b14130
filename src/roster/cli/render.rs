//! Terminal output. Layout math (widths, truncation, bars) stays here so the
//! core never formats for a terminal.

use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel, StudentStats};
use roster::model::{Course, StudentRecord};
use roster::validation::ValidationReport;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 14;
const NAME_WIDTH: usize = 22;
const EMAIL_WIDTH: usize = 28;
const COURSE_WIDTH: usize = 24;
const BAR_WIDTH: usize = 30;
const BAR_CHAR: &str = "█";
const NO_COURSE: &str = "No course assigned";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_validation(report: &ValidationReport) {
    println!("{}", "Please fix the following:".red());
    for error in &report.errors {
        println!("  {} {}", format!("{}:", error.field).bold(), error.message);
    }
}

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> roster::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(super) fn print_students(students: &[StudentRecord]) {
    if students.is_empty() {
        println!("No students found.");
        return;
    }

    println!(
        "{}",
        format!(
            "{}  {}  {}  {}  {}",
            pad("ID", ID_WIDTH),
            pad("NAME", NAME_WIDTH),
            pad("EMAIL", EMAIL_WIDTH),
            pad("COURSE", COURSE_WIDTH),
            "STATUS"
        )
        .bold()
    );
    for student in students {
        let status = student.status.as_deref().unwrap_or("");
        let status = if student.is_completed() {
            status_or(status, "completed").green()
        } else {
            status.normal()
        };
        println!(
            "{}  {}  {}  {}  {}",
            pad(student.id.as_str(), ID_WIDTH).yellow(),
            pad(&student.name, NAME_WIDTH),
            pad(&student.email, EMAIL_WIDTH).dimmed(),
            pad(student.course.as_deref().unwrap_or(NO_COURSE), COURSE_WIDTH),
            status
        );
    }
}

pub(super) fn print_student(student: &StudentRecord) {
    println!("{} {}", student.id.as_str().yellow(), student.name.bold());
    println!("--------------------------------");
    let rows = [
        ("Email", Some(student.email.as_str())),
        ("Phone", student.phone.as_deref()),
        ("Course", Some(student.course.as_deref().unwrap_or(NO_COURSE))),
        ("Address", student.address.as_deref()),
        ("Image", student.image.as_deref().map(summarize_image)),
        ("Enrolled", student.enrollment_date.as_deref()),
        ("Status", student.status.as_deref()),
        ("Completed", Some(if student.completed { "yes" } else { "no" })),
        ("Bio", student.bio.as_deref()),
        ("Notes", student.notes.as_deref()),
    ];
    for (label, value) in rows {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            println!("{:<10} {}", format!("{label}:").dimmed(), value);
        }
    }
}

pub(super) fn print_courses(courses: &[Course]) {
    if courses.is_empty() {
        println!("No courses in the catalog.");
        return;
    }
    for course in courses {
        println!("{}  {}", pad(&course.id, 6).yellow(), course.name);
    }
}

pub(super) fn print_stats(stats: &StudentStats) {
    println!(
        "{} {}   {} {}   {} {}   {} {}",
        "Total Students:".dimmed(),
        stats.total_students.to_string().bold(),
        "Active Courses:".dimmed(),
        stats.total_courses.to_string().bold(),
        "Completion Rate:".dimmed(),
        format!("{}%", stats.completion_rate).bold(),
        "Avg. Students/Course:".dimmed(),
        stats.average_students_per_course.to_string().bold(),
    );

    if stats.per_course.is_empty() {
        return;
    }

    let label_width = stats
        .per_course
        .iter()
        .map(|c| c.course.width())
        .max()
        .unwrap_or(0)
        .min(COURSE_WIDTH);
    let max_count = stats.per_course.iter().map(|c| c.count).max().unwrap_or(0);

    println!();
    println!("{}", "Students per Course".bold());
    for course in &stats.per_course {
        let share = percent_of(course.count, stats.total_students);
        println!(
            "  {}  {} {} ({}%)",
            pad(&course.course, label_width),
            bar(course.count, max_count).cyan(),
            course.count,
            share
        );
    }

    println!();
    println!("{}", "Course Completion Rate".bold());
    for course in &stats.per_course {
        println!(
            "  {}  {} {}%",
            pad(&course.course, label_width),
            bar(course.completion_rate as usize, 100).green(),
            course.completion_rate
        );
    }
}

fn status_or<'a>(status: &'a str, fallback: &'a str) -> &'a str {
    if status.is_empty() {
        fallback
    } else {
        status
    }
}

// Inline images are whole base64 payloads; only the media type is worth printing.
fn summarize_image(image: &str) -> &str {
    if image.starts_with("data:") {
        image.split(',').next().unwrap_or(image)
    } else {
        image
    }
}

fn percent_of(part: usize, whole: usize) -> usize {
    if whole == 0 {
        0
    } else {
        (200 * part + whole) / (2 * whole)
    }
}

fn bar(value: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let cells = (value * BAR_WIDTH + max / 2) / max;
    BAR_CHAR.repeat(cells)
}

/// Truncates to `width` display columns (with an ellipsis) and pads to it.
fn pad(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
