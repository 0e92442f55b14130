use crate::catalog::CourseCatalog;
use crate::commands::{uncatalogued_course, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{StudentId, StudentPatch};
use crate::store::StudentStore;
use tracing::{info, warn};

pub fn run<S: StudentStore>(
    store: &mut S,
    catalog: &CourseCatalog,
    id: &StudentId,
    patch: StudentPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if patch.is_empty() {
        // Still an error for an unknown id.
        let record = store.update(id, patch)?;
        result.add_message(CmdMessage::info(format!("Nothing to change for {id}")));
        return Ok(result.with_students(vec![record]));
    }

    let course_changed = patch.course.is_some();
    let record = store.update(id, patch).inspect_err(|e| {
        warn!(%id, error = %e, "student update rejected");
    })?;
    info!(%id, "student updated");

    result.add_message(CmdMessage::success(format!(
        "Student updated ({}): {}",
        record.id, record.name
    )));
    if course_changed {
        if let Some(warning) = uncatalogued_course(catalog, record.course.as_deref()) {
            result.add_message(warning);
        }
    }
    Ok(result.with_students(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{get, MessageLevel};
    use crate::error::RosterError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn updates_one_field_and_keeps_the_rest() {
        let mut store = InMemoryStore::seeded();
        let id = StudentId::new("1");
        let patch = StudentPatch {
            course: Some("Vue Basics".into()),
            ..StudentPatch::default()
        };
        run(&mut store, &CourseCatalog::default(), &id, patch).unwrap();

        let record = get::run(&store, &id).unwrap().students.remove(0);
        assert_eq!(record.course.as_deref(), Some("Vue Basics"));
        assert_eq!(record.name, "John Doe");
        assert_eq!(record.email, "john@example.com");
        assert!(record.search_terms.contains(&"vue".to_string()));
        assert!(!record.search_terms.contains(&"react".to_string()));
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut store = InMemoryStore::seeded();
        let catalog = CourseCatalog::default();
        let ghost = StudentId::new("9");
        let patch = StudentPatch {
            name: Some("Ghost".into()),
            ..StudentPatch::default()
        };
        let err = run(&mut store, &catalog, &ghost, patch).unwrap_err();
        assert!(matches!(err, RosterError::StudentNotFound(_)));

        let err = run(&mut store, &catalog, &ghost, StudentPatch::default()).unwrap_err();
        assert!(matches!(err, RosterError::StudentNotFound(_)));
    }

    #[test]
    fn empty_patch_reports_no_change() {
        let mut store = InMemoryStore::seeded();
        let catalog = CourseCatalog::default();
        let id = StudentId::new("1");
        let result = run(&mut store, &catalog, &id, StudentPatch::default()).unwrap();
        assert_eq!(result.students[0].name, "John Doe");
        assert!(result.messages[0].content.starts_with("Nothing to change"));
    }

    #[test]
    fn moving_to_an_unknown_course_warns() {
        let mut store = InMemoryStore::seeded();
        let catalog = CourseCatalog::default();
        let id = StudentId::new("1");
        let patch = StudentPatch {
            course: Some("Vue Basics".into()),
            ..StudentPatch::default()
        };

        let result = run(&mut store, &catalog, &id, patch).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[1].level, MessageLevel::Warning);

        // Untouched course, no warning even though it is still unknown.
        let patch = StudentPatch {
            notes: Some("moved".into()),
            ..StudentPatch::default()
        };
        let result = run(&mut store, &catalog, &id, patch).unwrap();
        assert_eq!(result.messages.len(), 1);
    }
}
