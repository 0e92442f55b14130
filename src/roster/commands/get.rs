use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentId;
use crate::store::StudentStore;
use tracing::debug;

/// An unknown id is not an error: the result is empty and carries a note.
pub fn run<S: StudentStore>(store: &S, id: &StudentId) -> Result<CmdResult> {
    match store.get(id)? {
        Some(record) => Ok(CmdResult::default().with_students(vec![record])),
        None => {
            debug!(%id, "lookup found nothing");
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!("No student with id {id}")));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn finds_seeded_student() {
        let store = InMemoryStore::seeded();
        let result = run(&store, &StudentId::new("1")).unwrap();
        assert_eq!(result.students[0].name, "John Doe");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn absent_student_is_not_an_error() {
        let store = InMemoryStore::seeded();
        let result = run(&store, &StudentId::new("2")).unwrap();
        assert!(result.students.is_empty());
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Info);
    }
}
