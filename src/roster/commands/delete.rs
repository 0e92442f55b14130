use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentId;
use crate::store::StudentStore;

/// Deleting an id that is not in the roster succeeds and says so.
pub fn run<S: StudentStore>(store: &mut S, id: &StudentId) -> Result<CmdResult> {
    let existing = store.get(id)?;
    let deleted = store.delete(id)?;

    let mut result = CmdResult::default();
    match existing {
        Some(record) => result.add_message(CmdMessage::success(format!(
            "Student deleted ({}): {}",
            record.id, record.name
        ))),
        None => result.add_message(CmdMessage::warning(format!(
            "No student with id {id}, nothing deleted"
        ))),
    }
    Ok(result.with_deleted(deleted))
}
