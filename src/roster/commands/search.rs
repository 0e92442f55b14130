use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::search::filter_by_query;
use crate::store::StudentStore;
use tracing::debug;

/// Prefix search over derived terms. A blank query returns the whole roster.
pub fn run<S: StudentStore>(store: &S, query: &str) -> Result<CmdResult> {
    let students = store.list()?;
    let matched = filter_by_query(students, query);
    debug!(query, matches = matched.len(), "searched students");

    let mut result = CmdResult::default();
    if matched.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No students match \"{}\"",
            query.trim()
        )));
    }
    Ok(result.with_students(matched))
}
