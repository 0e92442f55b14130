use crate::catalog::CourseCatalog;
use crate::commands::{uncatalogued_course, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewStudent;
use crate::store::StudentStore;
use tracing::info;

pub fn run<S: StudentStore>(
    store: &mut S,
    catalog: &CourseCatalog,
    student: NewStudent,
) -> Result<CmdResult> {
    let record = store.create(student)?;
    info!(id = %record.id, "student added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student added ({}): {}",
        record.id, record.name
    )));
    if let Some(warning) = uncatalogued_course(catalog, record.course.as_deref()) {
        result.add_message(warning);
    }
    Ok(result.with_students(vec![record]))
}
