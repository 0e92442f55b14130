use crate::catalog::CourseCatalog;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(catalog: &CourseCatalog) -> Result<CmdResult> {
    Ok(CmdResult::default().with_courses(catalog.courses().to_vec()))
}
