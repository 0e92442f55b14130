use crate::catalog::CourseCatalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::stats::compute_stats;
use crate::store::StudentStore;

pub fn run<S: StudentStore>(store: &S, catalog: &CourseCatalog) -> Result<CmdResult> {
    let students = store.list()?;
    let stats = compute_stats(&students, catalog.courses());
    Ok(CmdResult::default().with_stats(stats))
}
