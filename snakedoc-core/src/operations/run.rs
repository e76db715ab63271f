use crate::apply::{apply_plan, ApplyOptions};
use crate::output::RunResult;
use crate::scanner::{plan_copies, CopyOp, PlanOptions};
use anyhow::Result;
use std::path::Path;

/// High-level run operation - equivalent to invoking `snakedoc`
///
/// Plans the copies for `working_dir` (`.` when `None`), then performs them
/// in order, calling `on_copy` before each one.
pub fn run_operation<F>(
    plan_options: &PlanOptions,
    dry_run: bool,
    working_dir: Option<&Path>,
    on_copy: F,
) -> Result<RunResult>
where
    F: FnMut(&CopyOp),
{
    let current_dir = working_dir.unwrap_or_else(|| Path::new("."));

    let plan = plan_copies(plan_options, current_dir)?;
    let copies = apply_plan(&plan, &ApplyOptions { dry_run }, on_copy)?;

    Ok(RunResult {
        source: plan.source_root,
        destination: plan.destination_root,
        dry_run,
        copies,
        collisions: plan.collisions,
    })
}
