use crate::error::SnakedocError;
use crate::interrupt;
use crate::scanner::{CopyOp, Plan};
use anyhow::{Context, Result};
use filetime::{set_file_times, FileTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Options for carrying out a copy plan
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// Report every copy without touching the destination
    pub dry_run: bool,
}

/// A copy that was carried out (or would have been, in a dry run)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyRecord {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes: u64,
}

/// Copy every file in `plan`, in order.
///
/// `on_copy` runs right before each copy so callers can print progress. The
/// first failure stops the run; files copied before it stay in place.
pub fn apply_plan<F>(plan: &Plan, options: &ApplyOptions, mut on_copy: F) -> Result<Vec<CopyRecord>>
where
    F: FnMut(&CopyOp),
{
    let mut records = Vec::with_capacity(plan.copies.len());

    for op in &plan.copies {
        if interrupt::is_interrupted() {
            return Err(SnakedocError::Interrupted {
                copied: records.len(),
            }
            .into());
        }

        on_copy(op);

        let source = plan.resolve(&op.source);
        let destination = plan.resolve(&op.destination);

        let bytes = if options.dry_run {
            fs::metadata(&source)
                .with_context(|| format!("Failed to read {}", op.source.display()))?
                .len()
        } else {
            copy_file_with_metadata(&source, &destination).map_err(|e| SnakedocError::Copy {
                source_path: op.source.clone(),
                destination: op.destination.clone(),
                source: e,
            })?
        };

        records.push(CopyRecord {
            source: op.source.clone(),
            destination: op.destination.clone(),
            bytes,
        });
    }

    tracing::info!(
        copied = records.len(),
        dry_run = options.dry_run,
        "finished copying into {}",
        plan.destination_root.display()
    );

    Ok(records)
}

/// Copy the contents of `src` over `dst`, then carry permissions and
/// timestamps across. Only the byte copy can fail; metadata is best effort.
pub fn copy_file_with_metadata(src: &Path, dst: &Path) -> io::Result<u64> {
    if is_same_file(src, dst) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source and destination are the same file",
        ));
    }

    let bytes = fs::copy(src, dst)?;

    if let Err(e) = copy_times(src, dst) {
        tracing::warn!(path = %dst.display(), error = %e, "could not preserve timestamps");
    }

    Ok(bytes)
}

fn copy_times(src: &Path, dst: &Path) -> io::Result<()> {
    let metadata = fs::metadata(src)?;
    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    set_file_times(dst, atime, mtime)
}

fn is_same_file(src: &Path, dst: &Path) -> bool {
    match (fs::canonicalize(src), fs::canonicalize(dst)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
