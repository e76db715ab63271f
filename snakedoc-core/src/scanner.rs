use crate::case_model::{has_extension, to_snake_name};
use crate::error::SnakedocError;
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

pub const DEFAULT_SOURCE_DIR: &str = "userguide";
pub const DEFAULT_DESTINATION_DIR: &str = "foo";
pub const DEFAULT_EXTENSION: &str = ".adoc";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOptions {
    /// Directory tree to read from, relative to the working directory
    pub source_dir: PathBuf,
    /// Flat directory to copy into; never created
    pub destination_dir: PathBuf,
    /// Literal file name suffix selecting the files to copy
    pub extension: String,
    /// Glob patterns, relative to the source directory, to leave out
    pub excludes: Vec<String>,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            destination_dir: PathBuf::from(DEFAULT_DESTINATION_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            excludes: vec![],
        }
    }
}

/// One planned copy. Both paths are kept as the user would write them,
/// relative to the working directory the plan was built in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyOp {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Several source files whose names flatten to the same destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    pub destination: PathBuf,
    pub sources: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Plan {
    pub working_dir: PathBuf,
    pub source_root: PathBuf,
    pub destination_root: PathBuf,
    pub copies: Vec<CopyOp>,
    pub collisions: Vec<Collision>,
}

impl Plan {
    /// Resolve a plan-relative path against the directory the plan was built in.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.working_dir.join(path)
    }
}

pub fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).with_context(|| format!("Invalid glob: {pattern}"))?);

        // A bare directory name also excludes everything under it
        if pattern.ends_with('/')
            || (!pattern.contains('*') && !pattern.contains('?') && !pattern.contains('.'))
        {
            let recursive_pattern = if pattern.ends_with('/') {
                format!("{}**", pattern)
            } else {
                format!("{}/**", pattern)
            };
            builder.add(Glob::new(&recursive_pattern)?);
        }
    }
    Ok(Some(builder.build()?))
}

/// Walk `root` recursively and return every regular file whose name ends
/// with `extension`, as paths relative to `root`.
///
/// Directories are descended into but never returned. A symlink counts
/// when it points at a regular file; symlinked directories are not
/// followed. The first walk error aborts the scan.
pub fn collect_sources(
    root: &Path,
    extension: &str,
    excludes: Option<&GlobSet>,
) -> Result<Vec<PathBuf>> {
    let is_excluded = |path: &Path| {
        excludes.is_some_and(|set| {
            path.strip_prefix(root)
                .is_ok_and(|rel| !rel.as_os_str().is_empty() && set.is_match(rel))
        })
    };

    let mut sources = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded(e.path()));

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        let path = entry.path();
        if !is_copyable_file(&entry) {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            // Only names we would have copied are fatal
            if has_extension(&entry.file_name().to_string_lossy(), extension) {
                return Err(SnakedocError::NonUtf8Name(path.to_path_buf()).into());
            }
            continue;
        };

        if !has_extension(name, extension) {
            continue;
        }

        let rel = path
            .strip_prefix(root)
            .with_context(|| format!("{} is outside {}", path.display(), root.display()))?;
        sources.push(rel.to_path_buf());
    }

    Ok(sources)
}

/// Regular files, plus symlinks whose target is a regular file. Links to
/// directories are never descended into.
fn is_copyable_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    if !file_type.is_symlink() {
        return false;
    }

    match fs::metadata(entry.path()) {
        Ok(target) => target.is_file(),
        Err(e) => {
            tracing::warn!(path = %entry.path().display(), error = %e, "skipping broken symlink");
            false
        },
    }
}

/// Build the list of copies for one run.
///
/// Fails before anything is written if either directory is missing. Source
/// subdirectories are flattened away, so two files can land on the same
/// destination; those are recorded as collisions and the later one wins.
pub fn plan_copies(options: &PlanOptions, working_dir: &Path) -> Result<Plan> {
    let source_root = working_dir.join(&options.source_dir);
    if !source_root.is_dir() {
        return Err(SnakedocError::SourceMissing(options.source_dir.clone()).into());
    }

    let destination_root = working_dir.join(&options.destination_dir);
    if !destination_root.is_dir() {
        return Err(SnakedocError::DestinationMissing(options.destination_dir.clone()).into());
    }

    let excludes = build_globset(&options.excludes)?;
    let sources = collect_sources(&source_root, &options.extension, excludes.as_ref())?;

    let mut copies = Vec::with_capacity(sources.len());
    let mut by_destination: HashMap<PathBuf, Vec<PathBuf>> = HashMap::new();

    for rel in sources {
        let Some(name) = rel.file_name().and_then(|n| n.to_str()) else {
            return Err(SnakedocError::NonUtf8Name(rel.clone()).into());
        };

        let op = CopyOp {
            source: options.source_dir.join(&rel),
            destination: options.destination_dir.join(to_snake_name(name)),
        };
        tracing::debug!(
            source = %op.source.display(),
            destination = %op.destination.display(),
            "planned copy"
        );

        by_destination
            .entry(op.destination.clone())
            .or_default()
            .push(op.source.clone());
        copies.push(op);
    }

    let collisions: Vec<Collision> = by_destination
        .into_iter()
        .filter(|(_, sources)| sources.len() > 1)
        .collect::<BTreeMap<_, _>>()
        .into_iter()
        .map(|(destination, sources)| Collision {
            destination,
            sources,
        })
        .collect();

    for collision in &collisions {
        tracing::warn!(
            destination = %collision.destination.display(),
            sources = collision.sources.len(),
            "several files map to the same destination; the last one copied wins"
        );
    }

    Ok(Plan {
        working_dir: working_dir.to_path_buf(),
        source_root: options.source_dir.clone(),
        destination_root: options.destination_dir.clone(),
        copies,
        collisions,
    })
}
