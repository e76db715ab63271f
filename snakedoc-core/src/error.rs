use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that end a run. Anything else bubbles up as a plain `anyhow` error.
#[derive(Debug, Error)]
pub enum SnakedocError {
    #[error("source directory not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("destination directory not found: {} (it must exist before copying)", .0.display())]
    DestinationMissing(PathBuf),

    #[error("file name is not valid UTF-8: {}", .0.display())]
    NonUtf8Name(PathBuf),

    #[error("failed to copy {} to {}", .source_path.display(), .destination.display())]
    Copy {
        source_path: PathBuf,
        destination: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("interrupted after copying {copied} files")]
    Interrupted { copied: usize },
}

impl SnakedocError {
    /// Errors caused by how the tool was invoked rather than by the filesystem.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::SourceMissing(_) | Self::DestinationMissing(_))
    }
}
