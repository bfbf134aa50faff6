use std::path::PathBuf;

use thiserror::Error;

/// Every way a run can fail. Each variant is fatal; nothing is retried.
#[derive(Debug, Error)]
pub enum CueError {
    /// The pregap positional was not a non-negative base-10 integer.
    #[error("invalid integer argument: {0}")]
    InvalidPregap(String),

    /// The target directory could not be listed.
    #[error("failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// No `*.iso` file sits directly inside the target directory.
    #[error("no ISO found in path: {}", .0.display())]
    NoImage(PathBuf),

    /// A file named like a track carries an extension we cannot describe.
    #[error("{filename}: .{extension} is not a supported format")]
    UnsupportedExtension { filename: String, extension: String },

    #[error("failed to write cue file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CueError {
    /// Process exit status for this failure, one per error category.
    pub fn exit_code(&self) -> u8 {
        match self {
            CueError::InvalidPregap(_) => 2,
            CueError::ReadDir { .. } | CueError::NoImage(_) => 3,
            CueError::UnsupportedExtension { .. } => 4,
            CueError::Write { .. } => 5,
        }
    }
}
