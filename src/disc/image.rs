use std::path::{Path, PathBuf};

use log::debug;
use walkdir::DirEntry;

use crate::error::CueError;

/// Case-sensitive suffix of the data track image.
pub const IMAGE_SUFFIX: &str = ".iso";

/// The data track image the sheet is built around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscImage {
    pub path: PathBuf,
    pub filename: String,
}

impl DiscImage {
    /// Filename without the `.iso` suffix.
    pub fn stem(&self) -> &str {
        self.filename
            .strip_suffix(IMAGE_SUFFIX)
            .unwrap_or(&self.filename)
    }

    /// `<stem>.cue` in the image's directory.
    pub fn cue_path(&self) -> PathBuf {
        self.path.with_file_name(format!("{}.cue", self.stem()))
    }
}

/// Pick the image among `entries` (already sorted by file name).
///
/// The first `*.iso` wins; any later ones are ignored.
pub fn locate_image(dir: &Path, entries: &[DirEntry]) -> Result<DiscImage, CueError> {
    let mut candidates = entries
        .iter()
        .filter(|e| !e.file_type().is_dir())
        .filter_map(|e| {
            let name = e.file_name().to_str()?;
            name.ends_with(IMAGE_SUFFIX).then(|| DiscImage {
                path: e.path().to_path_buf(),
                filename: name.to_string(),
            })
        });

    let image = candidates
        .next()
        .ok_or_else(|| CueError::NoImage(dir.to_path_buf()))?;

    for extra in candidates {
        debug!("ignoring additional image {}", extra.filename);
    }

    Ok(image)
}
