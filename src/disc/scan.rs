use std::ffi::OsStr;
use std::path::Path;

use log::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanSettings;
use crate::error::CueError;

use super::track::{Track, TrackType};

fn is_dotfile(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// The symlink itself, for a link whose target cannot be resolved.
fn unresolved_link(err: &walkdir::Error) -> Option<DirEntry> {
    let path = err.path()?;
    WalkDir::new(path)
        .max_depth(0)
        .follow_links(false)
        .follow_root_links(false)
        .into_iter()
        .next()?
        .ok()
        .filter(DirEntry::path_is_symlink)
}

/// List the direct children of `dir`, sorted by file name.
///
/// Failing to read `dir` itself is fatal. A symlink whose target is missing
/// (or loops) is kept as a non-directory entry so it is still classified by
/// name. Any other entry that cannot be inspected is skipped.
pub fn list_entries(dir: &Path, settings: &ScanSettings) -> Result<Vec<DirEntry>, CueError> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(settings.follow_links);

    let mut entries = Vec::new();
    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(CueError::ReadDir {
                    path: dir.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => match unresolved_link(&err) {
                Some(link) => {
                    debug!("{}: {err}, keeping the link itself", link.path().display());
                    link
                }
                None => {
                    debug!("skipping unreadable entry: {err}");
                    continue;
                }
            },
        };

        if settings.include_hidden || !is_dotfile(entry.file_name()) {
            entries.push(entry);
        }
    }

    // Sorted here rather than by the walker, which orders failed entries first.
    entries.sort_by(|a, b| a.file_name().cmp(b.file_name()));
    Ok(entries)
}

/// Turn directory entries into tracks, in listing order.
///
/// Directories and names that do not look like tracks are skipped. One
/// track with an unsupported extension aborts the whole scan.
pub fn classify_tracks(entries: &[DirEntry]) -> Result<Vec<Track>, CueError> {
    let mut tracks: Vec<Track> = Vec::new();

    for entry in entries {
        if entry.file_type().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            debug!("skipping non UTF-8 name {}", entry.path().display());
            continue;
        };

        let Some(track) = Track::from_filename(name)? else {
            continue;
        };

        info!("{name} found");
        if track.kind == TrackType::Wave {
            warn!("{name}: WAV is not supported by Mednafen and SAROO");
        }

        tracks.push(track);
    }

    Ok(tracks)
}
