use std::fmt;

use crate::error::CueError;

/// How a track file is described on its `FILE` line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TrackType {
    /// RIFF/WAVE audio. Mednafen and SAROO refuse it.
    Wave,
    /// Raw 2352-byte audio sectors (`.bin` / `.raw`).
    Binary,
}

impl TrackType {
    /// Map a lower-cased extension to its track type.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "wav" => Some(Self::Wave),
            "bin" | "raw" => Some(Self::Binary),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wave => "WAVE",
            Self::Binary => "BINARY",
        }
    }
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One audio track file found next to the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub filename: String,
    /// 1-based: the digit in the filename plus one.
    pub number: u32,
    pub kind: TrackType,
}

/// The parts of a filename that matched the track naming convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackName {
    /// The single digit after `track` (and an optional `0`).
    pub index: u32,
    /// Extension, lower-cased.
    pub extension: String,
}

const TRACK_PREFIX: &str = "track";

/// Match `track` + optional `0` + one digit + `.` + alphanumeric extension,
/// case-insensitively, against the whole name.
pub fn parse_track_name(name: &str) -> Option<TrackName> {
    let prefix = name.get(..TRACK_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(TRACK_PREFIX) {
        return None;
    }

    let (digits, extension) = name[TRACK_PREFIX.len()..].split_once('.')?;
    let digit = match digits.as_bytes() {
        [d] | [b'0', d] if d.is_ascii_digit() => *d,
        _ => return None,
    };

    if extension.is_empty() || !extension.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    Some(TrackName {
        index: u32::from(digit - b'0'),
        extension: extension.to_ascii_lowercase(),
    })
}

impl Track {
    /// Classify a directory entry name.
    ///
    /// `Ok(None)` means the name is not a track at all and should be skipped.
    /// A track-shaped name with an unknown extension is an error.
    pub fn from_filename(filename: &str) -> Result<Option<Self>, CueError> {
        let Some(parsed) = parse_track_name(filename) else {
            return Ok(None);
        };

        let kind = TrackType::from_extension(&parsed.extension).ok_or_else(|| {
            CueError::UnsupportedExtension {
                filename: filename.to_string(),
                extension: parsed.extension.clone(),
            }
        })?;

        Ok(Some(Self {
            filename: filename.to_string(),
            number: parsed.index + 1,
            kind,
        }))
    }
}
