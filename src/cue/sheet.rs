use std::fmt;

use crate::disc::Track;

use super::Msf;

/// An assembled sheet, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueSheet {
    image: String,
    pregap: Msf,
    tracks: Vec<Track>,
}

impl CueSheet {
    /// Build a sheet for `image`, ordering `tracks` by number.
    ///
    /// The sort is stable: tracks sharing a number keep their listing order,
    /// and duplicates are rendered as-is.
    pub fn new(image: impl Into<String>, pregap_secs: u32, mut tracks: Vec<Track>) -> Self {
        tracks.sort_by_key(|t| t.number);
        Self {
            image: image.into(),
            pregap: Msf::from_seconds(pregap_secs),
            tracks,
        }
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn pregap(&self) -> Msf {
        self.pregap
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

impl fmt::Display for CueSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FILE \"{}\" BINARY", self.image)?;
        writeln!(f, "  TRACK 01 MODE1/2048")?;
        writeln!(f, "\tINDEX 01 {}", Msf::ZERO)?;

        for track in &self.tracks {
            writeln!(f, "FILE \"{}\" {}", track.filename, track.kind)?;
            writeln!(f, "  TRACK {:02} AUDIO", track.number)?;
            writeln!(f, "\tINDEX 00 {}", Msf::ZERO)?;
            writeln!(f, "\tINDEX 01 {}", self.pregap)?;
        }

        Ok(())
    }
}
