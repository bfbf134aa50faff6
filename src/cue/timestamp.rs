use std::fmt;

/// A CD position in minutes, seconds and frames (75 frames per second).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Msf {
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
}

impl Msf {
    pub const ZERO: Msf = Msf {
        minutes: 0,
        seconds: 0,
        frames: 0,
    };

    /// Whole seconds, frames always zero.
    pub fn from_seconds(total: u32) -> Self {
        Self {
            minutes: total / 60,
            seconds: total % 60,
            frames: 0,
        }
    }
}

/// `MM:SS:FF`, each field at least two digits wide. Minutes past 99 widen
/// instead of wrapping.
impl fmt::Display for Msf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.minutes, self.seconds, self.frames
        )
    }
}
