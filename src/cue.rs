//! CUE sheet assembly and output.
//!
//! The sheet is one `MODE1/2048` data track for the image followed by one
//! `AUDIO` track per track file, each preceded by a configurable pregap.

mod sheet;
mod timestamp;
mod write;

pub use sheet::*;
pub use timestamp::*;
pub use write::*;

#[cfg(test)]
mod tests;
