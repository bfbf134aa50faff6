//! Disc directory discovery: locating the data image and classifying the
//! `trackNN.ext` audio files that sit beside it.

mod image;
mod scan;
mod track;

pub use image::*;
pub use scan::*;
pub use track::*;
