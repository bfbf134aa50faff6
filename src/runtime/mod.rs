use clap::Parser;
use log::info;

use crate::cli::{Cli, RunOptions};
use crate::config;
use crate::cue::{CueSheet, write_sheet};
use crate::disc::{self, DiscImage};
use crate::error::CueError;

mod settings;

/// Parse arguments, build the sheet and write (or print) it.
pub fn run() -> Result<(), CueError> {
    let cli = Cli::parse();
    info!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let settings = settings::load_settings();
    let options = cli.into_options(settings.cue.default_pregap)?;

    let (image, sheet) = build_sheet(&options, &settings)?;

    if options.dry_run {
        print!("{sheet}");
        return Ok(());
    }

    let output = image.cue_path();
    write_sheet(&output, &sheet)?;
    info!("{} has been generated", output.display());
    println!("{}", output.display());

    Ok(())
}

/// Locate the image and its tracks in `options.directory` and assemble the sheet.
pub fn build_sheet(
    options: &RunOptions,
    settings: &config::Settings,
) -> Result<(DiscImage, CueSheet), CueError> {
    let entries = disc::list_entries(&options.directory, &settings.scan)?;

    let image = disc::locate_image(&options.directory, &entries)?;
    info!("{} found", image.filename);

    let tracks = disc::classify_tracks(&entries)?;
    let sheet = CueSheet::new(image.filename.clone(), options.pregap, tracks);
    info!(
        "{}: {} audio track(s), pregap {}",
        sheet.image(),
        sheet.tracks().len(),
        sheet.pregap()
    );

    Ok((image, sheet))
}
