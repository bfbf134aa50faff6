use std::env;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::error::CueError;

/// Generate a CUE sheet for a Saturn ISO and its trackNN audio files
#[derive(Debug, Parser)]
#[command(name = "saturn-cue", version)]
pub struct Cli {
    /// Directory holding the ISO and its track files (defaults to the current directory)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Pregap before each audio track, in whole seconds
    #[arg(value_name = "PREGAP", allow_hyphen_values = true)]
    pub pregap: Option<String>,

    /// Print the cue sheet to stdout instead of writing it next to the ISO
    #[arg(long)]
    pub dry_run: bool,
}

/// Validated inputs for one run, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub directory: PathBuf,
    pub pregap: u32,
    pub dry_run: bool,
}

impl Cli {
    /// Resolve defaults and validate the pregap. Touches no files.
    pub fn into_options(self, default_pregap: u32) -> Result<RunOptions, CueError> {
        let directory = match self.directory {
            Some(dir) => dir,
            None => {
                let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                info!(
                    "directory not set, defaulting to the current directory ({})",
                    cwd.display()
                );
                cwd
            }
        };

        let pregap = match self.pregap.as_deref() {
            Some(raw) => parse_pregap(raw)?,
            None => {
                info!("pregap not set, defaulting to {default_pregap} second(s)");
                default_pregap
            }
        };

        Ok(RunOptions {
            directory,
            pregap,
            dry_run: self.dry_run,
        })
    }
}

/// Parse a pregap given in whole seconds.
///
/// Accepts a base-10 integer with an optional leading `+`. Negative values,
/// fractions and surrounding whitespace are rejected.
pub fn parse_pregap(value: &str) -> Result<u32, CueError> {
    value
        .parse::<u32>()
        .map_err(|_| CueError::InvalidPregap(value.to_string()))
}
