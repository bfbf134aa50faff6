use log::warn;

use crate::config;

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => s,
        Err(e) => {
            // Overrides are optional; a bad one should not stop the run.
            warn!("failed to load settings from the environment, using defaults: {e}");
            config::Settings::default()
        }
    }
}
