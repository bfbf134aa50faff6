use super::schema::Settings;

/// Prefix shared by every settings environment variable.
const ENV_PREFIX: &str = "SATURN_CUE";

impl Settings {
    /// Load settings from the environment, falling back to struct defaults.
    ///
    /// `SATURN_CUE__CUE__DEFAULT_PREGAP=2` maps to `cue.default_pregap`.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let cfg = ::config::Config::builder()
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        cfg.try_deserialize()
    }
}
