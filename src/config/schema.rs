use serde::Deserialize;

/// Top-level settings.
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SATURN_CUE__`, `__` as nested separator)
/// 2) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub cue: CueSettings,
    pub scan: ScanSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CueSettings {
    /// Pregap (seconds) placed before each audio track when the `PREGAP`
    /// argument is omitted.
    pub default_pregap: u32,
}

impl Default for CueSettings {
    fn default() -> Self {
        Self { default_pregap: 1 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Whether symlinked entries are resolved before classification.
    pub follow_links: bool,
    /// Whether dotfiles are considered as image or track candidates.
    pub include_hidden: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            follow_links: true,
            include_hidden: true,
        }
    }
}
