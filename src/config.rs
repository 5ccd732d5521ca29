use std::path::Path;

use anyhow::{Context, Result};
use ::config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/save_profile";
pub const DEFAULT_PROFILE_MARKER: &str = "linkedin.com/in/";
const SETTINGS_FILE: &str = "profile_scraper.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Collection endpoint receiving the profile POST.
    pub endpoint: String,
    /// Substring a page URL must contain to count as a profile page.
    pub profile_marker: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            profile_marker: DEFAULT_PROFILE_MARKER.to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then `profile_scraper.toml` if present, then `PROFILE_SCRAPER_*`.
    pub fn load() -> Result<Self> {
        Self::layered(Path::new(SETTINGS_FILE))
    }

    fn layered(file: &Path) -> Result<Self> {
        Config::builder()
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .set_default("profile_marker", DEFAULT_PROFILE_MARKER)?
            .add_source(File::from(file).required(false))
            .add_source(Environment::with_prefix("PROFILE_SCRAPER"))
            .build()
            .and_then(Config::try_deserialize)
            .with_context(|| format!("Failed to load settings (file: {})", file.display()))
    }
}

// ── Tests ──
