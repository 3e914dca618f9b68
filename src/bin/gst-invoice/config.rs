use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use gst_invoice::core::{DEFAULT_LOGO_PATH, DEFAULT_SIGNATURE_PATH};
use serde::{Deserialize, Serialize};

/// Runtime settings, stored as `settings.toml` in the platform config dir.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Company logo image.
    pub logo_path: PathBuf,
    /// Default signature image, loaded once per run.
    pub signature_path: PathBuf,
    /// Where generated documents are written when no `--out` is given.
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
            signature_path: PathBuf::from(DEFAULT_SIGNATURE_PATH),
            output_dir: PathBuf::from("."),
        }
    }
}

pub fn config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("in", "lifedemy", "gst-invoice") {
        return proj_dirs.config_dir().join("settings.toml");
    }
    PathBuf::from("settings.toml")
}

/// Load settings; a missing file means defaults.
pub fn load_settings() -> Result<Settings> {
    let path = config_path();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn save_settings(settings: &Settings) -> Result<PathBuf> {
    let path = config_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let toml_str = toml::to_string_pretty(settings).context("failed to serialize settings")?;
    fs::write(&path, toml_str).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
