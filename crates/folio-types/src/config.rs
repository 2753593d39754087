//! Terminal configuration, loaded from an optional `folio.toml`.
//!
//! Every field has a default so an empty file (or no file) is valid.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::color::Rgb;
use crate::error::{FolioError, Result};

/// Top-level configuration for the terminal session and the shell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt shown before the pending input.
    pub prompt: String,
    /// How long the `matrix` boost stays active.
    pub matrix_boost_ms: u64,
    /// How long the `hack` glitch stays active.
    pub glitch_ms: u64,
    /// Column width used when wrapping the profile summary.
    pub wrap_width: usize,
    /// Palette applied when the shell starts.
    pub palette: String,
    /// Color overrides on top of the starting palette.
    pub colors: ColorOverrides,
    /// Where the `cv` download comes from and where it lands.
    pub download: DownloadConfig,
}

/// Per-slot `#rrggbb` overrides. They hold until a `theme` command selects
/// another palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    pub terminal_green: Option<Rgb>,
    pub accent_primary: Option<Rgb>,
    pub accent_secondary: Option<Rgb>,
}

/// The fixed resource served by `cv` / `cat resume.pdf`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Source file to copy.
    pub source: PathBuf,
    /// File name written in the target directory.
    pub file_name: String,
    /// Destination directory (current directory when unset).
    pub target_dir: Option<PathBuf>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "maxime@portfolio:~$".to_string(),
            matrix_boost_ms: 5000,
            glitch_ms: 2000,
            wrap_width: 72,
            palette: "green".to_string(),
            colors: ColorOverrides::default(),
            download: DownloadConfig::default(),
        }
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("public/resume.pdf"),
            file_name: "resume.pdf".to_string(),
            target_dir: None,
        }
    }
}

impl TerminalConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| FolioError::Config(format!("folio.toml: {e}")))
    }

    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = toml::from_str(&text)
            .map_err(|e| FolioError::Config(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded terminal config from {}", path.display());
        Ok(config)
    }

    pub fn matrix_boost_duration(&self) -> Duration {
        Duration::from_millis(self.matrix_boost_ms)
    }

    pub fn glitch_duration(&self) -> Duration {
        Duration::from_millis(self.glitch_ms)
    }
}

impl DownloadConfig {
    /// Full destination path for the downloaded file.
    pub fn target_path(&self) -> PathBuf {
        match &self.target_dir {
            Some(dir) => dir.join(&self.file_name),
            None => PathBuf::from(&self.file_name),
        }
    }
}
