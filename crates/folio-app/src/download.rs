//! The `cv` download: copy the resume resource next to the user.

use std::path::PathBuf;

use folio_types::config::DownloadConfig;
use folio_types::error::{FolioError, Result};

/// Copy `config.source` to its target path. Returns the written path.
pub fn save(config: &DownloadConfig) -> Result<PathBuf> {
    if !config.source.is_file() {
        return Err(FolioError::Shell(format!(
            "resume not found at {}",
            config.source.display()
        )));
    }
    let target = config.target_path();
    if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::copy(&config.source, &target)?;
    Ok(target)
}

/// Run the download and log the outcome. Nothing is added to the scrollback.
pub fn run(config: &DownloadConfig) {
    match save(config) {
        Ok(path) => log::info!("Resume saved to {}", path.display()),
        Err(e) => log::warn!("Resume download failed: {e}"),
    }
}
