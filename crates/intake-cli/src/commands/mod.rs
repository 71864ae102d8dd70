//! Subcommand implementations.

pub mod config;
pub mod extract;
pub mod session;

use std::path::{Path, PathBuf};

use intake_core::document::DocumentKind;
use intake_core::IntakeConfig;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("intake")
        .join("config.json")
}

/// Config file in effect: the `--config` override, else the default path.
pub fn config_path(override_path: Option<&str>) -> PathBuf {
    override_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

/// Load configuration, falling back to defaults when no file exists.
pub fn load_config(override_path: Option<&str>) -> anyhow::Result<IntakeConfig> {
    let path = config_path(override_path);
    if path.exists() {
        Ok(IntakeConfig::from_file(&path)?)
    } else if override_path.is_some() {
        anyhow::bail!("Config file not found: {}", path.display())
    } else {
        Ok(IntakeConfig::default())
    }
}

/// Read an uploaded resume and work out its kind.
pub fn read_document(path: &Path) -> anyhow::Result<(Vec<u8>, DocumentKind)> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let data = std::fs::read(path)?;
    let kind = DocumentKind::detect(path, &data)?;
    Ok((data, kind))
}
