//! Configuration structures for an intake session.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IntakeError, Result};

/// Main configuration for intake hosts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Session and merge behaviour.
    pub session: SessionConfig,

    /// Document decoding configuration.
    pub document: DocumentConfig,

    /// Summary artifact configuration.
    pub summary: SummaryConfig,
}

/// How a new extraction result combines with values already collected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Any non-empty extracted value replaces the current one.
    #[default]
    LatestWins,
    /// Extracted values only fill fields that are still absent.
    KeepFirst,
}

/// Session configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Merge precedence between successive extractions.
    pub merge_policy: MergePolicy,
}

/// Document decoding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Largest upload accepted, in bytes.
    pub max_document_bytes: usize,

    /// Retry encrypted PDFs with an empty password.
    pub try_empty_password: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: 10 * 1024 * 1024,
            try_empty_password: true,
        }
    }
}

/// Summary artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// File name offered when the summary is saved.
    pub file_name: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            file_name: "application_summary.txt".to_string(),
        }
    }
}

impl IntakeConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| IntakeError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| IntakeError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: IntakeConfig =
            serde_json::from_str(r#"{"session": {"merge_policy": "keep_first"}}"#).unwrap();
        assert_eq!(config.session.merge_policy, MergePolicy::KeepFirst);
        assert_eq!(config.document.max_document_bytes, 10 * 1024 * 1024);
        assert_eq!(config.summary.file_name, "application_summary.txt");
    }

    #[test]
    fn test_default_policy_is_latest_wins() {
        assert_eq!(IntakeConfig::default().session.merge_policy, MergePolicy::LatestWins);
    }
}
