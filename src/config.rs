//! Extraction configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the extraction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Merge runs of adjacent bare single-line comments into one record
    #[serde(default = "default_merge_banners")]
    pub merge_banners: bool,

    /// Run the association pass (requires a parseable file)
    #[serde(default = "default_associate")]
    pub associate: bool,

    /// Keep comments no syntax node was found for
    #[serde(default = "default_include_unassociated")]
    pub include_unassociated: bool,

    /// Maximum number of body lines stored as a comment's context
    #[serde(default = "default_context_max_lines")]
    pub context_max_lines: usize,
}

fn default_merge_banners() -> bool {
    true
}

fn default_associate() -> bool {
    true
}

fn default_include_unassociated() -> bool {
    true
}

fn default_context_max_lines() -> usize {
    40
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            merge_banners: default_merge_banners(),
            associate: default_associate(),
            include_unassociated: default_include_unassociated(),
            context_max_lines: default_context_max_lines(),
        }
    }
}

impl ExtractConfig {
    /// Name of the configuration file looked up next to the sources
    pub const FILE_NAME: &'static str = "docharvest.toml";

    /// Load configuration from a directory or return defaults
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: ExtractConfig = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a directory
    pub fn save(&self, dir: &Path) -> Result<()> {
        let config_path = dir.join(Self::FILE_NAME);
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractConfig::default();
        assert!(config.merge_banners);
        assert!(config.associate);
        assert!(config.include_unassociated);
        assert!(config.context_max_lines > 0);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: ExtractConfig = toml::from_str("merge_banners = false\n").unwrap();
        assert!(!config.merge_banners);
        assert!(config.associate);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ExtractConfig::default();
        config.context_max_lines = 7;
        config.save(dir.path()).unwrap();

        let loaded = ExtractConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(loaded.context_max_lines, 7);
        assert!(loaded.merge_banners);
    }
}
