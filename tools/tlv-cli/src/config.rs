//! tlv.toml configuration
//!
//! ```toml
//! [decode]
//! max_depth = 64
//! ```

use anyhow::{Context, Result};
use nether_tlv::DecodeLimits;
use serde::Deserialize;
use std::path::Path;

/// Config file looked up in the current directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "tlv.toml";

/// tlv.toml structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CliConfig {
    /// Limits applied to every decode
    #[serde(default)]
    pub decode: DecodeLimits,
}

impl CliConfig {
    /// Load config from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parse config from a TOML string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse tlv.toml")
    }

    /// Load the explicit config if given, else `tlv.toml` if present, else defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            tracing::debug!("Using {}", fallback.display());
            return Self::load(fallback);
        }

        Ok(Self::default())
    }
}
