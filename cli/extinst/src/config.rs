//! `extinst.toml` configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use extinst_core::TargetEnv;

/// File name searched for when no `--config` is given.
pub const CONFIG_FILE: &str = "extinst.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Defaults {
    /// Default target environment name (e.g., "vulkan1.1").
    #[serde(default)]
    pub target: Option<String>,
    /// Default dump format (text, json, toml).
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    /// Load the configuration from an explicit path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Search upward from `start_dir` for `extinst.toml`, returning the parsed
    /// config and the path it was found at.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((config, candidate)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Pick the target environment: explicit flag, then config, then `spv1.0`.
    pub fn resolve_target(&self, flag: Option<&str>) -> Result<TargetEnv> {
        match flag.or(self.defaults.target.as_deref()) {
            Some(name) => name
                .parse()
                .context("use 'extinst envs' to list known environments"),
            None => Ok(TargetEnv::Universal1_0),
        }
    }

    /// Pick the dump format: explicit flag, then config, then text.
    pub fn resolve_format<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.or(self.defaults.format.as_deref()).unwrap_or("text")
    }
}
