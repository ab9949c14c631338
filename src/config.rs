use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::Marker;
use crate::rules::{DEFAULT_CODE_CANDIDATES, DEFAULT_DESC_CANDIDATES, HeuristicSet};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "retrofit.toml";

/// Main configuration structure for enum-retrofit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub marker: Marker,
    pub walker: WalkerConfig,
    pub heuristics: HeuristicsConfig,
    pub runtime: RuntimeConfig,
    pub logging: LoggingConfig,
}

/// Where to look for enum sources
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    pub root: PathBuf,
    pub extension: String,
    pub follow_links: bool,
}

/// Ordered candidate field names; earlier names win
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicsConfig {
    pub code_candidates: Vec<String>,
    pub desc_candidates: Vec<String>,
}

/// Runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub dry_run: bool,
    pub verbose: bool,
    pub parallel: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub target: String,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("luohuo-cloud/luohuo-im/luohuo-im-entity/src/main/java/com/luohuo/flex/im/"),
            extension: "java".to_string(),
            follow_links: false,
        }
    }
}

impl Default for HeuristicsConfig {
    fn default() -> Self {
        Self {
            code_candidates: DEFAULT_CODE_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            desc_candidates: DEFAULT_DESC_CANDIDATES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl HeuristicsConfig {
    pub fn to_heuristic_set(&self) -> HeuristicSet {
        HeuristicSet::from_candidates(self.code_candidates.as_slice(), self.desc_candidates.as_slice())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(), // pretty, json, compact
            target: "stderr".to_string(), // stdout, stderr
        }
    }
}

impl Config {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. retrofit.toml file (if exists)
    /// 3. Environment variables (RETROFIT_<SECTION>__<KEY>)
    /// 4. Shortcut variables (RETROFIT_ROOT, RETROFIT_VERBOSE)
    pub fn load() -> Result<Self> {
        Self::load_from_dir(&std::env::current_dir()?)
    }

    /// Load configuration from a specific directory
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_file = dir.join(CONFIG_FILE_NAME);
        let file = config_file.exists().then_some(config_file);
        Self::build(file.as_deref())
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Self::build(Some(path))
    }

    fn build(file: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        if let Some(file) = file {
            builder = builder.add_source(File::from(file));
        }

        builder = builder.add_source(
            Environment::with_prefix("RETROFIT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut result: Config = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        result.merge_env_vars();
        result.validate()?;

        Ok(result)
    }

    /// Create a new Config for testing
    #[cfg(test)]
    pub fn for_testing(root: &Path) -> Self {
        Self {
            walker: WalkerConfig {
                root: root.to_path_buf(),
                ..WalkerConfig::default()
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
                ..LoggingConfig::default()
            },
            ..Config::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.marker.validate()?;
        self.heuristics.to_heuristic_set().validate()?;
        if self.walker.extension.trim().is_empty() {
            anyhow::bail!("Walker extension cannot be empty");
        }
        Ok(())
    }

    /// Shortcut environment variables
    fn merge_env_vars(&mut self) {
        if let Ok(root) = std::env::var("RETROFIT_ROOT") {
            self.walker.root = PathBuf::from(root);
        }
        if std::env::var("RETROFIT_VERBOSE").is_ok() {
            self.runtime.verbose = true;
        }
    }
}
