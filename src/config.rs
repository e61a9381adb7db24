//! TOML configuration.
//!
//! ```toml
//! [baseline]
//! path = "./data/aggregated_results.csv"
//!
//! [corpus]
//! base_url = "https://pubmed.ncbi.nlm.nih.gov"
//! term = "heart"
//! page_size = 200
//! max_abstracts = 100
//!
//! [server]
//! bind = "127.0.0.1:5000"
//! ```
//!
//! Every section is optional; omitted keys fall back to the defaults above.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub baseline: BaselineConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BaselineConfig {
    /// CSV file holding the persisted baseline row.
    #[serde(default = "default_baseline_path")]
    pub path: PathBuf,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            path: default_baseline_path(),
        }
    }
}

fn default_baseline_path() -> PathBuf {
    PathBuf::from("./data/aggregated_results.csv")
}

/// Where and how the reference corpus is fetched.
#[derive(Debug, Deserialize, Clone)]
pub struct CorpusConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Search term for the reference corpus.
    #[serde(default = "default_term")]
    pub term: String,
    /// Results requested from the single search page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Upper bound on abstracts concatenated into the corpus. Articles past
    /// the cap are not fetched.
    #[serde(default = "default_max_abstracts")]
    pub max_abstracts: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            term: default_term(),
            page_size: default_page_size(),
            max_abstracts: default_max_abstracts(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "https://pubmed.ncbi.nlm.nih.gov".to_string()
}
fn default_term() -> String {
    "heart".to_string()
}
fn default_page_size() -> usize {
    200
}
fn default_max_abstracts() -> usize {
    100
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    format!("healthstats/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Largest accepted request body, in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}
fn default_max_body_bytes() -> usize {
    1024 * 1024
}

impl Config {
    /// All defaults; used when no config file is present.
    pub fn minimal() -> Self {
        Self::default()
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;
    validate(&config)?;

    Ok(config)
}

/// Loads `path` if it exists, otherwise falls back to [`Config::minimal`].
pub fn load_config_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        Ok(Config::minimal())
    }
}

fn validate(config: &Config) -> Result<()> {
    let corpus = &config.corpus;

    if !(corpus.base_url.starts_with("http://") || corpus.base_url.starts_with("https://")) {
        anyhow::bail!("corpus.base_url must start with http:// or https://");
    }
    if corpus.term.trim().is_empty() {
        anyhow::bail!("corpus.term must not be empty");
    }
    if corpus.page_size == 0 {
        anyhow::bail!("corpus.page_size must be >= 1");
    }
    if corpus.max_abstracts == 0 {
        anyhow::bail!("corpus.max_abstracts must be >= 1");
    }
    if corpus.timeout_secs == 0 {
        anyhow::bail!("corpus.timeout_secs must be >= 1");
    }

    if config.server.max_body_bytes == 0 {
        anyhow::bail!("server.max_body_bytes must be >= 1");
    }

    if config.baseline.path.as_os_str().is_empty() {
        anyhow::bail!("baseline.path must not be empty");
    }

    Ok(())
}
