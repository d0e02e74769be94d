use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::BackoffPolicy;

pub const DEFAULT_ENDPOINT: &str = "https://commons.wikimedia.org/w/api.php";
pub const DEFAULT_USER_AGENT: &str = "PlandlGame/1.0";

/// Scraper settings, loadable from a JSON file and overridden by flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrapeConfig {
    pub catalog: PathBuf,
    pub images_dir: PathBuf,
    /// Target list; the embedded list is used when unset.
    pub targets: Option<PathBuf>,
    pub endpoint: String,
    pub user_agent: String,
    pub pause_secs: u64,
    pub backoff_secs: u64,
    pub max_attempts: u32,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("planes.json"),
            images_dir: PathBuf::from(plandl_game::constants::IMAGE_DIR),
            targets: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pause_secs: 6,
            backoff_secs: 10,
            max_attempts: 3,
        }
    }
}

impl ScrapeConfig {
    /// Read a config file; omitted keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub const fn pause(&self) -> Duration {
        Duration::from_secs(self.pause_secs)
    }

    pub const fn backoff(&self) -> BackoffPolicy {
        BackoffPolicy::new(Duration::from_secs(self.backoff_secs), self.max_attempts)
    }
}
