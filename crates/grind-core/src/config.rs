use crate::error::{GrindError, Result};
use crate::io;
use crate::paths;
use crate::progress::SLOT_COUNT;
use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Project configuration, loaded from `.grind/config.yaml`.
///
/// Secrets (bot token, chat id, API keys) never live here — they come from
/// the environment, see [`Secrets`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Roadmap start date; anchors week-number computation. Set once.
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,

    /// The six daily notification hours, local to `utc_offset_hours`.
    /// The first five send task reminders, the last sends the digest.
    #[serde(default = "default_notify_hours")]
    pub notify_hours: Vec<u32>,

    /// Fixed UTC offset the notify hours are expressed in (WAT = +1).
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,

    /// Repositories watched by the issue poll.
    #[serde(default = "default_target_repos")]
    pub target_repos: Vec<String>,

    /// Issue labels worth alerting on.
    #[serde(default = "default_issue_labels")]
    pub issue_labels: Vec<String>,

    /// Override for the progress file location (e.g. a mounted volume).
    #[serde(default)]
    pub state_file: Option<PathBuf>,
}

fn default_start_date() -> NaiveDate {
    // Matches the first published roadmap.
    NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()
}

fn default_notify_hours() -> Vec<u32> {
    vec![7, 10, 13, 16, 19, 22]
}

fn default_utc_offset_hours() -> i32 {
    1
}

fn default_target_repos() -> Vec<String> {
    vec![
        "Uniswap/v4-core".to_string(),
        "foundry-rs/foundry".to_string(),
        "aave/aave-v3-core".to_string(),
        "smartcontractkit/chainlink".to_string(),
        "OpenZeppelin/openzeppelin-contracts".to_string(),
        "coral-xyz/anchor".to_string(),
    ]
}

fn default_issue_labels() -> Vec<String> {
    vec![
        "good first issue".to_string(),
        "help wanted".to_string(),
        "documentation".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            notify_hours: default_notify_hours(),
            utc_offset_hours: default_utc_offset_hours(),
            target_repos: default_target_repos(),
            issue_labels: default_issue_labels(),
            state_file: None,
        }
    }
}

impl Config {
    /// Load config from `.grind/config.yaml`, falling back to defaults if
    /// the file does not exist yet.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&path, data.as_bytes())
    }

    pub fn validate(&self) -> Result<()> {
        if self.notify_hours.len() != SLOT_COUNT {
            return Err(GrindError::Config(format!(
                "notify_hours must list exactly {} hours, got {}",
                SLOT_COUNT,
                self.notify_hours.len()
            )));
        }
        if let Some(h) = self.notify_hours.iter().find(|h| **h > 23) {
            return Err(GrindError::Config(format!("notify hour {h} out of range")));
        }
        if !self.notify_hours.windows(2).all(|w| w[0] < w[1]) {
            return Err(GrindError::Config(
                "notify_hours must be strictly increasing".to_string(),
            ));
        }
        if !(-12..=14).contains(&self.utc_offset_hours) {
            return Err(GrindError::Config(format!(
                "utc_offset_hours {} out of range",
                self.utc_offset_hours
            )));
        }
        Ok(())
    }

    /// The fixed offset the notification schedule runs in.
    pub fn tz_offset(&self) -> FixedOffset {
        // Validated range, cannot overflow.
        FixedOffset::east_opt(self.utc_offset_hours * 3600).unwrap()
    }

    /// Resolve the progress file path, honoring the `state_file` override.
    pub fn state_path(&self, root: &Path) -> PathBuf {
        match &self.state_file {
            Some(p) if p.is_absolute() => p.clone(),
            Some(p) => root.join(p),
            None => paths::state_path(root),
        }
    }
}

// ---------------------------------------------------------------------------
// Secrets
// ---------------------------------------------------------------------------

/// Credentials for the delivery collaborators, read from the environment.
/// Every field is optional — an unconfigured channel is skipped, not an error.
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub callmebot_phone: Option<String>,
    pub callmebot_api_key: Option<String>,
    pub github_token: Option<String>,
}

impl Secrets {
    pub fn from_env() -> Self {
        Self {
            telegram_bot_token: env_nonempty("TELEGRAM_BOT_TOKEN"),
            telegram_chat_id: env_nonempty("TELEGRAM_CHAT_ID"),
            callmebot_phone: env_nonempty("CALLMEBOT_PHONE"),
            callmebot_api_key: env_nonempty("CALLMEBOT_API_KEY"),
            github_token: env_nonempty("GITHUB_TOKEN"),
        }
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
