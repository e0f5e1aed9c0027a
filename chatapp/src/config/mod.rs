use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, anyhow};
use chatapp_core::SessionOptions;
use chatapp_core::replies::default_replies;
use chatapp_core::session::ThemePreference;
use serde::Deserialize;

/// Environment variable naming an absolute path to a JSON config file.
pub const CONFIG_PATH_ENV: &str = "CHATAPP_CONFIG";
pub const THEME_ENV: &str = "CHATAPP_THEME";
pub const REPLY_DELAY_ENV: &str = "CHATAPP_REPLY_DELAY_MS";
pub const REVEAL_DELAY_ENV: &str = "CHATAPP_REVEAL_DELAY_MS";

/// Startup settings.
/// Sources, later wins:
/// - built-in defaults
/// - JSON file at `$CHATAPP_CONFIG`
/// - `CHATAPP_THEME`, `CHATAPP_REPLY_DELAY_MS`, `CHATAPP_REVEAL_DELAY_MS`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub theme: ThemePreference,
    pub reply_delay_ms: u64,
    pub reveal_delay_ms: u64,
    pub replies: Vec<String>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Light,
            reply_delay_ms: 1000,
            reveal_delay_ms: 500,
            replies: default_replies(),
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl AppConfig {
    /// Loads from the process environment. Never fails: every problem is
    /// logged and the affected source is skipped.
    pub fn load() -> Self {
        let mut config = match Self::config_path() {
            Some(path) => match Self::from_file(&path) {
                Ok(config) => {
                    tracing::info!(?path, "Loaded config file");
                    config
                }
                Err(err) => {
                    tracing::warn!(?err, "Cannot load config file, using defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        };
        if let Err(err) = config.apply_overrides(|key| std::env::var(key).ok()) {
            tracing::warn!(?err, "Ignoring invalid environment override");
        }
        config
    }

    fn config_path() -> Option<PathBuf> {
        let raw = std::env::var(CONFIG_PATH_ENV).ok()?;
        let path = PathBuf::from(raw);
        if path.is_absolute() {
            Some(path)
        } else {
            tracing::warn!("{CONFIG_PATH_ENV} is not an absolute path, ignoring");
            None
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, anyhow::Error> {
        let config: Self = serde_json::from_str(raw).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Applies environment-style overrides read through `lookup`. Valid
    /// overrides before a bad one stay applied.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), anyhow::Error> {
        if let Some(raw) = lookup(THEME_ENV) {
            self.theme = raw
                .parse()
                .map_err(|e| anyhow!("{THEME_ENV}: {e}"))?;
        }
        if let Some(raw) = lookup(REPLY_DELAY_ENV) {
            self.reply_delay_ms = parse_millis(REPLY_DELAY_ENV, &raw)?;
        }
        if let Some(raw) = lookup(REVEAL_DELAY_ENV) {
            self.reveal_delay_ms = parse_millis(REVEAL_DELAY_ENV, &raw)?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.replies.iter().all(|r| r.trim().is_empty()) {
            return Err(anyhow!("replies must contain at least one non-empty entry"));
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(anyhow!(
                "window size must be positive, got {}x{}",
                self.window_width,
                self.window_height
            ));
        }
        Ok(())
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            theme: self.theme,
            reply_delay: Duration::from_millis(self.reply_delay_ms),
            reveal_delay: Duration::from_millis(self.reveal_delay_ms),
            replies: self
                .replies
                .iter()
                .filter(|r| !r.trim().is_empty())
                .cloned()
                .collect(),
            ..SessionOptions::default()
        }
    }
}

fn parse_millis(key: &str, raw: &str) -> Result<u64, anyhow::Error> {
    raw.trim()
        .parse()
        .with_context(|| format!("{key}: expected milliseconds, got '{raw}'"))
}
