//! Referee configuration, read from the environment.

use std::env::VarError;
use std::fmt;
use std::str::FromStr;

use rpsplus_core::{BotStrategy, RandomBot, StrategicBot};
use serde::{Deserialize, Serialize};

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to something we cannot use.
    ///
    /// Covers values that do not parse and values that are not UTF-8 at
    /// all; `value` holds the latter lossily decoded. An unset variable is
    /// never an error, it keeps its default.
    #[error("{key}={value:?} is not valid, expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

// ---------------------------------------------------------------------------
// BotKind
// ---------------------------------------------------------------------------

/// Which strategy the bot plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotKind {
    /// Random classic moves; bombs in round 2 when trailing.
    #[default]
    Strategic,
    /// Random classic moves only.
    Random,
}

impl FromStr for BotKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strategic" => Ok(Self::Strategic),
            "random" => Ok(Self::Random),
            _ => Err(()),
        }
    }
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strategic => write!(f, "strategic"),
            Self::Random => write!(f, "random"),
        }
    }
}

// ---------------------------------------------------------------------------
// OutputFormat
// ---------------------------------------------------------------------------

/// How reports are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable banners and prompts.
    #[default]
    Text,
    /// One JSON-encoded report per line, for a front-end to phrase.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

// ---------------------------------------------------------------------------
// RefereeConfig
// ---------------------------------------------------------------------------

/// Settings for one referee session.
///
/// | variable             | values                      | default     |
/// |----------------------|-----------------------------|-------------|
/// | `RPSPLUS_BOT`        | `strategic`, `random`       | `strategic` |
/// | `RPSPLUS_SEED`       | any `u64`                   | unset       |
/// | `RPSPLUS_FORMAT`     | `text`, `json`              | `text`      |
/// | `RPSPLUS_SHOW_RULES` | `true`/`false`, `1`/`0`     | `true`      |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefereeConfig {
    /// Bot strategy.
    pub bot: BotKind,
    /// Seed for the bot's RNG. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Output format.
    pub format: OutputFormat,
    /// Whether to print the rules before round 1.
    pub show_rules: bool,
}

impl Default for RefereeConfig {
    fn default() -> Self {
        Self {
            bot: BotKind::default(),
            seed: None,
            format: OutputFormat::default(),
            show_rules: true,
        }
    }
}

impl RefereeConfig {
    pub const BOT_VAR: &'static str = "RPSPLUS_BOT";
    pub const SEED_VAR: &'static str = "RPSPLUS_SEED";
    pub const FORMAT_VAR: &'static str = "RPSPLUS_FORMAT";
    pub const SHOW_RULES_VAR: &'static str = "RPSPLUS_SHOW_RULES";

    /// Reads the process environment.
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] for any variable that is set but
    /// unparseable or not UTF-8. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Like [`from_env`](Self::from_env), with a caller-supplied lookup
    /// shaped like [`std::env::var`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let read = |key: &'static str| match lookup(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(raw)) => Err(invalid(
                key,
                raw.to_string_lossy().into_owned(),
                "a UTF-8 value",
            )),
        };
        let mut config = Self::default();

        if let Some(value) = read(Self::BOT_VAR)? {
            config.bot = value
                .parse()
                .map_err(|()| invalid(Self::BOT_VAR, value, "strategic or random"))?;
        }
        if let Some(value) = read(Self::SEED_VAR)? {
            let seed = value
                .trim()
                .parse::<u64>()
                .map_err(|_| invalid(Self::SEED_VAR, value, "an unsigned 64-bit integer"))?;
            config.seed = Some(seed);
        }
        if let Some(value) = read(Self::FORMAT_VAR)? {
            config.format = value
                .parse()
                .map_err(|()| invalid(Self::FORMAT_VAR, value, "text or json"))?;
        }
        if let Some(value) = read(Self::SHOW_RULES_VAR)? {
            config.show_rules = parse_flag(&value)
                .ok_or_else(|| invalid(Self::SHOW_RULES_VAR, value, "true or false"))?;
        }

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Builds the configured bot strategy.
    pub fn build_bot(&self) -> Box<dyn BotStrategy> {
        match (self.bot, self.seed) {
            (BotKind::Strategic, Some(seed)) => Box::new(StrategicBot::seeded(seed)),
            (BotKind::Strategic, None) => Box::new(StrategicBot::new()),
            (BotKind::Random, Some(seed)) => Box::new(RandomBot::seeded(seed)),
            (BotKind::Random, None) => Box::new(RandomBot::new()),
        }
    }
}

fn invalid(key: &'static str, value: String, expected: &'static str) -> ConfigError {
    tracing::warn!(key, %value, "rejected configuration value");
    ConfigError::InvalidValue {
        key,
        value,
        expected,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
