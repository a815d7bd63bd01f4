//! Runtime configuration.
//!
//! Everything has a working default; environment variables override them.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const ENV_MAX_SCROLLS: &str = "SCOUT_MAX_SCROLLS";
pub const ENV_WAIT_TIMEOUT_SECS: &str = "SCOUT_WAIT_TIMEOUT_SECS";
pub const ENV_TOP_DISPLAY: &str = "SCOUT_TOP_DISPLAY";
pub const ENV_OUTPUT: &str = "SCOUT_OUTPUT";
pub const ENV_BASE_URL: &str = "SCOUT_BASE_URL";
pub const ENV_CURRENCY: &str = "SCOUT_CURRENCY";
pub const ENV_SOURCE: &str = "SCOUT_SOURCE";
pub const ENV_HEADLESS: &str = "SCOUT_HEADLESS";

const DEFAULT_MAX_SCROLLS: u32 = 6;
const DEFAULT_WAIT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_TOP_DISPLAY: usize = 20;
const DEFAULT_OUTPUT: &str = "ebay_sold_listings.csv";
const DEFAULT_BASE_URL: &str = "https://www.ebay.co.uk";
const DEFAULT_CURRENCY: &str = "£";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must be 'true' or 'false', got '{value}'")]
    InvalidBool { name: &'static str, value: String },
    #[error("SCOUT_SOURCE must be 'browser' or 'http', got '{0}'")]
    UnknownSource(String),
}

/// Where raw listing cards come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Browser,
    Http,
}

impl FromStr for SourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "browser" => Ok(Self::Browser),
            "http" => Ok(Self::Http),
            _ => Err(ConfigError::UnknownSource(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoutConfig {
    pub max_scrolls: u32,
    pub wait_timeout: Duration,
    pub top_display: usize,
    pub output: PathBuf,
    pub base_url: String,
    /// Symbol used when printing the price range
    pub currency: String,
    pub source: SourceKind,
    pub headless: bool,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            max_scrolls: DEFAULT_MAX_SCROLLS,
            wait_timeout: Duration::from_secs(DEFAULT_WAIT_TIMEOUT_SECS),
            top_display: DEFAULT_TOP_DISPLAY,
            output: PathBuf::from(DEFAULT_OUTPUT),
            base_url: DEFAULT_BASE_URL.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            source: SourceKind::Browser,
            headless: true,
        }
    }
}

impl ScoutConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_scrolls = number(&lookup, ENV_MAX_SCROLLS)?.unwrap_or(defaults.max_scrolls);
        let wait_timeout = number(&lookup, ENV_WAIT_TIMEOUT_SECS)?
            .map(Duration::from_secs)
            .unwrap_or(defaults.wait_timeout);
        let top_display = number(&lookup, ENV_TOP_DISPLAY)?.unwrap_or(defaults.top_display);
        let output = lookup(ENV_OUTPUT).map(PathBuf::from).unwrap_or(defaults.output);
        let base_url = lookup(ENV_BASE_URL).unwrap_or(defaults.base_url);
        let currency = lookup(ENV_CURRENCY).unwrap_or(defaults.currency);
        let source = match lookup(ENV_SOURCE) {
            Some(value) => value.parse()?,
            None => defaults.source,
        };
        let headless = match lookup(ENV_HEADLESS) {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidBool {
                        name: ENV_HEADLESS,
                        value,
                    })
                }
            },
            None => defaults.headless,
        };

        Ok(Self {
            max_scrolls,
            wait_timeout,
            top_display,
            output,
            base_url,
            currency,
            source,
            headless,
        })
    }
}

fn number<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(None),
    }
}
