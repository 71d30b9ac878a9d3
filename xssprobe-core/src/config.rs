use crate::error::InputError;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use url::Url;
use xssprobe_scanner::default_payloads;

pub const DEFAULT_THREADS: usize = 15;
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;
pub const DEFAULT_USER_AGENT: &str = concat!("xssprobe/", env!("CARGO_PKG_VERSION"));

/// Line format of the findings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum OutputFormat {
    /// One vulnerable URL per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Settings for one run. Built once by the entry point and never mutated.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub threads: usize,
    pub timeout: Duration,
    pub user_agent: String,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub payloads: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output: None,
            format: OutputFormat::default(),
            payloads: default_payloads(),
        }
    }
}

impl ScanConfig {
    pub fn validate(&self) -> Result<(), InputError> {
        if self.threads == 0 {
            return Err(InputError::InvalidConfig(
                "thread count must be at least 1".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(InputError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(InputError::InvalidConfig(
                "user agent must not be empty".to_string(),
            ));
        }
        if self.payloads.iter().all(|p| p.is_empty()) {
            return Err(InputError::InvalidConfig(
                "at least one payload is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// What a run does: test a list of URLs, or crawl from a seed.
#[derive(Debug, Clone)]
pub enum ScanMode {
    TargetTesting { file: PathBuf },
    Crawl { seed: Url, depth: usize },
}

impl ScanMode {
    pub fn crawl(seed: Url, depth: usize) -> Result<Self, InputError> {
        if !matches!(seed.scheme(), "http" | "https") || seed.host_str().is_none() {
            return Err(InputError::InvalidSeed(seed.to_string()));
        }
        Ok(ScanMode::Crawl { seed, depth })
    }
}

/// Expand a leading `~` in a user-supplied path.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}
