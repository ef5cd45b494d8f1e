use crate::error::{Error, Result};
use crate::symbols::SymbolTable;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_USER_AGENT: &str = "MarketMonitor/1.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Feed names the backend aggregates; offered as suggestions for the sources filter.
pub const DEFAULT_NEWS_SOURCES: [&str; 8] = [
    "Reuters Markets",
    "Reuters Business",
    "Reuters World",
    "Yahoo Finance",
    "MarketWatch",
    "Federal Reserve",
    "ECB Press",
    "Bank of England",
];

/// Runtime settings, read from the environment (and `.env`).
///
/// | variable               | default                 |
/// |------------------------|-------------------------|
/// | `MONITOR_API_URL`      | `http://127.0.0.1:8000` |
/// | `MONITOR_USER_AGENT`   | `MarketMonitor/1.0`     |
/// | `MONITOR_TIMEOUT_SECS` | `30`                    |
/// | `MONITOR_SYMBOLS`      | built-in table          |
/// | `MONITOR_NEWS_SOURCES` | built-in feed names     |
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
    pub symbols_file: Option<PathBuf>,
    pub news_sources: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key -> value source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = var("MONITOR_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(api_url.trim())
            .map_err(|e| Error::Config(format!("MONITOR_API_URL {api_url:?}: {e}")))?;

        let timeout = match var("MONITOR_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| Error::Config(format!("MONITOR_TIMEOUT_SECS {raw:?}: {e}")))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let news_sources = match var("MONITOR_NEWS_SOURCES") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_NEWS_SOURCES.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Config {
            api_url,
            user_agent: var("MONITOR_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            timeout: Duration::from_secs(timeout),
            symbols_file: var("MONITOR_SYMBOLS").map(PathBuf::from),
            news_sources,
        })
    }

    /// The symbol table file when one is configured, the built-in table otherwise.
    pub fn load_symbols(&self) -> Result<SymbolTable> {
        match &self.symbols_file {
            Some(path) => SymbolTable::from_json_file(path),
            None => Ok(SymbolTable::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: Url::parse(DEFAULT_API_URL).expect("default api url is valid"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            symbols_file: None,
            news_sources: DEFAULT_NEWS_SOURCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
