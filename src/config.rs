//! Configuration management for the dashboard
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! yields a working dashboard against the same origin.

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::logging::LogFormat;

/// Which backend route serves the paged trade log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TradeLogEndpoint {
    #[default]
    TradeLogs,
    /// Legacy duplicate route kept by older backends
    Trades,
}

impl TradeLogEndpoint {
    pub fn path(self) -> &'static str {
        match self {
            TradeLogEndpoint::TradeLogs => "/api/trade-logs",
            TradeLogEndpoint::Trades => "/api/trades",
        }
    }
}

/// What to do with a page response that is older than the latest request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaleResponses {
    #[default]
    Discard,
    /// Last response to arrive wins, even if it answers an older click
    Apply,
}

/// Where the chart pair gets its series from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartSource {
    #[default]
    PerformanceGraph,
    /// `graphs` block of the dashboard aggregate; skips the extra request
    Dashboard,
}

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin of the dashboard API; empty means "same origin as the page"
    pub api_base: String,

    pub trade_log_endpoint: TradeLogEndpoint,

    /// Rows per trade-log page, sent as `per_page`
    pub page_size: u32,

    /// Rows in the recent-trades table
    pub recent_trades_limit: usize,

    pub stale_responses: StaleResponses,

    pub chart_source: ChartSource,

    /// Bar chart headroom as a fraction of the largest absolute value
    pub bar_margin_ratio: f64,

    /// Periodic re-fetch of every section; `None` disables polling
    pub refresh_interval_secs: Option<u32>,

    /// Client-side request timeout (ignored in the browser, where fetch()
    /// has no per-request timeout)
    pub request_timeout_secs: u64,

    /// Log level filter (e.g. "info", "tradebot_dashboard=debug")
    pub log_level: String,

    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            trade_log_endpoint: TradeLogEndpoint::default(),
            page_size: 5,
            recent_trades_limit: 4,
            stale_responses: StaleResponses::default(),
            chart_source: ChartSource::default(),
            bar_margin_ratio: 0.5,
            refresh_interval_secs: None,
            request_timeout_secs: 30,
            log_level: "info".to_string(),
            log_format: LogFormat::Compact,
        }
    }
}

impl Config {
    /// Parse and validate a JSON config document
    pub fn from_json(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let config: Config = if raw.is_empty() {
            Config::default()
        } else {
            serde_json::from_str(raw)
                .map_err(|e| DashboardError::Config(format!("invalid config JSON: {e}")))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(DashboardError::Config("page_size must be positive".into()));
        }
        if self.recent_trades_limit == 0 {
            return Err(DashboardError::Config(
                "recent_trades_limit must be positive".into(),
            ));
        }
        if !self.bar_margin_ratio.is_finite() || self.bar_margin_ratio < 0.0 {
            return Err(DashboardError::Config(
                "bar_margin_ratio must be a non-negative number".into(),
            ));
        }
        if self.refresh_interval_secs == Some(0) {
            return Err(DashboardError::Config(
                "refresh_interval_secs must be positive (omit it to disable polling)".into(),
            ));
        }
        Ok(())
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base.trim_end_matches('/'))
    }
}
