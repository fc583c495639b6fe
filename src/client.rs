//! Dashboard API client
//!
//! One GET per endpoint:
//! - `/api/performance-graph` - chart series
//! - `/api/trade-logs` (or legacy `/api/trades`) - one page of the trade log
//! - `/api/dashboard` - performance, portfolio and recent trades
//!
//! Each call is fire-once: no retry, no caching. A failed status becomes
//! `DashboardError::Http`, a body without the required top-level fields
//! becomes `DashboardError::Shape`.

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{DashboardError, Result};
use crate::types::{DashboardData, PageResult, PerformanceGraph, TradeRecord};

const PERFORMANCE_GRAPH_PATH: &str = "/api/performance-graph";
const DASHBOARD_PATH: &str = "/api/dashboard";

const PERFORMANCE_GRAPH_FIELDS: &[&str] = &["cumulative_profit_rate", "daily_profit_loss"];
const TRADE_LOG_FIELDS: &[&str] = &["trade_logs", "page", "total_records"];
const DASHBOARD_FIELDS: &[&str] = &["performance", "recent_trades"];

/// Longest error body echoed into the log
const MAX_LOGGED_BODY: usize = 200;

/// Data source the orchestrator pulls from.
///
/// The futures are not `Send`: in the browser everything runs on the one
/// event-loop thread.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    async fn get_performance_graph(&self) -> Result<PerformanceGraph>;

    async fn get_trade_logs(&self, page: u32, page_size: u32) -> Result<PageResult<TradeRecord>>;

    async fn get_dashboard(&self) -> Result<DashboardData>;
}

/// HTTP implementation backed by reqwest (fetch() on wasm32)
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
}

impl ApiClient {
    /// Create new client; relative `api_base` only works in the browser
    pub fn new(config: Config) -> Result<Self> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder =
            builder.timeout(std::time::Duration::from_secs(config.request_timeout_secs));
        let http = builder.build()?;

        Ok(Self { http, config })
    }

    /// Perform GET and validate status and payload shape
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<String>,
        required: &[&str],
    ) -> Result<T> {
        let mut url = self.config.url(path);
        if let Some(query) = query {
            url.push('?');
            url.push_str(&query);
        }

        tracing::debug!(endpoint = path, %url, "GET");
        let response = self.http.get(&url).send().await?;
        Self::handle_response(path, response, required).await
    }

    /// Handle API response, checking status and required fields
    async fn handle_response<T: DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
        required: &[&str],
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(MAX_LOGGED_BODY).collect();
            tracing::warn!(endpoint, status = status.as_u16(), %body, "API request failed");
            return Err(DashboardError::Http {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_payload(endpoint, &body, required)
    }
}

impl DashboardApi for ApiClient {
    async fn get_performance_graph(&self) -> Result<PerformanceGraph> {
        self.get(PERFORMANCE_GRAPH_PATH, None, PERFORMANCE_GRAPH_FIELDS)
            .await
    }

    async fn get_trade_logs(&self, page: u32, page_size: u32) -> Result<PageResult<TradeRecord>> {
        let query = format!("page={page}&per_page={page_size}");
        self.get(
            self.config.trade_log_endpoint.path(),
            Some(query),
            TRADE_LOG_FIELDS,
        )
        .await
    }

    async fn get_dashboard(&self) -> Result<DashboardData> {
        self.get(DASHBOARD_PATH, None, DASHBOARD_FIELDS).await
    }
}

/// Check required top-level fields, then deserialize
pub(crate) fn parse_payload<T: DeserializeOwned>(
    endpoint: &str,
    body: &str,
    required: &[&str],
) -> Result<T> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    let missing: Vec<String> = required
        .iter()
        .filter(|field| value.get(**field).is_none_or(serde_json::Value::is_null))
        .map(|field| (*field).to_string())
        .collect();
    if !missing.is_empty() {
        tracing::warn!(endpoint, ?missing, "API payload missing required fields");
        return Err(DashboardError::Shape {
            endpoint: endpoint.to_string(),
            missing,
        });
    }

    serde_json::from_value(value).map_err(DashboardError::from)
}
