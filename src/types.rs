//! Common types for the dashboard
//!
//! Wire-level shapes of the dashboard API payloads. Everything here is
//! read-only once deserialized; renderers only ever borrow it.

use serde::{Deserialize, Serialize};

/// Headline performance figures, each independently optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSnapshot {
    #[serde(default)]
    pub current_profit_rate: Option<f64>,
    #[serde(default)]
    pub current_profit_loss: Option<f64>,
    #[serde(default)]
    pub cumulative_profit_rate: Option<f64>,
    #[serde(default)]
    pub cumulative_profit_loss: Option<f64>,
}

/// Cash and asset holdings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    #[serde(default)]
    pub total_investment: Option<f64>,
    /// KRW cash
    pub cash_balance: f64,
    /// Asset code of `balance` (e.g. "BTC")
    pub currency: String,
    pub balance: f64,
}

/// What the bot decided on a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

impl TradeAction {
    pub fn as_str(self) -> &'static str {
        match self {
            TradeAction::Buy => "buy",
            TradeAction::Sell => "sell",
            TradeAction::Hold => "hold",
        }
    }
}

impl std::fmt::Display for TradeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry of the trade log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// ISO 8601 timestamp as sent by the server
    pub timestamp: String,
    pub action: TradeAction,
    pub amount: f64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// One (date, value) pair of a chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
    pub date: String,
    /// `/api/performance-graph` names this `rate` or `loss` depending on series
    #[serde(alias = "rate", alias = "loss")]
    pub value: f64,
}

/// Chronological series; order is preserved exactly as received
pub type GraphSeries = Vec<GraphPoint>;

/// Payload of `/api/performance-graph`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceGraph {
    pub cumulative_profit_rate: GraphSeries,
    pub daily_profit_loss: GraphSeries,
}

/// `graphs` block of the dashboard aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardGraphs {
    pub cumulative_profit: GraphSeries,
    pub daily_profit: GraphSeries,
}

impl From<DashboardGraphs> for PerformanceGraph {
    fn from(graphs: DashboardGraphs) -> Self {
        Self {
            cumulative_profit_rate: graphs.cumulative_profit,
            daily_profit_loss: graphs.daily_profit,
        }
    }
}

/// Payload of `/api/dashboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub performance: PerformanceSnapshot,
    #[serde(default)]
    pub portfolio: Option<PortfolioSnapshot>,
    #[serde(default)]
    pub graphs: Option<DashboardGraphs>,
    pub recent_trades: Vec<TradeRecord>,
}

/// One page of a paged list plus the server's total count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    #[serde(rename = "trade_logs")]
    pub items: Vec<T>,
    pub page: u32,
    pub total_records: u64,
}
