//! Trading Bot Dashboard - browser client for a BTC/KRW trading bot
//!
//! Compiled to WebAssembly and served as a single page. Polls the bot's
//! HTTP API and renders performance, portfolio, trade history and profit
//! charts.
//!
//! # Architecture
//! - `client`: typed access to the dashboard API
//! - `pagination`: page cursor with sequence tokens for the trade log
//! - `render`: pure `data -> (region, markup)` renderers and chart specs
//! - `dom`: the `Document` seam every render passes through
//! - `dashboard`: orchestration of the independent section pipelines
//! - `page`: the static HTML shell the module mounts into
//!
//! # Features
//! - Sections fail independently, each with its own alert
//! - Out-of-order page responses are discarded (configurable)
//! - Optional auto-refresh

// Clippy configuration for display code patterns
#![allow(clippy::cast_precision_loss)] // Float casts OK for display
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::future_not_send)] // Single-threaded browser runtime
#![allow(clippy::map_unwrap_or)] // Explicit error handling preference

#[cfg(target_arch = "wasm32")]
mod browser;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod dom;
pub mod error;
pub mod format;
pub mod logging;
pub mod page;
pub mod pagination;
pub mod render;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserDocument;
pub use client::{ApiClient, DashboardApi};
pub use config::{ChartSource, Config, StaleResponses, TradeLogEndpoint};
pub use dashboard::{Dashboard, Section};
pub use dom::{Document, MemoryDocument};
pub use error::{DashboardError, Result};
pub use logging::{LogConfig, LogFormat, init_logging};
pub use pagination::{Direction, NavState, PageRequest, Pagination, Settlement};
pub use render::{ChartPair, ChartSpec, Markup, Region, Rendered};
pub use types::*;
