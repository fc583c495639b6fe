//! Dashboard orchestrator
//!
//! Coordinates API client, pagination controller, renderers and document.
//!
//! # Pipelines
//! - summary: `/api/dashboard` -> performance, portfolio, recent trades
//!   (and charts when configured to read them from the aggregate)
//! - trade log: `/api/trade-logs` -> trade-log table and pager
//! - charts: `/api/performance-graph` -> chart pair
//!
//! Pipelines run concurrently and fail independently: an error is logged,
//! alerted, and leaves every other region as it was.

use std::cell::{Ref, RefCell};

use crate::client::DashboardApi;
use crate::config::{ChartSource, Config};
use crate::dom::Document;
use crate::error::{DashboardError, Result};
use crate::pagination::{Direction, NavState, PageRequest, Pagination, Settlement};
use crate::render::{
    ChartPair, Markup, Region, Rendered, render_chart_pair, render_pager_label,
    render_performance, render_portfolio, render_recent_trades, render_trade_log,
};
use crate::types::PerformanceGraph;

/// Independently failing part of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The `/api/dashboard` fetch feeding the next three sections
    Summary,
    Performance,
    Portfolio,
    RecentTrades,
    TradeLog,
    Charts,
}

impl Section {
    pub fn name(self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::Performance => "performance",
            Section::Portfolio => "portfolio",
            Section::RecentTrades => "recent_trades",
            Section::TradeLog => "trade_log",
            Section::Charts => "charts",
        }
    }

    /// Wording used in user-facing alerts
    pub fn label(self) -> &'static str {
        match self {
            Section::Summary => "the dashboard summary",
            Section::Performance => "performance",
            Section::Portfolio => "the portfolio",
            Section::RecentTrades => "recent trades",
            Section::TradeLog => "the trade history",
            Section::Charts => "the performance charts",
        }
    }
}

/// Dashboard orchestrator over an API and a document
pub struct Dashboard<A, D> {
    api: A,
    document: RefCell<D>,
    trade_log: RefCell<Pagination>,
    config: Config,
}

impl<A: DashboardApi, D: Document> Dashboard<A, D> {
    pub fn new(api: A, document: D, config: Config) -> Self {
        let trade_log = Pagination::new(config.page_size, config.stale_responses);
        Self {
            api,
            document: RefCell::new(document),
            trade_log: RefCell::new(trade_log),
            config,
        }
    }

    pub fn document(&self) -> Ref<'_, D> {
        self.document.borrow()
    }

    /// Current pager state of the trade log
    pub fn trade_log_nav(&self) -> NavState {
        self.trade_log.borrow().nav()
    }

    /// Initial load: every pipeline at once, trade log on page 1
    pub async fn load(&self) {
        tracing::info!("Loading dashboard");
        let request = self.trade_log.borrow_mut().request(1);
        futures::join!(
            self.load_summary(),
            self.load_trade_log(request),
            self.load_charts()
        );
    }

    /// Poll tick: same as `load`, but the trade log stays on its page
    pub async fn refresh(&self) {
        let request = {
            let mut trade_log = self.trade_log.borrow_mut();
            let page = trade_log.current_page();
            trade_log.request(page)
        };
        tracing::debug!(page = request.page, "Refreshing dashboard");
        futures::join!(
            self.load_summary(),
            self.load_trade_log(request),
            self.load_charts()
        );
    }

    /// Pager click: move the cursor, then fetch and render the trade log only
    pub async fn navigate(&self, direction: Direction) {
        let Some(request) = self.trade_log.borrow_mut().begin(direction) else {
            tracing::debug!(?direction, "Navigation ignored on first page");
            return;
        };
        let nav = self.trade_log_nav();
        self.paint_nav(nav);
        self.load_trade_log(request).await;
    }

    async fn load_summary(&self) {
        let data = match self.api.get_dashboard().await {
            Ok(data) => data,
            Err(e) => return self.fail(Section::Summary, &e),
        };
        tracing::debug!(recent_trades = data.recent_trades.len(), "Dashboard summary received");

        let performance = self.paint(Section::Performance, render_performance(&data.performance));
        let portfolio = self.paint(Section::Portfolio, render_portfolio(data.portfolio.as_ref()));
        let recent = self.paint(
            Section::RecentTrades,
            render_recent_trades(&data.recent_trades, self.config.recent_trades_limit),
        );

        if self.config.chart_source == ChartSource::Dashboard {
            match data.graphs {
                Some(graphs) => self.draw_charts(&PerformanceGraph::from(graphs)),
                None => self.fail(
                    Section::Charts,
                    &DashboardError::Shape {
                        endpoint: "/api/dashboard".to_string(),
                        missing: vec!["graphs".to_string()],
                    },
                ),
            }
        }

        if !(performance && portfolio && recent) {
            tracing::debug!("Summary partially rendered, refresh time left as is");
            return;
        }
        let stamp = format!("Updated: {}", chrono::Local::now().format("%H:%M:%S"));
        self.paint(
            Section::Summary,
            vec![(Region::RefreshTime, Markup::text(&stamp))],
        );
    }

    async fn load_trade_log(&self, request: PageRequest) {
        let page_size = self.trade_log.borrow().page_size();
        tracing::debug!(page = request.page, token = request.token, "Fetching trade log");

        let page = match self.api.get_trade_logs(request.page, page_size).await {
            Ok(page) => page,
            Err(e) => {
                let restored = self.trade_log.borrow_mut().abandon(request.token);
                if let Some(nav) = restored {
                    self.paint_nav(nav);
                }
                return self.fail(Section::TradeLog, &e);
            }
        };

        let settlement =
            self.trade_log
                .borrow_mut()
                .settle(request.token, page.page, page.total_records);
        match settlement {
            Settlement::Stale { token, latest } => {
                tracing::info!(
                    token,
                    latest,
                    page = page.page,
                    "Discarding stale trade log response"
                );
            }
            Settlement::Applied(nav) => {
                tracing::debug!(
                    page = nav.current_page,
                    rows = page.items.len(),
                    total = page.total_records,
                    "Trade log page applied"
                );
                self.paint(Section::TradeLog, render_trade_log(&page));
                self.paint_nav(nav);
            }
        }
    }

    async fn load_charts(&self) {
        if self.config.chart_source != ChartSource::PerformanceGraph {
            return;
        }
        match self.api.get_performance_graph().await {
            Ok(graph) => self.draw_charts(&graph),
            Err(e) => self.fail(Section::Charts, &e),
        }
    }

    fn draw_charts(&self, graph: &PerformanceGraph) {
        let pair: ChartPair = render_chart_pair(graph, self.config.bar_margin_ratio);
        let drawn: Vec<Result<()>> = {
            let mut document = self.document.borrow_mut();
            pair.targets()
                .into_iter()
                .map(|(region, spec)| document.draw_chart(region, spec))
                .collect()
        };
        self.report(Section::Charts, drawn);
    }

    fn paint_nav(&self, nav: NavState) {
        let written: Vec<Result<()>> = {
            let mut document = self.document.borrow_mut();
            let mut written: Vec<Result<()>> = render_pager_label(&nav)
                .iter()
                .map(|(region, markup)| document.replace(*region, markup))
                .collect();
            written.push(document.set_disabled(Region::PrevPage, nav.prev_disabled));
            written.push(document.set_disabled(Region::NextPage, nav.next_disabled));
            written
        };
        self.report(Section::TradeLog, written);
    }

    /// Write a renderer's output. Every region that exists is replaced even
    /// when another one is missing; returns whether all writes succeeded.
    fn paint(&self, section: Section, rendered: Rendered) -> bool {
        let written: Vec<Result<()>> = {
            let mut document = self.document.borrow_mut();
            rendered
                .iter()
                .map(|(region, markup)| document.replace(*region, markup))
                .collect()
        };
        self.report(section, written)
    }

    /// One alert per section however many writes failed
    fn report(&self, section: Section, results: Vec<Result<()>>) -> bool {
        let mut errors = results.into_iter().filter_map(Result::err);
        let Some(first) = errors.next() else {
            return true;
        };
        for extra in errors {
            tracing::warn!(section = section.name(), error = %extra, "Further write failed");
        }
        self.fail(section, &first);
        false
    }

    fn fail(&self, section: Section, error: &DashboardError) {
        tracing::error!(section = section.name(), error = %error, "Section update failed");
        self.document
            .borrow_mut()
            .alert(&error.alert_text(section.label()));
    }
}
