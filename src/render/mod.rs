//! Section renderers
//!
//! Every renderer is a pure function from a borrowed data slice to the full
//! replacement content of the regions it owns. Writing the result into the
//! page is the job of [`crate::dom::Document`].
//!
//! # Ownership
//! - `performance`: the four headline metric cells
//! - `portfolio`: total investment and the holdings list
//! - `trades`: recent-trades table, trade-log table and the pager label
//! - `charts`: the two chart canvases

pub mod charts;
pub mod performance;
pub mod portfolio;
pub mod trades;

pub use charts::{ChartPair, ChartSpec, render_chart_pair};
pub use performance::render_performance;
pub use portfolio::render_portfolio;
pub use trades::{render_pager_label, render_recent_trades, render_trade_log};

/// Fixed element ids the renderers write to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    CurrentProfitRate,
    CurrentProfitLoss,
    CumulativeProfitRate,
    CumulativeProfitLoss,
    TotalInvestment,
    PortfolioList,
    RecentTradesTable,
    AllTradesTable,
    PrevPage,
    NextPage,
    CurrentPage,
    CumulativeProfitChart,
    DailyProfitChart,
    RefreshTime,
}

impl Region {
    pub const ALL: [Region; 14] = [
        Region::CurrentProfitRate,
        Region::CurrentProfitLoss,
        Region::CumulativeProfitRate,
        Region::CumulativeProfitLoss,
        Region::TotalInvestment,
        Region::PortfolioList,
        Region::RecentTradesTable,
        Region::AllTradesTable,
        Region::PrevPage,
        Region::NextPage,
        Region::CurrentPage,
        Region::CumulativeProfitChart,
        Region::DailyProfitChart,
        Region::RefreshTime,
    ];

    /// DOM element id
    pub fn id(self) -> &'static str {
        match self {
            Region::CurrentProfitRate => "currentProfitRate",
            Region::CurrentProfitLoss => "currentProfitLoss",
            Region::CumulativeProfitRate => "cumulativeProfitRate",
            Region::CumulativeProfitLoss => "cumulativeProfitLoss",
            Region::TotalInvestment => "totalInvestment",
            Region::PortfolioList => "portfolioList",
            Region::RecentTradesTable => "recentTradesTable",
            Region::AllTradesTable => "allTradesTable",
            Region::PrevPage => "prevPage",
            Region::NextPage => "nextPage",
            Region::CurrentPage => "currentPage",
            Region::CumulativeProfitChart => "cumulativeProfitChart",
            Region::DailyProfitChart => "dailyProfitChart",
            Region::RefreshTime => "refreshTime",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Escaped HTML fragment, ready to become an element's inner HTML
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Markup(String);

impl Markup {
    /// Plain text, escaped
    pub fn text(text: &str) -> Self {
        Self(escape(text))
    }

    /// Pre-built HTML; callers must have escaped any data inside
    pub(crate) fn raw(html: String) -> Self {
        Self(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Markup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Region contents produced by one renderer call
pub type Rendered = Vec<(Region, Markup)>;

/// HTML-escape text content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped text with newlines turned into `<br>`
pub(crate) fn multiline(text: &str) -> String {
    text.split('\n').map(escape).collect::<Vec<_>>().join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_ids_unique() {
        let mut ids: Vec<&str> = Region::ALL.iter().map(|r| r.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Region::ALL.len());
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"buy" & 'hold'</b>"#),
            "&lt;b&gt;&quot;buy&quot; &amp; &#39;hold&#39;&lt;/b&gt;"
        );
        assert_eq!(Markup::text("1 < 2").as_str(), "1 &lt; 2");
    }

    #[test]
    fn test_multiline() {
        assert_eq!(multiline("a.\n<b>."), "a.<br>&lt;b&gt;.");
    }
}
