//! Headline performance cells

use super::{Markup, Region, Rendered};
use crate::format::{PLACEHOLDER, format_number};
use crate::types::PerformanceSnapshot;

/// Four metric cells; an absent metric shows the placeholder, never `0.00`
pub fn render_performance(performance: &PerformanceSnapshot) -> Rendered {
    vec![
        (Region::CurrentProfitRate, metric(performance.current_profit_rate)),
        (Region::CurrentProfitLoss, metric(performance.current_profit_loss)),
        (Region::CumulativeProfitRate, metric(performance.cumulative_profit_rate)),
        (Region::CumulativeProfitLoss, metric(performance.cumulative_profit_loss)),
    ]
}

fn metric(value: Option<f64>) -> Markup {
    match value {
        Some(v) if v.is_finite() => Markup::raw(format!(
            r#"<span class="{}">{}</span>"#,
            pnl_class(v),
            format_number(v)
        )),
        _ => Markup::raw(format!(r#"<span class="neutral">{PLACEHOLDER}</span>"#)),
    }
}

pub(crate) fn pnl_class(value: f64) -> &'static str {
    if value > 0.0 {
        "positive"
    } else if value < 0.0 {
        "negative"
    } else {
        "neutral"
    }
}
