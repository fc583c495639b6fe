//! Chart pair description
//!
//! Builds Chart.js-compatible configurations for the cumulative return line
//! chart and the daily P&L bar chart. Drawing is left to the charting
//! library; this module only decides data, colours and axis range.

use serde::Serialize;

use super::Region;
use crate::types::{GraphSeries, PerformanceGraph};

const LINE_BORDER: &str = "rgba(75, 192, 192, 1)";
const LINE_FILL: &str = "rgba(75, 192, 192, 0.2)";
const GAIN_FILL: &str = "rgba(54, 162, 235, 0.5)";
const GAIN_BORDER: &str = "rgba(54, 162, 235, 1)";
const LOSS_FILL: &str = "rgba(255, 99, 132, 0.5)";
const LOSS_BORDER: &str = "rgba(255, 99, 132, 1)";

/// Headroom used when every bar is zero
const FLAT_MARGIN: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// One colour for the whole dataset, or one per data point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(&'static str),
    PerPoint(Vec<&'static str>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    pub border_color: Paint,
    pub background_color: Paint,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub suggested_min: f64,
    pub suggested_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

/// Declarative chart handed to the charting library
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
    /// Tooltip unit appended to raw values ("%" or "KRW"); not part of the
    /// library config, the document shell installs the callback
    #[serde(skip)]
    pub value_unit: &'static str,
}

/// Both charts plus the canvases they belong to
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPair {
    pub cumulative: ChartSpec,
    pub daily: ChartSpec,
}

impl ChartPair {
    pub fn targets(&self) -> [(Region, &ChartSpec); 2] {
        [
            (Region::CumulativeProfitChart, &self.cumulative),
            (Region::DailyProfitChart, &self.daily),
        ]
    }
}

/// Build the line (cumulative) and bar (daily) charts
pub fn render_chart_pair(graph: &PerformanceGraph, margin_ratio: f64) -> ChartPair {
    ChartPair {
        cumulative: cumulative_chart(&graph.cumulative_profit_rate),
        daily: daily_chart(&graph.daily_profit_loss, margin_ratio),
    }
}

fn cumulative_chart(series: &GraphSeries) -> ChartSpec {
    let (labels, data) = split(series);
    ChartSpec {
        kind: ChartKind::Line,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: "Cumulative return (%)",
                data,
                border_color: Paint::Solid(LINE_BORDER),
                background_color: Paint::Solid(LINE_FILL),
                border_width: 2,
                fill: Some(true),
                tension: Some(0.4),
            }],
        },
        options: ChartOptions {
            responsive: true,
            plugins: top_legend(),
            scales: None,
        },
        value_unit: "%",
    }
}

fn daily_chart(series: &GraphSeries, margin_ratio: f64) -> ChartSpec {
    let (labels, data) = split(series);
    let y = suggested_range(&data, margin_ratio);
    let (background, border): (Vec<_>, Vec<_>) = data
        .iter()
        .map(|v| {
            if *v >= 0.0 {
                (GAIN_FILL, GAIN_BORDER)
            } else {
                (LOSS_FILL, LOSS_BORDER)
            }
        })
        .unzip();

    ChartSpec {
        kind: ChartKind::Bar,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: "Daily P&L (KRW)",
                data,
                border_color: Paint::PerPoint(border),
                background_color: Paint::PerPoint(background),
                border_width: 1,
                fill: None,
                tension: None,
            }],
        },
        options: ChartOptions {
            responsive: true,
            plugins: top_legend(),
            scales: Some(Scales { y }),
        },
        value_unit: "KRW",
    }
}

/// `[min(0, lo) - margin, max(0, hi) + margin]`, margin scaled to the
/// largest magnitude so no bar touches the frame
pub fn suggested_range(values: &[f64], margin_ratio: f64) -> Axis {
    let (lo, hi) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(*v), hi.max(*v)));

    let extent = lo.abs().max(hi.abs());
    let margin = if extent > 0.0 {
        extent * margin_ratio
    } else {
        FLAT_MARGIN
    };

    Axis {
        suggested_min: lo - margin,
        suggested_max: hi + margin,
    }
}

fn split(series: &GraphSeries) -> (Vec<String>, Vec<f64>) {
    series.iter().map(|p| (p.date.clone(), p.value)).unzip()
}

fn top_legend() -> Plugins {
    Plugins {
        legend: Legend { position: "top" },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GraphPoint;

    fn series(values: &[f64]) -> GraphSeries {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| GraphPoint {
                date: format!("2024-12-{:02}", i + 1),
                value: *v,
            })
            .collect()
    }

    #[test]
    fn test_bar_range_has_margin_beyond_extremes() {
        let axis = suggested_range(&[-5.0, 10.0, -20.0], 0.5);
        assert!(axis.suggested_min <= -30.0);
        assert!(axis.suggested_max >= 20.0);
    }

    #[test]
    fn test_bar_range_always_includes_zero() {
        let axis = suggested_range(&[100.0, 200.0], 0.1);
        assert!(axis.suggested_min < 0.0);
        assert!(axis.suggested_max > 200.0);

        let axis = suggested_range(&[-100.0, -50.0], 0.1);
        assert!(axis.suggested_max > 0.0);
        assert!(axis.suggested_min < -100.0);
    }

    #[test]
    fn test_bar_range_flat_or_empty() {
        let axis = suggested_range(&[], 0.5);
        assert_eq!((axis.suggested_min, axis.suggested_max), (-1.0, 1.0));
        let axis = suggested_range(&[0.0, 0.0], 0.5);
        assert_eq!((axis.suggested_min, axis.suggested_max), (-1.0, 1.0));
    }

    #[test]
    fn test_bar_colours_follow_sign() {
        let graph = PerformanceGraph {
            cumulative_profit_rate: series(&[]),
            daily_profit_loss: series(&[0.0, -1.0, 2.0]),
        };
        let pair = render_chart_pair(&graph, 0.5);
        let dataset = &pair.daily.data.datasets[0];
        assert_eq!(
            dataset.background_color,
            Paint::PerPoint(vec![GAIN_FILL, LOSS_FILL, GAIN_FILL])
        );
        assert_eq!(
            dataset.border_color,
            Paint::PerPoint(vec![GAIN_BORDER, LOSS_BORDER, GAIN_BORDER])
        );
    }

    #[test]
    fn test_series_order_preserved() {
        let mut points = series(&[3.0, 1.0, 2.0]);
        points.swap(0, 2);
        let graph = PerformanceGraph {
            cumulative_profit_rate: points.clone(),
            daily_profit_loss: points,
        };
        let pair = render_chart_pair(&graph, 0.5);
        assert_eq!(
            pair.cumulative.data.labels,
            vec!["2024-12-03", "2024-12-02", "2024-12-01"]
        );
        assert_eq!(pair.cumulative.data.datasets[0].data, vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_chart_spec_serializes_for_chartjs() {
        let graph = PerformanceGraph {
            cumulative_profit_rate: series(&[1.0]),
            daily_profit_loss: series(&[-5.0, 10.0, -20.0]),
        };
        let pair = render_chart_pair(&graph, 0.5);

        let line = serde_json::to_value(&pair.cumulative).unwrap();
        assert_eq!(line["type"], "line");
        assert_eq!(line["data"]["datasets"][0]["borderColor"], LINE_BORDER);
        assert_eq!(line["data"]["datasets"][0]["tension"], 0.4);
        assert!(line["options"].get("scales").is_none());
        assert!(line.get("value_unit").is_none());

        let bar = serde_json::to_value(&pair.daily).unwrap();
        assert_eq!(bar["type"], "bar");
        assert_eq!(bar["options"]["scales"]["y"]["suggestedMin"], -30.0);
        assert_eq!(bar["options"]["scales"]["y"]["suggestedMax"], 20.0);
        assert!(bar["data"]["datasets"][0].get("fill").is_none());
    }

    #[test]
    fn test_targets_map_to_canvases() {
        let graph = PerformanceGraph {
            cumulative_profit_rate: vec![],
            daily_profit_loss: vec![],
        };
        let pair = render_chart_pair(&graph, 0.5);
        let targets = pair.targets();
        assert_eq!(targets[0].0, Region::CumulativeProfitChart);
        assert_eq!(targets[1].0.id(), "dailyProfitChart");
        assert_eq!(targets[1].1.kind, ChartKind::Bar);
    }
}
