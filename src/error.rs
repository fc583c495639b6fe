//! Error types for the dashboard client
//!
//! Uses thiserror for ergonomic error definitions.
//! Every section pipeline converts these into a log line plus an alert;
//! none of them is fatal to the page as a whole.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Dashboard client errors
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Non-2xx response from the dashboard API
    #[error("HTTP {status} from {endpoint}")]
    Http { endpoint: String, status: u16 },

    /// Payload parsed but required top-level fields are absent
    #[error("Unexpected payload from {endpoint}: missing {}", missing.join(", "))]
    Shape {
        endpoint: String,
        missing: Vec<String>,
    },

    /// A page region a renderer writes to does not exist
    #[error("Render target missing: #{0}")]
    RenderTargetMissing(String),

    /// Network-level failure (DNS, connection reset, CORS, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Browser API failures (wasm32 only)
    #[error("Browser error: {0}")]
    Browser(String),
}

impl DashboardError {
    /// Short text for the user-facing alert
    pub fn alert_text(&self, section: &str) -> String {
        match self {
            DashboardError::Http { status, .. } => {
                format!("Could not load {section} (server returned {status}). Please try again.")
            }
            DashboardError::Shape { .. } | DashboardError::Json(_) => {
                format!("Could not load {section}: the server sent unexpected data.")
            }
            DashboardError::RenderTargetMissing(id) => {
                format!("Could not display {section}: page element #{id} is missing.")
            }
            _ => format!("Could not load {section}. Please try again."),
        }
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return DashboardError::Transport(format!("body decode failed: {err}"));
        }
        DashboardError::Transport(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DashboardError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DashboardError::Browser(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_lists_fields() {
        let err = DashboardError::Shape {
            endpoint: "/api/performance-graph".into(),
            missing: vec!["cumulative_profit_rate".into(), "daily_profit_loss".into()],
        };
        let text = err.to_string();
        assert!(text.contains("cumulative_profit_rate, daily_profit_loss"));
        assert!(text.contains("/api/performance-graph"));
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(matches!(err, DashboardError::Json(_)));
    }

    #[test]
    fn test_alert_text_mentions_section() {
        let err = DashboardError::Http {
            endpoint: "/api/dashboard".into(),
            status: 502,
        };
        let alert = err.alert_text("trade history");
        assert!(alert.contains("trade history"));
        assert!(alert.contains("502"));
    }
}
