//! Logging setup on top of `tracing`
//!
//! Natively events go to stderr. In the browser each formatted line is
//! forwarded to the devtools console through `console.error`, `console.warn`
//! or `console.log` according to the event's level.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{DashboardError, Result};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human readable
    Pretty,
    /// One line per event
    #[default]
    Compact,
    /// Newline-delimited JSON
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown log format: {s}")),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive (e.g. "info", "tradebot_dashboard=debug")
    pub level: String,
    pub format: LogFormat,
    /// Include module path in each line
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            with_target: true,
        }
    }
}

impl LogConfig {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

impl From<&crate::config::Config> for LogConfig {
    fn from(config: &crate::config::Config) -> Self {
        LogConfig::new(config.log_level.clone()).with_format(config.log_format)
    }
}

/// Install the global subscriber.
///
/// Fails (instead of panicking) when a subscriber is already set, e.g. when
/// the wasm module is started twice on the same page.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| DashboardError::Config(format!("invalid log level '{}': {e}", config.level)))?;

    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(config.with_target)
        .with_writer(writer::make_writer());
    // std::time::SystemTime is unavailable on wasm32-unknown-unknown
    #[cfg(target_arch = "wasm32")]
    let layer = layer.without_time();

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format {
        LogFormat::Pretty => registry.with(layer.pretty()).try_init(),
        LogFormat::Compact => registry.with(layer.compact()).try_init(),
        LogFormat::Json => registry.with(layer.json()).try_init(),
    };
    installed.map_err(|e| DashboardError::Config(format!("logging already initialized: {e}")))?;

    tracing::info!(format = ?config.format, level = %config.level, "Logging initialized");
    Ok(())
}

/// Browser console function an event is sent to
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Log,
}

/// Decided by the event's level only, never by its text
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn console_method(level: tracing::Level) -> ConsoleMethod {
    if level == tracing::Level::ERROR {
        ConsoleMethod::Error
    } else if level == tracing::Level::WARN {
        ConsoleMethod::Warn
    } else {
        ConsoleMethod::Log
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod writer {
    pub fn make_writer() -> fn() -> std::io::Stderr {
        std::io::stderr
    }
}

#[cfg(target_arch = "wasm32")]
mod writer {
    use std::io::{self, Write};

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;

    /// Hands out one `ConsoleWriter` per event, tagged with its level
    pub struct MakeConsoleWriter;

    pub fn make_writer() -> MakeConsoleWriter {
        MakeConsoleWriter
    }

    impl<'a> MakeWriter<'a> for MakeConsoleWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter::new(Level::INFO)
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter::new(*meta.level())
        }
    }

    /// Buffers one formatted event and hands it to `console.*` on flush/drop
    pub struct ConsoleWriter {
        level: Level,
        buf: Vec<u8>,
    }

    impl ConsoleWriter {
        fn new(level: Level) -> Self {
            Self {
                level,
                buf: Vec::new(),
            }
        }
    }

    impl Write for ConsoleWriter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.buf.is_empty() {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&self.buf);
            let js = wasm_bindgen::JsValue::from_str(line.trim_end());
            match super::console_method(self.level) {
                super::ConsoleMethod::Error => web_sys::console::error_1(&js),
                super::ConsoleMethod::Warn => web_sys::console::warn_1(&js),
                super::ConsoleMethod::Log => web_sys::console::log_1(&js),
            }
            self.buf.clear();
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = self.flush();
        }
    }
}
