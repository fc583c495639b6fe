//! Write the dashboard page to stdout (or a file) for static hosting.
//!
//! Usage: `export-page [config.json] [output.html]`
//!
//! The config file is embedded into the page as-is after validation; with
//! no argument the defaults are used and the API is assumed to share the
//! page's origin. `RUST_LOG` and `LOG_FORMAT` (pretty, compact, json)
//! control this tool's own logging on stderr.

use std::{env, fs, process};

use tradebot_dashboard::{
    Config, DashboardError, LogConfig, LogFormat, Result, init_logging, page,
};

fn run() -> Result<()> {
    let log_format = match env::var("LOG_FORMAT") {
        Ok(raw) => raw.parse::<LogFormat>().map_err(DashboardError::Config)?,
        Err(_) => LogFormat::default(),
    };
    init_logging(
        &LogConfig::new(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
            .with_format(log_format),
    )?;

    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .map_err(|e| DashboardError::Config(format!("cannot read {path}: {e}")))?;
            Config::from_json(&raw)?
        }
        None => Config::default(),
    };
    let html = page::dashboard_html(&config)?;

    match args.next() {
        Some(out) => {
            fs::write(&out, &html)
                .map_err(|e| DashboardError::Config(format!("cannot write {out}: {e}")))?;
            tracing::info!(path = %out, bytes = html.len(), "Dashboard page written");
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("export-page: {e}");
        process::exit(1);
    }
}
