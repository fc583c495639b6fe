//! Dashboard JavaScript
//!
//! Only a loader: everything after start-up (fetching, rendering, paging,
//! charts) runs in the wasm module. Chart.js is pulled from a CDN and
//! looked up as the global `Chart`.

/// Chart.js build exposing the `Chart` global
pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Imports the wasm-bindgen `--target web` output from `./pkg/`
pub const BOOTSTRAP: &str = r#"
import init from './pkg/tradebot_dashboard.js';

init().catch((e) => {
    console.error('Failed to start dashboard:', e);
    document.getElementById('refreshTime').textContent = 'Failed to load';
});
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_imports_bundle() {
        assert!(BOOTSTRAP.contains("from './pkg/tradebot_dashboard.js'"));
    }
}
