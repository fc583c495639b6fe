//! Dashboard page - static shell the wasm module renders into
//!
//! Separated into HTML, CSS, and JS submodules for maintainability.
//!
//! # Architecture
//! - `html.rs`: Page structure, one element per render region
//! - `css.rs`: Styling with CSS custom properties
//! - `js.rs`: Loader for Chart.js and the wasm bundle
//!
//! The runtime configuration is embedded as JSON in
//! `<script type="application/json" id="dashboardConfig">`, which the
//! wasm entry point reads on start.

mod css;
mod html;
mod js;

use crate::config::Config;
use crate::error::Result;

pub use js::CHART_JS_URL;

/// Element id of the embedded configuration block
pub const CONFIG_ELEMENT_ID: &str = "dashboardConfig";

/// Generate the complete dashboard HTML page
pub fn dashboard_html(config: &Config) -> Result<String> {
    let config_json = serde_json::to_string(config)?;
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Trading Bot Dashboard</title>
    <style>
{css}
    </style>
    <script src="{chart_js}"></script>
</head>
<body>
{html}
    <script type="application/json" id="{config_id}">{config_json}</script>
    <script type="module">
{js}
    </script>
</body>
</html>"#,
        css = css::STYLES,
        chart_js = CHART_JS_URL,
        html = html::TEMPLATE,
        config_id = CONFIG_ELEMENT_ID,
        config_json = script_safe(&config_json),
        js = js::BOOTSTRAP
    ))
}

/// Keep embedded JSON from closing its `<script>` element
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Region;

    #[test]
    fn test_every_region_has_an_element() {
        let page = dashboard_html(&Config::default()).unwrap();
        for region in Region::ALL {
            assert!(
                page.contains(&format!(r#"id="{}""#, region.id())),
                "missing #{}",
                region.id()
            );
        }
    }

    #[test]
    fn test_pager_buttons_start_disabled() {
        let page = dashboard_html(&Config::default()).unwrap();
        assert!(page.contains(r#"id="prevPage" disabled"#));
        assert!(page.contains(r#"id="nextPage" disabled"#));
    }

    #[test]
    fn test_embedded_config_round_trips() {
        let config = Config {
            api_base: "https://bot.example".into(),
            page_size: 10,
            ..Config::default()
        };
        let page = dashboard_html(&config).unwrap();
        let start = page
            .find(r#"id="dashboardConfig">"#)
            .map(|i| i + r#"id="dashboardConfig">"#.len())
            .unwrap();
        let end = start + page[start..].find("</script>").unwrap();
        let parsed = Config::from_json(&page[start..end]).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_script_safe() {
        assert_eq!(script_safe(r#"{"a":"</script>"}"#), r#"{"a":"<\/script>"}"#);
    }

    #[test]
    fn test_loads_chart_library() {
        let page = dashboard_html(&Config::default()).unwrap();
        assert!(page.contains(CHART_JS_URL));
    }
}
