//! Browser entry point (wasm32 only)
//!
//! Reads the embedded configuration, installs logging, wires the pager
//! buttons and optional polling, then runs the initial load. The DOM side of
//! `Document` is implemented here with web-sys; charts go through the
//! global `Chart` constructor loaded by the page.

use std::collections::HashMap;
use std::rc::Rc;

use js_sys::{Array, Function, JSON, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlButtonElement, HtmlCanvasElement, Window};

use crate::client::ApiClient;
use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::dom::Document;
use crate::error::{DashboardError, Result};
use crate::logging::{LogConfig, init_logging};
use crate::page::CONFIG_ELEMENT_ID;
use crate::pagination::Direction;
use crate::render::{ChartSpec, Markup, Region};

type BrowserDashboard = Dashboard<ApiClient, BrowserDocument>;

/// Live page behind the `Document` trait
pub struct BrowserDocument {
    window: Window,
    document: web_sys::Document,
    /// Chart.js instances by canvas, destroyed before a redraw
    charts: HashMap<Region, JsValue>,
}

impl BrowserDocument {
    pub fn new(window: Window, document: web_sys::Document) -> Self {
        Self {
            window,
            document,
            charts: HashMap::new(),
        }
    }

    fn element(&self, region: Region) -> Result<Element> {
        self.document
            .get_element_by_id(region.id())
            .ok_or_else(|| DashboardError::RenderTargetMissing(region.id().to_string()))
    }

    fn destroy_chart(&mut self, region: Region) -> Result<()> {
        let Some(chart) = self.charts.remove(&region) else {
            return Ok(());
        };
        let destroy: Function = Reflect::get(&chart, &JsValue::from_str("destroy"))?
            .dyn_into()
            .map_err(|_| DashboardError::Browser("chart has no destroy()".into()))?;
        destroy.call0(&chart)?;
        Ok(())
    }
}

impl Document for BrowserDocument {
    fn replace(&mut self, region: Region, markup: &Markup) -> Result<()> {
        self.element(region)?.set_inner_html(markup.as_str());
        Ok(())
    }

    fn set_disabled(&mut self, region: Region, disabled: bool) -> Result<()> {
        let button: HtmlButtonElement = self
            .element(region)?
            .dyn_into()
            .map_err(|_| DashboardError::Browser(format!("#{} is not a button", region.id())))?;
        button.set_disabled(disabled);
        Ok(())
    }

    fn draw_chart(&mut self, region: Region, spec: &ChartSpec) -> Result<()> {
        let canvas: HtmlCanvasElement = self
            .element(region)?
            .dyn_into()
            .map_err(|_| DashboardError::Browser(format!("#{} is not a canvas", region.id())))?;

        let constructor: Function = Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))?
            .dyn_into()
            .map_err(|_| DashboardError::Browser("Chart.js is not loaded".into()))?;

        let config = JSON::parse(&serde_json::to_string(spec)?)?;
        install_tooltip(&config, spec.value_unit)?;

        self.destroy_chart(region)?;
        let chart = Reflect::construct(&constructor, &Array::of2(&canvas.into(), &config))?;
        self.charts.insert(region, chart);
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            tracing::warn!(error = ?e, "window.alert failed");
        }
    }
}

/// `options.plugins.tooltip.callbacks.label`: value with two decimals and unit
fn install_tooltip(config: &JsValue, unit: &str) -> Result<()> {
    let plugins = Reflect::get(
        &Reflect::get(config, &JsValue::from_str("options"))?,
        &JsValue::from_str("plugins"),
    )?;
    let label = Function::new_with_args(
        "context",
        &format!(
            "const v = context.parsed.y; \
             return context.dataset.label + ': ' + \
             v.toLocaleString(undefined, {{ minimumFractionDigits: 2, maximumFractionDigits: 2 }}) + \
             ' {unit}';"
        ),
    );

    let callbacks = Object::new();
    Reflect::set(&callbacks, &JsValue::from_str("label"), &label)?;
    let tooltip = Object::new();
    Reflect::set(&tooltip, &JsValue::from_str("callbacks"), &callbacks)?;
    Reflect::set(&plugins, &JsValue::from_str("tooltip"), &tooltip)?;
    Ok(())
}

fn js_error(error: &DashboardError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Configuration embedded in the page; defaults when the block is absent
fn read_config(window: &Window, document: &web_sys::Document) -> Result<Config> {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    let mut config = Config::from_json(&raw)?;
    if config.api_base.is_empty() {
        config.api_base = window.location().origin()?;
    }
    Ok(config)
}

fn wire_pager(
    document: &web_sys::Document,
    dashboard: &Rc<BrowserDashboard>,
    region: Region,
    direction: Direction,
) -> Result<()> {
    let button = document
        .get_element_by_id(region.id())
        .ok_or_else(|| DashboardError::RenderTargetMissing(region.id().to_string()))?;

    let dashboard = Rc::clone(dashboard);
    let on_click = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let dashboard = Rc::clone(&dashboard);
        spawn_local(async move { dashboard.navigate(direction).await });
    }));
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn schedule_refresh(window: &Window, dashboard: &Rc<BrowserDashboard>, secs: u32) -> Result<()> {
    let dashboard = Rc::clone(dashboard);
    let tick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let dashboard = Rc::clone(&dashboard);
        spawn_local(async move { dashboard.refresh().await });
    }));
    let millis = i32::try_from(u64::from(secs) * 1000).unwrap_or(i32::MAX);
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        millis,
    )?;
    tick.forget();
    tracing::info!(interval_secs = secs, "Auto-refresh enabled");
    Ok(())
}

fn boot() -> Result<()> {
    let window =
        web_sys::window().ok_or_else(|| DashboardError::Browser("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DashboardError::Browser("window has no document".into()))?;

    let config = read_config(&window, &document)?;
    init_logging(&LogConfig::from(&config))?;
    tracing::info!(
        api_base = %config.api_base,
        page_size = config.page_size,
        stale_responses = ?config.stale_responses,
        "Dashboard starting"
    );

    let api = ApiClient::new(config.clone())?;
    let refresh = config.refresh_interval_secs;
    let dashboard = Rc::new(Dashboard::new(
        api,
        BrowserDocument::new(window.clone(), document.clone()),
        config,
    ));

    wire_pager(&document, &dashboard, Region::PrevPage, Direction::Previous)?;
    wire_pager(&document, &dashboard, Region::NextPage, Direction::Next)?;
    if let Some(secs) = refresh {
        schedule_refresh(&window, &dashboard, secs)?;
    }

    spawn_local(async move { dashboard.load().await });
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    boot().map_err(|e| {
        web_sys::console::error_1(&js_error(&e));
        js_error(&e)
    })
}
