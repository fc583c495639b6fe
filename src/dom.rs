//! Document shell
//!
//! The only place rendered output touches the page. Each write replaces a
//! region's content wholesale. `MemoryDocument` keeps the page in memory
//! (native builds, tests); the browser implementation lives in
//! `crate::browser`.

use std::collections::BTreeMap;

use crate::error::{DashboardError, Result};
use crate::render::{ChartSpec, Markup, Region};

/// Side-effecting sink for renderer output
pub trait Document {
    /// Replace the inner HTML of `region`
    fn replace(&mut self, region: Region, markup: &Markup) -> Result<()>;

    /// Enable or disable a control
    fn set_disabled(&mut self, region: Region, disabled: bool) -> Result<()>;

    /// Replace the chart drawn on the canvas `region`
    fn draw_chart(&mut self, region: Region, spec: &ChartSpec) -> Result<()>;

    /// User-visible notification
    fn alert(&mut self, message: &str);
}

/// In-memory page: one slot per region the markup declares
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    content: BTreeMap<Region, String>,
    disabled: BTreeMap<Region, bool>,
    charts: BTreeMap<Region, ChartSpec>,
    alerts: Vec<String>,
}

impl MemoryDocument {
    /// Page with every region present; pager buttons start disabled
    pub fn new() -> Self {
        Self::with_regions(&Region::ALL)
    }

    pub fn with_regions(regions: &[Region]) -> Self {
        let mut doc = Self::default();
        for region in regions {
            doc.content.insert(*region, String::new());
            if matches!(region, Region::PrevPage | Region::NextPage) {
                doc.disabled.insert(*region, true);
            }
        }
        doc
    }

    /// Drop a region, as if the markup lacked the element
    pub fn without(mut self, region: Region) -> Self {
        self.content.remove(&region);
        self.disabled.remove(&region);
        self
    }

    pub fn content(&self, region: Region) -> Option<&str> {
        self.content.get(&region).map(String::as_str)
    }

    pub fn is_disabled(&self, region: Region) -> Option<bool> {
        self.disabled.get(&region).copied()
    }

    pub fn chart(&self, region: Region) -> Option<&ChartSpec> {
        self.charts.get(&region)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    fn ensure(&self, region: Region) -> Result<()> {
        if self.content.contains_key(&region) {
            Ok(())
        } else {
            Err(DashboardError::RenderTargetMissing(region.id().to_string()))
        }
    }
}

impl Document for MemoryDocument {
    fn replace(&mut self, region: Region, markup: &Markup) -> Result<()> {
        self.ensure(region)?;
        self.content.insert(region, markup.as_str().to_string());
        Ok(())
    }

    fn set_disabled(&mut self, region: Region, disabled: bool) -> Result<()> {
        self.ensure(region)?;
        self.disabled.insert(region, disabled);
        Ok(())
    }

    fn draw_chart(&mut self, region: Region, spec: &ChartSpec) -> Result<()> {
        self.ensure(region)?;
        self.charts.insert(region, spec.clone());
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
