//! Chart models and the per-canvas chart lifecycle.
//!
//! A [`ChartSlot`] owns one canvas. Every render disposes the chart that is
//! currently live on that canvas before drawing the replacement, so repeated
//! refreshes never stack drawings on top of each other.

use plotters::style::RGBColor;
use shared::{format_month_day, BalancePoint, CategoryTotal, ChartDataset};
use thiserror::Error;

use super::ClientController;
use crate::services::{FinanceApi, Host};

const TARGET: &str = "chart-renderer";

pub const NO_EXPENSE_DATA: &str = "No expense data";
pub const NO_BALANCE_DATA: &str = "No balance data";
pub const BALANCE_SERIES_LABEL: &str = "Balance";

/// Segment colors, assigned in category order and reused past the end
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(0xFF, 0x63, 0x84),
    RGBColor(0x36, 0xA2, 0xEB),
    RGBColor(0xFF, 0xCE, 0x56),
    RGBColor(0x4B, 0xC0, 0xC0),
    RGBColor(0x99, 0x66, 0xFF),
    RGBColor(0xFF, 0x9F, 0x40),
    RGBColor(0xFF, 0x63, 0x84),
    RGBColor(0xC9, 0xCB, 0xCF),
    RGBColor(0x4B, 0xC0, 0xC0),
    RGBColor(0xFF, 0x63, 0x84),
];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("canvas is not mounted")]
    CanvasUnavailable,
    #[error("drawing failed: {0}")]
    Drawing(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub amount: f64,
    pub color: RGBColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub label: String,
    pub value: f64,
}

/// Everything needed to draw one chart
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Doughnut(Vec<Segment>),
    Line {
        series: &'static str,
        points: Vec<LinePoint>,
    },
}

/// Doughnut of expenses per category, `None` when there are no categories
pub fn category_chart(totals: &[CategoryTotal]) -> Option<ChartSpec> {
    if totals.is_empty() {
        return None;
    }
    let segments = totals
        .iter()
        .enumerate()
        .map(|(i, total)| Segment {
            label: total.category.clone(),
            amount: total.amount,
            color: PALETTE[i % PALETTE.len()],
        })
        .collect();
    Some(ChartSpec::Doughnut(segments))
}

/// Balance line in the order received, `None` when there are no points
pub fn balance_chart(points: &[BalancePoint]) -> Option<ChartSpec> {
    if points.is_empty() {
        return None;
    }
    let points = points
        .iter()
        .map(|point| LinePoint {
            label: format_month_day(point.date),
            value: point.balance,
        })
        .collect();
    Some(ChartSpec::Line {
        series: BALANCE_SERIES_LABEL,
        points,
    })
}

/// Y range for a line chart: the data span plus 10% padding on each side.
/// Zero is not forced into the range.
pub fn value_range(points: &[LinePoint]) -> (f64, f64) {
    let min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let padding = (max - min).max(1.0) * 0.1;
    (min - padding, max + padding)
}

/// X axis label for position `x`; only whole positions carry a label
pub fn label_at(labels: &[String], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}

/// Drawing target for one chart
pub trait ChartSurface {
    /// Wipe the whole canvas
    fn clear(&mut self) -> Result<(), ChartError>;

    /// Write a short text notice in place of a chart
    fn show_notice(&mut self, text: &str) -> Result<(), ChartError>;

    fn draw(&mut self, chart: &ChartSpec) -> Result<(), ChartError>;
}

/// One canvas and the chart currently live on it
pub struct ChartSlot {
    surface: Box<dyn ChartSurface>,
    empty_notice: &'static str,
    live: Option<ChartSpec>,
    disposals: u32,
}

impl ChartSlot {
    pub fn new(surface: Box<dyn ChartSurface>, empty_notice: &'static str) -> Self {
        Self {
            surface,
            empty_notice,
            live: None,
            disposals: 0,
        }
    }

    /// Replace whatever is on the canvas with `chart`, or with the empty
    /// notice when there is nothing to draw.
    pub fn render(&mut self, chart: Option<ChartSpec>) -> Result<(), ChartError> {
        self.dispose()?;
        match chart {
            None => {
                self.surface.clear()?;
                self.surface.show_notice(self.empty_notice)
            }
            Some(chart) => {
                self.surface.draw(&chart)?;
                self.live = Some(chart);
                Ok(())
            }
        }
    }

    fn dispose(&mut self) -> Result<(), ChartError> {
        if self.live.take().is_some() {
            self.disposals += 1;
            self.surface.clear()?;
        }
        Ok(())
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// How many live charts this slot has torn down
    pub fn disposals(&self) -> u32 {
        self.disposals
    }
}

/// The category and balance-over-time charts
pub struct ChartRenderer {
    category: ChartSlot,
    balance: ChartSlot,
}

impl ChartRenderer {
    pub fn new(category_surface: Box<dyn ChartSurface>, balance_surface: Box<dyn ChartSurface>) -> Self {
        Self {
            category: ChartSlot::new(category_surface, NO_EXPENSE_DATA),
            balance: ChartSlot::new(balance_surface, NO_BALANCE_DATA),
        }
    }

    /// Redraw both charts. A failure on one canvas does not stop the other.
    pub fn render(&mut self, data: &ChartDataset) {
        if let Err(e) = self.render_category(&data.expenses_by_category) {
            log::error!(target: TARGET, "Error drawing expense chart: {}", e);
        }
        if let Err(e) = self.render_balance(&data.balance_over_time) {
            log::error!(target: TARGET, "Error drawing balance chart: {}", e);
        }
    }

    pub fn render_category(&mut self, totals: &[CategoryTotal]) -> Result<(), ChartError> {
        self.category.render(category_chart(totals))
    }

    pub fn render_balance(&mut self, points: &[BalancePoint]) -> Result<(), ChartError> {
        self.balance.render(balance_chart(points))
    }

    pub fn category(&self) -> &ChartSlot {
        &self.category
    }

    pub fn balance(&self) -> &ChartSlot {
        &self.balance
    }
}

impl<A: FinanceApi, H: Host> ClientController<A, H> {
    /// Fetch chart data and rebuild both charts
    pub async fn load_charts(&self) {
        match self.api.get_chart_data().await {
            Ok(data) => {
                log::debug!(
                    target: TARGET,
                    "Drawing {} categories and {} balance points",
                    data.expenses_by_category.len(),
                    data.balance_over_time.len()
                );
                self.charts.borrow_mut().render(&data);
            }
            Err(e) => log::error!(target: TARGET, "Error loading chart data: {}", e),
        }
    }
}
