use std::fmt::Display;

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::format_whole_dollars;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::NodeRef;

use crate::controller::charts::{label_at, value_range, LinePoint, Segment};
use crate::controller::{ChartError, ChartSpec, ChartSurface};

const LINE_COLOR: RGBColor = RGBColor(0x4C, 0xAF, 0x50);
const NOTICE_COLOR: &str = "#999999";
const LEGEND_COLUMNS: usize = 3;
const LEGEND_ROW_HEIGHT: i32 = 22;
/// Inner radius of the doughnut as a share of the outer radius
const HOLE_RATIO: f64 = 0.5;

/// Chart surface drawing on a `<canvas>` with plotters
pub struct CanvasSurface {
    canvas: NodeRef,
    width: u32,
    height: u32,
}

impl CanvasSurface {
    pub fn new(canvas: NodeRef, width: u32, height: u32) -> Self {
        Self {
            canvas,
            width,
            height,
        }
    }

    fn element(&self) -> Result<HtmlCanvasElement, ChartError> {
        self.canvas
            .cast::<HtmlCanvasElement>()
            .ok_or(ChartError::CanvasUnavailable)
    }

    fn context(&self) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), ChartError> {
        let canvas = self.element()?;
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(ChartError::CanvasUnavailable)?;
        Ok((canvas, context))
    }

    fn backend(&self) -> Result<CanvasBackend, ChartError> {
        let canvas = self.element()?;
        canvas.set_width(self.width);
        canvas.set_height(self.height);
        CanvasBackend::with_canvas_object(canvas).ok_or(ChartError::CanvasUnavailable)
    }
}

impl ChartSurface for CanvasSurface {
    fn clear(&mut self) -> Result<(), ChartError> {
        let (canvas, context) = self.context()?;
        context.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
        Ok(())
    }

    fn show_notice(&mut self, text: &str) -> Result<(), ChartError> {
        let (_, context) = self.context()?;
        context.set_font("14px sans-serif");
        context.set_fill_style_str(NOTICE_COLOR);
        context
            .fill_text(text, 10.0, 20.0)
            .map_err(|e| ChartError::Drawing(format!("{:?}", e)))
    }

    fn draw(&mut self, chart: &ChartSpec) -> Result<(), ChartError> {
        let backend = self.backend()?;
        match chart {
            ChartSpec::Doughnut(segments) => draw_doughnut(backend, segments),
            ChartSpec::Line { series, points } => draw_line(backend, series, points),
        }
    }
}

fn drawing_error(e: impl Display) -> ChartError {
    ChartError::Drawing(e.to_string())
}

fn draw_doughnut(backend: CanvasBackend, segments: &[Segment]) -> Result<(), ChartError> {
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error)?;

    let (width, height) = root.dim_in_pixel();
    let legend_rows = segments.len().div_ceil(LEGEND_COLUMNS) as i32;
    let legend_top = height as i32 - legend_rows * LEGEND_ROW_HEIGHT - 10;
    let (center, radius) = doughnut_bounds(width as i32, legend_top);

    let (sizes, colors) = slices(segments);
    if !sizes.is_empty() {
        // Labels live in the legend below the ring
        let labels = vec![""; sizes.len()];
        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.donut_hole(radius * HOLE_RATIO);
        root.draw(&pie).map_err(drawing_error)?;
    }

    let column_width = width as i32 / LEGEND_COLUMNS as i32;
    for (i, segment) in segments.iter().enumerate() {
        let x = (i % LEGEND_COLUMNS) as i32 * column_width + 20;
        let y = legend_top + (i / LEGEND_COLUMNS) as i32 * LEGEND_ROW_HEIGHT + 10;
        root.draw(&Rectangle::new([(x, y), (x + 14, y + 14)], segment.color.filled()))
            .map_err(drawing_error)?;
        root.draw(&Text::new(
            segment.label.clone(),
            (x + 20, y),
            ("sans-serif", 13).into_font().color(&BLACK),
        ))
        .map_err(drawing_error)?;
    }

    root.present().map_err(drawing_error)
}

/// Center and outer radius of a ring filling the area above the legend
fn doughnut_bounds(width: i32, legend_top: i32) -> ((i32, i32), f64) {
    let center = (width / 2, legend_top / 2);
    let radius = (f64::from(width.min(legend_top)) / 2.0 - 10.0).max(10.0);
    (center, radius)
}

/// Sizes and colors of the drawable slices. Zero or negative totals have no
/// area and are left out of the ring, though they stay in the legend.
fn slices(segments: &[Segment]) -> (Vec<f64>, Vec<RGBColor>) {
    segments
        .iter()
        .filter(|segment| segment.amount > 0.0)
        .map(|segment| (segment.amount, segment.color))
        .unzip()
}

fn draw_line(backend: CanvasBackend, series: &str, points: &[LinePoint]) -> Result<(), ChartError> {
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error)?;

    let (y_min, y_max) = value_range(points);
    let x_max = points.len().saturating_sub(1).max(1) as f64;
    let labels: Vec<String> = points.iter().map(|p| p.label.clone()).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(series, ("sans-serif", 16))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)
        .map_err(drawing_error)?;

    chart
        .configure_mesh()
        .x_labels(points.len().clamp(2, 8))
        .y_labels(6)
        .x_label_formatter(&|x| label_at(&labels, *x))
        .y_label_formatter(&|y| format_whole_dollars(*y))
        .label_style(("sans-serif", 12))
        .bold_line_style(&RGBColor(235, 235, 235))
        .light_line_style(&RGBColor(248, 248, 248))
        .draw()
        .map_err(drawing_error)?;

    let data = || points.iter().enumerate().map(|(i, p)| (i as f64, p.value));

    chart
        .draw_series(AreaSeries::new(data(), y_min, LINE_COLOR.mix(0.1).filled()))
        .map_err(drawing_error)?;
    chart
        .draw_series(LineSeries::new(data(), LINE_COLOR.stroke_width(2)))
        .map_err(drawing_error)?;
    chart
        .draw_series(data().map(|point| Circle::new(point, 4, LINE_COLOR.filled())))
        .map_err(drawing_error)?;
    chart
        .draw_series(data().map(|point| Circle::new(point, 4, WHITE.stroke_width(2))))
        .map_err(drawing_error)?;

    root.present().map_err(drawing_error)
}
