//! Static Chart Renderer
//! Draws a dataset as an SVG line chart.
//!
//! Layout is a white canvas with a single line series and no text, so no
//! font backend is needed.

use crate::charts::ChartDataset;
use crate::error::{AnalyticsError, Result};
use plotters::prelude::*;
use std::ops::Range;

const MARGIN: u32 = 10;
const LINE_WIDTH: u32 = 2;

// Named colours accepted in `ChartDataset::color`
const BLUE_LINE: RGBColor = RGBColor(0, 122, 255);
const GREEN_LINE: RGBColor = RGBColor(52, 199, 89);
const ORANGE_LINE: RGBColor = RGBColor(255, 149, 0);
const RED_LINE: RGBColor = RGBColor(255, 59, 48);
const PURPLE_LINE: RGBColor = RGBColor(175, 82, 222);
const BLACK_LINE: RGBColor = RGBColor(0, 0, 0);

pub struct ChartRenderer;

impl ChartRenderer {
    /// Render the dataset to an SVG document.
    ///
    /// Non-finite points are skipped; an empty dataset yields a blank canvas.
    pub fn render_svg(dataset: &ChartDataset, width: u32, height: u32) -> Result<String> {
        if width <= 2 * MARGIN || height <= 2 * MARGIN {
            return Err(AnalyticsError::invalid(format!(
                "canvas {width}x{height} is too small"
            )));
        }

        let points: Vec<(f64, f64)> = dataset
            .data
            .iter()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .map(|p| (p.x, p.y))
            .collect();

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(render_error)?;

            if !points.is_empty() {
                let x_range = Self::axis_range(points.iter().map(|p| p.0), 0.0);
                let y_range = Self::axis_range(points.iter().map(|p| p.1), 0.05);

                let mut chart = ChartBuilder::on(&root)
                    .margin(MARGIN)
                    .build_cartesian_2d(x_range, y_range)
                    .map_err(render_error)?;

                let style = Self::color_for(&dataset.color).stroke_width(LINE_WIDTH);
                chart
                    .draw_series(LineSeries::new(points, style))
                    .map_err(render_error)?;
            }

            root.present().map_err(render_error)?;
        }

        Ok(svg)
    }

    /// Map a colour name to its RGB value. Unknown names fall back to blue.
    pub(crate) fn color_for(name: &str) -> RGBColor {
        match name.trim().to_ascii_lowercase().as_str() {
            "green" => GREEN_LINE,
            "orange" => ORANGE_LINE,
            "red" => RED_LINE,
            "purple" => PURPLE_LINE,
            "black" => BLACK_LINE,
            _ => BLUE_LINE,
        }
    }

    /// Min..max of the values, padded by `pad` of the span.
    /// A zero span is widened by 1 on each side.
    fn axis_range(values: impl Iterator<Item = f64>, pad: f64) -> Range<f64> {
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        let span = max - min;
        if span <= 0.0 {
            return (min - 1.0)..(max + 1.0);
        }
        let (lo, hi) = (min - span * pad, max + span * pad);
        if lo.is_finite() && hi.is_finite() {
            lo..hi
        } else {
            min..max
        }
    }
}

fn render_error(e: impl std::fmt::Display) -> AnalyticsError {
    AnalyticsError::Render(e.to_string())
}
