//! PNG rendering of the pressure and tonnage curves.
//!
//! Draws two side-by-side line panels (pressure vs relative density, tonnage
//! vs relative density) with a dashed vertical marker at the operating
//! density. The bitmap-only plotters build carries no font rasterizer, so
//! panels are rendered without text; axis meaning is fixed by panel position
//! (pressure left, tonnage right).

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::curve::CurveSample;
use crate::error::{Error, Result};
use crate::press::CalculationResult;

/// Pixel dimensions of the rendered chart image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 400,
        }
    }
}

/// Render the pressure and tonnage curves of a result to a PNG file.
pub fn render_png(result: &CalculationResult, path: &Path, config: &ChartConfig) -> Result<()> {
    if result.curve.is_empty() {
        return Err(Error::ChartRender {
            message: "no curve samples to plot".to_string(),
        });
    }
    if config.width == 0 || config.height == 0 {
        return Err(Error::ChartRender {
            message: format!(
                "chart dimensions must be non-zero, got {}x{}",
                config.width, config.height
            ),
        });
    }

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let panels = root.split_evenly((1, 2));
    draw_panel(
        &panels[0],
        &result.curve,
        |sample| sample.pressure_mpa,
        result.relative_density,
    )?;
    draw_panel(
        &panels[1],
        &result.curve,
        |sample| sample.tonnage,
        result.relative_density,
    )?;

    root.present().map_err(chart_error)?;
    debug!(path = %path.display(), samples = result.curve.len(), "rendered chart PNG");
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    samples: &[CurveSample],
    value: impl Fn(&CurveSample) -> f64,
    marker_density: f64,
) -> Result<()> {
    let x_min = samples
        .iter()
        .map(|s| s.relative_density)
        .fold(f64::INFINITY, f64::min);
    let x_max = samples
        .iter()
        .map(|s| s.relative_density)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_max = samples.iter().map(&value).fold(f64::NEG_INFINITY, f64::max);
    // Headroom keeps the top of the curve off the panel border.
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .margin(12)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(chart_error)?;

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.relative_density, value(s))),
            &BLUE,
        ))
        .map_err(chart_error)?;

    if (x_min..=x_max).contains(&marker_density) {
        chart
            .draw_series(DashedLineSeries::new(
                [(marker_density, 0.0), (marker_density, y_max)],
                6,
                4,
                RED.into(),
            ))
            .map_err(chart_error)?;
    }

    Ok(())
}

fn chart_error<E: std::fmt::Display>(err: E) -> Error {
    Error::ChartRender {
        message: err.to_string(),
    }
}
