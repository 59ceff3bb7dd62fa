//! Output formatting for calculation results.
//!
//! This module provides the `--format` value enum and renderers for turning
//! calculation summaries into text or JSON on stdout.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use heckelpress_lib::{
    CalculationRequest, CalculationResult, CurveSample, Geometry, MaterialConstants,
};

use crate::terminal::{colors, supports_color};

/// Output format selected with the global `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Serializable summary combining the request context with derived results.
#[derive(Debug, Serialize)]
pub struct CalculationSummary<'a> {
    pub material: &'a MaterialConstants,
    pub geometry: &'a Geometry,
    pub safety_factor: f64,
    #[serde(flatten)]
    pub result: &'a CalculationResult,
}

impl<'a> CalculationSummary<'a> {
    /// Build a summary from a request and its result.
    pub fn new(request: &'a CalculationRequest, result: &'a CalculationResult) -> Self {
        Self {
            material: &request.material,
            geometry: &request.geometry,
            safety_factor: request.safety_factor,
            result,
        }
    }
}

/// Render a calculation summary in text format.
pub fn render_text(summary: &CalculationSummary<'_>) {
    let material = summary.material;
    println!(
        "Material: {} (K={} 1/MPa, A={}, rho_th={} g/cm3)",
        material.name, material.k, material.a, material.rho_theoretical
    );

    let geometry = summary.geometry;
    match geometry.inner_diameter_mm() {
        Some(inner) => println!(
            "Geometry: {} (outer {} mm, inner {} mm, height {} mm)",
            geometry.shape_label(),
            geometry.outer_diameter_mm(),
            inner,
            geometry.height_mm()
        ),
        None => println!(
            "Geometry: {} (outer {} mm, height {} mm)",
            geometry.shape_label(),
            geometry.outer_diameter_mm(),
            geometry.height_mm()
        ),
    }

    let result = summary.result;
    println!();
    println!("Relative density (D):  {:.4}", result.relative_density);
    println!("Green density:         {:.4} g/cm3", result.green_density);
    println!("Compaction pressure:   {:.2} MPa", result.pressure_mpa);
    println!("Cross-section area:    {:.2} mm2", result.area_mm2);
    println!("Compaction force:      {:.0} N", result.force_n);
    println!("Tonnage (no SF):       {:.3} t", result.tonnage_unfactored);
    println!(
        "Tonnage (SF={}):      {:.3} t",
        summary.safety_factor, result.tonnage
    );
    println!("Green part mass:       {:.2} g", result.green_mass_g);

    if let Some(warning) = &result.warning {
        let (yellow, reset) = if supports_color() {
            (colors::YELLOW, colors::RESET)
        } else {
            ("", "")
        };
        println!("{yellow}Warning: {warning}{reset}");
    }
}

/// Render any serializable value as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Render curve samples as a fixed-width table.
pub fn render_curve_table(samples: &[CurveSample]) {
    println!(
        "{:>16} {:>14} {:>12}",
        "Relative density", "Pressure (MPa)", "Tonnage (t)"
    );
    for sample in samples {
        println!(
            "{:>16.4} {:>14.2} {:>12.3}",
            sample.relative_density, sample.pressure_mpa, sample.tonnage
        );
    }
}
