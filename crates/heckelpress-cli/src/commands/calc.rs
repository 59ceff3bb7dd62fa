//! Calc command handler for running a full tonnage calculation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use heckelpress_lib::{calculate, render_png, write_csv_file, CalculationRequest, ChartConfig};

use crate::commands::{CurveRangeArgs, DensityArgs, GeometryArgs, MaterialArgs};
use crate::output::{render_json, render_text, CalculationSummary, OutputFormat};

/// Arguments for the calc command.
#[derive(Debug, Args)]
pub struct CalcArgs {
    #[command(flatten)]
    pub material: MaterialArgs,

    #[command(flatten)]
    pub geometry: GeometryArgs,

    #[command(flatten)]
    pub density: DensityArgs,

    /// Safety factor applied to the final tonnage (>= 1).
    #[arg(long, default_value_t = 1.0)]
    pub safety_factor: f64,

    #[command(flatten)]
    pub curve: CurveRangeArgs,

    /// Write the scalar results and curve samples to a CSV file.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Render the pressure/tonnage charts to a PNG file.
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,
}

/// Handle the calc subcommand.
///
/// Runs the full pipeline once for the given form snapshot and renders the
/// result, then drives any requested CSV/PNG exports.
pub fn handle_calc(args: &CalcArgs, format: OutputFormat) -> Result<()> {
    let request = CalculationRequest {
        material: args.material.resolve()?,
        geometry: args.geometry.to_geometry()?,
        density: args.density.to_input()?,
        safety_factor: args.safety_factor,
        curve: args.curve.to_config(),
    };

    let result = calculate(&request).context("failed to compute compaction tonnage")?;
    let summary = CalculationSummary::new(&request, &result);

    match format {
        OutputFormat::Text => render_text(&summary),
        OutputFormat::Json => render_json(&summary)?,
    }

    if let Some(path) = &args.csv {
        write_csv_file(&request, &result, path)
            .with_context(|| format!("failed to write CSV export to {}", path.display()))?;
        println!("CSV written to {}", path.display());
    }

    if let Some(path) = &args.png {
        render_png(&result, path, &ChartConfig::default())
            .with_context(|| format!("failed to render chart to {}", path.display()))?;
        println!("Chart written to {}", path.display());
    }

    Ok(())
}
