//! Curve command handler for printing pressure/tonnage samples.

use anyhow::{Context, Result};
use clap::Args;

use heckelpress_lib::{CurveSample, CurveSampler};

use crate::commands::{CurveRangeArgs, GeometryArgs, MaterialArgs};
use crate::output::{render_curve_table, render_json, OutputFormat};

/// Arguments for the curve command.
#[derive(Debug, Args)]
pub struct CurveArgs {
    #[command(flatten)]
    pub material: MaterialArgs,

    #[command(flatten)]
    pub geometry: GeometryArgs,

    /// Safety factor applied to the sampled tonnage (>= 1).
    #[arg(long, default_value_t = 1.0)]
    pub safety_factor: f64,

    #[command(flatten)]
    pub curve: CurveRangeArgs,
}

/// Handle the curve subcommand.
pub fn handle_curve(args: &CurveArgs, format: OutputFormat) -> Result<()> {
    let material = args.material.resolve()?;
    let geometry = args.geometry.to_geometry()?;
    let area_mm2 = geometry.cross_section_area_mm2()?;

    let samples: Vec<CurveSample> = CurveSampler::new(
        &material,
        area_mm2,
        args.safety_factor,
        args.curve.to_config(),
    )
    .context("failed to build curve sampler")?
    .collect();

    match format {
        OutputFormat::Text => render_curve_table(&samples),
        OutputFormat::Json => render_json(&samples)?,
    }

    Ok(())
}
