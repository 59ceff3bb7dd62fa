//! CLI subcommand handlers and shared argument groups.
//!
//! Each submodule handles one subcommand; `main.rs` dispatches to these
//! handlers, keeping the entry point focused on parsing and coordination.
//! The argument groups shared between subcommands (material selection,
//! geometry, curve window) live here.

pub mod calc;
pub mod curve;
pub mod materials;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};

use heckelpress_lib::constants::{DEFAULT_CURVE_END, DEFAULT_CURVE_SAMPLES, DEFAULT_CURVE_START};
use heckelpress_lib::{CurveConfig, DensityInput, Geometry, MaterialConstants};

/// Material selection: a catalog name or a custom constants triple.
#[derive(Debug, Args)]
pub struct MaterialArgs {
    /// Material name from the catalog.
    #[arg(long, conflicts_with_all = ["k", "a0", "rho_theoretical"])]
    pub material: Option<String>,

    /// Heckel slope K in 1/MPa (custom material).
    #[arg(long)]
    pub k: Option<f64>,

    /// Heckel intercept A0 (custom material).
    #[arg(long)]
    pub a0: Option<f64>,

    /// Theoretical density in g/cm3 (custom material).
    #[arg(long)]
    pub rho_theoretical: Option<f64>,

    /// Path to a material catalog CSV (overrides HECKELPRESS_MATERIALS).
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

impl MaterialArgs {
    /// Resolve the selection to validated material constants.
    pub fn resolve(&self) -> Result<MaterialConstants> {
        if let Some(name) = &self.material {
            let catalog = materials::load_catalog(self.catalog.as_deref())?;
            return Ok(catalog.lookup(name)?.clone());
        }

        match (self.k, self.a0, self.rho_theoretical) {
            (Some(k), Some(a), Some(rho_theoretical)) => {
                Ok(MaterialConstants::new("custom", k, a, rho_theoretical)?)
            }
            (None, None, None) => {
                bail!("specify --material NAME or the custom triple --k, --a0, --rho-theoretical")
            }
            _ => bail!("custom materials need all of --k, --a0, --rho-theoretical"),
        }
    }
}

/// Part shape selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    Solid,
    Hollow,
}

/// Part geometry arguments (dimensions in mm).
#[derive(Debug, Args)]
pub struct GeometryArgs {
    /// Part shape.
    #[arg(long, value_enum, default_value_t = Shape::Solid)]
    pub shape: Shape,

    /// Outer diameter in mm.
    #[arg(long, value_name = "MM")]
    pub outer_diameter: f64,

    /// Inner diameter in mm (hollow shape only).
    #[arg(long, value_name = "MM")]
    pub inner_diameter: Option<f64>,

    /// Part height in mm.
    #[arg(long, value_name = "MM")]
    pub height: f64,
}

impl GeometryArgs {
    /// Convert CLI args to a library geometry.
    pub fn to_geometry(&self) -> Result<Geometry> {
        match self.shape {
            Shape::Solid => {
                if self.inner_diameter.is_some() {
                    bail!("--inner-diameter only applies to --shape hollow");
                }
                Ok(Geometry::solid(self.outer_diameter, self.height))
            }
            Shape::Hollow => {
                let inner = self
                    .inner_diameter
                    .context("--inner-diameter is required for --shape hollow")?;
                Ok(Geometry::hollow(self.outer_diameter, inner, self.height))
            }
        }
    }
}

/// Target density: exactly one of green or relative.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct DensityArgs {
    /// Target green density in g/cm3.
    #[arg(long, value_name = "G_CM3")]
    pub green_density: Option<f64>,

    /// Target relative density in (0, 1).
    #[arg(long, value_name = "FRACTION")]
    pub relative_density: Option<f64>,
}

impl DensityArgs {
    /// Convert CLI args to a library density input.
    pub fn to_input(&self) -> Result<DensityInput> {
        match (self.green_density, self.relative_density) {
            (Some(g_cm3), None) => Ok(DensityInput::Green { g_cm3 }),
            (None, Some(fraction)) => Ok(DensityInput::Relative { fraction }),
            _ => bail!("specify exactly one of --green-density or --relative-density"),
        }
    }
}

/// Curve sampling window arguments.
#[derive(Debug, Args)]
pub struct CurveRangeArgs {
    /// Lower bound of the sampled relative-density range.
    #[arg(long, default_value_t = DEFAULT_CURVE_START)]
    pub curve_start: f64,

    /// Upper bound of the sampled relative-density range.
    #[arg(long, default_value_t = DEFAULT_CURVE_END)]
    pub curve_end: f64,

    /// Number of evenly spaced curve samples.
    #[arg(long, default_value_t = DEFAULT_CURVE_SAMPLES)]
    pub curve_samples: usize,
}

impl CurveRangeArgs {
    /// Convert CLI args to a library curve config.
    pub fn to_config(&self) -> CurveConfig {
        CurveConfig {
            start: self.curve_start,
            end: self.curve_end,
            samples: self.curve_samples,
        }
    }
}
