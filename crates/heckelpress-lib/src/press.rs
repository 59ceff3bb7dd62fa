//! Force and tonnage calculation.
//!
//! Combines the density resolver, the Heckel pressure model, and the part
//! geometry into a single request/result pair. Every calculation is a pure
//! function of its request; results are created fresh per evaluation and
//! never cached.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::NEWTONS_PER_METRIC_TON_FORCE;
use crate::curve::{CurveConfig, CurveSample, CurveSampler};
use crate::density::DensityInput;
use crate::error::{Error, Result};
use crate::geometry::Geometry;
use crate::heckel::pressure_for_density;
use crate::material::MaterialConstants;

/// Full input snapshot for one tonnage calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub material: MaterialConstants,
    pub geometry: Geometry,
    pub density: DensityInput,
    /// Safety margin applied to the final tonnage. Must be finite and >= 1.
    pub safety_factor: f64,
    /// Sampling window for the pressure/tonnage curves.
    pub curve: CurveConfig,
}

impl CalculationRequest {
    /// Create a request with the default safety factor (1.0) and curve window.
    pub fn new(material: MaterialConstants, geometry: Geometry, density: DensityInput) -> Self {
        Self {
            material,
            geometry,
            density,
            safety_factor: 1.0,
            curve: CurveConfig::default(),
        }
    }
}

/// Result of one tonnage calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Resolved relative density in (0, 1).
    pub relative_density: f64,
    /// Green density in g/cm3 (derived when the input was relative).
    pub green_density: f64,
    /// Compaction pressure in MPa, clamped to >= 0.
    pub pressure_mpa: f64,
    /// Projected cross-section area in mm2.
    pub area_mm2: f64,
    /// Compaction force in N.
    pub force_n: f64,
    /// Press tonnage in metric tons with the safety factor applied.
    pub tonnage: f64,
    /// Press tonnage in metric tons before the safety factor.
    pub tonnage_unfactored: f64,
    /// Estimated green part mass in grams (volume times green density).
    pub green_mass_g: f64,
    /// Set when the pressure was clamped from a negative algebraic result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Curve samples for plotting, within the request's sampling window.
    pub curve: Vec<CurveSample>,
}

/// Check that a safety factor is a finite number >= 1.
pub fn validate_safety_factor(safety_factor: f64) -> Result<()> {
    if !safety_factor.is_finite() || safety_factor < 1.0 {
        return Err(Error::InvalidSafetyFactor {
            message: format!("safety factor must be >= 1, got {}", safety_factor),
        });
    }
    Ok(())
}

/// Compaction force in newtons. MPa times mm2 is already newtons
/// (1 MPa = 1 N/mm2), so no unit conversion is needed.
pub fn force_newtons(pressure_mpa: f64, area_mm2: f64) -> f64 {
    pressure_mpa * area_mm2
}

/// Press tonnage in metric tons: force through ton-force, times the safety
/// margin.
pub fn tonnage_metric(force_n: f64, safety_factor: f64) -> f64 {
    force_n / NEWTONS_PER_METRIC_TON_FORCE * safety_factor
}

/// Run the full calculation pipeline for one request.
///
/// Resolves the relative density, solves the Heckel relation for pressure,
/// derives force and tonnage from the cross-section area, and samples the
/// pressure/tonnage curves over the configured window.
pub fn calculate(request: &CalculationRequest) -> Result<CalculationResult> {
    request.material.validate()?;
    request.geometry.validate()?;
    validate_safety_factor(request.safety_factor)?;
    request.curve.validate()?;

    let relative_density = request.density.resolve(request.material.rho_theoretical)?;
    let solution = pressure_for_density(&request.material, relative_density)?;
    let area_mm2 = request.geometry.cross_section_area_mm2()?;

    let force_n = force_newtons(solution.pressure_mpa, area_mm2);
    let tonnage_unfactored = tonnage_metric(force_n, 1.0);
    let tonnage = tonnage_metric(force_n, request.safety_factor);

    let green_density = relative_density * request.material.rho_theoretical;
    let volume_cm3 = request.geometry.volume_mm3()? / 1000.0;
    let green_mass_g = volume_cm3 * green_density;

    let curve = CurveSampler::new(
        &request.material,
        area_mm2,
        request.safety_factor,
        request.curve,
    )?
    .collect();

    debug!(
        material = %request.material.name,
        relative_density,
        pressure_mpa = solution.pressure_mpa,
        tonnage,
        "calculated press tonnage"
    );

    Ok(CalculationResult {
        relative_density,
        green_density,
        pressure_mpa: solution.pressure_mpa,
        area_mm2,
        force_n,
        tonnage,
        tonnage_unfactored,
        green_mass_g,
        warning: solution.warning,
        curve,
    })
}
