//! Heckel compaction pressure model.
//!
//! The Heckel relation `ln(1 / (1 - D)) = K * P + A` links relative density
//! `D` to compaction pressure `P` (MPa) through the material constants `K`
//! and `A`. This module solves the relation in both directions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::density::validate_relative_density;
use crate::error::{Error, Result};
use crate::material::MaterialConstants;

/// Pressure solved from the Heckel relation for one target density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureSolution {
    /// Compaction pressure in MPa, clamped to >= 0.
    pub pressure_mpa: f64,
    /// Set when the raw algebraic pressure was negative and clamped; the
    /// target density is below the material's zero-pressure densification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Densification term `ln(1 / (1 - D))` of the Heckel relation.
///
/// # Errors
///
/// Returns [`Error::InvalidDensity`] outside the open interval (0, 1), where
/// the logarithm leaves its domain.
pub fn densification_term(relative_density: f64) -> Result<f64> {
    validate_relative_density(relative_density)?;
    Ok((1.0 / (1.0 - relative_density)).ln())
}

/// Solve the Heckel relation for pressure: `P = (ln(1/(1-D)) - A) / K`.
///
/// A negative algebraic result is clamped to zero and reported through
/// [`PressureSolution::warning`]; it indicates a target density the powder
/// already reaches below the practical compaction threshold.
///
/// # Examples
///
/// ```
/// use heckelpress_lib::heckel::pressure_for_density;
/// use heckelpress_lib::material::MaterialConstants;
///
/// let material = MaterialConstants::new("steel", 0.02, 1.5, 7.8).unwrap();
/// let solution = pressure_for_density(&material, 0.85).unwrap();
/// assert!((solution.pressure_mpa - 19.856).abs() < 1e-3);
/// assert!(solution.warning.is_none());
/// ```
pub fn pressure_for_density(
    material: &MaterialConstants,
    relative_density: f64,
) -> Result<PressureSolution> {
    material.validate()?;
    let term = densification_term(relative_density)?;
    let raw = (term - material.a) / material.k;

    if raw < 0.0 {
        debug!(
            material = %material.name,
            relative_density,
            raw_pressure_mpa = raw,
            "target density below zero-pressure densification; clamping pressure to 0"
        );
        return Ok(PressureSolution {
            pressure_mpa: 0.0,
            warning: Some(format!(
                "target relative density {:.4} is below the zero-pressure densification of {}; pressure clamped to 0",
                relative_density, material.name
            )),
        });
    }

    Ok(PressureSolution {
        pressure_mpa: raw,
        warning: None,
    })
}

/// Invert the Heckel relation: `D = 1 - exp(-(K * P + A))`.
///
/// Closed-form counterpart of [`pressure_for_density`], used to annotate a
/// known press pressure with the density it reaches.
///
/// # Errors
///
/// Returns [`Error::InvalidDensity`] when the pressure is not finite and
/// non-negative, or when the resulting density falls outside (0, 1) (possible
/// for materials with a non-positive intercept at low pressure).
pub fn density_for_pressure(material: &MaterialConstants, pressure_mpa: f64) -> Result<f64> {
    material.validate()?;
    if !pressure_mpa.is_finite() || pressure_mpa < 0.0 {
        return Err(Error::InvalidDensity {
            message: format!(
                "pressure must be finite and non-negative, got {}",
                pressure_mpa
            ),
        });
    }

    let relative_density = 1.0 - (-(material.k * pressure_mpa + material.a)).exp();
    validate_relative_density(relative_density)?;
    Ok(relative_density)
}
