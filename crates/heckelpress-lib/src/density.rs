//! Density resolution.
//!
//! A target density arrives either as an absolute green density or as a
//! relative density; exactly one is authoritative per calculation and the
//! other is derived from the material's theoretical density.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Target density input for a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityInput {
    /// Absolute green density in g/cm3.
    Green { g_cm3: f64 },
    /// Relative density as a fraction of theoretical density.
    Relative { fraction: f64 },
}

impl DensityInput {
    /// Resolve the input to a relative density against `rho_theoretical`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDensity`] when `rho_theoretical` is not a
    /// finite positive number or when the resolved relative density falls
    /// outside the open interval (0, 1). A relative density of exactly 1 is
    /// rejected here rather than at the pressure model: the Heckel logarithm
    /// diverges at full density, so no pressure can ever be produced for it.
    pub fn resolve(&self, rho_theoretical: f64) -> Result<f64> {
        if !rho_theoretical.is_finite() || rho_theoretical <= 0.0 {
            return Err(Error::InvalidDensity {
                message: format!(
                    "rho_theoretical must be finite and positive, got {}",
                    rho_theoretical
                ),
            });
        }

        let relative = match self {
            DensityInput::Green { g_cm3 } => {
                if !g_cm3.is_finite() || *g_cm3 <= 0.0 {
                    return Err(Error::InvalidDensity {
                        message: format!(
                            "green density must be finite and positive, got {}",
                            g_cm3
                        ),
                    });
                }
                g_cm3 / rho_theoretical
            }
            DensityInput::Relative { fraction } => {
                if !fraction.is_finite() {
                    return Err(Error::InvalidDensity {
                        message: format!("relative density must be finite, got {}", fraction),
                    });
                }
                *fraction
            }
        };

        validate_relative_density(relative)?;
        Ok(relative)
    }
}

/// Check that a relative density lies in the open interval (0, 1).
pub fn validate_relative_density(relative_density: f64) -> Result<()> {
    if !relative_density.is_finite() || relative_density <= 0.0 {
        return Err(Error::InvalidDensity {
            message: format!(
                "relative density must be positive, got {}",
                relative_density
            ),
        });
    }

    if relative_density >= 1.0 {
        return Err(Error::InvalidDensity {
            message: format!(
                "relative density must be below 1 (full density), got {}",
                relative_density
            ),
        });
    }

    Ok(())
}
