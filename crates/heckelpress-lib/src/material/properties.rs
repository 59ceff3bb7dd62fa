//! Heckel material constants.
//!
//! A material is described by the two empirical Heckel constants and its
//! theoretical (fully dense) density. Constants are immutable once chosen
//! for a calculation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Empirical Heckel constants for one powder material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialConstants {
    pub name: String,
    /// Heckel slope K in 1/MPa.
    pub k: f64,
    /// Heckel intercept A (densification term at zero pressure).
    pub a: f64,
    /// Theoretical (fully dense) density in g/cm3.
    pub rho_theoretical: f64,
}

impl MaterialConstants {
    /// Create a validated set of material constants.
    pub fn new(name: impl Into<String>, k: f64, a: f64, rho_theoretical: f64) -> Result<Self> {
        let material = Self {
            name: name.into(),
            k,
            a,
            rho_theoretical,
        };
        material.validate()?;
        Ok(material)
    }

    /// Validate material constants for correctness.
    ///
    /// The Heckel slope must be a finite positive number (a zero slope makes
    /// the pressure solution degenerate), the intercept must be finite, and
    /// the theoretical density must be finite and positive.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidMaterial {
                message: "material name must not be empty".to_string(),
            });
        }

        if !self.k.is_finite() || self.k <= 0.0 {
            return Err(Error::InvalidMaterial {
                message: format!("K must be a finite positive number, got {}", self.k),
            });
        }

        if !self.a.is_finite() {
            return Err(Error::InvalidMaterial {
                message: format!("A must be finite, got {}", self.a),
            });
        }

        if !self.rho_theoretical.is_finite() || self.rho_theoretical <= 0.0 {
            return Err(Error::InvalidMaterial {
                message: format!(
                    "rho_theoretical must be a finite positive number, got {}",
                    self.rho_theoretical
                ),
            });
        }

        Ok(())
    }
}
