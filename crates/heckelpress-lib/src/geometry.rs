//! Part geometry and cross-section area.
//!
//! Shapes are tagged variants with their dimensions in millimetres. The
//! pressure pipeline only needs the projected cross-section area; volume
//! backs the green-mass estimate.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Compact geometry, dimensions in mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Geometry {
    SolidCylinder {
        outer_diameter_mm: f64,
        height_mm: f64,
    },
    HollowCylinder {
        outer_diameter_mm: f64,
        inner_diameter_mm: f64,
        height_mm: f64,
    },
}

impl Geometry {
    /// Solid cylinder from outer diameter and height.
    pub fn solid(outer_diameter_mm: f64, height_mm: f64) -> Self {
        Geometry::SolidCylinder {
            outer_diameter_mm,
            height_mm,
        }
    }

    /// Hollow cylinder from outer/inner diameters and height.
    pub fn hollow(outer_diameter_mm: f64, inner_diameter_mm: f64, height_mm: f64) -> Self {
        Geometry::HollowCylinder {
            outer_diameter_mm,
            inner_diameter_mm,
            height_mm,
        }
    }

    /// Validate dimensions for correctness.
    pub fn validate(&self) -> Result<()> {
        let dimensions: Vec<(f64, &str)> = match self {
            Geometry::SolidCylinder {
                outer_diameter_mm,
                height_mm,
            } => vec![
                (*outer_diameter_mm, "outer diameter"),
                (*height_mm, "height"),
            ],
            Geometry::HollowCylinder {
                outer_diameter_mm,
                inner_diameter_mm,
                height_mm,
            } => vec![
                (*outer_diameter_mm, "outer diameter"),
                (*inner_diameter_mm, "inner diameter"),
                (*height_mm, "height"),
            ],
        };

        for (value, dimension) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidGeometry {
                    message: format!("{dimension} must be a finite positive number, got {value}"),
                });
            }
        }

        if let Geometry::HollowCylinder {
            outer_diameter_mm,
            inner_diameter_mm,
            ..
        } = self
        {
            if inner_diameter_mm >= outer_diameter_mm {
                return Err(Error::InvalidGeometry {
                    message: format!(
                        "inner diameter ({inner_diameter_mm} mm) must be smaller than outer diameter ({outer_diameter_mm} mm)"
                    ),
                });
            }
        }

        Ok(())
    }

    /// Projected cross-section area in mm2.
    ///
    /// Solid: `pi/4 * d_o^2`. Hollow: `pi/4 * (d_o^2 - d_i^2)`.
    pub fn cross_section_area_mm2(&self) -> Result<f64> {
        self.validate()?;
        Ok(match *self {
            Geometry::SolidCylinder {
                outer_diameter_mm, ..
            } => PI / 4.0 * outer_diameter_mm * outer_diameter_mm,
            Geometry::HollowCylinder {
                outer_diameter_mm,
                inner_diameter_mm,
                ..
            } => {
                PI / 4.0
                    * (outer_diameter_mm * outer_diameter_mm
                        - inner_diameter_mm * inner_diameter_mm)
            }
        })
    }

    /// Compact volume in mm3 (cross-section area times height).
    pub fn volume_mm3(&self) -> Result<f64> {
        Ok(self.cross_section_area_mm2()? * self.height_mm())
    }

    /// Outer diameter in mm.
    pub fn outer_diameter_mm(&self) -> f64 {
        match *self {
            Geometry::SolidCylinder {
                outer_diameter_mm, ..
            }
            | Geometry::HollowCylinder {
                outer_diameter_mm, ..
            } => outer_diameter_mm,
        }
    }

    /// Inner diameter in mm, for hollow shapes.
    pub fn inner_diameter_mm(&self) -> Option<f64> {
        match *self {
            Geometry::SolidCylinder { .. } => None,
            Geometry::HollowCylinder {
                inner_diameter_mm, ..
            } => Some(inner_diameter_mm),
        }
    }

    /// Part height in mm.
    pub fn height_mm(&self) -> f64 {
        match *self {
            Geometry::SolidCylinder { height_mm, .. }
            | Geometry::HollowCylinder { height_mm, .. } => height_mm,
        }
    }

    /// Human-readable shape label.
    pub fn shape_label(&self) -> &'static str {
        match self {
            Geometry::SolidCylinder { .. } => "solid cylinder",
            Geometry::HollowCylinder { .. } => "hollow cylinder",
        }
    }
}
