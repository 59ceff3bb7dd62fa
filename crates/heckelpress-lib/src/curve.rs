//! Curve sampling for the pressure/tonnage plots.
//!
//! Samples the Heckel pipeline at evenly spaced relative densities over a
//! configured window. The sampler is a lazy, finite iterator; out-of-domain
//! points are omitted from the sequence instead of failing the whole curve.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CURVE_END, DEFAULT_CURVE_SAMPLES, DEFAULT_CURVE_START};
use crate::error::{Error, Result};
use crate::heckel::pressure_for_density;
use crate::material::MaterialConstants;
use crate::press::{force_newtons, tonnage_metric, validate_safety_factor};

/// Sampling window for the pressure/tonnage curves.
///
/// Presentation configuration, not physics: the defaults come from
/// [`crate::constants`] and every field is overridable per calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Lower bound of the sampled relative-density range.
    pub start: f64,
    /// Upper bound of the sampled relative-density range.
    pub end: f64,
    /// Number of evenly spaced samples across the range.
    pub samples: usize,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_CURVE_START,
            end: DEFAULT_CURVE_END,
            samples: DEFAULT_CURVE_SAMPLES,
        }
    }
}

impl CurveConfig {
    /// Validate the sampling window.
    ///
    /// The range must satisfy `0 < start < end <= 1` with at least two
    /// samples. An endpoint of exactly 1 is allowed here; the sampler skips
    /// it as out-of-domain rather than rejecting the whole window.
    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(Error::InvalidCurve {
                message: format!(
                    "curve range must be finite, got {}..{}",
                    self.start, self.end
                ),
            });
        }

        if self.start <= 0.0 || self.start >= self.end || self.end > 1.0 {
            return Err(Error::InvalidCurve {
                message: format!(
                    "curve range must satisfy 0 < start < end <= 1, got {}..{}",
                    self.start, self.end
                ),
            });
        }

        if self.samples < 2 {
            return Err(Error::InvalidCurve {
                message: format!("curve needs at least 2 samples, got {}", self.samples),
            });
        }

        Ok(())
    }
}

/// One point on the pressure/tonnage curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    pub relative_density: f64,
    pub pressure_mpa: f64,
    pub tonnage: f64,
}

/// Lazy, finite, restartable sampler over the configured density window.
///
/// Each `next()` evaluates the full pipeline at the next relative density;
/// points that fail the Heckel domain check are skipped. [`restart`] rewinds
/// the sampler to the first sample.
///
/// [`restart`]: CurveSampler::restart
#[derive(Debug, Clone)]
pub struct CurveSampler<'a> {
    material: &'a MaterialConstants,
    area_mm2: f64,
    safety_factor: f64,
    config: CurveConfig,
    index: usize,
}

impl<'a> CurveSampler<'a> {
    /// Create a sampler for a fixed material/area/safety-factor context.
    pub fn new(
        material: &'a MaterialConstants,
        area_mm2: f64,
        safety_factor: f64,
        config: CurveConfig,
    ) -> Result<Self> {
        material.validate()?;
        validate_safety_factor(safety_factor)?;
        config.validate()?;

        if !area_mm2.is_finite() || area_mm2 <= 0.0 {
            return Err(Error::InvalidGeometry {
                message: format!("area must be finite and positive, got {}", area_mm2),
            });
        }

        Ok(Self {
            material,
            area_mm2,
            safety_factor,
            config,
            index: 0,
        })
    }

    /// Rewind to the first sample.
    pub fn restart(&mut self) {
        self.index = 0;
    }

    fn density_at(&self, index: usize) -> f64 {
        let step = (self.config.end - self.config.start) / (self.config.samples - 1) as f64;
        self.config.start + step * index as f64
    }
}

impl Iterator for CurveSampler<'_> {
    type Item = CurveSample;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.config.samples {
            let relative_density = self.density_at(self.index);
            self.index += 1;

            // Out-of-domain points are omitted, not fatal for the curve.
            let Ok(solution) = pressure_for_density(self.material, relative_density) else {
                continue;
            };

            let force_n = force_newtons(solution.pressure_mpa, self.area_mm2);
            return Some(CurveSample {
                relative_density,
                pressure_mpa: solution.pressure_mpa,
                tonnage: tonnage_metric(force_n, self.safety_factor),
            });
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.config.samples.saturating_sub(self.index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material() -> MaterialConstants {
        MaterialConstants::new("Iron", 2.1e-3, 0.25, 7.87).expect("valid material")
    }

    #[test]
    fn samples_are_evenly_spaced() {
        let material = material();
        let config = CurveConfig {
            start: 0.5,
            end: 0.9,
            samples: 5,
        };
        let sampler = CurveSampler::new(&material, 78.54, 1.0, config).expect("valid sampler");
        let densities: Vec<f64> = sampler.map(|s| s.relative_density).collect();
        assert_eq!(densities.len(), 5);
        assert!((densities[1] - densities[0] - 0.1).abs() < 1e-12);
        assert!((densities[4] - 0.9).abs() < 1e-12);
    }

    #[test]
    fn endpoint_at_full_density_is_omitted() {
        let material = material();
        let config = CurveConfig {
            start: 0.5,
            end: 1.0,
            samples: 3,
        };
        let sampler = CurveSampler::new(&material, 78.54, 1.0, config).expect("valid sampler");
        assert_eq!(sampler.count(), 2);
    }
}
