//! Heckel compaction press tonnage estimation.
//!
//! This crate exposes the formula pipeline for estimating powder-metallurgy
//! press tonnage from a target green density: density resolution, the Heckel
//! pressure model, cross-section geometry, force/tonnage conversion, curve
//! sampling for plotting, and CSV/PNG export. Higher-level consumers (the
//! CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!
//! Every component is a pure, stateless function: one calculation reads a
//! [`CalculationRequest`] snapshot and produces a fresh
//! [`CalculationResult`], with no shared mutable state between evaluations.

#![deny(warnings)]

pub mod chart;
pub mod constants;
pub mod curve;
pub mod density;
pub mod error;
pub mod export;
pub mod geometry;
pub mod heckel;
pub mod material;
pub mod press;

pub use chart::{render_png, ChartConfig};
pub use curve::{CurveConfig, CurveSample, CurveSampler};
pub use density::DensityInput;
pub use error::{Error, Result};
pub use export::{csv_string, write_csv, write_csv_file};
pub use geometry::Geometry;
pub use heckel::{density_for_pressure, pressure_for_density, PressureSolution};
pub use material::{default_catalog_path, MaterialCatalog, MaterialConstants};
pub use press::{calculate, CalculationRequest, CalculationResult};
