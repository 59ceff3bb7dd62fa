//! CSV serialization of calculation results.
//!
//! The export starts with a key/value block of the inputs and computed
//! scalars, followed by the curve table (`relative_density, pressure_mpa,
//! tonnage`) used by the plots.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use csv::WriterBuilder;
use tracing::debug;

use crate::error::Result;
use crate::press::{CalculationRequest, CalculationResult};

/// Column header of the curve table section.
pub const CURVE_HEADER: [&str; 3] = ["relative_density", "pressure_mpa", "tonnage"];

/// Write a calculation result as CSV.
pub fn write_csv<W: Write>(
    request: &CalculationRequest,
    result: &CalculationResult,
    writer: W,
) -> Result<()> {
    // Scalar rows have two fields, curve rows three.
    let mut csv = WriterBuilder::new().flexible(true).from_writer(writer);

    let mut scalar = |key: &str, value: String| -> Result<()> {
        csv.write_record([key, value.as_str()])?;
        Ok(())
    };

    scalar("material", request.material.name.clone())?;
    scalar("k_1_mpa", format!("{}", request.material.k))?;
    scalar("a", format!("{}", request.material.a))?;
    scalar(
        "rho_theoretical_g_cm3",
        format!("{}", request.material.rho_theoretical),
    )?;
    scalar("shape", request.geometry.shape_label().to_string())?;
    scalar(
        "outer_diameter_mm",
        format!("{}", request.geometry.outer_diameter_mm()),
    )?;
    if let Some(inner) = request.geometry.inner_diameter_mm() {
        scalar("inner_diameter_mm", format!("{}", inner))?;
    }
    scalar("height_mm", format!("{}", request.geometry.height_mm()))?;
    scalar("safety_factor", format!("{}", request.safety_factor))?;

    scalar(
        "relative_density",
        format!("{:.6}", result.relative_density),
    )?;
    scalar(
        "green_density_g_cm3",
        format!("{:.6}", result.green_density),
    )?;
    scalar("pressure_mpa", format!("{:.6}", result.pressure_mpa))?;
    scalar("area_mm2", format!("{:.6}", result.area_mm2))?;
    scalar("force_n", format!("{:.6}", result.force_n))?;
    scalar("tonnage_t", format!("{:.6}", result.tonnage))?;
    scalar(
        "tonnage_unfactored_t",
        format!("{:.6}", result.tonnage_unfactored),
    )?;
    scalar("green_mass_g", format!("{:.6}", result.green_mass_g))?;
    if let Some(warning) = &result.warning {
        scalar("warning", warning.clone())?;
    }
    scalar(
        "generated_at",
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    )?;

    csv.write_record(CURVE_HEADER)?;
    for sample in &result.curve {
        csv.write_record([
            format!("{:.6}", sample.relative_density),
            format!("{:.6}", sample.pressure_mpa),
            format!("{:.6}", sample.tonnage),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Serialize a calculation result to a CSV string.
pub fn csv_string(request: &CalculationRequest, result: &CalculationResult) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(request, result, &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| std::io::Error::other(err).into())
}

/// Write a calculation result to a CSV file.
pub fn write_csv_file(
    request: &CalculationRequest,
    result: &CalculationResult,
    path: &Path,
) -> Result<()> {
    let file = fs::File::create(path)?;
    write_csv(request, result, file)?;
    debug!(path = %path.display(), samples = result.curve.len(), "wrote CSV export");
    Ok(())
}
