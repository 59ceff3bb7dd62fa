use std::f64::consts::PI;

use heckelpress_lib::{
    calculate, CalculationRequest, DensityInput, Error, Geometry, MaterialConstants,
};

fn reference_request() -> CalculationRequest {
    CalculationRequest::new(
        MaterialConstants::new("Test Steel", 0.02, 1.5, 7.8).expect("valid material"),
        Geometry::solid(10.0, 5.0),
        DensityInput::Green { g_cm3: 6.63 },
    )
}

#[test]
fn reference_scenario_end_to_end() {
    let result = calculate(&reference_request()).expect("valid request");

    let expected_pressure = ((1.0f64 / 0.15).ln() - 1.5) / 0.02;
    let expected_area = PI * 25.0;
    let expected_force = expected_pressure * expected_area;
    let expected_tonnage = expected_force / 9806.65;

    assert!((result.relative_density - 0.85).abs() < 1e-9);
    assert!((result.pressure_mpa - expected_pressure).abs() < 1e-9);
    assert!((result.area_mm2 - expected_area).abs() < 1e-9);
    assert!((result.force_n - expected_force).abs() < 1e-6);
    assert!((result.tonnage - expected_tonnage).abs() < 1e-9);
    assert!((result.tonnage - 0.159).abs() < 1e-3);
    assert_eq!(result.tonnage, result.tonnage_unfactored);
    assert!(result.warning.is_none());
    assert!(!result.curve.is_empty());
}

#[test]
fn green_density_is_recovered_from_relative_input() {
    let mut request = reference_request();
    request.density = DensityInput::Relative { fraction: 0.85 };
    let result = calculate(&request).expect("valid request");
    assert!((result.green_density - 0.85 * 7.8).abs() < 1e-9);
}

#[test]
fn green_mass_follows_volume_and_density() {
    let result = calculate(&reference_request()).expect("valid request");
    let volume_cm3 = PI * 25.0 * 5.0 / 1000.0;
    assert!((result.green_mass_g - volume_cm3 * 6.63).abs() < 1e-6);
}

#[test]
fn tonnage_scales_linearly_with_safety_factor() {
    let base = calculate(&reference_request()).expect("valid request");

    let mut factored_request = reference_request();
    factored_request.safety_factor = 2.0;
    let factored = calculate(&factored_request).expect("valid request");

    assert_eq!(factored.tonnage, 2.0 * base.tonnage);
    assert_eq!(factored.tonnage_unfactored, base.tonnage_unfactored);
}

#[test]
fn safety_factor_below_one_is_rejected() {
    let mut request = reference_request();
    request.safety_factor = 0.5;
    let err = calculate(&request).expect_err("safety factor below 1");
    assert!(matches!(err, Error::InvalidSafetyFactor { .. }));
}

#[test]
fn hollow_geometry_reduces_force() {
    let solid = calculate(&reference_request()).expect("valid request");

    let mut hollow_request = reference_request();
    hollow_request.geometry = Geometry::hollow(10.0, 5.0, 5.0);
    let hollow = calculate(&hollow_request).expect("valid request");

    assert!(hollow.force_n < solid.force_n);
    assert!((hollow.force_n / solid.force_n - 0.75).abs() < 1e-9);
}

#[test]
fn curve_samples_carry_the_safety_factor() {
    let mut request = reference_request();
    request.safety_factor = 1.5;
    let factored = calculate(&request).expect("valid request");

    request.safety_factor = 1.0;
    let base = calculate(&request).expect("valid request");

    assert_eq!(factored.curve.len(), base.curve.len());
    let last_factored = factored.curve.last().expect("non-empty curve");
    let last_base = base.curve.last().expect("non-empty curve");
    assert!((last_factored.tonnage - 1.5 * last_base.tonnage).abs() < 1e-12);
}
