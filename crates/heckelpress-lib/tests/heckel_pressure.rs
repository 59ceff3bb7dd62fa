use heckelpress_lib::{density_for_pressure, pressure_for_density, Error, MaterialConstants};

fn material() -> MaterialConstants {
    MaterialConstants::new("Test Steel", 0.02, 1.5, 7.8).expect("valid material")
}

#[test]
fn solves_reference_scenario() {
    let solution = pressure_for_density(&material(), 0.85).expect("valid density");
    let expected = ((1.0f64 / 0.15).ln() - 1.5) / 0.02;
    assert!((solution.pressure_mpa - expected).abs() < 1e-9);
    assert!((solution.pressure_mpa - 19.856).abs() < 1e-3);
    assert!(solution.warning.is_none());
}

#[test]
fn pressure_is_monotonic_in_density() {
    let material = material();
    let mut previous = f64::NEG_INFINITY;
    for i in 0..40 {
        let density = 0.55 + 0.01 * i as f64;
        let solution = pressure_for_density(&material, density).expect("valid density");
        assert!(
            solution.pressure_mpa > previous,
            "pressure must increase with density, got {} after {} at D={}",
            solution.pressure_mpa,
            previous,
            density
        );
        previous = solution.pressure_mpa;
    }
}

#[test]
fn full_density_fails_at_the_logarithm_singularity() {
    let err = pressure_for_density(&material(), 1.0).expect_err("singularity");
    assert!(matches!(err, Error::InvalidDensity { .. }));
}

#[test]
fn zero_and_negative_densities_fail() {
    for density in [0.0, -0.3] {
        let err = pressure_for_density(&material(), density).expect_err("invalid density");
        assert!(matches!(err, Error::InvalidDensity { .. }));
    }
}

#[test]
fn zero_slope_fails_as_invalid_material() {
    let material = MaterialConstants {
        name: "degenerate".to_string(),
        k: 0.0,
        a: 1.5,
        rho_theoretical: 7.8,
    };
    let err = pressure_for_density(&material, 0.85).expect_err("degenerate slope");
    assert!(matches!(err, Error::InvalidMaterial { .. }));
}

#[test]
fn below_threshold_density_clamps_to_zero_with_warning() {
    // ln(1/0.5) = 0.693 < A = 1.5, so the algebraic pressure is negative.
    let solution = pressure_for_density(&material(), 0.5).expect("clamped, not an error");
    assert_eq!(solution.pressure_mpa, 0.0);
    let warning = solution.warning.expect("clamp reported");
    assert!(warning.contains("clamped"));
}

#[test]
fn inverse_recovers_density_from_pressure() {
    let material = material();
    for density in [0.78, 0.85, 0.93] {
        let solution = pressure_for_density(&material, density).expect("valid density");
        let recovered =
            density_for_pressure(&material, solution.pressure_mpa).expect("valid pressure");
        assert!((recovered - density).abs() < 1e-9);
    }
}

#[test]
fn inverse_rejects_negative_pressure() {
    let err = density_for_pressure(&material(), -5.0).expect_err("negative pressure");
    assert!(matches!(err, Error::InvalidDensity { .. }));
}
