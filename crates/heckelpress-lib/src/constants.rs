//! Unit-conversion constants and presentation defaults shared across the
//! pressure, tonnage, and curve calculations.

/// Newtons in one kilogram-force (standard gravity).
pub const NEWTONS_PER_KILOGRAM_FORCE: f64 = 9.80665;

/// Kilograms in one metric ton.
pub const KILOGRAMS_PER_METRIC_TON: f64 = 1000.0;

/// Newtons in one metric ton-force.
pub const NEWTONS_PER_METRIC_TON_FORCE: f64 =
    NEWTONS_PER_KILOGRAM_FORCE * KILOGRAMS_PER_METRIC_TON;

/// Default lower bound of the sampled relative-density range.
///
/// Presentation default, not a physical constant: loose powder fills below
/// half of theoretical density are outside the useful plotting window.
pub const DEFAULT_CURVE_START: f64 = 0.50;

/// Default upper bound of the sampled relative-density range. Kept strictly
/// below 1.0 where the Heckel logarithm diverges.
pub const DEFAULT_CURVE_END: f64 = 0.99;

/// Default number of evenly spaced curve samples.
pub const DEFAULT_CURVE_SAMPLES: usize = 100;

/// Maximum number of fuzzy-match suggestions returned for unknown material
/// names.
pub const SUGGESTION_LIMIT: usize = 3;
