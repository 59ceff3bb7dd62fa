use thiserror::Error;

/// Convenient result alias for the heckelpress library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a resolved relative density falls outside the open
    /// interval (0, 1) or a density input is otherwise unusable.
    #[error("invalid density: {message}")]
    InvalidDensity { message: String },

    /// Raised when part dimensions are non-positive or inconsistent.
    #[error("invalid geometry: {message}")]
    InvalidGeometry { message: String },

    /// Raised when material constants fail validation (non-positive Heckel
    /// slope, non-positive theoretical density, malformed catalog rows).
    #[error("invalid material: {message}")]
    InvalidMaterial { message: String },

    /// Raised when the safety factor is not a finite number >= 1.
    #[error("invalid safety factor: {message}")]
    InvalidSafetyFactor { message: String },

    /// Raised when the curve sampling configuration is unusable.
    #[error("invalid curve configuration: {message}")]
    InvalidCurve { message: String },

    /// Raised when a material name could not be found in the catalog.
    #[error("unknown material: {name}{}", format_suggestions(.suggestions))]
    UnknownMaterial {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when duplicate material names are encountered during catalog load.
    #[error("duplicate material name encountered: {name}")]
    DuplicateMaterialName { name: String },

    /// No suitable config directory could be resolved for the material catalog.
    #[error("failed to resolve config directories for material catalog")]
    ConfigDirsUnavailable,

    /// Raised when rendering the pressure/tonnage charts fails.
    #[error("failed to render chart: {message}")]
    ChartRender { message: String },

    /// Wrapper for CSV parsing and serialization errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
