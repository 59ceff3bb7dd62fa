//! Material constants and catalog management.
//!
//! This module is organized into focused submodules:
//!
//! - [`properties`] - Heckel material constants and their validation
//! - [`catalog`] - Built-in material table and CSV catalog loading
//!
//! # Example
//!
//! ```
//! use heckelpress_lib::material::MaterialCatalog;
//!
//! let catalog = MaterialCatalog::builtin();
//! let iron = catalog.get("iron").expect("built-in material");
//! assert!(iron.rho_theoretical > 7.0);
//! ```

pub mod catalog;
pub mod properties;

pub use catalog::{default_catalog_path, MaterialCatalog};
pub use properties::MaterialConstants;
