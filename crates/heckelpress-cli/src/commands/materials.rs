//! Materials command handler for listing available materials.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use heckelpress_lib::{default_catalog_path, MaterialCatalog};

use crate::output::{render_json, OutputFormat};

/// Environment variable naming a material catalog CSV.
pub const MATERIALS_ENV: &str = "HECKELPRESS_MATERIALS";

/// Arguments for the materials command.
#[derive(Debug, Args)]
pub struct MaterialsArgs {
    /// Path to a material catalog CSV (overrides HECKELPRESS_MATERIALS).
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

/// Handle the materials subcommand.
///
/// Lists the materials available from the resolved catalog.
pub fn handle_list_materials(args: &MaterialsArgs, format: OutputFormat) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    match format {
        OutputFormat::Text => print_material_table(&catalog),
        OutputFormat::Json => render_json(&catalog.materials_sorted())?,
    }
    Ok(())
}

/// Load the material catalog.
///
/// Resolution order:
/// 1. Explicit `--catalog` path
/// 2. `HECKELPRESS_MATERIALS` environment variable
/// 3. `materials.csv` in the platform config directory
/// 4. Built-in table
pub fn load_catalog(explicit: Option<&Path>) -> Result<MaterialCatalog> {
    if let Some(path) = explicit {
        return MaterialCatalog::from_path(path)
            .with_context(|| format!("failed to load material catalog from {}", path.display()));
    }

    if let Ok(env_path) = std::env::var(MATERIALS_ENV) {
        let path = PathBuf::from(env_path);
        return MaterialCatalog::from_path(&path)
            .with_context(|| format!("failed to load material catalog from {}", path.display()));
    }

    if let Ok(path) = default_catalog_path() {
        if path.exists() {
            return MaterialCatalog::from_path(&path).with_context(|| {
                format!("failed to load material catalog from {}", path.display())
            });
        }
    }

    debug!("no catalog file found; using built-in material table");
    Ok(MaterialCatalog::builtin().clone())
}

/// Print the material catalog to stdout in a formatted table.
fn print_material_table(catalog: &MaterialCatalog) {
    let materials = catalog.materials_sorted();
    if materials.is_empty() {
        println!("No materials available in catalog.");
        return;
    }

    println!("Available materials ({}):", materials.len());
    println!(
        "{:<26} {:>12} {:>8} {:>16}",
        "Name", "K (1/MPa)", "A", "Density (g/cm3)"
    );
    for material in materials {
        println!(
            "{:<26} {:>12.6} {:>8.3} {:>16.2}",
            material.name, material.k, material.a, material.rho_theoretical
        );
    }
}
