//! Material catalog loading and management.
//!
//! The catalog resolves material names to Heckel constants. A built-in table
//! covers common press materials with example constants; site-specific
//! catalogs load from CSV files.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::constants::SUGGESTION_LIMIT;
use crate::error::{Error, Result};

use super::properties::MaterialConstants;

/// Default filename for a user-provided catalog in the config directory.
const CATALOG_FILENAME: &str = "materials.csv";

/// Minimum jaro-winkler similarity for a name to count as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.80;

/// Built-in material table. Example constants, matching the ranges quoted in
/// compaction literature; site-measured values belong in a CSV catalog.
static BUILTIN: Lazy<MaterialCatalog> = Lazy::new(|| {
    let defaults = [
        ("Tungsten Carbide (WC-Co)", 1.96e-3, 0.357, 15.5),
        ("Iron", 2.10e-3, 0.25, 7.87),
        ("Copper", 3.90e-3, 0.30, 8.96),
        ("Aluminum", 7.40e-3, 0.28, 2.70),
        ("Stainless Steel 316L", 1.80e-3, 0.26, 7.95),
    ];

    let mut catalog = MaterialCatalog::default();
    for (name, k, a, rho) in defaults {
        let material = MaterialConstants {
            name: name.to_string(),
            k,
            a,
            rho_theoretical: rho,
        };
        catalog
            .insert(material)
            .expect("built-in material table is valid");
    }
    catalog
});

/// Collection of material definitions, keyed by normalized name.
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    materials: HashMap<String, MaterialConstants>,
    source: Option<PathBuf>,
}

impl MaterialCatalog {
    /// The immutable built-in material table.
    pub fn builtin() -> &'static MaterialCatalog {
        &BUILTIN
    }

    /// Load a material catalog from a CSV file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        debug!(
            path = %path.display(),
            materials = catalog.materials.len(),
            "loaded material catalog"
        );
        Ok(catalog)
    }

    /// Load a material catalog from a reader (e.g., file or in-memory buffer).
    ///
    /// Expected columns: `name`, `k`, `a`, `rho_theoretical` (common synonyms
    /// such as `a0` or `theoretical_density` are accepted; header matching is
    /// case- and punctuation-insensitive).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::InvalidMaterial {
                message: format!("failed to read material catalog headers: {err}"),
            })?
            .clone();

        let normalized_headers: Vec<String> =
            headers.iter().map(normalize_header).collect();

        // Mapping of canonical field name -> accepted header synonyms (normalized)
        let synonyms: &[(&str, &[&str])] = &[
            ("name", &["name", "material", "material_name"]),
            ("k", &["k", "k_mpa", "heckel_k", "k_1_mpa"]),
            ("a", &["a", "a0", "intercept", "heckel_a"]),
            (
                "rho_theoretical",
                &[
                    "rho_theoretical",
                    "rho_th",
                    "theoretical_density",
                    "density_g_cm3",
                ],
            ),
        ];

        let mut index_map: HashMap<&str, usize> = HashMap::new();
        for (canon, alts) in synonyms {
            'outer: for alt in *alts {
                let alt_n = normalize_header(alt);
                for (i, header) in normalized_headers.iter().enumerate() {
                    if header == &alt_n {
                        index_map.insert(*canon, i);
                        break 'outer;
                    }
                }
            }
        }

        let missing: Vec<&str> = ["name", "k", "a", "rho_theoretical"]
            .into_iter()
            .filter(|canon| !index_map.contains_key(canon))
            .collect();
        if !missing.is_empty() {
            return Err(Error::InvalidMaterial {
                message: format!(
                    "material catalog missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut catalog = Self::default();
        let mut row_num: usize = 1; // header is line 1
        for record in csv_reader.records() {
            row_num += 1;
            let record = record.map_err(|err| Error::InvalidMaterial {
                message: format!("malformed catalog row {row_num}: {err}"),
            })?;

            let get = |field: &str| index_map.get(field).and_then(|&i| record.get(i));

            let name = get("name").unwrap_or_default().to_string();
            let parse = |field: &str| -> Result<f64> {
                get(field)
                    .ok_or_else(|| Error::InvalidMaterial {
                        message: format!("missing {field} for material '{name}' at row {row_num}"),
                    })?
                    .parse::<f64>()
                    .map_err(|err| Error::InvalidMaterial {
                        message: format!(
                            "invalid {field} for material '{name}' at row {row_num}: {err}"
                        ),
                    })
            };

            let material = MaterialConstants {
                name: name.trim().to_string(),
                k: parse("k")?,
                a: parse("a")?,
                rho_theoretical: parse("rho_theoretical")?,
            };
            material.validate()?;
            catalog.insert(material)?;
        }

        Ok(catalog)
    }

    /// Get a material by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&MaterialConstants> {
        self.materials.get(&normalize_name(name))
    }

    /// Get a material by name, or fail with fuzzy-matched suggestions.
    pub fn lookup(&self, name: &str) -> Result<&MaterialConstants> {
        self.get(name).ok_or_else(|| Error::UnknownMaterial {
            name: name.to_string(),
            suggestions: self.fuzzy_matches(name, SUGGESTION_LIMIT),
        })
    }

    /// Find catalog names similar to `name`, best match first.
    ///
    /// Low-similarity candidates are filtered out; at most `limit` names are
    /// returned. An exact (case-insensitive) match returns just that name.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        if let Some(material) = self.get(name) {
            return vec![material.name.clone()];
        }

        let needle = normalize_name(name);
        let mut scored: Vec<(f64, &str)> = self
            .materials
            .values()
            .map(|m| {
                (
                    strsim::jaro_winkler(&needle, &normalize_name(&m.name)),
                    m.name.as_str(),
                )
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Get a sorted list of all material names.
    pub fn material_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.materials.values().map(|m| m.name.clone()).collect();
        names.sort();
        names
    }

    /// Get all materials sorted by name.
    pub fn materials_sorted(&self) -> Vec<&MaterialConstants> {
        let mut materials: Vec<&MaterialConstants> = self.materials.values().collect();
        materials.sort_by(|a, b| a.name.cmp(&b.name));
        materials
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of materials in the catalog.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the catalog holds no materials.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    fn insert(&mut self, material: MaterialConstants) -> Result<()> {
        let key = normalize_name(&material.name);
        if self.materials.contains_key(&key) {
            return Err(Error::DuplicateMaterialName {
                name: material.name,
            });
        }
        self.materials.insert(key, material);
        Ok(())
    }
}

/// Resolve the default user catalog location using platform-specific config
/// directories.
pub fn default_catalog_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("io", "heckelpress", "heckelpress").ok_or(Error::ConfigDirsUnavailable)?;
    Ok(dirs.config_dir().join(CATALOG_FILENAME))
}

/// Normalize a material name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Normalize a header string for robust column matching. Strips everything
/// except ASCII alphanumerics so `K (1/MPa)` and `k_1_mpa` compare equal.
fn normalize_header(header: &str) -> String {
    header
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn header_synonyms_normalize_and_match() {
        let csv = "Material,K (1/MPa),A0,Theoretical Density\nBronze,0.0032,0.29,8.8\n";
        let catalog = MaterialCatalog::from_reader(Cursor::new(csv))
            .expect("synonym headers should parse via normalization");
        let bronze = catalog.get("Bronze").expect("material exists");
        assert_eq!(bronze.rho_theoretical, 8.8);
    }

    #[test]
    fn builtin_table_is_non_empty_and_sorted() {
        let names = MaterialCatalog::builtin().material_names();
        assert!(names.len() >= 5);
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
