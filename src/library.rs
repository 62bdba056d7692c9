//! A catalogue of cable types loaded from a CSV table.
//!
//! Each row names a conductor size, a voltage rating, a conductor material,
//! and an insulation type. Dimensions and temperature limits are estimated
//! from those designations. Rows that cannot be interpreted are skipped and
//! reported through [`CableLibrary::skipped_rows`].
//!
//! [`CableLibrary::load_or_default`] falls back to a small built-in catalogue
//! when the table cannot be loaded, and [`SharedLibrary`] loads a catalogue
//! at most once on first use.

mod error;
mod record;
mod shared;
mod sizing;

use std::{collections::BTreeMap, fs::File, io, path::Path};

use serde::Deserialize;

use crate::models::thermal::cable::{CableLookup, CableSpec};

pub use error::{LibraryError, RowError};
pub use record::{CableRecord, CableSummary};
pub use shared::{CableSource, SharedLibrary};

use record::{Designation, Dimensions};

const REQUIRED_COLUMNS: [&str; 2] = ["cable_size", "voltage"];

const DEFAULT_MATERIAL: &str = "CU";
const DEFAULT_INSULATION: &str = "XLPE";

/// A cable catalogue keyed by cable identifier.
#[derive(Debug, Clone, Default)]
pub struct CableLibrary {
    cables: BTreeMap<String, CableRecord>,
    skipped: Vec<RowError>,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    cable_size: String,
    voltage: String,
    #[serde(default)]
    material: Option<String>,
    #[serde(default)]
    insul_material: Option<String>,
}

impl CableLibrary {
    /// Reads a catalogue from CSV text.
    ///
    /// Rows that cannot be parsed, or whose designations do not describe a
    /// valid cable, are skipped. A later row with the same identifier
    /// replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError`] if the header is unreadable or lacks a
    /// required column.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self, LibraryError> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let headers = reader.headers()?;
        if let Some(column) = REQUIRED_COLUMNS
            .into_iter()
            .find(|column| !headers.iter().any(|header| header == *column))
        {
            return Err(LibraryError::MissingColumn { column });
        }

        let mut library = Self::default();
        for (row, result) in reader.deserialize::<CsvRow>().enumerate() {
            let parsed = result
                .map_err(|err| RowError::Malformed {
                    row,
                    context: err.to_string(),
                })
                .and_then(|csv_row| csv_row.into_record(row));

            match parsed {
                Ok(record) => library.insert(record),
                Err(err) => {
                    tracing::warn!(%err, "skipping cable row");
                    library.skipped.push(err);
                }
            }
        }

        tracing::debug!(
            cables = library.len(),
            skipped = library.skipped.len(),
            "loaded cable table"
        );
        Ok(library)
    }

    /// Reads a catalogue from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Unreadable`] if the file cannot be opened, or
    /// any error from [`CableLibrary::from_csv_reader`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LibraryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LibraryError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv_reader(io::BufReader::new(file))
    }

    /// Reads a catalogue from a CSV file, or the built-in catalogue if it
    /// cannot be loaded.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::from_path(path).unwrap_or_else(|err| {
            tracing::warn!(%err, "using built-in cable catalogue");
            Self::defaults()
        })
    }

    /// The built-in catalogue.
    #[must_use]
    pub fn defaults() -> Self {
        let entries = [
            (
                Designation {
                    size: "1000 MCM",
                    voltage: "15 KV",
                    material: "CU",
                    insulation: "XLPE",
                },
                Dimensions {
                    area_mm2: 506.7,
                    conductor_diameter_mm: 25.4,
                    insulation_thickness_mm: 4.5,
                    sheath_thickness_mm: 2.0,
                    max_temperature_c: 90.0,
                },
            ),
            (
                Designation {
                    size: "750 MCM",
                    voltage: "12 KV",
                    material: "CU",
                    insulation: "Paper",
                },
                Dimensions {
                    area_mm2: 380.0,
                    conductor_diameter_mm: 22.0,
                    insulation_thickness_mm: 4.0,
                    sheath_thickness_mm: 2.0,
                    max_temperature_c: 80.0,
                },
            ),
        ];

        let mut library = Self::default();
        for (designation, dimensions) in &entries {
            match CableRecord::build(designation, dimensions) {
                Ok(record) => library.insert(record),
                Err(context) => tracing::warn!(%context, "invalid built-in cable"),
            }
        }
        library
    }

    /// Adds a record, replacing any record with the same identifier.
    pub fn insert(&mut self, record: CableRecord) {
        self.cables.insert(record.id.clone(), record);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CableRecord> {
        self.cables.get(id)
    }

    /// Summaries of every cable, ordered by identifier.
    #[must_use]
    pub fn cable_types(&self) -> Vec<CableSummary> {
        self.cables.values().map(CableRecord::summary).collect()
    }

    /// Rows skipped while loading.
    #[must_use]
    pub fn skipped_rows(&self) -> &[RowError] {
        &self.skipped
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cables.is_empty()
    }
}

impl CableLookup for CableLibrary {
    fn lookup(&self, cable_type: &str) -> Option<CableSpec> {
        self.get(cable_type).map(CableRecord::spec)
    }
}

impl CsvRow {
    fn into_record(self, row: usize) -> Result<CableRecord, RowError> {
        let material = non_empty(self.material.as_deref()).unwrap_or(DEFAULT_MATERIAL);
        let insulation = non_empty(self.insul_material.as_deref()).unwrap_or(DEFAULT_INSULATION);

        CableRecord::from_row(
            row,
            &Designation {
                size: &self.cable_size,
                voltage: &self.voltage,
                material,
                insulation,
            },
        )
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
