use std::{path::PathBuf, sync::OnceLock};

use crate::models::thermal::cable::{CableLookup, CableSpec};

use super::CableLibrary;

/// Where a [`SharedLibrary`] loads its catalogue from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CableSource {
    /// A CSV file, falling back to the built-in catalogue.
    Path(PathBuf),
    /// CSV text, falling back to the built-in catalogue.
    Csv(String),
    /// The built-in catalogue.
    Defaults,
}

impl CableSource {
    fn load(&self) -> CableLibrary {
        match self {
            Self::Path(path) => CableLibrary::load_or_default(path),
            Self::Csv(text) => CableLibrary::from_csv_reader(text.as_bytes()).unwrap_or_else(|err| {
                tracing::warn!(%err, "using built-in cable catalogue");
                CableLibrary::defaults()
            }),
            Self::Defaults => CableLibrary::defaults(),
        }
    }
}

/// A catalogue that is loaded on first use and then shared.
///
/// Concurrent first calls load the catalogue once; every caller sees the
/// same [`CableLibrary`].
#[derive(Debug)]
pub struct SharedLibrary {
    source: CableSource,
    library: OnceLock<CableLibrary>,
}

impl SharedLibrary {
    #[must_use]
    pub fn new(source: CableSource) -> Self {
        Self {
            source,
            library: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn source(&self) -> &CableSource {
        &self.source
    }

    /// The catalogue, loading it if this is the first access.
    pub fn get(&self) -> &CableLibrary {
        self.library.get_or_init(|| {
            tracing::debug!(source = ?self.source, "loading cable catalogue");
            self.source.load()
        })
    }

    /// Whether the catalogue has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.library.get().is_some()
    }
}

impl CableLookup for SharedLibrary {
    fn lookup(&self, cable_type: &str) -> Option<CableSpec> {
        self.get().lookup(cable_type)
    }
}
