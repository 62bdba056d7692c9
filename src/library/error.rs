use std::path::PathBuf;

use thiserror::Error;

/// Errors that prevent a cable table from loading at all.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The table file could not be opened.
    #[error("cable table {} is unreadable", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table header is missing a required column.
    #[error("cable table has no {column:?} column")]
    MissingColumn { column: &'static str },

    /// The table is not valid CSV.
    #[error("cable table is not valid CSV")]
    Csv(#[from] csv::Error),
}

/// A table row that was skipped while loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("row {row} is malformed: {context}")]
    Malformed { row: usize, context: String },
}
