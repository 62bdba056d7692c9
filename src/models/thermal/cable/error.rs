use thiserror::Error;

use super::CableError;

/// Errors returned by the cable rating models.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    /// The request or the catalogued cable is invalid.
    #[error(transparent)]
    Cable(#[from] CableError),

    /// No cable with the requested identifier exists.
    #[error("cable type not found: {cable_type}")]
    CableTypeNotFound { cable_type: String },
}
