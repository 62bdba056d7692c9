use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised while constructing cable models or validating their inputs.
///
/// Solver non-convergence never appears here: every nonlinear solve in the
/// rating calculator has an analytic fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CableError {
    /// Radii are non-positive, non-finite, or not strictly increasing.
    #[error("invalid geometry: {context}")]
    InvalidGeometry { context: String },

    /// A required input is missing, non-finite, or out of range.
    #[error("invalid input: {context}")]
    InvalidInput { context: String },
}

impl CableError {
    pub(crate) fn geometry(context: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            context: context.into(),
        }
    }

    pub(crate) fn input(context: impl Into<String>) -> Self {
        Self::InvalidInput {
            context: context.into(),
        }
    }

    /// Wraps a violated numeric constraint with the name of the offending field.
    pub(crate) fn constraint(field: &str, err: ConstraintError) -> Self {
        Self::input(format!("{field}: {err}"))
    }
}
