use thiserror::Error;
use twine_solvers::equation::bisection;

/// Reasons a nonlinear rating solve did not produce a root.
///
/// Always absorbed by the calculator's fallback formulas.
#[derive(Debug, Error)]
pub(super) enum SolveFailure {
    /// The only root lies at a negative current.
    #[error("root lies below zero current")]
    NegativeRoot,

    /// No sign change of the residual was found.
    #[error("no bracketing interval after {expansions} expansions")]
    NoBracket { expansions: usize },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters { residual: f64, iters: usize },
}
