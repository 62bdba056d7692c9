//! Emergency current under the IEC 60853-2 exponential heating law.
//!
//! Starting from equilibrium at `θ_i`, a step to current `I` drives the
//! conductor toward its steady state `θ_ss(I)`:
//!
//! `θ(t) = θ_i + (θ_ss(I) − θ_i) · (1 − e^(−t/τ))`
//!
//! The emergency current is the `I` for which `θ(duration)` reaches the
//! temperature limit. The headroom `θ_max − θ(duration)` falls as `I` rises
//! and diverges to `−∞` at the runaway current, where `θ_ss` has no solution.
//! Above that current the steady state takes its linearized fallback, so
//! the search never looks there.

use std::convert::Infallible;

use thiserror::Error;
use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;
use uom::si::{electric_current::ampere, f64::ElectricCurrent};

use super::{ConductorArea, RatingCalculator, RatingConfig, SolveFailure};

/// Fraction of the runaway current kept clear by the bracket.
const RUNAWAY_MARGIN: f64 = 1e-3;

/// Fixed quantities of one emergency solve, in °C and A.
#[derive(Debug, Clone, Copy)]
pub(super) struct EmergencyHeating {
    pub(super) initial_c: f64,
    pub(super) max_c: f64,
    pub(super) ambient_c: f64,
    /// `1 − e^(−duration/τ)`.
    pub(super) progress: f64,
    pub(super) area: ConductorArea,
}

impl EmergencyHeating {
    fn final_temperature(&self, calculator: &RatingCalculator<'_>, amps: f64) -> f64 {
        let steady = calculator.steady_state_celsius(amps, self.ambient_c, self.area);
        self.initial_c + (steady - self.initial_c) * self.progress
    }

    fn headroom(&self, calculator: &RatingCalculator<'_>, amps: f64) -> f64 {
        self.max_c - self.final_temperature(calculator, amps)
    }
}

/// Candidate emergency current and the temperature it reaches.
#[derive(Debug, Clone, Copy)]
pub(super) struct EmergencyOutput {
    pub(super) current_a: f64,
    pub(super) final_c: f64,
}

#[derive(Debug, Clone, Copy, Error)]
pub(super) enum EmergencyError {
    #[error("negative candidate current: {current_a} A")]
    NegativeCurrent { current_a: f64 },
}

pub(super) struct EmergencyModel<'a> {
    calculator: &'a RatingCalculator<'a>,
    heating: &'a EmergencyHeating,
}

impl Model for EmergencyModel<'_> {
    type Input = ElectricCurrent;
    type Output = EmergencyOutput;
    type Error = EmergencyError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let current_a = input.get::<ampere>();
        if current_a < 0.0 {
            return Err(EmergencyError::NegativeCurrent { current_a });
        }
        Ok(EmergencyOutput {
            current_a,
            final_c: self.heating.final_temperature(self.calculator, current_a),
        })
    }
}

/// Residual `θ_max − θ(duration)`, positive while the current can still rise.
pub(super) struct EmergencyProblem {
    max_c: f64,
}

impl EquationProblem<1> for EmergencyProblem {
    type Input = ElectricCurrent;
    type Output = EmergencyOutput;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ElectricCurrent::new::<ampere>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.max_c - output.final_c])
    }
}

/// Solves for the emergency current in amperes.
///
/// The bracket starts at `[0, max(seed_factor · I₀, 1 A)]` and the upper end
/// doubles until the headroom turns negative. The upper end never passes
/// just below the runaway current.
///
/// # Errors
///
/// Returns [`SolveFailure::NegativeRoot`] if the limit is already exceeded
/// with no current at all, and other [`SolveFailure`] variants if no bracket
/// is found or bisection fails to converge.
pub(super) fn solve(
    calculator: &RatingCalculator<'_>,
    heating: &EmergencyHeating,
    initial_a: f64,
    config: &RatingConfig,
) -> Result<f64, SolveFailure> {
    let at_zero = heating.headroom(calculator, 0.0);
    if at_zero == 0.0 {
        return Ok(0.0);
    }
    if at_zero < 0.0 {
        return Err(SolveFailure::NegativeRoot);
    }
    if at_zero.is_nan() {
        return Err(SolveFailure::NoBracket { expansions: 0 });
    }

    let ceiling = calculator.runaway_current(heating.area) * (1.0 - RUNAWAY_MARGIN);
    let mut lower = 0.0;
    let mut candidate = (config.seed_factor * initial_a).max(1.0).min(ceiling);
    let mut upper = None;
    for _ in 0..=config.max_bracket_expansions {
        if heating.headroom(calculator, candidate) <= 0.0 {
            upper = Some(candidate);
            break;
        }
        lower = candidate;
        if candidate >= ceiling {
            break;
        }
        candidate = (candidate * 2.0).min(ceiling);
    }
    let Some(upper) = upper else {
        return Err(SolveFailure::NoBracket {
            expansions: config.max_bracket_expansions,
        });
    };

    let model = EmergencyModel {
        calculator,
        heating,
    };
    let problem = EmergencyProblem {
        max_c: heating.max_c,
    };
    let solution = bisection::solve(
        &model,
        &problem,
        [lower, upper],
        &config.current_bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Negative currents are below any root in the bracket.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(SolveFailure::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output.current_a)
}
