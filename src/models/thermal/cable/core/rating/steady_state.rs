//! Heat balance of a loaded cable at equilibrium.
//!
//! The conductor temperature `T` satisfies `T = T_amb + W(T) · R_total`,
//! where the joule losses `W(T) = I² R₂₀ (1 + α (T − 20))` rise with `T`.
//! The residual `T_amb + W(T) R_total − T` is positive below the root and,
//! while `I² R₂₀ α R_total < 1`, negative above it. Past that point the cable
//! has no equilibrium (thermal runaway) and no bracket exists.

use std::convert::Infallible;

use thiserror::Error;
use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;
use uom::si::{
    f64::ThermodynamicTemperature, temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{RatingConfig, SolveFailure};

/// Operating point of one steady-state solve, in plain SI and °C.
#[derive(Debug, Clone, Copy)]
pub(super) struct HeatBalance {
    pub(super) ambient_c: f64,
    /// `I² R₂₀`, losses at 20 °C in W/m.
    pub(super) losses_20c: f64,
    pub(super) alpha: f64,
    pub(super) r_total: f64,
}

impl HeatBalance {
    fn losses_at(&self, temperature_c: f64) -> f64 {
        self.losses_20c * (1.0 + self.alpha * (temperature_c - 20.0))
    }

    /// Conductor temperature implied by the losses at `temperature_c`.
    fn predicted(&self, temperature_c: f64) -> f64 {
        self.ambient_c + self.losses_at(temperature_c) * self.r_total
    }

    fn residual(&self, temperature_c: f64) -> f64 {
        self.predicted(temperature_c) - temperature_c
    }

    /// Temperature with resistance held at its 20 °C value.
    pub(super) fn linearized(&self) -> f64 {
        self.ambient_c + self.losses_20c * self.r_total
    }
}

/// Candidate conductor temperature and the temperature its losses imply.
#[derive(Debug, Clone, Copy)]
pub(super) struct HeatBalanceOutput {
    pub(super) temperature_c: f64,
    pub(super) predicted_c: f64,
}

#[derive(Debug, Clone, Copy, Error)]
pub(super) enum HeatBalanceError {
    /// Below about −234.5 °C the linear resistance law goes non-positive.
    #[error("conductor resistance is not positive at {temperature_c} °C")]
    NonPositiveResistance { temperature_c: f64 },
}

pub(super) struct HeatBalanceModel<'a> {
    balance: &'a HeatBalance,
}

impl Model for HeatBalanceModel<'_> {
    type Input = ThermodynamicTemperature;
    type Output = HeatBalanceOutput;
    type Error = HeatBalanceError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let temperature_c = input.get::<degree_celsius>();
        if 1.0 + self.balance.alpha * (temperature_c - 20.0) <= 0.0 {
            return Err(HeatBalanceError::NonPositiveResistance { temperature_c });
        }
        Ok(HeatBalanceOutput {
            temperature_c,
            predicted_c: self.balance.predicted(temperature_c),
        })
    }
}

/// Residual `predicted − candidate`, positive when the candidate is too cold.
pub(super) struct HeatBalanceProblem;

impl EquationProblem<1> for HeatBalanceProblem {
    type Input = ThermodynamicTemperature;
    type Output = HeatBalanceOutput;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<degree_celsius>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.predicted_c - output.temperature_c])
    }
}

/// Solves the heat balance for the conductor temperature in °C.
///
/// The bracket starts at `[ambient, ambient + seed_rise]` and the upper end
/// doubles its rise until the residual turns negative.
///
/// # Errors
///
/// Returns [`SolveFailure`] if no bracket is found (e.g. thermal runaway)
/// or bisection fails to converge.
pub(super) fn solve(balance: &HeatBalance, config: &RatingConfig) -> Result<f64, SolveFailure> {
    let at_ambient = balance.residual(balance.ambient_c);
    if at_ambient == 0.0 {
        return Ok(balance.ambient_c);
    }
    if at_ambient.is_nan() || at_ambient < 0.0 {
        return Err(SolveFailure::NoBracket { expansions: 0 });
    }

    let mut lower = balance.ambient_c;
    let mut rise = config.seed_rise.get::<delta_kelvin>();
    let mut upper = None;
    for _ in 0..=config.max_bracket_expansions {
        let candidate = balance.ambient_c + rise;
        if balance.residual(candidate) <= 0.0 {
            upper = Some(candidate);
            break;
        }
        lower = candidate;
        rise *= 2.0;
    }
    let Some(upper) = upper else {
        return Err(SolveFailure::NoBracket {
            expansions: config.max_bracket_expansions,
        });
    };

    let model = HeatBalanceModel { balance };
    let solution = bisection::solve(
        &model,
        &HeatBalanceProblem,
        [lower, upper],
        &config.temperature_bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Candidates where the resistance law breaks down lie below the root.
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

    Ok(solution.snapshot.output.temperature_c)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn balance(losses_20c: f64) -> HeatBalance {
        HeatBalance {
            ambient_c: 20.0,
            losses_20c,
            alpha: 0.00393,
            r_total: 0.9,
        }
    }

    /// `T = (T_amb + W₂₀ R (1 − 20α)) / (1 − W₂₀ R α)`.
    fn closed_form(b: &HeatBalance) -> f64 {
        let k = b.losses_20c * b.r_total * b.alpha;
        (b.ambient_c + b.losses_20c * b.r_total * (1.0 - 20.0 * b.alpha)) / (1.0 - k)
    }

    #[test]
    fn matches_closed_form() {
        for losses in [0.5, 5.0, 50.0, 150.0] {
            let b = balance(losses);
            let solved = solve(&b, &RatingConfig::default()).expect("should converge");
            assert_relative_eq!(solved, closed_form(&b), epsilon = 1e-6);
        }
    }

    #[test]
    fn unloaded_cable_sits_at_ambient() {
        let solved = solve(&balance(0.0), &RatingConfig::default()).unwrap();
        assert_eq!(solved, 20.0);
    }

    #[test]
    fn thermal_runaway_has_no_bracket() {
        // W₂₀ R α ≥ 1: losses grow faster than the soil can shed them.
        let b = balance(1.0 / (0.9 * 0.00393) + 1.0);
        assert!(matches!(
            solve(&b, &RatingConfig::default()),
            Err(SolveFailure::NoBracket { .. })
        ));
        assert_relative_eq!(b.linearized(), 20.0 + b.losses_20c * 0.9);
    }

    #[test]
    fn iteration_cap_is_reported() {
        let config = RatingConfig {
            max_iters: 2,
            ..RatingConfig::default()
        };
        assert!(matches!(
            solve(&balance(50.0), &config),
            Err(SolveFailure::MaxIters { .. })
        ));
    }
}
