use twine_solvers::equation::bisection;
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, TemperatureInterval},
    temperature_interval::kelvin as delta_kelvin,
};

/// Temperature coefficient of resistance of annealed copper at 20 °C, 1/K.
pub const COPPER_TEMPERATURE_COEFFICIENT: f64 = 0.00393;

/// Configuration of the rating calculator and its nonlinear solves.
#[derive(Debug, Clone, Copy)]
pub struct RatingConfig {
    /// Temperature coefficient of conductor resistance, 1/K.
    ///
    /// The copper value is applied to every conductor material. Aluminum's
    /// coefficient (about 0.00403/K) is close but not equal.
    pub temperature_coefficient: f64,

    /// Maximum iteration count for each bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the conductor temperature.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance on the emergency current.
    pub current_tol: ElectricCurrent,

    /// Initial upper bracket for the steady-state solve, above ambient.
    pub seed_rise: TemperatureInterval,

    /// Initial upper bracket for the emergency solve, as a multiple of the initial current.
    pub seed_factor: f64,

    /// Number of times a bracket may be doubled while searching for a sign change.
    pub max_bracket_expansions: usize,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            temperature_coefficient: COPPER_TEMPERATURE_COEFFICIENT,
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            current_tol: ElectricCurrent::new::<ampere>(1e-9),
            seed_rise: TemperatureInterval::new::<delta_kelvin>(50.0),
            seed_factor: 1.5,
            max_bracket_expansions: 60,
        }
    }
}

impl RatingConfig {
    /// Bisection configuration for solves over conductor temperature.
    pub(super) fn temperature_bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.temp_tol.get::<delta_kelvin>(),
        }
    }

    /// Bisection configuration for solves over load current.
    ///
    /// The residual of the emergency solve is a temperature, so it shares the
    /// temperature tolerance.
    pub(super) fn current_bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.current_tol.get::<ampere>(),
            x_rel_tol: 0.0,
            residual_tol: self.temp_tol.get::<delta_kelvin>(),
        }
    }
}
