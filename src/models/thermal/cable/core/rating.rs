//! Conductor losses, equilibrium temperature, and emergency ratings.

mod config;
mod emergency;
mod failure;
mod steady_state;
mod transient;

pub use config::{COPPER_TEMPERATURE_COEFFICIENT, RatingConfig};
pub use transient::TransientSample;

use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, ThermodynamicTemperature, Time},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::{Constrained, NonNegative},
    units::{FromSi, LinearPower, LinearResistance},
};

use super::{ConductorArea, ThermalNetwork};

use emergency::EmergencyHeating;
use failure::SolveFailure;
use steady_state::HeatBalance;

/// Rating calculations for one cable's [`ThermalNetwork`].
///
/// Holds no state between calls: every method is a pure function of its
/// arguments, the network, and the configuration.
#[derive(Debug, Clone, Copy)]
pub struct RatingCalculator<'a> {
    network: &'a ThermalNetwork,
    config: RatingConfig,
}

impl<'a> RatingCalculator<'a> {
    /// Creates a calculator with the default [`RatingConfig`].
    #[must_use]
    pub fn new(network: &'a ThermalNetwork) -> Self {
        Self::with_config(network, RatingConfig::default())
    }

    #[must_use]
    pub fn with_config(network: &'a ThermalNetwork, config: RatingConfig) -> Self {
        Self { network, config }
    }

    #[must_use]
    pub fn network(&self) -> &'a ThermalNetwork {
        self.network
    }

    #[must_use]
    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Conductor resistance per metre at `temperature`.
    ///
    /// `R(T) = (ρ₂₀ / A) · (1 + α (T − 20 °C))`, with `α` taken from the
    /// configuration for every conductor material.
    #[must_use]
    pub fn conductor_resistance(
        &self,
        temperature: ThermodynamicTemperature,
        area: ConductorArea,
    ) -> LinearResistance {
        LinearResistance::from_si(
            self.resistance_20c(area) * self.resistance_factor(temperature.get::<degree_celsius>()),
        )
    }

    /// Joule losses per metre, `I² R(T)`.
    #[must_use]
    pub fn conductor_losses(
        &self,
        current: Constrained<ElectricCurrent, NonNegative>,
        temperature: ThermodynamicTemperature,
        area: ConductorArea,
    ) -> LinearPower {
        let amps = current.into_inner().get::<ampere>();
        LinearPower::from_si(amps.powi(2) * self.conductor_resistance(temperature, area).value)
    }

    /// Equilibrium conductor temperature for a constant `current`.
    ///
    /// Solves `T = T_amb + I² R(T) · R_total` by bisection. When the solve
    /// fails (including thermal runaway, where no equilibrium exists), the
    /// resistance is held at its 20 °C value instead:
    /// `T ≈ T_amb + I² R₂₀ · R_total`.
    #[must_use]
    pub fn steady_state_temperature(
        &self,
        current: Constrained<ElectricCurrent, NonNegative>,
        ambient: ThermodynamicTemperature,
        area: ConductorArea,
    ) -> ThermodynamicTemperature {
        let amps = current.into_inner().get::<ampere>();
        if amps == 0.0 {
            return ambient;
        }
        ThermodynamicTemperature::new::<degree_celsius>(self.steady_state_celsius(
            amps,
            ambient.get::<degree_celsius>(),
            area,
        ))
    }

    /// Thermal time constant of the network.
    #[must_use]
    pub fn time_constant(&self) -> Time {
        self.network.time_constant()
    }

    /// Largest current the cable can carry for `duration`, starting from
    /// equilibrium at `initial_current`, without exceeding `max_temperature`.
    ///
    /// The result is never negative. Two degraded paths replace the solve:
    ///
    /// - If the root would be negative (the limit is already exceeded
    ///   without load) or bisection stops at its iteration cap, the initial
    ///   current is returned as a floor.
    /// - If no bracket is found or the solver errors, the current is scaled
    ///   as if losses were `∝ I²` at constant resistance:
    ///   `I₀ · sqrt(max((θ_max − θ_amb) / (θ_i − θ_amb), 0.1))`.
    #[must_use]
    pub fn emergency_current(
        &self,
        initial_current: Constrained<ElectricCurrent, NonNegative>,
        duration: Constrained<Time, NonNegative>,
        max_temperature: ThermodynamicTemperature,
        ambient: ThermodynamicTemperature,
        area: ConductorArea,
    ) -> Constrained<ElectricCurrent, NonNegative> {
        let initial_a = initial_current.into_inner().get::<ampere>();
        let ambient_c = ambient.get::<degree_celsius>();
        let initial_c = self.steady_state_celsius(initial_a, ambient_c, area);
        let max_c = max_temperature.get::<degree_celsius>();

        let heating = EmergencyHeating {
            initial_c,
            max_c,
            ambient_c,
            progress: transient::progress(duration.into_inner(), self.time_constant()),
            area,
        };

        match emergency::solve(self, &heating, initial_a, &self.config) {
            Ok(amps) => NonNegative::new(ElectricCurrent::new::<ampere>(amps))
                .unwrap_or(initial_current),
            Err(failure @ (SolveFailure::NegativeRoot | SolveFailure::MaxIters { .. })) => {
                tracing::warn!(%failure, initial_a, "emergency rating floored at initial current");
                initial_current
            }
            Err(failure) => {
                tracing::debug!(%failure, "emergency rating solve failed, scaling initial current");
                let rise = initial_c - ambient_c;
                let ratio = if rise > 0.0 {
                    (max_c - ambient_c) / rise
                } else {
                    0.1
                };
                NonNegative::new(ElectricCurrent::new::<ampere>(
                    initial_a * ratio.max(0.1).sqrt(),
                ))
                .unwrap_or(initial_current)
            }
        }
    }

    /// Conductor temperature trajectory after a step from `initial_current`
    /// to `emergency_current`.
    ///
    /// Returns `samples` points evenly spaced from zero to `duration`. Each
    /// temperature is `θ_i + (θ_f − θ_i)(1 − e^(−t/τ))`, where `θ_i` and `θ_f`
    /// are the steady-state temperatures at the two currents, so the
    /// trajectory moves monotonically from `θ_i` toward `θ_f`.
    #[must_use]
    pub fn transient_temperature(
        &self,
        initial_current: Constrained<ElectricCurrent, NonNegative>,
        emergency_current: Constrained<ElectricCurrent, NonNegative>,
        duration: Constrained<Time, NonNegative>,
        ambient: ThermodynamicTemperature,
        area: ConductorArea,
        samples: usize,
    ) -> Vec<TransientSample> {
        let initial_c = self
            .steady_state_temperature(initial_current, ambient, area)
            .get::<degree_celsius>();
        let final_c = self
            .steady_state_temperature(emergency_current, ambient, area)
            .get::<degree_celsius>();
        let tau = self.time_constant();

        transient::sample_times(duration.into_inner(), samples)
            .map(|time| TransientSample {
                time,
                temperature: ThermodynamicTemperature::new::<degree_celsius>(
                    initial_c + (final_c - initial_c) * transient::progress(time, tau),
                ),
            })
            .collect()
    }

    /// Conductor resistance per metre at 20 °C, in Ω/m.
    fn resistance_20c(&self, area: ConductorArea) -> f64 {
        self.network.materials().conductor.resistivity_20c.value / area.value
    }

    /// Current in A above which no steady state exists, `1 / sqrt(R₂₀ α R_total)`.
    fn runaway_current(&self, area: ConductorArea) -> f64 {
        let k = self.resistance_20c(area)
            * self.config.temperature_coefficient
            * self.network.r_total().value;
        if k > 0.0 { k.sqrt().recip() } else { f64::INFINITY }
    }

    fn resistance_factor(&self, temperature_c: f64) -> f64 {
        1.0 + self.config.temperature_coefficient * (temperature_c - 20.0)
    }

    /// Steady-state temperature in °C with the linearized fallback applied.
    fn steady_state_celsius(&self, amps: f64, ambient_c: f64, area: ConductorArea) -> f64 {
        let balance = HeatBalance {
            ambient_c,
            losses_20c: amps.powi(2) * self.resistance_20c(area),
            alpha: self.config.temperature_coefficient,
            r_total: self.network.r_total().value,
        };

        steady_state::solve(&balance, &self.config).unwrap_or_else(|failure| {
            tracing::debug!(%failure, amps, "steady-state solve failed, using 20 °C resistance");
            balance.linearized()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::Time,
        time::{hour, second},
    };

    use crate::models::thermal::cable::core::{
        ConductorMaterial, MaterialProperties, ThermalNetwork,
        test_support::{amps, celsius, hours, reference_area, reference_geometry, reference_network},
    };

    #[test]
    fn resistance_rises_with_temperature() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);
        let area = reference_area();

        let r20 = calc.conductor_resistance(celsius(20.0), area);
        let r90 = calc.conductor_resistance(celsius(90.0), area);

        assert_relative_eq!(r20.value, 0.0172e-6 / 506.7e-6, max_relative = 1e-9);
        assert_relative_eq!(r90.value, r20.value * (1.0 + 0.00393 * 70.0), max_relative = 1e-9);
    }

    #[test]
    fn temperature_coefficient_is_shared_by_aluminum() {
        // Known approximation: the copper coefficient is used for every metal.
        let network = ThermalNetwork::new(
            reference_geometry(),
            MaterialProperties::new(ConductorMaterial::Aluminum),
        )
        .unwrap();
        let calc = RatingCalculator::new(&network);
        let area = reference_area();

        let ratio = calc.conductor_resistance(celsius(70.0), area).value
            / calc.conductor_resistance(celsius(20.0), area).value;
        assert_relative_eq!(
            ratio,
            1.0 + COPPER_TEMPERATURE_COEFFICIENT * 50.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn losses_are_current_squared_times_resistance() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);
        let area = reference_area();

        let losses = calc.conductor_losses(amps(400.0), celsius(20.0), area);
        assert_relative_eq!(losses.value, 400.0_f64.powi(2) * 0.0172 / 506.7, max_relative = 1e-9);
        assert_eq!(calc.conductor_losses(amps(0.0), celsius(90.0), area).value, 0.0);
    }

    #[test]
    fn steady_state_at_reference_load() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);

        let temperature = calc.steady_state_temperature(amps(400.0), celsius(20.0), reference_area());
        assert_relative_eq!(temperature.get::<degree_celsius>(), 25.0058, epsilon = 1e-3);
    }

    #[test]
    fn steady_state_is_a_fixed_point() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);
        let area = reference_area();
        let current = amps(1000.0);

        let temperature = calc.steady_state_temperature(current, celsius(20.0), area);
        let losses = calc.conductor_losses(current, temperature, area);
        assert_relative_eq!(
            temperature.get::<degree_celsius>(),
            20.0 + losses.value * network.r_total().value,
            epsilon = 1e-6
        );
    }

    #[test]
    fn zero_current_stays_at_ambient() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);

        let ambient = celsius(15.0);
        assert_eq!(calc.steady_state_temperature(amps(0.0), ambient, reference_area()), ambient);
    }

    #[test]
    fn steady_state_is_idempotent() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);

        let first = calc.steady_state_temperature(amps(750.0), celsius(25.0), reference_area());
        let again = calc.steady_state_temperature(amps(750.0), celsius(25.0), reference_area());
        assert_eq!(first, again);
    }

    #[test]
    fn runaway_falls_back_to_linearized_temperature() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);
        let area = reference_area();

        // Runaway begins near 2880 A for the reference cable.
        let current = 4000.0;
        let temperature = calc.steady_state_temperature(amps(current), celsius(20.0), area);
        let expected = 20.0 + current.powi(2) * (0.0172 / 506.7) * network.r_total().value;
        assert_relative_eq!(temperature.get::<degree_celsius>(), expected, max_relative = 1e-9);
    }

    #[test]
    fn emergency_rating_of_reference_cable() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);

        let emergency = calc
            .emergency_current(amps(400.0), hours(6.0), celsius(90.0), celsius(20.0), reference_area())
            .into_inner()
            .get::<ampere>();

        assert_relative_eq!(emergency, 1337.86, epsilon = 0.05);
        assert!(emergency > 400.0);
    }

    #[test]
    fn emergency_rating_reaches_the_limit() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);
        let area = reference_area();
        let duration = hours(0.5);

        let emergency =
            calc.emergency_current(amps(600.0), duration, celsius(90.0), celsius(20.0), area);
        let trajectory =
            calc.transient_temperature(amps(600.0), emergency, duration, celsius(20.0), area, 10);

        let last = trajectory.last().expect("ten samples");
        assert_relative_eq!(last.time.get::<hour>(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(last.temperature.get::<degree_celsius>(), 90.0, epsilon = 1e-6);
    }

    #[test]
    fn shorter_emergencies_allow_more_current() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);
        let area = reference_area();

        let rating = |h: f64| {
            calc.emergency_current(amps(400.0), hours(h), celsius(90.0), celsius(20.0), area)
                .into_inner()
                .get::<ampere>()
        };
        assert!(rating(0.25) > rating(1.0));
        assert!(rating(1.0) > rating(6.0));
    }

    #[test]
    fn short_emergencies_stay_below_runaway() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);
        let area = reference_area();
        let runaway = (0.0172 / 506.7 * 0.00393 * network.r_total().value).sqrt().recip();

        let mut previous = 0.0;
        for h in [0.25, 0.1, 0.05, 0.02, 0.01] {
            let duration = hours(h);
            let emergency =
                calc.emergency_current(amps(400.0), duration, celsius(90.0), celsius(20.0), area);
            let rating = emergency.into_inner().get::<ampere>();
            assert!(rating > previous, "{h} h: {rating} A");
            assert!(rating < runaway, "{h} h: {rating} A");

            let trajectory =
                calc.transient_temperature(amps(400.0), emergency, duration, celsius(20.0), area, 2);
            assert_relative_eq!(
                trajectory[1].temperature.get::<degree_celsius>(),
                90.0,
                epsilon = 1e-4
            );
            previous = rating;
        }
    }

    #[test]
    fn three_minute_emergency_of_reference_cable() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);

        let emergency = calc
            .emergency_current(amps(400.0), hours(0.05), celsius(90.0), celsius(20.0), reference_area())
            .into_inner()
            .get::<ampere>();
        assert_relative_eq!(emergency, 2586.85, epsilon = 0.05);
    }

    #[test]
    fn emergency_floors_at_initial_current_when_limit_already_exceeded() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);

        // Ambient above the limit: even zero current overshoots.
        let emergency =
            calc.emergency_current(amps(300.0), hours(6.0), celsius(30.0), celsius(40.0), reference_area());
        assert_eq!(emergency, amps(300.0));
    }

    #[test]
    fn emergency_scales_when_no_bracket_exists() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);
        let area = reference_area();

        // A zero-length emergency never heats the conductor, so no current
        // reaches the limit.
        let initial_c = calc
            .steady_state_temperature(amps(400.0), celsius(20.0), area)
            .get::<degree_celsius>();
        let emergency = calc
            .emergency_current(amps(400.0), hours(0.0), celsius(90.0), celsius(20.0), area)
            .into_inner()
            .get::<ampere>();

        let expected = 400.0 * (70.0 / (initial_c - 20.0)).sqrt();
        assert_relative_eq!(emergency, expected, max_relative = 1e-9);
    }

    #[test]
    fn unloaded_start_still_has_a_rating() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);

        let emergency = calc
            .emergency_current(amps(0.0), hours(6.0), celsius(90.0), celsius(20.0), reference_area())
            .into_inner()
            .get::<ampere>();
        assert!(emergency > 1000.0);
    }

    #[test]
    fn transient_starts_at_initial_steady_state() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);
        let area = reference_area();

        let initial = calc.steady_state_temperature(amps(400.0), celsius(20.0), area);
        let trajectory =
            calc.transient_temperature(amps(400.0), amps(1200.0), hours(6.0), celsius(20.0), area, 100);

        assert_eq!(trajectory.len(), 100);
        assert_eq!(trajectory[0].time, Time::new::<second>(0.0));
        assert_relative_eq!(
            trajectory[0].temperature.get::<degree_celsius>(),
            initial.get::<degree_celsius>(),
            epsilon = 1e-9
        );
        assert!(
            trajectory
                .windows(2)
                .all(|pair| pair[1].temperature > pair[0].temperature)
        );
    }

    #[test]
    fn transient_converges_to_final_steady_state() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);
        let area = reference_area();

        let target = calc.steady_state_temperature(amps(1200.0), celsius(20.0), area);
        let trajectory =
            calc.transient_temperature(amps(400.0), amps(1200.0), hours(1000.0), celsius(20.0), area, 50);

        let last = trajectory.last().expect("fifty samples");
        assert_relative_eq!(
            last.temperature.get::<degree_celsius>(),
            target.get::<degree_celsius>(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn transient_cools_when_load_drops() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);

        let trajectory = calc.transient_temperature(
            amps(1200.0),
            amps(400.0),
            hours(3.0),
            celsius(20.0),
            reference_area(),
            20,
        );
        assert!(
            trajectory
                .windows(2)
                .all(|pair| pair[1].temperature < pair[0].temperature)
        );
    }

    #[test]
    fn transient_is_flat_without_a_load_change() {
        let network = reference_network();
        let calc = RatingCalculator::new(&network);

        let trajectory = calc.transient_temperature(
            amps(500.0),
            amps(500.0),
            hours(3.0),
            celsius(20.0),
            reference_area(),
            5,
        );
        let first = trajectory[0].temperature;
        assert!(trajectory.iter().all(|sample| sample.temperature == first));
    }
}
