use twine_core::Model;
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, ThermodynamicTemperature, Time},
    time::hour,
};

use super::{CableLookup, RatingCalculator, RatingError, inputs};

/// Largest emergency-to-initial current ratio accepted by IEC 60853-2.
pub const IEC_SCALING_LIMIT: f64 = 2.5;

/// Emergency rating request for one cable type.
#[derive(Debug, Clone, PartialEq)]
pub struct EmergencyRatingRequest {
    pub cable_type: String,
    /// Current carried at equilibrium before the emergency.
    pub initial_current: ElectricCurrent,
    pub duration: Time,
    /// Conductor temperature limit, or the cable's rated maximum if `None`.
    pub max_temperature: Option<ThermodynamicTemperature>,
    pub ambient: ThermodynamicTemperature,
}

impl EmergencyRatingRequest {
    /// Creates a six hour request at 20 °C ambient, limited by the cable's
    /// rated maximum temperature.
    #[must_use]
    pub fn new(cable_type: impl Into<String>, initial_current: ElectricCurrent) -> Self {
        Self {
            cable_type: cable_type.into(),
            initial_current,
            duration: Time::new::<hour>(6.0),
            max_temperature: None,
            ambient: inputs::default_ambient(),
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Time) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_max_temperature(mut self, max_temperature: ThermodynamicTemperature) -> Self {
        self.max_temperature = Some(max_temperature);
        self
    }

    #[must_use]
    pub fn with_ambient(mut self, ambient: ThermodynamicTemperature) -> Self {
        self.ambient = ambient;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmergencyRatingReport {
    pub emergency_current: ElectricCurrent,
    pub initial_current: ElectricCurrent,
    pub duration: Time,
    /// The temperature limit the rating was computed against.
    pub max_temperature: ThermodynamicTemperature,
    /// Steady-state conductor temperature at the initial current.
    pub initial_temperature: ThermodynamicTemperature,
    /// Emergency over initial current, or zero when the initial current is zero.
    pub scaling_factor: f64,
    pub within_iec_limit: bool,
}

/// Emergency current rating for a catalogued cable.
#[derive(Debug, Clone, Copy)]
pub struct EmergencyRating<'a, L: ?Sized> {
    library: &'a L,
}

impl<'a, L: CableLookup + ?Sized> EmergencyRating<'a, L> {
    #[must_use]
    pub fn new(library: &'a L) -> Self {
        Self { library }
    }
}

impl<L: CableLookup + ?Sized> Model for EmergencyRating<'_, L> {
    type Input = EmergencyRatingRequest;
    type Output = EmergencyRatingReport;
    type Error = RatingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let initial_current = inputs::current("initial current", input.initial_current)?;
        let duration = inputs::duration("emergency duration", input.duration)?;
        let ambient = inputs::temperature("ambient temperature", input.ambient)?;
        let requested_max = input
            .max_temperature
            .map(|t| inputs::temperature("max temperature", t))
            .transpose()?;

        let resolved = inputs::resolve(self.library, &input.cable_type)?;
        let max_temperature = requested_max.unwrap_or(resolved.spec.max_temperature);
        let area = resolved.spec.conductor_area;

        let calculator = RatingCalculator::new(&resolved.network);
        let emergency_current = calculator
            .emergency_current(initial_current, duration, max_temperature, ambient, area)
            .into_inner();
        let initial_temperature =
            calculator.steady_state_temperature(initial_current, ambient, area);

        let initial_a = input.initial_current.get::<ampere>();
        let scaling_factor = if initial_a > 0.0 {
            emergency_current.get::<ampere>() / initial_a
        } else {
            0.0
        };

        Ok(EmergencyRatingReport {
            emergency_current,
            initial_current: input.initial_current,
            duration: input.duration,
            max_temperature,
            initial_temperature,
            scaling_factor,
            within_iec_limit: scaling_factor <= IEC_SCALING_LIMIT,
        })
    }
}
