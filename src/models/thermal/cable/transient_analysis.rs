use twine_core::Model;
use uom::si::{
    f64::{ElectricCurrent, ThermodynamicTemperature, Time},
    time::hour,
};

use super::{CableLookup, RatingCalculator, RatingError, TransientSample, inputs};

/// Samples returned when a request does not say otherwise.
pub const DEFAULT_TRANSIENT_SAMPLES: usize = 100;

/// Transient request: a step from `initial_current` to `emergency_current`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransientRequest {
    pub cable_type: String,
    pub initial_current: ElectricCurrent,
    pub emergency_current: ElectricCurrent,
    pub duration: Time,
    pub ambient: ThermodynamicTemperature,
    pub samples: usize,
}

impl TransientRequest {
    /// Creates a six hour, 100 sample request at 20 °C ambient.
    #[must_use]
    pub fn new(
        cable_type: impl Into<String>,
        initial_current: ElectricCurrent,
        emergency_current: ElectricCurrent,
    ) -> Self {
        Self {
            cable_type: cable_type.into(),
            initial_current,
            emergency_current,
            duration: Time::new::<hour>(6.0),
            ambient: inputs::default_ambient(),
            samples: DEFAULT_TRANSIENT_SAMPLES,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Time) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_ambient(mut self, ambient: ThermodynamicTemperature) -> Self {
        self.ambient = ambient;
        self
    }

    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransientReport {
    pub samples: Vec<TransientSample>,
    pub initial_current: ElectricCurrent,
    pub emergency_current: ElectricCurrent,
    pub duration: Time,
    /// Highest sampled conductor temperature.
    pub peak_temperature: ThermodynamicTemperature,
    /// Conductor temperature at the end of the window.
    pub final_temperature: ThermodynamicTemperature,
}

/// Conductor temperature trajectory for a catalogued cable.
#[derive(Debug, Clone, Copy)]
pub struct TransientAnalysis<'a, L: ?Sized> {
    library: &'a L,
}

impl<'a, L: CableLookup + ?Sized> TransientAnalysis<'a, L> {
    #[must_use]
    pub fn new(library: &'a L) -> Self {
        Self { library }
    }
}

impl<L: CableLookup + ?Sized> Model for TransientAnalysis<'_, L> {
    type Input = TransientRequest;
    type Output = TransientReport;
    type Error = RatingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let initial_current = inputs::current("initial current", input.initial_current)?;
        let emergency_current = inputs::current("emergency current", input.emergency_current)?;
        let duration = inputs::duration("duration", input.duration)?;
        let ambient = inputs::temperature("ambient temperature", input.ambient)?;
        let samples = inputs::count("samples", input.samples)?;
        let resolved = inputs::resolve(self.library, &input.cable_type)?;

        let samples = RatingCalculator::new(&resolved.network).transient_temperature(
            initial_current,
            emergency_current,
            duration,
            ambient,
            resolved.spec.conductor_area,
            samples,
        );

        let temperatures = samples.iter().map(|sample| sample.temperature);
        let peak_temperature = temperatures
            .clone()
            .reduce(|a, b| if b > a { b } else { a })
            .unwrap_or(ambient);
        let final_temperature = temperatures.last().unwrap_or(ambient);

        Ok(TransientReport {
            samples,
            initial_current: input.initial_current,
            emergency_current: input.emergency_current,
            duration: input.duration,
            peak_temperature,
            final_temperature,
        })
    }
}
