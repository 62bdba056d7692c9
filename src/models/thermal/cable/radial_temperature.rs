use twine_core::Model;
use uom::si::f64::{ElectricCurrent, ThermodynamicTemperature};

use super::{CableLookup, RadialProfile, RadialProfileCalculator, RatingError, inputs};

/// Radii returned when a request does not say otherwise.
pub const DEFAULT_RADIAL_POINTS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct RadialTemperatureRequest {
    pub cable_type: String,
    pub current: ElectricCurrent,
    pub ambient: ThermodynamicTemperature,
    pub points: usize,
}

impl RadialTemperatureRequest {
    /// Creates a 50 point request at 20 °C ambient.
    #[must_use]
    pub fn new(cable_type: impl Into<String>, current: ElectricCurrent) -> Self {
        Self {
            cable_type: cable_type.into(),
            current,
            ambient: inputs::default_ambient(),
            points: DEFAULT_RADIAL_POINTS,
        }
    }

    #[must_use]
    pub fn with_ambient(mut self, ambient: ThermodynamicTemperature) -> Self {
        self.ambient = ambient;
        self
    }

    #[must_use]
    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadialTemperatureReport {
    /// Profile from the conductor surface outward, with layer boundaries.
    pub profile: RadialProfile,
    pub current: ElectricCurrent,
    pub ambient: ThermodynamicTemperature,
    /// Highest temperature in the profile.
    pub peak_temperature: ThermodynamicTemperature,
}

/// Radial temperature distribution for a catalogued cable.
#[derive(Debug, Clone, Copy)]
pub struct RadialTemperature<'a, L: ?Sized> {
    library: &'a L,
}

impl<'a, L: CableLookup + ?Sized> RadialTemperature<'a, L> {
    #[must_use]
    pub fn new(library: &'a L) -> Self {
        Self { library }
    }
}

impl<L: CableLookup + ?Sized> Model for RadialTemperature<'_, L> {
    type Input = RadialTemperatureRequest;
    type Output = RadialTemperatureReport;
    type Error = RatingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let current = inputs::current("current", input.current)?;
        let ambient = inputs::temperature("ambient temperature", input.ambient)?;
        let points = inputs::count("radial points", input.points)?;
        let resolved = inputs::resolve(self.library, &input.cable_type)?;

        let profile = RadialProfileCalculator::new(&resolved.network).radial_profile(
            current,
            ambient,
            resolved.spec.conductor_area,
            points,
        );
        let peak_temperature = profile
            .temperatures
            .iter()
            .copied()
            .reduce(|a, b| if b > a { b } else { a })
            .unwrap_or(profile.conductor_temperature);

        Ok(RadialTemperatureReport {
            profile,
            current: input.current,
            ambient,
            peak_temperature,
        })
    }
}
