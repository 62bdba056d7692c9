use twine_core::Model;
use uom::si::f64::{ElectricCurrent, TemperatureInterval, ThermodynamicTemperature};

use crate::support::units::{LinearPower, TemperatureDifference};

use super::{CableLookup, RatingCalculator, RatingError, inputs};

/// Steady-state request for one cable type.
#[derive(Debug, Clone, PartialEq)]
pub struct SteadyStateRequest {
    pub cable_type: String,
    pub current: ElectricCurrent,
    pub ambient: ThermodynamicTemperature,
}

impl SteadyStateRequest {
    /// Creates a request at the default 20 °C ambient.
    #[must_use]
    pub fn new(cable_type: impl Into<String>, current: ElectricCurrent) -> Self {
        Self {
            cable_type: cable_type.into(),
            current,
            ambient: inputs::default_ambient(),
        }
    }

    #[must_use]
    pub fn with_ambient(mut self, ambient: ThermodynamicTemperature) -> Self {
        self.ambient = ambient;
        self
    }
}

/// Equilibrium conditions at a constant current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyStateReport {
    pub conductor_temperature: ThermodynamicTemperature,
    pub temperature_rise: TemperatureInterval,
    /// Joule losses at the conductor temperature.
    pub conductor_losses: LinearPower,
    pub current: ElectricCurrent,
    pub ambient: ThermodynamicTemperature,
}

/// Steady-state conductor temperature for a catalogued cable.
#[derive(Debug, Clone, Copy)]
pub struct SteadyState<'a, L: ?Sized> {
    library: &'a L,
}

impl<'a, L: CableLookup + ?Sized> SteadyState<'a, L> {
    #[must_use]
    pub fn new(library: &'a L) -> Self {
        Self { library }
    }
}

impl<L: CableLookup + ?Sized> Model for SteadyState<'_, L> {
    type Input = SteadyStateRequest;
    type Output = SteadyStateReport;
    type Error = RatingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let current = inputs::current("current", input.current)?;
        let ambient = inputs::temperature("ambient temperature", input.ambient)?;
        let resolved = inputs::resolve(self.library, &input.cable_type)?;

        let calculator = RatingCalculator::new(&resolved.network);
        let area = resolved.spec.conductor_area;
        let conductor_temperature = calculator.steady_state_temperature(current, ambient, area);

        Ok(SteadyStateReport {
            conductor_temperature,
            temperature_rise: conductor_temperature.minus(ambient),
            conductor_losses: calculator.conductor_losses(current, conductor_temperature, area),
            current: input.current,
            ambient,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        electric_current::ampere, temperature_interval::kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::{library::CableLibrary, models::thermal::cable::CableError};

    const REFERENCE: &str = "1000_MCM_15_KV_CU_XLPE";

    fn amps(value: f64) -> ElectricCurrent {
        ElectricCurrent::new::<ampere>(value)
    }

    #[test]
    fn reports_reference_cable() {
        let library = CableLibrary::defaults();
        let report = SteadyState::new(&library)
            .call(&SteadyStateRequest::new(REFERENCE, amps(400.0)))
            .unwrap();

        assert_relative_eq!(
            report.conductor_temperature.get::<degree_celsius>(),
            25.00576,
            epsilon = 1e-4
        );
        assert_relative_eq!(report.temperature_rise.get::<kelvin>(), 5.00576, epsilon = 1e-4);
        assert_relative_eq!(report.current.get::<ampere>(), 400.0);

        // Rise is losses times the total thermal resistance.
        assert_relative_eq!(
            report.conductor_losses.value * 0.903883,
            report.temperature_rise.get::<kelvin>(),
            max_relative = 1e-4
        );
    }

    #[test]
    fn unloaded_cable_sits_at_ambient() {
        let library = CableLibrary::defaults();
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(15.0);
        let report = SteadyState::new(&library)
            .call(&SteadyStateRequest::new(REFERENCE, amps(0.0)).with_ambient(ambient))
            .unwrap();

        assert_eq!(report.conductor_temperature, ambient);
        assert_relative_eq!(report.conductor_losses.value, 0.0);
    }

    #[test]
    fn rejects_bad_requests() {
        let library = CableLibrary::defaults();
        let model = SteadyState::new(&library);

        assert!(matches!(
            model.call(&SteadyStateRequest::new("", amps(100.0))),
            Err(RatingError::Cable(CableError::InvalidInput { .. }))
        ));
        assert!(matches!(
            model.call(&SteadyStateRequest::new(REFERENCE, amps(-1.0))),
            Err(RatingError::Cable(CableError::InvalidInput { .. }))
        ));
        assert!(matches!(
            model.call(&SteadyStateRequest::new(REFERENCE, amps(f64::INFINITY))),
            Err(RatingError::Cable(CableError::InvalidInput { .. }))
        ));
        assert_eq!(
            model.call(&SteadyStateRequest::new("missing", amps(100.0))),
            Err(RatingError::CableTypeNotFound {
                cable_type: "missing".to_owned()
            })
        );
    }
}
