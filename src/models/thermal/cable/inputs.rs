//! Request validation shared by the rating models.

use uom::si::{
    f64::{ElectricCurrent, ThermodynamicTemperature, Time},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::{Constrained, NonNegative};

use super::{CableError, CableLookup, CableSpec, RatingError, ThermalNetwork};

/// Ambient soil temperature used when a request does not give one.
pub(super) fn default_ambient() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(20.0)
}

/// A resolved cable and its thermal network.
pub(super) struct Resolved {
    pub spec: CableSpec,
    pub network: ThermalNetwork,
}

pub(super) fn resolve<L: CableLookup + ?Sized>(
    library: &L,
    cable_type: &str,
) -> Result<Resolved, RatingError> {
    if cable_type.trim().is_empty() {
        return Err(CableError::input("cable type is required").into());
    }
    let spec = library
        .lookup(cable_type)
        .ok_or_else(|| RatingError::CableTypeNotFound {
            cable_type: cable_type.to_owned(),
        })?;
    let network = ThermalNetwork::new(spec.geometry, spec.materials)?;
    Ok(Resolved { spec, network })
}

pub(super) fn current(
    field: &'static str,
    value: ElectricCurrent,
) -> Result<Constrained<ElectricCurrent, NonNegative>, CableError> {
    if !value.value.is_finite() {
        return Err(CableError::input(format!("{field} must be finite")));
    }
    NonNegative::new(value).map_err(|err| CableError::constraint(field, err))
}

pub(super) fn duration(
    field: &'static str,
    value: Time,
) -> Result<Constrained<Time, NonNegative>, CableError> {
    if !value.value.is_finite() {
        return Err(CableError::input(format!("{field} must be finite")));
    }
    NonNegative::new(value).map_err(|err| CableError::constraint(field, err))
}

pub(super) fn temperature(
    field: &'static str,
    value: ThermodynamicTemperature,
) -> Result<ThermodynamicTemperature, CableError> {
    if value.value.is_finite() {
        Ok(value)
    } else {
        Err(CableError::input(format!("{field} must be finite")))
    }
}

pub(super) fn count(field: &'static str, value: usize) -> Result<usize, CableError> {
    if value == 0 {
        Err(CableError::input(format!("{field} must be at least 1")))
    } else {
        Ok(value)
    }
}
