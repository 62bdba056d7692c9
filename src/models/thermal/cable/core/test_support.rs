//! Reference cable used across the core tests: 1000 MCM copper, 15 kV XLPE.

use uom::si::{
    area::square_millimeter,
    electric_current::ampere,
    f64::{ElectricCurrent, Length, ThermodynamicTemperature, Time},
    length::millimeter,
    thermodynamic_temperature::degree_celsius,
    time::hour,
};

use crate::support::constraint::{Constrained, NonNegative};

use super::{CableGeometry, ConductorArea, ConductorMaterial, MaterialProperties, ThermalNetwork};

pub(crate) fn mm(value: f64) -> Length {
    Length::new::<millimeter>(value)
}

pub(crate) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

pub(crate) fn amps(value: f64) -> Constrained<ElectricCurrent, NonNegative> {
    NonNegative::new(ElectricCurrent::new::<ampere>(value)).expect("test currents are non-negative")
}

pub(crate) fn hours(value: f64) -> Constrained<Time, NonNegative> {
    NonNegative::new(Time::new::<hour>(value)).expect("test durations are non-negative")
}

pub(crate) fn reference_geometry() -> CableGeometry {
    CableGeometry::new(mm(25.4), mm(4.5), mm(2.0)).expect("reference geometry is valid")
}

pub(crate) fn reference_area() -> ConductorArea {
    ConductorArea::new::<square_millimeter>(506.7).expect("reference area is positive")
}

pub(crate) fn reference_network() -> ThermalNetwork {
    ThermalNetwork::new(
        reference_geometry(),
        MaterialProperties::new(ConductorMaterial::Copper),
    )
    .expect("reference network is valid")
}
