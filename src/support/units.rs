//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, current, length).
//! This module provides extensions that cable modeling needs but [`uom`] doesn't include.
//!
//! ## Per-unit-length quantities
//!
//! Cable ratings are computed per metre of cable, so thermal resistances,
//! heat capacities, losses and conductor resistances are all "per length".
//! [`uom`] has no named quantities for these, so they are defined here
//! (see [`LinearThermalResistance`] and friends) and built from SI values
//! with [`FromSi`]:
//!
//! ```
//! use cable_rating::support::units::{FromSi, LinearThermalResistance};
//!
//! let r_ins = LinearThermalResistance::from_si(0.12);
//! assert_eq!(r_ins.value, 0.12); // K·m/W
//! ```
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use cable_rating::support::units::TemperatureDifference;
//!
//! let conductor = ThermodynamicTemperature::new::<degree_celsius>(65.0);
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let rise = conductor.minus(ambient);
//! // rise is a TemperatureInterval, not a ThermodynamicTemperature
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{
    FromSi, LinearHeatCapacity, LinearPower, LinearResistance, LinearThermalResistance,
    Resistivity,
};
pub use temperature_difference::TemperatureDifference;
