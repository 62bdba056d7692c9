use uom::si::f64::ThermodynamicTemperature;

use super::{CableGeometry, ConductorArea, MaterialProperties};

/// Everything the rating models need to know about one cable type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableSpec {
    pub geometry: CableGeometry,
    pub materials: MaterialProperties,
    pub conductor_area: ConductorArea,
    /// Maximum allowed conductor temperature.
    pub max_temperature: ThermodynamicTemperature,
}

/// Resolves cable type identifiers.
pub trait CableLookup {
    /// Returns the cable with identifier `cable_type`, if any.
    fn lookup(&self, cable_type: &str) -> Option<CableSpec>;
}

impl<T: CableLookup + ?Sized> CableLookup for &T {
    fn lookup(&self, cable_type: &str) -> Option<CableSpec> {
        (**self).lookup(cable_type)
    }
}
