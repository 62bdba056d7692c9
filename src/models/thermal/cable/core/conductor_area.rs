use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::f64::Area;

/// Cross-sectional area of a conductor.
///
/// The value must be strictly positive; it divides the resistivity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ConductorArea(Constrained<Area, StrictlyPositive>);

impl ConductorArea {
    /// Create a [`ConductorArea`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::area::Unit + uom::Conversion<f64, T = f64>,
    {
        Self::from_quantity(Area::new::<U>(value))
    }

    /// Create a [`ConductorArea`] from an area quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: Area) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }
}

impl Deref for ConductorArea {
    type Target = Area;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
