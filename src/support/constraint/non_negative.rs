use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Load currents and emergency durations carry this constraint: zero is a
/// valid (unloaded, instantaneous) operating point, negative values are not.
///
/// # Examples
///
/// ```
/// use cable_rating::support::constraint::NonNegative;
/// use uom::si::{electric_current::ampere, f64::ElectricCurrent};
///
/// let unloaded = NonNegative::new(ElectricCurrent::new::<ampere>(0.0)).unwrap();
/// assert_eq!(unloaded.into_inner().get::<ampere>(), 0.0);
///
/// assert!(NonNegative::new(ElectricCurrent::new::<ampere>(-5.0)).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a non-negative constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained {
            value: T::zero(),
            _marker: PhantomData,
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{electric_current::ampere, f64::ElectricCurrent, f64::Time, time::hour};

    #[test]
    fn currents() {
        let load = NonNegative::new(ElectricCurrent::new::<ampere>(400.0)).unwrap();
        assert_eq!(load.as_ref().get::<ampere>(), 400.0);

        let unloaded: Constrained<ElectricCurrent, NonNegative> = NonNegative::zero();
        assert_eq!(unloaded.into_inner().get::<ampere>(), 0.0);

        assert_eq!(
            NonNegative::new(ElectricCurrent::new::<ampere>(-1.0)).unwrap_err(),
            ConstraintError::Negative
        );
    }

    #[test]
    fn durations() {
        assert!(NonNegative::new(Time::new::<hour>(6.0)).is_ok());
        assert!(NonNegative::new(Time::new::<hour>(0.0)).is_ok());
        assert!(NonNegative::new(Time::new::<hour>(-0.5)).is_err());
        assert_eq!(
            NonNegative::new(Time::new::<hour>(f64::NAN)).unwrap_err(),
            ConstraintError::NotANumber
        );
    }
}
