use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Conductor areas, diameters and layer thicknesses carry this constraint;
/// a zero value would put a zero in a denominator or a log argument.
///
/// # Examples
///
/// ```
/// use cable_rating::support::constraint::StrictlyPositive;
/// use uom::si::{area::square_millimeter, f64::Area};
///
/// let area = StrictlyPositive::new(Area::new::<square_millimeter>(506.7)).unwrap();
/// assert!((area.into_inner().get::<square_millimeter>() - 506.7).abs() < 1e-9);
///
/// assert!(StrictlyPositive::new(Area::new::<square_millimeter>(0.0)).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::millimeter};

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert_eq!(StrictlyPositive::new(0.0).unwrap_err(), ConstraintError::Zero);
        assert_eq!(
            StrictlyPositive::new(-5.0).unwrap_err(),
            ConstraintError::Negative
        );
        assert!(StrictlyPositive::new(f64::NAN).is_err());
    }

    #[test]
    fn lengths() {
        assert!(StrictlyPositive::new(Length::new::<millimeter>(4.5)).is_ok());
        assert!(StrictlyPositive::new(Length::new::<millimeter>(0.0)).is_err());
        assert!(StrictlyPositive::new(Length::new::<millimeter>(-2.0)).is_err());
    }
}
