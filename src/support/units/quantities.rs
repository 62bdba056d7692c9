use std::marker::PhantomData;

use uom::{
    si::{Dimension, ISQ, Quantity, SI},
    typenum::{N1, N2, N3, P1, P3, Z0},
};

/// Thermal resistance per unit length, K·m/W in SI.
pub type LinearThermalResistance = Quantity<ISQ<N1, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Heat capacity per unit length, J/(m·K) in SI.
pub type LinearHeatCapacity = Quantity<ISQ<P1, P1, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Heat flow per unit length, W/m in SI.
pub type LinearPower = Quantity<ISQ<P1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Electrical resistance per unit length, Ω/m in SI.
pub type LinearResistance = Quantity<ISQ<P1, P1, N3, N2, Z0, Z0, Z0>, SI<f64>, f64>;

/// Electrical resistivity, Ω·m in SI.
pub type Resistivity = Quantity<ISQ<P3, P1, N3, N2, Z0, Z0, Z0>, SI<f64>, f64>;

/// Constructs a quantity directly from its value in SI base units.
///
/// The quantities above have no named units in [`uom`], so `new::<unit>()`
/// is unavailable for them.
pub trait FromSi {
    /// Returns the quantity whose SI value is `value`.
    fn from_si(value: f64) -> Self;
}

impl<D> FromSi for Quantity<D, SI<f64>, f64>
where
    D: Dimension + ?Sized,
{
    fn from_si(value: f64) -> Self {
        Quantity {
            dimension: PhantomData,
            units: PhantomData,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        electric_current::ampere,
        f64::{ElectricCurrent, TemperatureInterval},
        temperature_interval::kelvin as delta_kelvin,
    };

    #[test]
    fn losses_times_resistance_is_a_temperature_rise() {
        let losses = LinearPower::from_si(25.0);
        let r_total = LinearThermalResistance::from_si(0.9);

        let rise = TemperatureInterval::new::<delta_kelvin>(losses.value * r_total.value);
        assert_relative_eq!(rise.get::<delta_kelvin>(), 22.5, epsilon = 1e-12);
    }

    #[test]
    fn joule_heating_units() {
        let current = ElectricCurrent::new::<ampere>(400.0);
        let resistance = LinearResistance::from_si(3.4e-5);

        let losses = LinearPower::from_si(current.value.powi(2) * resistance.value);
        assert_relative_eq!(losses.value, 5.44, epsilon = 1e-12);
    }
}
