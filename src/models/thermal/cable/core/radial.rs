//! Temperature as a function of radius at one operating point.
//!
//! All conductor losses cross every shell outside the conductor, so the
//! temperature drop across a shell is `W · ln(r / r_in) / (2π k)` and the
//! profile is continuous at each boundary.

use std::f64::consts::PI;

use uom::si::{
    f64::{ElectricCurrent, Length, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::{Constrained, NonNegative};

use super::{ConductorArea, RatingCalculator, ThermalNetwork};

/// Outer profile radius as a multiple of the sheath outer radius.
const PROFILE_EXTENT: f64 = 3.0;

/// Boundary radii of the cable layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableBoundaries {
    pub conductor_radius: Length,
    pub insulation_radius: Length,
    pub sheath_radius: Length,
}

/// Radial temperature profile from the conductor surface into the soil.
///
/// `radii` and `temperatures` are parallel and ordered outward.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialProfile {
    pub radii: Vec<Length>,
    pub temperatures: Vec<ThermodynamicTemperature>,
    pub boundaries: CableBoundaries,
    pub conductor_temperature: ThermodynamicTemperature,
}

impl RadialProfile {
    /// Iterates `(radius, temperature)` pairs outward.
    pub fn points(&self) -> impl Iterator<Item = (Length, ThermodynamicTemperature)> + '_ {
        self.radii.iter().copied().zip(self.temperatures.iter().copied())
    }
}

/// Radial temperature calculations for one cable's [`ThermalNetwork`].
#[derive(Debug, Clone, Copy)]
pub struct RadialProfileCalculator<'a> {
    rating: RatingCalculator<'a>,
}

impl<'a> RadialProfileCalculator<'a> {
    #[must_use]
    pub fn new(network: &'a ThermalNetwork) -> Self {
        Self::with_rating(RatingCalculator::new(network))
    }

    /// Uses an existing rating calculator, and its configuration, for the
    /// conductor temperature.
    #[must_use]
    pub fn with_rating(rating: RatingCalculator<'a>) -> Self {
        Self { rating }
    }

    /// Steady-state temperature at `points` radii evenly spaced from the
    /// conductor radius to three times the sheath outer radius.
    #[must_use]
    pub fn radial_profile(
        &self,
        current: Constrained<ElectricCurrent, NonNegative>,
        ambient: ThermodynamicTemperature,
        area: ConductorArea,
        points: usize,
    ) -> RadialProfile {
        let geometry = self.rating.network().geometry();
        let conductor_temperature = self.rating.steady_state_temperature(current, ambient, area);
        let losses = self
            .rating
            .conductor_losses(current, conductor_temperature, area)
            .value;
        let conductor_c = conductor_temperature.get::<degree_celsius>();

        let start = geometry.conductor_radius();
        let end = geometry.sheath_outer_radius() * PROFILE_EXTENT;
        let last = points.saturating_sub(1).max(1) as f64;
        let radii: Vec<Length> = (0..points)
            .map(|i| start + (end - start) * (i as f64 / last))
            .collect();

        let temperatures = radii
            .iter()
            .map(|&r| {
                ThermodynamicTemperature::new::<degree_celsius>(
                    self.temperature_at(r, conductor_c, losses),
                )
            })
            .collect();

        RadialProfile {
            radii,
            temperatures,
            boundaries: CableBoundaries {
                conductor_radius: geometry.conductor_radius(),
                insulation_radius: geometry.insulation_outer_radius(),
                sheath_radius: geometry.sheath_outer_radius(),
            },
            conductor_temperature,
        }
    }

    /// Temperature in °C at `radius` given the conductor temperature and losses in W/m.
    fn temperature_at(&self, radius: Length, conductor_c: f64, losses: f64) -> f64 {
        let geometry = self.rating.network().geometry();
        if radius <= geometry.conductor_radius() {
            conductor_c
        } else if radius <= geometry.insulation_outer_radius() {
            self.in_insulation(radius, conductor_c, losses)
        } else if radius <= geometry.sheath_outer_radius() {
            self.in_sheath(radius, conductor_c, losses)
        } else {
            self.in_soil(radius, conductor_c, losses)
        }
    }

    fn in_insulation(&self, radius: Length, conductor_c: f64, losses: f64) -> f64 {
        let network = self.rating.network();
        let k = network.materials().insulation.thermal_conductivity.value;
        let r_c = network.geometry().conductor_radius();
        conductor_c - losses * shell(radius, r_c, k)
    }

    fn in_sheath(&self, radius: Length, conductor_c: f64, losses: f64) -> f64 {
        let network = self.rating.network();
        let k = network.materials().sheath.thermal_conductivity.value;
        let r_i = network.geometry().insulation_outer_radius();
        conductor_c - losses * (network.r_ins().value + shell(radius, r_i, k))
    }

    fn in_soil(&self, radius: Length, conductor_c: f64, losses: f64) -> f64 {
        let network = self.rating.network();
        let k = network.materials().soil.thermal_conductivity.value;
        let r_s = network.geometry().sheath_outer_radius();
        conductor_c
            - losses * (network.r_ins().value + network.r_sheath().value + shell(radius, r_s, k))
    }
}

/// Resistance of a shell from `inner` out to `radius`, K·m/W.
fn shell(radius: Length, inner: Length, conductivity: f64) -> f64 {
    (radius / inner).value.ln() / (2.0 * PI * conductivity)
}
