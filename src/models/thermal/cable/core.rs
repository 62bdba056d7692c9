//! Lumped thermal model of a single buried cable.
//!
//! Geometry and material constants build a [`ThermalNetwork`] once per
//! cable type. [`RatingCalculator`] and [`RadialProfileCalculator`] borrow
//! that network and answer per-request questions about it.

mod conductor_area;
mod error;
mod geometry;
mod materials;
mod network;
mod radial;
mod rating;

#[cfg(test)]
pub(crate) mod test_support;

pub use conductor_area::ConductorArea;
pub use error::CableError;
pub use geometry::CableGeometry;
pub use materials::{
    ConductorMaterial, ConductorProperties, LayerProperties, MaterialProperties, UnknownMaterial,
};
pub use network::{BURIAL_DEPTH_MM, ThermalNetwork};
pub use radial::{CableBoundaries, RadialProfile, RadialProfileCalculator};
pub use rating::{COPPER_TEMPERATURE_COEFFICIENT, RatingCalculator, RatingConfig, TransientSample};
