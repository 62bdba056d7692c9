//! Underground power cable rating models.
//!
//! This module provides [`twine_core::Model`] implementations that rate a
//! catalogued cable type under IEC 60853-2 style assumptions: a single cable
//! buried in uniform soil, with a lumped thermal network from conductor to
//! ambient.
//!
//! Each model borrows a [`CableLookup`], resolves the requested cable type,
//! builds its [`ThermalNetwork`], and delegates to the calculators in the
//! internal [`core`] module:
//!
//! - [`SteadyState`]: equilibrium conductor temperature at a constant current.
//! - [`EmergencyRating`]: largest short-duration current within a temperature limit.
//! - [`TransientAnalysis`]: conductor temperature trajectory during an emergency.
//! - [`RadialTemperature`]: temperature from the conductor out into the soil.

pub(crate) mod core;

mod emergency_rating;
mod error;
mod inputs;
mod lookup;
mod radial_temperature;
mod steady_state;
mod transient_analysis;

pub use self::core::{
    BURIAL_DEPTH_MM, COPPER_TEMPERATURE_COEFFICIENT, CableBoundaries, CableError, CableGeometry,
    ConductorArea, ConductorMaterial, ConductorProperties, LayerProperties, MaterialProperties,
    RadialProfile, RadialProfileCalculator, RatingCalculator, RatingConfig, ThermalNetwork,
    TransientSample, UnknownMaterial,
};
pub use emergency_rating::{
    EmergencyRating, EmergencyRatingReport, EmergencyRatingRequest, IEC_SCALING_LIMIT,
};
pub use error::RatingError;
pub use lookup::{CableLookup, CableSpec};
pub use radial_temperature::{
    DEFAULT_RADIAL_POINTS, RadialTemperature, RadialTemperatureReport, RadialTemperatureRequest,
};
pub use steady_state::{SteadyState, SteadyStateReport, SteadyStateRequest};
pub use transient_analysis::{
    DEFAULT_TRANSIENT_SAMPLES, TransientAnalysis, TransientReport, TransientRequest,
};
