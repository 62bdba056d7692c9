//! Thermal and electrical constants for the cable layers and surrounding soil.
//!
//! Conductor constants depend on the conductor metal. Insulation (XLPE),
//! sheath (PE) and soil constants are fixed configuration data in this model.

use std::{fmt, str::FromStr};

use uom::si::{
    f64::{MassDensity, SpecificHeatCapacity, ThermalConductivity},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::units::{FromSi, Resistivity};

/// Conductor metal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConductorMaterial {
    Copper,
    Aluminum,
}

impl ConductorMaterial {
    /// Resolves a conductor material from a free-form tag such as `"CU"`.
    ///
    /// Copper is recognized as `CU` or `copper`, aluminum as `AL`, `aluminum`
    /// or `aluminium`, all case-insensitively. Any other tag resolves to
    /// [`ConductorMaterial::Aluminum`], which is the documented default for
    /// unrecognized conductor tags.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_: UnknownMaterial| {
            tracing::warn!(tag, "unrecognized conductor material, using aluminum constants");
            Self::Aluminum
        })
    }

    /// The short tag used in cable identifiers.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Copper => "CU",
            Self::Aluminum => "AL",
        }
    }
}

impl fmt::Display for ConductorMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a conductor tag names neither copper nor aluminum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown conductor material: {0:?}")]
pub struct UnknownMaterial(pub String);

impl FromStr for ConductorMaterial {
    type Err = UnknownMaterial;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "cu" | "copper" => Ok(Self::Copper),
            "al" | "aluminum" | "aluminium" => Ok(Self::Aluminum),
            _ => Err(UnknownMaterial(tag.to_owned())),
        }
    }
}

/// Constants of the conductor metal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConductorProperties {
    /// Electrical resistivity at 20 °C.
    pub resistivity_20c: Resistivity,
    pub thermal_conductivity: ThermalConductivity,
    pub density: MassDensity,
    pub specific_heat: SpecificHeatCapacity,
}

/// Constants of a non-conducting layer (insulation, sheath, or soil).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerProperties {
    pub thermal_conductivity: ThermalConductivity,
    pub density: MassDensity,
    pub specific_heat: SpecificHeatCapacity,
}

impl LayerProperties {
    fn new(conductivity: f64, density: f64, specific_heat: f64) -> Self {
        Self {
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(conductivity),
            density: MassDensity::new::<kilogram_per_cubic_meter>(density),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(specific_heat),
        }
    }
}

/// Material constants for one cable type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProperties {
    pub conductor_material: ConductorMaterial,
    pub conductor: ConductorProperties,
    /// XLPE.
    pub insulation: LayerProperties,
    /// PE.
    pub sheath: LayerProperties,
    pub soil: LayerProperties,
}

impl MaterialProperties {
    /// Returns the baseline constants for a conductor material.
    #[must_use]
    pub fn new(conductor_material: ConductorMaterial) -> Self {
        // Resistivity in Ω·mm²/m; 1 Ω·mm²/m = 1e-6 Ω·m.
        let (resistivity, conductivity, density, specific_heat) = match conductor_material {
            ConductorMaterial::Copper => (0.0172, 400.0, 8960.0, 385.0),
            ConductorMaterial::Aluminum => (0.0282, 237.0, 2700.0, 897.0),
        };

        Self {
            conductor_material,
            conductor: ConductorProperties {
                resistivity_20c: Resistivity::from_si(resistivity * 1e-6),
                thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
                    conductivity,
                ),
                density: MassDensity::new::<kilogram_per_cubic_meter>(density),
                specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
                    specific_heat,
                ),
            },
            insulation: LayerProperties::new(0.4, 920.0, 2300.0),
            sheath: LayerProperties::new(0.4, 950.0, 2300.0),
            soil: LayerProperties::new(1.0, 1800.0, 1800.0),
        }
    }

    /// Returns the baseline constants for a free-form conductor tag.
    ///
    /// See [`ConductorMaterial::from_tag`] for how tags resolve.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        Self::new(ConductorMaterial::from_tag(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn parses_tags() {
        assert_eq!("CU".parse(), Ok(ConductorMaterial::Copper));
        assert_eq!(" copper ".parse(), Ok(ConductorMaterial::Copper));
        assert_eq!("Al".parse(), Ok(ConductorMaterial::Aluminum));
        assert_eq!("aluminium".parse(), Ok(ConductorMaterial::Aluminum));
        assert!("steel".parse::<ConductorMaterial>().is_err());
    }

    #[test]
    fn unknown_tag_defaults_to_aluminum() {
        assert_eq!(ConductorMaterial::from_tag("steel"), ConductorMaterial::Aluminum);
        assert_eq!(
            MaterialProperties::from_tag(""),
            MaterialProperties::new(ConductorMaterial::Aluminum)
        );
    }

    #[test]
    fn conductor_constants_follow_material() {
        let copper = MaterialProperties::new(ConductorMaterial::Copper);
        let aluminum = MaterialProperties::new(ConductorMaterial::Aluminum);

        assert_relative_eq!(copper.conductor.resistivity_20c.value, 1.72e-8, epsilon = 1e-20);
        assert_relative_eq!(aluminum.conductor.resistivity_20c.value, 2.82e-8, epsilon = 1e-20);
        assert!(copper.conductor.density > aluminum.conductor.density);
    }

    #[test]
    fn layer_constants_do_not_depend_on_conductor() {
        let copper = MaterialProperties::new(ConductorMaterial::Copper);
        let aluminum = MaterialProperties::new(ConductorMaterial::Aluminum);

        assert_eq!(copper.insulation, aluminum.insulation);
        assert_eq!(copper.sheath, aluminum.sheath);
        assert_eq!(copper.soil, aluminum.soil);
        assert_relative_eq!(
            copper.soil.thermal_conductivity.get::<watt_per_meter_kelvin>(),
            1.0
        );
    }
}
