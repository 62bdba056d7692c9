//! Lumped thermal network of a buried cable.
//!
//! Each layer is a cylindrical shell. A shell between radii `r_in` and
//! `r_out` with conductivity `k` has thermal resistance
//! `ln(r_out / r_in) / (2π k)` and heat capacity `π (r_out² − r_in²) ρ c`,
//! both per metre of cable.

use std::f64::consts::PI;

use uom::si::{
    f64::{Length, ThermalConductivity, Time},
    length::millimeter,
    time::second,
};

use crate::support::units::{FromSi, LinearHeatCapacity, LinearThermalResistance};

use super::{CableError, CableGeometry, MaterialProperties, materials::LayerProperties};

/// Assumed burial depth of the cable axis, in millimetres.
pub const BURIAL_DEPTH_MM: f64 = 1000.0;

/// Thermal resistances and capacitances per unit length of one cable type.
///
/// Built once from a [`CableGeometry`] and [`MaterialProperties`] and never
/// mutated; a change of either requires a new network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalNetwork {
    geometry: CableGeometry,
    materials: MaterialProperties,
    r_ci: LinearThermalResistance,
    r_ins: LinearThermalResistance,
    r_sheath: LinearThermalResistance,
    r_ext: LinearThermalResistance,
    r_total: LinearThermalResistance,
    c_conductor: LinearHeatCapacity,
    c_insulation: LinearHeatCapacity,
    c_sheath: LinearHeatCapacity,
}

impl ThermalNetwork {
    /// Builds the thermal network for a cable.
    ///
    /// # Errors
    ///
    /// Returns [`CableError::InvalidGeometry`] if the cable's outer radius
    /// reaches twice the burial depth (the soil resistance would not be
    /// positive), and [`CableError::InvalidInput`] if a material constant
    /// is not strictly positive and finite.
    pub fn new(geometry: CableGeometry, materials: MaterialProperties) -> Result<Self, CableError> {
        check_layer("insulation", &materials.insulation)?;
        check_layer("sheath", &materials.sheath)?;
        check_layer("soil", &materials.soil)?;
        check_positive("conductor density", materials.conductor.density.value)?;
        check_positive("conductor specific heat", materials.conductor.specific_heat.value)?;
        check_positive("conductor resistivity", materials.conductor.resistivity_20c.value)?;

        let r_c = geometry.conductor_radius();
        let r_i = geometry.insulation_outer_radius();
        let r_s = geometry.sheath_outer_radius();
        let burial_depth = Length::new::<millimeter>(BURIAL_DEPTH_MM);

        if burial_depth * 2.0 <= r_s {
            return Err(CableError::geometry(format!(
                "sheath outer radius {} mm must be below twice the burial depth",
                r_s.get::<millimeter>()
            )));
        }

        let r_ins = shell_resistance(r_c, r_i, materials.insulation.thermal_conductivity);
        let r_sheath = shell_resistance(r_i, r_s, materials.sheath.thermal_conductivity);
        let r_ext = shell_resistance(r_s, burial_depth * 2.0, materials.soil.thermal_conductivity);

        // Solid conductor: no gap between conductor and insulation.
        let r_ci = LinearThermalResistance::from_si(0.0);
        let r_total = LinearThermalResistance::from_si(
            r_ci.value + r_ins.value + r_sheath.value + r_ext.value,
        );

        let c_conductor = shell_capacitance(
            Length::new::<millimeter>(0.0),
            r_c,
            materials.conductor.density.value * materials.conductor.specific_heat.value,
        );
        let c_insulation = layer_capacitance(r_c, r_i, &materials.insulation);
        let c_sheath = layer_capacitance(r_i, r_s, &materials.sheath);

        Ok(Self {
            geometry,
            materials,
            r_ci,
            r_ins,
            r_sheath,
            r_ext,
            r_total,
            c_conductor,
            c_insulation,
            c_sheath,
        })
    }

    #[must_use]
    pub fn geometry(&self) -> &CableGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn materials(&self) -> &MaterialProperties {
        &self.materials
    }

    /// Conductor-to-insulation resistance, zero for a solid conductor.
    #[must_use]
    pub fn r_ci(&self) -> LinearThermalResistance {
        self.r_ci
    }

    /// Insulation shell resistance.
    #[must_use]
    pub fn r_ins(&self) -> LinearThermalResistance {
        self.r_ins
    }

    /// Sheath shell resistance.
    #[must_use]
    pub fn r_sheath(&self) -> LinearThermalResistance {
        self.r_sheath
    }

    /// Sheath-to-ambient resistance through the soil.
    #[must_use]
    pub fn r_ext(&self) -> LinearThermalResistance {
        self.r_ext
    }

    /// Conductor-to-ambient resistance, the sum of all series resistances.
    #[must_use]
    pub fn r_total(&self) -> LinearThermalResistance {
        self.r_total
    }

    #[must_use]
    pub fn c_conductor(&self) -> LinearHeatCapacity {
        self.c_conductor
    }

    #[must_use]
    pub fn c_insulation(&self) -> LinearHeatCapacity {
        self.c_insulation
    }

    #[must_use]
    pub fn c_sheath(&self) -> LinearHeatCapacity {
        self.c_sheath
    }

    /// Heat capacity of the whole cable (soil excluded).
    #[must_use]
    pub fn total_capacitance(&self) -> LinearHeatCapacity {
        LinearHeatCapacity::from_si(
            self.c_conductor.value + self.c_insulation.value + self.c_sheath.value,
        )
    }

    /// Single lumped thermal time constant, `τ = R_total · C_total`.
    #[must_use]
    pub fn time_constant(&self) -> Time {
        Time::new::<second>(self.r_total.value * self.total_capacitance().value)
    }
}

fn shell_resistance(
    inner: Length,
    outer: Length,
    conductivity: ThermalConductivity,
) -> LinearThermalResistance {
    LinearThermalResistance::from_si((outer / inner).value.ln() / (2.0 * PI * conductivity.value))
}

fn shell_capacitance(inner: Length, outer: Length, volumetric_heat: f64) -> LinearHeatCapacity {
    let annulus = PI * (outer.value.powi(2) - inner.value.powi(2));
    LinearHeatCapacity::from_si(annulus * volumetric_heat)
}

fn layer_capacitance(inner: Length, outer: Length, layer: &LayerProperties) -> LinearHeatCapacity {
    shell_capacitance(inner, outer, layer.density.value * layer.specific_heat.value)
}

fn check_layer(name: &str, layer: &LayerProperties) -> Result<(), CableError> {
    check_positive(
        &format!("{name} thermal conductivity"),
        layer.thermal_conductivity.value,
    )?;
    check_positive(&format!("{name} density"), layer.density.value)?;
    check_positive(&format!("{name} specific heat"), layer.specific_heat.value)
}

fn check_positive(name: &str, value: f64) -> Result<(), CableError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CableError::input(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}
