use uom::si::{
    f64::{Length, ThermodynamicTemperature},
    length::millimeter,
    thermodynamic_temperature::degree_celsius,
};

use crate::models::thermal::cable::{
    CableGeometry, CableSpec, ConductorArea, ConductorMaterial, MaterialProperties,
};

use super::{RowError, sizing};

/// A cable entry in a [`super::CableLibrary`].
#[derive(Debug, Clone, PartialEq)]
pub struct CableRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cable_size: String,
    pub voltage: String,
    pub insulation_type: String,
    pub conductor_area: ConductorArea,
    pub max_temperature: ThermodynamicTemperature,
    pub geometry: CableGeometry,
    pub materials: MaterialProperties,
}

/// The catalogue view of a [`CableRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct CableSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub voltage: String,
    pub conductor_material: ConductorMaterial,
    pub insulation_type: String,
    pub max_temperature: ThermodynamicTemperature,
}

/// Raw catalogue designations for one cable.
#[derive(Debug, Clone, Copy)]
pub(super) struct Designation<'a> {
    pub size: &'a str,
    pub voltage: &'a str,
    pub material: &'a str,
    pub insulation: &'a str,
}

/// Explicit dimensions in millimetres and degrees Celsius.
#[derive(Debug, Clone, Copy)]
pub(super) struct Dimensions {
    pub area_mm2: f64,
    pub conductor_diameter_mm: f64,
    pub insulation_thickness_mm: f64,
    pub sheath_thickness_mm: f64,
    pub max_temperature_c: f64,
}

impl Dimensions {
    /// Estimates dimensions from catalogue designations.
    pub(super) fn estimate(designation: &Designation<'_>) -> Result<Self, String> {
        let area_mm2 = sizing::conductor_area_mm2(designation.size)?;
        Ok(Self {
            area_mm2,
            conductor_diameter_mm: sizing::conductor_diameter_mm(area_mm2),
            insulation_thickness_mm: sizing::insulation_thickness_mm(designation.voltage),
            sheath_thickness_mm: sizing::SHEATH_THICKNESS_MM,
            max_temperature_c: sizing::temperature_limit_c(designation.insulation),
        })
    }
}

impl CableRecord {
    /// Builds a record from designations and dimensions.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if the dimensions are not a
    /// physically valid cable.
    pub(super) fn build(
        designation: &Designation<'_>,
        dimensions: &Dimensions,
    ) -> Result<Self, String> {
        let Designation {
            size,
            voltage,
            material,
            insulation,
        } = *designation;

        let geometry = CableGeometry::new(
            Length::new::<millimeter>(dimensions.conductor_diameter_mm),
            Length::new::<millimeter>(dimensions.insulation_thickness_mm),
            Length::new::<millimeter>(dimensions.sheath_thickness_mm),
        )
        .map_err(|err| err.to_string())?;

        let conductor_area = ConductorArea::new::<uom::si::area::square_millimeter>(
            dimensions.area_mm2,
        )
        .map_err(|err| format!("conductor area: {err}"))?;

        let materials = MaterialProperties::from_tag(material);

        Ok(Self {
            id: sizing::cable_id(size, voltage, material, insulation),
            name: format!("{size} {voltage} {material} {insulation}"),
            description: format!("{size} {material} conductor, {insulation} insulation, {voltage}"),
            cable_size: size.to_owned(),
            voltage: voltage.to_owned(),
            insulation_type: insulation.to_owned(),
            conductor_area,
            max_temperature: ThermodynamicTemperature::new::<degree_celsius>(
                dimensions.max_temperature_c,
            ),
            geometry,
            materials,
        })
    }

    /// Builds a row's record, tagging failures with the row index.
    pub(super) fn from_row(row: usize, designation: &Designation<'_>) -> Result<Self, RowError> {
        Dimensions::estimate(designation)
            .and_then(|dimensions| Self::build(designation, &dimensions))
            .map_err(|context| RowError::Malformed { row, context })
    }

    #[must_use]
    pub fn summary(&self) -> CableSummary {
        CableSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            voltage: self.voltage.clone(),
            conductor_material: self.materials.conductor_material,
            insulation_type: self.insulation_type.clone(),
            max_temperature: self.max_temperature,
        }
    }

    /// The thermal inputs needed to rate this cable.
    #[must_use]
    pub fn spec(&self) -> CableSpec {
        CableSpec {
            geometry: self.geometry,
            materials: self.materials,
            conductor_area: self.conductor_area,
            max_temperature: self.max_temperature,
        }
    }
}
