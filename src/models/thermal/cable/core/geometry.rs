use uom::si::{f64::Length, length::millimeter};

use super::CableError;

/// Radial build-up of a single-core cable.
///
/// Constructed from the conductor diameter and the insulation and sheath
/// thicknesses. The three boundary radii are derived once and satisfy
/// `0 < conductor < insulation outer < sheath outer`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableGeometry {
    conductor_diameter: Length,
    insulation_thickness: Length,
    sheath_thickness: Length,
    conductor_radius: Length,
    insulation_outer_radius: Length,
    sheath_outer_radius: Length,
}

impl CableGeometry {
    /// Creates a cable geometry from layer dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`CableError::InvalidGeometry`] if any dimension is not a
    /// strictly positive finite length, or if the derived radii do not
    /// strictly increase outward.
    pub fn new(
        conductor_diameter: Length,
        insulation_thickness: Length,
        sheath_thickness: Length,
    ) -> Result<Self, CableError> {
        for (name, value) in [
            ("conductor diameter", conductor_diameter),
            ("insulation thickness", insulation_thickness),
            ("sheath thickness", sheath_thickness),
        ] {
            if !(value.value.is_finite() && value.value > 0.0) {
                return Err(CableError::geometry(format!(
                    "{name} must be a positive finite length, got {} mm",
                    value.get::<millimeter>()
                )));
            }
        }

        let conductor_radius = conductor_diameter / 2.0;
        let insulation_outer_radius = conductor_radius + insulation_thickness;
        let sheath_outer_radius = insulation_outer_radius + sheath_thickness;

        // A layer thinner than the rounding error of its inner radius vanishes.
        if !(conductor_radius < insulation_outer_radius
            && insulation_outer_radius < sheath_outer_radius)
        {
            return Err(CableError::geometry(format!(
                "radii must increase outward, got {} mm, {} mm, {} mm",
                conductor_radius.get::<millimeter>(),
                insulation_outer_radius.get::<millimeter>(),
                sheath_outer_radius.get::<millimeter>(),
            )));
        }

        Ok(Self {
            conductor_diameter,
            insulation_thickness,
            sheath_thickness,
            conductor_radius,
            insulation_outer_radius,
            sheath_outer_radius,
        })
    }

    #[must_use]
    pub fn conductor_diameter(&self) -> Length {
        self.conductor_diameter
    }

    #[must_use]
    pub fn insulation_thickness(&self) -> Length {
        self.insulation_thickness
    }

    #[must_use]
    pub fn sheath_thickness(&self) -> Length {
        self.sheath_thickness
    }

    /// Radius of the conductor, half its diameter.
    #[must_use]
    pub fn conductor_radius(&self) -> Length {
        self.conductor_radius
    }

    /// Radius at the outer surface of the insulation.
    #[must_use]
    pub fn insulation_outer_radius(&self) -> Length {
        self.insulation_outer_radius
    }

    /// Radius at the outer surface of the sheath, i.e. the cable's outer radius.
    #[must_use]
    pub fn sheath_outer_radius(&self) -> Length {
        self.sheath_outer_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn mm(value: f64) -> Length {
        Length::new::<millimeter>(value)
    }

    #[test]
    fn derives_increasing_radii() {
        let geometry = CableGeometry::new(mm(25.4), mm(4.5), mm(2.0)).unwrap();

        assert_relative_eq!(geometry.conductor_radius().get::<millimeter>(), 12.7, epsilon = 1e-12);
        assert_relative_eq!(
            geometry.insulation_outer_radius().get::<millimeter>(),
            17.2,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            geometry.sheath_outer_radius().get::<millimeter>(),
            19.2,
            epsilon = 1e-12
        );
        assert!(geometry.conductor_radius() < geometry.insulation_outer_radius());
        assert!(geometry.insulation_outer_radius() < geometry.sheath_outer_radius());
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(matches!(
            CableGeometry::new(mm(0.0), mm(4.5), mm(2.0)),
            Err(CableError::InvalidGeometry { .. })
        ));
        assert!(matches!(
            CableGeometry::new(mm(25.4), mm(-1.0), mm(2.0)),
            Err(CableError::InvalidGeometry { .. })
        ));
        assert!(matches!(
            CableGeometry::new(mm(25.4), mm(4.5), mm(0.0)),
            Err(CableError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn rejects_layers_lost_to_rounding() {
        assert!(matches!(
            CableGeometry::new(mm(25.4), mm(1e-16), mm(2.0)),
            Err(CableError::InvalidGeometry { .. })
        ));
        assert!(matches!(
            CableGeometry::new(mm(25.4), mm(4.5), mm(1e-16)),
            Err(CableError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_dimensions() {
        assert!(CableGeometry::new(mm(f64::NAN), mm(4.5), mm(2.0)).is_err());
        assert!(CableGeometry::new(mm(25.4), mm(f64::INFINITY), mm(2.0)).is_err());
    }
}
