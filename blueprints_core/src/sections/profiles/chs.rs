//! Circular hollow section (CHS)
//!
//! A single full [`PartialRing`] with centerline radius (D − t) / 2.

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_name, ensure_positive, BlueprintsError, BlueprintsResult};
use crate::geometry::PartialRing;
use crate::materials::SteelMaterial;
use crate::sections::{SteelCrossSection, SteelElement};

use super::standard::StandardChs;
use super::{check_corrosion, corroded, Profile};

/// Circular hollow section centred on the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChsProfile {
    name: String,
    diameter: f64,
    thickness: f64,
    material: SteelMaterial,
    corrosion: f64,
}

impl ChsProfile {
    /// CHS from its outer diameter and wall thickness (mm)
    pub fn new(name: impl Into<String>, diameter: f64, thickness: f64, material: SteelMaterial) -> BlueprintsResult<Self> {
        let name = name.into();
        ensure_name("name", &name)?;
        ensure_positive("diameter", "Diameter", diameter)?;
        ensure_positive("thickness", "Thickness", thickness)?;
        if thickness > diameter / 2.0 {
            return Err(BlueprintsError::invalid_input(
                "thickness",
                thickness.to_string(),
                format!("Wall thickness must not exceed half the diameter ({})", diameter / 2.0),
            ));
        }
        Ok(ChsProfile {
            name,
            diameter,
            thickness,
            material,
            corrosion: 0.0,
        })
    }

    /// CHS with the dimensions of a standard profile, with `corrosion` (mm) removed from each face
    pub fn from_standard_profile(profile: StandardChs, material: SteelMaterial, corrosion: f64) -> BlueprintsResult<Self> {
        let (diameter, thickness) = profile.dimensions();
        ChsProfile::new(profile.name(), diameter, thickness, material)?.with_corrosion(corrosion)
    }

    /// Apply a corrosion allowance (mm per face, inside and outside)
    pub fn with_corrosion(mut self, corrosion: f64) -> BlueprintsResult<Self> {
        check_corrosion(corrosion)?;
        self.corrosion = corrosion;
        self.corroded_dimensions()?;
        Ok(self)
    }

    fn corroded_dimensions(&self) -> BlueprintsResult<(f64, f64)> {
        Ok((
            corroded("diameter", self.diameter, self.corrosion)?,
            corroded("thickness", self.thickness, self.corrosion)?,
        ))
    }

    /// Outer diameter D (mm)
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Wall thickness t (mm)
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn corrosion(&self) -> f64 {
        self.corrosion
    }
}

impl Profile for ChsProfile {
    fn name(&self) -> &str {
        &self.name
    }

    fn cross_section(&self) -> BlueprintsResult<SteelCrossSection> {
        let (d, t) = self.corroded_dimensions()?;
        let ring = PartialRing::full_ring((d - t) / 2.0, t, 0.0, 0.0)?;
        let element = SteelElement::new(ring, self.material, self.thickness)?;
        Ok(SteelCrossSection::new(self.name.clone(), vec![element]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::SteelStrengthClass;
    use std::f64::consts::PI;

    fn rel_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs()
    }

    fn chs(corrosion: f64) -> BlueprintsResult<SteelCrossSection> {
        let steel = SteelMaterial::new(SteelStrengthClass::S355);
        ChsProfile::from_standard_profile(StandardChs::Chs168_3x8, steel, corrosion)?.cross_section()
    }

    #[test]
    fn test_chs_area_and_plastic_modulus() {
        let section = chs(0.0).unwrap();
        // A = π(D − t)t, tabulated 40.3 cm²
        assert!(rel_eq(section.area().unwrap(), PI * 160.3 * 8.0, 1e-9));
        // W_pl = (D³ − d³) / 6, tabulated 205 cm³
        let exact = (168.3_f64.powi(3) - 152.3_f64.powi(3)) / 6.0;
        assert!(rel_eq(section.plastic_section_modulus_about_y().unwrap(), exact, 0.03));
        assert!(rel_eq(section.plastic_section_modulus_about_z().unwrap(), exact, 0.03));
    }

    #[test]
    fn test_chs_centroid_and_size() {
        let section = chs(0.0).unwrap();
        let c = section.centroid().unwrap();
        assert!(c.x().abs() < 1e-9 && c.y().abs() < 1e-9);
        assert!(rel_eq(section.height().unwrap(), 168.3, 1e-3));
        assert!(rel_eq(section.perimeter().unwrap(), PI * (168.3 + 152.3), 1e-3));
    }

    #[test]
    fn test_chs_corrosion() {
        let nominal = chs(0.0).unwrap();
        let corroded = chs(1.0).unwrap();
        assert!(corroded.area().unwrap() < nominal.area().unwrap());
        assert!(rel_eq(corroded.area().unwrap(), PI * (166.3 - 6.0) * 6.0, 1e-9));
        assert!(chs(4.0).is_err());
        assert!(chs(-0.5).is_err());
    }

    #[test]
    fn test_invalid_dimensions() {
        let steel = SteelMaterial::default();
        assert!(ChsProfile::new("CHS", 100.0, 60.0, steel).is_err());
        assert!(ChsProfile::new("CHS", 0.0, 5.0, steel).is_err());
        assert!(ChsProfile::new("CHS", 100.0, 50.0, steel).is_ok());
    }
}
