//! Flat bar (strip)
//!
//! A single rectangle lying flat: width along x, thickness along y.

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_name, BlueprintsResult};
use crate::geometry::Rectangle;
use crate::materials::SteelMaterial;
use crate::sections::{SteelCrossSection, SteelElement};

use super::standard::StandardStrip;
use super::{check_corrosion, corroded, Profile};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripProfile {
    name: String,
    plate: Rectangle,
    material: SteelMaterial,
    corrosion: f64,
}

impl StripProfile {
    /// Flat strip of `width` by `thickness` (mm)
    pub fn new(name: impl Into<String>, width: f64, thickness: f64, material: SteelMaterial) -> BlueprintsResult<Self> {
        let name = name.into();
        ensure_name("name", &name)?;
        Ok(StripProfile {
            name,
            plate: Rectangle::new(width, thickness)?,
            material,
            corrosion: 0.0,
        })
    }

    /// Strip with the dimensions of a standard profile, with `corrosion` (mm) removed from each face
    pub fn from_standard_profile(profile: StandardStrip, material: SteelMaterial, corrosion: f64) -> BlueprintsResult<Self> {
        let (width, thickness) = profile.dimensions();
        StripProfile::new(profile.name(), width, thickness, material)?.with_corrosion(corrosion)
    }

    /// Same profile with `corrosion` (mm) removed from each face
    pub fn with_corrosion(mut self, corrosion: f64) -> BlueprintsResult<Self> {
        check_corrosion(corrosion)?;
        self.corrosion = corrosion;
        self.corroded_plate()?;
        Ok(self)
    }

    fn corroded_plate(&self) -> BlueprintsResult<Rectangle> {
        Rectangle::new(
            corroded("width", self.plate.width(), self.corrosion)?,
            corroded("thickness", self.plate.height(), self.corrosion)?,
        )
    }

    pub fn width(&self) -> f64 {
        self.plate.width()
    }

    pub fn thickness(&self) -> f64 {
        self.plate.height()
    }
}

impl Profile for StripProfile {
    fn name(&self) -> &str {
        &self.name
    }

    fn cross_section(&self) -> BlueprintsResult<SteelCrossSection> {
        let element = SteelElement::new(self.corroded_plate()?, self.material, self.plate.plate_thickness())?;
        Ok(SteelCrossSection::new(self.name.clone(), vec![element]))
    }
}
