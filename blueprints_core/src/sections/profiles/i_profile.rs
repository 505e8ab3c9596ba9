//! Symmetric I-profile
//!
//! ```text
//!     ┌───────────────┐  ▲
//!     └─────╮   ╭─────┘  │ t_f
//!           │   │        │
//!           │ ● │  h     ● = origin, centroid
//!           │   │        │
//!     ┌─────╯   ╰─────┐  │
//!     └───────────────┘  ▼
//!     ◄──────b────────►
//! ```
//!
//! Assembled from seven elements: two flanges, the web between them and four
//! root fillets. Flanges and fillets take their strength from t_f, the web
//! from t_w.

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_name, ensure_positive, BlueprintsError, BlueprintsResult};
use crate::geometry::{CornerQuadrant, FilletCorner, Rectangle};
use crate::materials::SteelMaterial;
use crate::sections::{SteelCrossSection, SteelElement};

use super::standard::StandardIProfile;
use super::{check_corrosion, corroded, Profile};

/// Doubly symmetric I-profile centred on the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IProfile {
    name: String,
    height: f64,
    width: f64,
    web_thickness: f64,
    flange_thickness: f64,
    radius: f64,
    material: SteelMaterial,
    corrosion: f64,
}

impl IProfile {
    /// I-profile from nominal dimensions (mm).
    ///
    /// `radius` may be 0 for a welded profile without root fillets.
    pub fn new(
        name: impl Into<String>,
        height: f64,
        width: f64,
        web_thickness: f64,
        flange_thickness: f64,
        radius: f64,
        material: SteelMaterial,
    ) -> BlueprintsResult<Self> {
        let profile = IProfile {
            name: name.into(),
            height,
            width,
            web_thickness,
            flange_thickness,
            radius,
            material,
            corrosion: 0.0,
        };
        ensure_name("name", &profile.name)?;
        ensure_positive("height", "Height", height)?;
        ensure_positive("width", "Width", width)?;
        ensure_positive("web_thickness", "Web thickness", web_thickness)?;
        ensure_positive("flange_thickness", "Flange thickness", flange_thickness)?;
        if !radius.is_finite() || radius < 0.0 {
            return Err(BlueprintsError::invalid_input(
                "radius",
                radius.to_string(),
                "Root radius must be zero or a positive value",
            ));
        }
        profile.check_proportions(height, width, web_thickness, flange_thickness)?;
        Ok(profile)
    }

    /// Standard rolled profile with a corrosion allowance (mm per face)
    pub fn from_standard_profile(
        profile: StandardIProfile,
        material: SteelMaterial,
        corrosion: f64,
    ) -> BlueprintsResult<Self> {
        let d = profile.dimensions();
        IProfile::new(
            profile.name(),
            d.height,
            d.width,
            d.web_thickness,
            d.flange_thickness,
            d.radius,
            material,
        )?
        .with_corrosion(corrosion)
    }

    /// Apply a corrosion allowance (mm per exposed face)
    pub fn with_corrosion(mut self, corrosion: f64) -> BlueprintsResult<Self> {
        check_corrosion(corrosion)?;
        self.corrosion = corrosion;
        let (h, b, tw, tf) = self.corroded_dimensions()?;
        self.check_proportions(h, b, tw, tf)?;
        Ok(self)
    }

    fn check_proportions(&self, h: f64, b: f64, tw: f64, tf: f64) -> BlueprintsResult<()> {
        if h - 2.0 * tf < 2.0 * self.radius || h <= 2.0 * tf {
            return Err(BlueprintsError::invalid_input(
                "height",
                h.to_string(),
                "Height must leave room for both flanges and the root radii",
            ));
        }
        if b < tw + 2.0 * self.radius {
            return Err(BlueprintsError::invalid_input(
                "width",
                b.to_string(),
                "Flange width must cover the web and both root radii",
            ));
        }
        Ok(())
    }

    /// (h, b, t_w, t_f) after corrosion
    fn corroded_dimensions(&self) -> BlueprintsResult<(f64, f64, f64, f64)> {
        let c = self.corrosion;
        Ok((
            corroded("height", self.height, c)?,
            corroded("width", self.width, c)?,
            corroded("web_thickness", self.web_thickness, c)?,
            corroded("flange_thickness", self.flange_thickness, c)?,
        ))
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn web_thickness(&self) -> f64 {
        self.web_thickness
    }

    pub fn flange_thickness(&self) -> f64 {
        self.flange_thickness
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn corrosion(&self) -> f64 {
        self.corrosion
    }

    pub fn material(&self) -> &SteelMaterial {
        &self.material
    }
}

impl Profile for IProfile {
    fn name(&self) -> &str {
        &self.name
    }

    fn cross_section(&self) -> BlueprintsResult<SteelCrossSection> {
        let (h, b, tw, tf) = self.corroded_dimensions()?;
        let flange_y = h / 2.0 - tf / 2.0;
        let web_edge_y = h / 2.0 - tf;
        let m = self.material;

        let mut elements = vec![
            SteelElement::new(Rectangle::centered_at(b, tf, 0.0, flange_y)?, m, self.flange_thickness)?,
            SteelElement::new(Rectangle::centered_at(b, tf, 0.0, -flange_y)?, m, self.flange_thickness)?,
            SteelElement::new(Rectangle::centered_at(tw, h - 2.0 * tf, 0.0, 0.0)?, m, self.web_thickness)?,
        ];

        if self.radius > 0.0 {
            let corners = [
                (tw / 2.0, web_edge_y, CornerQuadrant::LowerRight),
                (-tw / 2.0, web_edge_y, CornerQuadrant::LowerLeft),
                (tw / 2.0, -web_edge_y, CornerQuadrant::UpperRight),
                (-tw / 2.0, -web_edge_y, CornerQuadrant::UpperLeft),
            ];
            for (x, y, quadrant) in corners {
                let fillet = FilletCorner::new(self.radius, x, y, quadrant)?;
                elements.push(SteelElement::new(fillet, m, self.flange_thickness)?);
            }
        }

        let name = if self.corrosion > 0.0 {
            format!("{} (corrosion {} mm)", self.name, self.corrosion)
        } else {
            self.name.clone()
        };
        Ok(SteelCrossSection::new(name, elements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::SteelStrengthClass;
    use crate::units::Mpa;

    fn rel_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs()
    }

    fn heb200(corrosion: f64) -> BlueprintsResult<SteelCrossSection> {
        let steel = SteelMaterial::new(SteelStrengthClass::S355);
        IProfile::from_standard_profile(StandardIProfile::HEB200, steel, corrosion)?.cross_section()
    }

    #[test]
    fn test_heb200_tabulated_values() {
        let section = heb200(0.0).unwrap();
        assert_eq!(section.elements().len(), 7);

        // Tabulated: A = 78.1 cm², I_y = 5696 cm⁴, I_z = 2003 cm⁴, W_pl,y = 642.5 cm³
        assert!(rel_eq(section.area().unwrap(), 7810.0, 0.01));
        assert!(rel_eq(section.moment_of_inertia_about_y().unwrap(), 5696.0e4, 0.02));
        assert!(rel_eq(section.moment_of_inertia_about_z().unwrap(), 2003.0e4, 0.02));
        assert!(rel_eq(section.elastic_section_modulus_about_y_positive().unwrap(), 570.0e3, 0.02));
        assert!(rel_eq(section.plastic_section_modulus_about_y().unwrap(), 642.5e3, 0.03));
        assert!(rel_eq(section.weight_per_meter().unwrap().0, 61.3, 0.01));
    }

    #[test]
    fn test_symmetric_about_origin() {
        let section = heb200(0.0).unwrap();
        let c = section.centroid().unwrap();
        assert!(c.x().abs() < 1e-9 && c.y().abs() < 1e-9);
        assert!(rel_eq(
            section.elastic_section_modulus_about_y_positive().unwrap(),
            section.elastic_section_modulus_about_y_negative().unwrap(),
            1e-9
        ));
        assert_eq!(section.height().unwrap(), 200.0);
        assert_eq!(section.width().unwrap(), 200.0);
    }

    #[test]
    fn test_ipe300_area() {
        let steel = SteelMaterial::new(SteelStrengthClass::S235);
        let ipe = IProfile::from_standard_profile(StandardIProfile::IPE300, steel, 0.0).unwrap();
        let section = ipe.cross_section().unwrap();
        // Tabulated 53.8 cm²
        assert!(rel_eq(section.area().unwrap(), 5381.0, 0.01));
        assert!(rel_eq(section.plastic_section_modulus_about_y().unwrap(), 628.4e3, 0.03));
    }

    #[test]
    fn test_corrosion_reduces_area() {
        let nominal = heb200(0.0).unwrap();
        let corroded = heb200(1.0).unwrap();
        assert!(corroded.area().unwrap() < nominal.area().unwrap());
        assert_eq!(corroded.height().unwrap(), 198.0);
        assert!(corroded.name().contains("corrosion"));
        // Strength still follows the nominal thickness
        assert_eq!(corroded.yield_strength().unwrap(), Mpa(355.0));
    }

    #[test]
    fn test_full_corrosion_fails() {
        let err = heb200(4.5).unwrap_err();
        assert!(err.to_string().contains("fully corroded"), "{}", err);
        assert!(heb200(-1.0).is_err());
    }

    #[test]
    fn test_welded_profile_without_fillets() {
        let steel = SteelMaterial::default();
        let welded = IProfile::new("WI 400x200", 400.0, 200.0, 8.0, 12.0, 0.0, steel).unwrap();
        let section = welded.cross_section().unwrap();
        assert_eq!(section.elements().len(), 3);
        assert!(rel_eq(section.area().unwrap(), 2.0 * 200.0 * 12.0 + 8.0 * 376.0, 1e-12));
    }

    #[test]
    fn test_invalid_proportions() {
        let steel = SteelMaterial::default();
        assert!(IProfile::new("bad", 20.0, 100.0, 5.0, 10.0, 0.0, steel).is_err());
        assert!(IProfile::new("bad", 200.0, 20.0, 5.0, 10.0, 10.0, steel).is_err());
        assert!(IProfile::new("", 200.0, 100.0, 5.0, 10.0, 10.0, steel).is_err());
        assert!(IProfile::new("bad", 200.0, 100.0, 5.0, 10.0, -1.0, steel).is_err());
        let err = IProfile::new("bad", -200.0, 100.0, 5.0, 10.0, 1.0, steel).unwrap_err();
        assert!(err.to_string().contains("Height must be a positive value"));
    }

    #[test]
    fn test_union_outline_matches_area() {
        use geo::Area;
        let section = heb200(0.0).unwrap();
        let union = section.polygon().unwrap();
        // Fillet arcs are polygonised, so the outline area is slightly smaller
        assert!(rel_eq(union.unsigned_area(), section.area().unwrap(), 1e-3));
    }
}
