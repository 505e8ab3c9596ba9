//! # Composite Steel Cross-Section
//!
//! Aggregates the properties of a list of [`SteelElement`]s:
//!
//! - Area: Σ A_i
//! - Centroid: Σ A_i·c_i / Σ A_i
//! - Second moment of area: Σ (I_i + A_i·d_i²) (parallel axis theorem)
//! - Elastic section modulus: I / distance to the extreme fibre of all elements
//! - Plastic section modulus: mesh quadrature around the strength weighted axis
//!
//! Every accessor fails with `EmptyCollection` when the section has no elements.
//!
//! ## Plastic Section Modulus
//!
//! The plastic axis is placed at Σ(A_i·f_y,i·c_i) / Σ(A_i·f_y,i). Every element
//! is meshed (see [`Shape::settings_mesh`]) and each sample point contributes
//! |distance to the axis| × A_i / n_i. For sections made of a single grade the
//! axis is the centroid, which coincides with the equal area axis for sections
//! symmetric about it.

use geo::{BooleanOps, EuclideanLength, MultiPolygon, Point, Rect};
use serde::{Deserialize, Serialize};

use crate::errors::{BlueprintsError, BlueprintsResult};
use crate::geometry::{plastic_first_moment, Axis, Shape};
use crate::settings::SectionSettings;
use crate::units::{KgPerM, Mpa};

use super::SteelElement;

/// Steel cross-section made of one or more elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSteelCrossSection")]
pub struct SteelCrossSection {
    name: String,
    elements: Vec<SteelElement>,
    settings: SectionSettings,
}

#[derive(Deserialize)]
struct RawSteelCrossSection {
    name: String,
    elements: Vec<SteelElement>,
    #[serde(default)]
    settings: SectionSettings,
}

impl TryFrom<RawSteelCrossSection> for SteelCrossSection {
    type Error = BlueprintsError;

    fn try_from(raw: RawSteelCrossSection) -> BlueprintsResult<Self> {
        SteelCrossSection::new(raw.name, raw.elements).with_settings(raw.settings)
    }
}

/// Snapshot of all section properties, for reports and JSON output.
///
/// Units: mm, mm², mm³, mm⁴, kg/m, MPa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    pub name: String,
    pub element_count: usize,
    pub height: f64,
    pub width: f64,
    pub area: f64,
    pub perimeter: f64,
    pub centroid_x: f64,
    pub centroid_y: f64,
    pub moment_of_inertia_about_y: f64,
    pub moment_of_inertia_about_z: f64,
    pub elastic_section_modulus_about_y_positive: f64,
    pub elastic_section_modulus_about_y_negative: f64,
    pub elastic_section_modulus_about_z_positive: f64,
    pub elastic_section_modulus_about_z_negative: f64,
    pub plastic_section_modulus_about_y: f64,
    pub plastic_section_modulus_about_z: f64,
    pub radius_of_gyration_about_y: f64,
    pub radius_of_gyration_about_z: f64,
    pub weight_per_meter: KgPerM,
    pub yield_strength: Mpa,
    pub ultimate_strength: Mpa,
}

impl SteelCrossSection {
    pub fn new(name: impl Into<String>, elements: Vec<SteelElement>) -> Self {
        let name = name.into();
        log::debug!("assembled cross-section '{}' from {} elements", name, elements.len());
        SteelCrossSection {
            name,
            elements,
            settings: SectionSettings::default(),
        }
    }

    /// Replace the mesh settings used for plastic moduli
    pub fn with_settings(mut self, settings: SectionSettings) -> BlueprintsResult<Self> {
        settings.validate()?;
        self.settings = settings;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elements(&self) -> &[SteelElement] {
        &self.elements
    }

    pub fn settings(&self) -> &SectionSettings {
        &self.settings
    }

    fn non_empty(&self) -> BlueprintsResult<&[SteelElement]> {
        if self.elements.is_empty() {
            return Err(BlueprintsError::empty_collection("elements"));
        }
        Ok(&self.elements)
    }

    /// Union of all element outlines
    pub fn polygon(&self) -> BlueprintsResult<MultiPolygon<f64>> {
        let elements = self.non_empty()?;
        let union = elements.iter().fold(MultiPolygon::new(vec![]), |acc, element| {
            acc.union(&MultiPolygon::new(vec![element.polygon()]))
        });
        Ok(union)
    }

    /// Total area (mm²)
    pub fn area(&self) -> BlueprintsResult<f64> {
        Ok(self.non_empty()?.iter().map(|e| e.area()).sum())
    }

    /// Outline length of the united polygon, holes included (mm)
    pub fn perimeter(&self) -> BlueprintsResult<f64> {
        let union = self.polygon()?;
        Ok(union
            .iter()
            .map(|p| {
                p.exterior().euclidean_length()
                    + p.interiors().iter().map(|ring| ring.euclidean_length()).sum::<f64>()
            })
            .sum())
    }

    /// Area weighted centroid (mm)
    pub fn centroid(&self) -> BlueprintsResult<Point<f64>> {
        let elements = self.non_empty()?;
        let area = self.area()?;
        let (sx, sy) = elements.iter().fold((0.0, 0.0), |(sx, sy), e| {
            let c = e.centroid();
            (sx + e.area() * c.x(), sy + e.area() * c.y())
        });
        Ok(Point::new(sx / area, sy / area))
    }

    /// I_y = Σ (I_y,i + A_i·(y_i − ȳ)²) (mm⁴)
    pub fn moment_of_inertia_about_y(&self) -> BlueprintsResult<f64> {
        let centroid = self.centroid()?;
        Ok(self
            .elements
            .iter()
            .map(|e| e.moment_of_inertia_about_y() + e.area() * (e.centroid().y() - centroid.y()).powi(2))
            .sum())
    }

    /// I_z = Σ (I_z,i + A_i·(x_i − x̄)²) (mm⁴)
    pub fn moment_of_inertia_about_z(&self) -> BlueprintsResult<f64> {
        let centroid = self.centroid()?;
        Ok(self
            .elements
            .iter()
            .map(|e| e.moment_of_inertia_about_z() + e.area() * (e.centroid().x() - centroid.x()).powi(2))
            .sum())
    }

    /// Bounding box of all elements
    pub fn bounds(&self) -> BlueprintsResult<Rect<f64>> {
        let elements = self.non_empty()?;
        let first = elements[0].bounds();
        let (mut min, mut max) = (first.min(), first.max());
        for b in elements.iter().skip(1).map(|e| e.bounds()) {
            min.x = min.x.min(b.min().x);
            min.y = min.y.min(b.min().y);
            max.x = max.x.max(b.max().x);
            max.y = max.y.max(b.max().y);
        }
        Ok(Rect::new(min, max))
    }

    /// Overall height (mm)
    pub fn height(&self) -> BlueprintsResult<f64> {
        Ok(self.bounds()?.height())
    }

    /// Overall width (mm)
    pub fn width(&self) -> BlueprintsResult<f64> {
        Ok(self.bounds()?.width())
    }

    /// Elastic section modulus about y for the top fibre (mm³)
    pub fn elastic_section_modulus_about_y_positive(&self) -> BlueprintsResult<f64> {
        let distance = (self.bounds()?.max().y - self.centroid()?.y()).abs();
        Ok(self.moment_of_inertia_about_y()? / distance)
    }

    /// Elastic section modulus about y for the bottom fibre (mm³)
    pub fn elastic_section_modulus_about_y_negative(&self) -> BlueprintsResult<f64> {
        let distance = (self.centroid()?.y() - self.bounds()?.min().y).abs();
        Ok(self.moment_of_inertia_about_y()? / distance)
    }

    /// Elastic section modulus about z for the right fibre (mm³)
    pub fn elastic_section_modulus_about_z_positive(&self) -> BlueprintsResult<f64> {
        let distance = (self.bounds()?.max().x - self.centroid()?.x()).abs();
        Ok(self.moment_of_inertia_about_z()? / distance)
    }

    /// Elastic section modulus about z for the left fibre (mm³)
    pub fn elastic_section_modulus_about_z_negative(&self) -> BlueprintsResult<f64> {
        let distance = (self.centroid()?.x() - self.bounds()?.min().x).abs();
        Ok(self.moment_of_inertia_about_z()? / distance)
    }

    /// Coordinate of the plastic axis: Σ(A·f_y·c) / Σ(A·f_y)
    pub fn plastic_axis(&self, axis: Axis) -> BlueprintsResult<f64> {
        let elements = self.non_empty()?;
        let (weighted, total) = elements.iter().fold((0.0, 0.0), |(weighted, total), e| {
            let capacity = e.area() * e.yield_strength().0;
            (weighted + capacity * axis.lever(e.centroid()), total + capacity)
        });
        Ok(weighted / total)
    }

    fn plastic_section_modulus(&self, axis: Axis) -> BlueprintsResult<f64> {
        let axis_coordinate = self.plastic_axis(axis)?;
        self.elements
            .iter()
            .map(|e| -> BlueprintsResult<f64> {
                let points = e.settings_mesh(&self.settings)?;
                Ok(plastic_first_moment(&points, e.area(), axis, axis_coordinate))
            })
            .sum()
    }

    /// Plastic section modulus about y (mm³)
    pub fn plastic_section_modulus_about_y(&self) -> BlueprintsResult<f64> {
        self.plastic_section_modulus(Axis::Y)
    }

    /// Plastic section modulus about z (mm³)
    pub fn plastic_section_modulus_about_z(&self) -> BlueprintsResult<f64> {
        self.plastic_section_modulus(Axis::Z)
    }

    /// √(I_y / A) (mm)
    pub fn radius_of_gyration_about_y(&self) -> BlueprintsResult<f64> {
        Ok((self.moment_of_inertia_about_y()? / self.area()?).sqrt())
    }

    /// √(I_z / A) (mm)
    pub fn radius_of_gyration_about_z(&self) -> BlueprintsResult<f64> {
        Ok((self.moment_of_inertia_about_z()? / self.area()?).sqrt())
    }

    /// Mass per metre length
    pub fn weight_per_meter(&self) -> BlueprintsResult<KgPerM> {
        Ok(KgPerM(self.non_empty()?.iter().map(|e| e.weight_per_meter().0).sum()))
    }

    /// Governing (lowest) yield strength of all elements
    pub fn yield_strength(&self) -> BlueprintsResult<Mpa> {
        Ok(Mpa(self
            .non_empty()?
            .iter()
            .map(|e| e.yield_strength().0)
            .fold(f64::INFINITY, f64::min)))
    }

    /// Governing (lowest) ultimate strength of all elements
    pub fn ultimate_strength(&self) -> BlueprintsResult<Mpa> {
        Ok(Mpa(self
            .non_empty()?
            .iter()
            .map(|e| e.ultimate_strength().0)
            .fold(f64::INFINITY, f64::min)))
    }

    /// Compute every property at once
    pub fn properties(&self) -> BlueprintsResult<SectionProperties> {
        let centroid = self.centroid()?;
        Ok(SectionProperties {
            name: self.name.clone(),
            element_count: self.elements.len(),
            height: self.height()?,
            width: self.width()?,
            area: self.area()?,
            perimeter: self.perimeter()?,
            centroid_x: centroid.x(),
            centroid_y: centroid.y(),
            moment_of_inertia_about_y: self.moment_of_inertia_about_y()?,
            moment_of_inertia_about_z: self.moment_of_inertia_about_z()?,
            elastic_section_modulus_about_y_positive: self.elastic_section_modulus_about_y_positive()?,
            elastic_section_modulus_about_y_negative: self.elastic_section_modulus_about_y_negative()?,
            elastic_section_modulus_about_z_positive: self.elastic_section_modulus_about_z_positive()?,
            elastic_section_modulus_about_z_negative: self.elastic_section_modulus_about_z_negative()?,
            plastic_section_modulus_about_y: self.plastic_section_modulus_about_y()?,
            plastic_section_modulus_about_z: self.plastic_section_modulus_about_z()?,
            radius_of_gyration_about_y: self.radius_of_gyration_about_y()?,
            radius_of_gyration_about_z: self.radius_of_gyration_about_z()?,
            weight_per_meter: self.weight_per_meter()?,
            yield_strength: self.yield_strength()?,
            ultimate_strength: self.ultimate_strength()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;
    use crate::materials::{SteelMaterial, SteelStrengthClass};
    use crate::sections::StandardProfile;
    use geo::Area;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    fn plate(w: f64, h: f64, x: f64, y: f64, class: SteelStrengthClass) -> SteelElement {
        let t = w.min(h);
        SteelElement::new(Rectangle::centered_at(w, h, x, y).unwrap(), SteelMaterial::new(class), t).unwrap()
    }

    /// T-section: 100x10 flange on top of a 10x90 web
    fn tee() -> SteelCrossSection {
        SteelCrossSection::new(
            "T",
            vec![
                plate(100.0, 10.0, 0.0, 95.0, SteelStrengthClass::S355),
                plate(10.0, 90.0, 0.0, 45.0, SteelStrengthClass::S355),
            ],
        )
    }

    #[test]
    fn test_empty_section_errors() {
        let section = SteelCrossSection::new("empty", vec![]);
        let err = section.area().unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_COLLECTION");
        assert!(section.centroid().is_err());
        assert!(section.moment_of_inertia_about_y().is_err());
        assert!(section.polygon().is_err());
        assert!(section.plastic_section_modulus_about_y().is_err());
        assert!(section.yield_strength().is_err());
        assert!(section.properties().is_err());
    }

    #[test]
    fn test_symmetric_two_plates_centroid() {
        let section = SteelCrossSection::new(
            "2PL",
            vec![
                plate(100.0, 10.0, 0.0, 50.0, SteelStrengthClass::S235),
                plate(100.0, 10.0, 0.0, -50.0, SteelStrengthClass::S235),
            ],
        );
        let c = section.centroid().unwrap();
        assert!(c.x().abs() < 1e-12 && c.y().abs() < 1e-12);
        assert_eq!(section.area().unwrap(), 2000.0);

        // 2 × (100·10³/12 + 1000·50²)
        let expected = 2.0 * (100.0 * 1000.0 / 12.0 + 1000.0 * 2500.0);
        assert!(approx_eq(section.moment_of_inertia_about_y().unwrap(), expected, 1e-12));
    }

    #[test]
    fn test_tee_properties() {
        let section = tee();
        assert_eq!(section.area().unwrap(), 1900.0);
        // ȳ = (1000·95 + 900·45) / 1900
        let y_bar = (1000.0 * 95.0 + 900.0 * 45.0) / 1900.0;
        assert!(approx_eq(section.centroid().unwrap().y(), y_bar, 1e-12));

        let i_y = 100.0 * 1000.0 / 12.0
            + 1000.0 * (95.0 - y_bar).powi(2)
            + 10.0 * 90.0_f64.powi(3) / 12.0
            + 900.0 * (45.0 - y_bar).powi(2);
        assert!(approx_eq(section.moment_of_inertia_about_y().unwrap(), i_y, 1e-12));
        assert!(approx_eq(section.elastic_section_modulus_about_y_positive().unwrap(), i_y / (100.0 - y_bar), 1e-12));
        assert!(approx_eq(section.elastic_section_modulus_about_y_negative().unwrap(), i_y / y_bar, 1e-12));
        assert_eq!(section.height().unwrap(), 100.0);
        assert_eq!(section.width().unwrap(), 100.0);
    }

    #[test]
    fn test_union_polygon_and_perimeter() {
        let section = tee();
        let union = section.polygon().unwrap();
        assert!(approx_eq(union.unsigned_area(), 1900.0, 1e-9));
        // Outline: 100 + 10 + 45 + 90 + 10 + 90 + 45 + 10
        assert!(approx_eq(section.perimeter().unwrap(), 400.0, 1e-9));
    }

    #[test]
    fn test_plastic_modulus_of_symmetric_section() {
        // Two plates stacked into one 100x20 rectangle: Z = b·h²/4
        let section = SteelCrossSection::new(
            "2PL",
            vec![
                plate(100.0, 10.0, 0.0, 5.0, SteelStrengthClass::S355),
                plate(100.0, 10.0, 0.0, -5.0, SteelStrengthClass::S355),
            ],
        );
        let z = section.plastic_section_modulus_about_y().unwrap();
        assert!(approx_eq(z, 100.0 * 400.0 / 4.0, 1e-9), "Z = {}", z);
    }

    #[test]
    fn test_plastic_axis_weighted_by_strength() {
        let section = SteelCrossSection::new(
            "mixed",
            vec![
                plate(100.0, 10.0, 0.0, 50.0, SteelStrengthClass::S460),
                plate(100.0, 10.0, 0.0, -50.0, SteelStrengthClass::S235),
            ],
        );
        let axis = section.plastic_axis(Axis::Y).unwrap();
        let expected = (460.0 * 50.0 - 235.0 * 50.0) / (460.0 + 235.0);
        assert!(approx_eq(axis, expected, 1e-12));
        assert_eq!(section.yield_strength().unwrap(), Mpa(235.0));
        assert_eq!(section.ultimate_strength().unwrap(), Mpa(360.0));
    }

    #[test]
    fn test_weight_and_gyration() {
        let section = tee();
        assert!(approx_eq(section.weight_per_meter().unwrap().0, 1900.0 * 7850.0 * 1e-6, 1e-12));
        let r = section.radius_of_gyration_about_y().unwrap();
        assert!(approx_eq(r * r * 1900.0, section.moment_of_inertia_about_y().unwrap(), 1e-9));
    }

    #[test]
    fn test_properties_snapshot_serializes() {
        let props = tee().properties().unwrap();
        assert_eq!(props.element_count, 2);
        let json = serde_json::to_string(&props).unwrap();
        let back: SectionProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(props, back);
    }

    #[test]
    fn test_settings_change_mesh() {
        let coarse = tee()
            .with_settings(SectionSettings {
                mesh_refinement: 0.5,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(coarse.settings().mesh_refinement, 0.5);
        assert!(coarse.plastic_section_modulus_about_y().unwrap() > 0.0);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let heb200 = StandardProfile::from_name("HEB200")
            .unwrap()
            .build(SteelMaterial::new(SteelStrengthClass::S355), 0.0)
            .unwrap();
        let err = heb200
            .with_settings(SectionSettings {
                mesh_refinement: -1.0,
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err.field(), Some("mesh_refinement"));
    }

    #[test]
    fn test_serde_validates_settings() {
        let section = tee();
        let json = serde_json::to_string(&section).unwrap();
        let back: SteelCrossSection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, section);

        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["settings"]["mesh_refinement"] = serde_json::json!(-1.0);
        assert!(serde_json::from_value::<SteelCrossSection>(value.clone()).is_err());

        value["settings"]["mesh_refinement"] = serde_json::json!(1.0);
        value["settings"]["min_mesh_points"] = serde_json::json!(10);
        value["settings"]["max_mesh_points"] = serde_json::json!(5);
        assert!(serde_json::from_value::<SteelCrossSection>(value).is_err());
    }
}
