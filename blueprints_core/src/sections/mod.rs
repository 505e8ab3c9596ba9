//! # Steel Cross-Sections
//!
//! Cross-sections assembled from primitive [`Shape`]s bound to a steel grade.
//!
//! - [`SteelElement`] - one shape with its material and nominal thickness
//! - [`SteelCrossSection`] - a composite of elements with aggregate properties
//! - [`profiles`] - rolled profile tables and factories (I-profiles, CHS, strips)
//!
//! ## Example
//!
//! ```rust
//! use blueprints_core::geometry::Rectangle;
//! use blueprints_core::materials::{SteelMaterial, SteelStrengthClass};
//! use blueprints_core::sections::{SteelCrossSection, SteelElement};
//!
//! let steel = SteelMaterial::new(SteelStrengthClass::S355);
//! let plate = Rectangle::new(200.0, 10.0).unwrap();
//! let element = SteelElement::new(plate, steel, 10.0).unwrap();
//!
//! let section = SteelCrossSection::new("PL 200x10", vec![element]);
//! assert_eq!(section.area().unwrap(), 2000.0);
//! assert_eq!(section.yield_strength().unwrap().0, 355.0);
//! ```

pub mod cross_section;
pub mod profiles;

pub use cross_section::{SectionProperties, SteelCrossSection};
pub use profiles::{
    ChsProfile, IProfile, Profile, StandardChs, StandardIProfile, StandardProfile, StandardStrip, StripProfile,
};

use geo::{Point, Polygon, Rect};
use serde::{Deserialize, Serialize};

use crate::errors::{BlueprintsError, BlueprintsResult};
use crate::geometry::{Axis, FilletCorner, PartialRing, Rectangle, Shape};
use crate::materials::SteelMaterial;
use crate::settings::SectionSettings;
use crate::units::{KgPerM, KgPerM3, Mpa, SqMm};

/// Any primitive shape that can be part of a cross-section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ElementShape {
    Rectangle(Rectangle),
    PartialRing(PartialRing),
    Fillet(FilletCorner),
}

impl ElementShape {
    fn as_shape(&self) -> &dyn Shape {
        match self {
            ElementShape::Rectangle(s) => s,
            ElementShape::PartialRing(s) => s,
            ElementShape::Fillet(s) => s,
        }
    }

    /// Short name of the shape kind
    pub fn kind(&self) -> &'static str {
        match self {
            ElementShape::Rectangle(_) => "rectangle",
            ElementShape::PartialRing(_) => "partial ring",
            ElementShape::Fillet(_) => "fillet",
        }
    }
}

impl From<Rectangle> for ElementShape {
    fn from(shape: Rectangle) -> Self {
        ElementShape::Rectangle(shape)
    }
}

impl From<PartialRing> for ElementShape {
    fn from(shape: PartialRing) -> Self {
        ElementShape::PartialRing(shape)
    }
}

impl From<FilletCorner> for ElementShape {
    fn from(shape: FilletCorner) -> Self {
        ElementShape::Fillet(shape)
    }
}

// Forward every operation so closed-form overrides of the inner shape are kept
impl Shape for ElementShape {
    fn polygon(&self) -> Polygon<f64> {
        self.as_shape().polygon()
    }

    fn area(&self) -> f64 {
        self.as_shape().area()
    }

    fn perimeter(&self) -> f64 {
        self.as_shape().perimeter()
    }

    fn centroid(&self) -> Point<f64> {
        self.as_shape().centroid()
    }

    fn moment_of_inertia_about_y(&self) -> f64 {
        self.as_shape().moment_of_inertia_about_y()
    }

    fn moment_of_inertia_about_z(&self) -> f64 {
        self.as_shape().moment_of_inertia_about_z()
    }

    fn default_mesh_size(&self) -> f64 {
        self.as_shape().default_mesh_size()
    }

    fn bounds(&self) -> Rect<f64> {
        self.as_shape().bounds()
    }

    fn elastic_section_modulus_about_y_positive(&self) -> f64 {
        self.as_shape().elastic_section_modulus_about_y_positive()
    }

    fn elastic_section_modulus_about_y_negative(&self) -> f64 {
        self.as_shape().elastic_section_modulus_about_y_negative()
    }

    fn elastic_section_modulus_about_z_positive(&self) -> f64 {
        self.as_shape().elastic_section_modulus_about_z_positive()
    }

    fn elastic_section_modulus_about_z_negative(&self) -> f64 {
        self.as_shape().elastic_section_modulus_about_z_negative()
    }

    fn plastic_section_modulus_about_y(&self) -> BlueprintsResult<f64> {
        self.as_shape().plastic_section_modulus_about_y()
    }

    fn plastic_section_modulus_about_z(&self) -> BlueprintsResult<f64> {
        self.as_shape().plastic_section_modulus_about_z()
    }

    fn plastic_section_modulus_with(&self, axis: Axis, settings: &SectionSettings) -> BlueprintsResult<f64> {
        self.as_shape().plastic_section_modulus_with(axis, settings)
    }
}

/// A shape made of one steel grade.
///
/// Strengths are looked up once from the nominal thickness of the plate the
/// shape is cut from, so an invalid thickness fails at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSteelElement")]
pub struct SteelElement {
    shape: ElementShape,
    material: SteelMaterial,
    nominal_thickness: f64,
    yield_strength: Mpa,
    ultimate_strength: Mpa,
}

#[derive(Deserialize)]
struct RawSteelElement {
    shape: ElementShape,
    material: SteelMaterial,
    nominal_thickness: f64,
}

impl TryFrom<RawSteelElement> for SteelElement {
    type Error = BlueprintsError;

    fn try_from(raw: RawSteelElement) -> BlueprintsResult<Self> {
        SteelElement::new(raw.shape, raw.material, raw.nominal_thickness)
    }
}

impl SteelElement {
    /// Bind a shape to a steel grade.
    ///
    /// # Errors
    /// `InvalidInput` when the nominal thickness is not positive or lies
    /// outside the strength table of the grade.
    pub fn new(shape: impl Into<ElementShape>, material: SteelMaterial, nominal_thickness: f64) -> BlueprintsResult<Self> {
        let yield_strength = material.yield_strength(nominal_thickness)?;
        let ultimate_strength = material.ultimate_strength(nominal_thickness)?;
        Ok(SteelElement {
            shape: shape.into(),
            material,
            nominal_thickness,
            yield_strength,
            ultimate_strength,
        })
    }

    pub fn shape(&self) -> &ElementShape {
        &self.shape
    }

    pub fn material(&self) -> &SteelMaterial {
        &self.material
    }

    /// Thickness used for the strength lookup (mm)
    pub fn nominal_thickness(&self) -> f64 {
        self.nominal_thickness
    }

    /// f_y for this element
    pub fn yield_strength(&self) -> Mpa {
        self.yield_strength
    }

    /// f_u for this element
    pub fn ultimate_strength(&self) -> Mpa {
        self.ultimate_strength
    }

    pub fn density(&self) -> KgPerM3 {
        self.material.density
    }

    /// Mass per metre length
    pub fn weight_per_meter(&self) -> KgPerM {
        self.material.density * SqMm(self.shape.area())
    }
}

impl Shape for SteelElement {
    fn polygon(&self) -> Polygon<f64> {
        self.shape.polygon()
    }

    fn area(&self) -> f64 {
        self.shape.area()
    }

    fn perimeter(&self) -> f64 {
        self.shape.perimeter()
    }

    fn centroid(&self) -> Point<f64> {
        self.shape.centroid()
    }

    fn moment_of_inertia_about_y(&self) -> f64 {
        self.shape.moment_of_inertia_about_y()
    }

    fn moment_of_inertia_about_z(&self) -> f64 {
        self.shape.moment_of_inertia_about_z()
    }

    fn default_mesh_size(&self) -> f64 {
        self.shape.default_mesh_size()
    }

    fn bounds(&self) -> Rect<f64> {
        self.shape.bounds()
    }

    fn plastic_section_modulus_about_y(&self) -> BlueprintsResult<f64> {
        self.shape.plastic_section_modulus_about_y()
    }

    fn plastic_section_modulus_about_z(&self) -> BlueprintsResult<f64> {
        self.shape.plastic_section_modulus_about_z()
    }
}
