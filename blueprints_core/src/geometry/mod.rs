//! # Cross-Section Geometry
//!
//! Primitive 2D shapes used to assemble structural cross-sections, and the
//! [`Shape`] trait they share.
//!
//! ## Axis Convention
//!
//! Shapes live in an (x, y) plane with millimetre coordinates. Following the
//! Eurocode naming for members, properties "about y" refer to bending around
//! the horizontal centroidal axis (the height of the shape governs) and
//! properties "about z" to bending around the vertical centroidal axis.
//!
//! ```text
//!          y ▲
//!            │   ┌─────────┐
//!            │   │    ●────┼──── about y (horizontal axis through centroid)
//!            │   └─────────┘
//!            └──────────────► x
//! ```
//!
//! ## Example
//!
//! ```rust
//! use blueprints_core::geometry::{Rectangle, Shape};
//!
//! let plate = Rectangle::new(100.0, 200.0).unwrap();
//! assert_eq!(plate.area(), 20_000.0);
//! assert_eq!(plate.plastic_section_modulus_about_y().unwrap(), 100.0 * 200.0_f64.powi(2) / 4.0);
//! ```

pub mod fillet;
pub mod mesh;
pub mod partial_ring;
pub mod rectangle;

pub use fillet::{CornerQuadrant, FilletCorner};
pub use mesh::{grid_points, plastic_first_moment};
pub use partial_ring::PartialRing;
pub use rectangle::Rectangle;

use geo::{BoundingRect, Point, Polygon, Rect};
use serde::{Deserialize, Serialize};

use crate::errors::BlueprintsResult;
use crate::settings::SectionSettings;

/// Bending axis of a cross-section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal centroidal axis (distances measured along y)
    Y,
    /// Vertical centroidal axis (distances measured along x)
    Z,
}

impl Axis {
    /// Coordinate of a point measured perpendicular to this axis
    pub fn lever(&self, point: Point<f64>) -> f64 {
        match self {
            Axis::Y => point.y(),
            Axis::Z => point.x(),
        }
    }
}

/// Geometric properties shared by every primitive cross-section shape.
///
/// Implementors provide the outline, area, perimeter, centroid and second
/// moments of area. Section moduli, radii of gyration and meshing have default
/// implementations built on top of those; shapes with closed forms override them.
pub trait Shape {
    /// Closed outline of the shape
    fn polygon(&self) -> Polygon<f64>;

    /// Cross-sectional area (mm²)
    fn area(&self) -> f64;

    /// Length of the outline, including inner boundaries (mm)
    fn perimeter(&self) -> f64;

    /// Area centroid (mm)
    fn centroid(&self) -> Point<f64>;

    /// Second moment of area about the horizontal centroidal axis (mm⁴)
    fn moment_of_inertia_about_y(&self) -> f64;

    /// Second moment of area about the vertical centroidal axis (mm⁴)
    fn moment_of_inertia_about_z(&self) -> f64;

    /// Cell size used by [`Shape::default_mesh`] (mm)
    fn default_mesh_size(&self) -> f64;

    /// Axis-aligned bounding box of the outline
    fn bounds(&self) -> Rect<f64> {
        let polygon = self.polygon();
        polygon.bounding_rect().unwrap_or_else(|| {
            let c = self.centroid();
            Rect::new(c.0, c.0)
        })
    }

    /// Elastic section modulus about y for the top fibre (mm³)
    fn elastic_section_modulus_about_y_positive(&self) -> f64 {
        let distance = (self.bounds().max().y - self.centroid().y()).abs();
        self.moment_of_inertia_about_y() / distance
    }

    /// Elastic section modulus about y for the bottom fibre (mm³)
    fn elastic_section_modulus_about_y_negative(&self) -> f64 {
        let distance = (self.centroid().y() - self.bounds().min().y).abs();
        self.moment_of_inertia_about_y() / distance
    }

    /// Elastic section modulus about z for the right fibre (mm³)
    fn elastic_section_modulus_about_z_positive(&self) -> f64 {
        let distance = (self.bounds().max().x - self.centroid().x()).abs();
        self.moment_of_inertia_about_z() / distance
    }

    /// Elastic section modulus about z for the left fibre (mm³)
    fn elastic_section_modulus_about_z_negative(&self) -> f64 {
        let distance = (self.centroid().x() - self.bounds().min().x).abs();
        self.moment_of_inertia_about_z() / distance
    }

    /// Plastic section modulus about y (mm³), by mesh quadrature unless overridden
    fn plastic_section_modulus_about_y(&self) -> BlueprintsResult<f64> {
        self.plastic_section_modulus_with(Axis::Y, &SectionSettings::default())
    }

    /// Plastic section modulus about z (mm³), by mesh quadrature unless overridden
    fn plastic_section_modulus_about_z(&self) -> BlueprintsResult<f64> {
        self.plastic_section_modulus_with(Axis::Z, &SectionSettings::default())
    }

    /// Numeric plastic section modulus about the centroidal `axis`.
    ///
    /// Sums |lever arm| × (area / point count) over the interior mesh points.
    fn plastic_section_modulus_with(&self, axis: Axis, settings: &SectionSettings) -> BlueprintsResult<f64> {
        let points = self.settings_mesh(settings)?;
        let centroid = self.centroid();
        Ok(plastic_first_moment(&points, self.area(), axis, axis.lever(centroid)))
    }

    /// Radius of gyration about y (mm)
    fn radius_of_gyration_about_y(&self) -> f64 {
        (self.moment_of_inertia_about_y() / self.area()).sqrt()
    }

    /// Radius of gyration about z (mm)
    fn radius_of_gyration_about_z(&self) -> f64 {
        (self.moment_of_inertia_about_z() / self.area()).sqrt()
    }

    /// Interior sample points on a square grid with cell size `mesh_size`.
    ///
    /// Returns the center of every grid cell that lies strictly inside the shape.
    fn mesh(&self, mesh_size: f64) -> BlueprintsResult<Vec<Point<f64>>> {
        grid_points(&self.polygon(), mesh_size)
    }

    /// Interior sample points at the default mesh size
    fn default_mesh(&self) -> BlueprintsResult<Vec<Point<f64>>> {
        self.mesh(self.default_mesh_size())
    }

    /// Interior sample points at the mesh size implied by `settings`.
    ///
    /// Invalid settings and meshes that cannot be built are errors. A valid
    /// mesh coarser than the shape itself falls back to the centroid as a
    /// single sample.
    fn settings_mesh(&self, settings: &SectionSettings) -> BlueprintsResult<Vec<Point<f64>>> {
        settings.validate()?;
        let bounds = self.bounds();
        let size = settings.mesh_size_for(self.default_mesh_size(), bounds.width(), bounds.height());
        let points = self.mesh(size)?;
        if points.len() < settings.min_mesh_points {
            log::warn!(
                "coarse mesh: {} sample points at {:.3} mm cell size (minimum {})",
                points.len(),
                size,
                settings.min_mesh_points
            );
        }
        if points.is_empty() {
            Ok(vec![self.centroid()])
        } else {
            Ok(points)
        }
    }
}

/// Distance between two points
pub(crate) fn distance(a: Point<f64>, b: Point<f64>) -> f64 {
    ((a.x() - b.x()).powi(2) + (a.y() - b.y()).powi(2)).sqrt()
}
