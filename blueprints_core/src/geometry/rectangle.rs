//! Rectangular shape (plates, flanges, webs)
//!
//! ```text
//!     ┌─────────┐
//!     │         │
//!   h │    ●    │  ● = (x, y)
//!     │         │
//!     └─────────┘
//!          w
//! ```

use geo::{coord, LineString, Point, Polygon, Rect};
use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, ensure_positive, BlueprintsError, BlueprintsResult};

use super::Shape;

/// Solid rectangle with sides parallel to the axes.
///
/// All properties are closed-form. Deserialization runs the same validation
/// as [`Rectangle::centered_at`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRectangle")]
pub struct Rectangle {
    width: f64,
    height: f64,
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
struct RawRectangle {
    width: f64,
    height: f64,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
}

impl TryFrom<RawRectangle> for Rectangle {
    type Error = BlueprintsError;

    fn try_from(raw: RawRectangle) -> BlueprintsResult<Self> {
        Rectangle::centered_at(raw.width, raw.height, raw.x, raw.y)
    }
}

impl Rectangle {
    /// Rectangle centred on the origin.
    pub fn new(width: f64, height: f64) -> BlueprintsResult<Self> {
        Self::centered_at(width, height, 0.0, 0.0)
    }

    /// Rectangle centred on (x, y).
    ///
    /// # Errors
    /// `InvalidInput` when width or height is not a positive finite value.
    pub fn centered_at(width: f64, height: f64, x: f64, y: f64) -> BlueprintsResult<Self> {
        ensure_positive("width", "Width", width)?;
        ensure_positive("height", "Height", height)?;
        ensure_finite("x", x)?;
        ensure_finite("y", y)?;
        Ok(Rectangle { width, height, x, y })
    }

    /// Width along x (mm)
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height along y (mm)
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Thickness of a plate with these dimensions: the smaller side (mm)
    pub fn plate_thickness(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Corner points counter-clockwise, starting bottom-left
    pub fn vertices(&self) -> [Point<f64>; 4] {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        [
            Point::new(self.x - hw, self.y - hh),
            Point::new(self.x + hw, self.y - hh),
            Point::new(self.x + hw, self.y + hh),
            Point::new(self.x - hw, self.y + hh),
        ]
    }
}

impl Shape for Rectangle {
    fn polygon(&self) -> Polygon<f64> {
        let ring: Vec<_> = self.vertices().iter().map(|p| p.0).collect();
        Polygon::new(LineString::from(ring), vec![])
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    fn centroid(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }

    /// I_y = w·h³/12
    fn moment_of_inertia_about_y(&self) -> f64 {
        self.width * self.height.powi(3) / 12.0
    }

    /// I_z = h·w³/12
    fn moment_of_inertia_about_z(&self) -> f64 {
        self.height * self.width.powi(3) / 12.0
    }

    /// One quarter of the smaller side
    fn default_mesh_size(&self) -> f64 {
        self.plate_thickness() / 4.0
    }

    fn bounds(&self) -> Rect<f64> {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        Rect::new(
            coord! { x: self.x - hw, y: self.y - hh },
            coord! { x: self.x + hw, y: self.y + hh },
        )
    }

    fn elastic_section_modulus_about_y_positive(&self) -> f64 {
        self.moment_of_inertia_about_y() / (self.height / 2.0)
    }

    fn elastic_section_modulus_about_y_negative(&self) -> f64 {
        self.elastic_section_modulus_about_y_positive()
    }

    fn elastic_section_modulus_about_z_positive(&self) -> f64 {
        self.moment_of_inertia_about_z() / (self.width / 2.0)
    }

    fn elastic_section_modulus_about_z_negative(&self) -> f64 {
        self.elastic_section_modulus_about_z_positive()
    }

    /// Z_y = w·h²/4
    fn plastic_section_modulus_about_y(&self) -> BlueprintsResult<f64> {
        Ok(self.width * self.height.powi(2) / 4.0)
    }

    /// Z_z = h·w²/4
    fn plastic_section_modulus_about_z(&self) -> BlueprintsResult<f64> {
        Ok(self.height * self.width.powi(2) / 4.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 1e-9
    }

    #[test]
    fn test_area_and_perimeter() {
        for (w, h) in [(1.0, 1.0), (100.0, 200.0), (0.5, 1234.5), (7.25, 9.25)] {
            let rect = Rectangle::new(w, h).unwrap();
            assert!(approx_eq(rect.area(), w * h));
            assert!(approx_eq(rect.perimeter(), 2.0 * (w + h)));
        }
    }

    #[test]
    fn test_moments_of_inertia() {
        let rect = Rectangle::new(100.0, 200.0).unwrap();
        assert!(approx_eq(rect.moment_of_inertia_about_y(), 100.0 * 200.0_f64.powi(3) / 12.0));
        assert!(approx_eq(rect.moment_of_inertia_about_z(), 200.0 * 100.0_f64.powi(3) / 12.0));
    }

    #[test]
    fn test_elastic_modulus_symmetric() {
        for (w, h) in [(100.0, 200.0), (3.0, 0.2), (50.0, 50.0)] {
            let rect = Rectangle::centered_at(w, h, 12.0, -7.0).unwrap();
            assert_eq!(
                rect.elastic_section_modulus_about_y_positive(),
                rect.elastic_section_modulus_about_y_negative()
            );
            assert_eq!(
                rect.elastic_section_modulus_about_z_positive(),
                rect.elastic_section_modulus_about_z_negative()
            );
            assert!(approx_eq(rect.elastic_section_modulus_about_y_positive(), w * h * h / 6.0));
        }
    }

    #[test]
    fn test_plastic_modulus() {
        for (w, h) in [(100.0, 200.0), (10.0, 3.0)] {
            let rect = Rectangle::new(w, h).unwrap();
            assert_eq!(rect.plastic_section_modulus_about_y().unwrap(), (w * h.powi(2)) / 4.0);
            assert_eq!(rect.plastic_section_modulus_about_z().unwrap(), (h * w.powi(2)) / 4.0);
        }
    }

    #[test]
    fn test_negative_width_rejected() {
        let err = Rectangle::new(-10.0, 200.0).unwrap_err();
        assert!(err.to_string().contains("Width must be a positive value"), "{}", err);
        assert_eq!(err.field(), Some("width"));
    }

    #[test]
    fn test_zero_height_rejected() {
        let err = Rectangle::new(10.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("Height must be a positive value"));
    }

    #[test]
    fn test_round_trip_parameters() {
        let rect = Rectangle::centered_at(30.0, 120.0, 5.0, 6.0).unwrap();
        assert_eq!(rect.width(), 30.0);
        assert_eq!(rect.height(), 120.0);
        assert_eq!(rect.plate_thickness(), 30.0);
        assert_eq!(rect.centroid(), Point::new(5.0, 6.0));
    }

    #[test]
    fn test_vertices_counter_clockwise_from_bottom_left() {
        let rect = Rectangle::centered_at(2.0, 4.0, 1.0, 1.0).unwrap();
        let v = rect.vertices();
        assert_eq!(v[0], Point::new(0.0, -1.0));
        assert_eq!(v[1], Point::new(2.0, -1.0));
        assert_eq!(v[2], Point::new(2.0, 3.0));
        assert_eq!(v[3], Point::new(0.0, 3.0));

        // Shoelace: positive signed area means counter-clockwise
        let signed: f64 = (0..4)
            .map(|i| {
                let (a, b) = (v[i], v[(i + 1) % 4]);
                a.x() * b.y() - b.x() * a.y()
            })
            .sum::<f64>()
            / 2.0;
        assert!(approx_eq(signed, rect.area()));
    }

    #[test]
    fn test_mesh_count_scales_with_mesh_size() {
        let rect = Rectangle::new(100.0, 200.0).unwrap();
        let coarse = rect.mesh(10.0).unwrap();
        let fine = rect.mesh(5.0).unwrap();
        assert_eq!(coarse.len(), 200);
        assert_eq!(fine.len(), 800);

        let b = rect.bounds();
        for p in coarse.iter().chain(fine.iter()) {
            assert!(p.x() > b.min().x && p.x() < b.max().x);
            assert!(p.y() > b.min().y && p.y() < b.max().y);
        }
    }

    #[test]
    fn test_default_mesh() {
        // Cell size = 25 -> 4 x 8 cells
        let rect = Rectangle::new(100.0, 200.0).unwrap();
        assert_eq!(rect.default_mesh().unwrap().len(), 32);
    }

    #[test]
    fn test_serde_validates() {
        let rect = Rectangle::centered_at(10.0, 20.0, 1.0, 2.0).unwrap();
        let json = serde_json::to_string(&rect).unwrap();
        let back: Rectangle = serde_json::from_str(&json).unwrap();
        assert_eq!(rect, back);

        let bad: Result<Rectangle, _> = serde_json::from_str(r#"{"width": -1.0, "height": 2.0}"#);
        assert!(bad.is_err());
    }
}
