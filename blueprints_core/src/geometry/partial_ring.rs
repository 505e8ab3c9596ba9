//! Partial ring (annular sector) shape
//!
//! A ring segment described by its centerline radius, wall thickness and the
//! sweep from `start_angle` to `end_angle` (degrees, counter-clockwise from +x).
//! A sweep of 360° is a full ring, used for circular hollow sections.
//!
//! ```text
//!            outer = R + t/2
//!          ╭───────╮
//!        ╭─╯       ╰─╮   inner = R - t/2
//!        │  ╭─────╮  │
//!        ╰──╯  ●  ╰──╯   ● = (x, y), ring center
//! ```
//!
//! Second moments of area have no simple closed form for an annular sector.
//! They are approximated with an equivalent rectangle of the same area and
//! the bounding height (about y) or bounding width (about z):
//! I_y ≈ A·H²/12, I_z ≈ A·W²/12. Plastic moduli use mesh quadrature.

use std::f64::consts::PI;

use geo::{Coord, LineString, Point, Polygon};
use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, ensure_positive, BlueprintsError, BlueprintsResult};
use crate::units::{Degrees, Radians};

use super::Shape;

/// Polygon resolution: straight segments per full turn of arc
pub const ARC_SEGMENTS_PER_TURN: f64 = 360.0;

const FULL_TURN_TOLERANCE_DEG: f64 = 1e-9;

/// Annular sector between `start_angle` and `end_angle`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPartialRing")]
pub struct PartialRing {
    radius: f64,
    thickness: f64,
    start_angle: f64,
    end_angle: f64,
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
struct RawPartialRing {
    radius: f64,
    thickness: f64,
    start_angle: f64,
    end_angle: f64,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
}

impl TryFrom<RawPartialRing> for PartialRing {
    type Error = BlueprintsError;

    fn try_from(raw: RawPartialRing) -> BlueprintsResult<Self> {
        PartialRing::centered_at(raw.radius, raw.thickness, raw.start_angle, raw.end_angle, raw.x, raw.y)
    }
}

impl PartialRing {
    /// Partial ring around the origin.
    pub fn new(radius: f64, thickness: f64, start_angle: f64, end_angle: f64) -> BlueprintsResult<Self> {
        Self::centered_at(radius, thickness, start_angle, end_angle, 0.0, 0.0)
    }

    /// Full 360° ring around (x, y).
    pub fn full_ring(radius: f64, thickness: f64, x: f64, y: f64) -> BlueprintsResult<Self> {
        Self::centered_at(radius, thickness, 0.0, 360.0, x, y)
    }

    /// Partial ring around (x, y).
    ///
    /// # Arguments
    /// * `radius` - Centerline radius (mm)
    /// * `thickness` - Wall thickness (mm), at most twice the radius
    /// * `start_angle`, `end_angle` - Sweep in degrees; `start < end`,
    ///   `end - start <= 360`, start in [-360, 360), end in (-360, 360]
    pub fn centered_at(
        radius: f64,
        thickness: f64,
        start_angle: f64,
        end_angle: f64,
        x: f64,
        y: f64,
    ) -> BlueprintsResult<Self> {
        ensure_positive("radius", "Radius", radius)?;
        ensure_positive("thickness", "Thickness", thickness)?;
        if thickness > 2.0 * radius {
            return Err(BlueprintsError::invalid_input(
                "thickness",
                thickness.to_string(),
                format!("Thickness must not exceed twice the radius ({})", 2.0 * radius),
            ));
        }
        ensure_finite("start_angle", start_angle)?;
        ensure_finite("end_angle", end_angle)?;
        if !(-360.0..360.0).contains(&start_angle) {
            return Err(BlueprintsError::invalid_input(
                "start_angle",
                start_angle.to_string(),
                "Start angle must be within [-360, 360) degrees",
            ));
        }
        if end_angle <= -360.0 || end_angle > 360.0 {
            return Err(BlueprintsError::invalid_input(
                "end_angle",
                end_angle.to_string(),
                "End angle must be within (-360, 360] degrees",
            ));
        }
        if end_angle <= start_angle {
            return Err(BlueprintsError::invalid_input(
                "end_angle",
                end_angle.to_string(),
                format!("End angle must be greater than start angle ({})", start_angle),
            ));
        }
        if end_angle - start_angle > 360.0 + FULL_TURN_TOLERANCE_DEG {
            return Err(BlueprintsError::invalid_input(
                "end_angle",
                end_angle.to_string(),
                "The sweep from start to end angle must not exceed 360 degrees",
            ));
        }
        ensure_finite("x", x)?;
        ensure_finite("y", y)?;

        Ok(PartialRing {
            radius,
            thickness,
            start_angle,
            end_angle,
            x,
            y,
        })
    }

    /// Centerline radius (mm)
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Wall thickness (mm)
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Start of the sweep (degrees)
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// End of the sweep (degrees)
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Inner radius = R - t/2 (mm)
    pub fn inner_radius(&self) -> f64 {
        self.radius - self.thickness / 2.0
    }

    /// Outer radius = R + t/2 (mm)
    pub fn outer_radius(&self) -> f64 {
        self.radius + self.thickness / 2.0
    }

    /// Swept angle in radians
    pub fn sweep(&self) -> Radians {
        Degrees(self.end_angle - self.start_angle).into()
    }

    /// Whether the sweep closes the ring
    pub fn is_full_ring(&self) -> bool {
        (self.end_angle - self.start_angle - 360.0).abs() <= FULL_TURN_TOLERANCE_DEG
    }

    /// Distance from the ring center to the centroid: 2·R·sin(Δθ/2) / (3·Δθ)
    pub fn centroid_radius(&self) -> f64 {
        let sweep = self.sweep().0;
        2.0 * self.radius * (sweep / 2.0).sin() / (3.0 * sweep)
    }

    fn arc(&self, radius: f64, segments: usize) -> impl Iterator<Item = Coord<f64>> + '_ {
        let start: Radians = Degrees(self.start_angle).into();
        let step = self.sweep().0 / segments as f64;
        (0..=segments).map(move |i| {
            let angle = start.0 + step * i as f64;
            Coord {
                x: self.x + radius * angle.cos(),
                y: self.y + radius * angle.sin(),
            }
        })
    }

    fn segments(&self) -> usize {
        let sweep_deg = self.end_angle - self.start_angle;
        ((sweep_deg / 360.0 * ARC_SEGMENTS_PER_TURN).ceil() as usize).max(2)
    }
}

impl Shape for PartialRing {
    fn polygon(&self) -> Polygon<f64> {
        let n = self.segments();
        let inner = self.inner_radius();

        if self.is_full_ring() {
            // Closing point duplicates the first one, drop it and let Polygon close the ring
            let outer: Vec<_> = self.arc(self.outer_radius(), n).take(n).collect();
            let holes = if inner > 0.0 {
                let mut ring: Vec<_> = self.arc(inner, n).take(n).collect();
                ring.reverse();
                vec![LineString::from(ring)]
            } else {
                vec![]
            };
            return Polygon::new(LineString::from(outer), holes);
        }

        let mut ring: Vec<_> = self.arc(self.outer_radius(), n).collect();
        if inner > 0.0 {
            let mut back: Vec<_> = self.arc(inner, n).collect();
            back.reverse();
            ring.extend(back);
        } else {
            ring.push(Coord { x: self.x, y: self.y });
        }
        Polygon::new(LineString::from(ring), vec![])
    }

    /// A = ½·Δθ·(outer² − inner²)
    fn area(&self) -> f64 {
        0.5 * self.sweep().0 * (self.outer_radius().powi(2) - self.inner_radius().powi(2))
    }

    /// Both arcs plus the two straight end caps (no caps for a full ring)
    fn perimeter(&self) -> f64 {
        if self.is_full_ring() {
            2.0 * PI * (self.outer_radius() + self.inner_radius())
        } else {
            self.sweep().0 * (self.outer_radius() + self.inner_radius()) + 2.0 * self.thickness
        }
    }

    fn centroid(&self) -> Point<f64> {
        let mid: Radians = Degrees((self.start_angle + self.end_angle) / 2.0).into();
        let r = self.centroid_radius();
        Point::new(self.x + r * mid.0.cos(), self.y + r * mid.0.sin())
    }

    /// Equivalent rectangle: A·H²/12 with H the bounding height
    fn moment_of_inertia_about_y(&self) -> f64 {
        self.area() * self.bounds().height().powi(2) / 12.0
    }

    /// Equivalent rectangle: A·W²/12 with W the bounding width
    fn moment_of_inertia_about_z(&self) -> f64 {
        self.area() * self.bounds().width().powi(2) / 12.0
    }

    /// One quarter of the wall thickness
    fn default_mesh_size(&self) -> f64 {
        self.thickness / 4.0
    }
}
