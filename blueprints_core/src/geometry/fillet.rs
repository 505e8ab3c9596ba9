//! Fillet corner (root radius between a web and a flange)
//!
//! The material left between two perpendicular faces and a concave quarter
//! circle of radius `r`. The two straight legs start at the sharp corner
//! (x, y) and run along the faces in the directions given by the quadrant.
//!
//! ```text
//!   UpperRight quadrant:
//!
//!     │
//!     │╲
//!   r │ ╲___        (x, y) = ● sharp corner
//!     │     ‾‾─╮
//!     ●────────┘
//!         r
//! ```
//!
//! Closed forms, with e the centroid offset along both legs:
//!
//! - A = r²(1 − π/4)
//! - e = r(10 − 3π) / (3(4 − π)) ≈ 0.2234·r
//! - I_y = I_z = r⁴/3 − I_q − A·e², with I_q the quarter disc about the leg

use std::f64::consts::PI;

use geo::{Coord, LineString, Point, Polygon};
use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, ensure_positive, BlueprintsError, BlueprintsResult};

use super::Shape;

const ARC_SEGMENTS: usize = 90;

/// Direction the two legs run from the sharp corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CornerQuadrant {
    /// Legs along +x and +y
    UpperRight,
    /// Legs along −x and +y
    UpperLeft,
    /// Legs along −x and −y
    LowerLeft,
    /// Legs along +x and −y
    LowerRight,
}

impl CornerQuadrant {
    pub const ALL: [CornerQuadrant; 4] = [
        CornerQuadrant::UpperRight,
        CornerQuadrant::UpperLeft,
        CornerQuadrant::LowerLeft,
        CornerQuadrant::LowerRight,
    ];

    /// Signs (sx, sy) of the leg directions
    pub fn signs(&self) -> (f64, f64) {
        match self {
            CornerQuadrant::UpperRight => (1.0, 1.0),
            CornerQuadrant::UpperLeft => (-1.0, 1.0),
            CornerQuadrant::LowerLeft => (-1.0, -1.0),
            CornerQuadrant::LowerRight => (1.0, -1.0),
        }
    }
}

/// Fillet corner with its sharp corner at (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFilletCorner")]
pub struct FilletCorner {
    radius: f64,
    x: f64,
    y: f64,
    quadrant: CornerQuadrant,
}

#[derive(Deserialize)]
struct RawFilletCorner {
    radius: f64,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    quadrant: CornerQuadrant,
}

impl TryFrom<RawFilletCorner> for FilletCorner {
    type Error = BlueprintsError;

    fn try_from(raw: RawFilletCorner) -> BlueprintsResult<Self> {
        FilletCorner::new(raw.radius, raw.x, raw.y, raw.quadrant)
    }
}

impl FilletCorner {
    pub fn new(radius: f64, x: f64, y: f64, quadrant: CornerQuadrant) -> BlueprintsResult<Self> {
        ensure_positive("radius", "Radius", radius)?;
        ensure_finite("x", x)?;
        ensure_finite("y", y)?;
        Ok(FilletCorner { radius, x, y, quadrant })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn quadrant(&self) -> CornerQuadrant {
        self.quadrant
    }

    /// Sharp corner where both legs meet
    pub fn corner(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }

    /// Centroid offset from the sharp corner along each leg (mm)
    pub fn centroid_offset(&self) -> f64 {
        self.radius * (10.0 - 3.0 * PI) / (3.0 * (4.0 - PI))
    }

    fn to_global(&self, lx: f64, ly: f64) -> Coord<f64> {
        let (sx, sy) = self.quadrant.signs();
        Coord {
            x: self.x + sx * lx,
            y: self.y + sy * ly,
        }
    }

    /// Second moment about either centroidal axis; both are equal by symmetry
    fn centroidal_inertia(&self) -> f64 {
        let r = self.radius;
        let quarter_area = PI * r * r / 4.0;
        let quarter_centroid = r - 4.0 * r / (3.0 * PI);
        let quarter_own = (PI / 16.0 - 4.0 / (9.0 * PI)) * r.powi(4);
        let quarter_about_leg = quarter_own + quarter_area * quarter_centroid.powi(2);
        let about_leg = r.powi(4) / 3.0 - quarter_about_leg;
        about_leg - self.area() * self.centroid_offset().powi(2)
    }
}

impl Shape for FilletCorner {
    fn polygon(&self) -> Polygon<f64> {
        let r = self.radius;
        let mut ring = vec![self.to_global(0.0, 0.0), self.to_global(r, 0.0)];
        // Concave arc around (r, r), from 270° back to 180°
        for i in 1..ARC_SEGMENTS {
            let phi = 1.5 * PI - (PI / 2.0) * i as f64 / ARC_SEGMENTS as f64;
            ring.push(self.to_global(r + r * phi.cos(), r + r * phi.sin()));
        }
        ring.push(self.to_global(0.0, r));
        Polygon::new(LineString::from(ring), vec![])
    }

    fn area(&self) -> f64 {
        self.radius.powi(2) * (1.0 - PI / 4.0)
    }

    /// Two legs plus the quarter arc
    fn perimeter(&self) -> f64 {
        2.0 * self.radius + PI * self.radius / 2.0
    }

    fn centroid(&self) -> Point<f64> {
        let e = self.centroid_offset();
        Point::from(self.to_global(e, e))
    }

    fn moment_of_inertia_about_y(&self) -> f64 {
        self.centroidal_inertia()
    }

    fn moment_of_inertia_about_z(&self) -> f64 {
        self.centroidal_inertia()
    }

    /// One tenth of the radius
    fn default_mesh_size(&self) -> f64 {
        self.radius / 10.0
    }
}
