//! Grid meshing and mesh-based quadrature.
//!
//! Shapes without a closed-form plastic section modulus are integrated
//! numerically: the bounding box is divided into a regular grid and the
//! centers of the cells inside the outline act as equal-weight samples.
//! The result converges to the exact value as the cell size shrinks.

use geo::{BoundingRect, Contains, Point, Polygon};

use crate::errors::{BlueprintsError, BlueprintsResult};

use super::Axis;

/// Upper limit on the number of grid cells a single mesh may visit
pub const MAX_GRID_CELLS: usize = 50_000_000;

/// Center points of all grid cells lying strictly inside `polygon`.
///
/// The bounding box is split into `ceil(width / mesh_size)` by
/// `ceil(height / mesh_size)` equal cells, so the actual cell size is at most
/// `mesh_size` and the grid always fits the box exactly.
pub fn grid_points(polygon: &Polygon<f64>, mesh_size: f64) -> BlueprintsResult<Vec<Point<f64>>> {
    if !mesh_size.is_finite() || mesh_size <= 0.0 {
        return Err(BlueprintsError::invalid_input(
            "mesh_size",
            mesh_size.to_string(),
            "Mesh size must be a positive value",
        ));
    }

    let Some(bounds) = polygon.bounding_rect() else {
        return Ok(Vec::new());
    };

    let nx = cells_along(bounds.width(), mesh_size);
    let ny = cells_along(bounds.height(), mesh_size);
    match nx.checked_mul(ny) {
        Some(cells) if cells <= MAX_GRID_CELLS => {}
        _ => {
            return Err(BlueprintsError::invalid_input(
                "mesh_size",
                mesh_size.to_string(),
                format!("Mesh too fine for shape (more than {} grid cells)", MAX_GRID_CELLS),
            ));
        }
    }
    let dx = bounds.width() / nx as f64;
    let dy = bounds.height() / ny as f64;
    let origin = bounds.min();

    let mut points = Vec::new();
    for i in 0..nx {
        let x = origin.x + (i as f64 + 0.5) * dx;
        for j in 0..ny {
            let point = Point::new(x, origin.y + (j as f64 + 0.5) * dy);
            if polygon.contains(&point) {
                points.push(point);
            }
        }
    }
    Ok(points)
}

fn cells_along(length: f64, mesh_size: f64) -> usize {
    ((length / mesh_size).ceil() as usize).max(1)
}

/// Plastic first moment of equal-weight samples about an axis.
///
/// Every point carries `area / points.len()`; the result is
/// Σ |lever - axis_coordinate| × weight. Returns 0 for an empty sample set.
pub fn plastic_first_moment(points: &[Point<f64>], area: f64, axis: Axis, axis_coordinate: f64) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let weight = area / points.len() as f64;
    points
        .iter()
        .map(|p| (axis.lever(*p) - axis_coordinate).abs() * weight)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn square(size: f64) -> Polygon<f64> {
        polygon![
            (x: 0.0, y: 0.0),
            (x: size, y: 0.0),
            (x: size, y: size),
            (x: 0.0, y: size),
        ]
    }

    #[test]
    fn test_grid_count() {
        let points = grid_points(&square(10.0), 2.5).unwrap();
        assert_eq!(points.len(), 16);
    }

    #[test]
    fn test_uneven_division_still_inside() {
        // 10 / 3 -> 4 cells of 2.5
        let points = grid_points(&square(10.0), 3.0).unwrap();
        assert_eq!(points.len(), 16);
        assert!(points.iter().all(|p| p.x() > 0.0 && p.x() < 10.0 && p.y() > 0.0 && p.y() < 10.0));
    }

    #[test]
    fn test_triangle_filters_outside_cells() {
        let triangle = polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 0.0, y: 10.0)];
        let points = grid_points(&triangle, 1.0).unwrap();
        // Cells whose center is below the hypotenuse: 45 of 100, the diagonal ones sit on it
        assert_eq!(points.len(), 45);
        assert!(points.iter().all(|p| p.x() + p.y() < 10.0));
    }

    #[test]
    fn test_invalid_mesh_size() {
        assert!(grid_points(&square(1.0), 0.0).is_err());
        assert!(grid_points(&square(1.0), -1.0).is_err());
        assert!(grid_points(&square(1.0), f64::NAN).is_err());
    }

    #[test]
    fn test_too_fine_mesh_rejected() {
        let err = grid_points(&square(1000.0), 1e-12).unwrap_err();
        assert_eq!(err.field(), Some("mesh_size"));
        assert!(err.to_string().contains("Mesh too fine"));
        // Just above the cap without overflowing
        assert!(grid_points(&square(1.0), 1.0 / 8000.0).is_err());
    }

    #[test]
    fn test_plastic_first_moment_of_square() {
        // Square 10x10, axis at mid-height: Z = b h² / 4 = 250
        let points = grid_points(&square(10.0), 1.0).unwrap();
        let z = plastic_first_moment(&points, 100.0, Axis::Y, 5.0);
        assert!((z - 250.0).abs() < 1e-9, "Z = {}", z);
    }

    #[test]
    fn test_plastic_first_moment_empty() {
        assert_eq!(plastic_first_moment(&[], 100.0, Axis::Y, 0.0), 0.0);
    }
}
