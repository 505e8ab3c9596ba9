//! # Section Settings
//!
//! Numeric settings for the mesh-based calculations (plastic section moduli
//! of shapes without a closed form). Settings are plain serde data so they can
//! live in a JSON file next to a model and be loaded by the CLI.
//!
//! ## Example
//!
//! ```rust
//! use blueprints_core::settings::SectionSettings;
//!
//! let settings = SectionSettings::from_json_str(r#"{ "mesh_refinement": 2.0 }"#).unwrap();
//! assert_eq!(settings.mesh_refinement, 2.0);
//! assert_eq!(settings.max_mesh_points, SectionSettings::default().max_mesh_points);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{BlueprintsError, BlueprintsResult};
use crate::geometry::mesh::MAX_GRID_CELLS;

/// Settings for mesh-based section calculations.
///
/// Missing fields in a JSON document fall back to [`SectionSettings::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionSettings {
    /// Divides each shape's default mesh size. 1.0 uses the documented
    /// per-shape default, 2.0 halves the cell size (four times the points).
    pub mesh_refinement: f64,

    /// Upper bound on sample points per element. When the refined mesh would
    /// exceed it, the cell size is enlarged until it fits.
    pub max_mesh_points: usize,

    /// Elements meshed with fewer points than this are reported with a
    /// warning, the quadrature is then coarse.
    pub min_mesh_points: usize,
}

impl Default for SectionSettings {
    fn default() -> Self {
        SectionSettings {
            mesh_refinement: 1.0,
            max_mesh_points: 250_000,
            min_mesh_points: 16,
        }
    }
}

impl SectionSettings {
    /// Validate the settings.
    pub fn validate(&self) -> BlueprintsResult<()> {
        if !self.mesh_refinement.is_finite() || self.mesh_refinement <= 0.0 {
            return Err(BlueprintsError::invalid_input(
                "mesh_refinement",
                self.mesh_refinement.to_string(),
                "Mesh refinement must be a positive value",
            ));
        }
        if self.max_mesh_points == 0 {
            return Err(BlueprintsError::invalid_input(
                "max_mesh_points",
                "0",
                "At least one mesh point is required",
            ));
        }
        if self.max_mesh_points > MAX_GRID_CELLS {
            return Err(BlueprintsError::invalid_input(
                "max_mesh_points",
                self.max_mesh_points.to_string(),
                format!("Must not exceed {}", MAX_GRID_CELLS),
            ));
        }
        if self.min_mesh_points > self.max_mesh_points {
            return Err(BlueprintsError::invalid_input(
                "min_mesh_points",
                self.min_mesh_points.to_string(),
                format!("Must not exceed max_mesh_points ({})", self.max_mesh_points),
            ));
        }
        Ok(())
    }

    /// Effective mesh size for a shape whose default cell size is `default_mesh_size`
    /// and whose bounding box measures `width` x `height`.
    pub fn mesh_size_for(&self, default_mesh_size: f64, width: f64, height: f64) -> f64 {
        let refined = default_mesh_size / self.mesh_refinement;
        let estimated_points = (width / refined).ceil() * (height / refined).ceil();
        if estimated_points > self.max_mesh_points as f64 {
            let coarsened = (width * height / self.max_mesh_points as f64).sqrt();
            log::debug!(
                "mesh size {:.4} mm would create {:.0} points, coarsened to {:.4} mm",
                refined,
                estimated_points,
                coarsened
            );
            // Ceil rounding can still overshoot by one row/column
            coarsened * 1.01
        } else {
            refined
        }
    }

    /// Parse settings from a JSON string and validate them.
    pub fn from_json_str(json: &str) -> BlueprintsResult<Self> {
        let settings: SectionSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file and validate them.
    pub fn load(path: &Path) -> BlueprintsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BlueprintsError::file_error("read", path.display().to_string(), e.to_string())
        })?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SectionSettings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = SectionSettings::from_json_str(r#"{ "min_mesh_points": 4 }"#).unwrap();
        assert_eq!(settings.min_mesh_points, 4);
        assert_eq!(settings.mesh_refinement, 1.0);
    }

    #[test]
    fn test_invalid_refinement_rejected() {
        let result = SectionSettings::from_json_str(r#"{ "mesh_refinement": 0.0 }"#);
        assert!(matches!(result, Err(BlueprintsError::InvalidInput { .. })));
    }

    #[test]
    fn test_point_bounds_rejected() {
        let too_many = SectionSettings {
            max_mesh_points: MAX_GRID_CELLS + 1,
            ..Default::default()
        };
        assert_eq!(too_many.validate().unwrap_err().field(), Some("max_mesh_points"));

        let inverted = SectionSettings {
            min_mesh_points: 20,
            max_mesh_points: 10,
            ..Default::default()
        };
        assert_eq!(inverted.validate().unwrap_err().field(), Some("min_mesh_points"));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let result = SectionSettings::from_json_str("{ not json");
        assert_eq!(result.unwrap_err().error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_mesh_size_refined_and_capped() {
        let settings = SectionSettings {
            mesh_refinement: 2.0,
            ..Default::default()
        };
        assert_eq!(settings.mesh_size_for(4.0, 100.0, 100.0), 2.0);

        let capped = SectionSettings {
            max_mesh_points: 100,
            ..Default::default()
        };
        let size = capped.mesh_size_for(0.1, 100.0, 100.0);
        let points = (100.0 / size).ceil() * (100.0 / size).ceil();
        assert!(points <= 100.0, "points = {}", points);
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let result = SectionSettings::load(Path::new("/definitely/not/here.json"));
        assert_eq!(result.unwrap_err().error_code(), "FILE_ERROR");
    }
}
