//! StructuralPointConnection (structural node)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ensure_finite, ensure_name, BlueprintsError, BlueprintsResult};

/// SAF node. Coordinates in metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPointConnection")]
pub struct StructuralPointConnection {
    id: Option<Uuid>,
    name: String,
    x: f64,
    y: f64,
    z: f64,
}

impl_saf_object!(StructuralPointConnection);

#[derive(Deserialize)]
struct RawPointConnection {
    #[serde(default)]
    id: Option<Uuid>,
    name: String,
    x: f64,
    y: f64,
    z: f64,
}

impl TryFrom<RawPointConnection> for StructuralPointConnection {
    type Error = BlueprintsError;

    fn try_from(raw: RawPointConnection) -> BlueprintsResult<Self> {
        let node = StructuralPointConnection::new(raw.name, raw.x, raw.y, raw.z)?;
        Ok(StructuralPointConnection { id: raw.id, ..node })
    }
}

impl StructuralPointConnection {
    pub fn new(name: impl Into<String>, x: f64, y: f64, z: f64) -> BlueprintsResult<Self> {
        let name = name.into();
        ensure_name("name", &name)?;
        ensure_finite("x", x)?;
        ensure_finite("y", y)?;
        ensure_finite("z", z)?;
        Ok(StructuralPointConnection { id: None, name, x, y, z })
    }

    pub fn coordinates(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Straight-line distance to another node
    pub fn distance_to(&self, other: &StructuralPointConnection) -> f64 {
        let (dx, dy, dz) = (other.x - self.x, other.y - self.y, other.z - self.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let node = StructuralPointConnection::new("N1", 0.0, 3.0, 4.0).unwrap();
        assert_eq!(node.coordinates(), (0.0, 3.0, 4.0));
        let origin = StructuralPointConnection::new("N0", 0.0, 0.0, 0.0).unwrap();
        assert_eq!(origin.distance_to(&node), 5.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = StructuralPointConnection::new("N1", 0.0, f64::NAN, 0.0).unwrap_err();
        assert_eq!(err.field(), Some("y"));
        assert!(StructuralPointConnection::new("", 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_serde() {
        let node = StructuralPointConnection::new("N2", 1.5, -2.0, 0.0).unwrap().with_new_id();
        let json = serde_json::to_string(&node).unwrap();
        let back: StructuralPointConnection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
        assert!(serde_json::from_str::<StructuralPointConnection>(r#"{"name": " ", "x": 0, "y": 0, "z": 0}"#).is_err());
    }
}
