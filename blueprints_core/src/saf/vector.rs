//! Direction vectors in SAF notation ("x;y;z")

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{BlueprintsError, BlueprintsResult};

/// Load direction vector, written "x;y;z" in SAF rows.
///
/// All three components are finite and at least one is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SafVector {
    x: f64,
    y: f64,
    z: f64,
}

impl SafVector {
    pub fn new(x: f64, y: f64, z: f64) -> BlueprintsResult<Self> {
        let text = format!("{};{};{}", x, y, z);
        if ![x, y, z].iter().all(|c| c.is_finite()) {
            return Err(BlueprintsError::parse("vector", text, "Components must be finite numbers"));
        }
        if x == 0.0 && y == 0.0 && z == 0.0 {
            return Err(BlueprintsError::parse("vector", text, "Vector must not be zero"));
        }
        Ok(SafVector { x, y, z })
    }

    /// Parse a vector column, reporting errors against `field`
    pub(crate) fn parse_field(field: &str, s: &str) -> BlueprintsResult<Self> {
        s.parse::<SafVector>().map_err(|e| match e {
            BlueprintsError::Parse { value, reason, .. } => BlueprintsError::parse(field, value, reason),
            other => other,
        })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Euclidean length
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl FromStr for SafVector {
    type Err = BlueprintsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(';').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(BlueprintsError::parse(
                "vector",
                s,
                format!("Expected three components separated by ';', found {}", parts.len()),
            ));
        }
        let mut components = [0.0; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .map_err(|_| BlueprintsError::parse("vector", s, format!("'{}' is not a number", part)))?;
        }
        let [x, y, z] = components;
        SafVector::new(x, y, z).map_err(|e| match e {
            BlueprintsError::Parse { reason, .. } => BlueprintsError::parse("vector", s, reason),
            other => other,
        })
    }
}

impl std::fmt::Display for SafVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};{};{}", self.x, self.y, self.z)
    }
}

impl TryFrom<String> for SafVector {
    type Error = BlueprintsError;

    fn try_from(s: String) -> BlueprintsResult<Self> {
        s.parse()
    }
}

impl From<SafVector> for String {
    fn from(v: SafVector) -> Self {
        v.to_string()
    }
}
