//! StructuralPointSupport

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ensure_name, BlueprintsError, BlueprintsResult};

use super::{check_reference, forbid, require, Constraint, CoordinateSystem, DofConstraints};

/// Support preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointSupportType {
    Fixed,
    Hinged,
    Sliding,
    Custom,
}

impl PointSupportType {
    /// Constraints implied by a preset, `None` for Custom
    pub fn constraints(&self) -> Option<DofConstraints> {
        match self {
            PointSupportType::Fixed => Some(DofConstraints::fixed()),
            PointSupportType::Hinged => Some(DofConstraints::hinged()),
            PointSupportType::Sliding => Some(DofConstraints::sliding()),
            PointSupportType::Custom => None,
        }
    }
}

/// SAF point support in a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StructuralPointSupportInput", into = "StructuralPointSupportInput")]
pub struct StructuralPointSupport {
    id: Option<Uuid>,
    name: String,
    node: String,
    support_type: PointSupportType,
    constraints: DofConstraints,
    coordinate_system: CoordinateSystem,
}

impl_saf_object!(StructuralPointSupport);

impl StructuralPointSupport {
    /// Support with the constraints of a preset type.
    ///
    /// # Errors
    /// `InvalidInput` for `Custom`, which needs [`StructuralPointSupport::custom`].
    pub fn new(name: impl Into<String>, node: impl Into<String>, support_type: PointSupportType) -> BlueprintsResult<Self> {
        let constraints = support_type.constraints().ok_or_else(|| {
            BlueprintsError::invalid_input("type", "Custom", "Custom supports need explicit constraints")
        })?;
        Self::build(name.into(), node.into(), support_type, constraints)
    }

    pub fn custom(name: impl Into<String>, node: impl Into<String>, constraints: DofConstraints) -> BlueprintsResult<Self> {
        Self::build(name.into(), node.into(), PointSupportType::Custom, constraints)
    }

    fn build(
        name: String,
        node: String,
        support_type: PointSupportType,
        constraints: DofConstraints,
    ) -> BlueprintsResult<Self> {
        ensure_name("name", &name)?;
        check_reference("node", &node)?;
        constraints.validate()?;
        Ok(StructuralPointSupport {
            id: None,
            name,
            node,
            support_type,
            constraints,
            coordinate_system: CoordinateSystem::Global,
        })
    }

    pub fn with_coordinate_system(mut self, coordinate_system: CoordinateSystem) -> Self {
        self.coordinate_system = coordinate_system;
        self
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    pub fn support_type(&self) -> PointSupportType {
        self.support_type
    }

    pub fn constraints(&self) -> &DofConstraints {
        &self.constraints
    }

    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.coordinate_system
    }
}

/// Flat SAF row of a point support. The six constraint columns are only
/// given for Custom supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralPointSupportInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub node: String,
    #[serde(rename = "type")]
    pub support_type: PointSupportType,
    #[serde(default)]
    pub ux: Option<Constraint>,
    #[serde(default)]
    pub uy: Option<Constraint>,
    #[serde(default)]
    pub uz: Option<Constraint>,
    #[serde(default)]
    pub fix: Option<Constraint>,
    #[serde(default)]
    pub fiy: Option<Constraint>,
    #[serde(default)]
    pub fiz: Option<Constraint>,
    #[serde(default)]
    pub coordinate_system: CoordinateSystem,
}

impl TryFrom<StructuralPointSupportInput> for StructuralPointSupport {
    type Error = BlueprintsError;

    fn try_from(input: StructuralPointSupportInput) -> BlueprintsResult<Self> {
        let condition = format!("type is {:?}", input.support_type);
        let columns = [
            ("ux", input.ux),
            ("uy", input.uy),
            ("uz", input.uz),
            ("fix", input.fix),
            ("fiy", input.fiy),
            ("fiz", input.fiz),
        ];
        let support = match input.support_type.constraints() {
            Some(_) => {
                for (field, value) in &columns {
                    forbid(value, field, &condition)?;
                }
                StructuralPointSupport::new(input.name, input.node, input.support_type)?
            }
            None => {
                let [ux, uy, uz, fix, fiy, fiz] = columns.map(|(field, value)| require(value, field, &condition));
                let constraints = DofConstraints {
                    ux: ux?,
                    uy: uy?,
                    uz: uz?,
                    fix: fix?,
                    fiy: fiy?,
                    fiz: fiz?,
                };
                StructuralPointSupport::custom(input.name, input.node, constraints)?
            }
        };
        Ok(StructuralPointSupport {
            id: input.id,
            coordinate_system: input.coordinate_system,
            ..support
        })
    }
}

impl From<StructuralPointSupport> for StructuralPointSupportInput {
    fn from(support: StructuralPointSupport) -> Self {
        let custom = support.support_type == PointSupportType::Custom;
        let column = |c: Constraint| custom.then_some(c);
        let c = support.constraints;
        StructuralPointSupportInput {
            id: support.id,
            name: support.name,
            node: support.node,
            support_type: support.support_type,
            ux: column(c.ux),
            uy: column(c.uy),
            uz: column(c.uz),
            fix: column(c.fix),
            fiy: column(c.fiy),
            fiz: column(c.fiz),
            coordinate_system: support.coordinate_system,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(support_type: PointSupportType) -> StructuralPointSupportInput {
        StructuralPointSupportInput {
            id: None,
            name: "Sn1".to_string(),
            node: "N1".to_string(),
            support_type,
            ux: None,
            uy: None,
            uz: None,
            fix: None,
            fiy: None,
            fiz: None,
            coordinate_system: CoordinateSystem::Global,
        }
    }

    #[test]
    fn test_presets() {
        let fixed = StructuralPointSupport::try_from(row(PointSupportType::Fixed)).unwrap();
        assert!(fixed.constraints().iter().all(|(_, c)| c.is_rigid()));

        let hinged = StructuralPointSupport::try_from(row(PointSupportType::Hinged)).unwrap();
        assert_eq!(hinged.constraints(), &DofConstraints::hinged());

        let sliding = StructuralPointSupport::new("Sn2", "N2", PointSupportType::Sliding).unwrap();
        assert_eq!(sliding.constraints().ux, Constraint::Free);
        assert!(sliding.constraints().uz.is_rigid());
    }

    #[test]
    fn test_preset_forbids_constraint_columns() {
        let err = StructuralPointSupport::try_from(StructuralPointSupportInput {
            fiz: Some(Constraint::Free),
            ..row(PointSupportType::Fixed)
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Field 'fiz' is not allowed when type is Fixed");
    }

    #[test]
    fn test_custom_requires_all_constraints() {
        let err = StructuralPointSupport::try_from(StructuralPointSupportInput {
            ux: Some(Constraint::Rigid),
            ..row(PointSupportType::Custom)
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("uy"));
        assert!(StructuralPointSupport::new("Sn3", "N3", PointSupportType::Custom).is_err());
    }

    #[test]
    fn test_custom_with_springs() {
        let support = StructuralPointSupport::try_from(StructuralPointSupportInput {
            ux: Some(Constraint::Rigid),
            uy: Some(Constraint::Rigid),
            uz: Some(Constraint::FlexibleCompressionOnly { stiffness: 5000.0 }),
            fix: Some(Constraint::Free),
            fiy: Some(Constraint::Free),
            fiz: Some(Constraint::Free),
            ..row(PointSupportType::Custom)
        })
        .unwrap();
        assert_eq!(support.constraints().uz.stiffness(), Some(5000.0));

        let err = StructuralPointSupport::custom(
            "Sn4",
            "N4",
            DofConstraints {
                fix: Constraint::Flexible { stiffness: -1.0 },
                ..DofConstraints::hinged()
            },
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("fix"));
    }

    #[test]
    fn test_serde_round_trip() {
        let custom = StructuralPointSupport::custom("Sn5", "N5", DofConstraints::sliding())
            .unwrap()
            .with_coordinate_system(CoordinateSystem::Local);
        let json = serde_json::to_string(&custom).unwrap();
        assert!(json.contains("\"type\":\"Custom\""));
        let back: StructuralPointSupport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, custom);

        let fixed = StructuralPointSupport::new("Sn6", "N6", PointSupportType::Fixed).unwrap();
        let json = serde_json::to_value(&fixed).unwrap();
        assert!(json["ux"].is_null());
        let back: StructuralPointSupport = serde_json::from_value(json).unwrap();
        assert_eq!(back, fixed);
    }
}
