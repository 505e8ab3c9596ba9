//! StructuralCurveSupport
//!
//! Line support along a 1D member or an edge of a 2D member, over the full
//! length or a segment of it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ensure_name, BlueprintsError, BlueprintsResult};

use super::{
    forbid, require, Constraint, CoordinateDefinition, CoordinateSystem, CurveReference, Extent, ExtentType, Origin,
};

/// Restraints of a line support: translations and torsion
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineConstraints {
    pub ux: Constraint,
    pub uy: Constraint,
    pub uz: Constraint,
    pub fix: Constraint,
}

impl LineConstraints {
    fn validate(&self) -> BlueprintsResult<()> {
        self.ux.validate("ux")?;
        self.uy.validate("uy")?;
        self.uz.validate("uz")?;
        self.fix.validate("fix")
    }
}

/// SAF curve support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StructuralCurveSupportInput", into = "StructuralCurveSupportInput")]
pub struct StructuralCurveSupport {
    id: Option<Uuid>,
    name: String,
    target: CurveReference,
    constraints: LineConstraints,
    coordinate_system: CoordinateSystem,
    extent: Extent,
}

impl_saf_object!(StructuralCurveSupport);

impl StructuralCurveSupport {
    pub fn new(name: impl Into<String>, target: CurveReference, constraints: LineConstraints) -> BlueprintsResult<Self> {
        let support = StructuralCurveSupport {
            id: None,
            name: name.into(),
            target,
            constraints,
            coordinate_system: CoordinateSystem::Global,
            extent: Extent::Full,
        };
        support.validate()?;
        Ok(support)
    }

    fn validate(&self) -> BlueprintsResult<()> {
        ensure_name("name", &self.name)?;
        self.target.validate()?;
        self.constraints.validate()?;
        self.extent.validate()
    }

    pub fn with_extent(mut self, extent: Extent) -> BlueprintsResult<Self> {
        self.extent = extent;
        self.validate()?;
        Ok(self)
    }

    pub fn with_coordinate_system(mut self, coordinate_system: CoordinateSystem) -> Self {
        self.coordinate_system = coordinate_system;
        self
    }

    pub fn target(&self) -> &CurveReference {
        &self.target
    }

    pub fn constraints(&self) -> &LineConstraints {
        &self.constraints
    }

    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.coordinate_system
    }

    pub fn extent(&self) -> &Extent {
        &self.extent
    }
}

/// Flat SAF row of a curve support. Missing constraint columns are rigid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralCurveSupportInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub member: Option<String>,
    #[serde(default)]
    pub member_2d: Option<String>,
    #[serde(default)]
    pub edge: Option<u32>,
    #[serde(default)]
    pub ux: Constraint,
    #[serde(default)]
    pub uy: Constraint,
    #[serde(default)]
    pub uz: Constraint,
    #[serde(default)]
    pub fix: Constraint,
    #[serde(default)]
    pub coordinate_system: CoordinateSystem,
    #[serde(default)]
    pub extent: ExtentType,
    #[serde(default)]
    pub coordinate_definition: Option<CoordinateDefinition>,
    #[serde(default)]
    pub origin: Option<Origin>,
    #[serde(default)]
    pub start_point: Option<f64>,
    #[serde(default)]
    pub end_point: Option<f64>,
}

impl TryFrom<StructuralCurveSupportInput> for StructuralCurveSupport {
    type Error = BlueprintsError;

    fn try_from(input: StructuralCurveSupportInput) -> BlueprintsResult<Self> {
        let target = match input.member {
            Some(member) => {
                forbid(&input.member_2d, "member_2d", "member is given")?;
                forbid(&input.edge, "edge", "member is given")?;
                CurveReference::Member { member }
            }
            None => CurveReference::Edge {
                member_2d: require(input.member_2d, "member_2d", "no member is given")?,
                edge: require(input.edge, "edge", "member_2d is given")?,
            },
        };
        let constraints = LineConstraints {
            ux: input.ux,
            uy: input.uy,
            uz: input.uz,
            fix: input.fix,
        };
        let extent = Extent::from_columns(
            input.extent,
            input.coordinate_definition,
            input.origin,
            input.start_point,
            input.end_point,
        )?;
        let support = StructuralCurveSupport {
            id: input.id,
            name: input.name,
            target,
            constraints,
            coordinate_system: input.coordinate_system,
            extent,
        };
        support.validate()?;
        Ok(support)
    }
}

impl From<StructuralCurveSupport> for StructuralCurveSupportInput {
    fn from(support: StructuralCurveSupport) -> Self {
        let (member, member_2d, edge) = match support.target {
            CurveReference::Member { member } => (Some(member), None, None),
            CurveReference::Edge { member_2d, edge } => (None, Some(member_2d), Some(edge)),
        };
        let (extent, coordinate_definition, origin, start_point, end_point) = support.extent.to_columns();
        StructuralCurveSupportInput {
            id: support.id,
            name: support.name,
            member,
            member_2d,
            edge,
            ux: support.constraints.ux,
            uy: support.constraints.uy,
            uz: support.constraints.uz,
            fix: support.constraints.fix,
            coordinate_system: support.coordinate_system,
            extent,
            coordinate_definition,
            origin,
            start_point,
            end_point,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rigid_by_default() {
        let json = r#"{"name": "Sc1", "member": "B1"}"#;
        let support: StructuralCurveSupport = serde_json::from_str(json).unwrap();
        assert!(support.constraints().uz.is_rigid());
        assert_eq!(support.extent(), &Extent::Full);
    }

    #[test]
    fn test_edge_reference() {
        let json = r#"{"name": "Sc2", "member_2d": "S1", "edge": 3, "uz": {"type": "Flexible", "stiffness": 2000.0}}"#;
        let support: StructuralCurveSupport = serde_json::from_str(json).unwrap();
        assert_eq!(
            support.target(),
            &CurveReference::Edge {
                member_2d: "S1".to_string(),
                edge: 3
            }
        );
        assert_eq!(support.constraints().uz.stiffness(), Some(2000.0));

        let missing_edge = r#"{"name": "Sc3", "member_2d": "S1"}"#;
        let err = serde_json::from_str::<StructuralCurveSupport>(missing_edge).unwrap_err();
        assert!(err.to_string().contains("edge"));
    }

    #[test]
    fn test_member_and_edge_conflict() {
        let json = r#"{"name": "Sc4", "member": "B1", "member_2d": "S1", "edge": 1}"#;
        assert!(serde_json::from_str::<StructuralCurveSupport>(json).is_err());
    }

    #[test]
    fn test_flexible_needs_positive_stiffness() {
        let constraints = LineConstraints {
            uy: Constraint::Flexible { stiffness: 0.0 },
            ..Default::default()
        };
        let err = StructuralCurveSupport::new("Sc5", CurveReference::Member { member: "B1".to_string() }, constraints)
            .unwrap_err();
        assert_eq!(err.field(), Some("uy"));
    }

    #[test]
    fn test_segment() {
        let support = StructuralCurveSupport::new(
            "Sc6",
            CurveReference::Member { member: "B1".to_string() },
            LineConstraints::default(),
        )
        .unwrap();
        assert!(support
            .clone()
            .with_extent(Extent::Segment {
                definition: CoordinateDefinition::Relative,
                origin: Origin::FromStart,
                start: 0.5,
                end: 1.2,
            })
            .is_err());
        let segment = Extent::segment(CoordinateDefinition::Absolute, 500.0, 2500.0, Origin::FromEnd).unwrap();
        let support = support.with_extent(segment).unwrap().with_new_id();

        let json = serde_json::to_string(&support).unwrap();
        let back: StructuralCurveSupport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, support);
    }
}
