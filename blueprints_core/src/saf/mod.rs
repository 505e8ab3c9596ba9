//! # SAF Objects
//!
//! Validated records for the Structural Analysis Format (SAF 2.x): load
//! groups and cases, point/curve/surface actions, supports, member hinges and
//! point connections.
//!
//! ## Validation
//!
//! SAF rows carry many columns whose presence depends on another column, e.g.
//! a load case needs a `duration` only when its action type is Variable.
//! Records here model those rules with enum variants that carry exactly the
//! data relevant to the discriminant. Every record also has a flat `*Input`
//! struct mirroring the SAF row; converting it (`TryFrom`, or serde
//! deserialization of the record) applies every rule once and reports the
//! offending field:
//!
//! ```rust
//! use blueprints_core::saf::{StructuralLoadCase, StructuralLoadCaseInput, ActionType, LoadCaseType};
//!
//! let input = StructuralLoadCaseInput {
//!     id: None,
//!     name: "LC2".to_string(),
//!     description: None,
//!     action_type: ActionType::Variable,
//!     load_group: "LG2".to_string(),
//!     load_type: LoadCaseType::Static,
//!     duration: None,
//! };
//! let err = StructuralLoadCase::try_from(input).unwrap_err();
//! assert!(err.to_string().contains("duration"));
//! ```
//!
//! ## Identifiers
//!
//! SAF objects are identified by a GUID. Records carry an optional [`uuid::Uuid`];
//! assign one with `with_new_id()` or `with_id(..)`. Two records built from the
//! same data without ids compare equal.

use serde::{Deserialize, Serialize};

use crate::errors::{BlueprintsError, BlueprintsResult};

/// Identifier and name accessors shared by every SAF record
macro_rules! impl_saf_object {
    ($type:ty) => {
        impl $type {
            /// Object GUID, when assigned
            pub fn id(&self) -> Option<uuid::Uuid> {
                self.id
            }

            /// Assign a GUID
            pub fn with_id(mut self, id: uuid::Uuid) -> Self {
                self.id = Some(id);
                self
            }

            /// Assign a fresh random GUID
            pub fn with_new_id(self) -> Self {
                self.with_id(uuid::Uuid::new_v4())
            }

            pub fn name(&self) -> &str {
                &self.name
            }
        }
    };
}

pub mod curve_action;
pub mod curve_support;
pub mod hinge;
pub mod load_case;
pub mod load_group;
pub mod point_action;
pub mod point_connection;
pub mod point_support;
pub mod surface_action;
pub mod vector;

pub use curve_action::{
    CurveDirection, CurveDirectionType, CurveDistribution, CurveForceAction, DistributionType, StructuralCurveAction,
    StructuralCurveActionInput,
};
pub use curve_support::{LineConstraints, StructuralCurveSupport, StructuralCurveSupportInput};
pub use hinge::{HingePosition, RelConnectsStructuralMember, RelConnectsStructuralMemberInput};
pub use load_case::{ActionType, LoadCaseAction, LoadCaseType, LoadDuration, StructuralLoadCase, StructuralLoadCaseInput};
pub use load_group::{LoadGroupKind, LoadGroupType, LoadType, Relation, StructuralLoadGroup, StructuralLoadGroupInput};
pub use point_action::{PointForceAction, PointForceActionType, StructuralPointAction, StructuralPointActionInput};
pub use point_connection::StructuralPointConnection;
pub use point_support::{PointSupportType, StructuralPointSupport, StructuralPointSupportInput};
pub use surface_action::{StructuralSurfaceAction, StructuralSurfaceActionInput, SurfaceTarget};
pub use vector::SafVector;

// ============================================================================
// Shared enums
// ============================================================================

/// Global or member-local axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoordinateSystem {
    #[default]
    Global,
    Local,
}

/// Force or moment action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActionKind {
    #[default]
    Force,
    Moment,
}

/// Axis direction of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    X,
    Y,
    Z,
}

/// Whether a distributed load acts per unit of member length or per unit of
/// its projection onto the global axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Location {
    #[default]
    Length,
    Projection,
}

/// How positions along a member are measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoordinateDefinition {
    /// Millimetres along the member
    Absolute,
    /// Fraction of the member length, 0 to 1
    #[default]
    Relative,
}

/// End of the member positions are measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Origin {
    #[default]
    FromStart,
    FromEnd,
}

/// Whether an action covers a whole member or a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExtentType {
    #[default]
    Full,
    Segment,
}

// ============================================================================
// Positions and extents
// ============================================================================

/// A point along a 1D member
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemberPosition {
    pub definition: CoordinateDefinition,
    pub value: f64,
    pub origin: Origin,
}

impl MemberPosition {
    pub fn new(definition: CoordinateDefinition, value: f64, origin: Origin) -> BlueprintsResult<Self> {
        check_position("position", definition, value)?;
        Ok(MemberPosition {
            definition,
            value,
            origin,
        })
    }

    /// Relative position from the start of the member
    pub fn relative(value: f64) -> BlueprintsResult<Self> {
        Self::new(CoordinateDefinition::Relative, value, Origin::FromStart)
    }
}

fn check_position(field: &str, definition: CoordinateDefinition, value: f64) -> BlueprintsResult<()> {
    match definition {
        CoordinateDefinition::Relative if !(0.0..=1.0).contains(&value) => Err(BlueprintsError::invalid_input(
            field,
            value.to_string(),
            "Relative positions must lie between 0 and 1",
        )),
        CoordinateDefinition::Absolute if !value.is_finite() || value < 0.0 => Err(BlueprintsError::invalid_input(
            field,
            value.to_string(),
            "Absolute positions must be zero or a positive value",
        )),
        _ => Ok(()),
    }
}

/// Part of a member an action or support applies to
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Extent {
    #[default]
    Full,
    Segment {
        definition: CoordinateDefinition,
        origin: Origin,
        start: f64,
        end: f64,
    },
}

impl Extent {
    /// Segment from `start` to `end`, with `start < end`
    pub fn segment(definition: CoordinateDefinition, start: f64, end: f64, origin: Origin) -> BlueprintsResult<Self> {
        let extent = Extent::Segment {
            definition,
            origin,
            start,
            end,
        };
        extent.validate()?;
        Ok(extent)
    }

    pub(crate) fn validate(&self) -> BlueprintsResult<()> {
        if let Extent::Segment {
            definition, start, end, ..
        } = *self
        {
            check_position("start_point", definition, start)?;
            check_position("end_point", definition, end)?;
            if start >= end {
                return Err(BlueprintsError::invalid_input(
                    "end_point",
                    end.to_string(),
                    format!("End point must be greater than start point ({})", start),
                ));
            }
        }
        Ok(())
    }

    /// Build from the flat SAF columns
    pub(crate) fn from_columns(
        extent: ExtentType,
        definition: Option<CoordinateDefinition>,
        origin: Option<Origin>,
        start: Option<f64>,
        end: Option<f64>,
    ) -> BlueprintsResult<Self> {
        match extent {
            ExtentType::Full => {
                forbid(&start, "start_point", "extent is Full")?;
                forbid(&end, "end_point", "extent is Full")?;
                Ok(Extent::Full)
            }
            ExtentType::Segment => Extent::segment(
                definition.unwrap_or_default(),
                require(start, "start_point", "extent is Segment")?,
                require(end, "end_point", "extent is Segment")?,
                origin.unwrap_or_default(),
            ),
        }
    }

    /// Flat SAF columns: (extent, definition, origin, start, end)
    #[allow(clippy::type_complexity)]
    pub(crate) fn to_columns(
        self,
    ) -> (ExtentType, Option<CoordinateDefinition>, Option<Origin>, Option<f64>, Option<f64>) {
        match self {
            Extent::Full => (ExtentType::Full, None, None, None, None),
            Extent::Segment {
                definition,
                origin,
                start,
                end,
            } => (ExtentType::Segment, Some(definition), Some(origin), Some(start), Some(end)),
        }
    }
}

/// 1D member or an edge of a 2D member
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CurveReference {
    Member { member: String },
    Edge { member_2d: String, edge: u32 },
}

impl CurveReference {
    pub(crate) fn validate(&self) -> BlueprintsResult<()> {
        match self {
            CurveReference::Member { member } => check_reference("member", member),
            CurveReference::Edge { member_2d, .. } => check_reference("member_2d", member_2d),
        }
    }
}

// ============================================================================
// Degrees of freedom
// ============================================================================

/// Restraint of one degree of freedom
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Constraint {
    Free,
    #[default]
    Rigid,
    /// Spring with stiffness in kN/m (translation) or kNm/rad (rotation)
    Flexible { stiffness: f64 },
    CompressionOnly,
    TensionOnly,
    FlexibleCompressionOnly { stiffness: f64 },
    FlexibleTensionOnly { stiffness: f64 },
}

impl Constraint {
    /// Stiffness of flexible constraints
    pub fn stiffness(&self) -> Option<f64> {
        match self {
            Constraint::Flexible { stiffness }
            | Constraint::FlexibleCompressionOnly { stiffness }
            | Constraint::FlexibleTensionOnly { stiffness } => Some(*stiffness),
            _ => None,
        }
    }

    pub fn is_rigid(&self) -> bool {
        matches!(self, Constraint::Rigid)
    }

    pub(crate) fn validate(&self, field: &str) -> BlueprintsResult<()> {
        match self.stiffness() {
            Some(k) if !k.is_finite() || k <= 0.0 => Err(BlueprintsError::invalid_input(
                field,
                k.to_string(),
                "Stiffness of a flexible constraint must be a positive value",
            )),
            _ => Ok(()),
        }
    }
}

/// Constraints of the six degrees of freedom
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DofConstraints {
    pub ux: Constraint,
    pub uy: Constraint,
    pub uz: Constraint,
    pub fix: Constraint,
    pub fiy: Constraint,
    pub fiz: Constraint,
}

impl DofConstraints {
    /// Every degree of freedom rigid
    pub fn fixed() -> Self {
        DofConstraints::default()
    }

    /// Translations rigid, rotations free
    pub fn hinged() -> Self {
        DofConstraints {
            fix: Constraint::Free,
            fiy: Constraint::Free,
            fiz: Constraint::Free,
            ..Self::fixed()
        }
    }

    /// Only the vertical translation restrained
    pub fn sliding() -> Self {
        DofConstraints {
            ux: Constraint::Free,
            uy: Constraint::Free,
            uz: Constraint::Rigid,
            fix: Constraint::Free,
            fiy: Constraint::Free,
            fiz: Constraint::Free,
        }
    }

    /// (name, constraint) pairs in SAF column order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Constraint)> {
        [
            ("ux", self.ux),
            ("uy", self.uy),
            ("uz", self.uz),
            ("fix", self.fix),
            ("fiy", self.fiy),
            ("fiz", self.fiz),
        ]
        .into_iter()
    }

    pub(crate) fn validate(&self) -> BlueprintsResult<()> {
        self.iter().try_for_each(|(field, c)| c.validate(field))
    }
}

// ============================================================================
// Validation helpers
// ============================================================================

/// Unwrap a column that must be present under `condition`
pub(crate) fn require<T>(value: Option<T>, field: &str, condition: &str) -> BlueprintsResult<T> {
    value.ok_or_else(|| BlueprintsError::missing_field(field, condition))
}

/// Reject a column that must be absent under `condition`
pub(crate) fn forbid<T>(value: &Option<T>, field: &str, condition: &str) -> BlueprintsResult<()> {
    match value {
        Some(_) => Err(BlueprintsError::forbidden_field(field, condition)),
        None => Ok(()),
    }
}

/// Names of referenced objects must not be blank
pub(crate) fn check_reference(field: &str, value: &str) -> BlueprintsResult<()> {
    if value.trim().is_empty() {
        return Err(BlueprintsError::invalid_input(
            field,
            value,
            "Reference to another object must not be empty",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_bounds() {
        assert!(MemberPosition::relative(0.0).is_ok());
        assert!(MemberPosition::relative(1.0).is_ok());
        assert!(MemberPosition::relative(1.2).is_err());
        assert!(MemberPosition::new(CoordinateDefinition::Absolute, 2500.0, Origin::FromEnd).is_ok());
        assert!(MemberPosition::new(CoordinateDefinition::Absolute, -1.0, Origin::FromStart).is_err());
    }

    #[test]
    fn test_segment_requires_increasing_points() {
        assert!(Extent::segment(CoordinateDefinition::Relative, 0.2, 0.8, Origin::FromStart).is_ok());
        let err = Extent::segment(CoordinateDefinition::Relative, 0.8, 0.2, Origin::FromStart).unwrap_err();
        assert_eq!(err.field(), Some("end_point"));
        assert!(Extent::segment(CoordinateDefinition::Relative, 0.0, 1.5, Origin::FromStart).is_err());
        assert!(Extent::segment(CoordinateDefinition::Absolute, 0.0, 1500.0, Origin::FromEnd).is_ok());
    }

    #[test]
    fn test_extent_columns() {
        let full = Extent::from_columns(ExtentType::Full, None, None, None, None).unwrap();
        assert_eq!(full, Extent::Full);

        let err = Extent::from_columns(ExtentType::Full, None, None, Some(0.1), None).unwrap_err();
        assert_eq!(err.error_code(), "FORBIDDEN_FIELD");

        let err = Extent::from_columns(ExtentType::Segment, None, None, Some(0.1), None).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field 'end_point': required when extent is Segment");

        let segment = Extent::from_columns(ExtentType::Segment, None, None, Some(0.1), Some(0.9)).unwrap();
        let (extent, definition, origin, start, end) = segment.to_columns();
        assert_eq!(extent, ExtentType::Segment);
        assert_eq!(Extent::from_columns(extent, definition, origin, start, end).unwrap(), segment);
    }

    #[test]
    fn test_dof_presets() {
        assert!(DofConstraints::fixed().iter().all(|(_, c)| c.is_rigid()));
        let hinged = DofConstraints::hinged();
        assert!(hinged.ux.is_rigid() && hinged.uz.is_rigid());
        assert_eq!(hinged.fiy, Constraint::Free);
        let sliding = DofConstraints::sliding();
        assert_eq!(sliding.iter().filter(|(_, c)| c.is_rigid()).count(), 1);
        assert!(sliding.uz.is_rigid());
    }

    #[test]
    fn test_flexible_stiffness_validated() {
        let bad = DofConstraints {
            uy: Constraint::Flexible { stiffness: 0.0 },
            ..Default::default()
        };
        let err = bad.validate().unwrap_err();
        assert_eq!(err.field(), Some("uy"));

        let good = DofConstraints {
            uy: Constraint::FlexibleCompressionOnly { stiffness: 1500.0 },
            ..Default::default()
        };
        assert!(good.validate().is_ok());
        assert_eq!(good.uy.stiffness(), Some(1500.0));
    }

    #[test]
    fn test_constraint_serialization() {
        let json = serde_json::to_string(&Constraint::Flexible { stiffness: 10.0 }).unwrap();
        assert_eq!(json, r#"{"type":"Flexible","stiffness":10.0}"#);
        let back: Constraint = serde_json::from_str(r#"{"type":"Free"}"#).unwrap();
        assert_eq!(back, Constraint::Free);
    }

    #[test]
    fn test_require_and_forbid() {
        assert_eq!(require(Some(3), "x", "always").unwrap(), 3);
        let err = require::<i32>(None, "duration", "action_type is Variable").unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
        let err = forbid(&Some(1), "duration", "action_type is Permanent").unwrap_err();
        assert_eq!(err.to_string(), "Field 'duration' is not allowed when action_type is Permanent");
    }
}
