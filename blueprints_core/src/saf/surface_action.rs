//! StructuralSurfaceAction
//!
//! Area load on a 2D member or on a load panel. Exactly one of the two is
//! referenced. Surface actions are always forces.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ensure_finite, ensure_name, BlueprintsError, BlueprintsResult};

use super::{check_reference, ActionKind, CoordinateSystem, Direction, Location};

/// Surface a load acts on
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SurfaceTarget {
    Member2d { member_2d: String },
    LoadPanel { load_panel: String },
}

impl SurfaceTarget {
    fn validate(&self) -> BlueprintsResult<()> {
        match self {
            SurfaceTarget::Member2d { member_2d } => check_reference("member_2d", member_2d),
            SurfaceTarget::LoadPanel { load_panel } => check_reference("load_panel", load_panel),
        }
    }
}

/// SAF surface action. Value in kN/m².
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StructuralSurfaceActionInput", into = "StructuralSurfaceActionInput")]
pub struct StructuralSurfaceAction {
    id: Option<Uuid>,
    name: String,
    target: SurfaceTarget,
    direction: Direction,
    value: f64,
    load_case: String,
    coordinate_system: CoordinateSystem,
    location: Location,
}

impl_saf_object!(StructuralSurfaceAction);

impl StructuralSurfaceAction {
    pub fn new(
        name: impl Into<String>,
        target: SurfaceTarget,
        direction: Direction,
        value: f64,
        load_case: impl Into<String>,
    ) -> BlueprintsResult<Self> {
        let action = StructuralSurfaceAction {
            id: None,
            name: name.into(),
            target,
            direction,
            value,
            load_case: load_case.into(),
            coordinate_system: CoordinateSystem::Global,
            location: Location::Length,
        };
        action.validate()?;
        Ok(action)
    }

    fn validate(&self) -> BlueprintsResult<()> {
        ensure_name("name", &self.name)?;
        self.target.validate()?;
        ensure_finite("value", self.value)?;
        check_reference("load_case", &self.load_case)?;
        if self.location == Location::Projection && self.coordinate_system != CoordinateSystem::Global {
            return Err(BlueprintsError::invalid_input(
                "location",
                "Projection",
                "Projected loads are only allowed in the Global coordinate system",
            ));
        }
        Ok(())
    }

    pub fn with_coordinate_system(mut self, coordinate_system: CoordinateSystem) -> BlueprintsResult<Self> {
        self.coordinate_system = coordinate_system;
        self.validate()?;
        Ok(self)
    }

    pub fn with_location(mut self, location: Location) -> BlueprintsResult<Self> {
        self.location = location;
        self.validate()?;
        Ok(self)
    }

    pub fn target(&self) -> &SurfaceTarget {
        &self.target
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn load_case(&self) -> &str {
        &self.load_case
    }

    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.coordinate_system
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

/// Flat SAF row of a surface action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralSurfaceActionInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub action_type: ActionKind,
    pub direction: Direction,
    pub value: f64,
    #[serde(default)]
    pub member_2d: Option<String>,
    #[serde(default)]
    pub load_panel: Option<String>,
    pub load_case: String,
    #[serde(default)]
    pub coordinate_system: CoordinateSystem,
    #[serde(default)]
    pub location: Location,
}

impl TryFrom<StructuralSurfaceActionInput> for StructuralSurfaceAction {
    type Error = BlueprintsError;

    fn try_from(input: StructuralSurfaceActionInput) -> BlueprintsResult<Self> {
        if input.action_type != ActionKind::Force {
            return Err(BlueprintsError::invalid_input(
                "action_type",
                format!("{:?}", input.action_type),
                "Surface actions must be forces",
            ));
        }
        let target = match (input.member_2d, input.load_panel) {
            (Some(member_2d), None) => SurfaceTarget::Member2d { member_2d },
            (None, Some(load_panel)) => SurfaceTarget::LoadPanel { load_panel },
            (Some(_), Some(_)) => {
                return Err(BlueprintsError::forbidden_field("load_panel", "member_2d is given"));
            }
            (None, None) => {
                return Err(BlueprintsError::missing_field("member_2d", "no load_panel is given"));
            }
        };
        let action = StructuralSurfaceAction {
            id: input.id,
            name: input.name,
            target,
            direction: input.direction,
            value: input.value,
            load_case: input.load_case,
            coordinate_system: input.coordinate_system,
            location: input.location,
        };
        action.validate()?;
        Ok(action)
    }
}

impl From<StructuralSurfaceAction> for StructuralSurfaceActionInput {
    fn from(action: StructuralSurfaceAction) -> Self {
        let (member_2d, load_panel) = match action.target {
            SurfaceTarget::Member2d { member_2d } => (Some(member_2d), None),
            SurfaceTarget::LoadPanel { load_panel } => (None, Some(load_panel)),
        };
        StructuralSurfaceActionInput {
            id: action.id,
            name: action.name,
            action_type: ActionKind::Force,
            direction: action.direction,
            value: action.value,
            member_2d,
            load_panel,
            load_case: action.load_case,
            coordinate_system: action.coordinate_system,
            location: action.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> StructuralSurfaceActionInput {
        StructuralSurfaceActionInput {
            id: None,
            name: "SF1".to_string(),
            action_type: ActionKind::Force,
            direction: Direction::Z,
            value: -2.5,
            member_2d: Some("S1".to_string()),
            load_panel: None,
            load_case: "LC1".to_string(),
            coordinate_system: CoordinateSystem::Global,
            location: Location::Length,
        }
    }

    #[test]
    fn test_member_2d_target() {
        let action = StructuralSurfaceAction::try_from(row()).unwrap();
        assert_eq!(
            action.target(),
            &SurfaceTarget::Member2d {
                member_2d: "S1".to_string()
            }
        );
        assert_eq!(action.value(), -2.5);
    }

    #[test]
    fn test_exactly_one_target() {
        let err = StructuralSurfaceAction::try_from(StructuralSurfaceActionInput {
            load_panel: Some("P1".to_string()),
            ..row()
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "FORBIDDEN_FIELD");

        let err = StructuralSurfaceAction::try_from(StructuralSurfaceActionInput {
            member_2d: None,
            ..row()
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");

        let action = StructuralSurfaceAction::try_from(StructuralSurfaceActionInput {
            member_2d: None,
            load_panel: Some("P1".to_string()),
            ..row()
        })
        .unwrap();
        assert!(matches!(action.target(), SurfaceTarget::LoadPanel { .. }));
    }

    #[test]
    fn test_moment_rejected() {
        let err = StructuralSurfaceAction::try_from(StructuralSurfaceActionInput {
            action_type: ActionKind::Moment,
            ..row()
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("action_type"));
    }

    #[test]
    fn test_projection_needs_global_system() {
        let err = StructuralSurfaceAction::try_from(StructuralSurfaceActionInput {
            coordinate_system: CoordinateSystem::Local,
            location: Location::Projection,
            ..row()
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("location"));
    }

    #[test]
    fn test_blank_reference_rejected() {
        let err = StructuralSurfaceAction::new(
            "SF2",
            SurfaceTarget::LoadPanel {
                load_panel: String::new(),
            },
            Direction::Z,
            -1.0,
            "LC1",
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("load_panel"));
    }

    #[test]
    fn test_serde_round_trip() {
        let action = StructuralSurfaceAction::try_from(row()).unwrap().with_new_id();
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"member_2d\":\"S1\""));
        let back: StructuralSurfaceAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }
}
