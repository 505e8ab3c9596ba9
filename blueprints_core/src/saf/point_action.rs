//! StructuralPointAction
//!
//! A concentrated force or moment, either in a node or at a position along a
//! 1D member.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ensure_finite, ensure_name, BlueprintsError, BlueprintsResult};

use super::{
    check_reference, forbid, require, ActionKind, CoordinateDefinition, CoordinateSystem, Direction, MemberPosition,
    Origin,
};

/// Where a point action is applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PointForceAction {
    InNode { node: String },
    OnBeam { member: String, position: MemberPosition },
}

/// Discriminant of [`PointForceAction`] in SAF rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointForceActionType {
    InNode,
    OnBeam,
}

/// SAF point action. Values in kN or kNm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StructuralPointActionInput", into = "StructuralPointActionInput")]
pub struct StructuralPointAction {
    id: Option<Uuid>,
    name: String,
    force_action: PointForceAction,
    kind: ActionKind,
    direction: Direction,
    value: f64,
    load_case: String,
    coordinate_system: CoordinateSystem,
}

impl_saf_object!(StructuralPointAction);

impl StructuralPointAction {
    pub fn new(
        name: impl Into<String>,
        force_action: PointForceAction,
        kind: ActionKind,
        direction: Direction,
        value: f64,
        load_case: impl Into<String>,
    ) -> BlueprintsResult<Self> {
        let name = name.into();
        let load_case = load_case.into();
        ensure_name("name", &name)?;
        ensure_finite("value", value)?;
        check_reference("load_case", &load_case)?;
        match &force_action {
            PointForceAction::InNode { node } => check_reference("node", node)?,
            PointForceAction::OnBeam { member, position } => {
                check_reference("member", member)?;
                MemberPosition::new(position.definition, position.value, position.origin)?;
            }
        }
        Ok(StructuralPointAction {
            id: None,
            name,
            force_action,
            kind,
            direction,
            value,
            load_case,
            coordinate_system: CoordinateSystem::Global,
        })
    }

    pub fn with_coordinate_system(mut self, coordinate_system: CoordinateSystem) -> Self {
        self.coordinate_system = coordinate_system;
        self
    }

    pub fn force_action(&self) -> &PointForceAction {
        &self.force_action
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Magnitude in kN (force) or kNm (moment)
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn load_case(&self) -> &str {
        &self.load_case
    }

    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.coordinate_system
    }
}

/// Flat SAF row of a point action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralPointActionInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub force_action: PointForceActionType,
    #[serde(default)]
    pub node: Option<String>,
    #[serde(default)]
    pub member: Option<String>,
    #[serde(default)]
    pub coordinate_definition: Option<CoordinateDefinition>,
    #[serde(default)]
    pub position: Option<f64>,
    #[serde(default)]
    pub origin: Option<Origin>,
    #[serde(default)]
    pub action_type: ActionKind,
    pub direction: Direction,
    pub value: f64,
    pub load_case: String,
    #[serde(default)]
    pub coordinate_system: CoordinateSystem,
}

impl TryFrom<StructuralPointActionInput> for StructuralPointAction {
    type Error = BlueprintsError;

    fn try_from(input: StructuralPointActionInput) -> BlueprintsResult<Self> {
        let force_action = match input.force_action {
            PointForceActionType::InNode => {
                let condition = "force_action is InNode";
                forbid(&input.member, "member", condition)?;
                forbid(&input.position, "position", condition)?;
                forbid(&input.coordinate_definition, "coordinate_definition", condition)?;
                forbid(&input.origin, "origin", condition)?;
                PointForceAction::InNode {
                    node: require(input.node, "node", condition)?,
                }
            }
            PointForceActionType::OnBeam => {
                let condition = "force_action is OnBeam";
                forbid(&input.node, "node", condition)?;
                let position = MemberPosition::new(
                    input.coordinate_definition.unwrap_or_default(),
                    require(input.position, "position", condition)?,
                    input.origin.unwrap_or_default(),
                )?;
                PointForceAction::OnBeam {
                    member: require(input.member, "member", condition)?,
                    position,
                }
            }
        };
        let action = StructuralPointAction::new(
            input.name,
            force_action,
            input.action_type,
            input.direction,
            input.value,
            input.load_case,
        )?;
        Ok(StructuralPointAction {
            id: input.id,
            coordinate_system: input.coordinate_system,
            ..action
        })
    }
}

impl From<StructuralPointAction> for StructuralPointActionInput {
    fn from(action: StructuralPointAction) -> Self {
        let (force_action, node, member, position) = match action.force_action {
            PointForceAction::InNode { node } => (PointForceActionType::InNode, Some(node), None, None),
            PointForceAction::OnBeam { member, position } => {
                (PointForceActionType::OnBeam, None, Some(member), Some(position))
            }
        };
        StructuralPointActionInput {
            id: action.id,
            name: action.name,
            force_action,
            node,
            member,
            coordinate_definition: position.map(|p| p.definition),
            position: position.map(|p| p.value),
            origin: position.map(|p| p.origin),
            action_type: action.kind,
            direction: action.direction,
            value: action.value,
            load_case: action.load_case,
            coordinate_system: action.coordinate_system,
        }
    }
}
