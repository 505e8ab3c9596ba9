//! RelConnectsStructuralMember
//!
//! Hinge at the start, end or both ends of a 1D member. The constraints
//! describe the connection of the released end; a hinge that releases nothing
//! is rejected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ensure_name, BlueprintsError, BlueprintsResult};

use super::{check_reference, Constraint, DofConstraints};

/// Member end(s) the hinge applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HingePosition {
    Begin,
    End,
    Both,
}

/// SAF member hinge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RelConnectsStructuralMemberInput", into = "RelConnectsStructuralMemberInput")]
pub struct RelConnectsStructuralMember {
    id: Option<Uuid>,
    name: String,
    member: String,
    position: HingePosition,
    constraints: DofConstraints,
}

impl_saf_object!(RelConnectsStructuralMember);

impl RelConnectsStructuralMember {
    pub fn new(
        name: impl Into<String>,
        member: impl Into<String>,
        position: HingePosition,
        constraints: DofConstraints,
    ) -> BlueprintsResult<Self> {
        let name = name.into();
        let member = member.into();
        ensure_name("name", &name)?;
        check_reference("member", &member)?;
        constraints.validate()?;
        if constraints.iter().all(|(_, c)| c.is_rigid()) {
            return Err(BlueprintsError::invalid_input(
                "constraints",
                "all Rigid",
                "A hinge must release at least one degree of freedom",
            ));
        }
        Ok(RelConnectsStructuralMember {
            id: None,
            name,
            member,
            position,
            constraints,
        })
    }

    /// Pinned hinge: rotations about y and z released
    pub fn pinned(name: impl Into<String>, member: impl Into<String>, position: HingePosition) -> BlueprintsResult<Self> {
        let constraints = DofConstraints {
            fiy: Constraint::Free,
            fiz: Constraint::Free,
            ..DofConstraints::fixed()
        };
        Self::new(name, member, position, constraints)
    }

    pub fn member(&self) -> &str {
        &self.member
    }

    pub fn position(&self) -> HingePosition {
        self.position
    }

    pub fn constraints(&self) -> &DofConstraints {
        &self.constraints
    }
}

/// Flat SAF row of a hinge. Missing constraint columns are rigid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelConnectsStructuralMemberInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub member: String,
    pub position: HingePosition,
    #[serde(default)]
    pub ux: Constraint,
    #[serde(default)]
    pub uy: Constraint,
    #[serde(default)]
    pub uz: Constraint,
    #[serde(default)]
    pub fix: Constraint,
    #[serde(default)]
    pub fiy: Constraint,
    #[serde(default)]
    pub fiz: Constraint,
}

impl TryFrom<RelConnectsStructuralMemberInput> for RelConnectsStructuralMember {
    type Error = BlueprintsError;

    fn try_from(input: RelConnectsStructuralMemberInput) -> BlueprintsResult<Self> {
        let constraints = DofConstraints {
            ux: input.ux,
            uy: input.uy,
            uz: input.uz,
            fix: input.fix,
            fiy: input.fiy,
            fiz: input.fiz,
        };
        let hinge = RelConnectsStructuralMember::new(input.name, input.member, input.position, constraints)?;
        Ok(RelConnectsStructuralMember { id: input.id, ..hinge })
    }
}

impl From<RelConnectsStructuralMember> for RelConnectsStructuralMemberInput {
    fn from(hinge: RelConnectsStructuralMember) -> Self {
        let c = hinge.constraints;
        RelConnectsStructuralMemberInput {
            id: hinge.id,
            name: hinge.name,
            member: hinge.member,
            position: hinge.position,
            ux: c.ux,
            uy: c.uy,
            uz: c.uz,
            fix: c.fix,
            fiy: c.fiy,
            fiz: c.fiz,
        }
    }
}
