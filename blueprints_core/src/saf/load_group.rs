//! StructuralLoadGroup
//!
//! Groups load cases that act together in combinations. Variable groups need
//! a relation between their load cases and a load type; permanent and
//! tensioning groups must not carry a relation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ensure_name, BlueprintsError, BlueprintsResult};

use super::{forbid, require};

/// Load group type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadGroupType {
    Permanent,
    Variable,
    Accidental,
    Seismic,
    Moving,
    Tensioning,
    Fire,
}

impl LoadGroupType {
    pub const ALL: [LoadGroupType; 7] = [
        LoadGroupType::Permanent,
        LoadGroupType::Variable,
        LoadGroupType::Accidental,
        LoadGroupType::Seismic,
        LoadGroupType::Moving,
        LoadGroupType::Tensioning,
        LoadGroupType::Fire,
    ];
}

/// How the load cases of a group combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// At most one case of the group at a time
    Exclusive,
    /// Any subset of the cases
    Standard,
    /// All cases at once
    Together,
}

/// Category of variable load (EN 1991)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadType {
    Domestic,
    Offices,
    CongregationAreas,
    ShoppingAreas,
    StorageAreas,
    LightVehicles,
    HeavyVehicles,
    Roofs,
    Snow,
    Wind,
    Temperature,
    #[serde(rename = "None")]
    Unspecified,
}

/// Group type with the columns that apply to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadGroupKind {
    Permanent,
    Variable { relation: Relation, load_type: LoadType },
    Accidental { relation: Option<Relation> },
    Seismic { relation: Option<Relation> },
    Moving { relation: Option<Relation> },
    Tensioning,
    Fire { relation: Option<Relation> },
}

impl LoadGroupKind {
    pub fn group_type(&self) -> LoadGroupType {
        match self {
            LoadGroupKind::Permanent => LoadGroupType::Permanent,
            LoadGroupKind::Variable { .. } => LoadGroupType::Variable,
            LoadGroupKind::Accidental { .. } => LoadGroupType::Accidental,
            LoadGroupKind::Seismic { .. } => LoadGroupType::Seismic,
            LoadGroupKind::Moving { .. } => LoadGroupType::Moving,
            LoadGroupKind::Tensioning => LoadGroupType::Tensioning,
            LoadGroupKind::Fire { .. } => LoadGroupType::Fire,
        }
    }

    pub fn relation(&self) -> Option<Relation> {
        match *self {
            LoadGroupKind::Variable { relation, .. } => Some(relation),
            LoadGroupKind::Accidental { relation }
            | LoadGroupKind::Seismic { relation }
            | LoadGroupKind::Moving { relation }
            | LoadGroupKind::Fire { relation } => relation,
            LoadGroupKind::Permanent | LoadGroupKind::Tensioning => None,
        }
    }

    pub fn load_type(&self) -> Option<LoadType> {
        match *self {
            LoadGroupKind::Variable { load_type, .. } => Some(load_type),
            _ => None,
        }
    }
}

/// SAF load group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StructuralLoadGroupInput", into = "StructuralLoadGroupInput")]
pub struct StructuralLoadGroup {
    id: Option<Uuid>,
    name: String,
    kind: LoadGroupKind,
}

impl_saf_object!(StructuralLoadGroup);

impl StructuralLoadGroup {
    pub fn new(name: impl Into<String>, kind: LoadGroupKind) -> BlueprintsResult<Self> {
        let name = name.into();
        ensure_name("name", &name)?;
        Ok(StructuralLoadGroup { id: None, name, kind })
    }

    pub fn kind(&self) -> &LoadGroupKind {
        &self.kind
    }

    pub fn group_type(&self) -> LoadGroupType {
        self.kind.group_type()
    }
}

/// Flat SAF row of a load group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralLoadGroupInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub load_group_type: LoadGroupType,
    #[serde(default)]
    pub relation: Option<Relation>,
    #[serde(default)]
    pub load_type: Option<LoadType>,
}

impl TryFrom<StructuralLoadGroupInput> for StructuralLoadGroup {
    type Error = BlueprintsError;

    fn try_from(input: StructuralLoadGroupInput) -> BlueprintsResult<Self> {
        let group_type = input.load_group_type;
        let condition = format!("load_group_type is {:?}", group_type);
        if group_type != LoadGroupType::Variable {
            forbid(&input.load_type, "load_type", &condition)?;
        }
        let kind = match group_type {
            LoadGroupType::Variable => LoadGroupKind::Variable {
                relation: require(input.relation, "relation", &condition)?,
                load_type: require(input.load_type, "load_type", &condition)?,
            },
            LoadGroupType::Permanent | LoadGroupType::Tensioning => {
                forbid(&input.relation, "relation", &condition)?;
                if group_type == LoadGroupType::Permanent {
                    LoadGroupKind::Permanent
                } else {
                    LoadGroupKind::Tensioning
                }
            }
            LoadGroupType::Accidental => LoadGroupKind::Accidental { relation: input.relation },
            LoadGroupType::Seismic => LoadGroupKind::Seismic { relation: input.relation },
            LoadGroupType::Moving => LoadGroupKind::Moving { relation: input.relation },
            LoadGroupType::Fire => LoadGroupKind::Fire { relation: input.relation },
        };
        let group = StructuralLoadGroup::new(input.name, kind)?;
        Ok(StructuralLoadGroup { id: input.id, ..group })
    }
}

impl From<StructuralLoadGroup> for StructuralLoadGroupInput {
    fn from(group: StructuralLoadGroup) -> Self {
        StructuralLoadGroupInput {
            id: group.id,
            load_group_type: group.kind.group_type(),
            relation: group.kind.relation(),
            load_type: group.kind.load_type(),
            name: group.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(group_type: LoadGroupType) -> StructuralLoadGroupInput {
        StructuralLoadGroupInput {
            id: None,
            name: "LG1".to_string(),
            load_group_type: group_type,
            relation: None,
            load_type: None,
        }
    }

    #[test]
    fn test_permanent_group() {
        let group = StructuralLoadGroup::try_from(input(LoadGroupType::Permanent)).unwrap();
        assert_eq!(group.kind(), &LoadGroupKind::Permanent);
        assert_eq!(group.name(), "LG1");
        assert_eq!(group.id(), None);
    }

    #[test]
    fn test_variable_requires_relation_and_load_type() {
        let err = StructuralLoadGroup::try_from(input(LoadGroupType::Variable)).unwrap_err();
        assert_eq!(err.field(), Some("relation"));

        let err = StructuralLoadGroup::try_from(StructuralLoadGroupInput {
            relation: Some(Relation::Exclusive),
            ..input(LoadGroupType::Variable)
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("load_type"));

        let group = StructuralLoadGroup::try_from(StructuralLoadGroupInput {
            relation: Some(Relation::Exclusive),
            load_type: Some(LoadType::Snow),
            ..input(LoadGroupType::Variable)
        })
        .unwrap();
        assert_eq!(group.kind().relation(), Some(Relation::Exclusive));
        assert_eq!(group.kind().load_type(), Some(LoadType::Snow));
    }

    #[test]
    fn test_relation_forbidden_for_permanent_and_tensioning() {
        for group_type in [LoadGroupType::Permanent, LoadGroupType::Tensioning] {
            let err = StructuralLoadGroup::try_from(StructuralLoadGroupInput {
                relation: Some(Relation::Standard),
                ..input(group_type)
            })
            .unwrap_err();
            assert_eq!(err.error_code(), "FORBIDDEN_FIELD");
        }
    }

    #[test]
    fn test_optional_relation_for_other_types() {
        let group = StructuralLoadGroup::try_from(StructuralLoadGroupInput {
            relation: Some(Relation::Together),
            ..input(LoadGroupType::Accidental)
        })
        .unwrap();
        assert_eq!(group.kind(), &LoadGroupKind::Accidental { relation: Some(Relation::Together) });
        assert!(StructuralLoadGroup::try_from(input(LoadGroupType::Fire)).is_ok());
    }

    #[test]
    fn test_load_type_only_for_variable() {
        let err = StructuralLoadGroup::try_from(StructuralLoadGroupInput {
            load_type: Some(LoadType::Wind),
            ..input(LoadGroupType::Seismic)
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("load_type"));
    }

    #[test]
    fn test_every_type_converts() {
        for group_type in LoadGroupType::ALL {
            let mut row = input(group_type);
            if group_type == LoadGroupType::Variable {
                row.relation = Some(Relation::Standard);
                row.load_type = Some(LoadType::Offices);
            }
            let group = StructuralLoadGroup::try_from(row).unwrap();
            assert_eq!(group.group_type(), group_type);
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(StructuralLoadGroup::new("  ", LoadGroupKind::Permanent).is_err());
    }

    #[test]
    fn test_serde_flat_row() {
        let group = StructuralLoadGroup::new(
            "LG2",
            LoadGroupKind::Variable {
                relation: Relation::Standard,
                load_type: LoadType::Unspecified,
            },
        )
        .unwrap()
        .with_new_id();
        let json = serde_json::to_string(&group).unwrap();
        assert!(json.contains("\"load_group_type\":\"Variable\""));
        assert!(json.contains("\"load_type\":\"None\""));
        let back: StructuralLoadGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(back, group);
        assert!(back.id().is_some());

        let bad = r#"{"name": "LG3", "load_group_type": "Variable"}"#;
        assert!(serde_json::from_str::<StructuralLoadGroup>(bad).is_err());
    }
}
