//! StructuralLoadCase
//!
//! A load case belongs to a load group. Variable cases carry a load duration
//! (used for timber and concrete creep factors), other action types must not.
//! Self weight is always a permanent action.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ensure_name, BlueprintsError, BlueprintsResult};

use super::{check_reference, forbid, require};

/// Action type of a load case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    Permanent,
    Variable,
    Accidental,
}

/// Nature of the load in a load case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadCaseType {
    SelfWeight,
    Others,
    Prestress,
    Dynamic,
    Static,
    Temperature,
    WaveLoading,
    Seismic,
    Fire,
    Snow,
    Wind,
    Standard,
}

/// Load duration class (EN 1995-1-1 §2.3.1.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadDuration {
    Long,
    Medium,
    Short,
    Instantaneous,
}

/// Action type with the columns that apply to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadCaseAction {
    Permanent,
    Variable { duration: LoadDuration },
    Accidental,
}

impl LoadCaseAction {
    pub fn action_type(&self) -> ActionType {
        match self {
            LoadCaseAction::Permanent => ActionType::Permanent,
            LoadCaseAction::Variable { .. } => ActionType::Variable,
            LoadCaseAction::Accidental => ActionType::Accidental,
        }
    }

    pub fn duration(&self) -> Option<LoadDuration> {
        match self {
            LoadCaseAction::Variable { duration } => Some(*duration),
            _ => None,
        }
    }
}

/// SAF load case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StructuralLoadCaseInput", into = "StructuralLoadCaseInput")]
pub struct StructuralLoadCase {
    id: Option<Uuid>,
    name: String,
    description: String,
    action: LoadCaseAction,
    load_group: String,
    load_type: LoadCaseType,
}

impl_saf_object!(StructuralLoadCase);

impl StructuralLoadCase {
    /// # Errors
    /// `InvalidInput` for an empty name or load group, or a self weight case
    /// that is not permanent.
    pub fn new(
        name: impl Into<String>,
        action: LoadCaseAction,
        load_group: impl Into<String>,
        load_type: LoadCaseType,
    ) -> BlueprintsResult<Self> {
        let name = name.into();
        let load_group = load_group.into();
        ensure_name("name", &name)?;
        check_reference("load_group", &load_group)?;
        if load_type == LoadCaseType::SelfWeight && action != LoadCaseAction::Permanent {
            return Err(BlueprintsError::invalid_input(
                "load_type",
                "SelfWeight",
                format!("Self weight must be a Permanent action, not {:?}", action.action_type()),
            ));
        }
        Ok(StructuralLoadCase {
            id: None,
            name,
            description: String::new(),
            action,
            load_group,
            load_type,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn action(&self) -> &LoadCaseAction {
        &self.action
    }

    pub fn load_group(&self) -> &str {
        &self.load_group
    }

    pub fn load_type(&self) -> LoadCaseType {
        self.load_type
    }
}

/// Flat SAF row of a load case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralLoadCaseInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub action_type: ActionType,
    pub load_group: String,
    pub load_type: LoadCaseType,
    #[serde(default)]
    pub duration: Option<LoadDuration>,
}

impl TryFrom<StructuralLoadCaseInput> for StructuralLoadCase {
    type Error = BlueprintsError;

    fn try_from(input: StructuralLoadCaseInput) -> BlueprintsResult<Self> {
        let condition = format!("action_type is {:?}", input.action_type);
        let action = match input.action_type {
            ActionType::Variable => LoadCaseAction::Variable {
                duration: require(input.duration, "duration", &condition)?,
            },
            ActionType::Permanent => {
                forbid(&input.duration, "duration", &condition)?;
                LoadCaseAction::Permanent
            }
            ActionType::Accidental => {
                forbid(&input.duration, "duration", &condition)?;
                LoadCaseAction::Accidental
            }
        };
        let case = StructuralLoadCase::new(input.name, action, input.load_group, input.load_type)?;
        Ok(StructuralLoadCase {
            id: input.id,
            description: input.description.unwrap_or_default(),
            ..case
        })
    }
}

impl From<StructuralLoadCase> for StructuralLoadCaseInput {
    fn from(case: StructuralLoadCase) -> Self {
        StructuralLoadCaseInput {
            id: case.id,
            name: case.name,
            description: Some(case.description).filter(|d| !d.is_empty()),
            action_type: case.action.action_type(),
            load_group: case.load_group,
            load_type: case.load_type,
            duration: case.action.duration(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(action_type: ActionType, duration: Option<LoadDuration>) -> StructuralLoadCaseInput {
        StructuralLoadCaseInput {
            id: None,
            name: "LC1".to_string(),
            description: None,
            action_type,
            load_group: "LG1".to_string(),
            load_type: LoadCaseType::Static,
            duration,
        }
    }

    #[test]
    fn test_variable_without_duration_fails() {
        let err = StructuralLoadCase::try_from(row(ActionType::Variable, None)).unwrap_err();
        assert!(err.to_string().contains("duration"), "{}", err);
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_variable_with_duration() {
        let case = StructuralLoadCase::try_from(row(ActionType::Variable, Some(LoadDuration::Short))).unwrap();
        assert_eq!(case.action().duration(), Some(LoadDuration::Short));
        assert_eq!(case.action().action_type(), ActionType::Variable);
    }

    #[test]
    fn test_duration_forbidden_otherwise() {
        for action_type in [ActionType::Permanent, ActionType::Accidental] {
            let err = StructuralLoadCase::try_from(row(action_type, Some(LoadDuration::Long))).unwrap_err();
            assert_eq!(err.error_code(), "FORBIDDEN_FIELD");
            assert_eq!(err.field(), Some("duration"));
        }
        assert!(StructuralLoadCase::try_from(row(ActionType::Permanent, None)).is_ok());
    }

    #[test]
    fn test_self_weight_must_be_permanent() {
        assert!(StructuralLoadCase::new("DL", LoadCaseAction::Permanent, "LG1", LoadCaseType::SelfWeight).is_ok());
        let err = StructuralLoadCase::new(
            "DL",
            LoadCaseAction::Variable {
                duration: LoadDuration::Long,
            },
            "LG1",
            LoadCaseType::SelfWeight,
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("load_type"));
    }

    #[test]
    fn test_references_required() {
        assert!(StructuralLoadCase::new("", LoadCaseAction::Permanent, "LG1", LoadCaseType::Others).is_err());
        assert!(StructuralLoadCase::new("LC", LoadCaseAction::Permanent, "", LoadCaseType::Others).is_err());
    }

    #[test]
    fn test_identical_constructions_equal() {
        let a = StructuralLoadCase::new("LC", LoadCaseAction::Accidental, "LG", LoadCaseType::Fire).unwrap();
        let b = StructuralLoadCase::new("LC", LoadCaseAction::Accidental, "LG", LoadCaseType::Fire).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.clone().with_new_id(), b.with_new_id());
    }

    #[test]
    fn test_serde_round_trip() {
        let case = StructuralLoadCase::try_from(row(ActionType::Variable, Some(LoadDuration::Medium)))
            .unwrap()
            .with_description("Imposed floor load");
        let json = serde_json::to_string(&case).unwrap();
        assert!(json.contains("\"duration\":\"Medium\""));
        let back: StructuralLoadCase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, case);
        assert_eq!(back.description(), "Imposed floor load");
    }
}
