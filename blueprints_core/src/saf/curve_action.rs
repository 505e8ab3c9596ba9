//! StructuralCurveAction
//!
//! Line load on a 1D member or on an edge of a 2D member. The flat SAF row has
//! many conditional columns:
//!
//! | column      | required when                       | forbidden when          |
//! |-------------|-------------------------------------|-------------------------|
//! | member      | force_action is OnBeam              | force_action is OnEdge  |
//! | member_2d   | force_action is OnEdge              | force_action is OnBeam  |
//! | edge        | force_action is OnEdge              | force_action is OnBeam  |
//! | value_2     | distribution is Trapezoidal         | distribution is Uniform |
//! | vector_1    | direction is Vector                 | direction is X, Y or Z  |
//! | vector_2    | direction is Vector and Trapezoidal | otherwise               |
//! | start/end   | extent is Segment                   | extent is Full          |
//!
//! Location Projection is only meaningful in the global coordinate system.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ensure_finite, ensure_name, BlueprintsError, BlueprintsResult};

use super::{
    check_reference, forbid, require, ActionKind, CoordinateDefinition, CoordinateSystem, CurveReference, Extent,
    ExtentType, Location, Origin, SafVector,
};

/// Load intensity along the curve, kN/m or kNm/m
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CurveDistribution {
    Uniform { value: f64 },
    Trapezoidal { value_1: f64, value_2: f64 },
}

impl CurveDistribution {
    pub fn distribution_type(&self) -> DistributionType {
        match self {
            CurveDistribution::Uniform { .. } => DistributionType::Uniform,
            CurveDistribution::Trapezoidal { .. } => DistributionType::Trapezoidal,
        }
    }

    /// (value_1, value_2) columns
    pub fn values(&self) -> (f64, Option<f64>) {
        match *self {
            CurveDistribution::Uniform { value } => (value, None),
            CurveDistribution::Trapezoidal { value_1, value_2 } => (value_1, Some(value_2)),
        }
    }

    fn validate(&self) -> BlueprintsResult<()> {
        let (value_1, value_2) = self.values();
        ensure_finite("value_1", value_1)?;
        if let Some(v) = value_2 {
            ensure_finite("value_2", v)?;
        }
        Ok(())
    }
}

/// Discriminant of [`CurveDistribution`] in SAF rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistributionType {
    Uniform,
    Trapezoidal,
}

/// Load direction: a global/local axis or an explicit vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CurveDirection {
    X,
    Y,
    Z,
    /// `vector_2` is the direction at the end of a trapezoidal load
    Vector {
        vector_1: SafVector,
        vector_2: Option<SafVector>,
    },
}

impl CurveDirection {
    pub fn direction_type(&self) -> CurveDirectionType {
        match self {
            CurveDirection::X => CurveDirectionType::X,
            CurveDirection::Y => CurveDirectionType::Y,
            CurveDirection::Z => CurveDirectionType::Z,
            CurveDirection::Vector { .. } => CurveDirectionType::Vector,
        }
    }
}

/// Discriminant of [`CurveDirection`] in SAF rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveDirectionType {
    X,
    Y,
    Z,
    Vector,
}

/// Discriminant of [`CurveReference`] in SAF rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveForceAction {
    OnBeam,
    OnEdge,
}

/// SAF curve action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StructuralCurveActionInput", into = "StructuralCurveActionInput")]
pub struct StructuralCurveAction {
    id: Option<Uuid>,
    name: String,
    kind: ActionKind,
    target: CurveReference,
    distribution: CurveDistribution,
    direction: CurveDirection,
    load_case: String,
    coordinate_system: CoordinateSystem,
    location: Location,
    extent: Extent,
    eccentricity_ey: f64,
    eccentricity_ez: f64,
}

impl_saf_object!(StructuralCurveAction);

impl StructuralCurveAction {
    /// Full-length action in the global system, measured along the member.
    pub fn new(
        name: impl Into<String>,
        kind: ActionKind,
        target: CurveReference,
        distribution: CurveDistribution,
        direction: CurveDirection,
        load_case: impl Into<String>,
    ) -> BlueprintsResult<Self> {
        let action = StructuralCurveAction {
            id: None,
            name: name.into(),
            kind,
            target,
            distribution,
            direction,
            load_case: load_case.into(),
            coordinate_system: CoordinateSystem::Global,
            location: Location::Length,
            extent: Extent::Full,
            eccentricity_ey: 0.0,
            eccentricity_ez: 0.0,
        };
        action.validate()?;
        Ok(action)
    }

    fn validate(&self) -> BlueprintsResult<()> {
        ensure_name("name", &self.name)?;
        check_reference("load_case", &self.load_case)?;
        self.target.validate()?;
        self.distribution.validate()?;
        if let CurveDirection::Vector { vector_2, .. } = self.direction {
            let condition = "direction is Vector and distribution is Trapezoidal";
            match self.distribution {
                CurveDistribution::Trapezoidal { .. } => {
                    require(vector_2, "vector_2", condition)?;
                }
                CurveDistribution::Uniform { .. } => forbid(&vector_2, "vector_2", "distribution is Uniform")?,
            }
        }
        if self.location == Location::Projection && self.coordinate_system != CoordinateSystem::Global {
            return Err(BlueprintsError::invalid_input(
                "location",
                "Projection",
                "Projected loads are only allowed in the Global coordinate system",
            ));
        }
        self.extent.validate()?;
        ensure_finite("eccentricity_ey", self.eccentricity_ey)?;
        ensure_finite("eccentricity_ez", self.eccentricity_ez)
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

    pub fn with_extent(mut self, extent: Extent) -> BlueprintsResult<Self> {
        self.extent = extent;
        self.validate()?;
        Ok(self)
    }

    /// Eccentricities in mm, local y and z
    pub fn with_eccentricity(mut self, ey: f64, ez: f64) -> BlueprintsResult<Self> {
        self.eccentricity_ey = ey;
        self.eccentricity_ez = ez;
        self.validate()?;
        Ok(self)
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn target(&self) -> &CurveReference {
        &self.target
    }

    pub fn distribution(&self) -> &CurveDistribution {
        &self.distribution
    }

    pub fn direction(&self) -> &CurveDirection {
        &self.direction
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

    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    pub fn eccentricity(&self) -> (f64, f64) {
        (self.eccentricity_ey, self.eccentricity_ez)
    }
}

/// Flat SAF row of a curve action. Vectors are "x;y;z" strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralCurveActionInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub action_type: ActionKind,
    pub force_action: CurveForceAction,
    #[serde(default)]
    pub member: Option<String>,
    #[serde(default)]
    pub member_2d: Option<String>,
    #[serde(default)]
    pub edge: Option<u32>,
    pub distribution: DistributionType,
    pub value_1: f64,
    #[serde(default)]
    pub value_2: Option<f64>,
    pub direction: CurveDirectionType,
    #[serde(default)]
    pub vector_1: Option<String>,
    #[serde(default)]
    pub vector_2: Option<String>,
    pub load_case: String,
    #[serde(default)]
    pub coordinate_system: CoordinateSystem,
    #[serde(default)]
    pub location: Location,
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
    #[serde(default)]
    pub eccentricity_ey: f64,
    #[serde(default)]
    pub eccentricity_ez: f64,
}

impl TryFrom<StructuralCurveActionInput> for StructuralCurveAction {
    type Error = BlueprintsError;

    fn try_from(input: StructuralCurveActionInput) -> BlueprintsResult<Self> {
        let target = match input.force_action {
            CurveForceAction::OnBeam => {
                let condition = "force_action is OnBeam";
                forbid(&input.member_2d, "member_2d", condition)?;
                forbid(&input.edge, "edge", condition)?;
                CurveReference::Member {
                    member: require(input.member, "member", condition)?,
                }
            }
            CurveForceAction::OnEdge => {
                let condition = "force_action is OnEdge";
                forbid(&input.member, "member", condition)?;
                CurveReference::Edge {
                    member_2d: require(input.member_2d, "member_2d", condition)?,
                    edge: require(input.edge, "edge", condition)?,
                }
            }
        };

        let distribution = match input.distribution {
            DistributionType::Uniform => {
                forbid(&input.value_2, "value_2", "distribution is Uniform")?;
                CurveDistribution::Uniform { value: input.value_1 }
            }
            DistributionType::Trapezoidal => CurveDistribution::Trapezoidal {
                value_1: input.value_1,
                value_2: require(input.value_2, "value_2", "distribution is Trapezoidal")?,
            },
        };

        let condition = format!("direction is {:?}", input.direction);
        let direction = match input.direction {
            CurveDirectionType::Vector => {
                let vector_1 = require(input.vector_1, "vector_1", &condition)?;
                CurveDirection::Vector {
                    vector_1: SafVector::parse_field("vector_1", &vector_1)?,
                    vector_2: input
                        .vector_2
                        .map(|v| SafVector::parse_field("vector_2", &v))
                        .transpose()?,
                }
            }
            axis => {
                forbid(&input.vector_1, "vector_1", &condition)?;
                forbid(&input.vector_2, "vector_2", &condition)?;
                match axis {
                    CurveDirectionType::X => CurveDirection::X,
                    CurveDirectionType::Y => CurveDirection::Y,
                    _ => CurveDirection::Z,
                }
            }
        };

        let extent = Extent::from_columns(
            input.extent,
            input.coordinate_definition,
            input.origin,
            input.start_point,
            input.end_point,
        )?;

        let action = StructuralCurveAction {
            id: input.id,
            name: input.name,
            kind: input.action_type,
            target,
            distribution,
            direction,
            load_case: input.load_case,
            coordinate_system: input.coordinate_system,
            location: input.location,
            extent,
            eccentricity_ey: input.eccentricity_ey,
            eccentricity_ez: input.eccentricity_ez,
        };
        action.validate()?;
        Ok(action)
    }
}

impl From<StructuralCurveAction> for StructuralCurveActionInput {
    fn from(action: StructuralCurveAction) -> Self {
        let (force_action, member, member_2d, edge) = match action.target {
            CurveReference::Member { member } => (CurveForceAction::OnBeam, Some(member), None, None),
            CurveReference::Edge { member_2d, edge } => (CurveForceAction::OnEdge, None, Some(member_2d), Some(edge)),
        };
        let (value_1, value_2) = action.distribution.values();
        let (vector_1, vector_2) = match action.direction {
            CurveDirection::Vector { vector_1, vector_2 } => {
                (Some(vector_1.to_string()), vector_2.map(|v| v.to_string()))
            }
            _ => (None, None),
        };
        let (extent, coordinate_definition, origin, start_point, end_point) = action.extent.to_columns();
        StructuralCurveActionInput {
            id: action.id,
            name: action.name,
            action_type: action.kind,
            force_action,
            member,
            member_2d,
            edge,
            distribution: action.distribution.distribution_type(),
            value_1,
            value_2,
            direction: action.direction.direction_type(),
            vector_1,
            vector_2,
            load_case: action.load_case,
            coordinate_system: action.coordinate_system,
            location: action.location,
            extent,
            coordinate_definition,
            origin,
            start_point,
            end_point,
            eccentricity_ey: action.eccentricity_ey,
            eccentricity_ez: action.eccentricity_ez,
        }
    }
}
