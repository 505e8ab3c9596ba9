//! Structural Steel (EN 1993-1-1)
//!
//! Hot rolled structural steel per EN 10025-2 / EN 10025-4, with nominal yield
//! and ultimate strengths from EN 1993-1-1 Table 3.1. Strengths depend on the
//! nominal thickness of the element:
//!
//! | Class | f_y (t ≤ 40) | f_u (t ≤ 40) | f_y (40 < t ≤ 80) | f_u (40 < t ≤ 80) |
//! |-------|--------------|--------------|-------------------|-------------------|
//! | S235  | 235          | 360          | 215               | 360               |
//! | S275  | 275          | 430          | 255               | 410               |
//! | S355  | 355          | 490          | 335               | 470               |
//! | S420  | 420          | 520          | 390               | 520               |
//! | S450  | 440          | 550          | 410               | 550               |
//! | S460  | 460          | 540          | 430               | 530               |
//!
//! ## Example
//!
//! ```rust
//! use blueprints_core::materials::{SteelMaterial, SteelStrengthClass};
//!
//! let steel = SteelMaterial::new(SteelStrengthClass::S355);
//! assert_eq!(steel.yield_strength(15.0).unwrap().0, 355.0);
//! assert_eq!(steel.yield_strength(50.0).unwrap().0, 335.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BlueprintsError, BlueprintsResult};
use crate::units::{KgPerM3, Mpa};

/// Largest nominal thickness covered by Table 3.1 (mm)
pub const MAX_NOMINAL_THICKNESS: f64 = 80.0;

/// Thickness boundary between the two Table 3.1 columns (mm)
const THICKNESS_STEP: f64 = 40.0;

/// Steel grade per EN 10025
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelStrengthClass {
    S235,
    S275,
    S355,
    S420,
    S450,
    S460,
}

impl SteelStrengthClass {
    /// All strength classes for iteration
    pub const ALL: [SteelStrengthClass; 6] = [
        SteelStrengthClass::S235,
        SteelStrengthClass::S275,
        SteelStrengthClass::S355,
        SteelStrengthClass::S420,
        SteelStrengthClass::S450,
        SteelStrengthClass::S460,
    ];

    /// Parse from a grade string ("S355", "s355", "355", "S355J2")
    pub fn from_str_flexible(s: &str) -> BlueprintsResult<Self> {
        let normalized = s.trim().to_uppercase();
        let digits: String = normalized
            .trim_start_matches('S')
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        match digits.as_str() {
            "235" => Ok(SteelStrengthClass::S235),
            "275" => Ok(SteelStrengthClass::S275),
            "355" => Ok(SteelStrengthClass::S355),
            "420" => Ok(SteelStrengthClass::S420),
            "450" => Ok(SteelStrengthClass::S450),
            "460" => Ok(SteelStrengthClass::S460),
            _ => Err(BlueprintsError::not_found("steel strength class", s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelStrengthClass::S235 => "S235",
            SteelStrengthClass::S275 => "S275",
            SteelStrengthClass::S355 => "S355",
            SteelStrengthClass::S420 => "S420",
            SteelStrengthClass::S450 => "S450",
            SteelStrengthClass::S460 => "S460",
        }
    }

    /// (f_y, f_u) in MPa for t ≤ 40 mm and for 40 < t ≤ 80 mm
    fn table_values(&self) -> [(f64, f64); 2] {
        match self {
            SteelStrengthClass::S235 => [(235.0, 360.0), (215.0, 360.0)],
            SteelStrengthClass::S275 => [(275.0, 430.0), (255.0, 410.0)],
            SteelStrengthClass::S355 => [(355.0, 490.0), (335.0, 470.0)],
            SteelStrengthClass::S420 => [(420.0, 520.0), (390.0, 520.0)],
            SteelStrengthClass::S450 => [(440.0, 550.0), (410.0, 550.0)],
            SteelStrengthClass::S460 => [(460.0, 540.0), (430.0, 530.0)],
        }
    }

    fn strengths_for(&self, thickness: f64) -> BlueprintsResult<(f64, f64)> {
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(BlueprintsError::invalid_input(
                "thickness",
                thickness.to_string(),
                "Nominal thickness must be a positive value",
            ));
        }
        if thickness > MAX_NOMINAL_THICKNESS {
            return Err(BlueprintsError::invalid_input(
                "thickness",
                thickness.to_string(),
                format!(
                    "No strength values for {} above {} mm nominal thickness",
                    self.display_name(),
                    MAX_NOMINAL_THICKNESS
                ),
            ));
        }
        let [thin, thick] = self.table_values();
        Ok(if thickness <= THICKNESS_STEP { thin } else { thick })
    }
}

impl std::fmt::Display for SteelStrengthClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Structural steel with its physical constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelMaterial {
    pub strength_class: SteelStrengthClass,
    /// Density ρ (kg/m³)
    #[serde(default = "default_density")]
    pub density: KgPerM3,
    /// Modulus of elasticity E (MPa)
    #[serde(default = "default_e_modulus")]
    pub e_modulus: Mpa,
    /// Poisson's ratio ν
    #[serde(default = "default_poisson_ratio")]
    pub poisson_ratio: f64,
}

fn default_density() -> KgPerM3 {
    KgPerM3(7850.0)
}

fn default_e_modulus() -> Mpa {
    Mpa(210_000.0)
}

fn default_poisson_ratio() -> f64 {
    0.3
}

impl SteelMaterial {
    /// Steel of the given class with EN 1993-1-1 §3.2.6 constants
    pub fn new(strength_class: SteelStrengthClass) -> Self {
        SteelMaterial {
            strength_class,
            density: default_density(),
            e_modulus: default_e_modulus(),
            poisson_ratio: default_poisson_ratio(),
        }
    }

    pub fn from_str_flexible(s: &str) -> BlueprintsResult<Self> {
        Ok(Self::new(SteelStrengthClass::from_str_flexible(s)?))
    }

    /// Nominal yield strength f_y for an element of the given thickness (mm)
    pub fn yield_strength(&self, thickness: f64) -> BlueprintsResult<Mpa> {
        self.strength_class.strengths_for(thickness).map(|(fy, _)| Mpa(fy))
    }

    /// Nominal ultimate tensile strength f_u for an element of the given thickness (mm)
    pub fn ultimate_strength(&self, thickness: f64) -> BlueprintsResult<Mpa> {
        self.strength_class.strengths_for(thickness).map(|(_, fu)| Mpa(fu))
    }

    /// Shear modulus G = E / (2(1 + ν))
    pub fn shear_modulus(&self) -> Mpa {
        Mpa(self.e_modulus.0 / (2.0 * (1.0 + self.poisson_ratio)))
    }

    pub fn display_name(&self) -> String {
        format!("Steel {}", self.strength_class)
    }
}

impl Default for SteelMaterial {
    fn default() -> Self {
        SteelMaterial::new(SteelStrengthClass::S355)
    }
}

impl std::fmt::Display for SteelMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
