//! # Unit Types
//!
//! Type-safe wrappers for the SI units used throughout blueprints_core.
//! They are plain f64 newtypes that serialize as bare numbers.
//!
//! ## Conventions
//!
//! Cross-section geometry is expressed in millimetres (mm, mm², mm³, mm⁴),
//! strengths in MPa (N/mm²), densities in kg/m³ and angles in degrees at the
//! API boundary (radians internally).
//!
//! ## Example
//!
//! ```rust
//! use blueprints_core::units::{Degrees, KgPerM3, Radians, SqMm};
//!
//! let half_turn: Radians = Degrees(180.0).into();
//! assert!((half_turn.0 - std::f64::consts::PI).abs() < 1e-12);
//!
//! let mass = KgPerM3(7850.0) * SqMm(1000.0);
//! assert!((mass.0 - 7.85).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct SqM(pub f64);

impl From<SqMm> for SqM {
    fn from(mm2: SqMm) -> Self {
        SqM(mm2.0 * 1e-6)
    }
}

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

// ============================================================================
// Stress, Density and Mass Units
// ============================================================================

/// Stress in megapascal (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

/// Density in kilograms per cubic metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerM3(pub f64);

/// Mass per unit length in kilograms per metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerM(pub f64);

impl Mul<SqMm> for KgPerM3 {
    type Output = KgPerM;

    /// Mass per metre of a prismatic member: ρ·A with A converted to m².
    fn mul(self, area: SqMm) -> KgPerM {
        KgPerM(self.0 * SqM::from(area).0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(SqMm);
impl_arithmetic!(Degrees);
impl_arithmetic!(Radians);
impl_arithmetic!(Mpa);
impl_arithmetic!(KgPerM3);
impl_arithmetic!(KgPerM);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_millimeters_to_square_meters() {
        let m2: SqM = SqMm(2500.0).into();
        assert!((m2.0 - 0.0025).abs() < 1e-15);
    }

    #[test]
    fn test_degrees_radians() {
        let rad: Radians = Degrees(90.0).into();
        assert!((rad.0 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        let deg: Degrees = rad.into();
        assert!((deg.0 - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_weight_per_meter() {
        // HEB200: A = 7808 mm², steel 7850 kg/m³ -> 61.3 kg/m
        let w = KgPerM3(7850.0) * SqMm(7808.0);
        assert!((w.0 - 61.29).abs() < 0.01, "w = {}", w.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = SqMm(10.0);
        let b = SqMm(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).value(), 5.0);
    }

    #[test]
    fn test_serialization() {
        let deg = Degrees(45.0);
        let json = serde_json::to_string(&deg).unwrap();
        assert_eq!(json, "45.0");

        let roundtrip: Degrees = serde_json::from_str(&json).unwrap();
        assert_eq!(deg, roundtrip);
    }
}
