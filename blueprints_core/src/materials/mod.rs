//! # Materials
//!
//! Material definitions bound to cross-section elements.
//!
//! ## Material Types
//!
//! - **Structural steel**: EN 10025 grades S235 to S460 with thickness
//!   dependent strengths per EN 1993-1-1 Table 3.1
//!
//! ## Example
//!
//! ```rust
//! use blueprints_core::materials::{SteelMaterial, SteelStrengthClass};
//!
//! let steel = SteelMaterial::from_str_flexible("S235").unwrap();
//! assert_eq!(steel.strength_class, SteelStrengthClass::S235);
//! assert_eq!(steel.ultimate_strength(12.0).unwrap().0, 360.0);
//! ```

pub mod steel;

pub use steel::{SteelMaterial, SteelStrengthClass, MAX_NOMINAL_THICKNESS};
