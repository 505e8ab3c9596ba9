//! # blueprints_core - Structural Engineering Data Definitions
//!
//! `blueprints_core` holds typed, validated records for structural and
//! geotechnical engineering: SAF (Structural Analysis Format) loads, supports
//! and hinges, NEN 9997-1 soil parameters, and cross-section geometry for
//! rolled steel profiles. All records implement Serialize/Deserialize.
//!
//! ## Design Philosophy
//!
//! - **Validated once**: constructors check every rule and either return a
//!   complete record or a structured error naming the offending field
//! - **Immutable**: records have no setters; builders return new values
//! - **JSON-First**: every record and result serializes with serde
//!
//! ## Quick Start
//!
//! ```rust
//! use blueprints_core::materials::{SteelMaterial, SteelStrengthClass};
//! use blueprints_core::sections::StandardProfile;
//!
//! let profile = StandardProfile::from_name("HEB200").unwrap();
//! let section = profile.build(SteelMaterial::new(SteelStrengthClass::S355), 0.0).unwrap();
//! let area = section.area().unwrap();
//! assert!((area - 7810.0).abs() / 7810.0 < 0.01);
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Primitive shapes (rectangle, partial ring, fillet corner)
//! - [`sections`] - Composite steel cross-sections and standard profiles
//! - [`materials`] - Structural steel strengths (EN 1993-1-1)
//! - [`saf`] - SAF load, support, hinge and node records
//! - [`eurocode`] - NEN 9997-1 soil parameter table
//! - [`settings`] - Meshing settings for plastic section properties
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod errors;
pub mod eurocode;
pub mod geometry;
pub mod materials;
pub mod saf;
pub mod sections;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{BlueprintsError, BlueprintsResult};
pub use geometry::Shape;
pub use settings::SectionSettings;
