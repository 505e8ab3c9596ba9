//! NEN 9997-1+C2:2017, geotechnical design of structures
//!
//! ## Example
//!
//! ```rust
//! use blueprints_core::eurocode::nen_9997_1::{Bound, SoilType};
//!
//! let sand = SoilType::from_str_flexible("Zand, schoon, matig").unwrap();
//! let params = sand.parameters(Bound::Lower).unwrap();
//! assert_eq!(params.friction_angle.0, 32.5);
//! ```

pub mod table_2b;

pub use table_2b::{Bound, SoilParameters, SoilType};
