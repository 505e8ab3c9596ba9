//! # Steel Profiles
//!
//! Parametric steel profiles that assemble themselves into a
//! [`SteelCrossSection`], and the tables of standard rolled sizes.
//!
//! ## Profile Types
//!
//! - **I-profiles** (HEA, HEB, IPE): two flanges, a web and four root fillets
//! - **CHS**: circular hollow sections, one full ring
//! - **Strips**: flat bars, one rectangle
//!
//! ## Corrosion
//!
//! A corrosion allowance `c` removes material from every exposed face, so each
//! thickness, width and diameter shrinks by `2·c`. Strengths keep following the
//! nominal (uncorroded) thickness. Root radii are not changed.
//!
//! ## Example
//!
//! ```rust
//! use blueprints_core::materials::{SteelMaterial, SteelStrengthClass};
//! use blueprints_core::sections::{IProfile, Profile, StandardIProfile};
//!
//! let steel = SteelMaterial::new(SteelStrengthClass::S355);
//! let heb = IProfile::from_standard_profile(StandardIProfile::HEB200, steel, 0.0).unwrap();
//! let area = heb.cross_section().unwrap().area().unwrap();
//! assert!((area - 7808.0).abs() < 1.0);
//! ```

pub mod chs;
pub mod i_profile;
pub mod standard;
pub mod strip;

pub use chs::ChsProfile;
pub use i_profile::IProfile;
pub use standard::{StandardChs, StandardIProfile, StandardProfile, StandardStrip};
pub use strip::StripProfile;

use crate::errors::{BlueprintsError, BlueprintsResult};

use super::SteelCrossSection;

/// A parametric profile that can be assembled into a cross-section
pub trait Profile {
    /// Designation, e.g. "HEB200"
    fn name(&self) -> &str;

    /// Assemble the elements of the profile
    fn cross_section(&self) -> BlueprintsResult<SteelCrossSection>;
}

/// Check a corrosion allowance (mm)
pub(crate) fn check_corrosion(corrosion: f64) -> BlueprintsResult<()> {
    if !corrosion.is_finite() || corrosion < 0.0 {
        return Err(BlueprintsError::invalid_input(
            "corrosion",
            corrosion.to_string(),
            "Corrosion must be zero or a positive value",
        ));
    }
    Ok(())
}

/// Dimension left after corroding both faces
pub(crate) fn corroded(field: &str, nominal: f64, corrosion: f64) -> BlueprintsResult<f64> {
    let remaining = nominal - 2.0 * corrosion;
    if remaining <= 0.0 {
        return Err(BlueprintsError::invalid_input(
            "corrosion",
            corrosion.to_string(),
            format!("The profile is fully corroded: {} of {} mm does not survive", field, nominal),
        ));
    }
    Ok(remaining)
}
