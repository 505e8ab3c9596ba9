//! Standard Rolled Profiles
//!
//! Nominal dimensions of European hot rolled sections (EN 10365 for HEA, HEB
//! and IPE; EN 10210-2 for CHS) and common flat bar sizes. All values in mm.

use serde::{Deserialize, Serialize};

use crate::errors::{BlueprintsError, BlueprintsResult};
use crate::materials::SteelMaterial;

use super::{ChsProfile, IProfile, Profile, StripProfile};
use crate::sections::SteelCrossSection;

/// Nominal dimensions of an I-profile (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IProfileDimensions {
    /// Total height h
    pub height: f64,
    /// Flange width b
    pub width: f64,
    /// Web thickness t_w
    pub web_thickness: f64,
    /// Flange thickness t_f
    pub flange_thickness: f64,
    /// Root radius r
    pub radius: f64,
}

/// Standard HEA, HEB and IPE profiles
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardIProfile {
    HEA100,
    HEA120,
    HEA140,
    HEA160,
    HEA180,
    HEA200,
    HEA220,
    HEA240,
    HEA260,
    HEA280,
    HEA300,
    HEB100,
    HEB120,
    HEB140,
    HEB160,
    HEB180,
    HEB200,
    HEB220,
    HEB240,
    HEB260,
    HEB280,
    HEB300,
    IPE80,
    IPE100,
    IPE120,
    IPE140,
    IPE160,
    IPE180,
    IPE200,
    IPE220,
    IPE240,
    IPE270,
    IPE300,
}

impl StandardIProfile {
    pub const ALL: [StandardIProfile; 33] = [
        StandardIProfile::HEA100,
        StandardIProfile::HEA120,
        StandardIProfile::HEA140,
        StandardIProfile::HEA160,
        StandardIProfile::HEA180,
        StandardIProfile::HEA200,
        StandardIProfile::HEA220,
        StandardIProfile::HEA240,
        StandardIProfile::HEA260,
        StandardIProfile::HEA280,
        StandardIProfile::HEA300,
        StandardIProfile::HEB100,
        StandardIProfile::HEB120,
        StandardIProfile::HEB140,
        StandardIProfile::HEB160,
        StandardIProfile::HEB180,
        StandardIProfile::HEB200,
        StandardIProfile::HEB220,
        StandardIProfile::HEB240,
        StandardIProfile::HEB260,
        StandardIProfile::HEB280,
        StandardIProfile::HEB300,
        StandardIProfile::IPE80,
        StandardIProfile::IPE100,
        StandardIProfile::IPE120,
        StandardIProfile::IPE140,
        StandardIProfile::IPE160,
        StandardIProfile::IPE180,
        StandardIProfile::IPE200,
        StandardIProfile::IPE220,
        StandardIProfile::IPE240,
        StandardIProfile::IPE270,
        StandardIProfile::IPE300,
    ];

    /// (h, b, t_w, t_f, r)
    pub fn dimensions(&self) -> IProfileDimensions {
        let (height, width, web_thickness, flange_thickness, radius) = match self {
            StandardIProfile::HEA100 => (96.0, 100.0, 5.0, 8.0, 12.0),
            StandardIProfile::HEA120 => (114.0, 120.0, 5.0, 8.0, 12.0),
            StandardIProfile::HEA140 => (133.0, 140.0, 5.5, 8.5, 12.0),
            StandardIProfile::HEA160 => (152.0, 160.0, 6.0, 9.0, 15.0),
            StandardIProfile::HEA180 => (171.0, 180.0, 6.0, 9.5, 15.0),
            StandardIProfile::HEA200 => (190.0, 200.0, 6.5, 10.0, 18.0),
            StandardIProfile::HEA220 => (210.0, 220.0, 7.0, 11.0, 18.0),
            StandardIProfile::HEA240 => (230.0, 240.0, 7.5, 12.0, 21.0),
            StandardIProfile::HEA260 => (250.0, 260.0, 7.5, 12.5, 24.0),
            StandardIProfile::HEA280 => (270.0, 280.0, 8.0, 13.0, 24.0),
            StandardIProfile::HEA300 => (290.0, 300.0, 8.5, 14.0, 27.0),
            StandardIProfile::HEB100 => (100.0, 100.0, 6.0, 10.0, 12.0),
            StandardIProfile::HEB120 => (120.0, 120.0, 6.5, 11.0, 12.0),
            StandardIProfile::HEB140 => (140.0, 140.0, 7.0, 12.0, 12.0),
            StandardIProfile::HEB160 => (160.0, 160.0, 8.0, 13.0, 15.0),
            StandardIProfile::HEB180 => (180.0, 180.0, 8.5, 14.0, 15.0),
            StandardIProfile::HEB200 => (200.0, 200.0, 9.0, 15.0, 18.0),
            StandardIProfile::HEB220 => (220.0, 220.0, 9.5, 16.0, 18.0),
            StandardIProfile::HEB240 => (240.0, 240.0, 10.0, 17.0, 21.0),
            StandardIProfile::HEB260 => (260.0, 260.0, 10.0, 17.5, 24.0),
            StandardIProfile::HEB280 => (280.0, 280.0, 10.5, 18.0, 24.0),
            StandardIProfile::HEB300 => (300.0, 300.0, 11.0, 19.0, 27.0),
            StandardIProfile::IPE80 => (80.0, 46.0, 3.8, 5.2, 5.0),
            StandardIProfile::IPE100 => (100.0, 55.0, 4.1, 5.7, 7.0),
            StandardIProfile::IPE120 => (120.0, 64.0, 4.4, 6.3, 7.0),
            StandardIProfile::IPE140 => (140.0, 73.0, 4.7, 6.9, 7.0),
            StandardIProfile::IPE160 => (160.0, 82.0, 5.0, 7.4, 9.0),
            StandardIProfile::IPE180 => (180.0, 91.0, 5.3, 8.0, 9.0),
            StandardIProfile::IPE200 => (200.0, 100.0, 5.6, 8.5, 12.0),
            StandardIProfile::IPE220 => (220.0, 110.0, 5.9, 9.2, 12.0),
            StandardIProfile::IPE240 => (240.0, 120.0, 6.2, 9.8, 15.0),
            StandardIProfile::IPE270 => (270.0, 135.0, 6.6, 10.2, 15.0),
            StandardIProfile::IPE300 => (300.0, 150.0, 7.1, 10.7, 15.0),
        };
        IProfileDimensions {
            height,
            width,
            web_thickness,
            flange_thickness,
            radius,
        }
    }

    /// Designation, e.g. "HEB200"
    pub fn name(&self) -> String {
        format!("{:?}", self)
    }

    pub fn from_str_flexible(s: &str) -> BlueprintsResult<Self> {
        let normalized = normalize(s);
        Self::ALL
            .into_iter()
            .find(|p| p.name() == normalized)
            .ok_or_else(|| BlueprintsError::not_found("I-profile", s))
    }
}

impl std::fmt::Display for StandardIProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Standard circular hollow sections (outer diameter x wall thickness)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardChs {
    /// CHS 21.3x2.3
    Chs21_3x2_3,
    /// CHS 33.7x3.2
    Chs33_7x3_2,
    /// CHS 48.3x3.2
    Chs48_3x3_2,
    /// CHS 60.3x4
    Chs60_3x4,
    /// CHS 88.9x5
    Chs88_9x5,
    /// CHS 114.3x6.3
    Chs114_3x6_3,
    /// CHS 168.3x8
    Chs168_3x8,
    /// CHS 219.1x10
    Chs219_1x10,
    /// CHS 273x10
    Chs273x10,
    /// CHS 323.9x12.5
    Chs323_9x12_5,
}

impl StandardChs {
    pub const ALL: [StandardChs; 10] = [
        StandardChs::Chs21_3x2_3,
        StandardChs::Chs33_7x3_2,
        StandardChs::Chs48_3x3_2,
        StandardChs::Chs60_3x4,
        StandardChs::Chs88_9x5,
        StandardChs::Chs114_3x6_3,
        StandardChs::Chs168_3x8,
        StandardChs::Chs219_1x10,
        StandardChs::Chs273x10,
        StandardChs::Chs323_9x12_5,
    ];

    /// (outer diameter, wall thickness)
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            StandardChs::Chs21_3x2_3 => (21.3, 2.3),
            StandardChs::Chs33_7x3_2 => (33.7, 3.2),
            StandardChs::Chs48_3x3_2 => (48.3, 3.2),
            StandardChs::Chs60_3x4 => (60.3, 4.0),
            StandardChs::Chs88_9x5 => (88.9, 5.0),
            StandardChs::Chs114_3x6_3 => (114.3, 6.3),
            StandardChs::Chs168_3x8 => (168.3, 8.0),
            StandardChs::Chs219_1x10 => (219.1, 10.0),
            StandardChs::Chs273x10 => (273.0, 10.0),
            StandardChs::Chs323_9x12_5 => (323.9, 12.5),
        }
    }

    /// Designation, e.g. "CHS168.3x8"
    pub fn name(&self) -> String {
        let (d, t) = self.dimensions();
        format!("CHS{}x{}", d, t)
    }

    pub fn from_str_flexible(s: &str) -> BlueprintsResult<Self> {
        let normalized = normalize(s);
        Self::ALL
            .into_iter()
            .find(|p| normalize(&p.name()) == normalized)
            .ok_or_else(|| BlueprintsError::not_found("CHS profile", s))
    }
}

impl std::fmt::Display for StandardChs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Standard flat bars (width x thickness)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardStrip {
    Strip100x10,
    Strip120x12,
    Strip150x15,
    Strip160x8,
    Strip200x10,
    Strip200x20,
    Strip250x25,
    Strip300x30,
}

impl StandardStrip {
    pub const ALL: [StandardStrip; 8] = [
        StandardStrip::Strip100x10,
        StandardStrip::Strip120x12,
        StandardStrip::Strip150x15,
        StandardStrip::Strip160x8,
        StandardStrip::Strip200x10,
        StandardStrip::Strip200x20,
        StandardStrip::Strip250x25,
        StandardStrip::Strip300x30,
    ];

    /// (width, thickness)
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            StandardStrip::Strip100x10 => (100.0, 10.0),
            StandardStrip::Strip120x12 => (120.0, 12.0),
            StandardStrip::Strip150x15 => (150.0, 15.0),
            StandardStrip::Strip160x8 => (160.0, 8.0),
            StandardStrip::Strip200x10 => (200.0, 10.0),
            StandardStrip::Strip200x20 => (200.0, 20.0),
            StandardStrip::Strip250x25 => (250.0, 25.0),
            StandardStrip::Strip300x30 => (300.0, 30.0),
        }
    }

    /// Designation, e.g. "STRIP200x10"
    pub fn name(&self) -> String {
        let (w, t) = self.dimensions();
        format!("STRIP{}x{}", w, t)
    }

    pub fn from_str_flexible(s: &str) -> BlueprintsResult<Self> {
        let normalized = normalize(s);
        Self::ALL
            .into_iter()
            .find(|p| normalize(&p.name()) == normalized)
            .ok_or_else(|| BlueprintsError::not_found("strip profile", s))
    }
}

impl std::fmt::Display for StandardStrip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Any standard profile, looked up by designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "family", content = "profile")]
pub enum StandardProfile {
    I(StandardIProfile),
    Chs(StandardChs),
    Strip(StandardStrip),
}

impl StandardProfile {
    /// Every standard profile, I-profiles first
    pub fn all() -> impl Iterator<Item = StandardProfile> {
        StandardIProfile::ALL
            .into_iter()
            .map(StandardProfile::I)
            .chain(StandardChs::ALL.into_iter().map(StandardProfile::Chs))
            .chain(StandardStrip::ALL.into_iter().map(StandardProfile::Strip))
    }

    /// Look up "HEB200", "ipe 300", "CHS 168.3x8", "strip200x10", ...
    pub fn from_name(s: &str) -> BlueprintsResult<Self> {
        let normalized = normalize(s);
        Self::all()
            .find(|p| normalize(&p.name()) == normalized)
            .ok_or_else(|| BlueprintsError::not_found("standard profile", s))
    }

    pub fn name(&self) -> String {
        match self {
            StandardProfile::I(p) => p.name(),
            StandardProfile::Chs(p) => p.name(),
            StandardProfile::Strip(p) => p.name(),
        }
    }

    /// Family label for listings
    pub fn family(&self) -> &'static str {
        match self {
            StandardProfile::I(_) => "I-profile",
            StandardProfile::Chs(_) => "CHS",
            StandardProfile::Strip(_) => "Strip",
        }
    }

    /// Build the cross-section in the given steel with a corrosion allowance (mm)
    pub fn build(&self, material: SteelMaterial, corrosion: f64) -> BlueprintsResult<SteelCrossSection> {
        match self {
            StandardProfile::I(p) => IProfile::from_standard_profile(*p, material, corrosion)?.cross_section(),
            StandardProfile::Chs(p) => ChsProfile::from_standard_profile(*p, material, corrosion)?.cross_section(),
            StandardProfile::Strip(p) => StripProfile::from_standard_profile(*p, material, corrosion)?.cross_section(),
        }
    }
}

impl std::fmt::Display for StandardProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn normalize(s: &str) -> String {
    s.to_uppercase().replace([' ', '_', '-'], "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i_profile_lookup() {
        assert_eq!(StandardIProfile::from_str_flexible("HEB200").unwrap(), StandardIProfile::HEB200);
        assert_eq!(StandardIProfile::from_str_flexible("ipe 300").unwrap(), StandardIProfile::IPE300);
        assert_eq!(StandardIProfile::from_str_flexible("HE-A-100").unwrap(), StandardIProfile::HEA100);
        assert!(StandardIProfile::from_str_flexible("HEB999").is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(StandardIProfile::HEB200.name(), "HEB200");
        assert_eq!(StandardChs::Chs168_3x8.name(), "CHS168.3x8");
        assert_eq!(StandardChs::Chs60_3x4.name(), "CHS60.3x4");
        assert_eq!(StandardStrip::Strip200x10.name(), "STRIP200x10");
    }

    #[test]
    fn test_profile_lookup_by_name() {
        assert_eq!(StandardProfile::from_name("CHS 168.3x8").unwrap(), StandardProfile::Chs(StandardChs::Chs168_3x8));
        assert_eq!(StandardProfile::from_name("strip200x10").unwrap(), StandardProfile::Strip(StandardStrip::Strip200x10));
        assert_eq!(StandardProfile::from_name("heb 200").unwrap(), StandardProfile::I(StandardIProfile::HEB200));
        let err = StandardProfile::from_name("UPN200").unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_names_unique() {
        let names: std::collections::HashSet<String> = StandardProfile::all().map(|p| p.name()).collect();
        assert_eq!(names.len(), StandardProfile::all().count());
    }

    #[test]
    fn test_table_dimensions_are_consistent() {
        for profile in StandardIProfile::ALL {
            let d = profile.dimensions();
            assert!(d.height > 2.0 * d.flange_thickness + 2.0 * d.radius, "{}", profile);
            assert!(d.width > d.web_thickness + 2.0 * d.radius, "{}", profile);
        }
        for chs in StandardChs::ALL {
            let (d, t) = chs.dimensions();
            assert!(t < d / 2.0, "{}", chs);
        }
    }

    #[test]
    fn test_serialization() {
        let profile = StandardProfile::I(StandardIProfile::IPE200);
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"family":"I","profile":"IPE200"}"#);
        let back: StandardProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }
}
