//! NEN 9997-1 Table 2.b: characteristic values of soil properties
//!
//! Where the table gives a range, the first value is the low characteristic
//! value ([`Bound::Lower`]) and the second the high one ([`Bound::Upper`]).
//! Compression coefficients run the other way: the lower bound row carries
//! the larger (less favourable) `C_c` and `C_sw`.
//!
//! Undrained shear strength is only tabulated for cohesive soils.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{BlueprintsError, BlueprintsResult};
use crate::units::{Degrees, Mpa};

/// Soil type, admixture and consistency as listed in Table 2.b
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    GravelSlightlySiltyLoose,
    GravelSlightlySiltyModerate,
    GravelSlightlySiltyStiff,
    GravelVerySiltyLoose,
    GravelVerySiltyModerate,
    GravelVerySiltyStiff,
    SandCleanLoose,
    SandCleanModerate,
    SandCleanStiff,
    SandSlightlySiltyClayey,
    SandVerySiltyClayey,
    LoamSlightlySandyWeak,
    LoamSlightlySandyModerate,
    LoamSlightlySandyStiff,
    LoamVerySandy,
    ClayCleanWeak,
    ClayCleanModerate,
    ClayCleanStiff,
    ClaySlightlySandyWeak,
    ClaySlightlySandyModerate,
    ClaySlightlySandyStiff,
    ClayVerySandy,
    ClayOrganicWeak,
    ClayOrganicModerate,
    PeatNotPreloadedWeak,
    PeatModeratelyPreloadedModerate,
}

impl SoilType {
    pub const ALL: [SoilType; 26] = [
        SoilType::GravelSlightlySiltyLoose,
        SoilType::GravelSlightlySiltyModerate,
        SoilType::GravelSlightlySiltyStiff,
        SoilType::GravelVerySiltyLoose,
        SoilType::GravelVerySiltyModerate,
        SoilType::GravelVerySiltyStiff,
        SoilType::SandCleanLoose,
        SoilType::SandCleanModerate,
        SoilType::SandCleanStiff,
        SoilType::SandSlightlySiltyClayey,
        SoilType::SandVerySiltyClayey,
        SoilType::LoamSlightlySandyWeak,
        SoilType::LoamSlightlySandyModerate,
        SoilType::LoamSlightlySandyStiff,
        SoilType::LoamVerySandy,
        SoilType::ClayCleanWeak,
        SoilType::ClayCleanModerate,
        SoilType::ClayCleanStiff,
        SoilType::ClaySlightlySandyWeak,
        SoilType::ClaySlightlySandyModerate,
        SoilType::ClaySlightlySandyStiff,
        SoilType::ClayVerySandy,
        SoilType::ClayOrganicWeak,
        SoilType::ClayOrganicModerate,
        SoilType::PeatNotPreloadedWeak,
        SoilType::PeatModeratelyPreloadedModerate,
    ];

    /// Row label as printed in the standard
    pub fn dutch_name(&self) -> &'static str {
        match self {
            SoilType::GravelSlightlySiltyLoose => "Grind, zwak siltig, los",
            SoilType::GravelSlightlySiltyModerate => "Grind, zwak siltig, matig",
            SoilType::GravelSlightlySiltyStiff => "Grind, zwak siltig, vast",
            SoilType::GravelVerySiltyLoose => "Grind, sterk siltig, los",
            SoilType::GravelVerySiltyModerate => "Grind, sterk siltig, matig",
            SoilType::GravelVerySiltyStiff => "Grind, sterk siltig, vast",
            SoilType::SandCleanLoose => "Zand, schoon, los",
            SoilType::SandCleanModerate => "Zand, schoon, matig",
            SoilType::SandCleanStiff => "Zand, schoon, vast",
            SoilType::SandSlightlySiltyClayey => "Zand, zwak siltig, kleiig",
            SoilType::SandVerySiltyClayey => "Zand, sterk siltig, kleiig",
            SoilType::LoamSlightlySandyWeak => "Leem, zwak zandig, slap",
            SoilType::LoamSlightlySandyModerate => "Leem, zwak zandig, matig",
            SoilType::LoamSlightlySandyStiff => "Leem, zwak zandig, vast",
            SoilType::LoamVerySandy => "Leem, sterk zandig",
            SoilType::ClayCleanWeak => "Klei, schoon, slap",
            SoilType::ClayCleanModerate => "Klei, schoon, matig",
            SoilType::ClayCleanStiff => "Klei, schoon, vast",
            SoilType::ClaySlightlySandyWeak => "Klei, zwak zandig, slap",
            SoilType::ClaySlightlySandyModerate => "Klei, zwak zandig, matig",
            SoilType::ClaySlightlySandyStiff => "Klei, zwak zandig, vast",
            SoilType::ClayVerySandy => "Klei, sterk zandig",
            SoilType::ClayOrganicWeak => "Klei, organisch, slap",
            SoilType::ClayOrganicModerate => "Klei, organisch, matig",
            SoilType::PeatNotPreloadedWeak => "Veen, niet voorbelast, slap",
            SoilType::PeatModeratelyPreloadedModerate => "Veen, matig voorbelast, matig",
        }
    }

    /// Parse a variant name ("SandCleanModerate") or the Dutch row label
    /// ("Zand, schoon, matig"), ignoring case and punctuation.
    pub fn from_str_flexible(s: &str) -> BlueprintsResult<Self> {
        let wanted = normalize(s);
        SoilType::ALL
            .into_iter()
            .find(|t| normalize(&format!("{:?}", t)) == wanted || normalize(t.dutch_name()) == wanted)
            .ok_or_else(|| BlueprintsError::not_found("soil type", s))
    }

    /// Cohesive soils (loam, clay, peat) have an undrained shear strength
    pub fn is_cohesive(&self) -> bool {
        !matches!(
            self,
            SoilType::GravelSlightlySiltyLoose
                | SoilType::GravelSlightlySiltyModerate
                | SoilType::GravelSlightlySiltyStiff
                | SoilType::GravelVerySiltyLoose
                | SoilType::GravelVerySiltyModerate
                | SoilType::GravelVerySiltyStiff
                | SoilType::SandCleanLoose
                | SoilType::SandCleanModerate
                | SoilType::SandCleanStiff
                | SoilType::SandSlightlySiltyClayey
                | SoilType::SandVerySiltyClayey
        )
    }

    /// Characteristic parameters for one end of the tabulated range
    pub fn parameters(&self, bound: Bound) -> BlueprintsResult<&'static SoilParameters> {
        let (lower, upper) = TABLE_2B
            .get(self)
            .ok_or_else(|| BlueprintsError::not_found("soil type", self.dutch_name()))?;
        Ok(match bound {
            Bound::Lower => lower,
            Bound::Upper => upper,
        })
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// End of a tabulated range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Bound {
    /// Low characteristic value
    #[default]
    Lower,
    /// High characteristic value
    Upper,
}

/// Characteristic soil properties for one soil type and bound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilParameters {
    /// Unsaturated volumetric weight γ (kN/m³)
    pub gamma_unsaturated: f64,
    /// Saturated volumetric weight γ_sat (kN/m³)
    pub gamma_saturated: f64,
    /// Cone resistance q_c
    pub cone_resistance: Mpa,
    /// Compression constant C'_p (-)
    pub c_p: f64,
    /// Compression index C_c / (1 + e0) (-)
    pub c_c: f64,
    /// Swelling index C_sw / (1 + e0) (-)
    pub c_sw: f64,
    /// Oedometer stiffness at 100 kPa, E_100
    pub e_100: Mpa,
    /// Effective angle of internal friction φ'
    pub friction_angle: Degrees,
    /// Effective cohesion c' (kPa)
    pub cohesion: f64,
    /// Undrained shear strength f_undr (kPa), cohesive soils only
    pub undrained_shear_strength: Option<f64>,
}

type Range = (f64, f64);

struct Row {
    soil_type: SoilType,
    gamma: Range,
    gamma_sat: Range,
    q_c: f64,
    c_p: Range,
    c_c: Range,
    c_sw: Range,
    e_100: Range,
    phi: Range,
    cohesion: Range,
    f_undr: Option<Range>,
}

const fn v(value: f64) -> Range {
    (value, value)
}

#[rustfmt::skip]
const ROWS: [Row; 26] = [
    Row { soil_type: SoilType::GravelSlightlySiltyLoose, gamma: v(17.0), gamma_sat: v(19.0), q_c: 15.0, c_p: v(500.0), c_c: v(0.0046), c_sw: v(0.0015), e_100: v(45.0), phi: v(32.5), cohesion: v(0.0), f_undr: None },
    Row { soil_type: SoilType::GravelSlightlySiltyModerate, gamma: v(18.0), gamma_sat: v(20.0), q_c: 25.0, c_p: v(1000.0), c_c: v(0.0023), c_sw: v(0.0008), e_100: v(75.0), phi: v(35.0), cohesion: v(0.0), f_undr: None },
    Row { soil_type: SoilType::GravelSlightlySiltyStiff, gamma: (19.0, 20.0), gamma_sat: (21.0, 22.0), q_c: 30.0, c_p: (1200.0, 1400.0), c_c: (0.0019, 0.0016), c_sw: (0.0006, 0.0005), e_100: (90.0, 105.0), phi: (37.5, 40.0), cohesion: v(0.0), f_undr: None },
    Row { soil_type: SoilType::GravelVerySiltyLoose, gamma: v(18.0), gamma_sat: v(20.0), q_c: 10.0, c_p: v(400.0), c_c: v(0.0058), c_sw: v(0.0019), e_100: v(30.0), phi: v(30.0), cohesion: v(0.0), f_undr: None },
    Row { soil_type: SoilType::GravelVerySiltyModerate, gamma: v(19.0), gamma_sat: v(21.0), q_c: 15.0, c_p: v(600.0), c_c: v(0.0038), c_sw: v(0.0013), e_100: v(45.0), phi: v(32.5), cohesion: v(0.0), f_undr: None },
    Row { soil_type: SoilType::GravelVerySiltyStiff, gamma: (20.0, 21.0), gamma_sat: (22.0, 22.5), q_c: 25.0, c_p: (1000.0, 1500.0), c_c: (0.0023, 0.0015), c_sw: (0.0008, 0.0005), e_100: (75.0, 110.0), phi: (35.0, 40.0), cohesion: v(0.0), f_undr: None },
    Row { soil_type: SoilType::SandCleanLoose, gamma: v(17.0), gamma_sat: v(19.0), q_c: 5.0, c_p: v(200.0), c_c: v(0.0115), c_sw: v(0.0038), e_100: v(15.0), phi: v(30.0), cohesion: v(0.0), f_undr: None },
    Row { soil_type: SoilType::SandCleanModerate, gamma: v(18.0), gamma_sat: v(20.0), q_c: 15.0, c_p: v(600.0), c_c: v(0.0038), c_sw: v(0.0013), e_100: v(45.0), phi: v(32.5), cohesion: v(0.0), f_undr: None },
    Row { soil_type: SoilType::SandCleanStiff, gamma: (19.0, 20.0), gamma_sat: (21.0, 22.0), q_c: 25.0, c_p: (1000.0, 1500.0), c_c: (0.0023, 0.0015), c_sw: (0.0008, 0.0005), e_100: (75.0, 110.0), phi: (35.0, 40.0), cohesion: v(0.0), f_undr: None },
    Row { soil_type: SoilType::SandSlightlySiltyClayey, gamma: (18.0, 19.0), gamma_sat: (20.0, 21.0), q_c: 12.0, c_p: (450.0, 650.0), c_c: (0.0051, 0.0035), c_sw: (0.0017, 0.0012), e_100: (35.0, 50.0), phi: (27.0, 32.5), cohesion: v(0.0), f_undr: None },
    Row { soil_type: SoilType::SandVerySiltyClayey, gamma: (18.0, 19.0), gamma_sat: (20.0, 21.0), q_c: 8.0, c_p: (200.0, 400.0), c_c: (0.0115, 0.0058), c_sw: (0.0038, 0.0019), e_100: (15.0, 30.0), phi: (25.0, 30.0), cohesion: v(0.0), f_undr: None },
    Row { soil_type: SoilType::LoamSlightlySandyWeak, gamma: v(19.0), gamma_sat: v(19.0), q_c: 1.0, c_p: v(25.0), c_c: v(0.0920), c_sw: v(0.0307), e_100: v(2.0), phi: (27.5, 30.0), cohesion: v(0.0), f_undr: Some(v(50.0)) },
    Row { soil_type: SoilType::LoamSlightlySandyModerate, gamma: v(20.0), gamma_sat: v(20.0), q_c: 2.0, c_p: v(45.0), c_c: v(0.0511), c_sw: v(0.0170), e_100: v(3.0), phi: (27.5, 32.5), cohesion: v(1.0), f_undr: Some(v(100.0)) },
    Row { soil_type: SoilType::LoamSlightlySandyStiff, gamma: (21.0, 22.0), gamma_sat: (21.0, 22.0), q_c: 3.0, c_p: (70.0, 100.0), c_c: (0.0329, 0.0230), c_sw: (0.0110, 0.0077), e_100: (5.0, 7.0), phi: (27.5, 35.0), cohesion: v(2.5), f_undr: Some((200.0, 300.0)) },
    Row { soil_type: SoilType::LoamVerySandy, gamma: (19.0, 20.0), gamma_sat: (19.0, 20.0), q_c: 2.0, c_p: (45.0, 70.0), c_c: (0.0511, 0.0329), c_sw: (0.0170, 0.0110), e_100: (3.0, 5.0), phi: (27.5, 35.0), cohesion: v(1.0), f_undr: Some((50.0, 100.0)) },
    Row { soil_type: SoilType::ClayCleanWeak, gamma: v(14.0), gamma_sat: v(14.0), q_c: 0.5, c_p: v(7.0), c_c: v(0.3286), c_sw: v(0.1095), e_100: v(1.0), phi: v(17.5), cohesion: v(0.0), f_undr: Some(v(25.0)) },
    Row { soil_type: SoilType::ClayCleanModerate, gamma: v(17.0), gamma_sat: v(17.0), q_c: 1.0, c_p: v(15.0), c_c: v(0.1533), c_sw: v(0.0511), e_100: v(2.0), phi: v(17.5), cohesion: v(5.0), f_undr: Some(v(50.0)) },
    Row { soil_type: SoilType::ClayCleanStiff, gamma: (19.0, 20.0), gamma_sat: (19.0, 20.0), q_c: 2.0, c_p: (25.0, 30.0), c_c: (0.0920, 0.0767), c_sw: (0.0307, 0.0256), e_100: (4.0, 10.0), phi: (17.5, 25.0), cohesion: (13.0, 15.0), f_undr: Some((100.0, 200.0)) },
    Row { soil_type: SoilType::ClaySlightlySandyWeak, gamma: v(15.0), gamma_sat: v(15.0), q_c: 0.7, c_p: v(10.0), c_c: v(0.2300), c_sw: v(0.0767), e_100: v(1.5), phi: v(22.5), cohesion: v(0.0), f_undr: Some(v(40.0)) },
    Row { soil_type: SoilType::ClaySlightlySandyModerate, gamma: v(18.0), gamma_sat: v(18.0), q_c: 1.5, c_p: v(20.0), c_c: v(0.1150), c_sw: v(0.0383), e_100: v(3.0), phi: v(22.5), cohesion: v(5.0), f_undr: Some(v(80.0)) },
    Row { soil_type: SoilType::ClaySlightlySandyStiff, gamma: (20.0, 21.0), gamma_sat: (20.0, 21.0), q_c: 2.5, c_p: (30.0, 50.0), c_c: (0.0767, 0.0460), c_sw: (0.0256, 0.0153), e_100: (5.0, 10.0), phi: (22.5, 27.5), cohesion: (13.0, 15.0), f_undr: Some((120.0, 170.0)) },
    Row { soil_type: SoilType::ClayVerySandy, gamma: (18.0, 20.0), gamma_sat: (18.0, 20.0), q_c: 1.0, c_p: (25.0, 140.0), c_c: (0.0920, 0.0164), c_sw: (0.0307, 0.0055), e_100: (2.0, 5.0), phi: (27.5, 35.0), cohesion: (0.0, 1.0), f_undr: Some((0.0, 10.0)) },
    Row { soil_type: SoilType::ClayOrganicWeak, gamma: v(13.0), gamma_sat: v(13.0), q_c: 0.2, c_p: v(7.5), c_c: v(0.3067), c_sw: v(0.1022), e_100: v(0.5), phi: v(15.0), cohesion: v(0.0), f_undr: Some(v(10.0)) },
    Row { soil_type: SoilType::ClayOrganicModerate, gamma: (15.0, 16.0), gamma_sat: (15.0, 16.0), q_c: 0.5, c_p: (10.0, 15.0), c_c: (0.2300, 0.1533), c_sw: (0.0767, 0.0511), e_100: (1.0, 2.0), phi: v(15.0), cohesion: (0.0, 2.0), f_undr: Some((25.0, 30.0)) },
    Row { soil_type: SoilType::PeatNotPreloadedWeak, gamma: (10.0, 12.0), gamma_sat: (10.0, 12.0), q_c: 0.1, c_p: (5.0, 7.5), c_c: (0.4600, 0.3067), c_sw: (0.1533, 0.1022), e_100: (0.2, 0.5), phi: v(15.0), cohesion: (1.0, 2.5), f_undr: Some((10.0, 20.0)) },
    Row { soil_type: SoilType::PeatModeratelyPreloadedModerate, gamma: (12.0, 13.0), gamma_sat: (12.0, 13.0), q_c: 0.2, c_p: (7.5, 10.0), c_c: (0.3067, 0.2300), c_sw: (0.1022, 0.0767), e_100: (0.5, 1.0), phi: v(15.0), cohesion: (2.5, 5.0), f_undr: Some((20.0, 30.0)) },
];

impl Row {
    fn parameters(&self, pick: fn(Range) -> f64) -> SoilParameters {
        SoilParameters {
            gamma_unsaturated: pick(self.gamma),
            gamma_saturated: pick(self.gamma_sat),
            cone_resistance: Mpa(self.q_c),
            c_p: pick(self.c_p),
            c_c: pick(self.c_c),
            c_sw: pick(self.c_sw),
            e_100: Mpa(pick(self.e_100)),
            friction_angle: Degrees(pick(self.phi)),
            cohesion: pick(self.cohesion),
            undrained_shear_strength: self.f_undr.map(pick),
        }
    }
}

/// (lower, upper) parameters per soil type
static TABLE_2B: Lazy<HashMap<SoilType, (SoilParameters, SoilParameters)>> = Lazy::new(|| {
    ROWS.iter()
        .map(|row| (row.soil_type, (row.parameters(|r| r.0), row.parameters(|r| r.1))))
        .collect()
});
