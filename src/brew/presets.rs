//! 로스팅 보정, 추출 강도, 서빙 강도 프리셋 테이블.
//! 값은 가정용 콜드브루 기준의 경험치이다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 프리셋 키 문자열을 해석하지 못했을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {key}")]
pub struct UnknownPreset {
    pub kind: &'static str,
    pub key: String,
}

/// 로스팅 단계별 보정값.
#[derive(Debug)]
pub struct RoastAdjustment {
    pub ratio_multiplier: f64,
    /// 침출 시간 범위(시간)
    pub steep_time_hours: &'static str,
    pub notes: &'static str,
}

/// 로스팅 단계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoastLevel {
    Light,
    #[default]
    Medium,
    Dark,
    VeryDark,
}

const LIGHT: RoastAdjustment = RoastAdjustment {
    ratio_multiplier: 0.9,
    steep_time_hours: "20-24",
    notes: "Light roasts extract slower, use slightly less water",
};
const MEDIUM: RoastAdjustment = RoastAdjustment {
    ratio_multiplier: 1.0,
    steep_time_hours: "18-20",
    notes: "Standard extraction time and ratio",
};
const DARK: RoastAdjustment = RoastAdjustment {
    ratio_multiplier: 1.1,
    steep_time_hours: "16-18",
    notes: "Dark roasts extract faster, use slightly more water",
};
const VERY_DARK: RoastAdjustment = RoastAdjustment {
    ratio_multiplier: 1.2,
    steep_time_hours: "14-16",
    notes: "Very dark roasts can become bitter, shorter steep recommended",
};

impl RoastLevel {
    pub const ALL: [RoastLevel; 4] = [
        RoastLevel::Light,
        RoastLevel::Medium,
        RoastLevel::Dark,
        RoastLevel::VeryDark,
    ];

    pub fn adjustment(self) -> &'static RoastAdjustment {
        match self {
            RoastLevel::Light => &LIGHT,
            RoastLevel::Medium => &MEDIUM,
            RoastLevel::Dark => &DARK,
            RoastLevel::VeryDark => &VERY_DARK,
        }
    }

    pub fn ratio_multiplier(self) -> f64 {
        self.adjustment().ratio_multiplier
    }

    pub fn key(self) -> &'static str {
        match self {
            RoastLevel::Light => "light",
            RoastLevel::Medium => "medium",
            RoastLevel::Dark => "dark",
            RoastLevel::VeryDark => "very-dark",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RoastLevel::Light => "Light",
            RoastLevel::Medium => "Medium",
            RoastLevel::Dark => "Dark",
            RoastLevel::VeryDark => "Very Dark",
        }
    }
}

/// 추출(원액) 강도 프리셋 한 줄.
#[derive(Debug)]
pub struct StrengthPreset {
    /// 물(ml) / 커피(g)
    pub ratio: f64,
    /// 서빙 시 권장 희석 안내
    pub dilution: &'static str,
    pub strength: &'static str,
    pub name: &'static str,
}

/// 원액 강도 프리셋.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConcentrateStrength {
    MegaConcentrate,
    #[default]
    Concentrate,
    MediumConcentrate,
    ReadyToDrink,
}

const STRENGTH_PRESETS: [StrengthPreset; 4] = [
    StrengthPreset {
        ratio: 3.0,
        dilution: "1:4-5",
        strength: "Mega Strong",
        name: "Mega Concentrate (1:3)",
    },
    StrengthPreset {
        ratio: 4.0,
        dilution: "1:3-4",
        strength: "Strong",
        name: "Strong Concentrate (1:4)",
    },
    StrengthPreset {
        ratio: 6.0,
        dilution: "1:2-3",
        strength: "Medium",
        name: "Medium Concentrate (1:6)",
    },
    StrengthPreset {
        ratio: 8.0,
        dilution: "Ready to drink",
        strength: "Light-Medium",
        name: "Ready to Drink (1:8)",
    },
];

impl ConcentrateStrength {
    pub const ALL: [ConcentrateStrength; 4] = [
        ConcentrateStrength::MegaConcentrate,
        ConcentrateStrength::Concentrate,
        ConcentrateStrength::MediumConcentrate,
        ConcentrateStrength::ReadyToDrink,
    ];

    pub fn preset(self) -> &'static StrengthPreset {
        let idx = match self {
            ConcentrateStrength::MegaConcentrate => 0,
            ConcentrateStrength::Concentrate => 1,
            ConcentrateStrength::MediumConcentrate => 2,
            ConcentrateStrength::ReadyToDrink => 3,
        };
        &STRENGTH_PRESETS[idx]
    }

    pub fn ratio(self) -> f64 {
        self.preset().ratio
    }

    /// 주어진 비율에 가장 가까운 프리셋. 같은 거리면 더 진한 쪽.
    pub fn nearest(ratio: f64) -> Self {
        let mut best = ConcentrateStrength::MegaConcentrate;
        for s in ConcentrateStrength::ALL {
            if (s.ratio() - ratio).abs() < (best.ratio() - ratio).abs() {
                best = s;
            }
        }
        best
    }

    pub fn key(self) -> &'static str {
        match self {
            ConcentrateStrength::MegaConcentrate => "mega-concentrate",
            ConcentrateStrength::Concentrate => "concentrate",
            ConcentrateStrength::MediumConcentrate => "medium-concentrate",
            ConcentrateStrength::ReadyToDrink => "ready-to-drink",
        }
    }
}

/// 서빙(디스펜서) 희석 강도.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServingStrength {
    Strong,
    #[default]
    Medium,
    Mild,
}

impl ServingStrength {
    pub const ALL: [ServingStrength; 3] = [
        ServingStrength::Strong,
        ServingStrength::Medium,
        ServingStrength::Mild,
    ];

    /// 원액 1에 대한 물의 비율.
    pub fn multiplier(self) -> f64 {
        match self {
            ServingStrength::Strong => 3.0,
            ServingStrength::Medium => 4.0,
            ServingStrength::Mild => 5.0,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ServingStrength::Strong => "strong",
            ServingStrength::Medium => "medium",
            ServingStrength::Mild => "mild",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ServingStrength::Strong => "Strong",
            ServingStrength::Medium => "Medium",
            ServingStrength::Mild => "Mild",
        }
    }
}

fn parse_key<T: Copy>(
    kind: &'static str,
    s: &str,
    all: &[T],
    key: fn(T) -> &'static str,
) -> Result<T, UnknownPreset> {
    let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
    all.iter()
        .copied()
        .find(|v| key(*v) == wanted)
        .ok_or_else(|| UnknownPreset {
            kind,
            key: s.to_string(),
        })
}

impl FromStr for RoastLevel {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key("roast", s, &RoastLevel::ALL, RoastLevel::key)
    }
}

impl FromStr for ConcentrateStrength {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key("strength", s, &ConcentrateStrength::ALL, ConcentrateStrength::key)
    }
}

impl FromStr for ServingStrength {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key("serving strength", s, &ServingStrength::ALL, ServingStrength::key)
    }
}

impl fmt::Display for RoastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ConcentrateStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.preset().name)
    }
}

impl fmt::Display for ServingStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
