use serde::{Deserialize, Serialize};
use std::fmt;

use super::presets::{ConcentrateStrength, RoastLevel};
use super::{require_positive, BrewError};

/// 원두가 물을 머금고 남는 액체 회수율.
pub const LIQUID_RECOVERY: f64 = 0.85;

/// 사용자가 직접 조절하는 쪽.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Coffee,
    Water,
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Coffee => f.write_str("coffee"),
            InputMode::Water => f.write_str("water"),
        }
    }
}

/// 원액 추출 단계의 입력 상태.
///
/// 모든 setter는 계산값이 유한한지 확인한 뒤 [`BrewSession::recompute`]를 거쳐
/// 반영하므로 비구동 필드는 항상 구동 필드와 일치하고 유한하다.
#[derive(Debug, Clone, PartialEq)]
pub struct BrewSession {
    input_mode: InputMode,
    coffee_g: f64,
    water_ml: f64,
    target_ratio: f64,
    roast: RoastLevel,
    strength: ConcentrateStrength,
}

impl Default for BrewSession {
    fn default() -> Self {
        let mut s = Self {
            input_mode: InputMode::Coffee,
            coffee_g: 150.0,
            water_ml: 600.0,
            target_ratio: ConcentrateStrength::Concentrate.ratio(),
            roast: RoastLevel::Medium,
            strength: ConcentrateStrength::Concentrate,
        };
        s.recompute();
        s
    }
}

/// 원액 계산 결과 요약.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConcentrateSummary {
    pub input_mode: InputMode,
    pub coffee_g: f64,
    pub water_ml: f64,
    /// 로스팅 보정이 반영된 목표 비율
    pub adjusted_ratio: f64,
    /// 물/커피. 커피가 0이면 None.
    pub actual_ratio: Option<f64>,
    pub estimated_yield_ml: f64,
}

impl ConcentrateSummary {
    /// 구동 필드로부터 계산된 값.
    pub fn derived_value(&self) -> f64 {
        match self.input_mode {
            InputMode::Coffee => self.water_ml,
            InputMode::Water => self.coffee_g,
        }
    }
}

impl BrewSession {
    /// 커피량을 기준으로 새 세션을 만든다.
    pub fn from_coffee(
        coffee_g: f64,
        strength: ConcentrateStrength,
        roast: RoastLevel,
    ) -> Result<Self, BrewError> {
        let mut s = Self {
            strength,
            target_ratio: strength.ratio(),
            roast,
            ..Self::default()
        };
        s.set_coffee_amount(coffee_g)?;
        Ok(s)
    }

    /// 물량을 기준으로 새 세션을 만든다.
    pub fn from_water(
        water_ml: f64,
        strength: ConcentrateStrength,
        roast: RoastLevel,
    ) -> Result<Self, BrewError> {
        let mut s = Self {
            strength,
            target_ratio: strength.ratio(),
            roast,
            ..Self::default()
        };
        s.set_input_mode(InputMode::Water)?;
        s.set_water_amount(water_ml)?;
        Ok(s)
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn coffee_amount(&self) -> f64 {
        self.coffee_g
    }

    pub fn water_amount(&self) -> f64 {
        self.water_ml
    }

    pub fn target_ratio(&self) -> f64 {
        self.target_ratio
    }

    pub fn roast_level(&self) -> RoastLevel {
        self.roast
    }

    pub fn strength(&self) -> ConcentrateStrength {
        self.strength
    }

    pub fn adjusted_ratio(&self) -> f64 {
        self.target_ratio * self.roast.ratio_multiplier()
    }

    /// 실제 물/커피 비율. 커피량이 0이면 정의되지 않는다.
    pub fn actual_ratio(&self) -> Option<f64> {
        if self.coffee_g > 0.0 {
            Some(self.water_ml / self.coffee_g)
        } else {
            None
        }
    }

    /// 예상 원액 회수량(ml).
    pub fn estimated_yield(&self) -> f64 {
        (self.water_ml * LIQUID_RECOVERY).round()
    }

    pub fn set_input_mode(&mut self, mode: InputMode) -> Result<(), BrewError> {
        self.commit(Self {
            input_mode: mode,
            ..self.clone()
        })
    }

    pub fn set_coffee_amount(&mut self, coffee_g: f64) -> Result<(), BrewError> {
        if self.input_mode != InputMode::Coffee {
            return Err(BrewError::DerivedField(InputMode::Coffee));
        }
        self.commit(Self {
            coffee_g: require_positive("coffee", coffee_g)?,
            ..self.clone()
        })
    }

    pub fn set_water_amount(&mut self, water_ml: f64) -> Result<(), BrewError> {
        if self.input_mode != InputMode::Water {
            return Err(BrewError::DerivedField(InputMode::Water));
        }
        self.commit(Self {
            water_ml: require_positive("water", water_ml)?,
            ..self.clone()
        })
    }

    /// 프리셋을 선택하면 목표 비율도 함께 바뀐다.
    pub fn select_strength(&mut self, strength: ConcentrateStrength) -> Result<(), BrewError> {
        self.commit(Self {
            strength,
            target_ratio: strength.ratio(),
            ..self.clone()
        })
    }

    /// 프리셋 대신 임의의 목표 비율을 지정한다. 프리셋 라벨은 유지된다.
    pub fn set_target_ratio(&mut self, ratio: f64) -> Result<(), BrewError> {
        self.commit(Self {
            target_ratio: require_positive("ratio", ratio)?,
            ..self.clone()
        })
    }

    pub fn set_roast_level(&mut self, roast: RoastLevel) -> Result<(), BrewError> {
        self.commit(Self {
            roast,
            ..self.clone()
        })
    }

    /// 구동 필드로부터 비구동 필드 값을 구한다.
    fn derived_value(&self) -> f64 {
        let adjusted = self.adjusted_ratio();
        match self.input_mode {
            InputMode::Coffee => (self.coffee_g * adjusted).round(),
            InputMode::Water => (self.water_ml / adjusted).round(),
        }
    }

    /// 새 입력 상태의 계산값이 유한할 때만 반영한다. 실패하면 기존 상태를 유지한다.
    fn commit(&mut self, mut next: Self) -> Result<(), BrewError> {
        let value = next.derived_value();
        if !value.is_finite() {
            let field = match next.input_mode {
                InputMode::Coffee => "water",
                InputMode::Water => "coffee",
            };
            tracing::warn!(field, "derived amount overflowed, input rejected");
            return Err(BrewError::NotFinite { field, value });
        }
        next.recompute();
        *self = next;
        Ok(())
    }

    /// 비구동 필드를 구동 필드에 맞춰 다시 계산한다.
    ///
    /// 결과는 구동 필드에만 의존하므로 여러 번 호출해도 값이 변하지 않는다.
    pub fn recompute(&mut self) {
        let derived = self.derived_value();
        match self.input_mode {
            InputMode::Coffee => self.water_ml = derived,
            InputMode::Water => self.coffee_g = derived,
        }
        tracing::debug!(
            mode = %self.input_mode,
            coffee_g = self.coffee_g,
            water_ml = self.water_ml,
            adjusted = self.adjusted_ratio(),
            "concentrate recomputed"
        );
    }

    pub fn summary(&self) -> ConcentrateSummary {
        ConcentrateSummary {
            input_mode: self.input_mode,
            coffee_g: self.coffee_g,
            water_ml: self.water_ml,
            adjusted_ratio: self.adjusted_ratio(),
            actual_ratio: self.actual_ratio(),
            estimated_yield_ml: self.estimated_yield(),
        }
    }
}

/// 세션을 재계산하고 요약을 돌려준다.
pub fn compute_concentrate(session: &mut BrewSession) -> ConcentrateSummary {
    session.recompute();
    session.summary()
}

/// `1:4.0` 형태로 비율을 표시한다. 정의되지 않으면 `1:—`.
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("1:{r:.1}"),
        None => "1:—".to_string(),
    }
}
