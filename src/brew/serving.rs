//! 디스펜서 서빙 희석 계산.
//!
//! 원액 비율 스냅샷, 디스펜서 용량, 원액 투입량으로부터 필요한 물의 양과
//! 최종 희석비를 구하고, 원하는 서빙 강도에 맞는 권장 배합을 제시한다.

use std::fmt;

use super::presets::ServingStrength;
use super::snapshot::ConcentrateSnapshot;
use super::BrewError;

pub const MIN_CAPACITY_ML: f64 = 100.0;
pub const MAX_CAPACITY_ML: f64 = 1000.0;
/// 원액 최소량이자 물을 위해 남겨두는 최소 여유분.
pub const CONCENTRATE_MARGIN_ML: f64 = 50.0;

/// 서빙 단계 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct ServingSession {
    dispenser_capacity_ml: f64,
    concentrate_ml: f64,
    desired: ServingStrength,
}

impl Default for ServingSession {
    fn default() -> Self {
        Self {
            dispenser_capacity_ml: 500.0,
            concentrate_ml: 200.0,
            desired: ServingStrength::Medium,
        }
    }
}

impl ServingSession {
    /// 범위를 벗어난 값은 clamp하여 세션을 만든다.
    pub fn new(
        dispenser_capacity_ml: f64,
        concentrate_ml: f64,
        desired: ServingStrength,
    ) -> Result<Self, BrewError> {
        Self::for_capacity(dispenser_capacity_ml, Some(concentrate_ml), desired)
    }

    /// 원액량을 주지 않으면 권장 배합으로 시작한다.
    pub fn for_capacity(
        dispenser_capacity_ml: f64,
        concentrate_ml: Option<f64>,
        desired: ServingStrength,
    ) -> Result<Self, BrewError> {
        // 어떤 용량에서도 범위 안에 드는 최소 상태에서 출발한다.
        let mut s = Self {
            dispenser_capacity_ml: MIN_CAPACITY_ML,
            concentrate_ml: CONCENTRATE_MARGIN_ML,
            desired,
        };
        s.set_dispenser_capacity(dispenser_capacity_ml)?;
        match concentrate_ml {
            Some(c) => s.set_concentrate_amount(c)?,
            None => s.apply_recommendation(),
        }
        Ok(s)
    }

    pub fn dispenser_capacity(&self) -> f64 {
        self.dispenser_capacity_ml
    }

    pub fn concentrate_amount(&self) -> f64 {
        self.concentrate_ml
    }

    pub fn desired_strength(&self) -> ServingStrength {
        self.desired
    }

    /// 원액 투입 가능 범위 `[50, 용량-50]`.
    pub fn concentrate_bounds(&self) -> (f64, f64) {
        (
            CONCENTRATE_MARGIN_ML,
            self.dispenser_capacity_ml - CONCENTRATE_MARGIN_ML,
        )
    }

    /// 용량을 ml 단위로 반올림해 `[100, 1000]`으로 제한하고 원액량을 새 범위에 맞춘다.
    pub fn set_dispenser_capacity(&mut self, capacity_ml: f64) -> Result<(), BrewError> {
        if !capacity_ml.is_finite() {
            return Err(BrewError::NotFinite {
                field: "dispenser capacity",
                value: capacity_ml,
            });
        }
        let rounded = capacity_ml.round();
        let clamped = rounded.clamp(MIN_CAPACITY_ML, MAX_CAPACITY_ML);
        if clamped != rounded {
            tracing::warn!(requested = capacity_ml, clamped, "dispenser capacity clamped");
        }
        self.dispenser_capacity_ml = clamped;
        self.clamp_concentrate();
        Ok(())
    }

    /// 원액량은 ml 단위 정수로 반올림한 뒤 범위에 맞춘다.
    pub fn set_concentrate_amount(&mut self, concentrate_ml: f64) -> Result<(), BrewError> {
        if !concentrate_ml.is_finite() {
            return Err(BrewError::NotFinite {
                field: "concentrate",
                value: concentrate_ml,
            });
        }
        self.concentrate_ml = concentrate_ml.round();
        self.clamp_concentrate();
        Ok(())
    }

    pub fn set_desired_strength(&mut self, desired: ServingStrength) {
        self.desired = desired;
    }

    pub fn recommendation(&self) -> Recommendation {
        recommend(self.dispenser_capacity_ml, self.desired)
    }

    /// 권장 원액량을 그대로 투입량으로 사용한다.
    pub fn apply_recommendation(&mut self) {
        self.concentrate_ml = self.recommendation().concentrate_ml;
        self.clamp_concentrate();
    }

    fn clamp_concentrate(&mut self) {
        let (lo, hi) = self.concentrate_bounds();
        let clamped = self.concentrate_ml.clamp(lo, hi);
        if clamped != self.concentrate_ml {
            tracing::warn!(
                requested = self.concentrate_ml,
                clamped,
                "concentrate amount clamped"
            );
            self.concentrate_ml = clamped;
        }
    }
}

/// 서빙 강도에 따른 권장 배합.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub concentrate_ml: f64,
    pub water_ml: f64,
}

/// 원액:물 = 1:m 이면 원액은 전체의 1/(1+m)이다.
pub fn recommend(dispenser_capacity_ml: f64, desired: ServingStrength) -> Recommendation {
    let concentrate_ml = (dispenser_capacity_ml / (1.0 + desired.multiplier())).round();
    Recommendation {
        concentrate_ml,
        water_ml: dispenser_capacity_ml - concentrate_ml,
    }
}

/// 원액 1에 대한 물의 비율 표시.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dilution {
    /// 원액 1 : 물 n (n > 0)
    Parts(f64),
    /// 원액이 용량 이상이라 물이 들어갈 자리가 없음
    Undiluted,
    /// 원액이 0이라 비율 자체가 없음
    Undefined,
}

impl Dilution {
    pub fn from_final_ratio(final_ratio: f64, concentrate_ml: f64) -> Self {
        if concentrate_ml <= 0.0 || !final_ratio.is_finite() {
            return Dilution::Undefined;
        }
        let parts = final_ratio - 1.0;
        if parts > 0.0 {
            Dilution::Parts(parts)
        } else {
            Dilution::Undiluted
        }
    }

    /// "1 part concentrate + x parts water" 형식의 안내 문구.
    pub fn describe(&self) -> String {
        match self {
            Dilution::Parts(p) => format!("1 part concentrate + {p:.1} parts water"),
            Dilution::Undiluted => "concentrate fills the dispenser, no water added".to_string(),
            Dilution::Undefined => "no concentrate, dilution undefined".to_string(),
        }
    }
}

impl fmt::Display for Dilution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dilution::Parts(p) => write!(f, "1:{p:.1}"),
            Dilution::Undiluted => f.write_str("undiluted"),
            Dilution::Undefined => f.write_str("n/a"),
        }
    }
}

/// 서빙 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServingMix {
    pub dispenser_capacity_ml: f64,
    pub concentrate_ml: f64,
    pub water_needed_ml: f64,
    /// 용량/원액. 원액이 0이면 0.
    pub final_ratio: f64,
    /// 원액 비율 × 최종 희석비. 스냅샷이 없으면 0.
    pub effective_strength: f64,
    pub recommended: Recommendation,
    pub dilution: Dilution,
}

impl ServingMix {
    /// 원액이 용량을 넘어 필요한 물이 음수가 되는 경우.
    pub fn is_overfilled(&self) -> bool {
        self.water_needed_ml < 0.0
    }
}

/// 입력값을 그대로 사용하는 순수 계산. 범위 제한은 [`ServingSession`]이 담당한다.
pub fn compute_mix(
    snapshot: Option<&ConcentrateSnapshot>,
    dispenser_capacity_ml: f64,
    concentrate_ml: f64,
    desired: ServingStrength,
) -> ServingMix {
    let water_needed_ml = (dispenser_capacity_ml - concentrate_ml).round();
    let final_ratio = if concentrate_ml > 0.0 {
        dispenser_capacity_ml / concentrate_ml
    } else {
        0.0
    };
    let effective_strength = snapshot.map_or(0.0, |s| s.ratio() * final_ratio);
    ServingMix {
        dispenser_capacity_ml,
        concentrate_ml,
        water_needed_ml,
        final_ratio,
        effective_strength,
        recommended: recommend(dispenser_capacity_ml, desired),
        dilution: Dilution::from_final_ratio(final_ratio, concentrate_ml),
    }
}

pub fn compute_serving(
    snapshot: Option<&ConcentrateSnapshot>,
    serving: &ServingSession,
) -> ServingMix {
    compute_mix(
        snapshot,
        serving.dispenser_capacity(),
        serving.concentrate_amount(),
        serving.desired_strength(),
    )
}
