use serde::{Deserialize, Serialize};

use super::concentrate::BrewSession;
use super::presets::ConcentrateStrength;
use super::{require_positive, BrewError};

/// 추출 완료 시점의 원액 정보. 서빙 단계는 이 값만 읽는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcentrateSnapshot {
    ratio: f64,
    strength: ConcentrateStrength,
}

impl ConcentrateSnapshot {
    /// 추출 기록 없이 프리셋으로 원액을 지정한다.
    pub fn from_preset(strength: ConcentrateStrength) -> Self {
        Self {
            ratio: strength.ratio(),
            strength,
        }
    }

    /// 비율만 알고 있을 때. 라벨은 가장 가까운 프리셋으로 정한다.
    pub fn from_ratio(ratio: f64) -> Result<Self, BrewError> {
        let ratio = require_positive("ratio", ratio)?;
        Ok(Self {
            ratio,
            strength: ConcentrateStrength::nearest(ratio),
        })
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn strength(&self) -> ConcentrateStrength {
        self.strength
    }
}

/// 현재 세션의 실제 비율과 프리셋 라벨을 고정한다.
pub fn finalize_concentrate(session: &BrewSession) -> Result<ConcentrateSnapshot, BrewError> {
    let ratio = session.actual_ratio().ok_or(BrewError::UndefinedRatio)?;
    Ok(ConcentrateSnapshot {
        ratio,
        strength: session.strength(),
    })
}
