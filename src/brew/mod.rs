//! 콜드브루 계산 모델 모음.
//! 원액 추출(커피/물 환산), 단계 전환 스냅샷, 디스펜서 서빙 희석 계산으로 구성한다.

pub mod concentrate;
pub mod guide;
pub mod model;
pub mod presets;
pub mod serving;
pub mod snapshot;

pub use concentrate::*;
pub use model::{BrewModel, Phase};
pub use presets::{ConcentrateStrength, RoastLevel, ServingStrength, UnknownPreset};
pub use serving::*;
pub use snapshot::*;

/// 모델 입력 경계에서 발생하는 오류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BrewError {
    /// 커피, 물, 목표 비율 입력이 0 이하이거나 NaN/무한대
    #[error("{field} must be a positive number, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    /// 디스펜서 입력이 NaN/무한대이거나, 계산된 커피/물 양이 무한대로 넘침
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    /// 계산되는(비구동) 필드에 직접 쓰려는 경우
    #[error("{0} amount is calculated in the current mode")]
    DerivedField(InputMode),
    /// 커피량이 0으로 반올림되어 실제 비율을 정의할 수 없음
    #[error("coffee amount is zero, ratio is undefined")]
    UndefinedRatio,
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, BrewError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BrewError::NonPositive { field, value })
    }
}
