//! 표시 단위 정의 및 변환. 계산 모델은 항상 g, ml 기준이다.

pub mod mass;
pub mod volume;

pub use mass::{convert_mass, MassUnit};
pub use volume::{convert_volume, VolumeUnit};
