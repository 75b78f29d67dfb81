use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    /// 알 수 없는 물리량 이름
    #[error("unsupported quantity: {0}")]
    UnsupportedQuantity(String),
}

/// 물리량 이름(`mass`, `volume`)을 해석한다.
pub fn parse_quantity(s: &str) -> Result<QuantityKind, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "mass" | "m" | "coffee" => Ok(QuantityKind::Mass),
        "volume" | "v" | "water" => Ok(QuantityKind::Volume),
        _ => Err(ConversionError::UnsupportedQuantity(s.to_string())),
    }
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `g`, `oz`, `lb`, `ml`, `L`, `fl oz`, `cup` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Mass => {
            let from = parse_mass_unit(from_unit_str)?;
            let to = parse_mass_unit(to_unit_str)?;
            Ok(convert_mass(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
    }
}

pub fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "g" | "gram" | "grams" => Ok(MassUnit::Gram),
        "kg" | "kilogram" => Ok(MassUnit::Kilogram),
        "oz" | "ounce" | "ounces" => Ok(MassUnit::Ounce),
        "lb" | "lbs" | "pound" => Ok(MassUnit::Pound),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "ml" | "milliliter" | "millilitre" => Ok(VolumeUnit::Milliliter),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "fl oz" | "floz" | "fl-oz" | "fluid ounce" => Ok(VolumeUnit::FluidOunce),
        "cup" | "cups" => Ok(VolumeUnit::Cup),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
