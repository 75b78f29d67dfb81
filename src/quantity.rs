use crate::config::DefaultUnits;
use crate::units::{convert_mass, convert_volume, MassUnit, VolumeUnit};

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Mass,
    Volume,
}

/// g 값을 표시 단위 문자열로 만든다. g/ml은 정수로, 나머지는 소수 둘째 자리까지.
pub fn format_mass(grams: f64, unit: MassUnit) -> String {
    let v = convert_mass(grams, MassUnit::Gram, unit);
    match unit {
        MassUnit::Gram => format!("{v:.0} {}", unit.symbol()),
        _ => format!("{v:.2} {}", unit.symbol()),
    }
}

/// ml 값을 표시 단위 문자열로 만든다.
pub fn format_volume(ml: f64, unit: VolumeUnit) -> String {
    let v = convert_volume(ml, VolumeUnit::Milliliter, unit);
    match unit {
        VolumeUnit::Milliliter => format!("{v:.0} {}", unit.symbol()),
        _ => format!("{v:.2} {}", unit.symbol()),
    }
}

/// 설정된 기본 단위로 표시하는 도우미.
#[derive(Debug, Clone, Copy)]
pub struct UnitFormatter {
    pub mass: MassUnit,
    pub volume: VolumeUnit,
}

impl UnitFormatter {
    pub fn mass(&self, grams: f64) -> String {
        format_mass(grams, self.mass)
    }

    pub fn volume(&self, ml: f64) -> String {
        format_volume(ml, self.volume)
    }
}

impl From<&DefaultUnits> for UnitFormatter {
    fn from(units: &DefaultUnits) -> Self {
        Self {
            mass: units.mass,
            volume: units.volume,
        }
    }
}
