use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 ml이며 컵은 US 컵(236.588 ml)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Milliliter,
    Liter,
    FluidOunce,
    Cup,
}

impl VolumeUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::Milliliter => "ml",
            VolumeUnit::Liter => "L",
            VolumeUnit::FluidOunce => "fl oz",
            VolumeUnit::Cup => "cup",
        }
    }
}

fn to_milliliter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Milliliter => value,
        VolumeUnit::Liter => value * 1000.0,
        VolumeUnit::FluidOunce => value * 29.573530,
        VolumeUnit::Cup => value * 236.588237,
    }
}

fn from_milliliter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Milliliter => value,
        VolumeUnit::Liter => value / 1000.0,
        VolumeUnit::FluidOunce => value / 29.573530,
        VolumeUnit::Cup => value / 236.588237,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    from_milliliter(to_milliliter(value, from), to)
}
