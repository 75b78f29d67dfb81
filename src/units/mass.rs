use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 g이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Gram,
    Kilogram,
    Ounce,
    Pound,
}

impl MassUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            MassUnit::Gram => "g",
            MassUnit::Kilogram => "kg",
            MassUnit::Ounce => "oz",
            MassUnit::Pound => "lb",
        }
    }
}

fn to_gram(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Gram => value,
        MassUnit::Kilogram => value * 1000.0,
        MassUnit::Ounce => value * 28.349523,
        MassUnit::Pound => value * 453.59237,
    }
}

fn from_gram(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Gram => value,
        MassUnit::Kilogram => value / 1000.0,
        MassUnit::Ounce => value / 28.349523,
        MassUnit::Pound => value / 453.59237,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    from_gram(to_gram(value, from), to)
}
