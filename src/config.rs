use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::brew::{
    BrewError, BrewModel, BrewSession, ConcentrateStrength, RoastLevel, ServingSession,
    ServingStrength,
};
use crate::units::*;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "cold_brew.toml";

/// 사용 가능한 표시 단위 시스템 프리셋.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    /// g, ml. 내부 계산 기준.
    #[default]
    Metric,
    /// oz, fl oz
    Imperial,
}

/// 물리량별 표시 단위.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub mass: MassUnit,
    pub volume: VolumeUnit,
}

impl DefaultUnits {
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Metric => Self {
                mass: MassUnit::Gram,
                volume: VolumeUnit::Milliliter,
            },
            UnitSystem::Imperial => Self {
                mass: MassUnit::Ounce,
                volume: VolumeUnit::FluidOunce,
            },
        }
    }
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::Metric)
    }
}

/// 새 세션을 시작할 때 쓰는 초기값. 세션 진행 상태는 저장하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionDefaults {
    pub coffee_g: f64,
    pub roast: RoastLevel,
    pub strength: ConcentrateStrength,
    pub dispenser_capacity_ml: f64,
    pub concentrate_ml: f64,
    pub serving_strength: ServingStrength,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            coffee_g: 150.0,
            roast: RoastLevel::Medium,
            strength: ConcentrateStrength::Concentrate,
            dispenser_capacity_ml: 500.0,
            concentrate_ml: 200.0,
            serving_strength: ServingStrength::Medium,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
    pub defaults: SessionDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            default_units: DefaultUnits::default(),
            defaults: SessionDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::info!(path = %path.display(), "config saved");
        Ok(())
    }

    /// 단위 시스템을 바꾸고 표시 단위를 그에 맞춘다.
    pub fn set_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = DefaultUnits::for_system(system);
    }

    /// 초기값으로 새 계산기 상태를 만든다.
    pub fn build_model(&self) -> Result<BrewModel, BrewError> {
        let d = &self.defaults;
        let brew = BrewSession::from_coffee(d.coffee_g, d.strength, d.roast)?;
        let serving =
            ServingSession::new(d.dispenser_capacity_ml, d.concentrate_ml, d.serving_strength)?;
        Ok(BrewModel::new(brew, serving))
    }
}
