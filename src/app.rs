use std::path::Path;

use crate::brew::{BrewError, Phase, UnknownPreset};
use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("{0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("{0}")]
    Conversion(#[from] ConversionError),
    /// 계산 입력 오류
    #[error("{0}")]
    Brew(#[from] BrewError),
    /// 프리셋 이름 오류
    #[error("{0}")]
    Preset(#[from] UnknownPreset),
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    let mut model = config.build_model()?;
    loop {
        match ui_cli::main_menu(&model)? {
            MenuChoice::Prepare => {
                model.set_phase(Phase::Prepare);
                // 추출을 마치면 바로 서빙 메뉴로 이어진다.
                if ui_cli::handle_prepare(config, &mut model)? {
                    ui_cli::handle_serve(config, &mut model)?;
                }
            }
            MenuChoice::Serve => {
                model.set_phase(Phase::Serve);
                ui_cli::handle_serve(config, &mut model)?;
            }
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion()?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save(config_path)?;
            }
            MenuChoice::Exit => {
                println!("Happy brewing!");
                break;
            }
        }
    }
    Ok(())
}

