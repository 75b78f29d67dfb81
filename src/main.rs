use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cold_brew_calculator::{
    app,
    app::AppError,
    brew::{
        compute_serving, BrewSession, ConcentrateSnapshot, ConcentrateStrength, RoastLevel,
        ServingSession, ServingStrength,
    },
    config, conversion,
    quantity::UnitFormatter,
    ui_cli,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "cold_brew_calculator_cli",
    version,
    about = "Cold brew concentrate and dispenser dilution calculator"
)]
struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 커피량 또는 물량으로 원액 배합을 계산한다
    Concentrate {
        /// 생략하면 설정의 기본 커피량을 사용한다
        #[arg(long, conflicts_with = "water")]
        coffee: Option<f64>,
        #[arg(long)]
        water: Option<f64>,
        #[arg(long)]
        strength: Option<ConcentrateStrength>,
        /// 프리셋 대신 사용할 목표 비율
        #[arg(long)]
        ratio: Option<f64>,
        #[arg(long)]
        roast: Option<RoastLevel>,
    },
    /// 디스펜서 희석 배합을 계산한다
    Serve {
        /// 원액의 실제 비율(물/커피)
        #[arg(long, conflicts_with = "preset")]
        ratio: Option<f64>,
        /// 원액 프리셋
        #[arg(long)]
        preset: Option<ConcentrateStrength>,
        #[arg(long)]
        capacity: Option<f64>,
        /// 원액 투입량. 생략하면 권장값을 사용한다
        #[arg(long)]
        concentrate: Option<f64>,
        #[arg(long)]
        desired: Option<ServingStrength>,
    },
    /// 질량/체적 단위를 변환한다
    Convert {
        quantity: String,
        value: f64,
        from: String,
        to: String,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cold_brew_calculator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = try_run(Cli::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    let fmt = UnitFormatter::from(&cfg.default_units);
    match cli.command {
        None => app::run(&mut cfg, &cli.config)?,
        Some(Command::Concentrate {
            coffee,
            water,
            strength,
            ratio,
            roast,
        }) => {
            let strength = strength.unwrap_or(cfg.defaults.strength);
            let roast = roast.unwrap_or(cfg.defaults.roast);
            let mut session = match (coffee, water) {
                (None, Some(w)) => BrewSession::from_water(w, strength, roast)?,
                (c, _) => {
                    BrewSession::from_coffee(c.unwrap_or(cfg.defaults.coffee_g), strength, roast)?
                }
            };
            if let Some(r) = ratio {
                session.set_target_ratio(r)?;
            }
            ui_cli::print_concentrate(&session, &fmt);
        }
        Some(Command::Serve {
            ratio,
            preset,
            capacity,
            concentrate,
            desired,
        }) => {
            let snapshot = match (ratio, preset) {
                (Some(r), _) => Some(ConcentrateSnapshot::from_ratio(r)?),
                (None, Some(p)) => Some(ConcentrateSnapshot::from_preset(p)),
                (None, None) => None,
            };
            let desired = desired.unwrap_or(cfg.defaults.serving_strength);
            let serving = ServingSession::for_capacity(
                capacity.unwrap_or(cfg.defaults.dispenser_capacity_ml),
                concentrate,
                desired,
            )?;
            let mix = compute_serving(snapshot.as_ref(), &serving);
            ui_cli::print_serving(snapshot.as_ref(), &mix, desired, &fmt);
        }
        Some(Command::Convert {
            quantity,
            value,
            from,
            to,
        }) => {
            let kind = conversion::parse_quantity(&quantity)?;
            let result = conversion::convert(kind, value, &from, &to)?;
            println!("{value} {from} = {result:.3} {to}");
        }
    }
    Ok(())
}
