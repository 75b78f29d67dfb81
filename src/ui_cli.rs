use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::brew::guide::{brewing_instructions, SERVING_TIPS};
use crate::brew::{
    format_ratio, BrewError, BrewModel, BrewSession, ConcentrateSnapshot, ConcentrateStrength,
    InputMode, RoastLevel, ServingMix, ServingStrength,
};
use crate::config::{Config, UnitSystem};
use crate::conversion;
use crate::quantity::UnitFormatter;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Prepare,
    Serve,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(model: &BrewModel) -> Result<MenuChoice, AppError> {
    println!("\n=== Cold Brew Calculator ===");
    if let Some(snap) = model.snapshot() {
        println!(
            "Saved concentrate: {} ({})",
            snap.strength(),
            format_ratio(Some(snap.ratio()))
        );
    }
    println!("1) Prepare extract");
    println!("2) Serve brew");
    println!("3) Unit converter");
    println!("4) Settings");
    println!("0) Exit");
    read_menu_choice(&mut io::stdin().lock())
}

/// 메뉴 번호를 읽는다. 입력이 끝나면(EOF) 종료로 본다.
pub fn read_menu_choice<R: BufRead>(input: &mut R) -> Result<MenuChoice, AppError> {
    loop {
        let sel = match read_line_from(input, "Select: ") {
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(MenuChoice::Exit)
            }
            other => other?,
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Prepare),
            "2" => return Ok(MenuChoice::Serve),
            "3" => return Ok(MenuChoice::UnitConversion),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("Invalid selection, try again."),
        }
    }
}

/// 추출 준비 메뉴를 처리한다. 추출을 마치고 서빙으로 넘어가면 true.
pub fn handle_prepare(cfg: &Config, model: &mut BrewModel) -> Result<bool, AppError> {
    let fmt = UnitFormatter::from(&cfg.default_units);
    loop {
        println!("\n-- Prepare Your Extract --");
        print_concentrate(&model.brew, &fmt);
        println!("1) Control coffee  2) Control water  3) Set amount");
        println!("4) Concentrate strength  5) Roast level  6) Done brewing, go to serving");
        println!("0) Back");
        let sel = read_line("Select: ")?;
        match sel.trim() {
            "1" => report(model.brew.set_input_mode(InputMode::Coffee)),
            "2" => report(model.brew.set_input_mode(InputMode::Water)),
            "3" => {
                let result = match model.brew.input_mode() {
                    InputMode::Coffee => model.brew.set_coffee_amount(read_f64("Coffee [g]: ")?),
                    InputMode::Water => model.brew.set_water_amount(read_f64("Water [ml]: ")?),
                };
                report(result);
            }
            "4" => {
                let strength = read_strength()?;
                report(model.brew.select_strength(strength));
            }
            "5" => {
                let roast = read_roast()?;
                report(model.brew.set_roast_level(roast));
            }
            "6" => match model.finalize_concentrate() {
                Ok(_) => return Ok(true),
                Err(e) => println!("{e}"),
            },
            "0" => return Ok(false),
            _ => println!("Invalid selection."),
        }
    }
}

/// 서빙 메뉴를 처리한다.
pub fn handle_serve(cfg: &Config, model: &mut BrewModel) -> Result<(), AppError> {
    let fmt = UnitFormatter::from(&cfg.default_units);
    println!("\n-- Serve Your Brew --");
    if model.snapshot().is_none() {
        println!("No concentrate saved yet. What did you make?");
        let strength = read_strength()?;
        model.choose_concentrate_preset(strength);
    }
    loop {
        print_serving(
            model.snapshot(),
            &model.serving_mix(),
            model.serving.desired_strength(),
            &fmt,
        );
        println!("1) Dispenser capacity  2) Desired strength  3) Concentrate amount");
        println!("4) Use recommendation  5) Change concentrate type  0) Back");
        let sel = read_line("Select: ")?;
        match sel.trim() {
            "1" => {
                let capacity = read_f64("Capacity [ml] (100-1000): ")?;
                if let Err(e) = model.serving.set_dispenser_capacity(capacity) {
                    println!("{e}");
                }
            }
            "2" => {
                let desired = read_serving_strength()?;
                model.serving.set_desired_strength(desired);
            }
            "3" => {
                let (lo, hi) = model.serving.concentrate_bounds();
                let prompt = format!("Concentrate [ml] ({lo:.0}-{hi:.0}): ");
                if let Err(e) = model.serving.set_concentrate_amount(read_f64(&prompt)?) {
                    println!("{e}");
                }
            }
            "4" => model.serving.apply_recommendation(),
            "5" => {
                let strength = read_strength()?;
                model.choose_concentrate_preset(strength);
            }
            "0" => return Ok(()),
            _ => println!("Invalid selection."),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion() -> Result<(), AppError> {
    println!("\n-- Unit Converter --");
    println!("1) Mass (g, kg, oz, lb)  2) Volume (ml, L, fl oz, cup)");
    let kind = loop {
        let sel = read_line("Quantity: ")?;
        match sel.trim() {
            "1" => break crate::quantity::QuantityKind::Mass,
            "2" => break crate::quantity::QuantityKind::Volume,
            _ => println!("Unsupported selection."),
        }
    };
    let value = read_f64("Value: ")?;
    let from_unit = read_line("From unit: ")?;
    let to_unit = read_line("To unit: ")?;
    match conversion::convert(kind, value, from_unit.trim(), to_unit.trim()) {
        Ok(result) => println!("Result: {result:.3} {}", to_unit.trim()),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- Settings --");
    println!("Current unit system: {:?}", cfg.unit_system);
    println!("1) Metric  2) Imperial");
    let sel = read_line("Change to (enter to cancel): ")?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim() {
        "1" => cfg.set_unit_system(UnitSystem::Metric),
        "2" => cfg.set_unit_system(UnitSystem::Imperial),
        _ => println!("Invalid input, unchanged."),
    }
    println!("Unit system is now {:?}.", cfg.unit_system);
    Ok(())
}

/// 원액 요약과 추출 안내를 출력한다.
pub fn print_concentrate(brew: &BrewSession, fmt: &UnitFormatter) {
    let summary = brew.summary();
    let (coffee_tag, water_tag) = match summary.input_mode {
        InputMode::Coffee => ("control", "calculated"),
        InputMode::Water => ("calculated", "control"),
    };
    println!("Strength: {}", brew.strength());
    println!("Roast: {}", brew.roast_level());
    println!("Coffee ({coffee_tag}): {}", fmt.mass(summary.coffee_g));
    println!("Water ({water_tag}): {}", fmt.volume(summary.water_ml));
    println!("Ratio: {}", format_ratio(summary.actual_ratio));
    println!(
        "Estimated yield: {} concentrate",
        fmt.volume(summary.estimated_yield_ml)
    );
    let guide = brewing_instructions(brew.roast_level());
    println!(
        "Grind: {} | Steep: {} | Method: {} | Strain: {}",
        guide.grind, guide.steep_time, guide.method, guide.strain
    );
    println!("Note: {}", guide.roast_note);
}

/// 서빙 배합과 권장값을 출력한다.
pub fn print_serving(
    snapshot: Option<&ConcentrateSnapshot>,
    mix: &ServingMix,
    desired: ServingStrength,
    fmt: &UnitFormatter,
) {
    match snapshot {
        Some(s) => println!(
            "You made: {} ({} ratio, dilute {})",
            s.strength(),
            format_ratio(Some(s.ratio())),
            s.strength().preset().dilution
        ),
        None => println!("No concentrate selected."),
    }
    println!("Dispenser: {}", fmt.volume(mix.dispenser_capacity_ml));
    println!(
        "Recommended for {desired}: {} concentrate + {} water",
        fmt.volume(mix.recommended.concentrate_ml),
        fmt.volume(mix.recommended.water_ml)
    );
    println!(
        "Your mix: {} concentrate + {} water",
        fmt.volume(mix.concentrate_ml),
        fmt.volume(mix.water_needed_ml)
    );
    if mix.is_overfilled() {
        println!("Warning: concentrate exceeds the dispenser capacity.");
    }
    println!("Dilution ratio: {} ({})", mix.dilution, mix.dilution.describe());
    if mix.effective_strength > 0.0 {
        println!("Overall strength: 1:{:.1} (water to coffee)", mix.effective_strength);
    }
    println!("Tips: {}", SERVING_TIPS.join("; "));
}

fn report(result: Result<(), BrewError>) {
    if let Err(e) = result {
        println!("{e}");
    }
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 닫혀 있으면 `UnexpectedEof`.
pub fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
    }
    Ok(buf)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn read_strength() -> Result<ConcentrateStrength, AppError> {
    for (i, s) in ConcentrateStrength::ALL.iter().enumerate() {
        println!("{}) {} - dilute {}", i + 1, s, s.preset().dilution);
    }
    pick(&ConcentrateStrength::ALL, ConcentrateStrength::Concentrate)
}

fn read_roast() -> Result<RoastLevel, AppError> {
    for (i, r) in RoastLevel::ALL.iter().enumerate() {
        println!("{}) {} ({} hours)", i + 1, r, r.adjustment().steep_time_hours);
    }
    pick(&RoastLevel::ALL, RoastLevel::Medium)
}

fn read_serving_strength() -> Result<ServingStrength, AppError> {
    for (i, s) in ServingStrength::ALL.iter().enumerate() {
        println!("{}) {} (1:{})", i + 1, s, s.multiplier());
    }
    pick(&ServingStrength::ALL, ServingStrength::Medium)
}

/// 번호로 항목을 고른다. 잘못된 번호면 기본값.
fn pick<T: Copy>(items: &[T], fallback: T) -> Result<T, AppError> {
    let sel = read_line("Select: ")?;
    let chosen = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| items.get(i).copied());
    Ok(chosen.unwrap_or(fallback))
}
