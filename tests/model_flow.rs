use cold_brew_calculator::brew::{
    BrewError, BrewModel, ConcentrateStrength, InputMode, Phase, RoastLevel, ServingStrength,
};

#[test]
fn finalize_captures_ratio_and_switches_phase() {
    let mut model = BrewModel::default();
    model.brew.select_strength(ConcentrateStrength::MegaConcentrate).expect("update");
    model.brew.set_roast_level(RoastLevel::Dark).expect("update");
    let snap = model.finalize_concentrate().expect("snapshot");
    assert_eq!(model.phase(), Phase::Serve);
    assert_eq!(snap.strength(), ConcentrateStrength::MegaConcentrate);
    // 150 g × 3 × 1.1 = 495 ml
    assert!((snap.ratio() - 495.0 / 150.0).abs() < 1e-9);
    assert_eq!(model.snapshot(), Some(&snap));
}

#[test]
fn serving_does_not_touch_brew_session() {
    let mut model = BrewModel::default();
    model.finalize_concentrate().expect("snapshot");
    let before = model.brew.clone();
    model.serving.set_dispenser_capacity(800.0).expect("finite");
    model.serving.set_desired_strength(ServingStrength::Strong);
    model.serving.apply_recommendation();
    let mix = model.serving_mix();
    assert_eq!(model.brew, before);
    assert_eq!(mix.recommended.concentrate_ml, 200.0);
    assert!((mix.effective_strength - 4.0 * 4.0).abs() < 1e-9);
}

#[test]
fn preset_snapshot_without_brewing() {
    let mut model = BrewModel::default();
    model.set_phase(Phase::Serve);
    assert!(model.snapshot().is_none());
    assert_eq!(model.serving_mix().effective_strength, 0.0);
    let snap = model.choose_concentrate_preset(ConcentrateStrength::MediumConcentrate);
    assert_eq!(snap.ratio(), 6.0);
    assert!((model.serving_mix().effective_strength - 15.0).abs() < 1e-9);
}

#[test]
fn undefined_ratio_blocks_finalize() {
    let mut model = BrewModel::default();
    model.brew.set_input_mode(InputMode::Water).expect("update");
    model.brew.set_water_amount(1.0).expect("water");
    assert_eq!(model.finalize_concentrate(), Err(BrewError::UndefinedRatio));
    assert_eq!(model.phase(), Phase::Prepare);
    assert!(model.snapshot().is_none());
}

#[test]
fn refinalizing_overwrites_snapshot() {
    let mut model = BrewModel::default();
    model.finalize_concentrate().expect("first");
    model.set_phase(Phase::Prepare);
    model.brew.select_strength(ConcentrateStrength::ReadyToDrink).expect("update");
    let snap = model.finalize_concentrate().expect("second");
    assert_eq!(snap.ratio(), 8.0);
    assert_eq!(model.snapshot().map(|s| s.strength()), Some(ConcentrateStrength::ReadyToDrink));
}

#[test]
fn brewing_guide_follows_roast_level() {
    use cold_brew_calculator::brew::guide::{brewing_instructions, GRIND, SERVING_TIPS};

    let dark = brewing_instructions(RoastLevel::Dark);
    assert_eq!(dark.steep_time, "16-18 hours");
    assert_eq!(dark.grind, GRIND);
    assert!(dark.roast_note.starts_with("Dark roasts"));

    let light = brewing_instructions(RoastLevel::Light);
    assert_eq!(light.steep_time, "20-24 hours");
    assert_eq!(SERVING_TIPS.len(), 4);
}
