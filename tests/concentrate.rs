use cold_brew_calculator::brew::{
    compute_concentrate, format_ratio, BrewError, BrewSession, ConcentrateStrength, InputMode,
    RoastLevel,
};

#[test]
fn default_session_matches_strong_concentrate() {
    let mut session = BrewSession::default();
    let summary = compute_concentrate(&mut session);
    assert_eq!(summary.coffee_g, 150.0);
    assert_eq!(summary.water_ml, 600.0);
    assert!((summary.actual_ratio.expect("ratio") - 4.0).abs() < 1e-9);
    assert_eq!(summary.estimated_yield_ml, 510.0);
    assert_eq!(summary.derived_value(), 600.0);
}

#[test]
fn ready_to_drink_preset_recomputes_water() {
    let mut session = BrewSession::default();
    session.select_strength(ConcentrateStrength::ReadyToDrink).expect("update");
    assert_eq!(session.target_ratio(), 8.0);
    assert_eq!(session.water_amount(), 1200.0);
    assert_eq!(session.strength(), ConcentrateStrength::ReadyToDrink);
}

#[test]
fn water_follows_roast_multiplier() {
    for roast in RoastLevel::ALL {
        for strength in ConcentrateStrength::ALL {
            for coffee in [1.0, 37.0, 150.0, 333.0] {
                let s = BrewSession::from_coffee(coffee, strength, roast).expect("session");
                let expected = (coffee * (strength.ratio() * roast.ratio_multiplier())).round();
                assert_eq!(s.water_amount(), expected, "{roast:?} {strength:?} {coffee}");
            }
        }
    }
}

#[test]
fn switching_mode_back_and_forth_keeps_coffee() {
    for roast in RoastLevel::ALL {
        let mut s = BrewSession::from_coffee(150.0, ConcentrateStrength::Concentrate, roast)
            .expect("session");
        s.set_input_mode(InputMode::Water).expect("update");
        s.set_input_mode(InputMode::Coffee).expect("update");
        assert!((s.coffee_amount() - 150.0).abs() <= 1.0, "{roast:?}");
    }
}

#[test]
fn recompute_is_idempotent() {
    let mut s =
        BrewSession::from_water(1000.0, ConcentrateStrength::MediumConcentrate, RoastLevel::Dark)
            .expect("session");
    let first = s.summary();
    for _ in 0..5 {
        s.recompute();
    }
    assert_eq!(s.summary(), first);
}

#[test]
fn water_mode_derives_coffee() {
    let s = BrewSession::from_water(600.0, ConcentrateStrength::Concentrate, RoastLevel::Medium)
        .expect("session");
    assert_eq!(s.input_mode(), InputMode::Water);
    assert_eq!(s.coffee_amount(), 150.0);
    assert_eq!(s.water_amount(), 600.0);
}

#[test]
fn tiny_water_amount_leaves_ratio_undefined() {
    let s = BrewSession::from_water(1.0, ConcentrateStrength::ReadyToDrink, RoastLevel::VeryDark)
        .expect("session");
    assert_eq!(s.coffee_amount(), 0.0);
    assert_eq!(s.actual_ratio(), None);
    assert_eq!(format_ratio(s.actual_ratio()), "1:—");
}

#[test]
fn non_positive_amounts_are_rejected() {
    let mut s = BrewSession::default();
    assert!(matches!(
        s.set_coffee_amount(0.0),
        Err(BrewError::NonPositive { field: "coffee", .. })
    ));
    assert!(s.set_coffee_amount(-5.0).is_err());
    assert!(s.set_coffee_amount(f64::NAN).is_err());
    assert!(s.set_target_ratio(0.0).is_err());
    assert_eq!(s.coffee_amount(), 150.0);
    assert_eq!(s.water_amount(), 600.0);
}

#[test]
fn derived_field_cannot_be_written() {
    let mut s = BrewSession::default();
    assert_eq!(
        s.set_water_amount(900.0),
        Err(BrewError::DerivedField(InputMode::Water))
    );
    s.set_input_mode(InputMode::Water).expect("update");
    assert!(s.set_water_amount(900.0).is_ok());
    assert_eq!(s.coffee_amount(), 225.0);
}

#[test]
fn custom_ratio_keeps_preset_label() {
    let mut s = BrewSession::default();
    s.set_target_ratio(5.0).expect("ratio");
    assert_eq!(s.water_amount(), 750.0);
    assert_eq!(s.strength(), ConcentrateStrength::Concentrate);
}

fn assert_summary_finite(s: &BrewSession) {
    let summary = s.summary();
    assert!(summary.coffee_g.is_finite());
    assert!(summary.water_ml.is_finite());
    assert!(summary.adjusted_ratio.is_finite());
    assert!(summary.estimated_yield_ml.is_finite());
    if let Some(r) = summary.actual_ratio {
        assert!(r.is_finite());
    }
}

#[test]
fn overflowing_amounts_are_rejected() {
    assert!(matches!(
        BrewSession::from_coffee(1e308, ConcentrateStrength::Concentrate, RoastLevel::Medium),
        Err(BrewError::NotFinite { field: "water", .. })
    ));

    let mut s = BrewSession::default();
    assert!(s.set_target_ratio(1e308).is_err());
    assert!(s.set_coffee_amount(f64::MAX).is_err());
    assert_eq!(s.coffee_amount(), 150.0);
    assert_eq!(s.water_amount(), 600.0);
    assert_eq!(s.target_ratio(), 4.0);
    assert_summary_finite(&s);
}

#[test]
fn preset_and_roast_changes_cannot_overflow() {
    let mut s = BrewSession::from_coffee(
        5e307,
        ConcentrateStrength::MegaConcentrate,
        RoastLevel::Medium,
    )
    .expect("session");
    assert_summary_finite(&s);
    let before = s.clone();

    assert!(s.select_strength(ConcentrateStrength::ReadyToDrink).is_err());
    assert!(s.set_roast_level(RoastLevel::VeryDark).is_err());
    assert_eq!(s, before);
    assert_eq!(s.strength(), ConcentrateStrength::MegaConcentrate);

    let mut w =
        BrewSession::from_water(1e308, ConcentrateStrength::Concentrate, RoastLevel::Medium)
            .expect("session");
    assert!(matches!(
        w.set_target_ratio(1e-300),
        Err(BrewError::NotFinite { field: "coffee", .. })
    ));
    assert_eq!(w.target_ratio(), 4.0);
    assert_summary_finite(&w);
}
