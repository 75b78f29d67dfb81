use std::io;
use std::sync::{Arc, Mutex};

use cold_brew_calculator::brew::{
    compute_mix, compute_serving, recommend, ConcentrateSnapshot, ConcentrateStrength, Dilution,
    ServingSession, ServingStrength,
};

#[test]
fn medium_recommendation_for_500_ml() {
    let rec = recommend(500.0, ServingStrength::Medium);
    assert_eq!(rec.concentrate_ml, 100.0);
    assert_eq!(rec.water_ml, 400.0);
}

#[test]
fn recommendation_fills_dispenser_exactly() {
    for capacity in [100.0, 333.0, 500.0, 777.0, 1000.0] {
        for desired in ServingStrength::ALL {
            let rec = recommend(capacity, desired);
            assert_eq!(rec.concentrate_ml + rec.water_ml, capacity);
        }
    }
}

#[test]
fn snapshot_mix_scenario() {
    let snap = ConcentrateSnapshot::from_preset(ConcentrateStrength::Concentrate);
    let mix = compute_mix(Some(&snap), 500.0, 200.0, ServingStrength::Medium);
    assert_eq!(mix.water_needed_ml, 300.0);
    assert!((mix.final_ratio - 2.5).abs() < 1e-9);
    assert!((mix.effective_strength - 10.0).abs() < 1e-9);
    assert_eq!(mix.dilution.to_string(), "1:1.5");
    assert_eq!(mix.water_needed_ml + mix.concentrate_ml, 500.0);
}

#[test]
fn zero_concentrate_reports_zero_final_ratio() {
    let mix = compute_mix(None, 500.0, 0.0, ServingStrength::Strong);
    assert_eq!(mix.final_ratio, 0.0);
    assert_eq!(mix.effective_strength, 0.0);
    assert_eq!(mix.dilution, Dilution::Undefined);
    assert!(mix.final_ratio.is_finite());
}

#[test]
fn full_dispenser_of_concentrate_is_flagged() {
    let mix = compute_mix(None, 500.0, 500.0, ServingStrength::Mild);
    assert_eq!(mix.dilution, Dilution::Undiluted);
    let over = compute_mix(None, 500.0, 600.0, ServingStrength::Mild);
    assert_eq!(over.dilution, Dilution::Undiluted);
    assert!(over.is_overfilled());
}

#[test]
fn no_snapshot_means_zero_effective_strength() {
    let serving = ServingSession::default();
    let mix = compute_serving(None, &serving);
    assert_eq!(mix.effective_strength, 0.0);
    assert_eq!(mix.water_needed_ml, 300.0);
}

#[test]
fn capacity_and_concentrate_are_clamped() {
    let mut s = ServingSession::default();
    s.set_dispenser_capacity(5000.0).expect("finite");
    assert_eq!(s.dispenser_capacity(), 1000.0);
    s.set_dispenser_capacity(10.0).expect("finite");
    assert_eq!(s.dispenser_capacity(), 100.0);
    // 용량이 줄면 원액량도 새 상한으로 내려간다.
    assert_eq!(s.concentrate_amount(), 50.0);

    s.set_dispenser_capacity(500.0).expect("finite");
    s.set_concentrate_amount(480.0).expect("finite");
    assert_eq!(s.concentrate_amount(), 450.0);
    s.set_concentrate_amount(0.0).expect("finite");
    assert_eq!(s.concentrate_amount(), 50.0);
    assert!(s.set_concentrate_amount(f64::INFINITY).is_err());
}

#[test]
fn apply_recommendation_sets_concentrate() {
    let mut s = ServingSession::new(600.0, 200.0, ServingStrength::Mild).expect("session");
    s.apply_recommendation();
    assert_eq!(s.concentrate_amount(), 100.0);
    let mix = compute_serving(None, &s);
    assert_eq!(mix.water_needed_ml, 500.0);
    assert_eq!(mix.dilution.to_string(), "1:5.0");
}

#[test]
fn ratio_snapshot_uses_nearest_label() {
    let snap = ConcentrateSnapshot::from_ratio(6.6).expect("ratio");
    assert_eq!(snap.strength(), ConcentrateStrength::MediumConcentrate);
    assert!(ConcentrateSnapshot::from_ratio(-1.0).is_err());
}

#[test]
fn mix_always_fills_dispenser_exactly() {
    let snap = ConcentrateSnapshot::from_preset(ConcentrateStrength::Concentrate);
    for capacity in [100.0, 250.4, 333.3, 500.0, 612.5, 777.7, 1000.0] {
        for concentrate in [0.0, 50.0, 87.5, 187.5, 200.49, 333.6, 999.9] {
            let mut s = ServingSession::default();
            s.set_dispenser_capacity(capacity).expect("finite");
            s.set_concentrate_amount(concentrate).expect("finite");
            assert_eq!(s.concentrate_amount().fract(), 0.0);
            let mix = compute_serving(Some(&snap), &s);
            assert_eq!(
                mix.water_needed_ml + mix.concentrate_ml,
                mix.dispenser_capacity_ml,
                "{capacity} {concentrate}"
            );
        }
    }
}

#[test]
fn fractional_inputs_round_to_whole_ml() {
    let mut s = ServingSession::new(500.0, 200.0, ServingStrength::Medium).expect("session");
    s.set_concentrate_amount(187.5).expect("finite");
    assert_eq!(s.concentrate_amount(), 188.0);
    let mix = compute_serving(None, &s);
    assert_eq!(mix.water_needed_ml, 312.0);

    s.set_dispenser_capacity(612.4).expect("finite");
    assert_eq!(s.dispenser_capacity(), 612.0);
    assert!(s.set_dispenser_capacity(f64::NAN).is_err());
    assert_eq!(s.dispenser_capacity(), 612.0);
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured_logs(f: impl FnOnce()) -> String {
    let buf = LogBuffer::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buf.0.lock().expect("log lock").clone();
    String::from_utf8(bytes).expect("utf8 logs")
}

#[test]
fn small_dispenser_without_concentrate_uses_recommendation_quietly() {
    let mut session = None;
    let logs = captured_logs(|| {
        session = Some(
            ServingSession::for_capacity(300.0, None, ServingStrength::Medium).expect("session"),
        );
    });
    let session = session.expect("session");
    assert_eq!(session.concentrate_amount(), 60.0);
    assert!(!logs.contains("clamped"), "{logs}");

    let mut given = None;
    let logs = captured_logs(|| {
        given = Some(
            ServingSession::for_capacity(100.0, Some(40.0), ServingStrength::Strong)
                .expect("session"),
        );
    });
    assert_eq!(given.expect("session").concentrate_amount(), 50.0);
    assert!(logs.contains("concentrate amount clamped"), "{logs}");
}
