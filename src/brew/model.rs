//! 추출/서빙 두 단계를 하나로 묶은 계산기 상태.

use super::concentrate::{BrewSession, ConcentrateSummary};
use super::presets::ConcentrateStrength;
use super::serving::{compute_serving, ServingMix, ServingSession};
use super::snapshot::{finalize_concentrate, ConcentrateSnapshot};
use super::BrewError;

/// 현재 화면 단계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Prepare,
    Serve,
}

/// 계산기 전체 상태. 프런트엔드는 이 값 하나만 들고 있으면 된다.
#[derive(Debug, Clone, Default)]
pub struct BrewModel {
    phase: Phase,
    pub brew: BrewSession,
    snapshot: Option<ConcentrateSnapshot>,
    pub serving: ServingSession,
}

impl BrewModel {
    pub fn new(brew: BrewSession, serving: ServingSession) -> Self {
        Self {
            phase: Phase::Prepare,
            brew,
            snapshot: None,
            serving,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 단계만 바꾼다. 스냅샷은 건드리지 않는다.
    pub fn set_phase(&mut self, phase: Phase) {
        tracing::debug!(?phase, "phase changed");
        self.phase = phase;
    }

    pub fn snapshot(&self) -> Option<&ConcentrateSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn concentrate(&self) -> ConcentrateSummary {
        self.brew.summary()
    }

    /// 추출을 마치고 서빙 단계로 넘어간다.
    pub fn finalize_concentrate(&mut self) -> Result<ConcentrateSnapshot, BrewError> {
        let snap = finalize_concentrate(&self.brew)?;
        tracing::info!(
            ratio = snap.ratio(),
            strength = snap.strength().key(),
            "concentrate finalized"
        );
        self.snapshot = Some(snap);
        self.set_phase(Phase::Serve);
        Ok(snap)
    }

    /// 추출 기록 없이 서빙할 때 원액 종류를 직접 고른다.
    pub fn choose_concentrate_preset(
        &mut self,
        strength: ConcentrateStrength,
    ) -> ConcentrateSnapshot {
        let snap = ConcentrateSnapshot::from_preset(strength);
        self.snapshot = Some(snap);
        snap
    }

    pub fn serving_mix(&self) -> ServingMix {
        compute_serving(self.snapshot.as_ref(), &self.serving)
    }
}
