//! Session bests
//!
//! Only the best run matters on the game-over card. A higher score wins;
//! on equal scores the run that stayed airborne longer wins.

use crate::consts::SIM_DT;
use crate::sim::GameState;

/// Outcome of one finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u32,
    /// Ticks spent in Playing
    pub ticks: u64,
    /// Seed of the state the run came from
    pub seed: u64,
}

impl RunSummary {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            ticks: state.run_ticks,
            seed: state.seed,
        }
    }

    /// Survival time in seconds
    pub fn seconds(&self) -> f32 {
        self.ticks as f32 * SIM_DT
    }

    /// Strictly better: more points, or as many points for longer
    pub fn beats(&self, other: &RunSummary) -> bool {
        (self.score, self.ticks) > (other.score, other.ticks)
    }
}

/// Best run and totals for one session
#[derive(Debug, Clone, Default)]
pub struct SessionRecord {
    best: Option<RunSummary>,
    runs: u32,
    total_score: u64,
}

impl SessionRecord {
    /// Count a finished run; true if it is the new best
    pub fn record(&mut self, run: RunSummary) -> bool {
        self.runs += 1;
        self.total_score += u64::from(run.score);

        let is_best = self.best.is_none_or(|best| run.beats(&best));
        if is_best {
            self.best = Some(run);
        }
        is_best
    }

    pub fn best(&self) -> Option<RunSummary> {
        self.best
    }

    /// Finished runs so far
    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn mean_score(&self) -> f32 {
        if self.runs == 0 {
            0.0
        } else {
            self.total_score as f32 / self.runs as f32
        }
    }
}
