//! Game state and core simulation types
//!
//! `GameState` is the one context a run needs: tuning, RNG, bird, pipes and
//! score all live here and are threaded through `tick` explicitly.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::collision::CollisionKind;
use super::stream::PipeStream;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bird hovering at spawn, waiting for the first flap
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended, frozen until the next flap
    GameOver,
}

/// Things that happened during a tick, for audio and UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A flap impulse was applied
    Flap,
    /// A pipe pair was cleared; carries the new score
    Scored { score: u32 },
    /// The run ended
    Collision { kind: CollisionKind },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from (for replays)
    pub seed: u64,
    /// The run's only random source; survives resets
    rng: Pcg32,
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Pairs cleared this run
    pub score: u32,
    /// Ticks spent in Playing this run
    pub run_ticks: u64,
    /// Completed runs since creation
    pub runs: u32,
    pub bird: Bird,
    pub pipes: PipeStream,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut pipes = PipeStream::new(&tuning);
        pipes.seed(&mut rng);

        Self {
            seed,
            rng,
            phase: GamePhase::Ready,
            score: 0,
            run_ticks: 0,
            runs: 0,
            bird: spawn_bird(&tuning),
            pipes,
            events: Vec::new(),
            tuning,
        }
    }

    /// Create a game state seeded from OS entropy
    pub fn from_entropy(tuning: Tuning) -> Self {
        let seed = rand::random::<u64>();
        log::info!("Game initialized with seed: {seed}");
        Self::new(seed, tuning)
    }

    /// Back to Ready: zero score, fresh bird, reseeded pipes.
    /// The RNG keeps running so the new layout differs from the last one.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Ready;
        self.score = 0;
        self.run_ticks = 0;
        self.bird = spawn_bird(&self.tuning);
        self.pipes.seed(&mut self.rng);
        log::info!("Run reset ({} pipe pairs seeded)", self.pipes.len());
    }

    /// Take all events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Split borrow for spawning: the stream mutably, plus the RNG
    pub(crate) fn pipes_and_rng(&mut self) -> (&mut PipeStream, &mut Pcg32) {
        (&mut self.pipes, &mut self.rng)
    }
}

/// Bird at its start position for the tuning
fn spawn_bird(tuning: &Tuning) -> Bird {
    Bird::new(tuning.bird_spawn(), tuning.bird_size, tuning.bird_inset)
}
