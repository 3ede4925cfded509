//! Fixed-timestep driver
//!
//! Wall-clock frame deltas go into an accumulator; the simulation only ever
//! advances in whole `SIM_DT` steps, so gameplay is identical at any frame
//! rate.

use crate::audio::AudioManager;
use crate::consts::{MAX_FRAME_DT, SIM_DT};
use crate::platform::{AudioSink, InputSource, RenderSink};
use crate::records::{RunSummary, SessionRecord};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::view::Frame;

/// A running game: simulation plus the glue around it
#[derive(Debug, Clone)]
pub struct Session {
    pub state: GameState,
    accumulator: f32,
    input: TickInput,
    pub audio: AudioManager,
    pub records: SessionRecord,
    /// Phase seen at the end of the previous update
    last_phase: GamePhase,
    /// Total ticks run
    ticks: u64,
}

impl Session {
    pub fn new(state: GameState, settings: &Settings) -> Self {
        let last_phase = state.phase;
        Self {
            state,
            accumulator: 0.0,
            input: TickInput {
                flap: false,
                autopilot: settings.autopilot,
            },
            audio: AudioManager::from_settings(settings),
            records: SessionRecord::default(),
            last_phase,
            ticks: 0,
        }
    }

    /// Queue a flap for the next tick
    pub fn request_flap(&mut self) {
        self.input.flap = true;
    }

    /// Seconds of unsimulated time carried to the next frame
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Total ticks run by this session
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run as many fixed ticks as the frame delta allows.
    /// Returns the events they produced, oldest first.
    pub fn update(&mut self, frame_dt: f32) -> Vec<GameEvent> {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        while self.accumulator >= SIM_DT {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            self.ticks += 1;

            // One-shot inputs are consumed by the first tick
            self.input.flap = false;

            self.track_phase();
        }

        self.state.drain_events()
    }

    /// One full frame against the platform collaborators:
    /// poll input, simulate, route cues, present.
    pub fn run_frame<I, A, R>(&mut self, frame_dt: f32, input: &mut I, audio: &mut A, render: &mut R)
    where
        I: InputSource + ?Sized,
        A: AudioSink + ?Sized,
        R: RenderSink + ?Sized,
    {
        if input.poll_flap() {
            self.request_flap();
        }
        let events = self.update(frame_dt);
        self.audio.play_events(audio, &events);
        render.present(&self.frame());
    }

    /// Render snapshot of the current state
    pub fn frame(&self) -> Frame {
        Frame::capture(&self.state)
    }

    /// Stop the current run without a collision and go back to Ready.
    /// A run in progress still counts towards the session record.
    pub fn end_run(&mut self) {
        if self.state.phase == GamePhase::Playing {
            log::info!("Run stopped at score {}", self.state.score);
            self.record_run();
        }
        self.state.reset();
        self.last_phase = self.state.phase;
    }

    /// Record runs as they enter GameOver
    fn track_phase(&mut self) {
        let phase = self.state.phase;
        if phase == self.last_phase {
            return;
        }
        if phase == GamePhase::GameOver {
            self.record_run();
        }
        self.last_phase = phase;
    }

    fn record_run(&mut self) {
        let run = RunSummary::from_state(&self.state);
        if self.records.record(run) {
            log::info!("New best: {} ({:.1}s)", run.score, run.seconds());
        }
    }
}
