//! Headless platform: scripted input, logged audio, JSON frame traces
//!
//! Used by the demo binary and by tests; no window or sound device needed.

use std::collections::BTreeSet;
use std::io::Write;

use super::{AudioSink, InputSource, RenderSink};
use crate::audio::SoundEffect;
use crate::view::Frame;

/// Flaps on a fixed set of poll numbers (0-based)
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    flaps: BTreeSet<u64>,
    polls: u64,
}

impl ScriptedInput {
    pub fn new(flaps: impl IntoIterator<Item = u64>) -> Self {
        Self {
            flaps: flaps.into_iter().collect(),
            polls: 0,
        }
    }

    /// Number of polls so far
    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl InputSource for ScriptedInput {
    fn poll_flap(&mut self) -> bool {
        let flap = self.flaps.contains(&self.polls);
        self.polls += 1;
        flap
    }
}

/// Writes each cue to the log instead of a speaker
#[derive(Debug, Clone, Default)]
pub struct LogAudio {
    /// Cues played so far
    pub played: Vec<SoundEffect>,
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("♪ {} (volume {volume:.2})", effect.as_str());
        self.played.push(effect);
    }
}

/// Drops every frame
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl RenderSink for NullRenderer {
    fn present(&mut self, _frame: &Frame) {}
}

/// Writes one JSON object per frame, one per line
pub struct JsonTrace<W: Write> {
    out: W,
    frames: u64,
    failed: bool,
}

impl<W: Write> JsonTrace<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            frames: 0,
            failed: false,
        }
    }

    /// Frames successfully written
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, frame: &Frame) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")
    }
}

impl<W: Write> RenderSink for JsonTrace<W> {
    fn present(&mut self, frame: &Frame) {
        if self.failed {
            return;
        }
        match self.write_frame(frame) {
            Ok(()) => self.frames += 1,
            Err(e) => {
                // Stop tracing after the first failure (closed pipe etc.)
                log::warn!("Frame trace disabled: {e}");
                self.failed = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    #[test]
    fn test_scripted_input() {
        let mut input = ScriptedInput::new([1, 3]);
        let polled: Vec<bool> = (0..5).map(|_| input.poll_flap()).collect();
        assert_eq!(polled, vec![false, true, false, true, false]);
        assert_eq!(input.polls(), 5);
    }

    #[test]
    fn test_json_trace_lines() {
        let state = GameState::new(8, Tuning::default());
        let frame = Frame::capture(&state);
        let mut trace = JsonTrace::new(Vec::new());
        trace.present(&frame);
        trace.present(&frame);
        assert_eq!(trace.frames(), 2);

        let text = String::from_utf8(trace.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["phase"], "Ready");
    }
}
