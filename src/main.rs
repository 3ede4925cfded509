//! Flapper entry point
//!
//! Headless demo driver: runs autopiloted rounds at a 60 Hz frame cadence,
//! logs what happens and prints the session best. A windowed front-end plugs
//! its own `InputSource`/`AudioSink`/`RenderSink` into `Session::run_frame`.

use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

use flapper::platform::headless::{JsonTrace, LogAudio, NullRenderer, ScriptedInput};
use flapper::platform::{AudioSink, RenderSink};
use flapper::sim::{GamePhase, GameState};
use flapper::{Session, Settings, Tuning};

/// Frame cadence of the demo driver
const FRAME_DT: f32 = 1.0 / 60.0;

/// Command-line options
#[derive(Debug, Clone)]
struct Options {
    tuning: Option<String>,
    settings: Option<String>,
    seed: Option<u64>,
    rounds: u32,
    seconds: f32,
    trace: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tuning: None,
            settings: None,
            seed: None,
            rounds: 3,
            seconds: 60.0,
            trace: false,
        }
    }
}

impl Options {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut opts = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = |name: &str| args.next().ok_or_else(|| format!("{name} needs a value"));
            match arg.as_str() {
                "--tuning" => opts.tuning = Some(value("--tuning")?),
                "--settings" => opts.settings = Some(value("--settings")?),
                "--seed" => {
                    let v = value("--seed")?;
                    opts.seed = Some(v.parse().map_err(|e| format!("bad --seed {v}: {e}"))?);
                }
                "--rounds" => {
                    let v = value("--rounds")?;
                    opts.rounds = v.parse().map_err(|e| format!("bad --rounds {v}: {e}"))?;
                }
                "--seconds" => {
                    let v = value("--seconds")?;
                    opts.seconds = v.parse().map_err(|e| format!("bad --seconds {v}: {e}"))?;
                }
                "--trace" => opts.trace = true,
                "-h" | "--help" => return Err(usage()),
                other => return Err(format!("unknown argument: {other}\n{}", usage())),
            }
        }
        Ok(opts)
    }
}

fn usage() -> String {
    "usage: flapper [--tuning FILE] [--settings FILE] [--seed N] [--rounds N] [--seconds S] [--trace]"
        .to_string()
}

/// Load a JSON config, falling back to defaults on any failure
fn load_or_default<T: Default, E: Display>(
    path: Option<&str>,
    what: &str,
    parse: fn(&str) -> Result<T, E>,
) -> T {
    let Some(path) = path else {
        return T::default();
    };
    match std::fs::read_to_string(Path::new(path)) {
        Ok(json) => match parse(&json) {
            Ok(value) => {
                log::info!("Loaded {what} from {path}");
                value
            }
            Err(e) => {
                log::warn!("Invalid {what} in {path} ({e}), using defaults");
                T::default()
            }
        },
        Err(e) => {
            log::warn!("Cannot read {what} from {path} ({e}), using defaults");
            T::default()
        }
    }
}

/// Play one round of at most `max_frames` frames and get back to Ready.
/// Returns the frames played.
fn play_round<A, R>(
    session: &mut Session,
    round: u32,
    max_frames: u64,
    audio: &mut A,
    render: &mut R,
) -> u64
where
    A: AudioSink + ?Sized,
    R: RenderSink + ?Sized,
{
    // Without the autopilot, flap once to start and let gravity do the rest
    let mut input = ScriptedInput::new([0]);
    let mut frames = 0;
    while frames < max_frames && session.state.phase != GamePhase::GameOver {
        session.run_frame(FRAME_DT, &mut input, audio, render);
        frames += 1;
    }
    log::info!(
        "Round {round}: score {} in {:.1}s ({:?})",
        session.state.score,
        frames as f32 * FRAME_DT,
        session.state.phase
    );

    // Flap from GameOver resets to Ready for the next round;
    // a run cut off by the time cap is recorded before the reset
    if session.state.phase == GamePhase::GameOver {
        session.request_flap();
        let events = session.update(FRAME_DT);
        session.audio.play_events(audio, &events);
    } else {
        session.end_run();
    }
    frames
}

fn main() {
    env_logger::init();
    log::info!("Flapper (headless) starting...");

    let opts = match Options::parse(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };

    let tuning = load_or_default(opts.tuning.as_deref(), "tuning", Tuning::from_json);
    let mut settings = load_or_default(opts.settings.as_deref(), "settings", Settings::from_json);
    settings.trace_frames |= opts.trace;

    let state = match opts.seed {
        Some(seed) => {
            log::info!("Game initialized with seed: {seed}");
            GameState::new(seed, tuning)
        }
        None => GameState::from_entropy(tuning),
    };
    let mut session = Session::new(state, &settings);
    let mut audio = LogAudio::default();

    let stdout = io::stdout();
    let mut render: Box<dyn RenderSink> = if settings.trace_frames {
        Box::new(JsonTrace::new(stdout.lock()))
    } else {
        Box::new(NullRenderer)
    };

    let frames_per_round = (opts.seconds / FRAME_DT).ceil() as u64;
    for round in 1..=opts.rounds {
        play_round(&mut session, round, frames_per_round, &mut audio, render.as_mut());
    }
    drop(render);

    let mut err = io::stderr().lock();
    let record = &session.records;
    match record.best() {
        Some(best) => {
            let _ = writeln!(
                err,
                "Best: {} ({:.1}s, seed {})",
                best.score,
                best.seconds(),
                best.seed
            );
        }
        None => {
            let _ = writeln!(err, "No runs finished");
        }
    }
    let _ = writeln!(
        err,
        "Runs: {}, mean score {:.2}",
        record.runs(),
        record.mean_score()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let opts = Options::parse(args(&[])).unwrap();
        assert_eq!(opts.rounds, 3);
        assert!(!opts.trace);
        assert!(opts.seed.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let opts = Options::parse(args(&["--seed", "42", "--rounds", "1", "--trace"])).unwrap();
        assert_eq!(opts.seed, Some(42));
        assert_eq!(opts.rounds, 1);
        assert!(opts.trace);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Options::parse(args(&["--seed"])).is_err());
        assert!(Options::parse(args(&["--seed", "x"])).is_err());
        assert!(Options::parse(args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_out_of_range_tuning_file_falls_back() {
        let path = std::env::temp_dir().join(format!("flapper-tuning-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "screen_height": 1e39 }"#).unwrap();
        let tuning = load_or_default(path.to_str(), "tuning", Tuning::from_json);
        let _ = std::fs::remove_file(&path);
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_capped_round_is_recorded() {
        let state = GameState::new(2024, Tuning::default());
        let mut session = Session::new(state, &Settings::default());
        let mut audio = LogAudio::default();

        // Half a second: the autopilot is still flying when the cap hits
        let frames = play_round(&mut session, 1, 30, &mut audio, &mut NullRenderer);
        assert_eq!(frames, 30);
        assert_eq!(session.state.phase, GamePhase::Ready);
        assert_eq!(session.records.runs(), 1);
        assert!(session.records.best().is_some_and(|b| b.ticks > 0));
    }

    #[test]
    fn test_restart_after_game_over_plays_cues() {
        let state = GameState::new(2024, Tuning::default());
        let mut session = Session::new(state, &Settings::default());
        session.state.phase = GamePhase::GameOver;
        let mut audio = LogAudio::default();

        let frames = play_round(&mut session, 1, 30, &mut audio, &mut NullRenderer);
        assert_eq!(frames, 0);
        // The reset tick, then the autopilot starts the next run with a flap
        assert_eq!(session.state.phase, GamePhase::Playing);
        assert_eq!(audio.played, vec![flapper::audio::SoundEffect::Wing]);
    }

    #[test]
    fn test_missing_config_falls_back() {
        let tuning = load_or_default(Some("/nonexistent/tuning.json"), "tuning", Tuning::from_json);
        assert_eq!(tuning, Tuning::default());
    }
}
