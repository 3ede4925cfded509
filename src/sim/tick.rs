//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision::check_world;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap intent (click/tap/space/up)
    pub flap: bool,
    /// Demo mode - the built-in pilot decides when to flap
    pub autopilot: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let flap = input.flap || (input.autopilot && autopilot_wants_flap(state));

    match state.phase {
        GamePhase::Ready => {
            if flap {
                state.phase = GamePhase::Playing;
                log::info!("Run started (seed {})", state.seed);
                apply_flap(state);
            }
        }
        GamePhase::Playing => {
            if flap {
                apply_flap(state);
            }
        }
        GamePhase::GameOver => {
            // Autopilot alone never restarts a finished run
            if input.flap {
                state.reset();
            }
            return;
        }
    }

    if state.phase == GamePhase::Playing {
        step_playing(state, dt);
    }
}

fn apply_flap(state: &mut GameState) {
    state.bird.flap(state.tuning.flap_impulse);
    state.events.push(GameEvent::Flap);
}

/// One physics step: bird, pipes, scoring, then collisions
fn step_playing(state: &mut GameState, dt: f32) {
    state.run_ticks += 1;

    state.bird.tick(dt, state.tuning.gravity);

    let speed = state.tuning.pipe_speed;
    let (pipes, rng) = state.pipes_and_rng();
    pipes.advance(dt, speed);
    pipes.maybe_spawn(dt, rng);
    pipes.retire_offscreen();

    let passed = state.pipes.collect_pass_events(state.bird.pos.x);
    for _ in 0..passed {
        state.score += 1;
        state.events.push(GameEvent::Scored { score: state.score });
    }

    let hitbox = state.bird.hitbox();
    if let Some(kind) = check_world(&hitbox, &state.pipes, state.tuning.ground_y()) {
        state.phase = GamePhase::GameOver;
        state.runs += 1;
        state.events.push(GameEvent::Collision { kind });
        log::info!(
            "Game over ({kind:?}) with score {} after {} ticks",
            state.score,
            state.run_ticks
        );
    }
}

/// Distance below the target at which the pilot flaps without waiting for the apex
const AUTOPILOT_CATCH_UP: f32 = 60.0;

/// Built-in pilot: hold the bird a little above the anchor of the next pair
/// it has not cleared yet, or at its spawn height when no pair is ahead.
pub fn autopilot_wants_flap(state: &GameState) -> bool {
    if state.phase == GamePhase::Ready {
        return true;
    }
    if state.phase != GamePhase::Playing {
        return false;
    }

    let hitbox = state.bird.hitbox();
    let target_y = state
        .pipes
        .iter()
        .find(|p| p.trailing_edge() >= hitbox.left())
        .map(|p| p.anchor - (state.bird.size.y + p.shape.gap * 0.15))
        .unwrap_or_else(|| state.tuning.bird_spawn().y);

    let below = state.bird.pos.y - target_y;
    below > 0.0 && (state.bird.vel_y >= 0.0 || below > AUTOPILOT_CATCH_UP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::collision::CollisionKind;
    use crate::tuning::Tuning;

    fn flap() -> TickInput {
        TickInput {
            flap: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_tick_ready_to_playing() {
        let mut state = GameState::new(12345, Tuning::default());
        assert_eq!(state.phase, GamePhase::Ready);

        // Tick without input - stays in Ready, nothing moves
        let start = state.bird.pos;
        let front_x = state.pipes.iter().next().map(|p| p.x);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.bird.pos, start);
        assert_eq!(state.pipes.iter().next().map(|p| p.x), front_x);

        // First flap both starts the run and flaps
        tick(&mut state, &flap(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.bird.vel_y < 0.0);
        assert!(state.bird.pos.y < start.y);
        assert_eq!(state.drain_events(), vec![GameEvent::Flap]);
    }

    #[test]
    fn test_consecutive_flaps_do_not_stack() {
        let mut state = GameState::new(12345, Tuning::default());
        tick(&mut state, &flap(), SIM_DT);
        tick(&mut state, &flap(), SIM_DT);
        let expected = state.tuning.flap_impulse + state.tuning.gravity * SIM_DT;
        assert!((state.bird.vel_y - expected).abs() < 0.001);
    }

    #[test]
    fn test_falls_to_ground_and_freezes() {
        let mut state = GameState::new(12345, Tuning::default());
        tick(&mut state, &flap(), SIM_DT);

        let idle = TickInput::default();
        let mut ticks = 0;
        while state.phase == GamePhase::Playing && ticks < 10_000 {
            tick(&mut state, &idle, SIM_DT);
            ticks += 1;
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        let events = state.drain_events();
        assert_eq!(
            events.last(),
            Some(&GameEvent::Collision {
                kind: CollisionKind::Ground
            })
        );
        assert_eq!(state.runs, 1);

        // Frozen: more ticks change nothing
        let bird = state.bird.clone();
        let xs: Vec<f32> = state.pipes.iter().map(|p| p.x).collect();
        for _ in 0..60 {
            tick(&mut state, &idle, SIM_DT);
        }
        assert_eq!(state.bird, bird);
        assert_eq!(state.pipes.iter().map(|p| p.x).collect::<Vec<_>>(), xs);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_hits_ceiling() {
        let mut state = GameState::new(12345, Tuning::default());
        let mut ticks = 0;
        // Flap every tick: straight up
        while state.phase != GamePhase::GameOver && ticks < 10_000 {
            tick(&mut state, &flap(), SIM_DT);
            ticks += 1;
        }
        let events = state.drain_events();
        assert_eq!(
            events.last(),
            Some(&GameEvent::Collision {
                kind: CollisionKind::Ceiling
            })
        );
    }

    #[test]
    fn test_game_over_flap_resets() {
        let mut state = GameState::new(12345, Tuning::default());
        tick(&mut state, &flap(), SIM_DT);
        while state.phase == GamePhase::Playing {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        state.score = 5;
        let old_anchors: Vec<f32> = state.pipes.iter().map(|p| p.anchor).collect();
        let autopilot = TickInput {
            autopilot: true,
            ..Default::default()
        };
        tick(&mut state, &autopilot, SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        tick(&mut state, &flap(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.run_ticks, 0);
        assert_eq!(state.bird.pos, state.tuning.bird_spawn());
        assert_eq!(state.bird.vel_y, 0.0);
        assert_eq!(state.pipes.len(), state.tuning.initial_pipes);
        assert_eq!(state.pipes.spawn_timer(), 0.0);
        assert_eq!(state.pipes.iter().next().map(|p| p.x), Some(940.0));
        assert!(state.pipes.iter().all(|p| !p.counted));
        let new_anchors: Vec<f32> = state.pipes.iter().map(|p| p.anchor).collect();
        assert_ne!(old_anchors, new_anchors);
    }

    #[test]
    fn test_scoring_through_gap() {
        // Park a bird inside the first gap with gravity off and let pipes scroll by
        let tuning = Tuning {
            gravity: 0.0,
            flap_impulse: 0.0,
            ..Default::default()
        };
        let mut state = GameState::new(4242, tuning);
        tick(&mut state, &flap(), SIM_DT);
        let anchor = state.pipes.iter().next().map(|p| p.anchor).unwrap();
        state.bird.pos.y = anchor - 164.0;

        let mut scored = Vec::new();
        while state.score == 0 && state.phase == GamePhase::Playing {
            tick(&mut state, &TickInput::default(), SIM_DT);
            scored.extend(
                state
                    .drain_events()
                    .into_iter()
                    .filter(|e| matches!(e, GameEvent::Scored { .. })),
            );
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 1);
        assert_eq!(scored, vec![GameEvent::Scored { score: 1 }]);
        assert!(state.pipes.iter().next().is_some_and(|p| p.counted));
    }

    #[test]
    fn test_spawn_cadence_while_playing() {
        // Anchors drawn from [800, 900] with 1px columns: nothing near the bird
        let tuning = Tuning {
            gravity: 0.0,
            flap_impulse: 0.0,
            spawn_interval: 0.5,
            pipe_height: 1.0,
            gap: 10.0,
            gap_pad: 0.0,
            top_margin: 790.0,
            bottom_margin: 0.0,
            ..Default::default()
        };
        let dt = 1.0 / 128.0;
        let mut state = GameState::new(5, tuning);
        tick(&mut state, &flap(), dt);
        for _ in 1..(128 * 5) {
            tick(&mut state, &TickInput::default(), dt);
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.run_ticks, 640);
        assert_eq!(state.pipes.spawned(), 10); // floor(5s / 0.5s)
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999, Tuning::default());
        let mut state2 = GameState::new(99999, Tuning::default());
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..2000 {
            tick(&mut state1, &input, SIM_DT);
            tick(&mut state2, &input, SIM_DT);
        }
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.bird, state2.bird);
        assert!(state1.pipes.iter().eq(state2.pipes.iter()));
    }

    #[test]
    fn test_autopilot_clears_pipes() {
        let mut state = GameState::new(2024, Tuning::default());
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        // 8 seconds of flight
        for _ in 0..(8 * 120) {
            tick(&mut state, &input, SIM_DT);
        }
        assert!(state.score >= 1, "autopilot scored {}", state.score);
    }
}
