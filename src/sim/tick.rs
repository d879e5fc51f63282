//! Fixed tick simulation
//!
//! Core game loop that advances the session one frame at a time. The step
//! order matters: each step sees the changes made by the ones before it.

use super::scene::{DrawRequest, build_scene};
use super::state::{GameEvent, GameState, Phase};

/// Input events delivered by the window for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    WindowClosed,
    /// Space
    FlapPressed,
    /// C, only meaningful once the round is over
    RestartPressed,
}

/// Input for a single tick, in delivery order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn flap() -> Self {
        Self::new([InputEvent::FlapPressed])
    }

    pub fn restart() -> Self {
        Self::new([InputEvent::RestartPressed])
    }
}

/// Everything a tick asks of its collaborators
#[derive(Debug, Clone, Default)]
pub struct TickOutput {
    /// Events in the order they happened (sounds are derived from these)
    pub events: Vec<GameEvent>,
    /// The frame just computed, back to front
    pub scene: Vec<DrawRequest>,
    /// The window asked to close; the driver should stop ticking
    pub window_closed: bool,
}

impl TickOutput {
    pub fn sounds(&self) -> impl Iterator<Item = crate::audio::SoundEffect> + '_ {
        self.events.iter().filter_map(GameEvent::sound)
    }
}

/// Advance the session by one tick
///
/// Ceiling, floor and collision checks deliberately see the position after
/// this tick's integration, so they fire one tick earlier than a check on the
/// position read at the start of the tick would.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutput {
    let now = state.time_ticks;

    // Wings keep flapping until the round is over
    if state.phase() != Phase::Over {
        state.actor.advance_animation(now);
    }

    // Gravity, ceiling and floor
    if state.round().is_active() {
        state.actor.advance_physics();
        if !state.actor.clamp_to_ceiling() && state.actor.below_floor() {
            state.end_round();
        }
    }

    // One point per tick at most, however many obstacles are on the line
    if state.round().is_active() && state.obstacles.at_scoring_line() {
        state.award_point();
    }

    if state.round().is_active() {
        state.spawn_due_obstacles();
        state.obstacles.advance();
    }

    state.obstacles.prune_offscreen(now);

    if state.round().is_active() {
        let bounds = state.actor.bounding_box();
        if state.obstacles.collides_with(&bounds) {
            state.end_round();
        }
    }

    let window_closed = handle_input(state, input);

    let output = TickOutput {
        events: state.drain_events(),
        scene: build_scene(state),
        window_closed,
    };

    state.time_ticks = state.time_ticks.wrapping_add(1);
    output
}

/// Apply input events in order. Returns true if the window was closed.
fn handle_input(state: &mut GameState, input: &TickInput) -> bool {
    let mut window_closed = false;
    for event in &input.events {
        match event {
            InputEvent::WindowClosed => window_closed = true,
            InputEvent::FlapPressed => {
                // The first flap starts the round and flaps in the same tick
                if state.phase() == Phase::Waiting {
                    state.begin_round();
                }
                if state.round().is_active() {
                    state.flap();
                } else {
                    log::trace!("Ignoring flap while {:?}", state.phase());
                }
            }
            InputEvent::RestartPressed => {
                if state.phase() == Phase::Over {
                    state.restart_round();
                } else {
                    log::trace!("Ignoring restart while {:?}", state.phase());
                }
            }
        }
    }
    window_closed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundEffect;
    use crate::consts::*;
    use crate::sim::Actor;
    use glam::Vec2;
    use proptest::prelude::*;

    fn active_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        tick(&mut state, &TickInput::flap());
        assert_eq!(state.phase(), Phase::Active);
        state
    }

    /// Keep the actor hovering mid-screen so it never hits the floor
    fn hold_actor(state: &mut GameState) {
        state.actor.pos = Actor::start_position();
        state.actor.vertical_velocity = 0.0;
    }

    #[test]
    fn test_first_flap_starts_and_impulses() {
        let mut state = GameState::new(12345);
        assert_eq!(state.phase(), Phase::Waiting);

        // Tick without input - should stay waiting and not move
        let out = tick(&mut state, &TickInput::default());
        assert_eq!(state.phase(), Phase::Waiting);
        assert!(out.events.is_empty());
        assert_eq!(state.actor.pos, Actor::start_position());

        let out = tick(&mut state, &TickInput::flap());
        assert_eq!(state.phase(), Phase::Active);
        assert_eq!(state.actor.vertical_velocity, FLAP_IMPULSE);
        assert_eq!(out.events, vec![GameEvent::RoundStarted, GameEvent::Flapped]);
        assert_eq!(out.sounds().collect::<Vec<_>>(), vec![SoundEffect::Flap]);
    }

    #[test]
    fn test_no_motion_outside_active() {
        let mut state = GameState::new(5);
        state.obstacles.spawn_pair(600.0, 150.0);
        state.actor.vertical_velocity = 3.0;
        for _ in 0..200 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.actor.pos, Actor::start_position());
        assert_eq!(state.actor.vertical_velocity, 3.0);
        assert!(state.obstacles.iter().all(|o| o.pos.x == 600.0));
    }

    #[test]
    fn test_one_pair_spawns_at_tick_150() {
        let mut state = active_state(77);
        assert_eq!(state.time_ticks, 1);

        let mut spawn_ticks = Vec::new();
        for _ in 0..150 {
            hold_actor(&mut state);
            let before = state.obstacles.len();
            let now = state.time_ticks;
            tick(&mut state, &TickInput::default());
            if state.obstacles.len() > before {
                spawn_ticks.push(now);
            }
        }

        assert_eq!(state.phase(), Phase::Active);
        assert_eq!(spawn_ticks, vec![150]);
        assert_eq!(state.obstacles.len(), 2);
        // Spawned at the right edge then scrolled once in the same tick
        assert!(state.obstacles.iter().all(|o| o.pos.x == WINDOW_WIDTH - SCROLL_SPEED));
    }

    #[test]
    fn test_floor_ends_round() {
        let mut state = active_state(9);
        state.actor.pos.y = WINDOW_HEIGHT + 1.0;
        state.actor.vertical_velocity = 2.0;

        let out = tick(&mut state, &TickInput::default());
        assert_eq!(state.phase(), Phase::Over);
        assert_eq!(state.actor.vertical_velocity, 0.0);
        assert_eq!(out.sounds().collect::<Vec<_>>(), vec![SoundEffect::Crash]);

        // Frozen afterwards: no physics, no animation, no flaps
        let pos = state.actor.pos;
        let frame = state.actor.frame;
        let out = tick(&mut state, &TickInput::flap());
        assert!(out.events.is_empty());
        assert_eq!(state.actor.pos, pos);
        assert_eq!(state.actor.frame, frame);
        assert_eq!(state.actor.vertical_velocity, 0.0);
    }

    #[test]
    fn test_ceiling_bounces_without_ending() {
        let mut state = active_state(9);
        state.actor.pos.y = 2.0;
        state.actor.vertical_velocity = -6.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase(), Phase::Active);
        assert_eq!(state.actor.pos, Vec2::new(ACTOR_START_X, 0.0));
        assert_eq!(state.actor.vertical_velocity, 0.0);
    }

    #[test]
    fn test_pair_on_scoring_line_scores_once() {
        let mut state = active_state(11);
        hold_actor(&mut state);
        // Gap 275..425 leaves the actor (300..348) clear
        state.obstacles.spawn_pair(ACTOR_START_X, 275.0);

        let out = tick(&mut state, &TickInput::default());
        assert_eq!(state.phase(), Phase::Active);
        assert_eq!(state.score(), 1);
        assert_eq!(state.high_score(), 1);
        assert_eq!(out.events, vec![GameEvent::Scored { score: 1 }]);
        assert_eq!(out.sounds().collect::<Vec<_>>(), vec![SoundEffect::Score]);
    }

    #[test]
    fn test_coinciding_pairs_score_once() {
        let mut state = active_state(11);
        hold_actor(&mut state);
        state.obstacles.spawn_pair(ACTOR_START_X, 275.0);
        state.obstacles.spawn_pair(ACTOR_START_X, 275.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_collision_ends_round_once() {
        let mut state = active_state(13);
        hold_actor(&mut state);
        // Both halves overlap the actor column; the gap is far above
        state.obstacles.spawn_pair(ACTOR_START_X + 10.0, -400.0);
        state.obstacles.spawn_pair(ACTOR_START_X + 20.0, -400.0);

        let out = tick(&mut state, &TickInput::default());
        assert_eq!(state.phase(), Phase::Over);
        assert_eq!(out.events, vec![GameEvent::Crashed]);
        assert_eq!(state.actor.vertical_velocity, 0.0);
    }

    #[test]
    fn test_restart_resets_round() {
        let mut state = active_state(21);
        hold_actor(&mut state);
        state.obstacles.spawn_pair(ACTOR_START_X, 275.0);
        tick(&mut state, &TickInput::default());
        state.actor.pos.y = WINDOW_HEIGHT + 5.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase(), Phase::Over);

        // Restart is ignored until the round is over, flaps are ignored while over
        let input = TickInput::new([InputEvent::FlapPressed, InputEvent::RestartPressed]);
        let out = tick(&mut state, &input);
        assert_eq!(out.events, vec![GameEvent::RoundReset]);
        assert_eq!(state.phase(), Phase::Waiting);
        assert_eq!(state.score(), 0);
        assert_eq!(state.high_score(), 1);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.actor.pos, Actor::start_position());
        assert_eq!(state.actor.vertical_velocity, 0.0);
    }

    #[test]
    fn test_restart_ignored_while_active() {
        let mut state = active_state(21);
        let out = tick(&mut state, &TickInput::restart());
        assert!(out.events.is_empty());
        assert_eq!(state.phase(), Phase::Active);
    }

    #[test]
    fn test_window_closed_reported() {
        let mut state = GameState::new(1);
        let out = tick(&mut state, &TickInput::new([InputEvent::WindowClosed]));
        assert!(out.window_closed);
        let out = tick(&mut state, &TickInput::default());
        assert!(!out.window_closed);
    }

    #[test]
    fn test_game_over_scene_blinks() {
        let mut state = active_state(2);
        state.actor.pos.y = WINDOW_HEIGHT + 10.0;
        state.actor.vertical_velocity = 0.0;
        let mut prompts = Vec::new();
        for _ in 0..120 {
            let now = state.time_ticks;
            let out = tick(&mut state, &TickInput::default());
            assert!(out.scene.iter().any(|r| matches!(r, DrawRequest::GameOverPanel { .. })));
            let prompt = out
                .scene
                .iter()
                .any(|r| matches!(r, DrawRequest::ContinuePrompt { .. }));
            prompts.push((now, prompt));
        }
        assert!(prompts.iter().all(|&(t, shown)| shown == (t % 60 < 30)));
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and inputs stay identical
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        for i in 0..600u64 {
            let input = if i % 18 == 0 {
                TickInput::flap()
            } else {
                TickInput::default()
            };
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.phase(), state2.phase());
        assert_eq!(state1.actor.pos, state2.actor.pos);
        let a: Vec<_> = state1.obstacles.iter().copied().collect();
        let b: Vec<_> = state2.obstacles.iter().copied().collect();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_score_steps_by_one_and_best_holds(
            seed in any::<u64>(),
            flaps in proptest::collection::vec(any::<bool>(), 1..900),
        ) {
            let mut state = GameState::new(seed);
            let mut best = 0;
            for (i, &flap) in flaps.iter().enumerate() {
                let before = state.score();
                let phase_before = state.phase();
                let mut events = Vec::new();
                if flap && i % 4 == 0 {
                    events.push(InputEvent::FlapPressed);
                }
                if i % 97 == 0 {
                    events.push(InputEvent::RestartPressed);
                }
                tick(&mut state, &TickInput::new(events));

                let after = state.score();
                if state.phase() == Phase::Waiting && phase_before == Phase::Over {
                    prop_assert_eq!(after, 0);
                    prop_assert!(state.obstacles.is_empty());
                } else {
                    prop_assert!(after == before || after == before + 1);
                }
                prop_assert!(state.high_score() >= best);
                prop_assert!(state.high_score() >= after);
                best = state.high_score();
            }
        }
    }
}
