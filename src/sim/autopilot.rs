//! Demo autopilot
//!
//! Presses the keys a player would: flap to start, restart after a crash, and
//! while playing keep the actor inside the next opening.

use super::obstacle::Orientation;
use super::state::{GameState, Phase};
use super::tick::TickInput;
use crate::consts::*;

/// Flap once the actor's bottom edge would sink this close to the lower half
const FLAP_MARGIN: f32 = 12.0;

/// Gap top of the nearest opening the actor has not cleared yet
pub fn next_gap_top(state: &GameState) -> f32 {
    state
        .obstacles
        .iter()
        .filter(|o| o.bounding_box().right() >= ACTOR_START_X)
        .find(|o| o.orientation == Orientation::Upper)
        .map(|upper| upper.pos.y)
        .unwrap_or((WINDOW_HEIGHT - GAP_HEIGHT) / 2.0)
}

/// Input for the next tick
pub fn autopilot_input(state: &GameState) -> TickInput {
    match state.phase() {
        Phase::Waiting => TickInput::flap(),
        Phase::Over => TickInput::restart(),
        Phase::Active => {
            // Bottom edge after this tick's integration; a flap lifts the actor
            // about 68 units, which still clears the upper half from here
            let bounds = state.actor.bounding_box();
            let next_bottom = bounds.bottom() + state.actor.vertical_velocity;
            let floor_of_gap = next_gap_top(state) + GAP_HEIGHT;
            if next_bottom >= floor_of_gap - FLAP_MARGIN {
                TickInput::flap()
            } else {
                TickInput::default()
            }
        }
    }
}
