//! Vertical camera scroll
//!
//! The camera never moves; instead, once the player climbs above the middle of
//! the viewport, the whole world is pushed down by the same amount and the
//! player is pinned back to the middle.

use super::state::GameState;

/// Scroll the world if the player is above the midline.
///
/// Returns the applied offset (0.0 when no scroll happened). The offset is
/// credited to the score at `scroll_score_factor` points per unit.
pub fn follow_player(state: &mut GameState) -> f32 {
    let mid_y = state.viewport.mid_y();
    if state.player.pos.y >= mid_y {
        return 0.0;
    }

    let offset = mid_y - state.player.pos.y;
    state.player.pos.y = mid_y;
    state.score += offset * state.tuning.scroll_score_factor;
    shift_world(state, offset);
    offset
}

/// Move every world entity down by `offset`.
///
/// Only y changes, so moving platforms keep their oscillation anchor.
pub fn shift_world(state: &mut GameState, offset: f32) {
    for platform in &mut state.platforms {
        platform.pos.y += offset;
    }
    for coin in &mut state.coins {
        coin.pos.y += offset;
    }
    for power_up in &mut state.power_ups {
        power_up.pos.y += offset;
    }
    for particle in &mut state.particles {
        particle.pos.y += offset;
    }
}
