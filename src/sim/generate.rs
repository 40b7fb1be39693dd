//! Procedural world generation
//!
//! Platforms are always added above the current topmost one, so the world
//! only ever grows upward. Coins and power-ups are sprinkled onto existing
//! platforms by a periodic spawn pass.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Coin, Facing, GameState, Platform, PlatformKind, PowerUp};
use crate::consts::*;
use crate::tuning::Tuning;

/// Uniform sample in [lo, hi)
#[inline]
fn sample(rng: &mut Pcg32, lo: f32, hi: f32) -> f32 {
    lo + rng.random::<f32>() * (hi - lo)
}

/// Build a platform with a weighted-random variant
///
/// One roll decides the variant: below `bounce_threshold` is bounce, below
/// `moving_threshold` is moving, everything else is normal.
pub fn roll_platform(rng: &mut Pcg32, tuning: &Tuning, x: f32, y: f32, width: f32) -> Platform {
    let roll = rng.random::<f32>();
    if roll < tuning.bounce_threshold {
        Platform::new(x, y, width, PlatformKind::Bounce)
    } else if roll < tuning.moving_threshold {
        Platform::moving(x, y, width, tuning.moving_range, tuning.moving_speed)
    } else {
        Platform::new(x, y, width, PlatformKind::Normal)
    }
}

/// Start a fresh run: player back at the bottom, counters zeroed, and a new
/// set of starting platforms. Clouds are left alone.
pub fn reset_world(state: &mut GameState) {
    let viewport = state.viewport;

    state.player.pos = GameState::player_spawn(&viewport);
    state.player.vy = 0.0;
    state.player.facing = Facing::Right;
    state.player.move_speed = state.tuning.move_speed;

    state.score = 0.0;
    state.coin_count = 0;
    state.time_ticks = 0;

    state.platforms.clear();
    state.coins.clear();
    state.power_ups.clear();
    state.particles.clear();
    state.events.clear();

    // Start platform, centered at the bottom
    state.platforms.push(Platform::new(
        viewport.width / 2.0 - START_PLATFORM_WIDTH / 2.0,
        viewport.height - 60.0,
        START_PLATFORM_WIDTH,
        PlatformKind::Normal,
    ));

    let tuning = &state.tuning;
    for i in 1..INITIAL_PLATFORMS {
        let x = state.rng.random::<f32>() * (viewport.width - 100.0).max(0.0);
        let y = viewport.height - i as f32 * INITIAL_PLATFORM_SPACING;
        let width = sample(&mut state.rng, tuning.platform_width_min, tuning.platform_width_max);
        let platform = roll_platform(&mut state.rng, tuning, x, y, width);
        state.platforms.push(platform);
    }

    log::debug!(
        "World reset: {} platforms ({} bounce, {} moving)",
        state.platforms.len(),
        state.platforms.iter().filter(|p| p.kind.is_bounce()).count(),
        state.platforms.iter().filter(|p| p.kind.is_moving()).count(),
    );
}

/// Top the world up to `min_platforms`, stacking new ones above the highest
pub fn fill_platforms(state: &mut GameState) {
    let viewport = state.viewport;
    let tuning = &state.tuning;

    while state.platforms.len() < tuning.min_platforms {
        let top = state
            .platforms
            .iter()
            .map(|p| p.pos.y)
            .fold(f32::INFINITY, f32::min);
        // Empty world: build up from the bottom edge
        let top = if top.is_finite() { top } else { viewport.height };

        let x = state.rng.random::<f32>() * (viewport.width - tuning.platform_width_max).max(0.0);
        let y = top - sample(&mut state.rng, tuning.platform_gap_min, tuning.platform_gap_max);
        let width = sample(&mut state.rng, tuning.platform_width_min, tuning.platform_width_max);
        let platform = roll_platform(&mut state.rng, tuning, x, y, width);
        state.platforms.push(platform);
    }
}

/// Periodic coin / power-up pass over every platform
///
/// A platform only gets a coin when no coin sits within `coin_clearance`
/// (both axes) of its top center. Coins spawned earlier in the same pass
/// count toward that check.
pub fn spawn_collectibles(state: &mut GameState) {
    let GameState {
        platforms,
        coins,
        power_ups,
        rng,
        tuning,
        power_ups_enabled,
        ..
    } = state;

    for platform in platforms.iter() {
        let center_x = platform.pos.x + platform.width / 2.0;
        let has_nearby_coin = coins.iter().any(|coin| {
            (coin.pos.x - center_x).abs() < tuning.coin_clearance
                && (coin.pos.y - platform.pos.y).abs() < tuning.coin_clearance
        });

        if !has_nearby_coin && rng.random::<f32>() < tuning.coin_chance {
            let x = platform.pos.x + rng.random::<f32>() * (platform.width - 20.0) + 10.0;
            coins.push(Coin::new(Vec2::new(x, platform.pos.y - 20.0)));
        }

        if *power_ups_enabled && rng.random::<f32>() < tuning.power_up_chance {
            let x = platform.pos.x + rng.random::<f32>() * (platform.width - 20.0) + 10.0;
            power_ups.push(PowerUp::new(Vec2::new(x, platform.pos.y - 25.0)));
        }
    }
}
