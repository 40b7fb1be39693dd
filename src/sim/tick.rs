//! Per-frame simulation tick
//!
//! Two entry points run on independent clocks:
//! - `tick` once per rendered frame (physics, pickups, scroll, generation)
//! - `apply_input` on the fixed ~60 Hz input clock (horizontal movement)

use super::camera::follow_player;
use super::collision::{Landing, resolve_landings};
use super::effects::{spawn_coin_particles, spawn_jump_particles, update_particles};
use super::generate::{fill_platforms, reset_world, spawn_collectibles};
use super::state::{Facing, GameEvent, GamePhase, GameState};
use crate::consts::{COIN_DESPAWN_MARGIN, PLATFORM_DESPAWN_MARGIN};

/// Held horizontal input, sampled by the input clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Discrete commands from the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Menu -> Playing
    Start,
    /// GameOver -> Playing
    Restart,
    /// Any -> Menu
    ReturnToMenu,
}

/// Apply a UI command to the state machine. Returns true if the phase changed.
pub fn apply_command(state: &mut GameState, command: Command) -> bool {
    match (command, state.phase) {
        (Command::Start, GamePhase::Menu) | (Command::Restart, GamePhase::GameOver) => {
            reset_world(state);
            state.phase = GamePhase::Playing;
            log::info!("Run started (seed {}, best {})", state.seed, state.best_score);
            true
        }
        (Command::ReturnToMenu, phase) => {
            state.phase = GamePhase::Menu;
            phase != GamePhase::Menu
        }
        (command, phase) => {
            log::debug!("Ignoring {:?} in {:?}", command, phase);
            false
        }
    }
}

/// Horizontal movement and screen wrap for one input-clock step
pub fn apply_input(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let player = &mut state.player;
    if input.left {
        player.pos.x -= player.move_speed;
        player.facing = Facing::Left;
    }
    if input.right {
        player.pos.x += player.move_speed;
        player.facing = Facing::Right;
    }

    // Teleport to the opposite edge once fully off-screen
    let width = state.viewport.width;
    if player.pos.x + player.size.x < 0.0 {
        player.pos.x = width;
    } else if player.pos.x > width {
        player.pos.x = -player.size.x;
    }
}

/// Gravity, integration and landing for one tick
pub fn step_player(state: &mut GameState) -> Vec<Landing> {
    state.player.vy += state.tuning.gravity;
    state.player.pos.y += state.player.vy;
    resolve_landings(&mut state.player, &state.platforms, &state.tuning)
}

/// Advance the game by one frame. No-op unless Playing.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    let width = state.viewport.width;
    for cloud in &mut state.clouds {
        cloud.drift(width);
    }

    for platform in &mut state.platforms {
        platform.update();
    }

    // --- PHYSICS ---
    for landing in step_player(state) {
        spawn_jump_particles(state, landing.feet);
        state.events.push(GameEvent::Landed {
            pos: landing.feet,
            bounce: landing.bounce,
        });
    }

    // --- PICKUPS ---
    collect_coins(state);
    collect_power_ups(state);

    update_particles(&mut state.particles);

    follow_player(state);

    // --- GENERATION ---
    fill_platforms(state);
    if state.time_ticks % state.tuning.coin_spawn_interval.max(1) == 0 {
        spawn_collectibles(state);
    }

    // Prune everything scrolled off the bottom
    let platform_limit = state.viewport.height + PLATFORM_DESPAWN_MARGIN;
    let coin_limit = state.viewport.height + COIN_DESPAWN_MARGIN;
    state.platforms.retain(|p| p.pos.y < platform_limit);
    state.coins.retain(|c| c.pos.y < coin_limit);
    state.power_ups.retain(|p| p.pos.y < coin_limit);

    if state.player.pos.y > state.viewport.height {
        end_run(state);
    }
}

fn collect_coins(state: &mut GameState) {
    let player_rect = state.player.rect();
    let radius = state.tuning.coin_pickup_radius;

    let mut picked = Vec::new();
    for coin in &mut state.coins {
        coin.update();
        if !coin.collected && coin.collides_with(&player_rect, radius) {
            coin.collect();
            picked.push(coin.pos);
        }
    }
    state.coins.retain(|c| !c.collected);

    for pos in picked {
        state.coin_count += 1;
        state.score += state.tuning.coin_score;
        spawn_coin_particles(state, pos);
        state.events.push(GameEvent::CoinCollected { pos });
    }
}

fn collect_power_ups(state: &mut GameState) {
    let player_rect = state.player.rect();

    let mut picked = Vec::new();
    for power_up in &mut state.power_ups {
        if !power_up.collected && power_up.rect().overlaps(&player_rect) {
            power_up.collected = true;
            picked.push(power_up.pos);
        } else {
            power_up.update();
        }
    }
    state.power_ups.retain(|p| !p.collected);

    for pos in picked {
        state.score += state.tuning.power_up_score;
        state.player.move_speed = (state.player.move_speed + 1.0).min(state.tuning.max_move_speed);
        state.events.push(GameEvent::PowerUpCollected { pos });
    }
}

/// Playing -> GameOver; commits a new best score
fn end_run(state: &mut GameState) {
    let score = state.display_score();
    let new_best = score > state.best_score;
    if new_best {
        state.best_score = score;
    }
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::GameOver { score, new_best });

    log::info!(
        "Run over: score {} coins {} best {}{}",
        score,
        state.coin_count,
        state.best_score,
        if new_best { " (new best)" } else { "" }
    );
}
