//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Collections mutated only through retain/push passes, once per tick
//! - No rendering, storage or platform dependencies

pub mod camera;
pub mod collision;
pub mod effects;
pub mod generate;
pub mod state;
pub mod tick;

pub use camera::{follow_player, shift_world};
pub use collision::{Landing, is_landing, resolve_landings};
pub use effects::{spawn_coin_particles, spawn_jump_particles, update_particles};
pub use generate::{fill_platforms, reset_world, roll_platform, spawn_collectibles};
pub use state::{
    Cloud, Coin, Facing, GameEvent, GamePhase, GameState, Particle, ParticleColor, Platform,
    PlatformKind, Player, PowerUp, Rect, Viewport,
};
pub use tick::{Command, TickInput, apply_command, apply_input, step_player, tick};
