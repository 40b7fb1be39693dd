//! Climb High - An endless platform climber
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, world generation, game state)
//! - `renderer`: 2D drawing surface abstraction and scene drawing
//! - `platform`: Browser/native input abstraction
//! - `persistence`: Key-value storage backends
//! - `tuning`: Data-driven game balance

pub mod clock;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use clock::InputClock;
pub use game::{Game, RunSummary};
pub use highscores::HighScore;
pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Largest logical viewport the game will use
    pub const MAX_VIEWPORT_WIDTH: f32 = 400.0;
    pub const MAX_VIEWPORT_HEIGHT: f32 = 600.0;

    /// Player bounding box
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;

    /// Every platform is this tall; width varies
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Start platform width (centered at the bottom)
    pub const START_PLATFORM_WIDTH: f32 = 120.0;
    /// Platforms seeded on reset, including the start platform
    pub const INITIAL_PLATFORMS: usize = 8;
    /// Vertical spacing of the seeded platforms
    pub const INITIAL_PLATFORM_SPACING: f32 = 80.0;

    /// Entities below viewport bottom + margin are pruned
    pub const PLATFORM_DESPAWN_MARGIN: f32 = 50.0;
    pub const COIN_DESPAWN_MARGIN: f32 = 100.0;

    /// Input clock period (setInterval of 16 ms, ~60 Hz)
    pub const INPUT_INTERVAL: f32 = 0.016;
    /// Maximum input steps replayed per advance to prevent spiral of death
    pub const MAX_INPUT_STEPS: u32 = 8;

    /// Particle lifetime in ticks
    pub const PARTICLE_LIFE: u32 = 30;
    /// Downward acceleration applied to particles each tick
    pub const PARTICLE_GRAVITY: f32 = 0.1;
    pub const JUMP_PARTICLES: usize = 6;
    pub const COIN_PARTICLES: usize = 8;

    /// Coin animation phase advance per tick
    pub const COIN_ANIMATION_STEP: f32 = 0.2;
    /// Power-up bob phase advance per tick
    pub const POWER_UP_ANIMATION_STEP: f32 = 0.1;
    /// Power-up pickup box edge length
    pub const POWER_UP_SIZE: f32 = 32.0;

    /// Decorative clouds created with the world
    pub const CLOUD_COUNT: usize = 8;
}
