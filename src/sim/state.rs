//! Game state and core simulation types
//!
//! Everything the update loop touches lives in `GameState`; rendering and the
//! UI layer only ever read it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Title screen, nothing simulates
    #[default]
    Menu,
    /// Active climb
    Playing,
    /// Player fell off the bottom
    GameOver,
}

/// Logical drawing area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: MAX_VIEWPORT_WIDTH,
            height: MAX_VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    /// Fit to a container, capped at 400x600
    pub fn fit(container_width: f32, container_height: f32) -> Self {
        Self {
            width: container_width.clamp(1.0, MAX_VIEWPORT_WIDTH),
            height: container_height.clamp(1.0, MAX_VIEWPORT_HEIGHT),
        }
    }

    /// Camera threshold: the player is kept at or below this line
    #[inline]
    pub fn mid_y(&self) -> f32 {
        self.height / 2.0
    }
}

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict overlap: touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        other.x < self.right()
            && other.right() > self.x
            && other.y < self.bottom()
            && other.bottom() > self.y
    }
}

/// Horizontal facing, flipped by the last movement input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The climber
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative is up)
    pub vy: f32,
    pub facing: Facing,
    /// Horizontal step per input tick (power-ups raise it)
    pub move_speed: f32,
}

impl Player {
    pub fn new(pos: Vec2, move_speed: f32) -> Self {
        Self {
            pos,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vy: 0.0,
            facing: Facing::Right,
            move_speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// Bottom-center point, where jump particles spawn
    pub fn feet(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y + self.size.y)
    }
}

/// Platform variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformKind {
    Normal,
    /// Launches the player higher
    Bounce,
    /// Oscillates horizontally around `origin_x`
    Moving {
        origin_x: f32,
        range: f32,
        speed: f32,
        /// +1.0 or -1.0
        direction: f32,
    },
}

impl PlatformKind {
    pub fn is_bounce(&self) -> bool {
        matches!(self, PlatformKind::Bounce)
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, PlatformKind::Moving { .. })
    }
}

/// A platform the player can land on from above
#[derive(Debug, Clone)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, kind: PlatformKind) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            height: PLATFORM_HEIGHT,
            kind,
        }
    }

    /// A moving platform anchored at `x`
    /// Oscillating platform; a negative `range` is treated as its magnitude
    pub fn moving(x: f32, y: f32, width: f32, range: f32, speed: f32) -> Self {
        Self::new(
            x,
            y,
            width,
            PlatformKind::Moving {
                origin_x: x,
                range: range.abs(),
                speed,
                direction: 1.0,
            },
        )
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Advance oscillation; x never leaves [origin_x - range, origin_x + range]
    pub fn update(&mut self) {
        if let PlatformKind::Moving {
            origin_x,
            range,
            speed,
            ref mut direction,
        } = self.kind
        {
            self.pos.x += speed * *direction;
            let (lo, hi) = (origin_x - range, origin_x + range);
            if self.pos.x > hi || self.pos.x < lo {
                self.pos.x = self.pos.x.clamp(lo, hi);
                *direction = -*direction;
            }
        }
    }

    /// Strict AABB overlap with `rect`
    pub fn collides_with(&self, rect: &Rect) -> bool {
        self.rect().overlaps(rect)
    }
}

/// A collectible coin
#[derive(Debug, Clone)]
pub struct Coin {
    pub pos: Vec2,
    /// Drives the pulsing radius; only ever increases
    pub animation: f32,
    pub collected: bool,
}

impl Coin {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            animation: 0.0,
            collected: false,
        }
    }

    pub fn update(&mut self) {
        self.animation += COIN_ANIMATION_STEP;
    }

    /// Rendered radius
    pub fn radius(&self) -> f32 {
        12.0 + self.animation.sin() * 2.0
    }

    /// Center-to-center distance test against a rect
    pub fn collides_with(&self, rect: &Rect, pickup_radius: f32) -> bool {
        self.pos.distance(rect.center()) < pickup_radius
    }

    /// Mark as picked up; never reverts
    pub fn collect(&mut self) {
        self.collected = true;
    }
}

/// A power-up box that speeds up horizontal movement
#[derive(Debug, Clone)]
pub struct PowerUp {
    /// Box center
    pub pos: Vec2,
    pub animation: f32,
    pub collected: bool,
}

impl PowerUp {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            animation: 0.0,
            collected: false,
        }
    }

    /// Bob up and down
    pub fn update(&mut self) {
        self.animation += POWER_UP_ANIMATION_STEP;
        self.pos.y += self.animation.sin() * 0.5;
    }

    pub fn rect(&self) -> Rect {
        let half = POWER_UP_SIZE / 2.0;
        Rect::new(self.pos.x - half, self.pos.y - half, POWER_UP_SIZE, POWER_UP_SIZE)
    }
}

/// Particle palette (resolved to real colors by the renderer)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleColor {
    Grass,
    White,
    Sky,
    Gold,
}

/// A particle for visual effects
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: ParticleColor,
    /// Ticks remaining
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, color: ParticleColor) -> Self {
        Self {
            pos,
            vel,
            color,
            life: PARTICLE_LIFE,
            max_life: PARTICLE_LIFE,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.vel.y += PARTICLE_GRAVITY;
        self.life = self.life.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Shrinks with remaining life, never below 1
    pub fn radius(&self) -> f32 {
        (4.0 * self.life as f32 / self.max_life.max(1) as f32).max(1.0)
    }
}

/// Decorative background cloud
#[derive(Debug, Clone)]
pub struct Cloud {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

impl Cloud {
    /// Drift right, wrapping back to the left edge
    pub fn drift(&mut self, viewport_width: f32) {
        self.pos.x += self.speed;
        if self.pos.x > viewport_width + self.size {
            self.pos.x = -self.size;
        }
    }
}

/// Things that happened during a tick, drained by the driver
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Landed { pos: Vec2, bounce: bool },
    CoinCollected { pos: Vec2 },
    PowerUpCollected { pos: Vec2 },
    GameOver { score: u64, new_best: bool },
}

/// Complete world state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub power_ups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Background clouds; survive resets
    pub clouds: Vec<Cloud>,
    /// Fractional score (scroll distance plus pickups)
    pub score: f32,
    pub coin_count: u32,
    /// Best score across sessions
    pub best_score: u64,
    /// Simulation ticks since reset
    pub time_ticks: u64,
    /// Upper bound on live particles (0 disables them)
    pub particle_limit: usize,
    pub power_ups_enabled: bool,
    /// Pending events for the driver
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a world in the Menu phase with the given seed
    pub fn new(seed: u64, viewport: Viewport, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let clouds = (0..CLOUD_COUNT)
            .map(|_| spawn_cloud(&mut rng, &viewport))
            .collect();
        let player = Player::new(Self::player_spawn(&viewport), tuning.move_speed);

        Self {
            seed,
            rng,
            tuning,
            viewport,
            phase: GamePhase::Menu,
            player,
            platforms: Vec::new(),
            coins: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            clouds,
            score: 0.0,
            coin_count: 0,
            best_score: 0,
            time_ticks: 0,
            particle_limit: usize::MAX,
            power_ups_enabled: true,
            events: Vec::new(),
        }
    }

    /// Player start: centered, 100 units above the bottom
    pub fn player_spawn(viewport: &Viewport) -> Vec2 {
        Vec2::new(
            viewport.width / 2.0 - PLAYER_WIDTH / 2.0,
            viewport.height - 100.0,
        )
    }

    /// Whole-number score shown to the player
    pub fn display_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }

    /// Trim or top up the background clouds (quality presets)
    pub fn set_cloud_count(&mut self, count: usize) {
        self.clouds.truncate(count);
        while self.clouds.len() < count {
            let cloud = spawn_cloud(&mut self.rng, &self.viewport);
            self.clouds.push(cloud);
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

fn spawn_cloud(rng: &mut Pcg32, viewport: &Viewport) -> Cloud {
    Cloud {
        pos: Vec2::new(
            rng.random::<f32>() * (viewport.width + 100.0) - 50.0,
            rng.random::<f32>() * (viewport.height - 100.0).max(0.0) + 50.0,
        ),
        size: rng.random::<f32>() * 40.0 + 40.0,
        speed: rng.random::<f32>() * 0.6 + 0.2,
    }
}
