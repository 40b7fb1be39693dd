//! Data-driven game balance
//!
//! Every number that shapes how the climb feels lives here so it can be
//! overridden from JSON without touching the simulation code.

use serde::{Deserialize, Serialize};

/// Physics, generation and scoring parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    // === Physics ===
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Velocity set on landing on a normal platform (negative is up)
    pub jump_strength: f32,
    /// Bounce platforms multiply the jump strength by this
    pub bounce_multiplier: f32,
    /// Horizontal distance per input step
    pub move_speed: f32,
    /// Upper bound for move speed after power-ups
    pub max_move_speed: f32,
    /// Extra overlap accepted by the landing predicate
    pub landing_tolerance: f32,

    // === World generation ===
    /// Generator tops the world up to this many platforms
    pub min_platforms: usize,
    /// Vertical gap between a new platform and the current topmost one
    pub platform_gap_min: f32,
    pub platform_gap_max: f32,
    pub platform_width_min: f32,
    pub platform_width_max: f32,
    /// Rolls below this become bounce platforms
    pub bounce_threshold: f32,
    /// Rolls below this (and above bounce) become moving platforms
    pub moving_threshold: f32,
    /// Moving platform half-range and per-tick speed
    pub moving_range: f32,
    pub moving_speed: f32,

    // === Collectibles ===
    /// Ticks between coin-spawn passes
    pub coin_spawn_interval: u64,
    /// Per-platform coin chance on each pass
    pub coin_chance: f32,
    /// Distance at which a coin is picked up
    pub coin_pickup_radius: f32,
    /// Half extent of the "nearby coin" box around a platform's top center
    pub coin_clearance: f32,
    pub coin_score: f32,
    /// Per-platform power-up chance on each pass
    pub power_up_chance: f32,
    pub power_up_score: f32,

    // === Scoring ===
    /// Score gained per unit of camera scroll
    pub scroll_score_factor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_strength: -15.0,
            bounce_multiplier: 1.5,
            move_speed: 6.0,
            max_move_speed: 8.0,
            landing_tolerance: 10.0,

            min_platforms: 12,
            platform_gap_min: 60.0,
            platform_gap_max: 100.0,
            platform_width_min: 80.0,
            platform_width_max: 120.0,
            bounce_threshold: 0.2,
            moving_threshold: 0.3,
            moving_range: 100.0,
            moving_speed: 1.0,

            coin_spawn_interval: 60,
            coin_chance: 0.05,
            coin_pickup_radius: 20.0,
            coin_clearance: 50.0,
            coin_score: 50.0,
            power_up_chance: 0.01,
            power_up_score: 100.0,

            scroll_score_factor: 0.1,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides; fields left out keep their defaults
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject ranges the generator cannot sample from
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.platform_width_min <= 0.0 || self.platform_width_min > self.platform_width_max {
            anyhow::bail!(
                "platform width range [{}, {}] is invalid",
                self.platform_width_min,
                self.platform_width_max
            );
        }
        if self.platform_gap_min > self.platform_gap_max {
            anyhow::bail!(
                "platform gap range [{}, {}] is invalid",
                self.platform_gap_min,
                self.platform_gap_max
            );
        }
        if self.moving_range < 0.0 || self.moving_speed < 0.0 {
            anyhow::bail!(
                "moving platform range {} and speed {} must not be negative",
                self.moving_range,
                self.moving_speed
            );
        }
        if self.coin_spawn_interval == 0 {
            anyhow::bail!("coin_spawn_interval must be at least 1 tick");
        }
        Ok(())
    }

    /// Velocity after landing on a bounce platform
    pub fn bounce_strength(&self) -> f32 {
        self.jump_strength * self.bounce_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_feel() {
        let t = Tuning::default();
        assert_eq!(t.gravity, 0.5);
        assert_eq!(t.jump_strength, -15.0);
        assert_eq!(t.bounce_strength(), -22.5);
        assert_eq!(t.min_platforms, 12);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "gravity": 0.8, "min_platforms": 20 }"#).unwrap();
        assert_eq!(t.gravity, 0.8);
        assert_eq!(t.min_platforms, 20);
        assert_eq!(t.move_speed, 6.0);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Tuning::from_json(r#"{ "gravitee": 1.0 }"#).is_err());
    }

    #[test]
    fn test_inverted_width_range_rejected() {
        let json = r#"{ "platform_width_min": 150.0, "platform_width_max": 100.0 }"#;
        assert!(Tuning::from_json(json).is_err());
    }

    #[test]
    fn test_negative_moving_range_rejected() {
        assert!(Tuning::from_json(r#"{ "moving_range": -10.0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "moving_speed": -1.0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "moving_range": 0.0 }"#).is_ok());
    }
}
