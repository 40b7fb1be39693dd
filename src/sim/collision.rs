//! Collision detection and response
//!
//! Platforms are one-way: the player only lands on them while falling, and
//! passes straight through while rising.

use glam::Vec2;

use super::state::{Platform, Player, Rect};
use crate::tuning::Tuning;

/// A landing resolved this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    /// Player's feet after snapping onto the platform
    pub feet: Vec2,
    pub bounce: bool,
}

/// Landing predicate: overlapping the platform and the player's bottom edge is
/// no more than `vy + tolerance` below the platform top.
///
/// The tolerance lets a falling player sink a little into the platform in a
/// single tick and still land; anything deeper counts as passing through.
#[inline]
pub fn is_landing(player: &Rect, vy: f32, platform: &Platform, tolerance: f32) -> bool {
    platform.collides_with(player) && player.bottom() <= platform.pos.y + vy + tolerance
}

/// Land a falling player on any qualifying platform.
///
/// Platforms are checked in order against the live player state, so when more
/// than one qualifies the last one wins. Nothing happens while rising.
pub fn resolve_landings(player: &mut Player, platforms: &[Platform], tuning: &Tuning) -> Vec<Landing> {
    let mut landings = Vec::new();
    if player.vy <= 0.0 {
        return landings;
    }

    for platform in platforms {
        if !is_landing(&player.rect(), player.vy, platform, tuning.landing_tolerance) {
            continue;
        }

        player.pos.y = platform.pos.y - player.size.y;
        let bounce = platform.kind.is_bounce();
        player.vy = if bounce {
            tuning.bounce_strength()
        } else {
            tuning.jump_strength
        };

        landings.push(Landing {
            feet: player.feet(),
            bounce,
        });
    }

    landings
}
