//! Scene drawing
//!
//! Draw order: sky, clouds, platforms, coins, power-ups, particles, player.
//! Only the Playing phase draws anything; menu and game-over screens belong
//! to the UI layer.

use glam::Vec2;

use super::palette::*;
use super::{Color, Surface};
use crate::sim::{
    Cloud, Coin, Facing, GamePhase, GameState, Particle, ParticleColor, Platform, PlatformKind,
    Player, PowerUp,
};

/// Redraw the whole frame from `state`
pub fn draw(state: &GameState, surface: &mut dyn Surface) {
    let viewport = state.viewport;
    surface.clear(viewport.width, viewport.height);

    if state.phase != GamePhase::Playing {
        return;
    }

    surface.fill_gradient_rect(0.0, 0.0, viewport.width, viewport.height, SKY_BLUE, SKY_HORIZON);
    for cloud in &state.clouds {
        draw_cloud(cloud, surface);
    }
    for platform in &state.platforms {
        draw_platform(platform, surface);
    }
    for coin in state.coins.iter().filter(|c| !c.collected) {
        draw_coin(coin, surface);
    }
    for power_up in state.power_ups.iter().filter(|p| !p.collected) {
        draw_power_up(power_up, surface);
    }
    for particle in state.particles.iter().filter(|p| p.is_alive()) {
        draw_particle(particle, surface);
    }
    draw_player(&state.player, surface);
}

fn draw_cloud(cloud: &Cloud, surface: &mut dyn Surface) {
    let (p, s) = (cloud.pos, cloud.size);
    surface.fill_circle(p, s * 0.6, CLOUD_WHITE);
    surface.fill_circle(p + Vec2::new(-s * 0.4, 0.0), s * 0.4, CLOUD_WHITE);
    surface.fill_circle(p + Vec2::new(s * 0.4, 0.0), s * 0.4, CLOUD_WHITE);
    surface.fill_circle(p + Vec2::new(-s * 0.2, -s * 0.3), s * 0.35, CLOUD_WHITE);
    surface.fill_circle(p + Vec2::new(s * 0.2, -s * 0.3), s * 0.35, CLOUD_WHITE);
}

fn draw_platform(platform: &Platform, surface: &mut dyn Surface) {
    let (x, y, w, h) = (platform.pos.x, platform.pos.y, platform.width, platform.height);

    surface.fill_rect(x + 2.0, y + 2.0, w, h, SHADOW_GRAY);

    match platform.kind {
        PlatformKind::Bounce => {
            surface.fill_rect(x, y, w, h, PLATFORM_SPECIAL);
            surface.stroke_rect(x, y, w, h, BLACK, 2.0);
            // Spring bar
            let cx = x + w / 2.0;
            surface.stroke_path(&[Vec2::new(cx - 10.0, y + 5.0), Vec2::new(cx + 10.0, y + 5.0)], BLACK, 3.0);
        }
        PlatformKind::Moving { .. } => {
            surface.fill_rect(x, y, w, h, PLATFORM_MOVING);
            surface.stroke_rect(x, y, w, h, BLACK, 2.0);
            // Direction arrow
            let mid = y + h / 2.0;
            surface.fill_polygon(
                &[
                    Vec2::new(x + 10.0, mid),
                    Vec2::new(x + 20.0, mid - 5.0),
                    Vec2::new(x + 20.0, mid + 5.0),
                ],
                WHITE,
            );
        }
        PlatformKind::Normal => {
            surface.fill_rect(x, y, w, h, PLATFORM_GREEN);
            surface.stroke_rect(x, y, w, h, PLATFORM_DARK, 2.0);
            // Grass tufts
            let mut gx = x + 5.0;
            while gx < x + w - 5.0 {
                surface.stroke_path(&[Vec2::new(gx, y), Vec2::new(gx, y - 3.0)], PLATFORM_GRASS, 2.0);
                gx += 8.0;
            }
        }
    }
}

fn draw_coin(coin: &Coin, surface: &mut dyn Surface) {
    let r = coin.radius();
    surface.fill_circle(coin.pos, r, COIN_GOLD);
    surface.stroke_circle(coin.pos, r, BLACK, 2.0);
    surface.fill_text("$", coin.pos + Vec2::new(0.0, 4.0), 12.0, BLACK);
}

fn draw_power_up(power_up: &PowerUp, surface: &mut dyn Surface) {
    let half = 8.0;
    let (x, y) = (power_up.pos.x - half, power_up.pos.y - half);
    surface.fill_rect(x, y, half * 2.0, half * 2.0, POWER_UP_PURPLE);
    surface.stroke_rect(x, y, half * 2.0, half * 2.0, BLACK, 2.0);
    surface.fill_text("!", power_up.pos + Vec2::new(0.0, 4.0), 12.0, WHITE);
}

fn particle_color(color: ParticleColor) -> Color {
    match color {
        ParticleColor::Grass => PLATFORM_GREEN,
        ParticleColor::White => WHITE,
        ParticleColor::Sky => SKY_BLUE,
        ParticleColor::Gold => COIN_GOLD,
    }
}

fn draw_particle(particle: &Particle, surface: &mut dyn Surface) {
    surface.fill_circle(particle.pos, particle.radius(), particle_color(particle.color));
}

fn draw_player(player: &Player, surface: &mut dyn Surface) {
    let (x, y) = (player.pos.x, player.pos.y);
    let (w, h) = (player.size.x, player.size.y);
    let right = player.facing == Facing::Right;

    // Shadow
    surface.fill_rect(x + 4.0, y + h - 4.0, w - 8.0, 8.0, SHADOW_GRAY);

    // Feet, legs, body, suspenders
    surface.fill_rect(x + 2.0, y + 40.0, 12.0, 8.0, PLAYER_BROWN);
    surface.fill_rect(x + 26.0, y + 40.0, 12.0, 8.0, PLAYER_BROWN);
    surface.fill_rect(x + 8.0, y + 28.0, 24.0, 16.0, PLAYER_BLUE);
    surface.fill_rect(x + 4.0, y + 16.0, 32.0, 20.0, PLAYER_RED);
    surface.fill_rect(x + 12.0, y + 18.0, 6.0, 12.0, PLAYER_YELLOW);
    surface.fill_rect(x + 22.0, y + 18.0, 6.0, 12.0, PLAYER_YELLOW);

    // Head and hat
    surface.fill_rect(x + 8.0, y + 4.0, 24.0, 20.0, PLAYER_SKIN);
    surface.fill_rect(x + 6.0, y, 28.0, 12.0, PLAYER_RED);
    let brim_x = if right { x + 30.0 } else { x + 2.0 };
    surface.fill_rect(brim_x, y + 6.0, 8.0, 6.0, PLAYER_RED);

    // Eyes look the way we're facing
    surface.fill_circle(Vec2::new(x + 16.0, y + 12.0), 3.0, BLACK);
    surface.fill_circle(Vec2::new(x + 24.0, y + 12.0), 3.0, BLACK);
    let look = if right { 1.0 } else { -1.0 };
    surface.fill_circle(Vec2::new(x + 16.0 + look, y + 11.0), 1.0, WHITE);
    surface.fill_circle(Vec2::new(x + 24.0 + look, y + 11.0), 1.0, WHITE);

    // Mustache and hat letter
    surface.fill_rect(x + 14.0, y + 18.0, 12.0, 3.0, PLAYER_BROWN);
    surface.fill_text("M", Vec2::new(x + 20.0, y + 8.0), 12.0, WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCmd, DrawList};
    use crate::sim::{Command, Viewport, apply_command};
    use crate::tuning::Tuning;

    #[test]
    fn test_menu_draws_only_clear() {
        let state = GameState::new(1, Viewport::default(), Tuning::default());
        let mut list = DrawList::new();
        draw(&state, &mut list);
        assert_eq!(list.commands, vec![DrawCmd::Clear { width: 400.0, height: 600.0 }]);
    }

    #[test]
    fn test_playing_draws_world() {
        let mut state = GameState::new(1, Viewport::default(), Tuning::default());
        apply_command(&mut state, Command::Start);
        state.coins.push(Coin::new(Vec2::new(100.0, 100.0)));

        let mut list = DrawList::new();
        draw(&state, &mut list);

        assert!(matches!(list.commands[0], DrawCmd::Clear { .. }));
        assert!(matches!(list.commands[1], DrawCmd::GradientRect { .. }));
        // Every platform casts a shadow, plus the player's
        let shadows = list
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::FillRect { color, .. } if *color == SHADOW_GRAY))
            .count();
        assert_eq!(shadows, state.platforms.len() + 1);
        assert_eq!(list.texts(), vec!["$", "M"]);
    }

    #[test]
    fn test_player_facing_changes_brim() {
        let mut player = Player::new(Vec2::new(100.0, 100.0), 6.0);
        let mut right = DrawList::new();
        draw_player(&player, &mut right);

        player.facing = Facing::Left;
        let mut left = DrawList::new();
        draw_player(&player, &mut left);

        let brim = |list: &DrawList| {
            list.commands
                .iter()
                .find_map(|c| match c {
                    DrawCmd::FillRect { x, y, w, .. } if *y == 106.0 && *w == 8.0 => Some(*x),
                    _ => None,
                })
        };
        assert_eq!(brim(&right), Some(130.0));
        assert_eq!(brim(&left), Some(102.0));
    }
}
