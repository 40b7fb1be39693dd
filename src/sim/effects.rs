//! Particle bursts for jumps and pickups

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Particle, ParticleColor};
use crate::consts::{COIN_PARTICLES, JUMP_PARTICLES};

const JUMP_COLORS: [ParticleColor; 3] = [ParticleColor::Grass, ParticleColor::White, ParticleColor::Sky];

/// Dust kicked up at the player's feet on landing
pub fn spawn_jump_particles(state: &mut GameState, at: Vec2) {
    for _ in 0..JUMP_PARTICLES {
        let vx = (state.rng.random::<f32>() - 0.5) * 4.0;
        let vy = state.rng.random::<f32>() * -2.0;
        let color = JUMP_COLORS[state.rng.random_range(0..JUMP_COLORS.len())];
        push_particle(state, Particle::new(at, Vec2::new(vx, vy), color));
    }
}

/// Gold sparkle where a coin was picked up
pub fn spawn_coin_particles(state: &mut GameState, at: Vec2) {
    for _ in 0..COIN_PARTICLES {
        let vx = (state.rng.random::<f32>() - 0.5) * 6.0;
        let vy = state.rng.random::<f32>() * -2.0 - 1.0;
        push_particle(state, Particle::new(at, Vec2::new(vx, vy), ParticleColor::Gold));
    }
}

/// Advance every particle and drop the expired ones
pub fn update_particles(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.update();
    }
    particles.retain(Particle::is_alive);
}

fn push_particle(state: &mut GameState, particle: Particle) {
    if state.particles.len() < state.particle_limit {
        state.particles.push(particle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PARTICLE_LIFE;
    use crate::sim::state::Viewport;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(42, Viewport::default(), Tuning::default())
    }

    #[test]
    fn test_jump_burst_shape() {
        let mut s = state();
        spawn_jump_particles(&mut s, Vec2::new(200.0, 300.0));
        assert_eq!(s.particles.len(), JUMP_PARTICLES);
        for p in &s.particles {
            assert_eq!(p.pos, Vec2::new(200.0, 300.0));
            assert!((-2.0..2.0).contains(&p.vel.x));
            assert!(p.vel.y <= 0.0 && p.vel.y > -2.0);
            assert_ne!(p.color, ParticleColor::Gold);
        }
    }

    #[test]
    fn test_coin_burst_is_gold_and_upward() {
        let mut s = state();
        spawn_coin_particles(&mut s, Vec2::ZERO);
        assert_eq!(s.particles.len(), COIN_PARTICLES);
        assert!(s.particles.iter().all(|p| p.color == ParticleColor::Gold));
        assert!(s.particles.iter().all(|p| p.vel.y <= -1.0 && p.vel.y > -3.0));
    }

    #[test]
    fn test_particle_limit_respected() {
        let mut s = state();
        s.particle_limit = 4;
        spawn_coin_particles(&mut s, Vec2::ZERO);
        assert_eq!(s.particles.len(), 4);

        s.particle_limit = 0;
        s.particles.clear();
        spawn_jump_particles(&mut s, Vec2::ZERO);
        assert!(s.particles.is_empty());
    }

    #[test]
    fn test_update_prunes_dead_particles() {
        let mut s = state();
        spawn_jump_particles(&mut s, Vec2::ZERO);
        for _ in 0..PARTICLE_LIFE - 1 {
            update_particles(&mut s.particles);
        }
        assert_eq!(s.particles.len(), JUMP_PARTICLES);
        update_particles(&mut s.particles);
        assert!(s.particles.is_empty());
    }
}
