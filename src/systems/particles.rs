use bevy_ecs::{
    entity::Entity,
    system::{Commands, Query},
};
use glam::Vec2;
use rand::Rng;

use crate::{
    constants::particles::{LIFE_TICKS, SPREAD},
    systems::components::{Particle, Rgb},
};

/// Queues a burst of `count` particles at `pos`, each with a random velocity.
pub fn spawn_particles(commands: &mut Commands, rng: &mut impl Rng, pos: Vec2, color: Rgb, count: usize) {
    let burst: Vec<Particle> = (0..count)
        .map(|_| Particle {
            pos,
            vel: Vec2::new(rng.random::<f32>() - 0.5, rng.random::<f32>() - 0.5) * SPREAD,
            life: LIFE_TICKS,
            color,
        })
        .collect();
    commands.spawn_batch(burst);
}

/// Moves particles and removes them once their life runs out.
pub fn particle_system(mut commands: Commands, mut particles: Query<(Entity, &mut Particle)>) {
    for (entity, mut particle) in particles.iter_mut() {
        let vel = particle.vel;
        particle.pos += vel;
        particle.life = particle.life.saturating_sub(1);
        if particle.life == 0 {
            commands.entity(entity).despawn();
        }
    }
}
