use bevy_ecs::{
    entity::Entity,
    event::EventWriter,
    system::{Commands, Query, ResMut},
};
use glam::Vec2;
use tracing::debug;

use crate::{
    audio::Sound,
    constants::{mechanics::SPREAD_OFFSET, particles::PROJECTILE_HIT_BURST, player::HIT_RADIUS},
    systems::{
        audio::AudioEvent,
        collision::{collide, in_arena},
        components::{Body, EnemyProjectile, Fireball, GameRng, Lives, Player, Rgb},
        particles::spawn_particles,
        species::Attack,
    },
};

/// Queues one projectile from `origin` aimed straight at `target`.
///
/// The velocity is the unit direction scaled by the attack's speed, so shots
/// travel equally fast no matter how far away the target is.
pub fn shoot_at(commands: &mut Commands, origin: Vec2, target: Vec2, attack: &Attack) {
    let direction = (target - origin).try_normalize().unwrap_or(Vec2::Y);
    commands.spawn(EnemyProjectile {
        pos: origin,
        vel: direction * attack.speed,
        radius: attack.radius,
        kind: attack.kind,
    });
}

/// Fires an attack at `target`: one shot, or three with offset targets for spread attacks.
pub fn fire_attack(commands: &mut Commands, origin: Vec2, target: Vec2, attack: &Attack) {
    shoot_at(commands, origin, target, attack);
    if attack.spread {
        shoot_at(commands, origin, target - Vec2::X * SPREAD_OFFSET, attack);
        shoot_at(commands, origin, target + Vec2::X * SPREAD_OFFSET, attack);
    }
}

/// Fires `count` projectiles evenly spaced around a full circle.
pub fn fire_volley(commands: &mut Commands, origin: Vec2, count: usize, attack: &Attack) {
    for i in 0..count {
        let angle = std::f32::consts::TAU * i as f32 / count as f32;
        shoot_at(commands, origin, origin + Vec2::from_angle(angle), attack);
    }
}

/// Moves the player's fireballs up and removes those that left the top of the arena.
pub fn fireball_system(mut commands: Commands, mut fireballs: Query<(Entity, &mut Fireball)>) {
    for (entity, mut fireball) in fireballs.iter_mut() {
        fireball.pos.y -= fireball.speed;
        if fireball.pos.y < 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

/// Moves enemy projectiles and resolves their hits on the player.
pub fn enemy_projectile_system(
    mut commands: Commands,
    mut projectiles: Query<(Entity, &mut EnemyProjectile)>,
    players: Query<(&Body, &Player)>,
    mut lives: ResMut<Lives>,
    mut rng: ResMut<GameRng>,
    mut audio: EventWriter<AudioEvent>,
) {
    let target = players
        .single()
        .ok()
        .filter(|(_, player)| !player.is_invisible())
        .map(|(body, _)| body.center());

    for (entity, mut projectile) in projectiles.iter_mut() {
        let vel = projectile.vel;
        projectile.pos += vel;

        if !in_arena(projectile.pos) {
            commands.entity(entity).despawn();
            continue;
        }

        let Some(center) = target else { continue };
        if collide(projectile.pos, projectile.radius, center, HIT_RADIUS) {
            lives.0 = lives.0.saturating_sub(1);
            debug!(kind = %projectile.kind, lives = lives.0, "Player hit by projectile");
            audio.write(AudioEvent(Sound::Damage));
            spawn_particles(&mut commands, &mut rng.0, center, Rgb::FIRE, PROJECTILE_HIT_BURST);
            commands.entity(entity).despawn();
        }
    }
}
