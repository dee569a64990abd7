//! The update shared by every enemy species.
//!
//! [`species_system`] is instantiated once per species marker and run in a fixed
//! order. Each run advances that species' enemies by one frame tick: movement
//! (direct approach for regular enemies, the boss state machine for bosses),
//! melee, ranged fire, fireball hits, death and the one-time boss summon.

use bevy_ecs::{
    entity::Entity,
    event::EventWriter,
    query::{With, Without},
    system::{Commands, Query, ResMut},
};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::{
    audio::Sound,
    constants::{particles, FRAME_MS},
    events::BossDefeated,
    systems::{
        audio::AudioEvent,
        behavior::{motion_step, BossBehavior, BossPhase},
        collision::{clamp_to_arena, collide, in_arena},
        components::{Body, Enemy, Fireball, GameRng, Lives, Player, Rgb, Score},
        level::LevelState,
        particles::spawn_particles,
        projectile::{fire_attack, fire_volley},
        species::{EnemyStats, Species, SpeciesMarker},
        spawner::{level_plan, SpawnSchedule},
    },
};

/// Distance from a summoning boss at which its helpers appear.
const SUMMON_RADIUS: f32 = 120.0;

/// Queues a new enemy of `species` with its top-left corner at `pos`.
pub fn spawn_enemy(
    commands: &mut Commands,
    species: Species,
    boss: bool,
    stats: &'static EnemyStats,
    pos: Vec2,
) -> Entity {
    let mut entity = commands.spawn((Enemy::new(species, boss, stats), Body::new(pos, stats.size)));
    species.insert_marker(&mut entity);
    if boss {
        entity.insert(BossBehavior::new(&species.profile().pattern));
    }
    entity.id()
}

/// Moves one enemy. Returns the new top-left corner.
fn advance(enemy: &Enemy, body: &Body, behavior: Option<&mut BossBehavior>, player: Vec2) -> Vec2 {
    let center = body.center();
    let Some(behavior) = behavior else {
        // Regular enemies walk straight at the player until within melee range.
        let delta = player - center;
        let distance = delta.length();
        if distance > enemy.stats.melee_range {
            return body.pos + delta / distance * enemy.stats.speed;
        }
        return body.pos;
    };

    let moved = body.pos + motion_step(behavior, center, player, enemy.stats.speed);
    // Once fully on screen a boss stays there, whatever its motion says.
    if body.pos.y >= 0.0 {
        clamp_to_arena(moved, body.size)
    } else {
        moved
    }
}

/// Advances every enemy of species `S` by one frame tick and resolves its combat.
#[allow(clippy::too_many_arguments)]
#[allow(clippy::type_complexity)]
pub fn species_system<S: SpeciesMarker>(
    mut commands: Commands,
    mut enemies: Query<(Entity, &mut Enemy, &mut Body, Option<&mut BossBehavior>), (With<S>, Without<Player>)>,
    players: Query<(&Body, &Player)>,
    fireballs: Query<(Entity, &Fireball)>,
    mut level: ResMut<LevelState>,
    mut schedule: ResMut<SpawnSchedule>,
    mut score: ResMut<Score>,
    mut lives: ResMut<Lives>,
    mut rng: ResMut<GameRng>,
    mut audio: EventWriter<AudioEvent>,
    mut defeats: EventWriter<BossDefeated>,
) {
    let Ok((player_body, player)) = players.single() else {
        return;
    };
    let target = player_body.center();
    let profile = S::SPECIES.profile();
    let mut consumed: SmallVec<[Entity; 8]> = SmallVec::new();

    for (entity, mut enemy, mut body, mut behavior) in enemies.iter_mut() {
        // Boss state machine
        if let Some(behavior) = behavior.as_deref_mut() {
            if let Some(phase) = behavior.tick() {
                trace!(species = %S::SPECIES, %phase, "Boss phase change");
                if phase == BossPhase::Action {
                    behavior.locked_target = Some(target);
                    let volley = behavior.pattern.volley;
                    if let Some(attack) = enemy.stats.attack.filter(|_| volley > 0) {
                        fire_volley(&mut commands, body.center(), volley, &attack);
                        audio.write(AudioEvent(Sound::Shoot));
                    }
                }
            }
        }
        body.pos = advance(&enemy, &body, behavior.as_deref_mut(), target);
        let center = body.center();

        // Melee
        if center.distance(target) <= enemy.stats.melee_range && enemy.melee_cooldown_ms <= 0 && !player.is_invisible() {
            lives.0 = lives.0.saturating_sub(1);
            enemy.melee_cooldown_ms = enemy.stats.melee_cooldown_ms;
            debug!(species = %S::SPECIES, lives = lives.0, "Player struck in melee");
            audio.write(AudioEvent(Sound::Damage));
            spawn_particles(&mut commands, &mut rng.0, target, Rgb::PLAYER_HURT, particles::PLAYER_HIT_BURST);
        }
        enemy.melee_cooldown_ms = (enemy.melee_cooldown_ms - FRAME_MS).max(0);

        // Ranged fire, only from inside the arena
        if let Some(attack) = enemy.stats.attack {
            if in_arena(center) {
                enemy.fire_cooldown_ms -= FRAME_MS;
                if enemy.fire_cooldown_ms <= 0 {
                    fire_attack(&mut commands, center, target, &attack);
                    enemy.fire_cooldown_ms = attack.cooldown_ms;
                    audio.write(AudioEvent(Sound::Shoot));
                }
            }
        }

        // Fireball hits, at most one per enemy per frame
        let hit = fireballs
            .iter()
            .filter(|(fireball_entity, _)| !consumed.contains(fireball_entity))
            .find(|(_, fireball)| collide(fireball.pos, fireball.radius, center, enemy.stats.hit_radius));
        if let Some((fireball_entity, fireball)) = hit {
            consumed.push(fireball_entity);
            commands.entity(fireball_entity).despawn();

            if profile.dodge_chance > 0.0 && rng.0.random_bool(profile.dodge_chance) {
                trace!(species = %S::SPECIES, "Fireball dodged");
            } else {
                enemy.health -= fireball.damage;
                audio.write(AudioEvent(Sound::Hit));
                spawn_particles(&mut commands, &mut rng.0, center, enemy.stats.color, particles::HIT_BURST);
            }
        }

        if enemy.is_dead() {
            score.0 += enemy.stats.points;
            audio.write(AudioEvent(Sound::Kill));
            spawn_particles(&mut commands, &mut rng.0, center, enemy.stats.color, particles::DEATH_BURST);
            commands.entity(entity).despawn();

            if enemy.boss {
                info!(species = %S::SPECIES, score = score.0, "Boss defeated");
                spawn_particles(&mut commands, &mut rng.0, center, Rgb::BOSS_RED, particles::BOSS_DEATH_BURST);
                defeats.write(BossDefeated { level: level.current });
            } else {
                debug!(species = %S::SPECIES, variant = enemy.stats.name, score = score.0, "Enemy killed");
                let counts = level_plan(level.current).filter(|plan| plan.species == S::SPECIES);
                if let Some(plan) = counts {
                    level.kills += 1;
                    if level.kills >= plan.boss_threshold && schedule.request_boss() {
                        info!(species = %S::SPECIES, kills = level.kills, "Boss threshold reached");
                    }
                }
            }
            continue;
        }

        // Summon helpers once, at half health
        if enemy.boss && !enemy.summoned && profile.summon_count > 0 && enemy.health * 2 <= enemy.max_health {
            enemy.summoned = true;
            info!(species = %S::SPECIES, count = profile.summon_count, "Boss summons helpers");
            for i in 0..profile.summon_count {
                let Some(stats) = profile.variants.first() else { break };
                let angle = std::f32::consts::TAU * i as f32 / profile.summon_count as f32;
                let pos = center + Vec2::from_angle(angle) * SUMMON_RADIUS - stats.size / 2.0;
                spawn_enemy(&mut commands, S::SPECIES, false, stats, clamp_to_arena(pos, stats.size));
            }
            audio.write(AudioEvent(Sound::Power));
        }
    }
}
