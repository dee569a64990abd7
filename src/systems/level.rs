use bevy_ecs::{
    entity::Entity,
    event::{EventReader, EventWriter},
    query::{Or, With},
    resource::Resource,
    system::{Commands, Query, Res, ResMut},
};
use tracing::{debug, info};

use crate::{
    audio::Sound,
    constants::{door, ARENA_SIZE, FINAL_LEVEL},
    error::GameError,
    events::{BossDefeated, LevelTransition},
    systems::{
        audio::AudioEvent,
        collision::Rect,
        components::{Body, Door, Enemy, EnemyProjectile, Player},
        spawner::{level_plan, SpawnSchedule},
        state::GameStage,
    },
};

/// Counters that live for one level and are reset on every transition.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelState {
    pub current: u8,
    /// Regular enemies of the level's species killed so far.
    pub kills: u32,
    pub boss_spawned: bool,
    pub boss_defeated: bool,
}

impl LevelState {
    pub fn new(level: u8) -> Self {
        Self {
            current: level,
            kills: 0,
            boss_spawned: false,
            boss_defeated: false,
        }
    }
}

impl Default for LevelState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Where the door appears: centred in the arena.
pub fn door_rect() -> Rect {
    Rect::centered(ARENA_SIZE / 2.0, door::SIZE)
}

/// Moves the game to the requested level.
///
/// Every enemy and enemy projectile is removed, whatever level it came from,
/// and the door is cleared before the new level's spawner is installed. Only
/// the last request of a frame is honoured.
#[allow(clippy::too_many_arguments)]
pub fn level_transition_system(
    mut commands: Commands,
    mut transitions: EventReader<LevelTransition>,
    mut level: ResMut<LevelState>,
    mut schedule: ResMut<SpawnSchedule>,
    mut door: ResMut<Door>,
    stale: Query<Entity, Or<(With<Enemy>, With<EnemyProjectile>)>>,
    mut errors: EventWriter<GameError>,
    mut audio: EventWriter<AudioEvent>,
) {
    let Some(LevelTransition { target }) = transitions.read().last().copied() else {
        return;
    };
    let Some(plan) = level_plan(target) else {
        errors.write(GameError::InvalidLevel(target));
        return;
    };

    let mut cleared = 0usize;
    for entity in stale.iter() {
        commands.entity(entity).despawn();
        cleared += 1;
    }

    info!(from = level.current, to = target, species = %plan.species, cleared, "Entering level");
    *level = LevelState::new(target);
    *schedule = SpawnSchedule::new(plan);
    door.0 = None;
    audio.write(AudioEvent(Sound::Power));
}

/// Opens the door after a boss falls, or ends the run if it was the last one.
pub fn boss_defeated_system(
    mut defeats: EventReader<BossDefeated>,
    mut level: ResMut<LevelState>,
    mut door: ResMut<Door>,
    mut stage: ResMut<GameStage>,
) {
    for BossDefeated { level: defeated } in defeats.read().copied() {
        if defeated != level.current {
            debug!(defeated, current = level.current, "Stale boss defeat ignored");
            continue;
        }
        level.boss_defeated = true;
        if defeated >= FINAL_LEVEL {
            info!(level = defeated, "Final boss defeated, victory");
            *stage = GameStage::Victory;
        } else {
            info!(level = defeated, "Boss defeated, door opened");
            door.0 = Some(door_rect());
        }
    }
}

/// Requests the next level once the player walks into the door.
pub fn door_system(
    door: Res<Door>,
    level: Res<LevelState>,
    players: Query<&Body, With<Player>>,
    mut transitions: EventWriter<LevelTransition>,
) {
    let Some(rect) = door.0 else { return };
    let Ok(body) = players.single() else { return };

    if body.rect().overlaps(&rect) {
        transitions.write(LevelTransition {
            target: level.current + 1,
        });
    }
}
