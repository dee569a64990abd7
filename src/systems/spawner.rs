//! Per-level spawn schedules, advanced by the same fixed step as everything else.

use bevy_ecs::{
    event::EventWriter,
    resource::Resource,
    system::{Commands, ResMut},
};
use glam::Vec2;
use rand::{seq::IndexedRandom, Rng};
use tracing::{debug, info, trace};

use crate::{
    audio::Sound,
    constants::{mechanics::BOSS_SPAWN_DELAY_MS, ARENA_SIZE, FRAME_MS},
    systems::{
        audio::AudioEvent,
        components::GameRng,
        enemy::spawn_enemy,
        level::LevelState,
        species::{EnemyStats, Species},
    },
};

/// What a level spawns and how fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelPlan {
    pub level: u8,
    pub species: Species,
    pub interval_ms: i32,
    /// Regular enemies spawned before the spawner goes quiet.
    pub quota: u32,
    /// Kills of the level's species needed before its boss is called.
    pub boss_threshold: u32,
}

pub const LEVELS: [LevelPlan; 5] = [
    LevelPlan { level: 1, species: Species::Warden, interval_ms: 2000, quota: 5, boss_threshold: 5 },
    LevelPlan { level: 2, species: Species::Dragon, interval_ms: 2500, quota: 5, boss_threshold: 5 },
    LevelPlan { level: 3, species: Species::Skeleton, interval_ms: 2200, quota: 5, boss_threshold: 5 },
    LevelPlan { level: 4, species: Species::Wizard, interval_ms: 2500, quota: 5, boss_threshold: 5 },
    LevelPlan { level: 5, species: Species::Eel, interval_ms: 2000, quota: 5, boss_threshold: 5 },
];

pub fn level_plan(level: u8) -> Option<&'static LevelPlan> {
    LEVELS.iter().find(|plan| plan.level == level)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOrder {
    Regular,
    Boss,
}

/// The spawner of the current level.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SpawnSchedule {
    pub plan: &'static LevelPlan,
    pub elapsed_ms: i32,
    pub spawned: u32,
    /// Counts down to the boss once the kill threshold was met.
    pub boss_countdown_ms: Option<i32>,
    pub boss_spawned: bool,
}

impl SpawnSchedule {
    pub fn new(plan: &'static LevelPlan) -> Self {
        Self {
            plan,
            elapsed_ms: 0,
            spawned: 0,
            boss_countdown_ms: None,
            boss_spawned: false,
        }
    }

    /// Asks for the boss. Only the first request counts; returns whether this was it.
    pub fn request_boss(&mut self) -> bool {
        if self.boss_countdown_ms.is_some() || self.boss_spawned {
            return false;
        }
        self.boss_countdown_ms = Some(BOSS_SPAWN_DELAY_MS);
        true
    }

    /// Advances the schedule by one frame tick.
    ///
    /// Does nothing unless `current_level` is the schedule's own level, and
    /// nothing ever again once the boss has spawned.
    pub fn tick(&mut self, current_level: u8) -> Option<SpawnOrder> {
        if current_level != self.plan.level || self.boss_spawned {
            return None;
        }

        if let Some(countdown) = self.boss_countdown_ms.as_mut() {
            *countdown -= FRAME_MS;
            if *countdown <= 0 {
                self.boss_countdown_ms = None;
                self.boss_spawned = true;
                return Some(SpawnOrder::Boss);
            }
        }

        if self.spawned >= self.plan.quota {
            return None;
        }
        self.elapsed_ms += FRAME_MS;
        if self.elapsed_ms < self.plan.interval_ms {
            return None;
        }
        self.elapsed_ms = 0;
        self.spawned += 1;
        Some(SpawnOrder::Regular)
    }
}

/// Where a new enemy enters: just above the arena, at a random column for
/// regular enemies and centred for bosses.
pub fn entry_position(stats: &EnemyStats, boss: bool, rng: &mut impl Rng) -> Vec2 {
    let x = if boss {
        (ARENA_SIZE.x - stats.size.x) / 2.0
    } else {
        rng.random::<f32>() * (ARENA_SIZE.x - stats.size.x)
    };
    Vec2::new(x, -stats.size.y)
}

/// Advances the current level's spawn schedule and creates whatever it orders.
pub fn spawner_system(
    mut commands: Commands,
    mut schedule: ResMut<SpawnSchedule>,
    mut level: ResMut<LevelState>,
    mut rng: ResMut<GameRng>,
    mut audio: EventWriter<AudioEvent>,
) {
    let Some(order) = schedule.tick(level.current) else {
        return;
    };
    let species = schedule.plan.species;
    let profile = species.profile();

    match order {
        SpawnOrder::Regular => {
            let Some(stats) = profile.variants.choose(&mut rng.0) else {
                trace!(%species, "Species has no regular variants");
                return;
            };
            let pos = entry_position(stats, false, &mut rng.0);
            spawn_enemy(&mut commands, species, false, stats, pos);
            debug!(%species, variant = stats.name, spawned = schedule.spawned, "Enemy spawned");
        }
        SpawnOrder::Boss => {
            let pos = entry_position(&profile.boss, true, &mut rng.0);
            spawn_enemy(&mut commands, species, true, &profile.boss, pos);
            level.boss_spawned = true;
            info!(%species, boss = profile.boss.name, "Boss arrived");
            audio.write(AudioEvent(Sound::Damage));
        }
    }
}
