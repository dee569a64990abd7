//! Enemy species and their stat tables.
//!
//! Every species shares one update system, parameterised by a marker component
//! and a static [`SpeciesProfile`]. Adding a species means adding a marker, a
//! profile and a line in the schedule; no new behaviour code.

use bevy_ecs::{component::Component, system::EntityCommands};
use glam::Vec2;
use strum_macros::{Display, EnumIter};

use crate::systems::{
    behavior::{BossPattern, Motion, PhaseRule},
    components::{ProjectileKind, Rgb},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Species {
    #[strum(serialize = "warden")]
    Warden,
    #[strum(serialize = "enemy dragon")]
    Dragon,
    #[strum(serialize = "skeleton")]
    Skeleton,
    #[strum(serialize = "wizard")]
    Wizard,
    #[strum(serialize = "eel")]
    Eel,
}

/// Ties a marker component to its species, so one generic system can serve all of them.
pub trait SpeciesMarker: Component + Default {
    const SPECIES: Species;
}

#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Warden;

#[derive(Component, Debug, Default, Clone, Copy)]
pub struct EnemyDragon;

#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Skeleton;

#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Wizard;

#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Eel;

impl SpeciesMarker for Warden {
    const SPECIES: Species = Species::Warden;
}

impl SpeciesMarker for EnemyDragon {
    const SPECIES: Species = Species::Dragon;
}

impl SpeciesMarker for Skeleton {
    const SPECIES: Species = Species::Skeleton;
}

impl SpeciesMarker for Wizard {
    const SPECIES: Species = Species::Wizard;
}

impl SpeciesMarker for Eel {
    const SPECIES: Species = Species::Eel;
}

/// A ranged attack: what is shot, how often and how fast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attack {
    pub kind: ProjectileKind,
    pub cooldown_ms: i32,
    pub speed: f32,
    pub radius: f32,
    /// Three shots with offset targets instead of one.
    pub spread: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub name: &'static str,
    pub size: Vec2,
    pub health: i32,
    pub speed: f32,
    pub points: u32,
    /// Radius of the circle fireballs are tested against, around the body's centre.
    pub hit_radius: f32,
    pub melee_range: f32,
    pub melee_cooldown_ms: i32,
    pub color: Rgb,
    pub attack: Option<Attack>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesProfile {
    /// Regular spawns pick one of these uniformly.
    pub variants: &'static [EnemyStats],
    pub boss: EnemyStats,
    pub pattern: BossPattern,
    /// Probability that a fireball about to hit is dodged instead.
    pub dodge_chance: f64,
    /// Helpers called once when the boss drops to half health.
    pub summon_count: usize,
}

impl Species {
    pub fn profile(self) -> &'static SpeciesProfile {
        match self {
            Species::Warden => &WARDEN,
            Species::Dragon => &DRAGON,
            Species::Skeleton => &SKELETON,
            Species::Wizard => &WIZARD,
            Species::Eel => &EEL,
        }
    }

    pub fn insert_marker(self, entity: &mut EntityCommands) {
        match self {
            Species::Warden => entity.insert(Warden),
            Species::Dragon => entity.insert(EnemyDragon),
            Species::Skeleton => entity.insert(Skeleton),
            Species::Wizard => entity.insert(Wizard),
            Species::Eel => entity.insert(Eel),
        };
    }
}

const fn warden(name: &'static str, speed: f32, points: u32, color: Rgb) -> EnemyStats {
    EnemyStats {
        name,
        size: Vec2::new(50.0, 70.0),
        health: 10,
        speed,
        points,
        hit_radius: 25.0,
        melee_range: 50.0,
        melee_cooldown_ms: 1000,
        color,
        attack: None,
    }
}

const fn phase(duration_ms: i32, motion: Motion) -> PhaseRule {
    PhaseRule { duration_ms, motion }
}

static WARDEN: SpeciesProfile = SpeciesProfile {
    variants: &[
        warden("normal", 1.5, 10, Rgb(0x0a, 0x3d, 0x3d)),
        warden("fast", 2.5, 15, Rgb(0x4a, 0x0a, 0x4a)),
        warden("tank", 1.0, 20, Rgb(0x4a, 0x1a, 0x0a)),
        warden("speedy", 3.0, 25, Rgb(0x0a, 0x1a, 0x4a)),
    ],
    boss: EnemyStats {
        name: "warden boss",
        size: Vec2::new(150.0, 210.0),
        health: 25,
        speed: 0.8,
        points: 100,
        hit_radius: 60.0,
        melee_range: 90.0,
        melee_cooldown_ms: 1000,
        color: Rgb::BOSS_RED,
        attack: Some(Attack {
            kind: ProjectileKind::Fire,
            cooldown_ms: 2000,
            speed: 6.0,
            radius: 12.0,
            spread: false,
        }),
    },
    pattern: BossPattern {
        idle: phase(4000, Motion::Approach),
        telegraph: phase(600, Motion::Creep),
        action: phase(400, Motion::Charge { speed: 8.0 }),
        recover: phase(800, Motion::Hold),
        volley: 0,
    },
    dodge_chance: 0.0,
    summon_count: 0,
};

static DRAGON: SpeciesProfile = SpeciesProfile {
    variants: &[EnemyStats {
        name: "enemy dragon",
        size: Vec2::new(70.0, 60.0),
        health: 15,
        speed: 2.0,
        points: 30,
        hit_radius: 30.0,
        melee_range: 60.0,
        melee_cooldown_ms: 1500,
        color: Rgb(0x00, 0xff, 0x00),
        attack: Some(Attack {
            kind: ProjectileKind::Fire,
            cooldown_ms: 3000,
            speed: 6.0,
            radius: 10.0,
            spread: false,
        }),
    }],
    boss: EnemyStats {
        name: "dragon boss",
        size: Vec2::new(200.0, 180.0),
        health: 30,
        speed: 1.5,
        points: 200,
        hit_radius: 70.0,
        melee_range: 100.0,
        melee_cooldown_ms: 1500,
        color: Rgb(0x00, 0x64, 0x00),
        attack: Some(Attack {
            kind: ProjectileKind::Fire,
            cooldown_ms: 2000,
            speed: 6.0,
            radius: 15.0,
            spread: true,
        }),
    },
    pattern: BossPattern {
        idle: phase(3000, Motion::Zigzag),
        telegraph: phase(500, Motion::Creep),
        action: phase(450, Motion::Charge { speed: 10.0 }),
        recover: phase(1000, Motion::Zigzag),
        volley: 0,
    },
    dodge_chance: 0.0,
    summon_count: 0,
};

static SKELETON: SpeciesProfile = SpeciesProfile {
    variants: &[EnemyStats {
        name: "skeleton",
        size: Vec2::new(50.0, 70.0),
        health: 12,
        speed: 1.8,
        points: 35,
        hit_radius: 25.0,
        melee_range: 50.0,
        melee_cooldown_ms: 1200,
        color: Rgb(0xe0, 0xe0, 0xd0),
        attack: Some(Attack {
            kind: ProjectileKind::Bone,
            cooldown_ms: 3500,
            speed: 5.0,
            radius: 8.0,
            spread: false,
        }),
    }],
    boss: EnemyStats {
        name: "skeleton king",
        size: Vec2::new(140.0, 180.0),
        health: 40,
        speed: 1.2,
        points: 300,
        hit_radius: 65.0,
        melee_range: 90.0,
        melee_cooldown_ms: 1200,
        color: Rgb(0xc8, 0xc8, 0xa0),
        attack: Some(Attack {
            kind: ProjectileKind::Skull,
            cooldown_ms: 2200,
            speed: 5.0,
            radius: 14.0,
            spread: false,
        }),
    },
    pattern: BossPattern {
        idle: phase(3500, Motion::Orbit { radius: 180.0 }),
        telegraph: phase(500, Motion::Hold),
        action: phase(600, Motion::Charge { speed: 7.0 }),
        recover: phase(1200, Motion::Orbit { radius: 180.0 }),
        volley: 0,
    },
    dodge_chance: 0.0,
    summon_count: 3,
};

static WIZARD: SpeciesProfile = SpeciesProfile {
    variants: &[EnemyStats {
        name: "wizard",
        size: Vec2::new(50.0, 75.0),
        health: 14,
        speed: 1.4,
        points: 40,
        hit_radius: 25.0,
        melee_range: 40.0,
        melee_cooldown_ms: 1500,
        color: Rgb(0x6a, 0x0d, 0xad),
        attack: Some(Attack {
            kind: ProjectileKind::Bolt,
            cooldown_ms: 2500,
            speed: 7.0,
            radius: 7.0,
            spread: false,
        }),
    }],
    boss: EnemyStats {
        name: "archwizard",
        size: Vec2::new(120.0, 170.0),
        health: 45,
        speed: 1.6,
        points: 400,
        hit_radius: 55.0,
        melee_range: 80.0,
        melee_cooldown_ms: 1500,
        color: Rgb(0x9b, 0x30, 0xff),
        attack: Some(Attack {
            kind: ProjectileKind::Bolt,
            cooldown_ms: 1800,
            speed: 7.0,
            radius: 10.0,
            spread: true,
        }),
    },
    pattern: BossPattern {
        idle: phase(3000, Motion::Strafe { speed: 3.0 }),
        telegraph: phase(700, Motion::Hold),
        action: phase(600, Motion::Strafe { speed: 6.0 }),
        recover: phase(1000, Motion::Strafe { speed: 3.0 }),
        volley: 6,
    },
    dodge_chance: 0.2,
    summon_count: 2,
};

static EEL: SpeciesProfile = SpeciesProfile {
    variants: &[EnemyStats {
        name: "eel",
        size: Vec2::new(90.0, 40.0),
        health: 16,
        speed: 2.4,
        points: 45,
        hit_radius: 25.0,
        melee_range: 45.0,
        melee_cooldown_ms: 1000,
        color: Rgb(0x1e, 0x90, 0xff),
        attack: Some(Attack {
            kind: ProjectileKind::Spark,
            cooldown_ms: 4000,
            speed: 6.0,
            radius: 8.0,
            spread: false,
        }),
    }],
    boss: EnemyStats {
        name: "jellyfish queen",
        size: Vec2::new(160.0, 160.0),
        health: 50,
        speed: 1.4,
        points: 500,
        hit_radius: 70.0,
        melee_range: 90.0,
        melee_cooldown_ms: 1000,
        color: Rgb(0xff, 0x69, 0xb4),
        attack: Some(Attack {
            kind: ProjectileKind::Spark,
            cooldown_ms: 2000,
            speed: 6.0,
            radius: 12.0,
            spread: true,
        }),
    },
    pattern: BossPattern {
        idle: phase(4000, Motion::Orbit { radius: 220.0 }),
        telegraph: phase(500, Motion::Hold),
        action: phase(800, Motion::Flee { speed: 4.0 }),
        recover: phase(1500, Motion::Orbit { radius: 220.0 }),
        volley: 8,
    },
    dodge_chance: 0.1,
    summon_count: 3,
};
