use bevy_ecs::{component::Component, resource::Resource};
use glam::Vec2;
use rand::{rngs::SmallRng, SeedableRng};
use strum_macros::{Display, EnumIter};

use crate::{
    constants::{fireball, mechanics},
    systems::{collision::Rect, species::EnemyStats, Species},
};

/// A plain RGB colour, used by particles and the draw list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
    pub const PLAYER_HURT: Rgb = Rgb(0xff, 0x47, 0x57);
    pub const FIRE: Rgb = Rgb(0xff, 0x6b, 0x35);
    pub const BOSS_RED: Rgb = Rgb(0xff, 0x00, 0x00);
    pub const DOOR: Rgb = Rgb(0x8b, 0x45, 0x13);
}

/// The on-screen footprint of an actor: its top-left corner and its size.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// The player's dragon.
///
/// All timers are in milliseconds and count down by one frame tick per update,
/// except `big_fireball_timer_ms`, which counts up until the next shot.
#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct Player {
    pub invisible_ms: i32,
    pub invisible_cooldown_ms: i32,
    pub big_fireball_timer_ms: i32,
}

impl Player {
    pub fn is_invisible(&self) -> bool {
        self.invisible_ms > 0
    }
}

/// A shield snapshot: lives lost while it is up are given back when it expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shield {
    pub remaining_ms: i32,
    pub lives_snapshot: u32,
}

/// Timed power-up effects on the player, consulted by the movement and fire code.
#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct Modifiers {
    pub multishot_ms: i32,
    pub speed_boost_ms: i32,
    pub shield: Option<Shield>,
}

impl Modifiers {
    pub fn multishot(&self) -> bool {
        self.multishot_ms > 0
    }

    pub fn speed_boosted(&self) -> bool {
        self.speed_boost_ms > 0
    }
}

/// An enemy of any species, boss or not.
#[derive(Component, Debug, Clone)]
pub struct Enemy {
    pub species: Species,
    pub boss: bool,
    pub stats: &'static EnemyStats,
    pub health: i32,
    pub max_health: i32,
    pub melee_cooldown_ms: i32,
    pub fire_cooldown_ms: i32,
    /// Set once a boss has called its helpers.
    pub summoned: bool,
}

impl Enemy {
    pub fn new(species: Species, boss: bool, stats: &'static EnemyStats) -> Self {
        Self {
            species,
            boss,
            stats,
            health: stats.health,
            max_health: stats.health,
            melee_cooldown_ms: 0,
            // Bosses open fire as soon as they are on screen.
            fire_cooldown_ms: if boss { 0 } else { stats.attack.map_or(0, |a| a.cooldown_ms) },
            summoned: false,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// A fireball shot by the player, travelling straight up.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Fireball {
    pub pos: Vec2,
    pub radius: f32,
    pub damage: i32,
    pub speed: f32,
    pub big: bool,
}

impl Fireball {
    pub fn normal(pos: Vec2) -> Self {
        Self {
            pos,
            radius: fireball::RADIUS,
            damage: fireball::DAMAGE,
            speed: fireball::SPEED,
            big: false,
        }
    }

    pub fn big(pos: Vec2) -> Self {
        Self {
            pos,
            radius: fireball::BIG_RADIUS,
            damage: fireball::BIG_DAMAGE,
            speed: fireball::SPEED,
            big: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ProjectileKind {
    Fire,
    Bone,
    Skull,
    Bolt,
    Spark,
}

/// A projectile shot by an enemy, moving with a constant velocity.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct EnemyProjectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub kind: ProjectileKind,
}

/// A short-lived spark, purely cosmetic.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: u32,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum PowerUpKind {
    Invisibility,
    Speed,
    Shield,
    Multishot,
}

impl PowerUpKind {
    pub fn color(self) -> Rgb {
        match self {
            PowerUpKind::Invisibility => Rgb(0x00, 0xd4, 0xff),
            PowerUpKind::Speed => Rgb(0x00, 0xff, 0x00),
            PowerUpKind::Shield => Rgb(0xff, 0xd7, 0x00),
            PowerUpKind::Multishot => Rgb(0xff, 0x00, 0xff),
        }
    }
}

/// A pickup lying in the arena until collected or expired.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PowerUp {
    pub rect: Rect,
    pub kind: PowerUpKind,
    pub life_ms: i32,
}

/// The player's score.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score(pub u32);

/// Remaining lives; reaching zero ends the run or offers a continue.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lives(pub u32);

impl Default for Lives {
    fn default() -> Self {
        Self(mechanics::STARTING_LIVES)
    }
}

/// Continue attempts left for the math prompt.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Continues {
    pub attempts: u8,
}

impl Default for Continues {
    fn default() -> Self {
        Self {
            attempts: mechanics::CONTINUE_ATTEMPTS,
        }
    }
}

/// The single source of randomness in the simulation.
#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub SmallRng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

/// The door to the next level, present only after a boss died.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct Door(pub Option<Rect>);
