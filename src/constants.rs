//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::Vec2;

/// Wall-clock time of one frame in the native loop.
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Simulated time advanced by every frame tick, in milliseconds.
///
/// The simulation never derives time from the wall clock; every countdown in the
/// game subtracts exactly this much per tick.
pub const FRAME_MS: i32 = 16;

/// The size of the playable arena, in pixels.
pub const ARENA_SIZE: Vec2 = Vec2::new(1000.0, 700.0);

/// The last level of the game; its boss ends the run in victory.
pub const FINAL_LEVEL: u8 = 5;

pub mod player {
    use glam::Vec2;

    pub const SIZE: Vec2 = Vec2::new(80.0, 70.0);
    /// Pixels moved per frame while a movement key is held.
    pub const SPEED: f32 = 5.0;
    /// Pixels moved per frame while the speed power-up is active.
    pub const BOOSTED_SPEED: f32 = 8.0;
    /// Radius used when enemy projectiles test against the player.
    pub const HIT_RADIUS: f32 = 25.0;

    pub const INVISIBILITY_MS: i32 = 3000;
    pub const INVISIBILITY_COOLDOWN_MS: i32 = 10_000;

    /// The next shot is a big fireball once this much time has passed since the last one.
    pub const BIG_FIREBALL_CHARGE_MS: i32 = 5000;
}

pub mod fireball {
    pub const SPEED: f32 = 8.0;
    pub const RADIUS: f32 = 8.0;
    pub const DAMAGE: i32 = 1;
    pub const BIG_RADIUS: f32 = 15.0;
    pub const BIG_DAMAGE: i32 = 5;
    /// Horizontal offset of the two extra multishot fireballs.
    pub const MULTISHOT_OFFSET: f32 = 15.0;
}

pub mod mechanics {
    pub const STARTING_LIVES: u32 = 10;
    /// Lives restored by a correctly answered continue question.
    pub const CONTINUE_LIVES: u32 = 10;
    pub const CONTINUE_ATTEMPTS: u8 = 3;

    /// Delay between the boss threshold being met and the boss appearing.
    pub const BOSS_SPAWN_DELAY_MS: i32 = 2000;
    /// Horizontal target offset of the outer shots of a spread volley.
    pub const SPREAD_OFFSET: f32 = 50.0;
}

pub mod powerup {
    use glam::Vec2;

    pub const SPAWN_INTERVAL_MS: i32 = 30_000;
    pub const LIFETIME_MS: i32 = 10_000;
    pub const SIZE: Vec2 = Vec2::new(40.0, 40.0);
    /// Pickup happens when the centres are closer than this on both axes.
    pub const PICKUP_DISTANCE: f32 = 40.0;

    pub const INVISIBILITY_MS: i32 = 5000;
    pub const SPEED_BOOST_MS: i32 = 5000;
    pub const SHIELD_MS: i32 = 5000;
    pub const MULTISHOT_MS: i32 = 10_000;
}

pub mod particles {
    pub const LIFE_TICKS: u32 = 60;
    /// Particle velocities are drawn from `[-SPREAD / 2, SPREAD / 2)` on each axis.
    pub const SPREAD: f32 = 5.0;

    pub const HIT_BURST: usize = 5;
    pub const DEATH_BURST: usize = 20;
    pub const BOSS_DEATH_BURST: usize = 50;
    pub const PLAYER_HIT_BURST: usize = 10;
    pub const PROJECTILE_HIT_BURST: usize = 15;
    pub const PICKUP_BURST: usize = 15;
}

pub mod door {
    use glam::Vec2;

    pub const SIZE: Vec2 = Vec2::new(80.0, 120.0);
}

pub mod cheats {
    /// Number of typed characters remembered when matching cheat codes.
    pub const BUFFER_LEN: usize = 16;
    pub const EXTRA_LIVES: u32 = 5;
}
