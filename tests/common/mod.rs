#![allow(dead_code)]

use bevy_ecs::{component::Component, entity::Entity, query::With};
use dragons_vs_warden::{
    config::GameConfig,
    game::Game,
    systems::{Body, EnemyProjectile, Fireball, Player, ProjectileKind, SpawnSchedule},
};
use glam::Vec2;

/// A deterministic config without the power-up generator.
pub fn test_config() -> GameConfig {
    GameConfig {
        seed: 7,
        power_ups: false,
        ..GameConfig::default()
    }
}

pub fn create_test_game() -> Game {
    Game::new(test_config()).expect("test config is valid")
}

pub fn create_game_at_level(level: u8) -> Game {
    Game::new(GameConfig {
        starting_level: level,
        ..test_config()
    })
    .expect("test config is valid")
}

/// Stops regular spawns so that only explicitly placed enemies are present.
pub fn exhaust_spawner(game: &mut Game) {
    let mut schedule = game.world.resource_mut::<SpawnSchedule>();
    schedule.spawned = schedule.plan.quota;
}

pub fn run_ticks(game: &mut Game, ticks: usize) {
    for _ in 0..ticks {
        game.tick();
    }
}

pub fn player_entity(game: &mut Game) -> Entity {
    game.world
        .query_filtered::<Entity, With<Player>>()
        .single(&game.world)
        .expect("exactly one player")
}

pub fn player_body(game: &mut Game) -> Body {
    let player = player_entity(game);
    *game.world.get::<Body>(player).expect("player has a body")
}

pub fn player_center(game: &mut Game) -> Vec2 {
    player_body(game).center()
}

pub fn set_player_pos(game: &mut Game, pos: Vec2) {
    let player = player_entity(game);
    game.world.get_mut::<Body>(player).expect("player has a body").pos = pos;
}

pub fn make_player_invisible(game: &mut Game) {
    let player = player_entity(game);
    game.world.get_mut::<Player>(player).expect("player component").invisible_ms = i32::MAX;
}

pub fn count<C: Component>(game: &mut Game) -> usize {
    game.world.query::<&C>().iter(&game.world).count()
}

pub fn spawn_fireball(game: &mut Game, pos: Vec2) -> Entity {
    game.world.spawn(Fireball::normal(pos)).id()
}

pub fn spawn_projectile(game: &mut Game, pos: Vec2, vel: Vec2) -> Entity {
    game.world
        .spawn(EnemyProjectile {
            pos,
            vel,
            radius: 10.0,
            kind: ProjectileKind::Fire,
        })
        .id()
}
