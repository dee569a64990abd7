use bevy_ecs::entity::Entity;
use dragons_vs_warden::{
    audio::Sound,
    config::GameConfig,
    game::Game,
    systems::{
        Body, BossBehavior, BossPhase, Door, Enemy, EnemyProjectile, Fireball, GameStage, Lives, Particle, Skeleton,
        Species, Warden, Wizard,
    },
};
use glam::Vec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::*;

fn set_health(game: &mut Game, entity: Entity, health: i32) {
    game.world.get_mut::<Enemy>(entity).unwrap().health = health;
}

#[test]
fn test_one_hit_kill_awards_points_once() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);

    let warden = game.spawn_enemy(Species::Warden, false, Vec2::new(100.0, 100.0));
    set_health(&mut game, warden, 1);
    let points = game.world.get::<Enemy>(warden).unwrap().stats.points;
    let center = Vec2::new(125.0, 135.0);
    spawn_fireball(&mut game, center);

    game.tick();

    assert_that(&game.world.get_entity(warden).is_err()).is_true();
    assert_that(&count::<Fireball>(&mut game)).is_equal_to(0);
    assert_that(&game.score()).is_equal_to(points);

    run_ticks(&mut game, 5);
    assert_that(&game.score()).is_equal_to(points);
}

#[test]
fn test_hit_without_kill_damages_and_consumes_fireball() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);

    let warden = game.spawn_enemy(Species::Warden, false, Vec2::new(100.0, 100.0));
    spawn_fireball(&mut game, Vec2::new(125.0, 135.0));

    game.tick();

    assert_that(&game.world.get::<Enemy>(warden).unwrap().health).is_equal_to(9);
    assert_that(&count::<Fireball>(&mut game)).is_equal_to(0);
    assert_that(&count::<Particle>(&mut game)).is_greater_than(0);
    assert_that(&game.score()).is_equal_to(0);
    assert_that(&game.drain_sounds().contains(&Sound::Hit)).is_true();
}

#[test]
fn test_one_fireball_cannot_hit_two_enemies() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);

    let first = game.spawn_enemy(Species::Warden, false, Vec2::new(100.0, 100.0));
    let second = game.spawn_enemy(Species::Warden, false, Vec2::new(100.0, 100.0));
    set_health(&mut game, first, 1);
    set_health(&mut game, second, 1);
    spawn_fireball(&mut game, Vec2::new(125.0, 135.0));

    game.tick();

    assert_that(&count::<Warden>(&mut game)).is_equal_to(1);
}

#[test]
fn test_fireball_consumed_by_one_species_is_gone_for_the_next() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);

    let warden = game.spawn_enemy(Species::Warden, false, Vec2::new(100.0, 100.0));
    let dragon = game.spawn_enemy(Species::Dragon, false, Vec2::new(90.0, 105.0));
    spawn_fireball(&mut game, Vec2::new(125.0, 135.0));

    game.tick();

    let warden_health = game.world.get::<Enemy>(warden).unwrap().health;
    let dragon_health = game.world.get::<Enemy>(dragon).unwrap().health;
    assert_eq!((warden_health, dragon_health), (9, 15));
}

#[test]
fn test_dodged_fireball_is_spent_without_damage() {
    let (mut dodged, mut hit) = (0, 0);

    for seed in 0..200 {
        let mut game = Game::new(GameConfig { seed, ..test_config() }).unwrap();
        exhaust_spawner(&mut game);
        make_player_invisible(&mut game);

        let wizard = game.spawn_enemy(Species::Wizard, false, Vec2::new(100.0, 100.0));
        let full = game.world.get::<Enemy>(wizard).unwrap().health;
        spawn_fireball(&mut game, Vec2::new(125.0, 137.5));

        game.tick();

        assert_that(&count::<Fireball>(&mut game)).is_equal_to(0);
        match full - game.world.get::<Enemy>(wizard).unwrap().health {
            0 => dodged += 1,
            1 => hit += 1,
            other => panic!("unexpected damage {other} with seed {seed}"),
        }
    }

    assert_that(&dodged).is_greater_than(0);
    assert_that(&hit).is_greater_than(dodged);
}

#[test]
fn test_spawned_enemy_is_complete_before_the_next_tick() {
    let mut game = create_test_game();

    let boss = game.spawn_enemy(Species::Wizard, true, Vec2::new(100.0, 100.0));
    let grunt = game.spawn_enemy(Species::Warden, false, Vec2::new(300.0, 100.0));

    assert_that(&game.world.get::<Wizard>(boss).is_some()).is_true();
    assert_that(&game.world.get::<BossBehavior>(boss).map(|b| b.phase)).is_equal_to(Some(BossPhase::Idle));
    assert_that(&game.world.get::<Warden>(grunt).is_some()).is_true();
    assert_that(&game.world.get::<BossBehavior>(grunt).is_none()).is_true();
}

mod boss_action {
    use super::*;

    /// Places a boss one frame away from its `Action` phase, with its regular fire held back.
    fn boss_about_to_act(game: &mut Game, species: Species) -> Entity {
        exhaust_spawner(game);
        make_player_invisible(game);

        let boss = game.spawn_enemy(species, true, Vec2::new(100.0, 100.0));
        game.world.get_mut::<Enemy>(boss).unwrap().fire_cooldown_ms = 10_000;
        let mut behavior = game.world.get_mut::<BossBehavior>(boss).unwrap();
        behavior.phase = BossPhase::Telegraph;
        behavior.timer_ms = 16;
        boss
    }

    #[test]
    fn test_entering_action_locks_the_target_and_fires_the_volley() {
        let mut game = create_game_at_level(4);
        let target = player_center(&mut game);
        let boss = boss_about_to_act(&mut game, Species::Wizard);

        game.tick();

        let behavior = game.world.get::<BossBehavior>(boss).unwrap();
        assert_that(&behavior.phase).is_equal_to(BossPhase::Action);
        assert_that(&behavior.locked_target).is_equal_to(Some(target));
        assert_that(&behavior.pattern.volley).is_equal_to(6);
        assert_that(&count::<EnemyProjectile>(&mut game)).is_equal_to(6);
    }

    #[test]
    fn test_boss_without_a_volley_only_locks_on() {
        let mut game = create_test_game();
        let target = player_center(&mut game);
        let boss = boss_about_to_act(&mut game, Species::Warden);

        game.tick();

        let behavior = game.world.get::<BossBehavior>(boss).unwrap();
        assert_that(&behavior.phase).is_equal_to(BossPhase::Action);
        assert_that(&behavior.locked_target).is_equal_to(Some(target));
        assert_that(&count::<EnemyProjectile>(&mut game)).is_equal_to(0);
    }
}

#[test]
fn test_melee_cooldown_bottoms_out_at_zero() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);
    make_player_invisible(&mut game);

    let warden = game.spawn_enemy(Species::Warden, false, Vec2::new(0.0, 0.0));
    game.world.get_mut::<Enemy>(warden).unwrap().melee_cooldown_ms = 48;
    run_ticks(&mut game, 10);

    assert_that(&game.world.get::<Enemy>(warden).unwrap().melee_cooldown_ms).is_equal_to(0);
}

#[test]
fn test_melee_costs_a_life_and_respects_cooldown() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);

    let center = player_center(&mut game);
    game.spawn_enemy(Species::Warden, false, center - Vec2::new(25.0, 35.0));

    game.tick();
    assert_that(&game.lives()).is_equal_to(9);

    run_ticks(&mut game, 10);
    assert_that(&game.lives()).is_equal_to(9);

    // 1000 ms cooldown
    run_ticks(&mut game, 60);
    assert_that(&game.lives()).is_equal_to(8);
}

#[test]
fn test_invisible_player_is_not_struck() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);
    make_player_invisible(&mut game);

    let center = player_center(&mut game);
    game.spawn_enemy(Species::Warden, false, center - Vec2::new(25.0, 35.0));
    spawn_projectile(&mut game, center, Vec2::ZERO);

    run_ticks(&mut game, 30);
    assert_that(&game.lives()).is_equal_to(10);
}

#[test]
fn test_enemy_projectile_hits_player_once() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);

    let center = player_center(&mut game);
    spawn_projectile(&mut game, center, Vec2::ZERO);

    game.tick();

    assert_that(&game.lives()).is_equal_to(9);
    assert_that(&count::<EnemyProjectile>(&mut game)).is_equal_to(0);
}

#[test]
fn test_projectiles_leaving_the_arena_are_removed() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);

    spawn_projectile(&mut game, Vec2::new(5.0, 5.0), Vec2::new(-10.0, 0.0));
    spawn_fireball(&mut game, Vec2::new(50.0, 4.0));

    game.tick();

    assert_that(&count::<EnemyProjectile>(&mut game)).is_equal_to(0);
    assert_that(&count::<Fireball>(&mut game)).is_equal_to(0);
    assert_that(&game.lives()).is_equal_to(10);
}

#[test]
fn test_ranged_enemy_fires_at_player_from_inside_arena() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);
    make_player_invisible(&mut game);

    // Enemy dragons fire every 3000 ms
    game.spawn_enemy(Species::Dragon, false, Vec2::new(100.0, 100.0));
    run_ticks(&mut game, 186);
    assert_that(&count::<EnemyProjectile>(&mut game)).is_equal_to(0);

    run_ticks(&mut game, 2);
    assert_that(&count::<EnemyProjectile>(&mut game)).is_equal_to(1);
}

#[test]
fn test_boss_spread_fires_three_projectiles() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);
    make_player_invisible(&mut game);

    game.spawn_enemy(Species::Dragon, true, Vec2::new(100.0, 100.0));
    game.tick();

    assert_that(&count::<EnemyProjectile>(&mut game)).is_equal_to(3);
}

#[test]
fn test_offscreen_enemy_holds_fire() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);

    let boss = game.spawn_enemy(Species::Warden, true, Vec2::new(425.0, -210.0));
    game.tick();

    assert_that(&count::<EnemyProjectile>(&mut game)).is_equal_to(0);
    assert_that(&game.world.get::<Enemy>(boss).unwrap().fire_cooldown_ms).is_equal_to(0);
}

#[test]
fn test_boss_death_opens_door() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);

    let boss = game.spawn_enemy(Species::Warden, true, Vec2::new(100.0, 100.0));
    set_health(&mut game, boss, 1);
    let center = Vec2::new(175.0, 205.0);
    spawn_fireball(&mut game, center);

    game.tick();

    assert_that(&game.world.get_entity(boss).is_err()).is_true();
    assert_that(&game.score()).is_equal_to(100);
    assert_that(&game.world.resource::<Door>().0.is_some()).is_true();
    assert_that(&game.stage()).is_equal_to(GameStage::Running);
}

#[test]
fn test_final_boss_death_is_victory() {
    let mut game = create_game_at_level(5);
    exhaust_spawner(&mut game);

    let boss = game.spawn_enemy(Species::Eel, true, Vec2::new(100.0, 100.0));
    set_health(&mut game, boss, 1);
    spawn_fireball(&mut game, Vec2::new(180.0, 180.0));

    // Eels may dodge; keep firing until the queen falls.
    let mut running = true;
    for _ in 0..20 {
        running = game.tick();
        if !running {
            break;
        }
        let center = game.world.get::<Body>(boss).unwrap().center();
        spawn_fireball(&mut game, center);
    }

    assert_that(&running).is_false();
    assert_that(&game.stage()).is_equal_to(GameStage::Victory);
    assert_that(&game.world.resource::<Door>().0).is_none();
}

#[test]
fn test_boss_summons_helpers_once_at_half_health() {
    let mut game = create_game_at_level(3);
    exhaust_spawner(&mut game);
    make_player_invisible(&mut game);

    let king = game.spawn_enemy(Species::Skeleton, true, Vec2::new(300.0, 100.0));
    set_health(&mut game, king, 20);

    game.tick();
    let skeletons = count::<Skeleton>(&mut game);
    assert_that(&skeletons).is_equal_to(4);
    assert_that(&game.world.get::<Enemy>(king).unwrap().summoned).is_true();

    run_ticks(&mut game, 5);
    assert_that(&count::<Skeleton>(&mut game)).is_equal_to(4);
}

#[test]
fn test_lives_never_underflow() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);
    game.world.resource_mut::<Lives>().0 = 1;

    let center = player_center(&mut game);
    for _ in 0..3 {
        spawn_projectile(&mut game, center, Vec2::ZERO);
    }
    game.tick();

    assert_that(&game.lives()).is_equal_to(0);
}
