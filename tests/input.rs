use dragons_vs_warden::{
    events::GameCommand,
    systems::{player::held_velocity, Bindings, CheatBuffer, Fireball, HeldKeys, Key, Warden},
};
use glam::Vec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::*;

fn type_into(buffer: &mut CheatBuffer, text: &str) -> Vec<GameCommand> {
    text.chars().filter_map(|c| buffer.push(c)).collect()
}

#[test]
fn default_bindings_cover_the_action_keys() {
    let bindings = Bindings::default();

    assert_that(&bindings.command_for(Key::Space)).is_equal_to(Some(GameCommand::Fire));
    assert_that(&bindings.command_for(Key::Char('p'))).is_equal_to(Some(GameCommand::Ability));
    assert_that(&bindings.command_for(Key::Char('P'))).is_equal_to(Some(GameCommand::Ability));
    assert_that(&bindings.command_for(Key::Escape)).is_equal_to(Some(GameCommand::TogglePause));
    assert_that(&bindings.command_for(Key::Char('s'))).is_equal_to(Some(GameCommand::ToggleSound));
    assert_that(&bindings.command_for(Key::Left)).is_none();
}

#[test]
fn cheat_codes_match_at_the_end_of_typed_text() {
    let mut buffer = CheatBuffer::default();

    assert_eq!(type_into(&mut buffer, "hello level3"), vec![GameCommand::WarpToLevel(3)]);
    assert_eq!(type_into(&mut buffer, "xtralife"), vec![GameCommand::ExtraLives]);
    assert_that(&type_into(&mut buffer, "level9 levels")).is_empty();
}

#[test]
fn cheat_buffer_clears_after_a_match() {
    let mut buffer = CheatBuffer::default();

    assert_eq!(type_into(&mut buffer, "level2"), vec![GameCommand::WarpToLevel(2)]);
    // "2" alone must not re-trigger the previous code
    assert_that(&buffer.push('2')).is_none();
}

#[test]
fn held_velocity_prefers_right_and_down() {
    assert_that(&held_velocity(HeldKeys::empty(), 5.0)).is_equal_to(Vec2::ZERO);
    assert_that(&held_velocity(HeldKeys::LEFT | HeldKeys::UP, 5.0)).is_equal_to(Vec2::new(-5.0, -5.0));
    assert_that(&held_velocity(HeldKeys::all(), 5.0)).is_equal_to(Vec2::new(5.0, 5.0));
}

#[test]
fn held_keys_follow_down_and_up_events() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);

    game.key_down(Key::Left);
    game.key_down(Key::Down);
    game.tick();
    assert_that(&*game.world.resource::<HeldKeys>()).is_equal_to(HeldKeys::LEFT | HeldKeys::DOWN);

    game.key_up(Key::Left);
    game.tick();
    assert_that(&*game.world.resource::<HeldKeys>()).is_equal_to(HeldKeys::DOWN);
}

#[test]
fn auto_repeat_does_not_refire() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);

    game.key_down(Key::Space);
    game.key_down(Key::Space);
    game.key_down(Key::Space);
    game.tick();

    assert_that(&count::<Fireball>(&mut game)).is_equal_to(1);
}

#[test]
fn typed_cheat_warps_and_clears_the_level() {
    let mut game = create_test_game();
    make_player_invisible(&mut game);
    run_ticks(&mut game, 130);
    assert_that(&count::<Warden>(&mut game)).is_equal_to(1);

    game.type_text("LEVEL3");
    game.tick();

    assert_that(&game.level()).is_equal_to(3);
    assert_that(&count::<Warden>(&mut game)).is_equal_to(0);
}

#[test]
fn extra_life_cheat_adds_five_lives() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);

    game.type_text("xtralife");
    game.tick();

    assert_that(&game.lives()).is_equal_to(15);
}
