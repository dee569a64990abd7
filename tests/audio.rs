use dragons_vs_warden::{
    audio::{Sound, Waveform},
    systems::{AudioState, Key},
};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use strum::IntoEnumIterator;

mod common;

use common::*;

#[test]
fn test_fire_queues_a_shoot_cue() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);

    game.key_down(Key::Space);
    game.tick();

    assert_eq!(game.drain_sounds(), vec![Sound::Shoot]);
    assert_that(&game.drain_sounds()).is_empty();
}

#[test]
fn test_muted_game_queues_nothing() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);

    game.key_down(Key::Char('s'));
    game.tick();
    assert_that(&game.world.resource::<AudioState>().muted).is_true();

    game.key_down(Key::Space);
    game.tick();
    assert_that(&game.drain_sounds()).is_empty();
}

#[test]
fn test_unmuting_restores_cues() {
    let mut game = create_test_game();
    exhaust_spawner(&mut game);

    game.type_text("ss");
    game.tick();
    assert_that(&game.world.resource::<AudioState>().muted).is_false();

    game.key_down(Key::Space);
    game.tick();
    assert_eq!(game.drain_sounds(), vec![Sound::Shoot]);
}

#[test]
fn test_sound_toggle_works_while_paused() {
    let mut game = create_test_game();

    game.key_down(Key::Escape);
    game.tick();
    game.key_down(Key::Char('s'));
    game.tick();

    assert_that(&game.world.resource::<AudioState>().muted).is_true();
}

#[test]
fn test_every_cue_has_an_audible_tone() {
    for sound in Sound::iter() {
        let tone = sound.tone();
        assert_that(&tone.frequency_hz).is_greater_than(0.0);
        assert_that(&tone.duration_secs).is_greater_than(0.0);
        assert_that(&tone.duration_secs).is_less_than_or_equal_to(0.5);
    }
    assert_eq!(Sound::Shoot.tone().waveform, Waveform::Square);
    assert_eq!(Sound::Power.tone().frequency_hz, 400.0);
}
