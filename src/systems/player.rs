use bevy_ecs::{
    event::{EventReader, EventWriter},
    system::{Commands, Query, Res, ResMut},
};
use glam::Vec2;
use tracing::{debug, info};

use crate::{
    audio::Sound,
    constants::{self, fireball::MULTISHOT_OFFSET, FRAME_MS},
    error::GameError,
    events::{GameCommand, GameEvent},
    systems::{
        audio::AudioEvent,
        collision::clamp_to_arena,
        components::{Body, Fireball, Lives, Modifiers, Player},
        input::HeldKeys,
    },
};

/// Velocity for the currently held keys; right wins over left and down over up.
pub fn held_velocity(held: HeldKeys, speed: f32) -> Vec2 {
    let mut velocity = Vec2::ZERO;
    if held.contains(HeldKeys::LEFT) {
        velocity.x = -speed;
    }
    if held.contains(HeldKeys::RIGHT) {
        velocity.x = speed;
    }
    if held.contains(HeldKeys::UP) {
        velocity.y = -speed;
    }
    if held.contains(HeldKeys::DOWN) {
        velocity.y = speed;
    }
    velocity
}

/// Moves the player and advances every timer it carries.
pub fn player_movement_system(
    held: Res<HeldKeys>,
    mut lives: ResMut<Lives>,
    mut players: Query<(&mut Body, &mut Player, &mut Modifiers)>,
    mut errors: EventWriter<GameError>,
) {
    let Ok((mut body, mut player, mut modifiers)) = players.single_mut() else {
        errors.write(GameError::InvalidState("expected exactly one player".into()));
        return;
    };

    let speed = if modifiers.speed_boosted() {
        constants::player::BOOSTED_SPEED
    } else {
        constants::player::SPEED
    };
    let size = body.size;
    let moved = body.pos + held_velocity(*held, speed);
    body.pos = clamp_to_arena(moved, size);

    if player.invisible_ms > 0 {
        player.invisible_ms -= FRAME_MS;
        if player.invisible_ms <= 0 {
            player.invisible_ms = 0;
            debug!("Invisibility wore off");
        }
    }
    if player.invisible_cooldown_ms > 0 {
        player.invisible_cooldown_ms -= FRAME_MS;
    }
    player.big_fireball_timer_ms += FRAME_MS;

    modifiers.multishot_ms = (modifiers.multishot_ms - FRAME_MS).max(0);
    modifiers.speed_boost_ms = (modifiers.speed_boost_ms - FRAME_MS).max(0);
    if let Some(shield) = modifiers.shield.as_mut() {
        shield.remaining_ms -= FRAME_MS;
        if shield.remaining_ms <= 0 {
            if lives.0 < shield.lives_snapshot {
                info!(restored = shield.lives_snapshot - lives.0, "Shield restored lost lives");
                lives.0 = shield.lives_snapshot;
            }
            modifiers.shield = None;
        }
    }
}

/// The one fire routine: a centre fireball, big when charged, flanked by two
/// more while multishot is active.
pub fn fire(commands: &mut Commands, body: &Body, player: &mut Player, modifiers: &Modifiers) {
    let muzzle = Vec2::new(body.center().x, body.pos.y);
    let big = player.big_fireball_timer_ms > constants::player::BIG_FIREBALL_CHARGE_MS;

    if big {
        player.big_fireball_timer_ms = 0;
        commands.spawn(Fireball::big(muzzle));
    } else {
        commands.spawn(Fireball::normal(muzzle));
    }

    if modifiers.multishot() {
        commands.spawn(Fireball::normal(muzzle - Vec2::X * MULTISHOT_OFFSET));
        commands.spawn(Fireball::normal(muzzle + Vec2::X * MULTISHOT_OFFSET));
    }
}

/// Turns invisibility on if the ability is off cooldown. Returns whether it did.
pub fn activate_invisibility(player: &mut Player) -> bool {
    if player.invisible_cooldown_ms > 0 {
        return false;
    }
    player.invisible_ms = constants::player::INVISIBILITY_MS;
    player.invisible_cooldown_ms = constants::player::INVISIBILITY_COOLDOWN_MS;
    true
}

/// Handles the player's fire and ability commands.
pub fn player_action_system(
    mut commands: Commands,
    mut events: EventReader<GameEvent>,
    mut players: Query<(&Body, &mut Player, &Modifiers)>,
    mut audio: EventWriter<AudioEvent>,
) {
    let Ok((body, mut player, modifiers)) = players.single_mut() else {
        return;
    };

    for event in events.read() {
        match *event {
            GameEvent::Command(GameCommand::Fire) => {
                fire(&mut commands, body, &mut player, modifiers);
                audio.write(AudioEvent(Sound::Shoot));
            }
            GameEvent::Command(GameCommand::Ability) => {
                if activate_invisibility(&mut player) {
                    info!("Invisibility activated");
                    audio.write(AudioEvent(Sound::Power));
                } else {
                    debug!(cooldown_ms = player.invisible_cooldown_ms, "Invisibility on cooldown");
                }
            }
            _ => {}
        }
    }
}
