use bevy_ecs::{
    entity::Entity,
    event::EventWriter,
    resource::Resource,
    system::{Commands, Query, Res, ResMut},
};
use glam::Vec2;
use rand::{seq::IndexedRandom, Rng};
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::{
    audio::Sound,
    config::GameConfig,
    constants::{
        particles::PICKUP_BURST,
        powerup::{self, LIFETIME_MS, PICKUP_DISTANCE, SPAWN_INTERVAL_MS},
        ARENA_SIZE, FRAME_MS,
    },
    systems::{
        audio::AudioEvent,
        collision::Rect,
        components::{Body, GameRng, Lives, Modifiers, Player, PowerUp, PowerUpKind, Shield},
        particles::spawn_particles,
    },
};

/// Time since the last power-up appeared.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PowerUpTimer {
    pub elapsed_ms: i32,
}

/// A power-up of a random kind. Its top-left corner lands at least 20 px from the
/// top and left edges and at most 20 px short of the bottom and right ones.
pub fn random_power_up(rng: &mut impl Rng) -> PowerUp {
    let kinds: Vec<PowerUpKind> = PowerUpKind::iter().collect();
    let kind = *kinds.choose(rng).unwrap_or(&PowerUpKind::Shield);
    let margin = powerup::SIZE / 2.0;
    let pos = Vec2::new(
        rng.random::<f32>() * (ARENA_SIZE.x - powerup::SIZE.x) + margin.x,
        rng.random::<f32>() * (ARENA_SIZE.y - powerup::SIZE.y) + margin.y,
    );
    PowerUp {
        rect: Rect::new(pos, powerup::SIZE),
        kind,
        life_ms: LIFETIME_MS,
    }
}

/// Applies a picked-up power-up to the player.
pub fn apply_power_up(kind: PowerUpKind, player: &mut Player, modifiers: &mut Modifiers, lives: u32) {
    match kind {
        PowerUpKind::Invisibility => player.invisible_ms = player.invisible_ms.max(powerup::INVISIBILITY_MS),
        PowerUpKind::Speed => modifiers.speed_boost_ms = powerup::SPEED_BOOST_MS,
        PowerUpKind::Shield => {
            // A second shield keeps the older, higher snapshot.
            let lives_snapshot = modifiers.shield.map_or(lives, |s| s.lives_snapshot.max(lives));
            modifiers.shield = Some(Shield {
                remaining_ms: powerup::SHIELD_MS,
                lives_snapshot,
            });
        }
        PowerUpKind::Multishot => modifiers.multishot_ms = powerup::MULTISHOT_MS,
    }
}

/// Spawns a power-up every interval, ages existing ones and resolves pickups.
#[allow(clippy::too_many_arguments)]
pub fn power_up_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut timer: ResMut<PowerUpTimer>,
    mut rng: ResMut<GameRng>,
    lives: Res<Lives>,
    mut power_ups: Query<(Entity, &mut PowerUp)>,
    mut players: Query<(&Body, &mut Player, &mut Modifiers)>,
    mut audio: EventWriter<AudioEvent>,
) {
    if config.power_ups {
        timer.elapsed_ms += FRAME_MS;
        if timer.elapsed_ms >= SPAWN_INTERVAL_MS {
            timer.elapsed_ms = 0;
            let power_up = random_power_up(&mut rng.0);
            debug!(kind = %power_up.kind, pos = ?power_up.rect.pos, "Power-up spawned");
            commands.spawn(power_up);
            audio.write(AudioEvent(Sound::Power));
        }
    }

    let Ok((body, mut player, mut modifiers)) = players.single_mut() else {
        return;
    };
    let center = body.center();

    for (entity, mut power_up) in power_ups.iter_mut() {
        power_up.life_ms -= FRAME_MS;

        let offset = (center - power_up.rect.center()).abs();
        if offset.x < PICKUP_DISTANCE && offset.y < PICKUP_DISTANCE {
            info!(kind = %power_up.kind, "Power-up collected");
            apply_power_up(power_up.kind, &mut player, &mut modifiers, lives.0);
            spawn_particles(
                &mut commands,
                &mut rng.0,
                power_up.rect.center(),
                power_up.kind.color(),
                PICKUP_BURST,
            );
            audio.write(AudioEvent(Sound::Power));
            commands.entity(entity).despawn();
        } else if power_up.life_ms <= 0 {
            commands.entity(entity).despawn();
        }
    }
}
