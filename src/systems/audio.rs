//! Audio cue routing.
//!
//! Gameplay systems write [`AudioEvent`]s; this system filters them through the
//! mute state and queues the survivors for the host to play.

use bevy_ecs::{
    event::{Event, EventReader},
    resource::Resource,
    system::{Res, ResMut},
};
use tracing::trace;

use crate::audio::Sound;

/// Resource for tracking audio state
#[derive(Resource, Debug, Clone, Default)]
pub struct AudioState {
    /// Whether audio is currently muted
    pub muted: bool,
}

/// Events for triggering audio playback
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioEvent(pub Sound);

/// Cues waiting for the host to play them, oldest first.
#[derive(Resource, Debug, Default)]
pub struct SoundQueue(pub Vec<Sound>);

/// System that processes audio events and queues sounds for playback
pub fn audio_system(state: Res<AudioState>, mut queue: ResMut<SoundQueue>, mut events: EventReader<AudioEvent>) {
    for AudioEvent(sound) in events.read() {
        if state.muted {
            continue;
        }
        trace!(sound = <&'static str>::from(*sound), "Queueing sound");
        queue.0.push(*sound);
    }
}
