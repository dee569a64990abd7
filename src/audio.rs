//! Sound cue definitions.
//!
//! The simulation never synthesizes audio itself. It emits [`Sound`] cues which
//! the host plays back with whatever backend it has; each cue carries the tone
//! parameters it was designed with.

use strum_macros::{EnumIter, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Sound {
    /// A projectile was fired, by the player or an enemy.
    Shoot,
    /// A player fireball hit an enemy.
    Hit,
    /// The player lost a life, or a boss arrived.
    Damage,
    /// An enemy died.
    Kill,
    /// A power-up, ability or level change.
    Power,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// A single oscillator note with an exponential fade-out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_secs: f32,
    pub waveform: Waveform,
}

impl Sound {
    pub fn tone(self) -> Tone {
        let (frequency_hz, duration_secs, waveform) = match self {
            Sound::Shoot => (200.0, 0.1, Waveform::Square),
            Sound::Hit => (150.0, 0.2, Waveform::Sawtooth),
            Sound::Damage => (100.0, 0.3, Waveform::Triangle),
            Sound::Kill => (50.0, 0.5, Waveform::Sine),
            Sound::Power => (400.0, 0.3, Waveform::Sine),
        };
        Tone {
            frequency_hz,
            duration_secs,
            waveform,
        }
    }
}
