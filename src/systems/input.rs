use std::collections::{HashMap, HashSet};

use bevy_ecs::{event::EventWriter, resource::Resource, system::ResMut};
use bitflags::bitflags;
use circular_buffer::CircularBuffer;
use tracing::{debug, info, trace};

use crate::{
    constants::cheats::BUFFER_LEN,
    events::{GameCommand, GameEvent},
};

/// A key as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Escape,
    /// A printable character; letters are matched case-insensitively.
    Char(char),
}

impl Key {
    fn normalized(self) -> Self {
        match self {
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            other => other,
        }
    }

    fn movement(self) -> Option<HeldKeys> {
        match self {
            Key::Left => Some(HeldKeys::LEFT),
            Key::Right => Some(HeldKeys::RIGHT),
            Key::Up => Some(HeldKeys::UP),
            Key::Down => Some(HeldKeys::DOWN),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

bitflags! {
    /// Movement keys currently held down, sampled once per frame by the player system.
    #[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HeldKeys: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const UP = 1 << 2;
        const DOWN = 1 << 3;
    }
}

/// Key events pushed by the host since the last frame.
#[derive(Resource, Debug, Default)]
pub struct PendingKeys(pub Vec<KeyEvent>);

#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    key_bindings: HashMap<Key, GameCommand>,
    /// Keys currently down, so that auto-repeat doesn't re-trigger commands.
    pressed: HashSet<Key>,
}

impl Default for Bindings {
    fn default() -> Self {
        let key_bindings = HashMap::from([
            (Key::Space, GameCommand::Fire),
            (Key::Char('p'), GameCommand::Ability),
            (Key::Escape, GameCommand::TogglePause),
            (Key::Char('s'), GameCommand::ToggleSound),
        ]);

        Self {
            key_bindings,
            pressed: HashSet::new(),
        }
    }
}

impl Bindings {
    pub fn command_for(&self, key: Key) -> Option<GameCommand> {
        self.key_bindings.get(&key.normalized()).copied()
    }
}

/// Typed-character cheat codes and what they do.
pub const CHEAT_CODES: &[(&str, GameCommand)] = &[
    ("level1", GameCommand::WarpToLevel(1)),
    ("level2", GameCommand::WarpToLevel(2)),
    ("level3", GameCommand::WarpToLevel(3)),
    ("level4", GameCommand::WarpToLevel(4)),
    ("level5", GameCommand::WarpToLevel(5)),
    ("xtralife", GameCommand::ExtraLives),
];

/// The last few typed characters, matched against [`CHEAT_CODES`].
#[derive(Resource, Default)]
pub struct CheatBuffer(pub CircularBuffer<BUFFER_LEN, char>);

impl CheatBuffer {
    /// Records a character, returning the command of any cheat code it completes.
    pub fn push(&mut self, c: char) -> Option<GameCommand> {
        let _ = self.0.push_back(c);
        let typed: String = self.0.iter().collect();
        let (code, command) = CHEAT_CODES.iter().find(|(code, _)| typed.ends_with(code))?;
        info!(code, "Cheat code entered");
        self.0.clear();
        Some(*command)
    }
}

/// Drains the host's key events into held movement keys and edge-triggered commands.
pub fn input_system(
    mut pending: ResMut<PendingKeys>,
    mut held: ResMut<HeldKeys>,
    mut bindings: ResMut<Bindings>,
    mut cheats: ResMut<CheatBuffer>,
    mut writer: EventWriter<GameEvent>,
) {
    for event in pending.0.drain(..) {
        match event {
            KeyEvent::Down(key) => {
                let key = key.normalized();
                if !bindings.pressed.insert(key) {
                    trace!(?key, "Ignoring repeated key");
                    continue;
                }
                if let Some(flag) = key.movement() {
                    held.insert(flag);
                }
                if let Some(command) = bindings.command_for(key) {
                    debug!(?key, ?command, "Key bound to command");
                    writer.write(GameEvent::Command(command));
                }
                if let Key::Char(c) = key {
                    if let Some(command) = cheats.push(c) {
                        writer.write(GameEvent::Command(command));
                    }
                }
            }
            KeyEvent::Up(key) => {
                let key = key.normalized();
                bindings.pressed.remove(&key);
                if let Some(flag) = key.movement() {
                    held.remove(flag);
                }
            }
        }
    }
}
