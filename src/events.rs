use bevy_ecs::prelude::*;

/// A discrete, edge-triggered request coming from the input collaborator (or a cheat code).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Fire,
    /// The player's special ability (temporary invisibility).
    Ability,
    TogglePause,
    ToggleSound,
    /// An answer typed into the continue prompt.
    SubmitAnswer(i64),
    WarpToLevel(u8),
    ExtraLives,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
}

/// Requests a move to another level; consumed by the level controller.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelTransition {
    pub target: u8,
}

/// Emitted by a species update when the level's boss dies.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BossDefeated {
    pub level: u8,
}
