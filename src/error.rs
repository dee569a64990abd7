//! Centralized error types for the game.
//!
//! The simulation itself has almost no failure modes: combat outcomes are game
//! events, not errors. What remains are configuration mistakes at the API
//! boundary and broken invariants that systems report instead of panicking.

use bevy_ecs::event::Event;

/// Main error type for the game.
///
/// Also registered as an ECS event so that systems can report unexpected
/// conditions without aborting the frame; `Game::tick` drains and logs them.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Event)]
pub enum GameError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Level {0} does not exist")]
    InvalidLevel(u8),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Platform error: {0}")]
    Platform(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
