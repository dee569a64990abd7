//! Run-time settings for a game session.

use bevy_ecs::resource::Resource;

use crate::{
    constants::{mechanics, FINAL_LEVEL},
    error::{GameError, GameResult},
};

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the game's random number generator; equal seeds replay identically.
    pub seed: u64,
    pub starting_lives: u32,
    pub starting_level: u8,
    pub continue_lives: u32,
    pub continue_attempts: u8,
    /// Whether the power-up generator runs.
    pub power_ups: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            starting_lives: mechanics::STARTING_LIVES,
            starting_level: 1,
            continue_lives: mechanics::CONTINUE_LIVES,
            continue_attempts: mechanics::CONTINUE_ATTEMPTS,
            power_ups: true,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> GameResult<()> {
        if !(1..=FINAL_LEVEL).contains(&self.starting_level) {
            return Err(GameError::InvalidLevel(self.starting_level));
        }
        if self.starting_lives == 0 {
            return Err(GameError::Config("starting lives must be positive".into()));
        }
        if self.continue_lives == 0 {
            return Err(GameError::Config("continue lives must be positive".into()));
        }
        Ok(())
    }
}
