//! The Entity-Component-System (ECS) module.
//!
//! This module contains all the ECS-related logic, including components, systems,
//! and resources.

pub mod audio;
pub mod behavior;
pub mod collision;
pub mod components;
pub mod continue_prompt;
pub mod enemy;
pub mod input;
pub mod level;
pub mod particles;
pub mod player;
pub mod powerup;
pub mod projectile;
pub mod render;
pub mod spawner;
pub mod species;
pub mod state;

pub use self::audio::*;
pub use self::behavior::{BossBehavior, BossPhase};
pub use self::components::*;
pub use self::input::{Bindings, CheatBuffer, HeldKeys, Key, KeyEvent, PendingKeys};
pub use self::level::LevelState;
pub use self::render::{DrawCommand, DrawList};
pub use self::spawner::SpawnSchedule;
pub use self::species::{EnemyDragon, Eel, Skeleton, Species, SpeciesMarker, Warden, Wizard};
pub use self::state::GameStage;
