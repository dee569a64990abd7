//! Dragons vs Warden game library crate.

pub mod app;
pub mod audio;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod platform;
pub mod systems;
