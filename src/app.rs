use std::time::Instant;

use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::constants::LOOP_TIME;
use crate::error::GameResult;
use crate::formatter;
use crate::game::Game;
use crate::platform;

/// Drives a [`Game`] at a fixed 60 Hz, one simulation tick per frame.
pub struct App {
    pub game: Game,
    /// Skip the sleep between frames and simulate as fast as possible.
    pub unpaced: bool,
}

impl App {
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let game = Game::new(config)?;
        info!("Application initialized");
        Ok(App { game, unpaced: false })
    }

    /// Executes a single frame, discards its sound cues and sleeps away whatever
    /// remains of the frame budget.
    ///
    /// Returns `true` if the game should keep running.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        formatter::increment_frame();
        let keep_running = self.game.tick();

        // No audio device here; cues are logged and dropped so the queue stays empty.
        for sound in self.game.drain_sounds() {
            trace!(sound = <&'static str>::from(sound), "Sound cue");
        }

        if !keep_running {
            debug!(frames = formatter::frame_count(), "Run finished");
        } else if !self.unpaced {
            let remaining = LOOP_TIME.saturating_sub(start.elapsed());
            if !remaining.is_zero() {
                platform::sleep(remaining);
            }
        }

        keep_running
    }
}
