use bevy_ecs::{
    event::{EventReader, EventWriter},
    resource::Resource,
    system::{Res, ResMut},
};
use tracing::{debug, info, warn};

use crate::{
    audio::Sound,
    constants::cheats,
    events::{GameCommand, GameEvent, LevelTransition},
    systems::{
        audio::{AudioEvent, AudioState},
        components::{Continues, GameRng, Lives},
        continue_prompt::MathQuestion,
    },
};

/// The overall stage of the game, from the frame driver's point of view.
#[derive(Resource, Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum GameStage {
    /// Gameplay systems advance every tick.
    #[default]
    Running,
    /// Nothing moves; the frame still renders with a pause overlay.
    Paused,
    /// Out of lives, waiting for an answer to the shown question.
    ContinuePrompt { question: MathQuestion },
    GameOver,
    Victory,
}

impl GameStage {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStage::Running)
    }

    /// Whether the run has ended and the loop should stop scheduling ticks.
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStage::GameOver | GameStage::Victory)
    }
}

/// Run condition for every system that advances the simulation.
pub fn is_running(stage: Res<GameStage>) -> bool {
    stage.is_running()
}

/// Applies the commands that act on the game as a whole rather than on the player.
pub fn command_system(
    mut events: EventReader<GameEvent>,
    mut stage: ResMut<GameStage>,
    mut audio_state: ResMut<AudioState>,
    mut lives: ResMut<Lives>,
    mut transitions: EventWriter<LevelTransition>,
    mut audio: EventWriter<AudioEvent>,
) {
    for event in events.read() {
        let GameEvent::Command(command) = *event;
        match command {
            GameCommand::TogglePause => match *stage {
                GameStage::Running => {
                    info!("Game paused");
                    *stage = GameStage::Paused;
                }
                GameStage::Paused => {
                    info!("Game resumed");
                    *stage = GameStage::Running;
                }
                other => debug!(stage = ?other, "Pause ignored"),
            },
            GameCommand::ToggleSound => {
                audio_state.muted = !audio_state.muted;
                info!(muted = audio_state.muted, "Sound toggled");
            }
            GameCommand::WarpToLevel(target) if stage.is_running() => {
                info!(target, "Level warp requested");
                transitions.write(LevelTransition { target });
            }
            GameCommand::ExtraLives if stage.is_running() => {
                lives.0 += cheats::EXTRA_LIVES;
                info!(lives = lives.0, "Extra lives granted");
                audio.write(AudioEvent(Sound::Power));
            }
            GameCommand::WarpToLevel(_) | GameCommand::ExtraLives => {
                warn!(?command, stage = ?*stage, "Cheat ignored while not running");
            }
            GameCommand::Fire | GameCommand::Ability | GameCommand::SubmitAnswer(_) => {}
        }
    }
}

/// Handles running out of lives: a continue prompt while attempts remain, game over otherwise.
pub fn stage_system(
    mut stage: ResMut<GameStage>,
    lives: Res<Lives>,
    continues: Res<Continues>,
    mut rng: ResMut<GameRng>,
) {
    if !stage.is_running() || lives.0 > 0 {
        return;
    }

    if continues.attempts > 0 {
        let question = MathQuestion::generate(&mut rng.0);
        info!(%question, attempts = continues.attempts, "Out of lives, offering a continue");
        *stage = GameStage::ContinuePrompt { question };
    } else {
        info!("Out of lives, game over");
        *stage = GameStage::GameOver;
    }
}
