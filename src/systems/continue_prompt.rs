//! The math-question continue offered when the player runs out of lives.

use std::fmt;

use bevy_ecs::{
    event::{EventReader, EventWriter},
    system::{Res, ResMut},
};
use rand::{seq::IndexedRandom, Rng};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tracing::{debug, info};

use crate::{
    audio::Sound,
    config::GameConfig,
    events::{GameCommand, GameEvent},
    systems::{
        audio::AudioEvent,
        components::{Continues, GameRng, Lives},
        state::GameStage,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum MathOp {
    Add,
    Subtract,
    Multiply,
}

impl MathOp {
    pub fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            MathOp::Add => a + b,
            MathOp::Subtract => a - b,
            MathOp::Multiply => a * b,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            MathOp::Add => '+',
            MathOp::Subtract => '-',
            MathOp::Multiply => '×',
        }
    }
}

/// A practice question, shown as `"{a} {op} {b}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathQuestion {
    pub a: i64,
    pub b: i64,
    pub op: MathOp,
    pub answer: i64,
}

impl MathQuestion {
    /// Draws a question whose answer is never negative.
    ///
    /// Addition uses operands in 1..=50, subtraction a minuend in 20..=69 and a
    /// smaller positive subtrahend, multiplication operands in 1..=12.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let ops: Vec<MathOp> = MathOp::iter().collect();
        let op = *ops.choose(rng).unwrap_or(&MathOp::Add);
        let (a, b) = match op {
            MathOp::Add => (rng.random_range(1..=50), rng.random_range(1..=50)),
            MathOp::Subtract => {
                let a = rng.random_range(20..70);
                (a, rng.random_range(1..a))
            }
            MathOp::Multiply => (rng.random_range(1..=12), rng.random_range(1..=12)),
        };
        Self {
            a,
            b,
            op,
            answer: op.apply(a, b),
        }
    }
}

impl fmt::Display for MathQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.a, self.op.symbol(), self.b)
    }
}

/// Grades answers typed into the continue prompt.
///
/// A correct answer restores lives and attempts and resumes play. A wrong one
/// costs an attempt and draws a fresh question; the last wrong answer ends the run.
pub fn continue_system(
    mut events: EventReader<GameEvent>,
    mut stage: ResMut<GameStage>,
    mut lives: ResMut<Lives>,
    mut continues: ResMut<Continues>,
    mut rng: ResMut<GameRng>,
    config: Res<GameConfig>,
    mut audio: EventWriter<AudioEvent>,
) {
    for event in events.read() {
        let GameEvent::Command(GameCommand::SubmitAnswer(answer)) = *event else {
            continue;
        };
        let GameStage::ContinuePrompt { question } = *stage else {
            debug!(answer, "Ignoring answer outside the continue prompt");
            continue;
        };

        if answer == question.answer {
            info!(%question, answer, "Correct answer, continuing");
            lives.0 = config.continue_lives;
            continues.attempts = config.continue_attempts;
            *stage = GameStage::Running;
            audio.write(AudioEvent(Sound::Power));
            continue;
        }

        continues.attempts = continues.attempts.saturating_sub(1);
        if continues.attempts == 0 {
            info!(%question, answer, "Wrong answer, no attempts left");
            *stage = GameStage::GameOver;
            audio.write(AudioEvent(Sound::Damage));
        } else {
            let next = MathQuestion::generate(&mut rng.0);
            info!(%question, answer, attempts = continues.attempts, %next, "Wrong answer");
            *stage = GameStage::ContinuePrompt { question: next };
        }
    }
}
