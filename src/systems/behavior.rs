//! The boss state machine.
//!
//! Every boss runs the same four-phase cycle, `Idle → Telegraph → Action →
//! Recover → Idle`, advanced by a countdown timer. Species differ only in the
//! [`BossPattern`] they are configured with: how long each phase lasts and how
//! the boss moves during it.

use bevy_ecs::component::Component;
use glam::Vec2;
use strum_macros::Display;

use crate::constants::FRAME_MS;

/// Angle advanced per frame by the oscillating motions (zigzag, orbit, strafe).
pub const ANGLE_STEP: f32 = 0.05;
/// Amplitude of the zigzag sideways offset, in pixels per frame.
pub const ZIGZAG_AMPLITUDE: f32 = 3.0;
/// Fraction of the boss's speed used while creeping.
pub const CREEP_FACTOR: f32 = 0.3;
/// Height a strafing boss keeps its centre at.
pub const STRAFE_ALTITUDE: f32 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum BossPhase {
    Idle,
    Telegraph,
    Action,
    Recover,
}

impl BossPhase {
    pub fn next(self) -> Self {
        match self {
            BossPhase::Idle => BossPhase::Telegraph,
            BossPhase::Telegraph => BossPhase::Action,
            BossPhase::Action => BossPhase::Recover,
            BossPhase::Recover => BossPhase::Idle,
        }
    }
}

/// How a boss moves during one phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Straight at the player at the boss's own speed.
    Approach,
    /// Straight at the player, slowly.
    Creep,
    /// At the locked target at a fixed speed, stopping on arrival.
    Charge { speed: f32 },
    /// Approach with an oscillating sideways offset.
    Zigzag,
    /// Circle the player at a fixed radius.
    Orbit { radius: f32 },
    /// Sweep left and right near the top of the arena.
    Strafe { speed: f32 },
    /// Straight away from the player.
    Flee { speed: f32 },
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseRule {
    pub duration_ms: i32,
    pub motion: Motion,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossPattern {
    pub idle: PhaseRule,
    pub telegraph: PhaseRule,
    pub action: PhaseRule,
    pub recover: PhaseRule,
    /// Number of projectiles fired in a ring on entering `Action`; zero for none.
    pub volley: usize,
}

impl BossPattern {
    pub fn phase(&self, phase: BossPhase) -> &PhaseRule {
        match phase {
            BossPhase::Idle => &self.idle,
            BossPhase::Telegraph => &self.telegraph,
            BossPhase::Action => &self.action,
            BossPhase::Recover => &self.recover,
        }
    }
}

/// Per-boss state machine, attached next to the boss's `Enemy` component.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct BossBehavior {
    pub phase: BossPhase,
    pub timer_ms: i32,
    pub pattern: &'static BossPattern,
    /// Where a charge is headed; locked when `Action` begins.
    pub locked_target: Option<Vec2>,
    /// Phase angle driving the oscillating motions.
    pub angle: f32,
}

impl BossBehavior {
    pub fn new(pattern: &'static BossPattern) -> Self {
        Self {
            phase: BossPhase::Idle,
            timer_ms: pattern.idle.duration_ms,
            pattern,
            locked_target: None,
            angle: 0.0,
        }
    }

    pub fn motion(&self) -> Motion {
        self.pattern.phase(self.phase).motion
    }

    /// Advances the machine by one frame tick.
    ///
    /// Returns the phase just entered, if the timer ran out on this tick. The
    /// timer is reloaded with the new phase's full duration; any overshoot is
    /// discarded.
    pub fn tick(&mut self) -> Option<BossPhase> {
        self.angle = (self.angle + ANGLE_STEP) % std::f32::consts::TAU;
        self.timer_ms -= FRAME_MS;
        if self.timer_ms > 0 {
            return None;
        }

        self.phase = self.phase.next();
        self.timer_ms = self.pattern.phase(self.phase).duration_ms;
        if self.phase != BossPhase::Action {
            self.locked_target = None;
        }
        Some(self.phase)
    }
}

/// The sideways component of a zigzag step.
///
/// Perpendicular to the direction from `from` to `to`, scaled by `sin(angle)`.
/// Returns `None` when the two points are too close for a direction to be meaningful.
pub fn zigzag_offset(from: Vec2, to: Vec2, angle: f32) -> Option<Vec2> {
    let delta = to - from;
    let distance = delta.length();
    if distance <= 1.0 {
        return None;
    }
    let perpendicular = Vec2::new(-delta.y / distance, delta.x / distance);
    Some(perpendicular * angle.sin() * ZIGZAG_AMPLITUDE)
}

/// The point on a circle of `radius` around `center` at the given phase angle.
pub fn orbit_target(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    center + Vec2::new(angle.cos(), angle.sin()) * radius
}

/// A step of at most `speed` from `from` towards `to`, never overshooting.
fn step_towards(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    let delta = to - from;
    let distance = delta.length();
    if distance <= speed {
        delta
    } else {
        delta / distance * speed
    }
}

/// Displacement of a boss's centre for one frame of the given motion.
pub fn motion_step(behavior: &BossBehavior, boss: Vec2, player: Vec2, speed: f32) -> Vec2 {
    match behavior.motion() {
        Motion::Approach => step_towards(boss, player, speed),
        Motion::Creep => step_towards(boss, player, speed * CREEP_FACTOR),
        Motion::Charge { speed: charge } => {
            let target = behavior.locked_target.unwrap_or(player);
            step_towards(boss, target, charge)
        }
        Motion::Zigzag => {
            let sideways = zigzag_offset(boss, player, behavior.angle).unwrap_or(Vec2::ZERO);
            step_towards(boss, player, speed) + sideways
        }
        Motion::Orbit { radius } => step_towards(boss, orbit_target(player, radius, behavior.angle), speed * 2.0),
        Motion::Strafe { speed: sweep } => {
            let vertical = step_towards(Vec2::new(0.0, boss.y), Vec2::new(0.0, STRAFE_ALTITUDE), speed).y;
            Vec2::new(behavior.angle.cos() * sweep, vertical)
        }
        Motion::Flee { speed: flee } => (boss - player).normalize_or_zero() * flee,
        Motion::Hold => Vec2::ZERO,
    }
}
