//! The render pass.
//!
//! The simulation doesn't draw. Each frame this pass reads the world into a
//! [`DrawList`] in back-to-front order; the host's renderer walks the list. The
//! pass never writes anything back into simulation state.

use bevy_ecs::{
    resource::Resource,
    system::{Query, Res, ResMut},
};
use glam::Vec2;
use thousands::Separable;

use crate::{
    constants::particles::LIFE_TICKS,
    systems::{
        behavior::{BossBehavior, BossPhase},
        collision::Rect,
        components::{
            Body, Continues, Door, Enemy, EnemyProjectile, Fireball, Lives, Modifiers, Particle, Player, PowerUp,
            PowerUpKind, ProjectileKind, Rgb, Score,
        },
        level::LevelState,
        species::Species,
        state::GameStage,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Paused,
    ContinuePrompt { question: String, attempts: u8 },
    GameOver { score: String },
    Victory { score: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    /// Score with thousands separators, ready to print.
    pub score: String,
    pub lives: u32,
    pub level: u8,
    /// One-line summary of the player's ability and active power-ups.
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Door(Rect),
    PowerUp {
        rect: Rect,
        kind: PowerUpKind,
    },
    Enemy {
        species: Species,
        boss: bool,
        rect: Rect,
        color: Rgb,
        health: i32,
        max_health: i32,
        /// Bosses expose their phase so the renderer can show telegraphs.
        phase: Option<BossPhase>,
    },
    Fireball {
        pos: Vec2,
        radius: f32,
        big: bool,
    },
    Projectile {
        pos: Vec2,
        radius: f32,
        kind: ProjectileKind,
    },
    Player {
        rect: Rect,
        invisible: bool,
        shielded: bool,
    },
    Particle {
        pos: Vec2,
        color: Rgb,
        /// Fades from 1 to 0 over the particle's life.
        alpha: f32,
    },
    Hud(Hud),
    Overlay(Overlay),
}

/// What to draw this frame, back to front.
#[derive(Resource, Debug, Default)]
pub struct DrawList(pub Vec<DrawCommand>);

fn species_rank(species: Species) -> u8 {
    match species {
        Species::Warden => 0,
        Species::Dragon => 1,
        Species::Skeleton => 2,
        Species::Wizard => 3,
        Species::Eel => 4,
    }
}

pub fn status_line(player: &Player, modifiers: &Modifiers) -> String {
    let mut status = if player.is_invisible() {
        "INVISIBLE".to_string()
    } else if player.invisible_cooldown_ms > 0 {
        format!("P cooldown: {}s", (player.invisible_cooldown_ms + 999) / 1000)
    } else {
        "P: Ready!".to_string()
    };
    for (active, label) in [
        (modifiers.multishot(), "MULTI-SHOT"),
        (modifiers.speed_boosted(), "SPEED"),
        (modifiers.shield.is_some(), "SHIELD"),
    ] {
        if active {
            status.push_str(" | ");
            status.push_str(label);
        }
    }
    status
}

#[allow(clippy::too_many_arguments)]
#[allow(clippy::type_complexity)]
pub fn render_system(
    mut list: ResMut<DrawList>,
    door: Res<Door>,
    power_ups: Query<&PowerUp>,
    enemies: Query<(&Enemy, &Body, Option<&BossBehavior>)>,
    fireballs: Query<&Fireball>,
    projectiles: Query<&EnemyProjectile>,
    players: Query<(&Body, &Player, &Modifiers)>,
    particles: Query<&Particle>,
    (score, lives, level, continues): (Res<Score>, Res<Lives>, Res<LevelState>, Res<Continues>),
    stage: Res<GameStage>,
) {
    let list = &mut list.0;
    list.clear();

    if let Some(rect) = door.0 {
        list.push(DrawCommand::Door(rect));
    }

    list.extend(power_ups.iter().map(|p| DrawCommand::PowerUp {
        rect: p.rect,
        kind: p.kind,
    }));

    let mut sorted: Vec<_> = enemies.iter().collect();
    sorted.sort_by_key(|(enemy, _, _)| species_rank(enemy.species));
    list.extend(sorted.into_iter().map(|(enemy, body, behavior)| DrawCommand::Enemy {
        species: enemy.species,
        boss: enemy.boss,
        rect: body.rect(),
        color: enemy.stats.color,
        health: enemy.health,
        max_health: enemy.max_health,
        phase: behavior.map(|b| b.phase),
    }));

    list.extend(fireballs.iter().map(|f| DrawCommand::Fireball {
        pos: f.pos,
        radius: f.radius,
        big: f.big,
    }));
    list.extend(projectiles.iter().map(|p| DrawCommand::Projectile {
        pos: p.pos,
        radius: p.radius,
        kind: p.kind,
    }));

    let player = players.single().ok();
    if let Some((body, player, modifiers)) = player {
        list.push(DrawCommand::Player {
            rect: body.rect(),
            invisible: player.is_invisible(),
            shielded: modifiers.shield.is_some(),
        });
    }

    list.extend(particles.iter().map(|p| DrawCommand::Particle {
        pos: p.pos,
        color: p.color,
        alpha: p.life as f32 / LIFE_TICKS as f32,
    }));

    list.push(DrawCommand::Hud(Hud {
        score: score.0.separate_with_commas(),
        lives: lives.0,
        level: level.current,
        status: player.map(|(_, p, m)| status_line(p, m)).unwrap_or_default(),
    }));

    let overlay = match *stage {
        GameStage::Running => None,
        GameStage::Paused => Some(Overlay::Paused),
        GameStage::ContinuePrompt { question } => Some(Overlay::ContinuePrompt {
            question: question.to_string(),
            attempts: continues.attempts,
        }),
        GameStage::GameOver => Some(Overlay::GameOver {
            score: score.0.separate_with_commas(),
        }),
        GameStage::Victory => Some(Overlay::Victory {
            score: score.0.separate_with_commas(),
        }),
    };
    list.extend(overlay.map(DrawCommand::Overlay));
}
