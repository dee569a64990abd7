//! Headless runner: plays the game with a simple autopilot and logs what happens.

use std::env;

use anyhow::{bail, Context};
use bevy_ecs::query::With;
use dragons_vs_warden::{
    app::App,
    config::GameConfig,
    game::Game,
    systems::{Body, Door, Enemy, GameStage, Key, Player},
};
use tracing::info;

struct Args {
    config: GameConfig,
    frames: u64,
    fast: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        config: GameConfig::default(),
        frames: 60 * 60 * 5,
        fast: false,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => args.config.seed = value(&mut iter, &arg)?,
            "--level" => args.config.starting_level = value(&mut iter, &arg)?,
            "--frames" => args.frames = value(&mut iter, &arg)?,
            "--fast" => args.fast = true,
            "--no-power-ups" => args.config.power_ups = false,
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}

fn value<T: std::str::FromStr>(iter: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = iter.next().with_context(|| format!("{flag} needs a value"))?;
    raw.parse().with_context(|| format!("invalid value for {flag}: {raw}"))
}

/// Steers under the nearest enemy and keeps firing; heads for the door when one is open.
fn autopilot(game: &mut Game, frame: u64) {
    if let GameStage::ContinuePrompt { question } = game.stage() {
        game.submit_answer(question.answer);
        return;
    }

    let Ok(player) = game.world.query_filtered::<&Body, With<Player>>().single(&game.world).copied() else {
        return;
    };
    let door = game.world.resource::<Door>().0.map(|rect| rect.center());
    let target = door.or_else(|| {
        game.world
            .query_filtered::<&Body, With<Enemy>>()
            .iter(&game.world)
            .map(|body| body.center())
            .min_by(|a, b| a.distance_squared(player.center()).total_cmp(&b.distance_squared(player.center())))
    });

    let dx = target.map_or(0.0, |t| t.x - player.center().x);
    let dy = door.map_or(0.0, |t| t.y - player.center().y);
    for (key, wanted) in [
        (Key::Left, dx < -4.0),
        (Key::Right, dx > 4.0),
        (Key::Up, dy < -4.0),
        (Key::Down, dy > 4.0),
    ] {
        if wanted {
            game.key_down(key);
        } else {
            game.key_up(key);
        }
    }

    if frame % 8 == 0 {
        game.key_down(Key::Space);
        game.key_up(Key::Space);
    }
}

fn main() -> anyhow::Result<()> {
    let args = parse_args()?;
    dragons_vs_warden::platform::init_tracing(true)?;

    let mut app = App::new(args.config)?;
    app.unpaced = args.fast;

    for frame in 0..args.frames {
        autopilot(&mut app.game, frame);
        if !app.run() {
            break;
        }
    }

    info!(
        stage = ?app.game.stage(),
        level = app.game.level(),
        score = app.game.score(),
        lives = app.game.lives(),
        "Run ended"
    );
    Ok(())
}
