//! This module contains the main game logic and state.

use bevy_ecs::{
    entity::Entity,
    event::{EventRegistry, Events},
    schedule::{IntoScheduleConfigs, Schedule, SystemSet},
    world::World,
};
use glam::Vec2;
use tracing::{debug, error, info};

use crate::{
    audio::Sound,
    config::GameConfig,
    constants::{player, ARENA_SIZE},
    error::{GameError, GameResult},
    events::{BossDefeated, GameCommand, GameEvent, LevelTransition},
    systems::{
        audio::{audio_system, AudioEvent, AudioState, SoundQueue},
        components::{Body, Continues, Door, GameRng, Lives, Modifiers, Player, Score},
        continue_prompt::continue_system,
        enemy::{spawn_enemy, species_system},
        input::{input_system, Bindings, CheatBuffer, HeldKeys, Key, KeyEvent, PendingKeys},
        level::{boss_defeated_system, door_system, level_transition_system, LevelState},
        particles::particle_system,
        player::{player_action_system, player_movement_system},
        powerup::{power_up_system, PowerUpTimer},
        projectile::{enemy_projectile_system, fireball_system},
        render::{render_system, DrawCommand, DrawList},
        spawner::{level_plan, spawner_system, SpawnSchedule},
        species::{EnemyDragon, Eel, Skeleton, Species, Warden, Wizard},
        state::{command_system, is_running, stage_system, GameStage},
    },
};

/// Stages of a frame, run in declaration order.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum FrameSet {
    /// Key events and game-wide commands; always runs.
    Input,
    /// Advances the simulation; only while running.
    Update,
    /// Reacts to what the update produced; only while running.
    Respond,
    /// Draw list and sound cues; always runs.
    Render,
}

/// Core game state built on the Bevy ECS.
///
/// The `World` holds every entity and resource, while the `Schedule` runs the
/// systems of one frame tick in a fixed order. The host drives it by calling
/// [`Game::tick`] once per frame, feeding key events in between.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Creates a game at the configured starting level, with the player in the arena.
    ///
    /// # Errors
    ///
    /// Returns a `GameError` if the configuration doesn't validate.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        config.validate()?;
        info!(seed = config.seed, level = config.starting_level, "Creating game");

        let mut world = World::default();
        let mut schedule = Schedule::default();

        Self::setup_ecs(&mut world);
        Self::insert_resources(&mut world, config)?;
        Self::spawn_player(&mut world);
        Self::configure_schedule(&mut schedule);

        Ok(Game { world, schedule })
    }

    fn setup_ecs(world: &mut World) {
        EventRegistry::register_event::<GameError>(world);
        EventRegistry::register_event::<GameEvent>(world);
        EventRegistry::register_event::<AudioEvent>(world);
        EventRegistry::register_event::<LevelTransition>(world);
        EventRegistry::register_event::<BossDefeated>(world);
    }

    fn insert_resources(world: &mut World, config: GameConfig) -> GameResult<()> {
        let plan = level_plan(config.starting_level).ok_or(GameError::InvalidLevel(config.starting_level))?;

        world.insert_resource(GameRng::seeded(config.seed));
        world.insert_resource(Score::default());
        world.insert_resource(Lives(config.starting_lives));
        world.insert_resource(Continues {
            attempts: config.continue_attempts,
        });
        world.insert_resource(LevelState::new(config.starting_level));
        world.insert_resource(SpawnSchedule::new(plan));
        world.insert_resource(PowerUpTimer::default());
        world.insert_resource(Door::default());
        world.insert_resource(GameStage::Running);
        world.insert_resource(HeldKeys::default());
        world.insert_resource(PendingKeys::default());
        world.insert_resource(Bindings::default());
        world.insert_resource(CheatBuffer::default());
        world.insert_resource(AudioState::default());
        world.insert_resource(SoundQueue::default());
        world.insert_resource(DrawList::default());
        world.insert_resource(config);
        Ok(())
    }

    fn spawn_player(world: &mut World) {
        world.spawn((
            Player::default(),
            Body::new(ARENA_SIZE / 2.0, player::SIZE),
            Modifiers::default(),
        ));
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule
            .add_systems((
                (input_system, command_system, continue_system).chain().in_set(FrameSet::Input),
                (
                    player_movement_system,
                    player_action_system,
                    fireball_system,
                    species_system::<Warden>,
                    species_system::<EnemyDragon>,
                    species_system::<Skeleton>,
                    species_system::<Wizard>,
                    species_system::<Eel>,
                    particle_system,
                    power_up_system,
                    enemy_projectile_system,
                    door_system,
                    spawner_system,
                )
                    .chain()
                    .in_set(FrameSet::Update),
                (level_transition_system, boss_defeated_system, stage_system)
                    .chain()
                    .in_set(FrameSet::Respond),
                (render_system, audio_system).chain().in_set(FrameSet::Render),
            ))
            .configure_sets(
                (
                    FrameSet::Input,
                    FrameSet::Update.run_if(is_running),
                    FrameSet::Respond.run_if(is_running),
                    FrameSet::Render,
                )
                    .chain(),
            );
    }

    /// Runs one 16 ms frame tick.
    ///
    /// Returns `false` once the run is over (game over or victory), after the
    /// final frame has been drawn.
    pub fn tick(&mut self) -> bool {
        self.schedule.run(&mut self.world);

        let errors: Vec<GameError> = self.world.resource_mut::<Events<GameError>>().drain().collect();
        for e in errors {
            error!(error = %e, "Error during frame");
        }
        self.world.resource_mut::<Events<GameEvent>>().update();
        self.world.resource_mut::<Events<AudioEvent>>().update();
        self.world.resource_mut::<Events<LevelTransition>>().update();
        self.world.resource_mut::<Events<BossDefeated>>().update();

        !self.stage().is_finished()
    }

    pub fn key_down(&mut self, key: Key) {
        self.world.resource_mut::<PendingKeys>().0.push(KeyEvent::Down(key));
    }

    pub fn key_up(&mut self, key: Key) {
        self.world.resource_mut::<PendingKeys>().0.push(KeyEvent::Up(key));
    }

    /// Queues a press and release for every character of `text`.
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.key_down(Key::Char(c));
            self.key_up(Key::Char(c));
        }
    }

    /// Sends a command directly, bypassing key bindings.
    pub fn send_command(&mut self, command: GameCommand) {
        self.world.send_event(GameEvent::Command(command));
    }

    pub fn submit_answer(&mut self, answer: i64) {
        self.send_command(GameCommand::SubmitAnswer(answer));
    }

    /// Requests a jump to `level`, applied on the next running tick.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidLevel` if no such level exists.
    pub fn warp_to_level(&mut self, level: u8) -> GameResult<()> {
        level_plan(level).ok_or(GameError::InvalidLevel(level))?;
        debug!(level, "Warp queued");
        self.world.send_event(LevelTransition { target: level });
        Ok(())
    }

    /// Places an enemy directly, outside the spawn schedule.
    pub fn spawn_enemy(&mut self, species: Species, boss: bool, pos: Vec2) -> Entity {
        let profile = species.profile();
        let stats = match profile.variants.first() {
            Some(stats) if !boss => stats,
            _ => &profile.boss,
        };

        let entity = spawn_enemy(&mut self.world.commands(), species, boss, stats, pos);
        self.world.flush();
        entity
    }

    pub fn stage(&self) -> GameStage {
        *self.world.resource::<GameStage>()
    }

    pub fn score(&self) -> u32 {
        self.world.resource::<Score>().0
    }

    pub fn lives(&self) -> u32 {
        self.world.resource::<Lives>().0
    }

    pub fn level(&self) -> u8 {
        self.world.resource::<LevelState>().current
    }

    /// What the last tick asked to be drawn, back to front.
    pub fn draw_list(&self) -> &[DrawCommand] {
        &self.world.resource::<DrawList>().0
    }

    /// Takes the sound cues queued since the last call, oldest first.
    pub fn drain_sounds(&mut self) -> Vec<Sound> {
        std::mem::take(&mut self.world.resource_mut::<SoundQueue>().0)
    }
}
