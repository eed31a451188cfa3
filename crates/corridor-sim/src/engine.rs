//! Corridor engine: the per-frame driver of the walk.
//!
//! `CorridorEngine` owns the hecs world, the joystick sampler and the explicit
//! `GameState`. It processes queued player commands, runs the systems and
//! produces `GameStateSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use log::{debug, info};

use corridor_core::commands::PlayerCommand;
use corridor_core::config::CorridorConfig;
use corridor_core::constants::{JOYSTICK_INSET, JOYSTICK_SIZE};
use corridor_core::enums::GamePhase;
use corridor_core::state::GameStateSnapshot;
use corridor_core::types::{ControlSurface, FrameClock, PlayerPose};

use crate::game_state::{GameState, MovementGate};
use crate::input::InputSampler;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new session.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub corridor: CorridorConfig,
    /// Initial joystick rectangle. Replaced by `SetControlSurface`.
    pub control_surface: ControlSurface,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            corridor: CorridorConfig::default(),
            control_surface: ControlSurface::new(
                JOYSTICK_INSET,
                JOYSTICK_INSET,
                JOYSTICK_SIZE,
                JOYSTICK_SIZE,
            ),
        }
    }
}

/// The corridor engine. Owns the world and all session state.
pub struct CorridorEngine {
    world: World,
    config: CorridorConfig,
    state: GameState,
    input: InputSampler,
    player: Option<Entity>,
    /// Door entities in ascending index order.
    doors: Vec<Entity>,
    command_queue: VecDeque<PlayerCommand>,
}

impl CorridorEngine {
    /// Create an engine waiting on the loading screen.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            config: config.corridor,
            state: GameState::default(),
            input: InputSampler::new(config.control_surface),
            player: None,
            doors: Vec::new(),
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one frame and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if matches!(self.state.phase, GamePhase::Exploring | GamePhase::Won) {
            self.run_systems();
            self.state.clock.advance();
        }

        let events = self.state.take_events();
        systems::snapshot::build_snapshot(
            &self.world,
            self.player,
            &self.doors,
            &self.state,
            &self.input,
            events,
        )
    }

    /// Close the reveal on screen right away, outside the command queue.
    ///
    /// This is the reveal UI's close callback. Returns the door whose reveal
    /// closed, or `None` when nothing was on screen.
    pub fn dismiss_reveal(&mut self) -> Option<usize> {
        systems::reveal::dismiss(&mut self.world, &self.doors, &mut self.state)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn clock(&self) -> FrameClock {
        self.state.clock
    }

    pub fn gate(&self) -> MovementGate {
        self.state.gate
    }

    pub fn config(&self) -> &CorridorConfig {
        &self.config
    }

    pub fn input(&self) -> &InputSampler {
        &self.input
    }

    /// Current player pose. `None` before the session starts.
    pub fn pose(&self) -> Option<PlayerPose> {
        let player = self.player?;
        self.world.get::<&PlayerPose>(player).ok().map(|pose| *pose)
    }

    /// Door entities in scan order.
    pub fn doors(&self) -> &[Entity] {
        &self.doors
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Move the player directly (for tests that skip the walk).
    #[cfg(test)]
    pub fn place_player(&mut self, pose: PlayerPose) {
        if let Some(player) = self.player {
            if let Ok(current) = self.world.query_one_mut::<&mut PlayerPose>(player) {
                *current = pose;
            }
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PointerDown => self.input.pointer_down(),
            PlayerCommand::PointerMove { client_x, client_y } => {
                self.input.pointer_move(client_x, client_y);
            }
            PlayerCommand::PointerUp => self.input.pointer_up(),
            PlayerCommand::SetControlSurface { surface } => self.input.set_surface(surface),
            PlayerCommand::DismissReveal => {
                self.dismiss_reveal();
            }
            PlayerCommand::StartSession => {
                if self.state.phase == GamePhase::Loading {
                    let (player, doors) = world_setup::setup_session(&mut self.world, &self.config);
                    self.player = Some(player);
                    self.doors = doors;
                    self.state = GameState {
                        phase: GamePhase::Exploring,
                        ..Default::default()
                    };
                    info!(
                        "session started: {} doors over {} units",
                        self.doors.len(),
                        self.config.corridor_length
                    );
                } else {
                    debug!("start ignored in phase {:?}", self.state.phase);
                }
            }
            PlayerCommand::Pause => {
                if self.state.phase == GamePhase::Exploring {
                    self.state.phase = GamePhase::Paused;
                } else {
                    debug!("pause ignored in phase {:?}", self.state.phase);
                }
            }
            PlayerCommand::Resume => {
                if self.state.phase == GamePhase::Paused {
                    self.state.phase = GamePhase::Exploring;
                } else {
                    debug!("resume ignored in phase {:?}", self.state.phase);
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let Some(player) = self.player else {
            return;
        };

        // 1. Timed dismissal (no-op under the button policy)
        systems::reveal::run(
            &mut self.world,
            &self.doors,
            &mut self.state,
            self.config.dismiss_policy,
        );
        // 2. Motion
        let input = self.input.sample();
        let Some(pose) =
            systems::motion::run(&mut self.world, player, input, self.state.gate, &self.config)
        else {
            return;
        };
        // 3. Door proximity; nothing new can come into range while gated
        if !self.state.gate.is_engaged() && !self.state.is_won() {
            systems::door_trigger::check_and_trigger(
                &mut self.world,
                &self.doors,
                &pose,
                &mut self.state,
                &self.config,
            );
        }
    }
}
