//! Snapshot system: queries the world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::{Entity, World};

use corridor_core::components::{Door, DoorRotation};
use corridor_core::events::GameEvent;
use corridor_core::state::*;
use corridor_core::types::{PlayerPose, Position};

use crate::game_state::GameState;
use crate::input::InputSampler;
use crate::systems::door_trigger::door_phase;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    player: Option<Entity>,
    doors: &[Entity],
    state: &GameState,
    input: &InputSampler,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        clock: state.clock,
        phase: state.phase,
        player: build_player(world, player),
        doors: build_doors(world, doors),
        movement_gated: state.gate.is_engaged(),
        active_reveal: state.active_reveal.clone(),
        joystick: build_joystick(input),
        events,
    }
}

fn build_player(world: &World, player: Option<Entity>) -> PlayerView {
    player
        .and_then(|entity| world.get::<&PlayerPose>(entity).ok().map(|pose| *pose))
        .map(|pose| PlayerView {
            position: pose.position,
            heading: pose.heading,
        })
        .unwrap_or_default()
}

/// Door views in scan order.
fn build_doors(world: &World, doors: &[Entity]) -> Vec<DoorView> {
    doors
        .iter()
        .filter_map(|&entity| {
            let mut query = world.query_one::<(&Door, &Position, &DoorRotation)>(entity).ok()?;
            let (door, position, rotation) = query.get()?;
            Some(DoorView {
                index: door.index,
                position: *position,
                is_open: door.is_open,
                is_visible: door.is_visible,
                is_terminal: door.is_terminal,
                phase: door_phase(door),
                rotation: rotation.yaw,
                payload: door.payload.clone(),
            })
        })
        .collect()
}

fn build_joystick(input: &InputSampler) -> JoystickView {
    let (knob_x, knob_y) = input.knob_offset();
    JoystickView {
        active: input.is_active(),
        knob_x,
        knob_y,
        input: input.sample(),
    }
}
