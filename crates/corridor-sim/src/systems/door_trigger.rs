//! Door proximity and the open transition.
//!
//! Doors are scanned in ascending index order and the first eligible one within
//! range opens. At most one door opens per call.

use hecs::{Entity, World};
use log::{debug, info};

use corridor_core::components::{Door, DoorRotation};
use corridor_core::config::CorridorConfig;
use corridor_core::enums::{DoorPhase, GamePhase};
use corridor_core::events::GameEvent;
use corridor_core::state::RevealView;
use corridor_core::types::{PlayerPose, Position};

use crate::game_state::GameState;

/// Open the nearest-indexed eligible door within range of `pose`.
///
/// Returns the index of the door that opened, if any. Calling again without a
/// pose change opens nothing new: an open door is never eligible.
pub fn check_and_trigger(
    world: &mut World,
    doors: &[Entity],
    pose: &PlayerPose,
    state: &mut GameState,
    config: &CorridorConfig,
) -> Option<usize> {
    if state.is_won() {
        return None;
    }

    for &entity in doors {
        let Ok((door, position, rotation)) =
            world.query_one_mut::<(&mut Door, &Position, &mut DoorRotation)>(entity)
        else {
            continue;
        };

        if !door.is_visible || door.is_open {
            continue;
        }
        if pose.position.distance_to(position) >= config.proximity_threshold {
            continue;
        }

        door.is_open = true;
        rotation.yaw = config.door_open_angle;
        debug!("door {} opened", door.index);
        state.events.push(GameEvent::DoorOpened {
            door_index: door.index,
            rotation: rotation.yaw,
        });

        if door.is_terminal {
            declare_win(state, door);
        } else {
            show_reveal(state, door);
        }
        return Some(door.index);
    }

    None
}

/// Current lifecycle phase of a door.
pub fn door_phase(door: &Door) -> DoorPhase {
    match (door.is_open, door.is_visible, door.is_terminal) {
        (false, _, _) => DoorPhase::Closed,
        (true, false, _) => DoorPhase::Hidden,
        (true, true, true) => DoorPhase::WinDeclared,
        (true, true, false) => DoorPhase::RevealShown,
    }
}

fn show_reveal(state: &mut GameState, door: &Door) {
    info!("showing reveal for door {}", door.index);
    state.gate.engage();
    state.active_reveal = Some(RevealView {
        door_index: door.index,
        payload: door.payload.clone(),
        shown_at_frame: state.clock.frame,
    });
    state.events.push(GameEvent::ShowReveal {
        door_index: door.index,
        payload: door.payload.clone(),
    });
}

fn declare_win(state: &mut GameState, door: &Door) {
    info!("terminal door {} opened, session won", door.index);
    state.phase = GamePhase::Won;
    state.events.push(GameEvent::Win {
        door_index: door.index,
        payload: door.payload.clone(),
    });
}
