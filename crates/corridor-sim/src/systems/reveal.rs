//! Reveal dismissal: hides the revealed door and releases the movement gate.

use hecs::{Entity, World};
use log::{debug, info};

use corridor_core::components::Door;
use corridor_core::enums::DismissPolicy;
use corridor_core::events::GameEvent;

use crate::game_state::GameState;

/// Close the reveal on screen.
///
/// Returns the index of the door whose reveal closed. With no reveal on screen
/// this does nothing.
pub fn dismiss(world: &mut World, doors: &[Entity], state: &mut GameState) -> Option<usize> {
    let Some(reveal) = state.active_reveal.take() else {
        debug!("dismiss ignored: no reveal on screen");
        return None;
    };

    if let Some(&entity) = doors.get(reveal.door_index) {
        if let Ok(door) = world.query_one_mut::<&mut Door>(entity) {
            door.is_visible = false;
        }
    }

    state.gate.release();
    state.events.push(GameEvent::RevealDismissed {
        door_index: reveal.door_index,
    });
    info!("reveal for door {} dismissed", reveal.door_index);
    Some(reveal.door_index)
}

/// Apply the timed dismissal policy, if configured.
pub fn run(
    world: &mut World,
    doors: &[Entity],
    state: &mut GameState,
    policy: DismissPolicy,
) -> Option<usize> {
    let DismissPolicy::AfterFrames { frames } = policy else {
        return None;
    };
    let shown_at = state.active_reveal.as_ref()?.shown_at_frame;
    if state.clock.since(shown_at) < u64::from(frames) {
        return None;
    }
    dismiss(world, doors, state)
}
