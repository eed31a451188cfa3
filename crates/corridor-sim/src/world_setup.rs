//! Entity spawn factories for setting up the corridor.
//!
//! Creates the player and the door entities with their component bundles.

use hecs::{Entity, World};

use corridor_core::components::*;
use corridor_core::config::CorridorConfig;
use corridor_core::types::PlayerPose;

/// Spawn the player at the corridor entrance, facing down the corridor.
pub fn spawn_player(world: &mut World, config: &CorridorConfig) -> Entity {
    world.spawn((Player, PlayerPose::new(config.entrance(), 0.0)))
}

/// Spawn every door and return their entities in ascending index order.
///
/// The returned order is the scan order used by the trigger system.
pub fn spawn_doors(world: &mut World, config: &CorridorConfig) -> Vec<Entity> {
    let terminal = config.terminal_door();
    (0..config.door_count)
        .map(|index| {
            world.spawn((
                Door {
                    index,
                    is_open: false,
                    is_visible: true,
                    is_terminal: index == terminal,
                    payload: config.door_payload(index),
                },
                config.door_position(index),
                DoorRotation::default(),
            ))
        })
        .collect()
}

/// Build the whole session world. Returns the player and the ordered doors.
pub fn setup_session(world: &mut World, config: &CorridorConfig) -> (Entity, Vec<Entity>) {
    world.clear();
    let player = spawn_player(world, config);
    let doors = spawn_doors(world, config);
    (player, doors)
}
