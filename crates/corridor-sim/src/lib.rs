//! Corridor simulation engine.
//!
//! Owns the hecs world, samples the virtual joystick, moves the player,
//! opens doors by proximity and produces GameStateSnapshots for the renderer.

pub mod engine;
pub mod game_state;
pub mod input;
pub mod systems;
pub mod world_setup;

pub use corridor_core as core;
pub use engine::{CorridorEngine, SimConfig};
