//! Corridor walk driver.
//!
//! Runs the simulation on a game loop thread, feeds it player commands through
//! a channel and publishes snapshots for a renderer or observer.

pub mod autopilot;
pub mod error;
pub mod game_loop;
pub mod state;

pub use corridor_core as core;
