//! Events emitted by the simulation for the UI and celebration collaborators.
//!
//! Events are fire-and-forget: the simulation never waits on their handling.

use serde::{Deserialize, Serialize};

/// Something the reveal UI or renderer should react to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A door swung open; `rotation` is the new mesh yaw.
    DoorOpened { door_index: usize, rotation: f64 },
    /// Show the door's reveal. Movement stays gated until it is dismissed.
    ShowReveal { door_index: usize, payload: String },
    /// The reveal for this door was closed and the door removed from view.
    RevealDismissed { door_index: usize },
    /// The terminal door opened. Emitted once per session.
    Win { door_index: usize, payload: String },
}
