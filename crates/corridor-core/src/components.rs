//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// Marks the entity carrying the player's `PlayerPose`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// A door placed along the corridor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Door {
    /// Position in the fixed door order, 0 nearest the entrance.
    pub index: usize,
    /// Set once when the player comes within range. Never cleared.
    pub is_open: bool,
    /// Cleared once the door's reveal is dismissed. Never set again.
    pub is_visible: bool,
    /// Opening this door wins the session instead of showing a reveal.
    pub is_terminal: bool,
    /// Reveal content reference handed to the UI (an image path).
    pub payload: String,
}

/// Yaw of the door mesh for the renderer (radians). Zero while closed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DoorRotation {
    pub yaw: f64,
}
