//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::types::ControlSurface;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Joystick ---
    /// Pointer or touch pressed on the joystick knob.
    PointerDown,
    /// Pointer or touch moved anywhere on screen. Coordinates are absent when
    /// the device could not resolve them.
    PointerMove {
        client_x: Option<f64>,
        client_y: Option<f64>,
    },
    /// Pointer or touch released.
    PointerUp,
    /// The joystick's screen rectangle changed (window resize).
    SetControlSurface { surface: ControlSurface },

    // --- Reveal ---
    /// Close the reveal currently on screen.
    DismissReveal,

    // --- Session control ---
    /// Leave the loading screen and start walking.
    StartSession,
    /// Suspend frame updates.
    Pause,
    /// Resume frame updates.
    Resume,
}
