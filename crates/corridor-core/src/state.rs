//! Game state snapshot: the complete visible state handed to the renderer each frame.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{FrameClock, InputVector, Position};

/// Complete game state produced after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub clock: FrameClock,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub doors: Vec<DoorView>,
    /// True while a reveal is on screen and the player cannot move.
    pub movement_gated: bool,
    pub active_reveal: Option<RevealView>,
    pub joystick: JoystickView,
    /// Events emitted since the previous snapshot, in emission order.
    pub events: Vec<GameEvent>,
}

/// Player pose for positioning the camera.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    /// Heading in radians; also the camera's yaw.
    pub heading: f64,
}

/// One door as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorView {
    pub index: usize,
    pub position: Position,
    pub is_open: bool,
    pub is_visible: bool,
    pub is_terminal: bool,
    pub phase: DoorPhase,
    /// Mesh yaw in radians.
    pub rotation: f64,
    pub payload: String,
}

/// The reveal currently on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealView {
    pub door_index: usize,
    pub payload: String,
    /// Frame at which the reveal was shown.
    pub shown_at_frame: u64,
}

/// Joystick state for drawing the knob.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct JoystickView {
    pub active: bool,
    /// Knob offset from the control's center (pixels).
    pub knob_x: f64,
    pub knob_y: f64,
    pub input: InputVector,
}
