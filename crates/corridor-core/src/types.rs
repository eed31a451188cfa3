//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// 3D position in world space (units, right-handed).
/// x = lateral (across the corridor), y = up, z = depth (negative down the corridor).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.to_dvec3().distance(other.to_dvec3())
    }

    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    pub fn from_dvec3(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Player position and heading. Heading is a yaw in radians; 0 faces down the
/// corridor (towards -z) and positive values turn left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerPose {
    pub position: Position,
    pub heading: f64,
}

impl PlayerPose {
    pub fn new(position: Position, heading: f64) -> Self {
        Self { position, heading }
    }
}

/// Normalized stick deflection for one frame.
/// `turn` > 0 steers right, `thrust` > 0 walks forward. Both lie in [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputVector {
    pub turn: f64,
    pub thrust: f64,
}

impl InputVector {
    pub const ZERO: InputVector = InputVector {
        turn: 0.0,
        thrust: 0.0,
    };

    pub fn new(turn: f64, thrust: f64) -> Self {
        Self { turn, thrust }
    }

    pub fn is_zero(&self) -> bool {
        self.turn == 0.0 && self.thrust == 0.0
    }
}

/// Screen-space rectangle of the on-screen joystick (pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlSurface {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ControlSurface {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Center of the control in screen coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Maximum knob travel; half the control's width.
    pub fn radius(&self) -> f64 {
        self.width / 2.0
    }
}

/// Frame counter for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameClock {
    /// Frames advanced while exploring.
    pub frame: u64,
}

impl FrameClock {
    pub fn advance(&mut self) {
        self.frame += 1;
    }

    /// Frames elapsed since `start`, saturating at zero.
    pub fn since(&self, start: u64) -> u64 {
        self.frame.saturating_sub(start)
    }
}
