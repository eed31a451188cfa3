//! Default tuning values for the corridor walk.
//!
//! These are the values `CorridorConfig::default()` is built from. Systems read
//! the config, never these constants directly.

/// Driver frame rate (Hz). Speeds below are expressed per frame.
pub const FRAME_RATE: u32 = 60;

// --- Corridor geometry ---

/// Full corridor width (units). The player walks between x = -5 and x = 5.
pub const CORRIDOR_WIDTH: f64 = 10.0;

/// Corridor length (units). The entrance is at z = 0, the end wall at z = -100.
pub const CORRIDOR_LENGTH: f64 = 100.0;

/// Distance kept between the player and the end wall (units).
pub const DEPTH_MARGIN: f64 = 2.0;

// --- Player ---

/// Approximate player radius used for wall clamping (units).
pub const PLAYER_RADIUS: f64 = 0.5;

/// Camera height above the floor (units).
pub const EYE_HEIGHT: f64 = 1.6;

/// Forward speed at full thrust (units per frame).
pub const MOVE_SPEED: f64 = 0.1;

/// Turn rate at full deflection (radians per frame).
pub const ROTATION_SPEED: f64 = 0.02;

// --- Doors ---

/// Number of doors along the corridor. The last one is terminal.
pub const DOOR_COUNT: usize = 6;

/// Distance between consecutive doors (units).
pub const DOOR_SPACING: f64 = 10.0;

/// Depth of the first door from the entrance (units).
pub const FIRST_DOOR_OFFSET: f64 = 5.0;

/// Height of a door's center above the floor (units).
pub const DOOR_HEIGHT: f64 = 1.5;

/// Player-to-door distance below which a closed door opens (units).
pub const PROXIMITY_THRESHOLD: f64 = 2.0;

/// Yaw applied to a door's mesh when it swings open (radians).
pub const DOOR_OPEN_ANGLE: f64 = std::f64::consts::FRAC_PI_2;

/// Frames a reveal stays up under the timed dismissal policy (3 s at 60 Hz).
pub const AUTO_DISMISS_FRAMES: u32 = 180;

// --- Joystick ---

/// Default on-screen joystick size (pixels, square).
pub const JOYSTICK_SIZE: f64 = 120.0;

/// Default joystick inset from the screen's top-left corner (pixels).
pub const JOYSTICK_INSET: f64 = 20.0;
