//! Session configuration.
//!
//! Every tuning value the simulation reads lives here. `Default` reproduces the
//! reference corridor; a JSON file may override any subset of fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::DismissPolicy;
use crate::error::ConfigError;
use crate::types::Position;

/// Corridor, player and door parameters. Fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorridorConfig {
    pub corridor_width: f64,
    pub corridor_length: f64,
    /// Gap kept between the player and the end wall.
    pub depth_margin: f64,
    pub door_count: usize,
    pub door_spacing: f64,
    pub first_door_offset: f64,
    pub door_height: f64,
    pub door_open_angle: f64,
    pub proximity_threshold: f64,
    pub move_speed: f64,
    pub rotation_speed: f64,
    pub player_radius: f64,
    pub eye_height: f64,
    /// Explicit reveal payloads, one per door. Generated when absent.
    pub door_payloads: Option<Vec<String>>,
    pub dismiss_policy: DismissPolicy,
    pub frame_rate: u32,
}

impl Default for CorridorConfig {
    fn default() -> Self {
        Self {
            corridor_width: CORRIDOR_WIDTH,
            corridor_length: CORRIDOR_LENGTH,
            depth_margin: DEPTH_MARGIN,
            door_count: DOOR_COUNT,
            door_spacing: DOOR_SPACING,
            first_door_offset: FIRST_DOOR_OFFSET,
            door_height: DOOR_HEIGHT,
            door_open_angle: DOOR_OPEN_ANGLE,
            proximity_threshold: PROXIMITY_THRESHOLD,
            move_speed: MOVE_SPEED,
            rotation_speed: ROTATION_SPEED,
            player_radius: PLAYER_RADIUS,
            eye_height: EYE_HEIGHT,
            door_payloads: None,
            dismiss_policy: DismissPolicy::Button,
            frame_rate: FRAME_RATE,
        }
    }
}

impl CorridorConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate a JSON config string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CorridorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values describe a walkable corridor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("corridor_width", self.corridor_width),
            ("corridor_length", self.corridor_length),
            ("door_spacing", self.door_spacing),
            ("proximity_threshold", self.proximity_threshold),
            ("move_speed", self.move_speed),
            ("rotation_speed", self.rotation_speed),
            ("player_radius", self.player_radius),
            ("frame_rate", f64::from(self.frame_rate)),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("depth_margin", self.depth_margin),
            ("first_door_offset", self.first_door_offset),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        let finite = [
            ("eye_height", self.eye_height),
            ("door_height", self.door_height),
            ("door_open_angle", self.door_open_angle),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        // Height difference alone must stay inside the trigger radius.
        let gap = (self.eye_height - self.door_height).abs();
        if gap >= self.proximity_threshold {
            return Err(ConfigError::DoorsOutOfEyeLevel {
                gap,
                threshold: self.proximity_threshold,
            });
        }

        let diameter = self.player_radius * 2.0;
        if diameter >= self.corridor_width {
            return Err(ConfigError::PlayerTooWide {
                diameter,
                width: self.corridor_width,
            });
        }

        if self.door_count == 0 {
            return Err(ConfigError::NoDoors);
        }

        let reachable = self.min_depth();
        let last = self.door_count - 1;
        let depth = self.door_position(last).z;
        if depth < reachable {
            return Err(ConfigError::DoorOutOfReach {
                index: last,
                depth,
                reachable,
            });
        }

        if let Some(payloads) = &self.door_payloads {
            if payloads.len() != self.door_count {
                return Err(ConfigError::PayloadCountMismatch {
                    expected: self.door_count,
                    got: payloads.len(),
                });
            }
        }

        if self.dismiss_policy == (DismissPolicy::AfterFrames { frames: 0 }) {
            return Err(ConfigError::ZeroDismissDelay);
        }

        Ok(())
    }

    /// Largest lateral offset the player may reach.
    pub fn max_lateral(&self) -> f64 {
        self.corridor_width / 2.0 - self.player_radius
    }

    /// Deepest z the player may reach (negative).
    pub fn min_depth(&self) -> f64 {
        -self.corridor_length + self.depth_margin
    }

    /// Where the player stands when the session starts.
    pub fn entrance(&self) -> Position {
        Position::new(0.0, self.eye_height, 0.0)
    }

    /// Center of door `index`. Doors run down the corridor's center line.
    pub fn door_position(&self, index: usize) -> Position {
        let depth = self.first_door_offset + index as f64 * self.door_spacing;
        Position::new(0.0, self.door_height, -depth)
    }

    /// Reveal payload for door `index`.
    pub fn door_payload(&self, index: usize) -> String {
        self.door_payloads
            .as_ref()
            .and_then(|payloads| payloads.get(index).cloned())
            .unwrap_or_else(|| format!("assets/door{}.jpg", index + 1))
    }

    /// Index of the door that ends the session.
    pub fn terminal_door(&self) -> usize {
        self.door_count.saturating_sub(1)
    }
}
