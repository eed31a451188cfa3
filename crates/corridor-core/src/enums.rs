//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::AUTO_DISMISS_FRAMES;

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the session starts (the loading screen is up).
    #[default]
    Loading,
    /// Player is walking the corridor.
    Exploring,
    /// Frame updates suspended by the driver.
    Paused,
    /// Terminal door opened. Absorbing.
    Won,
}

/// Lifecycle of a single door, derived from its open/visible flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoorPhase {
    /// Closed and visible; eligible to trigger.
    #[default]
    Closed,
    /// Opened, reveal on screen, movement gated.
    RevealShown,
    /// Reveal dismissed, door removed from view.
    Hidden,
    /// Terminal door opened; the session is won.
    WinDeclared,
}

/// How a shown reveal gets dismissed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DismissPolicy {
    /// Only an explicit `DismissReveal` command closes the reveal.
    #[default]
    Button,
    /// The reveal also closes itself after the given number of frames.
    AfterFrames { frames: u32 },
}

impl DismissPolicy {
    /// The conventional timed policy: three seconds at 60 Hz.
    pub fn timed() -> Self {
        Self::AfterFrames {
            frames: AUTO_DISMISS_FRAMES,
        }
    }
}
