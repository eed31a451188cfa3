//! Scripted walk: drives the joystick like a player would.
//!
//! Pushes the stick straight up, waits a little on each reveal before closing
//! it, and lets go once the session is won.

use corridor_core::commands::PlayerCommand;
use corridor_core::enums::GamePhase;
use corridor_core::state::GameStateSnapshot;
use corridor_core::types::ControlSurface;

/// Turns snapshots into the commands a player would send next.
#[derive(Debug, Clone)]
pub struct Autopilot {
    surface: ControlSurface,
    /// Frames to look at each reveal before dismissing it.
    linger_frames: u64,
    started: bool,
    released: bool,
    /// Door whose reveal has already been asked to close.
    dismissed: Option<usize>,
}

impl Autopilot {
    pub fn new(surface: ControlSurface, linger_frames: u64) -> Self {
        Self {
            surface,
            linger_frames,
            started: false,
            released: false,
            dismissed: None,
        }
    }

    /// Commands to send after observing `snapshot`.
    pub fn next(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        if !self.started {
            self.started = true;
            let (center_x, _) = self.surface.center();
            return vec![
                PlayerCommand::StartSession,
                PlayerCommand::PointerDown,
                PlayerCommand::PointerMove {
                    client_x: Some(center_x),
                    client_y: Some(self.surface.top),
                },
            ];
        }

        if snapshot.phase == GamePhase::Won {
            if self.released {
                return Vec::new();
            }
            self.released = true;
            return vec![PlayerCommand::PointerUp];
        }

        match &snapshot.active_reveal {
            Some(reveal)
                if self.dismissed != Some(reveal.door_index)
                    && snapshot.clock.since(reveal.shown_at_frame) >= self.linger_frames =>
            {
                self.dismissed = Some(reveal.door_index);
                vec![PlayerCommand::DismissReveal]
            }
            _ => Vec::new(),
        }
    }

    /// True once the walk is over and the stick released.
    pub fn is_done(&self) -> bool {
        self.released
    }
}
