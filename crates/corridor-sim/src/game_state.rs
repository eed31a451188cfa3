//! Session-wide mutable state shared by the systems.
//!
//! Everything the systems coordinate through lives in `GameState`, passed by
//! reference into each system call. There are no globals.

use serde::{Deserialize, Serialize};

use corridor_core::enums::GamePhase;
use corridor_core::events::GameEvent;
use corridor_core::state::RevealView;
use corridor_core::types::FrameClock;

/// Blocks player motion while a reveal is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementGate {
    engaged: bool,
}

impl MovementGate {
    pub fn engage(&mut self) {
        self.engaged = true;
    }

    pub fn release(&mut self) {
        self.engaged = false;
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

/// State that persists across frames and is not owned by any entity.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub clock: FrameClock,
    pub phase: GamePhase,
    pub gate: MovementGate,
    /// At most one reveal is on screen at a time.
    pub active_reveal: Option<RevealView>,
    /// Events emitted since the last snapshot.
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Drain pending events for the next snapshot.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
