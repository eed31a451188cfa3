//! Systems that operate on the corridor world each frame.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only)
//! plus the explicit `GameState`. They do not own state.

pub mod door_trigger;
pub mod motion;
pub mod reveal;
pub mod snapshot;
