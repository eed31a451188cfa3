//! Application state shared between the input side and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex, MutexGuard};

use corridor_core::commands::PlayerCommand;
use corridor_core::state::GameStateSnapshot;

use crate::error::AppError;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` so input callbacks on any thread can send
/// - the latest snapshot is `Arc<Mutex<...>>`, shared with the game loop thread
pub struct AppState {
    /// Channel sender to the game loop. `None` until the loop is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop after each frame.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a player command to the game loop.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), AppError> {
        let tx = lock(&self.command_tx)?;
        match tx.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::Player(command))
                .map_err(|_| AppError::ChannelClosed),
            None => Err(AppError::NotRunning),
        }
    }

    /// Latest snapshot, if the loop has produced one.
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>, AppError> {
        Ok(lock(&self.latest_snapshot)?.clone())
    }

    pub fn is_running(&self) -> bool {
        lock(&self.running).map(|r| *r).unwrap_or(false)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, AppError> {
    mutex.lock().map_err(|_| AppError::LockPoisoned)
}
