//! Game loop thread: runs the engine at the configured frame rate and publishes snapshots.
//!
//! The engine lives entirely on this thread; callers only see commands and snapshots.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state for
//! polling and optionally forwarded to an observer channel.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use corridor_core::events::GameEvent;
use corridor_core::state::GameStateSnapshot;
use corridor_sim::engine::{CorridorEngine, SimConfig};

use crate::error::AppError;
use crate::state::{AppState, GameLoopCommand};

/// Nominal duration of one frame at `frame_rate` Hz.
pub fn frame_duration(frame_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(frame_rate.max(1)))
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    observer: Option<mpsc::Sender<GameStateSnapshot>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("corridor-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, observer);
        })?;

    Ok((cmd_tx, handle))
}

/// Start the game loop and register it in `state`.
pub fn start(
    state: &AppState,
    config: SimConfig,
    observer: Option<mpsc::Sender<GameStateSnapshot>>,
) -> Result<JoinHandle<()>, AppError> {
    let mut running = state.running.lock().map_err(|_| AppError::LockPoisoned)?;
    if *running {
        return Err(AppError::AlreadyRunning);
    }

    config.corridor.validate()?;
    let (cmd_tx, handle) = spawn_game_loop(config, state.latest_snapshot.clone(), observer)?;

    let mut tx_lock = state.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    Ok(handle)
}

/// Ask the game loop to stop and forget its sender.
pub fn shutdown(state: &AppState) -> Result<(), AppError> {
    let mut running = state.running.lock().map_err(|_| AppError::LockPoisoned)?;
    let mut tx_lock = state.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;
    if let Some(tx) = tx_lock.take() {
        // A loop that already exited has dropped its receiver; nothing to stop.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    *running = false;
    Ok(())
}

/// Wait up to `timeout` for the next observed snapshot.
pub fn next_snapshot(
    observer: &mpsc::Receiver<GameStateSnapshot>,
    timeout: Duration,
) -> Result<GameStateSnapshot, AppError> {
    observer.recv_timeout(timeout).map_err(|e| match e {
        mpsc::RecvTimeoutError::Timeout => AppError::Stalled(timeout),
        mpsc::RecvTimeoutError::Disconnected => AppError::ChannelClosed,
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    mut observer: Option<mpsc::Sender<GameStateSnapshot>>,
) {
    let frame = frame_duration(config.corridor.frame_rate);
    let mut engine = CorridorEngine::new(config);
    let mut next_frame_time = Instant::now();
    info!("game loop running at {:?} per frame", frame);

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    info!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("command channel disconnected");
                    return;
                }
            }
        }

        // 2. Advance one frame (engine handles pause semantics internally)
        let snapshot = engine.tick();
        log_events(&snapshot.events);

        // 3. Forward to the observer; drop it once it hangs up
        if let Some(tx) = &observer {
            if tx.send(snapshot.clone()).is_err() {
                debug!("snapshot observer disconnected");
                observer = None;
            }
        }

        // 4. Store latest snapshot for polling
        match latest_snapshot.lock() {
            Ok(mut lock) => *lock = Some(snapshot),
            Err(_) => warn!("snapshot lock poisoned; frame {} not published", snapshot.clock.frame),
        }

        // 5. Sleep until the next frame
        next_frame_time += frame;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_frame_time = now;
        }
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::ShowReveal { door_index, payload } => {
                info!("reveal {door_index}: {payload}");
            }
            GameEvent::Win { payload, .. } => info!("win: {payload}"),
            other => debug!("{other:?}"),
        }
    }
}
