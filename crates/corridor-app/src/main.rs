use std::sync::mpsc;
use std::time::Duration;

use log::info;

use corridor_app::autopilot::Autopilot;
use corridor_app::error::AppError;
use corridor_app::game_loop;
use corridor_app::state::AppState;
use corridor_core::config::CorridorConfig;
use corridor_sim::engine::SimConfig;

/// Frames the autopilot spends on each reveal (one second at 60 Hz).
const REVEAL_LINGER_FRAMES: u64 = 60;

/// Longest the driver waits for a frame before giving up.
const STALL_TIMEOUT: Duration = Duration::from_secs(5);

fn main() {
    // info+ unless RUST_LOG overrides
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Walk the corridor headlessly: `corridor [config.json]`.
fn run() -> Result<(), AppError> {
    let corridor = match std::env::args().nth(1) {
        Some(path) => {
            info!("loading config from {path}");
            CorridorConfig::load(&path)?
        }
        None => CorridorConfig::default(),
    };
    let config = SimConfig {
        corridor,
        ..Default::default()
    };

    let state = AppState::new();
    let mut pilot = Autopilot::new(config.control_surface, REVEAL_LINGER_FRAMES);
    let (snapshot_tx, snapshot_rx) = mpsc::channel();
    let handle = game_loop::start(&state, config, Some(snapshot_tx))?;

    let result = loop {
        let snapshot = match game_loop::next_snapshot(&snapshot_rx, STALL_TIMEOUT) {
            Ok(snapshot) => snapshot,
            Err(e) => break Err(e),
        };
        let sent = pilot
            .next(&snapshot)
            .into_iter()
            .try_for_each(|command| state.send_command(command));
        if let Err(e) = sent {
            break Err(e);
        }
        if pilot.is_done() {
            info!("corridor complete after {} frames", snapshot.clock.frame);
            break Ok(());
        }
    };

    game_loop::shutdown(&state)?;
    if handle.join().is_err() {
        log::error!("game loop thread panicked");
    }
    result
}
