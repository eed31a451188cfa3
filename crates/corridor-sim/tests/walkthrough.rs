//! End-to-end walks down the corridor through the public engine API.

use corridor_sim::core::commands::PlayerCommand;
use corridor_sim::core::config::CorridorConfig;
use corridor_sim::core::enums::{DoorPhase, GamePhase};
use corridor_sim::core::events::GameEvent;
use corridor_sim::core::state::GameStateSnapshot;
use corridor_sim::{CorridorEngine, SimConfig};

/// Start a session and hold the stick fully forward.
fn walking_engine() -> CorridorEngine {
    let mut engine = CorridorEngine::new(SimConfig::default());
    engine.queue_commands([
        PlayerCommand::StartSession,
        PlayerCommand::PointerDown,
        // Top edge of the default joystick (center 80, 80; radius 60).
        PlayerCommand::PointerMove {
            client_x: Some(80.0),
            client_y: Some(20.0),
        },
    ]);
    engine
}

fn count_events(snapshots: &[GameStateSnapshot], pred: impl Fn(&GameEvent) -> bool) -> usize {
    snapshots
        .iter()
        .flat_map(|s| s.events.iter())
        .filter(|&e| pred(e))
        .count()
}

#[test]
fn test_first_door_opens_gates_and_releases() {
    let mut engine = walking_engine();
    let config = CorridorConfig::default();

    // Door 0 sits 5 units in; it comes into range after this many steps.
    let frames = ((5.0 - config.proximity_threshold) / config.move_speed).ceil() as usize + 1;
    let mut last = None;
    for _ in 0..frames {
        last = Some(engine.tick());
    }
    let snap = last.unwrap();

    assert!(snap.movement_gated);
    assert_eq!(snap.doors[0].phase, DoorPhase::RevealShown);
    assert!(snap.doors[1..].iter().all(|d| d.phase == DoorPhase::Closed));

    let gated_z = snap.player.position.z;
    assert_eq!(engine.dismiss_reveal(), Some(0));
    assert!(!engine.gate().is_engaged());

    let snap = engine.tick();
    assert!(snap.player.position.z < gated_z);
    assert_eq!(snap.doors[0].phase, DoorPhase::Hidden);
}

#[test]
fn test_gate_holds_pose_under_input() {
    let mut engine = walking_engine();
    while !engine.gate().is_engaged() {
        engine.tick();
    }
    let pose = engine.pose().unwrap();

    engine.queue_command(PlayerCommand::PointerMove {
        client_x: Some(140.0),
        client_y: Some(20.0),
    });
    for _ in 0..100 {
        let snap = engine.tick();
        assert!(snap.movement_gated);
        assert_eq!(engine.pose().unwrap(), pose);
    }
}

#[test]
fn test_full_walk_reveals_each_door_then_wins_once() {
    let mut engine = walking_engine();
    let mut snapshots = Vec::new();
    let mut won_at = None;

    for frame in 0..2_000 {
        let snap = engine.tick();
        if snap
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::ShowReveal { .. }))
        {
            engine.queue_command(PlayerCommand::DismissReveal);
        }
        if won_at.is_none() && snap.phase == GamePhase::Won {
            won_at = Some(frame);
        }
        if won_at.is_some() {
            assert!(!snap.movement_gated, "win must never gate movement");
        }
        snapshots.push(snap);
    }

    assert!(won_at.is_some(), "terminal door never opened");
    assert_eq!(
        count_events(&snapshots, |e| matches!(e, GameEvent::Win { .. })),
        1
    );
    assert_eq!(
        count_events(&snapshots, |e| matches!(e, GameEvent::ShowReveal { .. })),
        5
    );
    assert_eq!(
        count_events(&snapshots, |e| matches!(e, GameEvent::RevealDismissed { .. })),
        5
    );

    // Reveals opened in corridor order.
    let order: Vec<usize> = snapshots
        .iter()
        .flat_map(|s| s.events.iter())
        .filter_map(|e| match e {
            GameEvent::DoorOpened { door_index, .. } => Some(*door_index),
            _ => None,
        })
        .collect();
    assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);

    let last = snapshots.last().unwrap();
    assert!(last.doors[..5].iter().all(|d| d.phase == DoorPhase::Hidden));
    assert_eq!(last.doors[5].phase, DoorPhase::WinDeclared);
    assert!(last.doors.iter().all(|d| d.is_open));

    // The player kept walking to the far end and stopped at the margin.
    assert_eq!(last.player.position.z, -98.0);
}

#[test]
fn test_doors_never_close_and_hidden_doors_stay_hidden() {
    let mut engine = walking_engine();
    let mut seen_open = [false; 6];
    let mut seen_hidden = [false; 6];

    for _ in 0..1_500 {
        let snap = engine.tick();
        if snap.movement_gated {
            engine.queue_command(PlayerCommand::DismissReveal);
        }
        for door in &snap.doors {
            if seen_open[door.index] {
                assert!(door.is_open, "door {} closed again", door.index);
            }
            if seen_hidden[door.index] {
                assert!(!door.is_visible, "door {} reappeared", door.index);
            }
            seen_open[door.index] |= door.is_open;
            seen_hidden[door.index] |= !door.is_visible;
        }
        let opened_this_frame = snap
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::DoorOpened { .. }))
            .count();
        assert!(opened_this_frame <= 1);
    }
}

#[test]
fn test_zigzag_walk_stays_inside_corridor() {
    let config = CorridorConfig::default();
    let mut engine = walking_engine();

    for frame in 0..3_000u32 {
        // Sweep the stick across its whole circle.
        let angle = frame as f64 * 0.05;
        engine.queue_command(PlayerCommand::PointerMove {
            client_x: Some(80.0 + 90.0 * angle.cos()),
            client_y: Some(80.0 + 90.0 * angle.sin()),
        });
        let snap = engine.tick();
        if snap.movement_gated {
            engine.queue_command(PlayerCommand::DismissReveal);
        }
        let p = snap.player.position;
        assert!(p.x.abs() <= config.max_lateral(), "x out of bounds: {}", p.x);
        assert!(p.z <= 0.0 && p.z >= config.min_depth(), "z out of bounds: {}", p.z);
    }
}
