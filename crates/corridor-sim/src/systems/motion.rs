//! Player motion: heading and position from stick input, clamped to the corridor.

use glam::DVec3;
use hecs::{Entity, World};

use corridor_core::config::CorridorConfig;
use corridor_core::types::{InputVector, PlayerPose, Position};

use crate::game_state::MovementGate;

/// Advance one frame of motion.
///
/// While the gate is engaged the pose is returned untouched: no turn, no step,
/// no clamping.
pub fn advance(
    pose: PlayerPose,
    input: InputVector,
    gate: MovementGate,
    config: &CorridorConfig,
) -> PlayerPose {
    if gate.is_engaged() {
        return pose;
    }

    let input = sanitize(input);
    let heading = pose.heading - input.turn * config.rotation_speed;

    // Heading 0 looks down the corridor (-z); the camera yaws by `heading`.
    let forward = -DVec3::new(heading.sin(), 0.0, heading.cos());
    let moved = pose.position.to_dvec3() + forward * (input.thrust * config.move_speed);

    PlayerPose::new(clamp_to_corridor(Position::from_dvec3(moved), config), heading)
}

/// Keep a position inside the walkable part of the corridor.
pub fn clamp_to_corridor(position: Position, config: &CorridorConfig) -> Position {
    let max_lateral = config.max_lateral();
    Position::new(
        position.x.max(-max_lateral).min(max_lateral),
        position.y,
        position.z.max(config.min_depth()).min(0.0),
    )
}

/// Update the player entity in place and return the new pose.
pub fn run(
    world: &mut World,
    player: Entity,
    input: InputVector,
    gate: MovementGate,
    config: &CorridorConfig,
) -> Option<PlayerPose> {
    let pose = world.query_one_mut::<&mut PlayerPose>(player).ok()?;
    *pose = advance(*pose, input, gate, config);
    Some(*pose)
}

/// Non-finite components become zero; the rest are limited to [-1, 1].
fn sanitize(input: InputVector) -> InputVector {
    let axis = |v: f64| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
    InputVector::new(axis(input.turn), axis(input.thrust))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> PlayerPose {
        PlayerPose::new(Position::new(0.0, 1.6, 0.0), 0.0)
    }

    #[test]
    fn test_forward_thrust_walks_down_corridor() {
        let config = CorridorConfig::default();
        let pose = advance(
            start(),
            InputVector::new(0.0, 1.0),
            MovementGate::default(),
            &config,
        );
        assert!((pose.position.z + 0.1).abs() < 1e-12);
        assert_eq!(pose.position.x, 0.0);
        assert_eq!(pose.position.y, 1.6);
    }

    #[test]
    fn test_backward_thrust_stops_at_entrance() {
        let config = CorridorConfig::default();
        let pose = advance(
            start(),
            InputVector::new(0.0, -1.0),
            MovementGate::default(),
            &config,
        );
        assert_eq!(pose.position.z, 0.0);
    }

    #[test]
    fn test_turn_right_decreases_heading() {
        let config = CorridorConfig::default();
        let pose = advance(
            start(),
            InputVector::new(1.0, 0.0),
            MovementGate::default(),
            &config,
        );
        assert!((pose.heading + 0.02).abs() < 1e-12);
        assert_eq!(pose.position, start().position);
    }

    #[test]
    fn test_heading_steers_step() {
        let config = CorridorConfig::default();
        // Facing fully right (-pi/2): forward is +x.
        let facing_right = PlayerPose::new(
            Position::new(0.0, 1.6, -10.0),
            -std::f64::consts::FRAC_PI_2,
        );
        let pose = advance(
            facing_right,
            InputVector::new(0.0, 1.0),
            MovementGate::default(),
            &config,
        );
        assert!((pose.position.x - 0.1).abs() < 1e-12);
        assert!((pose.position.z + 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_gate_freezes_pose() {
        let config = CorridorConfig::default();
        let mut gate = MovementGate::default();
        gate.engage();
        let pose = advance(start(), InputVector::new(1.0, 1.0), gate, &config);
        assert_eq!(pose, start());
    }

    #[test]
    fn test_clamp_to_walls_and_end() {
        let config = CorridorConfig::default();
        let clamped = clamp_to_corridor(Position::new(7.0, 1.6, -150.0), &config);
        assert_eq!(clamped, Position::new(4.5, 1.6, -98.0));
        let clamped = clamp_to_corridor(Position::new(-7.0, 1.6, 3.0), &config);
        assert_eq!(clamped, Position::new(-4.5, 1.6, 0.0));
    }

    #[test]
    fn test_bounds_hold_under_long_random_walk() {
        let config = CorridorConfig::default();
        let mut pose = start();
        // Deterministic sweep of turn/thrust combinations.
        for frame in 0..20_000u32 {
            let turn = ((frame as f64) * 0.37).sin();
            let thrust = ((frame as f64) * 0.011).cos();
            pose = advance(
                pose,
                InputVector::new(turn, thrust),
                MovementGate::default(),
                &config,
            );
            assert!(pose.position.x.abs() <= config.max_lateral());
            assert!(pose.position.z <= 0.0 && pose.position.z >= config.min_depth());
        }
    }

    #[test]
    fn test_non_finite_input_is_ignored() {
        let config = CorridorConfig::default();
        let pose = advance(
            start(),
            InputVector::new(f64::NAN, f64::INFINITY),
            MovementGate::default(),
            &config,
        );
        assert_eq!(pose, start());
    }
}
