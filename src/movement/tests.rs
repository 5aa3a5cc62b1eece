//! Movement domain: tests for the latch, the phase machine, and the
//! full animation loop.

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use std::time::Duration;

use super::config::parse_movement_defaults;
use super::systems::phases::phase_after_leg;
use super::systems::{
    advance_legs, apply_control_commands, begin_held_movement, settle_finished_legs,
};
use super::{
    InputLatch, LegFinishedEvent, MoveEasing, MovementController, MovementPhase, MovementTuning,
};
use crate::controls::{ControlCommand, Direction};

// -----------------------------------------------------------------------------
// Direction tests
// -----------------------------------------------------------------------------

#[test]
fn test_opposite_is_symmetric() {
    for direction in Direction::ALL {
        assert_eq!(direction.opposite().opposite(), direction);
        assert_ne!(direction.opposite(), direction);
    }
}

#[test]
fn test_offsets_are_additive_inverses() {
    for direction in Direction::ALL {
        assert_eq!(direction.offset(), -direction.opposite().offset());
        assert_eq!(direction.offset().length(), 1.0);
    }
}

// -----------------------------------------------------------------------------
// InputLatch tests
// -----------------------------------------------------------------------------

#[test]
fn test_axis_pair_never_both_active() {
    let mut latch = InputLatch::default();

    latch.hold(Direction::Up);
    latch.hold(Direction::Down);

    assert!(latch.is_active(Direction::Up));
    assert!(!latch.is_active(Direction::Down));
}

#[test]
fn test_opposite_rejected_while_release_pending() {
    let mut latch = InputLatch::default();

    latch.hold(Direction::Up);
    latch.release(Direction::Up);
    // Up is still active (pending), so Down must stay out.
    latch.hold(Direction::Down);

    assert!(latch.is_active(Direction::Up));
    assert!(!latch.is_active(Direction::Down));

    latch.drain_releases();
    latch.hold(Direction::Down);
    assert!(latch.is_active(Direction::Down));
}

#[test]
fn test_release_is_debounced_until_drain() {
    let mut latch = InputLatch::default();

    latch.hold(Direction::Right);
    latch.release(Direction::Right);

    assert!(latch.is_idle());
    assert_eq!(latch.active_directions(), vec![Direction::Right]);

    latch.drain_releases();
    assert!(latch.active_directions().is_empty());
}

#[test]
fn test_double_release_is_idempotent() {
    let mut latch = InputLatch::default();

    latch.hold(Direction::Forward);
    latch.release(Direction::Forward);
    latch.release(Direction::Forward);

    assert_eq!(latch.active_directions(), vec![Direction::Forward]);

    latch.drain_releases();
    assert!(latch.active_directions().is_empty());
}

#[test]
fn test_release_without_hold_is_ignored() {
    let mut latch = InputLatch::default();

    latch.release(Direction::Left);

    assert!(latch.is_idle());
    assert!(latch.active_directions().is_empty());
}

#[test]
fn test_repress_cancels_pending_release() {
    let mut latch = InputLatch::default();

    latch.hold(Direction::Up);
    latch.release(Direction::Up);
    latch.hold(Direction::Up);

    assert!(!latch.is_idle());

    // The earlier release must not survive the drain.
    latch.drain_releases();
    assert!(latch.is_active(Direction::Up));
}

#[test]
fn test_drain_only_clears_queued_directions() {
    let mut latch = InputLatch::default();

    latch.hold(Direction::Up);
    latch.hold(Direction::Right);
    latch.release(Direction::Up);
    latch.drain_releases();

    assert!(!latch.is_active(Direction::Up));
    assert!(latch.is_active(Direction::Right));
}

// -----------------------------------------------------------------------------
// Delta tests
// -----------------------------------------------------------------------------

#[test]
fn test_step_delta_is_additive_across_axes() {
    let delta =
        MovementController::step_delta(&[Direction::Up, Direction::Right], 0.1);
    assert_eq!(delta, Vec3::new(0.1, 0.1, 0.0));
}

#[test]
fn test_step_delta_forward_sign() {
    let delta = MovementController::step_delta(&[Direction::Forward], 0.1);
    assert_eq!(delta, Vec3::new(0.0, 0.0, -0.1));
}

#[test]
fn test_step_delta_empty_is_zero() {
    assert_eq!(MovementController::step_delta(&[], 0.1), Vec3::ZERO);
}

// -----------------------------------------------------------------------------
// Phase transition tests
// -----------------------------------------------------------------------------

#[test]
fn test_phase_after_leg_table() {
    use MovementPhase::*;

    assert_eq!(phase_after_leg(Starting, true), Moving);
    assert_eq!(phase_after_leg(Starting, false), Ending);
    assert_eq!(phase_after_leg(Moving, true), Moving);
    assert_eq!(phase_after_leg(Moving, false), Ending);
    assert_eq!(phase_after_leg(Ending, true), Starting);
    assert_eq!(phase_after_leg(Ending, false), Idle);
    assert_eq!(phase_after_leg(Idle, true), Idle);
    assert_eq!(phase_after_leg(Idle, false), Idle);
}

// -----------------------------------------------------------------------------
// Easing tests
// -----------------------------------------------------------------------------

#[test]
fn test_easing_endpoints() {
    for easing in [
        MoveEasing::AccelerateIn,
        MoveEasing::Linear,
        MoveEasing::DecelerateOut,
    ] {
        assert!(easing.sample(0.0).abs() < 1e-6);
        assert!((easing.sample(1.0) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn test_easing_midpoint_ordering() {
    assert!(MoveEasing::AccelerateIn.sample(0.5) < 0.5);
    assert!((MoveEasing::Linear.sample(0.5) - 0.5).abs() < 1e-6);
    assert!(MoveEasing::DecelerateOut.sample(0.5) > 0.5);
}

// -----------------------------------------------------------------------------
// Config tests
// -----------------------------------------------------------------------------

const TUNING_RON: &str = r#"
(
    movement_ratio: 2.0,
    base_step: 0.05,
    starting: (duration: 0.1, easing: AccelerateIn),
    moving: (duration: 0.15, easing: Linear),
    ending: (duration: 0.2, easing: DecelerateOut),
)
"#;

#[test]
fn test_parse_movement_defaults() {
    let defaults = parse_movement_defaults(TUNING_RON).unwrap();

    assert_eq!(defaults.movement_ratio, 2.0);
    assert_eq!(defaults.base_step, 0.05);
    assert_eq!(defaults.starting.easing, MoveEasing::AccelerateIn);
    assert_eq!(defaults.moving.duration, 0.15);
    assert_eq!(defaults.ending.easing, MoveEasing::DecelerateOut);
}

#[test]
fn test_parse_rejects_non_positive_duration() {
    let contents = TUNING_RON.replace("duration: 0.15", "duration: 0.0");
    let error = parse_movement_defaults(&contents).unwrap_err();
    assert!(error.contains("duration"));
}

#[test]
fn test_parse_rejects_non_positive_step() {
    let contents = TUNING_RON.replace("base_step: 0.05", "base_step: -0.05");
    let error = parse_movement_defaults(&contents).unwrap_err();
    assert!(error.contains("base_step"));
}

// -----------------------------------------------------------------------------
// Flight loop tests (headless schedule with a manually advanced clock)
// -----------------------------------------------------------------------------

fn build_flight_app() -> App {
    let mut app = App::new();
    app.add_message::<ControlCommand>();
    app.add_message::<LegFinishedEvent>();
    app.insert_resource(MovementTuning::default());
    app.init_resource::<Time>();
    app.add_systems(
        Update,
        (
            apply_control_commands,
            begin_held_movement,
            advance_legs,
            settle_finished_legs,
        )
            .chain(),
    );
    app
}

fn spawn_craft(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((
            Transform::default(),
            InputLatch::default(),
            MovementController::default(),
        ))
        .id()
}

fn send(app: &mut App, command: ControlCommand) {
    app.world_mut()
        .resource_mut::<Messages<ControlCommand>>()
        .write(command);
}

/// Advance the clock by `seconds` and run one frame.
fn tick(app: &mut App, seconds: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(seconds));
    app.update();
}

fn phase(app: &App, craft: Entity) -> MovementPhase {
    app.world().get::<MovementController>(craft).unwrap().phase
}

fn translation(app: &App, craft: Entity) -> Vec3 {
    app.world().get::<Transform>(craft).unwrap().translation
}

#[test]
fn test_single_hold_runs_full_phase_cycle() {
    let mut app = build_flight_app();
    let craft = spawn_craft(&mut app);

    send(&mut app, ControlCommand::Hold(Direction::Up));
    tick(&mut app, 0.0);
    assert_eq!(phase(&app, craft), MovementPhase::Starting);

    // Mid-Starting: accelerating upward, X/Z untouched.
    tick(&mut app, 0.1);
    let mid = translation(&app, craft);
    assert!(mid.y > 0.0 && mid.y < 0.1);
    assert_eq!(mid.x, 0.0);
    assert_eq!(mid.z, 0.0);

    // Starting completes with the button still down -> Moving.
    tick(&mut app, 0.1);
    assert_eq!(phase(&app, craft), MovementPhase::Moving);
    assert!((translation(&app, craft).y - 0.1).abs() < 1e-6);

    // Every completed Moving leg adds exactly one step.
    tick(&mut app, 0.2);
    assert_eq!(phase(&app, craft), MovementPhase::Moving);
    assert!((translation(&app, craft).y - 0.2).abs() < 1e-6);

    // Release mid-leg: the in-flight leg is never abandoned.
    send(&mut app, ControlCommand::Release(Direction::Up));
    tick(&mut app, 0.1);
    assert_eq!(phase(&app, craft), MovementPhase::Moving);

    tick(&mut app, 0.1);
    assert_eq!(phase(&app, craft), MovementPhase::Ending);

    // The Ending leg still carries the released direction's increment.
    tick(&mut app, 0.2);
    assert_eq!(phase(&app, craft), MovementPhase::Idle);
    let rest = translation(&app, craft);
    assert!((rest.y - 0.4).abs() < 1e-6);
    assert_eq!(rest.x, 0.0);
    assert_eq!(rest.z, 0.0);

    // Settled for good: no further motion without input.
    tick(&mut app, 0.2);
    assert_eq!(phase(&app, craft), MovementPhase::Idle);
    assert!((translation(&app, craft).y - 0.4).abs() < 1e-6);
}

#[test]
fn test_opposite_press_does_not_interrupt_climb() {
    let mut app = build_flight_app();
    let craft = spawn_craft(&mut app);

    send(&mut app, ControlCommand::Hold(Direction::Up));
    tick(&mut app, 0.0);
    send(&mut app, ControlCommand::Hold(Direction::Down));
    tick(&mut app, 0.1);

    let latch = app.world().get::<InputLatch>(craft).unwrap();
    assert!(latch.is_active(Direction::Up));
    assert!(!latch.is_active(Direction::Down));

    // Still climbing.
    tick(&mut app, 0.1);
    assert_eq!(phase(&app, craft), MovementPhase::Moving);
    assert!((translation(&app, craft).y - 0.1).abs() < 1e-6);
}

#[test]
fn test_forward_steps_accumulate_exactly() {
    let mut app = build_flight_app();
    let craft = spawn_craft(&mut app);

    send(&mut app, ControlCommand::Hold(Direction::Forward));
    tick(&mut app, 0.0);

    // Starting leg plus three Moving legs.
    for _ in 0..4 {
        tick(&mut app, 0.2);
    }
    assert!((translation(&app, craft).z + 0.4).abs() < 1e-6);
    assert_eq!(translation(&app, craft).x, 0.0);
    assert_eq!(translation(&app, craft).y, 0.0);

    // Release while the fifth leg is in flight: that leg completes, then
    // one Ending leg, and nothing more.
    send(&mut app, ControlCommand::Release(Direction::Forward));
    tick(&mut app, 0.2);
    assert_eq!(phase(&app, craft), MovementPhase::Ending);
    tick(&mut app, 0.2);
    assert_eq!(phase(&app, craft), MovementPhase::Idle);
    assert!((translation(&app, craft).z + 0.6).abs() < 1e-6);

    tick(&mut app, 0.2);
    assert!((translation(&app, craft).z + 0.6).abs() < 1e-6);
}

#[test]
fn test_new_press_during_ending_restarts_immediately() {
    let mut app = build_flight_app();
    let craft = spawn_craft(&mut app);

    send(&mut app, ControlCommand::Hold(Direction::Up));
    tick(&mut app, 0.0);
    tick(&mut app, 0.2);
    assert_eq!(phase(&app, craft), MovementPhase::Moving);

    send(&mut app, ControlCommand::Release(Direction::Up));
    tick(&mut app, 0.2);
    assert_eq!(phase(&app, craft), MovementPhase::Ending);

    // Press a new direction while decelerating.
    send(&mut app, ControlCommand::Hold(Direction::Right));
    tick(&mut app, 0.1);
    assert_eq!(phase(&app, craft), MovementPhase::Ending);

    // Ending completes: drain the old release, restart without idling.
    tick(&mut app, 0.1);
    assert_eq!(phase(&app, craft), MovementPhase::Starting);
    let latch = app.world().get::<InputLatch>(craft).unwrap();
    assert!(!latch.is_active(Direction::Up));
    assert!(latch.is_active(Direction::Right));

    // The restarted movement goes right, from where the climb ended.
    let before = translation(&app, craft);
    tick(&mut app, 0.2);
    let after = translation(&app, craft);
    assert!((after.x - before.x - 0.1).abs() < 1e-6);
    assert_eq!(after.y, before.y);
}

#[test]
fn test_diagonal_hold_moves_both_axes() {
    let mut app = build_flight_app();
    let craft = spawn_craft(&mut app);

    send(&mut app, ControlCommand::Hold(Direction::Up));
    send(&mut app, ControlCommand::Hold(Direction::Forward));
    tick(&mut app, 0.0);
    tick(&mut app, 0.2);

    let position = translation(&app, craft);
    assert!((position.y - 0.1).abs() < 1e-6);
    assert!((position.z + 0.1).abs() < 1e-6);
    assert_eq!(position.x, 0.0);
}
