//! Movement domain: the phase state machine around the animation legs.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::components::{InputLatch, MoveLeg, MovementController, MovementPhase};
use crate::movement::events::LegFinishedEvent;
use crate::movement::resources::MovementTuning;

/// Phase that follows `phase` once its leg completes, given whether any
/// direction is still held at that moment.
pub(crate) fn phase_after_leg(phase: MovementPhase, still_held: bool) -> MovementPhase {
    match phase {
        MovementPhase::Starting | MovementPhase::Moving => {
            if still_held {
                MovementPhase::Moving
            } else {
                MovementPhase::Ending
            }
        }
        MovementPhase::Ending => {
            if still_held {
                // Pressed again while decelerating: skip the Idle rest.
                MovementPhase::Starting
            } else {
                MovementPhase::Idle
            }
        }
        MovementPhase::Idle => MovementPhase::Idle,
    }
}

/// Idle -> Starting: when the latch reports activity and no leg is in
/// flight, snapshot the active directions once and issue the accelerating
/// first leg.
pub(crate) fn begin_held_movement(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    mut movers: Query<
        (Entity, &InputLatch, &mut MovementController, &Transform),
        Without<MoveLeg>,
    >,
) {
    for (entity, latch, mut controller, transform) in &mut movers {
        debug_assert!(
            controller.phase == MovementPhase::Idle,
            "phase {:?} with no leg in flight",
            controller.phase
        );

        let active = latch.active_directions();
        if active.is_empty() {
            continue;
        }

        controller.phase = MovementPhase::Starting;
        commands.entity(entity).insert(MoveLeg::new(
            transform.translation,
            MovementController::step_delta(&active, tuning.movement_step()),
            tuning.starting,
        ));
        debug!("Movement begins: active {:?}", active);
    }
}

/// Leg-completion handler. One latch snapshot per finished leg is
/// authoritative for the whole transition; the handler never re-reads
/// input state after taking it.
pub(crate) fn settle_finished_legs(
    mut leg_events: MessageReader<LegFinishedEvent>,
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    mut movers: Query<(&mut InputLatch, &mut MovementController, &Transform)>,
) {
    for event in leg_events.read() {
        let Ok((mut latch, mut controller, transform)) = movers.get_mut(event.entity) else {
            // Mover torn down mid-leg; nothing left to drive.
            continue;
        };

        let active = latch.active_directions();
        let held = latch.held_directions();

        let next = phase_after_leg(controller.phase, !held.is_empty());
        debug!(
            "Leg done: {:?} -> {:?}, active {:?}",
            controller.phase, next, active
        );

        match next {
            MovementPhase::Moving => {
                controller.phase = MovementPhase::Moving;
                commands.entity(event.entity).insert(MoveLeg::new(
                    transform.translation,
                    MovementController::step_delta(&active, tuning.movement_step()),
                    tuning.moving,
                ));
            }
            MovementPhase::Ending => {
                // Pending releases still contribute their one last
                // increment here, which is what turns a release into a
                // deceleration instead of a halt.
                controller.phase = MovementPhase::Ending;
                commands.entity(event.entity).insert(MoveLeg::new(
                    transform.translation,
                    MovementController::step_delta(&active, tuning.movement_step()),
                    tuning.ending,
                ));
            }
            MovementPhase::Starting => {
                // Restart after the drain; the new leg reflects only what
                // is held now, which the pre-drain snapshot already knows.
                latch.drain_releases();
                controller.phase = MovementPhase::Starting;
                commands.entity(event.entity).insert(MoveLeg::new(
                    transform.translation,
                    MovementController::step_delta(&held, tuning.movement_step()),
                    tuning.starting,
                ));
            }
            MovementPhase::Idle => {
                debug_assert!(
                    controller.phase == MovementPhase::Ending,
                    "leg completed while controller idle"
                );
                latch.drain_releases();
                controller.phase = MovementPhase::Idle;
                commands.entity(event.entity).remove::<MoveLeg>();
            }
        }
    }
}
