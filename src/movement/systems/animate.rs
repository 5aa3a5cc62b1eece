//! Movement domain: the leg animation driver.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::components::MoveLeg;
use crate::movement::events::LegFinishedEvent;

/// Advance every in-flight leg and apply the eased translation. Exactly
/// one completion message fires per finished leg; the phase systems
/// decide what happens next. This is the only writer of mover transforms.
pub(crate) fn advance_legs(
    time: Res<Time>,
    mut legs: Query<(Entity, &mut MoveLeg, &mut Transform)>,
    mut finished: MessageWriter<LegFinishedEvent>,
) {
    for (entity, mut leg, mut transform) in &mut legs {
        if leg.finished() {
            // Completion already reported; the controller owns this leg
            // until it replaces or removes it.
            continue;
        }

        leg.elapsed += time.delta_secs();
        let t = if leg.duration > 0.0 {
            (leg.elapsed / leg.duration).min(1.0)
        } else {
            1.0
        };
        transform.translation = leg.from.lerp(leg.to, leg.easing.sample(t));

        if leg.finished() {
            transform.translation = leg.to;
            finished.write(LegFinishedEvent { entity });
        }
    }
}
