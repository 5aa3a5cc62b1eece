//! Movement domain: applying control commands to the input latch.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::controls::ControlCommand;
use crate::movement::InputLatch;

/// Drain queued control commands into every latch, in arrival order.
/// The latch is written here and nowhere else; the input surfaces only
/// ever talk to the movement core through the message queue.
pub(crate) fn apply_control_commands(
    mut control_events: MessageReader<ControlCommand>,
    mut latches: Query<&mut InputLatch>,
) {
    for command in control_events.read() {
        for mut latch in &mut latches {
            match *command {
                ControlCommand::Hold(direction) => latch.hold(direction),
                ControlCommand::Release(direction) => latch.release(direction),
            }
        }
        debug!("Latched {:?}", command);
    }
}
