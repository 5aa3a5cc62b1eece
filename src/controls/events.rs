//! Controls domain: messages from the input surfaces to the movement core.

use bevy::ecs::message::Message;

use crate::controls::Direction;

/// One discrete user action on a control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Hold(Direction),
    Release(Direction),
}

impl Message for ControlCommand {}
