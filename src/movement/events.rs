//! Movement domain: leg-completion notifications from the animation driver.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// One animation leg reached its target.
#[derive(Debug)]
pub struct LegFinishedEvent {
    pub entity: Entity,
}

impl Message for LegFinishedEvent {}
