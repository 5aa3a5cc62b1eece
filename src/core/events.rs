//! Core domain: placement events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired once when the user picks a spot for the aircraft.
#[derive(Debug)]
pub struct PlaceAircraftEvent {
    pub position: Vec3,
}

impl Message for PlaceAircraftEvent {}
