//! Core domain: click-to-place flow.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{AppState, PlaceAircraftEvent};
use crate::scene::SceneCamera;

/// Distance in front of the camera where the aircraft is anchored.
const PLACEMENT_DISTANCE: f32 = 4.0;

pub(crate) fn handle_placement_click(
    mouse: Res<ButtonInput<MouseButton>>,
    camera: Query<&Transform, With<SceneCamera>>,
    mut place_events: MessageWriter<PlaceAircraftEvent>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(camera_transform) = camera.single() else {
        return;
    };

    let position = camera_transform.translation + camera_transform.forward() * PLACEMENT_DISTANCE;
    place_events.write(PlaceAircraftEvent { position });
    next_state.set(AppState::Flying);
    info!("Placing aircraft at {}", position);
}
