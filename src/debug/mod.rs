//! Debug overlay for flight-state inspection (dev-tools feature).
//!
//! F3 toggles a corner readout of the movement phase, the active
//! directions, and the aircraft translation.

use bevy::prelude::*;

use crate::movement::{InputLatch, MovementController};
use crate::scene::Aircraft;

/// Resource tracking overlay visibility.
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub overlay_visible: bool,
}

/// Marker for the overlay text node.
#[derive(Component, Debug)]
struct DebugOverlayText;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_overlay)
            .add_systems(Update, (toggle_overlay, update_overlay));
    }
}

fn spawn_overlay(mut commands: Commands) {
    commands.spawn((
        DebugOverlayText,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.7, 0.9, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
        Visibility::Hidden,
    ));
}

fn toggle_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    mut overlay: Query<&mut Visibility, With<DebugOverlayText>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    state.overlay_visible = !state.overlay_visible;
    for mut visibility in &mut overlay {
        *visibility = if state.overlay_visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

fn update_overlay(
    state: Res<DebugState>,
    craft: Query<(&MovementController, &InputLatch, &Transform), With<Aircraft>>,
    mut overlay: Query<&mut Text, With<DebugOverlayText>>,
) {
    if !state.overlay_visible {
        return;
    }

    let Ok((controller, latch, transform)) = craft.single() else {
        return;
    };

    for mut text in &mut overlay {
        **text = format!(
            "phase: {:?}\nactive: {:?}\npos: [{:.2} {:.2} {:.2}]",
            controller.phase,
            latch.active_directions(),
            transform.translation.x,
            transform.translation.y,
            transform.translation.z,
        );
    }
}
