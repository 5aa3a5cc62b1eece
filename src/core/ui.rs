//! Core domain: placement hint overlay.

use bevy::prelude::*;

/// Marker for the placement hint root.
#[derive(Component, Debug)]
pub struct PlacementHintUI;

pub(crate) fn spawn_placement_hint(mut commands: Commands) {
    commands
        .spawn((
            PlacementHintUI,
            Node {
                width: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                bottom: Val::Px(40.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Click anywhere to place the aircraft"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));
        });
}

pub(crate) fn cleanup_placement_hint(
    mut commands: Commands,
    query: Query<Entity, With<PlacementHintUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
