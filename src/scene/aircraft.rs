//! Scene domain: aircraft assembly and placement.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::PlaceAircraftEvent;
use crate::movement::{InputLatch, MovementController};

/// Marker for the movable aircraft root.
#[derive(Component, Debug)]
pub struct Aircraft;

/// Spawn the aircraft at the placed position. The root entity carries the
/// input latch and movement controller; the meshes hang off it as
/// children so the whole craft moves as one transform.
pub(crate) fn place_aircraft(
    mut place_events: MessageReader<PlaceAircraftEvent>,
    existing: Query<Entity, With<Aircraft>>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for event in place_events.read() {
        if !existing.is_empty() {
            warn!("Aircraft already placed, ignoring placement");
            continue;
        }

        let hull = materials.add(StandardMaterial {
            base_color: Color::srgb(0.45, 0.5, 0.55),
            metallic: 0.6,
            perceptual_roughness: 0.4,
            ..default()
        });
        let trim = materials.add(StandardMaterial {
            base_color: Color::srgb(0.25, 0.28, 0.32),
            metallic: 0.5,
            perceptual_roughness: 0.5,
            ..default()
        });

        commands
            .spawn((
                Aircraft,
                InputLatch::default(),
                MovementController::default(),
                Transform::from_translation(event.position),
                Visibility::default(),
            ))
            .with_children(|craft| {
                // Fuselage
                craft.spawn((
                    Mesh3d(meshes.add(Cuboid::new(0.3, 0.25, 1.2))),
                    MeshMaterial3d(hull.clone()),
                ));
                // Wings
                craft.spawn((
                    Mesh3d(meshes.add(Cuboid::new(1.6, 0.05, 0.35))),
                    MeshMaterial3d(trim.clone()),
                    Transform::from_xyz(0.0, 0.0, -0.1),
                ));
                // Tail fin
                craft.spawn((
                    Mesh3d(meshes.add(Cuboid::new(0.05, 0.35, 0.3))),
                    MeshMaterial3d(trim),
                    Transform::from_xyz(0.0, 0.2, 0.55),
                ));
            });

        info!("Aircraft spawned at {}", event.position);
    }
}
