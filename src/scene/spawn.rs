//! Scene domain: camera, lighting, and the ground plane.

use bevy::prelude::*;

/// Marker for the scene camera.
#[derive(Component, Debug)]
pub struct SceneCamera;

/// Marker for the ground plane.
#[derive(Component, Debug)]
pub struct Ground;

pub(crate) fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        SceneCamera,
        Camera3d::default(),
        Transform::from_xyz(0.0, 2.5, 7.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb(0.8, 0.85, 1.0),
        brightness: 150.0,
        ..default()
    });

    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(24.0, 24.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.18, 0.2, 0.24),
            perceptual_roughness: 0.9,
            ..default()
        })),
    ));
}
