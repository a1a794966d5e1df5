//! Camera and lighting setup for the visualization scene.
//!
//! Uses `bevy_panorbit_camera` for orbit camera controls.

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

/// Spawn the default orbit camera looking at the movement from above and
/// to the side.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Transform::from_xyz(8.0, 5.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
        PanOrbitCamera {
            focus: Vec3::ZERO,
            radius: Some(12.0),
            ..default()
        },
        Camera3d::default(),
    ));
}

/// Spawn the light rig: key directional light with shadows, a fill point
/// light from below, and ambient.
pub fn spawn_lights(mut commands: Commands) {
    // Key light.
    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.8, 0.4, 0.0)),
    ));

    // Fill light opposite the key.
    commands.spawn((
        PointLight {
            intensity: 1_500_000.0,
            range: 50.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-10.0, -10.0, -5.0),
    ));

    // Ambient light.
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 200.0,
        ..default()
    });
}
