//! Spawning the part and fixture visuals.
//!
//! Each catalog part gets a root entity (tagged [`PartRoot`]) whose
//! transform the sync systems drive from the per-frame pose, with one or
//! more mesh children tagged [`PartMesh`]. Every mesh child owns its own
//! material instance so selection/highlight recoloring touches only that
//! part.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use caliber_assembly::layout::{self, Fixture, PartShape};
use caliber_core::part::PartId;
use caliber_geometry::cache::GearMeshLibrary;

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// Root entity of one part; its transform tracks the part pose.
#[derive(Component, Debug, Clone, Copy)]
pub struct PartRoot(pub PartId);

/// A mesh belonging to a part, with the color it reverts to when
/// unemphasized.
#[derive(Component, Debug, Clone, Copy)]
pub struct PartMesh {
    pub part: PartId,
    pub base_color: Color,
}

/// A decorative fixture mesh; its transform tracks the fixture pose.
#[derive(Component, Debug, Clone, Copy)]
pub struct FixtureVisual(pub Fixture);

// ---------------------------------------------------------------------------
// Spawning
// ---------------------------------------------------------------------------

/// Spawn all twelve part visuals and the dial fixtures.
pub fn spawn_assembly(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut gears: ResMut<GearMeshLibrary>,
) {
    for entry in layout::layouts() {
        let part = entry.part;
        let root = commands
            .spawn((
                PartRoot(part),
                Visibility::default(),
                Transform::from_translation(entry.base_position)
                    .with_rotation(entry.base_orientation),
            ))
            .id();

        commands.entity(root).with_children(|parent| {
            let mut mesh_child =
                |mesh: Handle<Mesh>, color: Color, transform: Transform| {
                    parent.spawn((
                        PartMesh {
                            part,
                            base_color: color,
                        },
                        Mesh3d(mesh),
                        MeshMaterial3d(materials.add(metal(color))),
                        transform,
                    ));
                };

            match entry.shape {
                PartShape::Gear(spec) => {
                    mesh_child(
                        gears.handle(&spec, &mut meshes),
                        entry.color,
                        Transform::IDENTITY,
                    );
                    let (hub_radius, hub_height, hub_color) = hub_params(part);
                    mesh_child(
                        meshes.add(Cylinder::new(hub_radius, hub_height)),
                        hub_color,
                        Transform::IDENTITY,
                    );
                }
                PartShape::Cylinder { radius, height } => {
                    mesh_child(
                        meshes.add(Cylinder::new(radius, height)),
                        entry.color,
                        Transform::IDENTITY,
                    );
                    if part == PartId::Barrel {
                        // Barrel arbor poking through the drum.
                        mesh_child(
                            meshes.add(Cylinder::new(0.3, 1.0)),
                            Color::srgb_u8(0x1a, 0x1a, 0x1a),
                            Transform::IDENTITY,
                        );
                    }
                }
                PartShape::Hand {
                    length,
                    width,
                    thickness,
                } => {
                    mesh_child(
                        meshes.add(Cuboid::new(length, thickness, width)),
                        entry.color,
                        Transform::IDENTITY,
                    );
                }
                PartShape::BalanceRim {
                    ring_radius,
                    tube_radius,
                } => {
                    mesh_child(
                        meshes.add(Torus {
                            minor_radius: tube_radius,
                            major_radius: ring_radius,
                        }),
                        entry.color,
                        Transform::IDENTITY,
                    );
                    // Balance staff.
                    mesh_child(
                        meshes.add(Cylinder::new(0.1, 0.2)),
                        Color::srgb_u8(0x30, 0x60, 0xd0),
                        Transform::IDENTITY,
                    );
                    // Four spokes.
                    let spoke = meshes.add(Cuboid::new(0.05, 0.2, 0.7));
                    for i in 0..4 {
                        let angle = i as f32 * FRAC_PI_2;
                        mesh_child(
                            spoke.clone(),
                            Color::srgb_u8(0x50, 0x90, 0xff),
                            Transform::from_xyz(angle.cos() * 0.35, 0.0, angle.sin() * 0.35)
                                .with_rotation(Quat::from_rotation_y(angle)),
                        );
                    }
                    // Hairspring coil below the rim.
                    mesh_child(
                        meshes.add(Torus {
                            minor_radius: 0.02,
                            major_radius: 0.4,
                        }),
                        Color::srgb_u8(0x60, 0x90, 0xff),
                        Transform::from_xyz(0.0, -0.15, 0.0),
                    );
                }
                PartShape::Fork => {
                    // Lever stem toward the escape wheel.
                    mesh_child(
                        meshes.add(Cuboid::new(0.15, 0.15, 0.8)),
                        entry.color,
                        Transform::from_xyz(0.0, 0.0, 0.4),
                    );
                    // Two pallet prongs.
                    let prong = meshes.add(Cuboid::new(0.3, 0.15, 0.15));
                    mesh_child(
                        prong.clone(),
                        entry.color,
                        Transform::from_xyz(-0.1, 0.0, 0.8),
                    );
                    mesh_child(prong, entry.color, Transform::from_xyz(0.1, 0.0, 0.8));
                    // Pivot.
                    mesh_child(
                        meshes.add(Cylinder::new(0.08, 0.2)),
                        Color::srgb_u8(0xc0, 0x40, 0x40),
                        Transform::IDENTITY,
                    );
                }
            }
        });
    }

    spawn_fixtures(&mut commands, &mut meshes, &mut materials);
}

fn spawn_fixtures(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let marker_mesh = meshes.add(Cylinder::new(0.08, 0.12));
    let marker_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x33, 0x33, 0x33),
        metallic: 0.8,
        perceptual_roughness: 0.2,
        ..default()
    });

    for f in layout::fixture_layouts() {
        match f.fixture {
            Fixture::HourMarker(_) => {
                commands.spawn((
                    FixtureVisual(f.fixture),
                    Mesh3d(marker_mesh.clone()),
                    MeshMaterial3d(marker_material.clone()),
                    Transform::from_translation(f.base_position),
                ));
            }
            Fixture::CenterPin => {
                commands.spawn((
                    FixtureVisual(f.fixture),
                    Mesh3d(meshes.add(Cylinder::new(0.15, 0.3))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: Color::srgb_u8(0xff, 0xd7, 0x00),
                        metallic: 0.9,
                        perceptual_roughness: 0.1,
                        ..default()
                    })),
                    Transform::from_translation(f.base_position),
                ));
            }
            Fixture::Crystal => {
                commands.spawn((
                    FixtureVisual(f.fixture),
                    Mesh3d(meshes.add(Cylinder::new(3.2, 0.2))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: Color::srgba(1.0, 1.0, 1.0, 0.15),
                        alpha_mode: AlphaMode::Blend,
                        metallic: 0.0,
                        perceptual_roughness: 0.0,
                        ..default()
                    })),
                    Transform::from_translation(f.base_position),
                ));
            }
        }
    }
}

/// Brushed-metal look shared by the part meshes.
fn metal(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        metallic: 0.9,
        perceptual_roughness: 0.2,
        ..default()
    }
}

/// Hub cylinder parameters for the four train wheels.
fn hub_params(part: PartId) -> (f32, f32, Color) {
    match part {
        PartId::CenterWheel => (0.2, 0.25, Color::srgb_u8(0x8a, 0x8a, 0x8a)),
        PartId::ThirdWheel => (0.15, 0.25, Color::srgb_u8(0x8a, 0x70, 0x40)),
        PartId::FourthWheel => (0.12, 0.25, Color::srgb_u8(0x90, 0x60, 0x30)),
        _ => (0.1, 0.15, Color::srgb_u8(0xa0, 0x30, 0x30)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
