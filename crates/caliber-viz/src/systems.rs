//! Per-frame sync: kinematics → transforms and materials.
//!
//! `update_render_frame` recomputes the shared [`RenderFrame`] in
//! [`CaliberSet::Animate`](caliber_core::CaliberSet::Animate); the sync
//! systems then write it into part transforms, material colors, and
//! fixture transforms in `CaliberSet::Sync`.

use bevy::prelude::*;

use caliber_assembly::frame::RenderFrame;
use caliber_core::clock::MovementClock;
use caliber_core::view::ViewState;

use crate::spawn::{FixtureVisual, PartMesh, PartRoot};

/// Recompute the render frame from the clock and view state.
#[allow(clippy::needless_pass_by_value)]
pub fn update_render_frame(
    clock: Res<MovementClock>,
    view: Res<ViewState>,
    mut frame: ResMut<RenderFrame>,
) {
    *frame = RenderFrame::compute(&clock, &view);
}

/// Write part poses into the root transforms.
#[allow(clippy::needless_pass_by_value)]
pub fn sync_part_transforms(
    frame: Res<RenderFrame>,
    mut parts: Query<(&PartRoot, &mut Transform)>,
) {
    for (root, mut transform) in &mut parts {
        let Some(pose) = frame.pose(root.0) else {
            continue;
        };
        transform.translation = pose.translation;
        transform.rotation = pose.rotation;
    }
}

/// Recolor part materials from the resolved styles.
///
/// Each mesh entity owns its material instance, so writing here affects
/// exactly one part.
#[allow(clippy::needless_pass_by_value)]
pub fn sync_part_materials(
    frame: Res<RenderFrame>,
    meshes: Query<(&PartMesh, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (mesh, handle) in &meshes {
        let Some(pose) = frame.pose(mesh.part) else {
            continue;
        };
        let Some(material) = materials.get_mut(&handle.0) else {
            continue;
        };
        let color = pose.style.color_override.unwrap_or(mesh.base_color);
        material.base_color = color;
        material.emissive = emissive(color, pose.style.emissive_intensity);
    }
}

/// Write fixture poses into the fixture transforms.
#[allow(clippy::needless_pass_by_value)]
pub fn sync_fixture_transforms(
    frame: Res<RenderFrame>,
    mut fixtures: Query<(&FixtureVisual, &mut Transform)>,
) {
    for (visual, mut transform) in &mut fixtures {
        let Some(pose) = frame.fixtures.iter().find(|f| f.fixture == visual.0) else {
            continue;
        };
        transform.translation = pose.translation;
    }
}

/// Emissive term: the display color scaled by the emphasis intensity.
fn emissive(color: Color, intensity: f32) -> LinearRgba {
    let linear = color.to_linear();
    LinearRgba::rgb(
        linear.red * intensity,
        linear.green * intensity,
        linear.blue * intensity,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
