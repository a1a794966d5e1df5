//! The main visualization plugin.
//!
//! [`CaliberVizPlugin`] adds the orbit camera, lighting, the spawned
//! assembly, the egui side panel, and the per-frame sync systems.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

use caliber_assembly::frame::RenderFrame;
use caliber_core::CaliberSet;
use caliber_geometry::cache::GearMeshLibrary;

use crate::camera;
use crate::config::VizConfig;
use crate::input;
use crate::label;
use crate::spawn;
use crate::systems;
use crate::ui;

/// Bevy plugin for the interactive movement visualization.
///
/// Adds:
/// - Orbit camera (pan, zoom, rotate) and a three-light rig
/// - The twelve part visuals plus dial fixtures, with gear meshes built
///   through the [`GearMeshLibrary`]
/// - egui side panel with animation, view, and part-list controls, plus
///   keyboard shortcuts for the same surface
/// - Sync systems writing the per-frame [`RenderFrame`] into transforms,
///   materials, and labels
///
/// Expects that [`CaliberCorePlugin`](caliber_core::CaliberCorePlugin) is
/// already added to the app.
pub struct CaliberVizPlugin;

impl Plugin for CaliberVizPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VizConfig>()
            .init_resource::<RenderFrame>()
            .init_resource::<GearMeshLibrary>()
            .init_resource::<input::KeyboardControls>()
            .add_plugins(EguiPlugin::default())
            .add_plugins(PanOrbitCameraPlugin)
            .add_systems(
                Startup,
                (camera::spawn_camera, camera::spawn_lights, spawn::spawn_assembly),
            )
            .add_systems(
                Update,
                (
                    input::keyboard_control_system.before(CaliberSet::Tick),
                    systems::update_render_frame.in_set(CaliberSet::Animate),
                    (
                        systems::sync_part_transforms,
                        systems::sync_part_materials,
                        systems::sync_fixture_transforms,
                    )
                        .in_set(CaliberSet::Sync),
                    (ui::side_panel_system, label::part_label_system)
                        .chain()
                        .after(CaliberSet::Sync),
                ),
            );
    }
}
