//! Part labels projected into screen space.
//!
//! Label anchors live in world space and travel with their part's explode
//! offset; each frame they are projected through the active camera and
//! painted on a background egui layer so they never cover the side panel.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use caliber_assembly::frame::RenderFrame;

const LABEL_FONT_SIZE: f32 = 14.0;

/// System drawing a text label near each part when labels are enabled.
#[allow(clippy::needless_pass_by_value)]
pub fn part_label_system(
    mut contexts: EguiContexts,
    frame: Res<RenderFrame>,
    camera: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
) {
    if frame.labels.is_empty() {
        return;
    }
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("part_labels"),
    ));
    let font = egui::FontId::proportional(LABEL_FONT_SIZE);

    for label in &frame.labels {
        // Behind-the-camera anchors are rejected by the projection.
        let Ok(viewport) = camera.world_to_viewport(camera_transform, label.position) else {
            continue;
        };
        let pos = egui::pos2(viewport.x, viewport.y);

        // Shadow pass, then the label.
        painter.text(
            pos + egui::vec2(1.0, 1.0),
            egui::Align2::CENTER_CENTER,
            label.text,
            font.clone(),
            egui::Color32::BLACK,
        );
        painter.text(
            pos,
            egui::Align2::CENTER_CENTER,
            label.text,
            font.clone(),
            egui::Color32::WHITE,
        );
    }
}
