//! egui side panel for the movement controls.
//!
//! Sections mirror the control surface of the movement: animation
//! (play/pause, speed), view (explode, labels), the selectable parts list
//! with hover highlighting, camera help, and an about blurb.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use caliber_core::clock::{MAX_SPEED, MIN_SPEED, MovementClock};
use caliber_core::part::{PartId, catalog};
use caliber_core::view::{MAX_EXPLODE, ViewState};

use crate::config::VizConfig;

/// System that renders the egui side panel each frame.
#[allow(clippy::needless_pass_by_value)]
pub fn side_panel_system(
    mut contexts: EguiContexts,
    viz_config: Res<VizConfig>,
    mut clock: ResMut<MovementClock>,
    mut view: ResMut<ViewState>,
) {
    if !viz_config.show_panel {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("caliber_panel")
        .default_width(300.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Mechanical Watch Movement");
            ui.separator();

            animation_section(ui, &mut clock);
            ui.separator();

            view_section(ui, &mut view);
            ui.separator();

            parts_section(ui, &mut view);
            ui.separator();

            camera_section(ui);
            ui.separator();

            about_section(ui);
        });
}

fn animation_section(ui: &mut egui::Ui, clock: &mut ResMut<MovementClock>) {
    ui.label("Animation");

    let label = if clock.running() { "Pause" } else { "Play" };
    if ui
        .add(egui::Button::new(label).selected(clock.running()))
        .clicked()
    {
        let running = clock.running();
        clock.set_running(!running);
    }

    let mut speed = clock.speed();
    if ui
        .add(
            egui::Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED)
                .step_by(0.1)
                .text("Speed"),
        )
        .changed()
    {
        clock.set_speed(speed);
    }

    ui.label(format!("Elapsed: {:.1} s", clock.elapsed()));
}

fn view_section(ui: &mut egui::Ui, view: &mut ResMut<ViewState>) {
    ui.label("View");

    let mut explode = view.explode();
    if ui
        .add(
            egui::Slider::new(&mut explode, 0.0..=MAX_EXPLODE)
                .step_by(0.1)
                .text("Explode"),
        )
        .changed()
    {
        view.set_explode(explode);
    }

    let labels_on = view.labels_visible();
    let label = if labels_on { "Labels On" } else { "Labels Off" };
    if ui
        .add(egui::Button::new(label).selected(labels_on))
        .clicked()
    {
        view.set_labels_visible(!labels_on);
    }
}

fn parts_section(ui: &mut egui::Ui, view: &mut ResMut<ViewState>) {
    ui.label("Components");

    let mut hovered: Option<PartId> = None;
    egui::ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
        for entry in catalog() {
            let is_selected = view.selected() == Some(entry.id);
            let text = format!("{}\n{}", entry.name, entry.description);
            let response = ui.selectable_label(is_selected, text);
            if response.clicked() {
                view.toggle_selected(entry.id);
            }
            if response.hovered() {
                hovered = Some(entry.id);
            }
        }
    });

    // Only touch the resource when the hover target actually changed.
    if view.highlighted() != hovered {
        view.set_highlighted(hovered);
    }
}

fn camera_section(ui: &mut egui::Ui) {
    ui.label("Camera");
    ui.small("Rotate: left click + drag");
    ui.small("Pan: right click + drag");
    ui.small("Zoom: scroll wheel");
    ui.small("Keys: space play/pause, Q/E explode, L labels, Esc deselect");
}

fn about_section(ui: &mut egui::Ui) {
    ui.label("About");
    ui.small(
        "Mechanical watch movement with authentic gear ratios. The balance \
         wheel oscillates at 300 beats per hour (5 Hz); energy flows from \
         the mainspring barrel through the gear train to the escapement, \
         which regulates its release in discrete steps.",
    );
}
