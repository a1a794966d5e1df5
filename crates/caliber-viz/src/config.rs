//! Visualization configuration.

use bevy::prelude::*;

/// Runtime configuration for the visualization window.
#[derive(Resource, Clone, Debug)]
pub struct VizConfig {
    /// Show the egui side panel.
    pub show_panel: bool,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self { show_panel: true }
    }
}
