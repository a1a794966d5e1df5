//! Interactive visualization of the Caliber watch movement.
//!
//! `caliber-viz` provides a windowed Bevy application with:
//! - Orbit camera for assembly inspection
//! - egui side panel with animation, view, and part-list controls
//! - Keyboard shortcuts for the same controls
//! - Procedurally generated gear meshes and part labels
//! - Per-frame sync from the kinematic model to entity transforms
//!
//! # Usage
//!
//! ```no_run
//! use bevy::prelude::*;
//! use caliber_core::CaliberCorePlugin;
//! use caliber_viz::CaliberVizPlugin;
//!
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins(CaliberCorePlugin)
//!     .add_plugins(CaliberVizPlugin)
//!     .run();
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod label;
pub mod plugin;
pub mod spawn;
pub mod systems;
pub mod ui;

pub use config::VizConfig;
pub use plugin::CaliberVizPlugin;
