//! caliber-core: part catalog, simulation clock, view state, config, and
//! errors for the Caliber watch-movement visualization.
//!
//! [`CaliberCorePlugin`] registers the shared resources and the
//! [`CaliberSet`] system ordering that the rest of the workspace hangs
//! systems on:
//!
//! ```text
//! Tick ──► Animate ──► Sync
//! ```
//!
//! - `Tick`: advance the [`MovementClock`](clock::MovementClock) by the
//!   frame delta.
//! - `Animate`: recompute the per-frame pose/style data from the clock and
//!   [`ViewState`](view::ViewState).
//! - `Sync`: write the recomputed data into transforms, materials, and
//!   labels.

pub mod clock;
pub mod config;
pub mod error;
pub mod part;
pub mod view;

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::clock::MovementClock;
    pub use crate::config::{CaliberConfig, WindowConfig};
    pub use crate::error::{CaliberError, ConfigError, GearError};
    pub use crate::part::{PartId, PartInfo, catalog};
    pub use crate::view::ViewState;
    pub use crate::{CaliberCorePlugin, CaliberSet};
}

// ---------------------------------------------------------------------------
// CaliberSet
// ---------------------------------------------------------------------------

/// System-set ordering for the per-frame update pipeline.
#[derive(SystemSet, Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum CaliberSet {
    /// Advance the simulation clock.
    Tick,
    /// Recompute part angles, positions, and styles from shared state.
    Animate,
    /// Apply the recomputed frame to rendering-facing state.
    Sync,
}

// ---------------------------------------------------------------------------
// CaliberCorePlugin
// ---------------------------------------------------------------------------

/// Core plugin: shared resources plus [`CaliberSet`] ordering.
///
/// Registers [`MovementClock`](clock::MovementClock) and
/// [`ViewState`](view::ViewState) and advances the clock each frame in
/// [`CaliberSet::Tick`]. Rendering-facing crates add their systems to the
/// `Animate` and `Sync` sets.
pub struct CaliberCorePlugin;

impl Plugin for CaliberCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<clock::MovementClock>()
            .init_resource::<view::ViewState>()
            .configure_sets(
                Update,
                (CaliberSet::Tick, CaliberSet::Animate, CaliberSet::Sync).chain(),
            )
            .add_systems(Update, clock::tick_clock.in_set(CaliberSet::Tick));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MovementClock;
    use crate::view::ViewState;

    #[test]
    fn plugin_builds_without_panic() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, CaliberCorePlugin));
        app.finish();
        app.cleanup();
        app.update();

        assert!(app.world().get_resource::<MovementClock>().is_some());
        assert!(app.world().get_resource::<ViewState>().is_some());
    }

    #[test]
    fn clock_advances_across_updates() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, CaliberCorePlugin));
        app.finish();
        app.cleanup();

        // First update initializes Time; subsequent updates carry a delta.
        app.update();
        std::thread::sleep(std::time::Duration::from_millis(5));
        app.update();

        let clock = app.world().resource::<MovementClock>();
        assert!(clock.elapsed() > 0.0);
    }

    #[test]
    fn paused_clock_does_not_advance() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, CaliberCorePlugin));
        app.finish();
        app.cleanup();
        app.update();

        app.world_mut()
            .resource_mut::<MovementClock>()
            .set_running(false);
        let frozen = app.world().resource::<MovementClock>().elapsed();

        std::thread::sleep(std::time::Duration::from_millis(5));
        app.update();
        app.update();

        let clock = app.world().resource::<MovementClock>();
        assert!((clock.elapsed() - frozen).abs() < f64::EPSILON);
    }
}
