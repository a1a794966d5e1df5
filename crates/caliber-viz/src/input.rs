//! Keyboard shortcuts for the movement controls.
//!
//! Mirrors the side panel surface (play/pause, speed, explode, labels,
//! selection) so the assembly can be driven without leaving the 3D view.

use bevy::prelude::*;

use caliber_core::clock::MovementClock;
use caliber_core::view::ViewState;

/// Resource mapping keys to the movement's control surface.
///
/// Space toggles play/pause, L toggles labels, Escape clears the
/// selection, Q/E drive the explode factor, and the up/down arrows step
/// the speed multiplier.
#[derive(Resource, Clone, Debug)]
pub struct KeyboardControls {
    /// Toggle play/pause.
    pub toggle_run: KeyCode,
    /// Toggle part labels.
    pub toggle_labels: KeyCode,
    /// Clear the current selection.
    pub clear_selection: KeyCode,
    /// Key that increases the explode factor while held.
    pub explode_out: KeyCode,
    /// Key that decreases the explode factor while held.
    pub explode_in: KeyCode,
    /// Key that steps the speed multiplier up.
    pub speed_up: KeyCode,
    /// Key that steps the speed multiplier down.
    pub speed_down: KeyCode,
    /// Explode change per frame while a key is held.
    pub explode_step: f32,
    /// Speed change per press.
    pub speed_step: f32,
}

impl Default for KeyboardControls {
    fn default() -> Self {
        Self {
            toggle_run: KeyCode::Space,
            toggle_labels: KeyCode::KeyL,
            clear_selection: KeyCode::Escape,
            explode_out: KeyCode::KeyE,
            explode_in: KeyCode::KeyQ,
            speed_up: KeyCode::ArrowUp,
            speed_down: KeyCode::ArrowDown,
            explode_step: 0.02,
            speed_step: 0.1,
        }
    }
}

/// System that reads keyboard input and writes to the clock and view
/// state. Range clamping is handled by the setters.
#[allow(clippy::needless_pass_by_value)]
pub fn keyboard_control_system(
    keys: Res<ButtonInput<KeyCode>>,
    controls: Res<KeyboardControls>,
    mut clock: ResMut<MovementClock>,
    mut view: ResMut<ViewState>,
) {
    if keys.just_pressed(controls.toggle_run) {
        let running = clock.running();
        clock.set_running(!running);
    }
    if keys.just_pressed(controls.toggle_labels) {
        let visible = view.labels_visible();
        view.set_labels_visible(!visible);
    }
    if keys.just_pressed(controls.clear_selection) {
        view.set_selected(None);
    }
    if keys.just_pressed(controls.speed_up) {
        let speed = clock.speed() + controls.speed_step;
        clock.set_speed(speed);
    }
    if keys.just_pressed(controls.speed_down) {
        let speed = clock.speed() - controls.speed_step;
        clock.set_speed(speed);
    }

    // Held keys ramp the explode factor smoothly.
    let mut explode = view.explode();
    if keys.pressed(controls.explode_out) {
        explode += controls.explode_step;
    }
    if keys.pressed(controls.explode_in) {
        explode -= controls.explode_step;
    }
    if (explode - view.explode()).abs() > f32::EPSILON {
        view.set_explode(explode);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use caliber_core::clock::MAX_SPEED;
    use caliber_core::part::PartId;
    use caliber_core::view::MAX_EXPLODE;

    fn build_input_app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.init_resource::<KeyboardControls>();
        app.init_resource::<MovementClock>();
        app.init_resource::<ViewState>();
        app.add_systems(Update, keyboard_control_system);
        app
    }

    fn press(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    fn release_all(app: &mut App) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .reset_all();
    }

    #[test]
    fn space_toggles_play_pause() {
        let mut app = build_input_app();
        assert!(app.world().resource::<MovementClock>().running());

        press(&mut app, KeyCode::Space);
        app.update();
        assert!(!app.world().resource::<MovementClock>().running());

        release_all(&mut app);
        press(&mut app, KeyCode::Space);
        app.update();
        assert!(app.world().resource::<MovementClock>().running());
    }

    #[test]
    fn l_toggles_labels() {
        let mut app = build_input_app();
        press(&mut app, KeyCode::KeyL);
        app.update();
        assert!(!app.world().resource::<ViewState>().labels_visible());
    }

    #[test]
    fn escape_clears_selection() {
        let mut app = build_input_app();
        app.world_mut()
            .resource_mut::<ViewState>()
            .set_selected(Some(PartId::Barrel));

        press(&mut app, KeyCode::Escape);
        app.update();
        assert_eq!(app.world().resource::<ViewState>().selected(), None);
    }

    #[test]
    fn held_key_ramps_explode_and_clamps() {
        let mut app = build_input_app();
        press(&mut app, KeyCode::KeyE);
        // Held long enough to exceed the upper bound.
        for _ in 0..200 {
            app.update();
        }
        let explode = app.world().resource::<ViewState>().explode();
        assert!((explode - MAX_EXPLODE).abs() < f32::EPSILON);
    }

    #[test]
    fn arrows_step_speed_within_bounds() {
        let mut app = build_input_app();
        press(&mut app, KeyCode::ArrowUp);
        app.update();
        let speed = app.world().resource::<MovementClock>().speed();
        assert!((speed - 1.1).abs() < 1e-5);

        // A held key only steps on the press edge.
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear_just_pressed(KeyCode::ArrowUp);
        app.update();
        assert!((app.world().resource::<MovementClock>().speed() - 1.1).abs() < 1e-5);

        release_all(&mut app);
        for _ in 0..100 {
            press(&mut app, KeyCode::ArrowUp);
            app.update();
            release_all(&mut app);
        }
        let speed = app.world().resource::<MovementClock>().speed();
        assert!((speed - MAX_SPEED).abs() < 1e-5);
    }
}
