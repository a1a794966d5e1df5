//! Interactive view state: explode factor, selection, highlight, labels.
//!
//! Mutated only by UI handlers; read by the layout and style resolution
//! every frame. At most one part is selected and at most one highlighted at
//! any time.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::part::PartId;

/// Explode slider bounds.
pub const MIN_EXPLODE: f32 = 0.0;
pub const MAX_EXPLODE: f32 = 2.0;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Shared view state for the assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
pub struct ViewState {
    explode: f32,
    selected: Option<PartId>,
    highlighted: Option<PartId>,
    labels_visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            explode: 0.0,
            selected: None,
            highlighted: None,
            labels_visible: true,
        }
    }
}

impl ViewState {
    /// Current explode factor in `[MIN_EXPLODE, MAX_EXPLODE]`.
    #[must_use]
    pub const fn explode(&self) -> f32 {
        self.explode
    }

    /// Set the explode factor, clamped to `[MIN_EXPLODE, MAX_EXPLODE]`.
    pub fn set_explode(&mut self, explode: f32) {
        self.explode = explode.clamp(MIN_EXPLODE, MAX_EXPLODE);
    }

    /// Currently selected part, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<PartId> {
        self.selected
    }

    /// Select a part (or clear with `None`).
    pub const fn set_selected(&mut self, part: Option<PartId>) {
        self.selected = part;
    }

    /// Click behavior of the parts list: clicking the selected part
    /// deselects it, clicking another part moves the selection.
    pub fn toggle_selected(&mut self, part: PartId) {
        self.selected = if self.selected == Some(part) {
            None
        } else {
            Some(part)
        };
    }

    /// Currently hovered part, if any.
    #[must_use]
    pub const fn highlighted(&self) -> Option<PartId> {
        self.highlighted
    }

    /// Set the hover highlight (or clear with `None`).
    pub const fn set_highlighted(&mut self, part: Option<PartId>) {
        self.highlighted = part;
    }

    /// Whether part labels are drawn.
    #[must_use]
    pub const fn labels_visible(&self) -> bool {
        self.labels_visible
    }

    pub const fn set_labels_visible(&mut self, visible: bool) {
        self.labels_visible = visible;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_state() {
        let view = ViewState::default();
        assert!((view.explode() - 0.0).abs() < f32::EPSILON);
        assert_eq!(view.selected(), None);
        assert_eq!(view.highlighted(), None);
        assert!(view.labels_visible());
    }

    #[test]
    fn explode_clamped_to_range() {
        let mut view = ViewState::default();
        view.set_explode(1.3);
        assert!((view.explode() - 1.3).abs() < f32::EPSILON);
        view.set_explode(-0.5);
        assert!((view.explode() - MIN_EXPLODE).abs() < f32::EPSILON);
        view.set_explode(9.0);
        assert!((view.explode() - MAX_EXPLODE).abs() < f32::EPSILON);
    }

    #[test]
    fn toggle_selected_toggles_same_part() {
        let mut view = ViewState::default();
        view.toggle_selected(PartId::Barrel);
        assert_eq!(view.selected(), Some(PartId::Barrel));
        view.toggle_selected(PartId::Barrel);
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn toggle_selected_moves_to_other_part() {
        let mut view = ViewState::default();
        view.toggle_selected(PartId::Barrel);
        view.toggle_selected(PartId::Dial);
        assert_eq!(view.selected(), Some(PartId::Dial));
    }

    #[test]
    fn highlight_independent_of_selection() {
        let mut view = ViewState::default();
        view.set_selected(Some(PartId::EscapeWheel));
        view.set_highlighted(Some(PartId::BalanceWheel));
        assert_eq!(view.selected(), Some(PartId::EscapeWheel));
        assert_eq!(view.highlighted(), Some(PartId::BalanceWheel));
        view.set_highlighted(None);
        assert_eq!(view.highlighted(), None);
    }
}
