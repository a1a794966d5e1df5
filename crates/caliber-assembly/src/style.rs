//! Selection/highlight style resolution.
//!
//! A selected part turns yellow with a strong emissive glow; a hovered part
//! turns orange with a weaker one. Selection wins when both apply to the
//! same part.

use bevy::prelude::*;

use caliber_core::part::PartId;
use caliber_core::view::ViewState;

/// Emissive intensity of a selected part.
pub const SELECTED_EMISSIVE: f32 = 0.3;
/// Emissive intensity of a highlighted part.
pub const HIGHLIGHT_EMISSIVE: f32 = 0.2;

/// Flood color of a selected part.
#[must_use]
pub fn selected_color() -> Color {
    Color::srgb_u8(0xff, 0xff, 0x00)
}

/// Flood color of a highlighted part.
#[must_use]
pub fn highlight_color() -> Color {
    Color::srgb_u8(0xff, 0x88, 0x00)
}

// ---------------------------------------------------------------------------
// Emphasis
// ---------------------------------------------------------------------------

/// Emphasis state of a part under the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    Selected,
    Highlighted,
    #[default]
    None,
}

/// Emphasis of `part`: selection takes precedence over highlight.
#[must_use]
pub fn emphasis(part: PartId, view: &ViewState) -> Emphasis {
    if view.selected() == Some(part) {
        Emphasis::Selected
    } else if view.highlighted() == Some(part) {
        Emphasis::Highlighted
    } else {
        Emphasis::None
    }
}

// ---------------------------------------------------------------------------
// ResolvedStyle
// ---------------------------------------------------------------------------

/// Display style of a part after emphasis resolution.
///
/// `color_override` is `None` for unemphasized parts, which keep each
/// sub-mesh's own base color with no emissive term.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedStyle {
    pub color_override: Option<Color>,
    pub emissive_intensity: f32,
}

/// Resolve the display style of `part` under `view`.
#[must_use]
pub fn resolve(part: PartId, view: &ViewState) -> ResolvedStyle {
    match emphasis(part, view) {
        Emphasis::Selected => ResolvedStyle {
            color_override: Some(selected_color()),
            emissive_intensity: SELECTED_EMISSIVE,
        },
        Emphasis::Highlighted => ResolvedStyle {
            color_override: Some(highlight_color()),
            emissive_intensity: HIGHLIGHT_EMISSIVE,
        },
        Emphasis::None => ResolvedStyle::default(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
