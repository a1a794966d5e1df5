//! Per-frame render data.
//!
//! [`RenderFrame::compute`] is the single place where clock, view state,
//! layout, kinematics, and style meet. The output is an arena of poses
//! indexed by part id, rebuilt every frame and never persisted.

use bevy::prelude::*;

use caliber_core::clock::MovementClock;
use caliber_core::part::PartId;
use caliber_core::view::ViewState;
use caliber_kinematics::train::{self, RotationAxis};

use crate::layout::{self, Fixture, PartLayout};
use crate::style::{self, ResolvedStyle};

// ---------------------------------------------------------------------------
// Output tuples
// ---------------------------------------------------------------------------

/// Resolved pose and style of one part for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartPose {
    pub part: PartId,
    pub translation: Vec3,
    pub rotation: Quat,
    pub style: ResolvedStyle,
}

/// A text annotation anchored near its part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelTuple {
    pub part: PartId,
    pub text: &'static str,
    pub position: Vec3,
}

/// Resolved position of one decorative fixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixturePose {
    pub fixture: Fixture,
    pub translation: Vec3,
}

// ---------------------------------------------------------------------------
// RenderFrame
// ---------------------------------------------------------------------------

/// Everything the rendering surface needs for one frame.
#[derive(Debug, Clone, Default, Resource)]
pub struct RenderFrame {
    pub poses: Vec<PartPose>,
    pub labels: Vec<LabelTuple>,
    pub fixtures: Vec<FixturePose>,
}

impl RenderFrame {
    /// Recompute all poses, labels, and fixture positions from the current
    /// clock and view state.
    #[must_use]
    pub fn compute(clock: &MovementClock, view: &ViewState) -> Self {
        let t = clock.elapsed();
        let explode = view.explode();

        let poses = layout::layouts()
            .into_iter()
            .map(|entry| part_pose(&entry, t, explode, view))
            .collect();

        let labels = if view.labels_visible() {
            layout::layouts()
                .into_iter()
                .map(|entry| LabelTuple {
                    part: entry.part,
                    text: entry.part.name(),
                    position: entry.label_position(explode),
                })
                .collect()
        } else {
            Vec::new()
        };

        let fixtures = layout::fixture_layouts()
            .into_iter()
            .map(|f| FixturePose {
                fixture: f.fixture,
                translation: f.position(explode),
            })
            .collect();

        Self {
            poses,
            labels,
            fixtures,
        }
    }

    /// Pose of one part, if present.
    #[must_use]
    pub fn pose(&self, part: PartId) -> Option<&PartPose> {
        self.poses.iter().find(|p| p.part == part)
    }
}

fn part_pose(entry: &PartLayout, t: f64, explode: f32, view: &ViewState) -> PartPose {
    #[allow(clippy::cast_possible_truncation)]
    let rotation = match train::angle(entry.part, t) {
        Some(angle) => {
            let spin = match RotationAxis::for_part(entry.part) {
                RotationAxis::Vertical => Quat::from_rotation_y(angle as f32),
                RotationAxis::Lateral => Quat::from_rotation_z(angle as f32),
            };
            spin * entry.base_orientation
        }
        None => entry.base_orientation,
    };

    PartPose {
        part: entry.part,
        translation: entry.position(explode),
        rotation,
        style: style::resolve(entry.part, view),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{HIGHLIGHT_EMISSIVE, SELECTED_EMISSIVE};

    fn clock_at(t: f64) -> MovementClock {
        let mut clock = MovementClock::default();
        clock.tick(t);
        clock
    }

    // ---- poses ----

    #[test]
    fn frame_has_a_pose_per_part() {
        let frame = RenderFrame::compute(&clock_at(0.0), &ViewState::default());
        assert_eq!(frame.poses.len(), 12);
        for part in PartId::ALL {
            assert!(frame.pose(part).is_some());
        }
    }

    #[test]
    fn zero_explode_matches_base_positions() {
        let frame = RenderFrame::compute(&clock_at(3.0), &ViewState::default());
        for entry in layout::layouts() {
            let pose = frame.pose(entry.part).unwrap();
            assert_eq!(pose.translation, entry.base_position);
        }
    }

    #[test]
    fn full_explode_doubles_the_scale() {
        let mut view = ViewState::default();
        view.set_explode(2.0);
        let frame = RenderFrame::compute(&clock_at(0.0), &view);
        for entry in layout::layouts() {
            let pose = frame.pose(entry.part).unwrap();
            let dy = pose.translation.y - entry.base_position.y;
            assert!((dy - 2.0 * entry.explode_scale).abs() < 1e-5);
        }
    }

    #[test]
    fn static_parts_keep_base_orientation() {
        let frame = RenderFrame::compute(&clock_at(57.3), &ViewState::default());
        assert_eq!(
            frame.pose(PartId::Dial).unwrap().rotation,
            Quat::IDENTITY
        );
        assert_eq!(
            frame.pose(PartId::BasePlate).unwrap().rotation,
            Quat::IDENTITY
        );
    }

    #[test]
    fn second_hand_rotates_about_vertical_axis() {
        let frame = RenderFrame::compute(&clock_at(2.5), &ViewState::default());
        let pose = frame.pose(PartId::SecondHand).unwrap();
        #[allow(clippy::cast_possible_truncation)]
        let expected = Quat::from_rotation_y(train::second_hand(2.5) as f32);
        assert!(pose.rotation.angle_between(expected) < 1e-5);
    }

    #[test]
    fn balance_wheel_swings_about_lateral_axis() {
        let t = 0.04;
        let frame = RenderFrame::compute(&clock_at(t), &ViewState::default());
        let pose = frame.pose(PartId::BalanceWheel).unwrap();
        #[allow(clippy::cast_possible_truncation)]
        let expected = Quat::from_rotation_z(train::balance_wheel(t) as f32)
            * layout::layout(PartId::BalanceWheel).base_orientation;
        assert!(pose.rotation.angle_between(expected) < 1e-5);
    }

    // ---- styles ----

    #[test]
    fn selected_style_wins_over_highlight() {
        let mut view = ViewState::default();
        view.set_selected(Some(PartId::Barrel));
        view.set_highlighted(Some(PartId::Dial));
        let frame = RenderFrame::compute(&clock_at(0.0), &view);

        let barrel = frame.pose(PartId::Barrel).unwrap().style;
        assert!((barrel.emissive_intensity - SELECTED_EMISSIVE).abs() < f32::EPSILON);

        let dial = frame.pose(PartId::Dial).unwrap().style;
        assert!((dial.emissive_intensity - HIGHLIGHT_EMISSIVE).abs() < f32::EPSILON);

        let other = frame.pose(PartId::ThirdWheel).unwrap().style;
        assert_eq!(other.color_override, None);
    }

    // ---- labels ----

    #[test]
    fn labels_follow_visibility_flag() {
        let mut view = ViewState::default();
        let frame = RenderFrame::compute(&clock_at(0.0), &view);
        assert_eq!(frame.labels.len(), 12);

        view.set_labels_visible(false);
        let frame = RenderFrame::compute(&clock_at(0.0), &view);
        assert!(frame.labels.is_empty());
    }

    #[test]
    fn labels_travel_with_explode() {
        let mut view = ViewState::default();
        view.set_explode(1.0);
        let frame = RenderFrame::compute(&clock_at(0.0), &view);
        let barrel_label = frame
            .labels
            .iter()
            .find(|l| l.part == PartId::Barrel)
            .unwrap();
        let entry = layout::layout(PartId::Barrel);
        let expected = entry.label_anchor + Vec3::Y * entry.label_explode_scale;
        assert!((barrel_label.position - expected).length() < 1e-5);
        assert_eq!(barrel_label.text, "Mainspring Barrel");
    }

    // ---- fixtures ----

    #[test]
    fn fixtures_present_and_exploding() {
        let mut view = ViewState::default();
        view.set_explode(1.0);
        let frame = RenderFrame::compute(&clock_at(0.0), &view);
        assert_eq!(frame.fixtures.len(), 14);
        let crystal = frame
            .fixtures
            .iter()
            .find(|f| f.fixture == Fixture::Crystal)
            .unwrap();
        assert!((crystal.translation.y - (1.2 + 3.5)).abs() < 1e-5);
    }

    // ---- determinism ----

    #[test]
    fn identical_inputs_give_identical_frames() {
        let clock = clock_at(123.456);
        let mut view = ViewState::default();
        view.set_explode(0.7);
        view.set_selected(Some(PartId::EscapeWheel));

        let a = RenderFrame::compute(&clock, &view);
        let b = RenderFrame::compute(&clock, &view);
        assert_eq!(a.poses, b.poses);
        assert_eq!(a.labels, b.labels);
        assert_eq!(a.fixtures, b.fixtures);
    }
}
