//! The static assembly table.
//!
//! Base positions put the gear train between the base plate and the dial,
//! with the escapement group (escape wheel, pallet fork, balance wheel)
//! offset toward +Z. Explode scales grow with a part's height in the stack
//! so the assembly fans out vertically as the explode factor rises; the
//! base plate moves down (negative scale).

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use caliber_core::part::PartId;
use caliber_geometry::gear::{GearSpec, presets};

// ---------------------------------------------------------------------------
// PartShape
// ---------------------------------------------------------------------------

/// Primary geometry of a part.
///
/// Wheels reference a generated gear spec; the rest are primitive shapes.
/// Decorative sub-meshes (hubs, spokes, the fork arms) are composed by the
/// visualization on top of the primary shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartShape {
    /// Generated gear (the four train wheels).
    Gear(GearSpec),
    /// Vertical-axis cylinder (barrel, dial, base plate).
    Cylinder { radius: f32, height: f32 },
    /// Flat bar extending along ±X (the hands).
    Hand {
        length: f32,
        width: f32,
        thickness: f32,
    },
    /// Rim torus of the balance wheel.
    BalanceRim {
        ring_radius: f32,
        tube_radius: f32,
    },
    /// Compound lever + pivot of the pallet fork.
    Fork,
}

// ---------------------------------------------------------------------------
// PartLayout
// ---------------------------------------------------------------------------

/// Static placement and display data for one part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartLayout {
    pub part: PartId,
    /// Position at explode factor 0.
    pub base_position: Vec3,
    /// Vertical displacement per unit of explode factor.
    pub explode_scale: f32,
    /// Orientation before the animation angle is applied.
    pub base_orientation: Quat,
    /// Label anchor at explode factor 0.
    pub label_anchor: Vec3,
    /// Vertical displacement of the label per unit of explode factor.
    pub label_explode_scale: f32,
    pub shape: PartShape,
    /// Base color of the primary mesh.
    pub color: Color,
}

impl PartLayout {
    /// Displayed position at the given explode factor.
    #[must_use]
    pub fn position(&self, explode: f32) -> Vec3 {
        self.base_position + Vec3::Y * self.explode_scale * explode
    }

    /// Label anchor at the given explode factor.
    #[must_use]
    pub fn label_position(&self, explode: f32) -> Vec3 {
        self.label_anchor + Vec3::Y * self.label_explode_scale * explode
    }
}

/// Layout entry for `part`.
#[must_use]
pub fn layout(part: PartId) -> PartLayout {
    let (base_position, explode_scale, label_anchor, label_explode_scale, shape, color) =
        match part {
            PartId::Barrel => (
                Vec3::new(0.0, 0.5, 0.0),
                3.0,
                Vec3::new(0.0, 1.5, 2.0),
                3.0,
                PartShape::Cylinder {
                    radius: 1.5,
                    height: 0.8,
                },
                Color::srgb_u8(0x2a, 0x4a, 0x2a),
            ),
            PartId::CenterWheel => (
                Vec3::new(0.0, 0.1, 0.0),
                1.0,
                Vec3::new(0.0, 0.5, 1.5),
                1.0,
                PartShape::Gear(presets::center_wheel()),
                Color::srgb_u8(0xc0, 0xc0, 0xc0),
            ),
            PartId::ThirdWheel => (
                Vec3::new(2.2, 0.2, 0.0),
                1.2,
                Vec3::new(2.2, 0.6, 1.2),
                1.2,
                PartShape::Gear(presets::third_wheel()),
                Color::srgb_u8(0xb8, 0xa0, 0x60),
            ),
            PartId::FourthWheel => (
                Vec3::new(-2.0, 0.3, 0.0),
                1.4,
                Vec3::new(-2.0, 0.7, 1.0),
                1.4,
                PartShape::Gear(presets::fourth_wheel()),
                Color::srgb_u8(0xc0, 0x80, 0x40),
            ),
            PartId::EscapeWheel => (
                Vec3::new(-1.5, 0.4, 2.0),
                1.6,
                Vec3::new(-1.5, 0.8, 3.0),
                1.6,
                PartShape::Gear(presets::escape_wheel()),
                Color::srgb_u8(0xd0, 0x40, 0x40),
            ),
            PartId::PalletFork => (
                Vec3::new(-0.5, 0.5, 2.0),
                1.7,
                Vec3::new(-0.5, 0.9, 3.2),
                1.7,
                PartShape::Fork,
                Color::srgb_u8(0xe0, 0x50, 0x50),
            ),
            PartId::BalanceWheel => (
                Vec3::new(1.0, 0.6, 2.0),
                2.0,
                Vec3::new(1.0, 1.2, 3.0),
                2.0,
                PartShape::BalanceRim {
                    ring_radius: 0.7,
                    tube_radius: 0.08,
                },
                Color::srgb_u8(0x40, 0x80, 0xff),
            ),
            PartId::HourHand => (
                Vec3::new(0.0, 0.78, 0.0),
                2.6,
                Vec3::new(0.0, 1.2, 1.8),
                2.6,
                PartShape::Hand {
                    length: 1.5,
                    width: 0.12,
                    thickness: 0.08,
                },
                Color::srgb_u8(0x1a, 0x1a, 0x1a),
            ),
            PartId::MinuteHand => (
                Vec3::new(0.0, 0.8, 0.0),
                2.7,
                Vec3::new(0.0, 1.3, 2.5),
                2.7,
                PartShape::Hand {
                    length: 2.2,
                    width: 0.1,
                    thickness: 0.08,
                },
                Color::srgb_u8(0x2a, 0x2a, 0x2a),
            ),
            PartId::SecondHand => (
                Vec3::new(0.0, 0.82, 0.0),
                2.8,
                Vec3::new(0.0, 1.4, 2.7),
                2.8,
                PartShape::Hand {
                    length: 2.4,
                    width: 0.06,
                    thickness: 0.08,
                },
                Color::srgb_u8(0xff, 0x33, 0x33),
            ),
            PartId::Dial => (
                Vec3::new(0.0, 0.7, 0.0),
                2.5,
                Vec3::new(0.0, 1.0, 3.5),
                2.5,
                PartShape::Cylinder {
                    radius: 3.0,
                    height: 0.1,
                },
                Color::srgb_u8(0xf5, 0xf5, 0xf5),
            ),
            PartId::BasePlate => (
                Vec3::new(0.0, -0.5, 0.0),
                -2.0,
                Vec3::new(0.0, -0.3, 4.5),
                -2.0,
                PartShape::Cylinder {
                    radius: 4.0,
                    height: 0.3,
                },
                Color::srgb_u8(0x1a, 0x1a, 0x1a),
            ),
        };

    // The balance wheel stands on edge facing +Z; everything else keeps its
    // modeled orientation.
    let base_orientation = match part {
        PartId::BalanceWheel => Quat::from_rotation_x(FRAC_PI_2),
        _ => Quat::IDENTITY,
    };

    PartLayout {
        part,
        base_position,
        explode_scale,
        base_orientation,
        label_anchor,
        label_explode_scale,
        shape,
        color,
    }
}

/// All twelve layouts in catalog order.
#[must_use]
pub fn layouts() -> [PartLayout; 12] {
    PartId::ALL.map(layout)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Decorative geometry that is not part of the selectable catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixture {
    /// One of the twelve dial markers, indexed clockwise from 3 o'clock.
    HourMarker(u8),
    /// Gold pin at the hand axis.
    CenterPin,
    /// Transparent watch glass above the dial.
    Crystal,
}

/// Placement of one fixture: base position and vertical explode scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixtureLayout {
    pub fixture: Fixture,
    pub base_position: Vec3,
    pub explode_scale: f32,
}

impl FixtureLayout {
    /// Displayed position at the given explode factor.
    #[must_use]
    pub fn position(&self, explode: f32) -> Vec3 {
        self.base_position + Vec3::Y * self.explode_scale * explode
    }
}

/// Marker ring radius on the dial.
pub const MARKER_RING_RADIUS: f32 = 2.5;

/// All fixtures: 12 hour markers, the center pin, and the crystal.
#[must_use]
pub fn fixture_layouts() -> Vec<FixtureLayout> {
    let mut fixtures = Vec::with_capacity(14);
    for i in 0..12u8 {
        let angle = f32::from(i) * std::f32::consts::TAU / 12.0;
        fixtures.push(FixtureLayout {
            fixture: Fixture::HourMarker(i),
            base_position: Vec3::new(
                angle.cos() * MARKER_RING_RADIUS,
                0.75,
                angle.sin() * MARKER_RING_RADIUS,
            ),
            explode_scale: 2.5,
        });
    }
    fixtures.push(FixtureLayout {
        fixture: Fixture::CenterPin,
        base_position: Vec3::new(0.0, 0.85, 0.0),
        explode_scale: 2.8,
    });
    fixtures.push(FixtureLayout {
        fixture: Fixture::Crystal,
        base_position: Vec3::new(0.0, 1.2, 0.0),
        explode_scale: 3.5,
    });
    fixtures
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
