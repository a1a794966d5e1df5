//! Gear specifications and 2D tooth outlines.

use serde::{Deserialize, Serialize};

use caliber_core::error::GearError;

/// Tooth height as a fraction of the gear radius.
pub const TOOTH_HEIGHT_RATIO: f32 = 0.15;

/// Minimum tooth count for a non-degenerate outline.
pub const MIN_TEETH: u32 = 3;

/// Angular fractions of the per-tooth span at which the four boundary
/// points sit: root-start, tip-start, tip-end, root-end.
const TOOTH_FRACTIONS: [f32; 4] = [0.0, 0.4, 0.6, 1.0];

// ---------------------------------------------------------------------------
// GearSpec
// ---------------------------------------------------------------------------

/// Parameters of a generated gear.
///
/// Construction is fail-fast: a tooth count below [`MIN_TEETH`] or a
/// non-positive radius/thickness indicates a configuration error and is
/// rejected with [`GearError`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GearSpec {
    radius: f32,
    teeth: u32,
    thickness: f32,
}

impl GearSpec {
    /// Create a validated gear spec.
    pub fn new(radius: f32, teeth: u32, thickness: f32) -> Result<Self, GearError> {
        if !(radius > 0.0) {
            return Err(GearError::NonPositiveRadius(radius));
        }
        if teeth < MIN_TEETH {
            return Err(GearError::ToothCountTooLow { got: teeth });
        }
        if !(thickness > 0.0) {
            return Err(GearError::NonPositiveThickness(thickness));
        }
        Ok(Self {
            radius,
            teeth,
            thickness,
        })
    }

    /// Pitch radius (tooth roots).
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Number of teeth.
    #[must_use]
    pub const fn teeth(&self) -> u32 {
        self.teeth
    }

    /// Extrusion thickness.
    #[must_use]
    pub const fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Radial height of a tooth.
    #[must_use]
    pub fn tooth_height(&self) -> f32 {
        self.radius * TOOTH_HEIGHT_RATIO
    }

    /// Bit-exact cache key. Identical specs yield identical outlines, so
    /// memoization keys on the raw float bits.
    #[must_use]
    pub const fn key(&self) -> GearKey {
        GearKey {
            radius_bits: self.radius.to_bits(),
            teeth: self.teeth,
            thickness_bits: self.thickness.to_bits(),
        }
    }
}

/// Hashable identity of a [`GearSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GearKey {
    radius_bits: u32,
    teeth: u32,
    thickness_bits: u32,
}

// ---------------------------------------------------------------------------
// Outline generation
// ---------------------------------------------------------------------------

/// Closed 2D gear outline in the XZ plane, ordered by increasing angle
/// around the axis.
///
/// Emits four boundary points per tooth (root-start, tip-start, tip-end,
/// root-end) sampled at fractions {0, 0.4, 0.6, 1.0} of the per-tooth
/// angle. Roots sit at the pitch radius, tips at
/// `radius · (1 + TOOTH_HEIGHT_RATIO)`. The path closes implicitly: the
/// last tooth's root-end coincides with the first tooth's root-start.
#[must_use]
pub fn gear_outline(spec: &GearSpec) -> Vec<[f32; 2]> {
    let n = spec.teeth;
    let tip_radius = spec.radius() + spec.tooth_height();
    let span = std::f32::consts::TAU / n as f32;

    let mut points = Vec::with_capacity(n as usize * 4);
    for i in 0..n {
        let start = i as f32 * span;
        for (j, fraction) in TOOTH_FRACTIONS.iter().enumerate() {
            let angle = start + fraction * span;
            // Points 0 and 3 are roots, 1 and 2 are tips.
            let r = if j == 1 || j == 2 {
                tip_radius
            } else {
                spec.radius()
            };
            points.push([r * angle.cos(), r * angle.sin()]);
        }
    }
    points
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// The four fixed wheel specs of the movement.
///
/// All satisfy the [`GearSpec`] preconditions by construction.
pub mod presets {
    use super::GearSpec;

    /// Escape wheel: 15 teeth on a 0.6 pitch radius.
    #[must_use]
    pub const fn escape_wheel() -> GearSpec {
        GearSpec {
            radius: 0.6,
            teeth: 15,
            thickness: 0.1,
        }
    }

    /// Fourth (seconds) wheel: 20 teeth.
    #[must_use]
    pub const fn fourth_wheel() -> GearSpec {
        GearSpec {
            radius: 0.8,
            teeth: 20,
            thickness: 0.15,
        }
    }

    /// Third wheel: 24 teeth.
    #[must_use]
    pub const fn third_wheel() -> GearSpec {
        GearSpec {
            radius: 1.0,
            teeth: 24,
            thickness: 0.15,
        }
    }

    /// Center wheel: 28 teeth.
    #[must_use]
    pub const fn center_wheel() -> GearSpec {
        GearSpec {
            radius: 1.2,
            teeth: 28,
            thickness: 0.2,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn center_wheel_spec() -> GearSpec {
        GearSpec::new(1.2, 28, 0.2).unwrap()
    }

    // ---- spec validation ----

    #[test]
    fn spec_accepts_valid_params() {
        let spec = center_wheel_spec();
        assert!((spec.radius() - 1.2).abs() < f32::EPSILON);
        assert_eq!(spec.teeth(), 28);
        assert!((spec.thickness() - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn spec_rejects_low_tooth_count() {
        let err = GearSpec::new(1.0, 2, 0.1).unwrap_err();
        assert_eq!(err, GearError::ToothCountTooLow { got: 2 });
    }

    #[test]
    fn spec_accepts_minimum_tooth_count() {
        assert!(GearSpec::new(1.0, MIN_TEETH, 0.1).is_ok());
    }

    #[test]
    fn spec_rejects_non_positive_radius() {
        assert!(matches!(
            GearSpec::new(0.0, 15, 0.1).unwrap_err(),
            GearError::NonPositiveRadius(_)
        ));
        assert!(matches!(
            GearSpec::new(-1.0, 15, 0.1).unwrap_err(),
            GearError::NonPositiveRadius(_)
        ));
    }

    #[test]
    fn spec_rejects_non_positive_thickness() {
        assert!(matches!(
            GearSpec::new(1.0, 15, 0.0).unwrap_err(),
            GearError::NonPositiveThickness(_)
        ));
    }

    #[test]
    fn spec_rejects_nan_radius() {
        assert!(GearSpec::new(f32::NAN, 15, 0.1).is_err());
    }

    #[test]
    fn tooth_height_is_fraction_of_radius() {
        let spec = GearSpec::new(2.0, 20, 0.1).unwrap();
        assert!((spec.tooth_height() - 0.3).abs() < f32::EPSILON);
    }

    // ---- cache keys ----

    #[test]
    fn identical_specs_share_a_key() {
        let a = GearSpec::new(1.2, 28, 0.2).unwrap();
        let b = GearSpec::new(1.2, 28, 0.2).unwrap();
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn different_specs_have_different_keys() {
        let a = GearSpec::new(1.2, 28, 0.2).unwrap();
        let b = GearSpec::new(1.2, 24, 0.2).unwrap();
        let c = GearSpec::new(1.0, 28, 0.2).unwrap();
        assert_ne!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
    }

    // ---- outline ----

    #[test]
    fn outline_emits_four_points_per_tooth() {
        let spec = center_wheel_spec();
        assert_eq!(gear_outline(&spec).len(), 28 * 4);
    }

    #[test]
    fn outline_radii_alternate_root_tip_tip_root() {
        let spec = GearSpec::new(1.0, 15, 0.1).unwrap();
        let tip = 1.0 + TOOTH_HEIGHT_RATIO;
        for (i, p) in gear_outline(&spec).iter().enumerate() {
            let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
            let expected = if i % 4 == 1 || i % 4 == 2 { tip } else { 1.0 };
            assert!((r - expected).abs() < 1e-5, "point {i}: r = {r}");
        }
    }

    #[test]
    fn outline_is_deterministic() {
        let spec = center_wheel_spec();
        let a = gear_outline(&spec);
        let b = gear_outline(&spec);
        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.iter().zip(&b) {
            assert!((pa[0] - pb[0]).abs() < f32::EPSILON);
            assert!((pa[1] - pb[1]).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn outline_first_point_on_positive_x_axis() {
        let spec = GearSpec::new(0.6, 15, 0.1).unwrap();
        let points = gear_outline(&spec);
        assert!((points[0][0] - 0.6).abs() < 1e-6);
        assert!(points[0][1].abs() < 1e-6);
    }

    // ---- presets ----

    #[test]
    fn presets_satisfy_spec_preconditions() {
        for spec in [
            presets::escape_wheel(),
            presets::fourth_wheel(),
            presets::third_wheel(),
            presets::center_wheel(),
        ] {
            let revalidated = GearSpec::new(spec.radius(), spec.teeth(), spec.thickness());
            assert_eq!(revalidated.unwrap(), spec);
        }
    }

    #[test]
    fn preset_tooth_counts() {
        assert_eq!(presets::escape_wheel().teeth(), 15);
        assert_eq!(presets::fourth_wheel().teeth(), 20);
        assert_eq!(presets::third_wheel().teeth(), 24);
        assert_eq!(presets::center_wheel().teeth(), 28);
    }

    #[test]
    fn outline_covers_full_circle() {
        // The final root-end lands back at angle 2π = the first root-start.
        let spec = GearSpec::new(1.0, 20, 0.1).unwrap();
        let points = gear_outline(&spec);
        let last = points[points.len() - 1];
        assert!((last[0] - points[0][0]).abs() < 1e-4);
        assert!((last[1] - points[0][1]).abs() < 1e-4);
    }
}
