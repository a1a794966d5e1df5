//! Per-part angle functions and the dispatch table.
//!
//! Rates follow a compressed demo timescale: the seconds wheel turns once
//! per 10 simulated seconds instead of 60, and the rest of the train keeps
//! the real gear ratios relative to it (third 1:8, center 1:60, hour
//! 1:720, barrel 1:120).

use std::f64::consts::{PI, TAU};

use caliber_core::part::PartId;

// ---------------------------------------------------------------------------
// Rate constants
// ---------------------------------------------------------------------------

/// Balance oscillation frequency in Hz (300 beats per hour).
pub const BALANCE_FREQ_HZ: f64 = 5.0;
/// Balance wheel swing amplitude in radians.
pub const BALANCE_AMPLITUDE: f64 = 0.6;
/// Pallet fork swing amplitude in radians (phase-locked to the balance).
pub const PALLET_AMPLITUDE: f64 = 0.3;

/// Escape wheel release rate: one tooth advance per balance beat.
pub const ESCAPE_TICKS_PER_SECOND: f64 = 5.0;
/// Escape wheel advance per tick, in radians.
pub const ESCAPE_STEP: f64 = PI / 15.0;

/// Seconds per revolution of the fourth wheel / second hand.
pub const SECONDS_WHEEL_PERIOD: f64 = 10.0;
/// Seconds per revolution of the third wheel.
pub const THIRD_WHEEL_PERIOD: f64 = 80.0;
/// Seconds per revolution of the center wheel / minute hand.
pub const CENTER_WHEEL_PERIOD: f64 = 600.0;
/// Seconds per revolution of the hour hand.
pub const HOUR_HAND_PERIOD: f64 = 7200.0;
/// Seconds per revolution of the mainspring barrel.
pub const BARREL_PERIOD: f64 = 1200.0;

// ---------------------------------------------------------------------------
// Per-part angle functions
// ---------------------------------------------------------------------------

/// Balance wheel: sinusoidal oscillation, `0.6 · sin(2π·5·t)`.
#[must_use]
pub fn balance_wheel(t: f64) -> f64 {
    BALANCE_AMPLITUDE * (TAU * BALANCE_FREQ_HZ * t).sin()
}

/// Pallet fork: same frequency and phase as the balance, smaller swing.
#[must_use]
pub fn pallet_fork(t: f64) -> f64 {
    PALLET_AMPLITUDE * (TAU * BALANCE_FREQ_HZ * t).sin()
}

/// Escape wheel: holds its angle between beats and jumps one tooth per
/// tick. Piecewise-constant by construction: `floor`, not a smooth
/// function.
#[must_use]
pub fn escape_wheel(t: f64) -> f64 {
    -(ESCAPE_TICKS_PER_SECOND * t).floor() * ESCAPE_STEP
}

/// Fourth wheel (seconds wheel): one negative revolution per 10 s.
#[must_use]
pub fn fourth_wheel(t: f64) -> f64 {
    -(t / SECONDS_WHEEL_PERIOD) * TAU
}

/// Second hand: rides the fourth wheel.
#[must_use]
pub fn second_hand(t: f64) -> f64 {
    fourth_wheel(t)
}

/// Third wheel: one positive revolution per 80 s.
#[must_use]
pub fn third_wheel(t: f64) -> f64 {
    (t / THIRD_WHEEL_PERIOD) * TAU
}

/// Center wheel: one positive revolution per 600 s.
#[must_use]
pub fn center_wheel(t: f64) -> f64 {
    (t / CENTER_WHEEL_PERIOD) * TAU
}

/// Minute hand: rides the center wheel.
#[must_use]
pub fn minute_hand(t: f64) -> f64 {
    center_wheel(t)
}

/// Hour hand: one revolution per 7200 s.
#[must_use]
pub fn hour_hand(t: f64) -> f64 {
    (t / HOUR_HAND_PERIOD) * TAU
}

/// Mainspring barrel: one revolution per 1200 s.
#[must_use]
pub fn barrel(t: f64) -> f64 {
    (t / BARREL_PERIOD) * TAU
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Rotation angle of `part` at elapsed time `t`, or `None` for the static
/// parts (dial and base plate).
#[must_use]
pub fn angle(part: PartId, t: f64) -> Option<f64> {
    match part {
        PartId::Barrel => Some(barrel(t)),
        PartId::CenterWheel => Some(center_wheel(t)),
        PartId::ThirdWheel => Some(third_wheel(t)),
        PartId::FourthWheel => Some(fourth_wheel(t)),
        PartId::EscapeWheel => Some(escape_wheel(t)),
        PartId::PalletFork => Some(pallet_fork(t)),
        PartId::BalanceWheel => Some(balance_wheel(t)),
        PartId::HourHand => Some(hour_hand(t)),
        PartId::MinuteHand => Some(minute_hand(t)),
        PartId::SecondHand => Some(second_hand(t)),
        PartId::Dial | PartId::BasePlate => None,
    }
}

// ---------------------------------------------------------------------------
// RotationAxis
// ---------------------------------------------------------------------------

/// Axis a part's animation angle is applied about.
///
/// The train wheels, hands, and barrel lie flat and spin about the vertical
/// axis; the escapement regulator (balance wheel and pallet fork) stands on
/// edge and swings about the lateral axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationAxis {
    Vertical,
    Lateral,
}

impl RotationAxis {
    /// Animation axis for a part.
    #[must_use]
    pub const fn for_part(part: PartId) -> Self {
        match part {
            PartId::BalanceWheel | PartId::PalletFork => Self::Lateral,
            _ => Self::Vertical,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
