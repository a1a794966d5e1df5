//! Part identity and the fixed 12-entry catalog.
//!
//! Every component of the movement has a stable kebab-case id used for
//! selection, highlighting, and labeling. The catalog order is the fixed
//! presentation order of the parts list: gear train first (barrel through
//! balance wheel), then hands, dial, and base plate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PartId
// ---------------------------------------------------------------------------

/// Identity of a movement part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartId {
    Barrel,
    CenterWheel,
    ThirdWheel,
    FourthWheel,
    EscapeWheel,
    PalletFork,
    BalanceWheel,
    HourHand,
    MinuteHand,
    SecondHand,
    Dial,
    #[serde(rename = "base")]
    BasePlate,
}

impl PartId {
    /// All parts in presentation order.
    pub const ALL: [Self; 12] = [
        Self::Barrel,
        Self::CenterWheel,
        Self::ThirdWheel,
        Self::FourthWheel,
        Self::EscapeWheel,
        Self::PalletFork,
        Self::BalanceWheel,
        Self::HourHand,
        Self::MinuteHand,
        Self::SecondHand,
        Self::Dial,
        Self::BasePlate,
    ];

    /// Stable string id (kebab-case).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Barrel => "barrel",
            Self::CenterWheel => "center-wheel",
            Self::ThirdWheel => "third-wheel",
            Self::FourthWheel => "fourth-wheel",
            Self::EscapeWheel => "escape-wheel",
            Self::PalletFork => "pallet-fork",
            Self::BalanceWheel => "balance-wheel",
            Self::HourHand => "hour-hand",
            Self::MinuteHand => "minute-hand",
            Self::SecondHand => "second-hand",
            Self::Dial => "dial",
            Self::BasePlate => "base",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Barrel => "Mainspring Barrel",
            Self::CenterWheel => "Center Wheel",
            Self::ThirdWheel => "Third Wheel",
            Self::FourthWheel => "Fourth Wheel",
            Self::EscapeWheel => "Escape Wheel",
            Self::PalletFork => "Pallet Fork",
            Self::BalanceWheel => "Balance Wheel",
            Self::HourHand => "Hour Hand",
            Self::MinuteHand => "Minute Hand",
            Self::SecondHand => "Second Hand",
            Self::Dial => "Dial",
            Self::BasePlate => "Base Plate",
        }
    }

    /// One-line description for the parts list.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Barrel => "Stores energy from winding",
            Self::CenterWheel => "Drives minute hand, 1 rev/hour",
            Self::ThirdWheel => "Intermediary gear in train",
            Self::FourthWheel => "Seconds wheel, 1 rev/minute",
            Self::EscapeWheel => "Regulates energy release",
            Self::PalletFork => "Locks/unlocks escape wheel",
            Self::BalanceWheel => "Oscillates at 300 BPH (5Hz)",
            Self::HourHand => "Shows hours",
            Self::MinuteHand => "Shows minutes",
            Self::SecondHand => "Shows seconds",
            Self::Dial => "Watch face",
            Self::BasePlate => "Main mounting plate",
        }
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartId {
    type Err = UnknownPartId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPartId(s.to_string()))
    }
}

/// Error returned when parsing an unknown part id string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown part id: {0}")]
pub struct UnknownPartId(pub String);

// ---------------------------------------------------------------------------
// PartInfo / catalog
// ---------------------------------------------------------------------------

/// Catalog entry for the parts-list UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartInfo {
    pub id: PartId,
    pub name: &'static str,
    pub description: &'static str,
}

/// The full part catalog in presentation order.
#[must_use]
pub fn catalog() -> [PartInfo; 12] {
    PartId::ALL.map(|id| PartInfo {
        id,
        name: id.name(),
        description: id.description(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
