//! caliber-kinematics: the closed-form kinematic model of the movement.
//!
//! Every moving part's rotation angle is a pure function of elapsed
//! simulated seconds: sinusoids for the oscillating regulator, a stepped
//! function for the escape wheel, and linear angular rates fixed by the
//! watch-train gear ratios. No hidden state, no randomness; the whole
//! animation is replayable from a single scalar.
//!
//! # Example
//!
//! ```
//! use caliber_core::part::PartId;
//! use caliber_kinematics::train;
//!
//! // One full revolution of the seconds wheel takes 10 simulated seconds.
//! let angle = train::angle(PartId::SecondHand, 10.0).unwrap();
//! assert!((angle + std::f64::consts::TAU).abs() < 1e-9);
//! ```

pub mod train;

pub use train::{RotationAxis, angle};
