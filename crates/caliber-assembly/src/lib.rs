//! caliber-assembly: where every part sits and how it looks.
//!
//! [`layout`] is the static table mapping each part to its base position,
//! explode scale, rotation axis, label anchor, primary shape, and base
//! color. [`style`] resolves selection/highlight emphasis into a color and
//! emissive intensity. [`frame`] combines both with the kinematic model
//! into the per-frame [`RenderFrame`](frame::RenderFrame) the rendering
//! surface consumes: an explicit transform arena indexed by part id
//! rather than scattered scene-graph handles.

pub mod frame;
pub mod layout;
pub mod style;

pub use frame::{FixturePose, LabelTuple, PartPose, RenderFrame};
pub use layout::{Fixture, PartLayout, PartShape, layout, layouts};
pub use style::{Emphasis, ResolvedStyle};
