//! caliber-geometry: procedural gear geometry.
//!
//! A gear is described by a [`GearSpec`](gear::GearSpec) (radius, tooth
//! count, thickness). [`gear_outline`](gear::gear_outline) samples a closed
//! trapezoidal-tooth polygon around the pitch circle, and
//! [`gear_mesh`](mesh::gear_mesh) extrudes it into a beveled Bevy mesh.
//! Both are deterministic and side-effect-free, so outputs are memoized by
//! spec: [`OutlineCache`](cache::OutlineCache) for outlines,
//! [`GearMeshLibrary`](cache::GearMeshLibrary) for mesh asset handles.

pub mod cache;
pub mod gear;
pub mod mesh;

pub use cache::{GearMeshLibrary, OutlineCache};
pub use gear::{GearSpec, gear_outline, presets};
pub use mesh::gear_mesh;
