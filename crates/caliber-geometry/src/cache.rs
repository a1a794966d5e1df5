//! Memoization of derived gear geometry.
//!
//! Gear outlines and meshes are invariant for a given spec, so both caches
//! are write-once per key and never invalidated for the life of the
//! process.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::gear::{GearKey, GearSpec, gear_outline};
use crate::mesh::gear_mesh;

// ---------------------------------------------------------------------------
// OutlineCache
// ---------------------------------------------------------------------------

/// Lazy cache of 2D gear outlines keyed by spec.
#[derive(Debug, Clone, Default)]
pub struct OutlineCache {
    outlines: HashMap<GearKey, Vec<[f32; 2]>>,
}

impl OutlineCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Outline for `spec`, generated on first request and reused after.
    pub fn outline(&mut self, spec: &GearSpec) -> &[[f32; 2]] {
        self.outlines
            .entry(spec.key())
            .or_insert_with(|| gear_outline(spec))
    }

    /// Number of distinct specs generated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outlines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty()
    }
}

// ---------------------------------------------------------------------------
// GearMeshLibrary
// ---------------------------------------------------------------------------

/// Resource mapping gear specs to mesh asset handles.
///
/// Each distinct spec is extruded once; later requests return a clone of
/// the stored handle.
#[derive(Resource, Debug, Clone, Default)]
pub struct GearMeshLibrary {
    handles: HashMap<GearKey, Handle<Mesh>>,
}

impl GearMeshLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for the mesh of `spec`, building and registering it on first
    /// request.
    pub fn handle(&mut self, spec: &GearSpec, meshes: &mut Assets<Mesh>) -> Handle<Mesh> {
        self.handles
            .entry(spec.key())
            .or_insert_with(|| meshes.add(gear_mesh(spec)))
            .clone()
    }

    /// Number of distinct gear meshes built so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
