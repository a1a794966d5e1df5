//! Gear mesh extrusion.
//!
//! Extrudes a [`gear_outline`] in the XZ plane along +Y into an indexed
//! triangle mesh with a small chamfer bevel on each face, so a
//! vertical-axis spin is a plain Y rotation of the entity. Face caps are
//! fan-triangulated about the axis, which is valid because the outline is
//! star-shaped around the origin.

#![allow(clippy::cast_precision_loss)]

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, Mesh, PrimitiveTopology};

use crate::gear::{GearSpec, gear_outline};

/// Bevel depth along the extrusion axis.
pub const BEVEL_DEPTH: f32 = 0.02;
/// Bevel inset toward the axis.
pub const BEVEL_SIZE: f32 = 0.02;
/// Chamfer segments per face.
pub const BEVEL_SEGMENTS: u32 = 2;

// ---------------------------------------------------------------------------
// gear_mesh
// ---------------------------------------------------------------------------

/// Build the extruded, beveled gear mesh for `spec`.
///
/// Deterministic: identical specs produce byte-identical vertex buffers.
#[must_use]
pub fn gear_mesh(spec: &GearSpec) -> Mesh {
    let outline = gear_outline(spec);
    let m = outline.len();
    let half = spec.thickness() * 0.5;

    // Ring parameters from top cap to bottom cap: (inset, y).
    let mut rings: Vec<(f32, f32)> = Vec::with_capacity(2 * (BEVEL_SEGMENTS as usize + 1));
    for k in (0..=BEVEL_SEGMENTS).rev() {
        let f = k as f32 / BEVEL_SEGMENTS as f32;
        rings.push((BEVEL_SIZE * f, half + BEVEL_DEPTH * f));
    }
    for k in 0..=BEVEL_SEGMENTS {
        let f = k as f32 / BEVEL_SEGMENTS as f32;
        rings.push((BEVEL_SIZE * f, -half - BEVEL_DEPTH * f));
    }
    let ring_count = rings.len();

    // Ring vertices: the outline shrunk radially by the ring's inset.
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(ring_count * m + 2);
    for &(inset, y) in &rings {
        for p in &outline {
            let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
            let scale = (r - inset) / r;
            positions.push([p[0] * scale, y, p[1] * scale]);
        }
    }
    // Cap centers.
    let top_center = positions.len() as u32;
    positions.push([0.0, half + BEVEL_DEPTH, 0.0]);
    let bottom_center = positions.len() as u32;
    positions.push([0.0, -half - BEVEL_DEPTH, 0.0]);

    let ring = |r: usize, i: usize| (r * m + i % m) as u32;

    let mut indices: Vec<u32> = Vec::new();
    // Top cap fan (+Y facing).
    for i in 0..m {
        indices.extend([top_center, ring(0, i + 1), ring(0, i)]);
    }
    // Bevel and wall bands, top ring to bottom ring.
    for r in 0..ring_count - 1 {
        for i in 0..m {
            indices.extend([ring(r, i), ring(r, i + 1), ring(r + 1, i + 1)]);
            indices.extend([ring(r, i), ring(r + 1, i + 1), ring(r + 1, i)]);
        }
    }
    // Bottom cap fan (-Y facing).
    for i in 0..m {
        indices.extend([bottom_center, ring(ring_count - 1, i), ring(ring_count - 1, i + 1)]);
    }

    let normals = smooth_normals(&positions, &indices);

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// Per-vertex normals accumulated from adjacent face normals.
fn smooth_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut accum = vec![[0.0f32; 3]; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [
            positions[tri[0] as usize],
            positions[tri[1] as usize],
            positions[tri[2] as usize],
        ];
        let e1 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let e2 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
        let face = [
            e1[1] * e2[2] - e1[2] * e2[1],
            e1[2] * e2[0] - e1[0] * e2[2],
            e1[0] * e2[1] - e1[1] * e2[0],
        ];
        for &idx in tri {
            let n = &mut accum[idx as usize];
            n[0] += face[0];
            n[1] += face[1];
            n[2] += face[2];
        }
    }

    accum
        .into_iter()
        .map(|n| {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            if len > 1e-6 {
                [n[0] / len, n[1] / len, n[2] / len]
            } else {
                [0.0, 1.0, 0.0]
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::mesh::VertexAttributeValues;

    fn positions_of(mesh: &Mesh) -> Vec<[f32; 3]> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(p)) => p.clone(),
            _ => panic!("expected Float32x3 positions"),
        }
    }

    #[test]
    fn mesh_has_expected_vertex_count() {
        let spec = GearSpec::new(0.6, 15, 0.1).unwrap();
        let mesh = gear_mesh(&spec);
        // 6 rings of 4 points per tooth, plus two cap centers.
        let expected = 6 * 15 * 4 + 2;
        assert_eq!(positions_of(&mesh).len(), expected);
    }

    #[test]
    fn mesh_is_deterministic() {
        let spec = GearSpec::new(1.2, 28, 0.2).unwrap();
        let a = positions_of(&gear_mesh(&spec));
        let b = positions_of(&gear_mesh(&spec));
        assert_eq!(a, b);
    }

    #[test]
    fn mesh_indices_in_range() {
        let spec = GearSpec::new(0.8, 20, 0.15).unwrap();
        let mesh = gear_mesh(&spec);
        let count = positions_of(&mesh).len() as u32;
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("expected u32 indices");
        };
        assert_eq!(indices.len() % 3, 0);
        assert!(indices.iter().all(|&i| i < count));
    }

    #[test]
    fn mesh_normals_are_unit_length() {
        let spec = GearSpec::new(1.0, 24, 0.15).unwrap();
        let mesh = gear_mesh(&spec);
        let Some(VertexAttributeValues::Float32x3(normals)) =
            mesh.attribute(Mesh::ATTRIBUTE_NORMAL)
        else {
            panic!("expected Float32x3 normals");
        };
        for n in normals {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn mesh_spans_thickness_plus_bevel() {
        let spec = GearSpec::new(1.0, 20, 0.2).unwrap();
        let positions = positions_of(&gear_mesh(&spec));
        let max_y = positions.iter().map(|p| p[1]).fold(f32::MIN, f32::max);
        let min_y = positions.iter().map(|p| p[1]).fold(f32::MAX, f32::min);
        assert!((max_y - (0.1 + BEVEL_DEPTH)).abs() < 1e-6);
        assert!((min_y + (0.1 + BEVEL_DEPTH)).abs() < 1e-6);
    }

    #[test]
    fn mesh_radius_reaches_tooth_tips() {
        let spec = GearSpec::new(1.0, 20, 0.1).unwrap();
        let positions = positions_of(&gear_mesh(&spec));
        let max_r = positions
            .iter()
            .map(|p| (p[0] * p[0] + p[2] * p[2]).sqrt())
            .fold(f32::MIN, f32::max);
        // Tip radius on the un-inset rings.
        assert!((max_r - 1.15).abs() < 1e-4);
    }
}
