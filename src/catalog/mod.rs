//! Face-normal catalogs and face-value resolution.
//!
//! Every shape has a static catalog mapping each face value to a unit
//! normal in the die's canonical rest pose. Resolving a settled die rotates
//! each catalog normal by the die's world orientation and picks the value
//! whose normal is most aligned with world up. The catalogs are authored
//! from the canonical meshes via [`mapper`] and never change at runtime.

pub mod mapper;

mod d10;
mod d12;
mod d20;
mod d4;
mod d6;
mod d8;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::types::Shape;
use mapper::Triangle;

/// One face of a die: its value and the unit direction that points straight
/// up when that value is showing, in the die's local rest-pose frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceNormalEntry {
    pub value: u32,
    pub normal: Vec3,
}

/// Alignments within this distance of the maximum count as tied; ties break
/// toward the lowest face value so resolution stays deterministic.
const ALIGNMENT_EPSILON: f32 = 1e-6;

/// The face-normal catalog for a shape: exactly `face_count` entries with a
/// contiguous, duplicate-free value set.
pub fn face_normals(shape: Shape) -> Vec<FaceNormalEntry> {
    match shape {
        Shape::D4 => d4::entries(),
        Shape::D6 => d6::entries(),
        Shape::D8 => d8::entries(),
        Shape::D10 => d10::entries(),
        Shape::D12 => d12::entries(),
        Shape::D20 => d20::entries(),
    }
}

/// The canonical triangulated mesh for a shape, in rest pose. Faces are
/// emitted in catalog order; authoring tools and tests consume this, the
/// runtime resolver never does.
pub fn die_triangles(shape: Shape) -> Vec<Triangle> {
    match shape {
        Shape::D4 => d4::triangles(),
        Shape::D6 => d6::triangles(),
        Shape::D8 => d8::triangles(),
        Shape::D10 => d10::triangles(),
        Shape::D12 => d12::triangles(),
        Shape::D20 => d20::triangles(),
    }
}

/// Face values in catalog order, which is also the order the canonical mesh
/// emits its faces.
pub fn authored_face_values(shape: Shape) -> Vec<u32> {
    face_normals(shape).iter().map(|f| f.value).collect()
}

/// Resolve which face value a die is showing from its world orientation.
///
/// Pure and total: the same `(shape, orientation)` always yields the same
/// value, every catalog entry is considered, and any orientation resolves to
/// some value of the shape.
pub fn resolve_face_value(shape: Shape, orientation: Quat) -> u32 {
    let mut best_value = u32::MAX;
    let mut best_alignment = f32::NEG_INFINITY;

    for entry in &face_normals(shape) {
        let alignment = (orientation * entry.normal).dot(Vec3::Y);
        let better = alignment > best_alignment + ALIGNMENT_EPSILON
            || ((alignment - best_alignment).abs() <= ALIGNMENT_EPSILON
                && entry.value < best_value);
        if better {
            best_alignment = alignment;
            best_value = entry.value;
        }
    }

    best_value
}
