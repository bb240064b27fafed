//! Geometry face mapper
//!
//! Authoring-time derivation of face catalogs from triangulated meshes, so
//! that the numbering painted on a die's faces and the numbering reported by
//! face detection can never disagree. Nothing here runs at runtime: the
//! derived tables are baked into the per-shape catalog modules, and the
//! `gen_face_catalog` tool re-derives and validates them.

use glam::Vec3;
use serde::Serialize;
use thiserror::Error;

use crate::types::Shape;

use super::{authored_face_values, die_triangles, FaceNormalEntry};

/// Triangles whose unit normals agree closer than this dot product belong to
/// the same face (multi-triangle faces: cube quads, d10 kites, d12 pentagon
/// fans). Adjacent faces on every supported shape are separated by far more.
const CLUSTER_TOLERANCE: f32 = 0.999;

/// One mesh triangle, wound so that its geometric normal points outward.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Build a triangle wound so its normal points along `outward`.
    pub fn oriented(a: Vec3, b: Vec3, c: Vec3, outward: Vec3) -> Self {
        let t = Self { a, b, c };
        if t.normal().dot(outward) < 0.0 {
            Self { a, b: c, c: b }
        } else {
            t
        }
    }

    /// Outward unit normal via the winding convention.
    pub fn normal(&self) -> Vec3 {
        (self.b - self.a).cross(self.c - self.a).normalize()
    }
}

/// Catalog data derived from a mesh: one entry per distinct face value, plus
/// the triangle-index to face-value table that drives per-face material and
/// texture assignment.
#[derive(Debug, Clone, Serialize)]
pub struct FaceMap {
    pub entries: Vec<FaceNormalEntry>,
    pub triangle_values: Vec<u32>,
}

/// Authoring-time integrity error: the mesh and value assignment did not
/// produce a complete, duplicate-free face-value set. A shape whose
/// derivation fails must not ship a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FaceMapError {
    #[error("mesh clustered into {found} faces, expected {expected}")]
    FaceCountMismatch { expected: usize, found: usize },

    #[error("face values missing from the derived catalog: {0:?}")]
    MissingValues(Vec<u32>),

    #[error("duplicate face values in the derived catalog: {0:?}")]
    DuplicateValues(Vec<u32>),
}

/// Derive a face map from a triangulated mesh and an authored value
/// sequence.
///
/// Triangles are clustered by coincident outward normals; cluster `i` (in
/// first-appearance order) is assigned `values[i]`, so the mesh must emit
/// its faces in the same order the values are listed. Every triangle of a
/// cluster shares that cluster's value in the triangle table.
pub fn derive_face_map(triangles: &[Triangle], values: &[u32]) -> Result<FaceMap, FaceMapError> {
    let duplicates = duplicate_values(values);
    if !duplicates.is_empty() {
        return Err(FaceMapError::DuplicateValues(duplicates));
    }

    // Cluster by normal coincidence, preserving first-appearance order
    let mut clusters: Vec<(Vec3, Vec<usize>)> = Vec::new();
    for (index, triangle) in triangles.iter().enumerate() {
        let normal = triangle.normal();
        match clusters
            .iter_mut()
            .find(|(rep, _)| rep.dot(normal) > CLUSTER_TOLERANCE)
        {
            Some((_, members)) => members.push(index),
            None => clusters.push((normal, vec![index])),
        }
    }

    if clusters.len() > values.len() {
        return Err(FaceMapError::FaceCountMismatch {
            expected: values.len(),
            found: clusters.len(),
        });
    }
    if clusters.len() < values.len() {
        return Err(FaceMapError::MissingValues(values[clusters.len()..].to_vec()));
    }

    let mut triangle_values = vec![0u32; triangles.len()];
    let mut entries = Vec::with_capacity(clusters.len());
    for ((normal, members), &value) in clusters.iter().zip(values) {
        entries.push(FaceNormalEntry {
            value,
            normal: *normal,
        });
        for &member in members {
            triangle_values[member] = value;
        }
    }

    Ok(FaceMap {
        entries,
        triangle_values,
    })
}

/// Derive and validate the catalog for a shape from its canonical mesh.
///
/// The emitted value set must equal the shape's full value range; anything
/// else is a hard authoring error naming the offending values.
pub fn derive_catalog(shape: Shape) -> Result<FaceMap, FaceMapError> {
    let triangles = die_triangles(shape);
    let values = authored_face_values(shape);
    let mut map = derive_face_map(&triangles, &values)?;

    if shape == Shape::D4 {
        // A d4 is read at the top vertex: its catalog stores the apex
        // direction for each value, the negation of the resting face's
        // outward normal.
        for entry in &mut map.entries {
            entry.normal = -entry.normal;
        }
    }

    validate_value_set(shape, &map.entries)?;
    Ok(map)
}

/// Check that `entries` covers exactly the shape's value range.
fn validate_value_set(shape: Shape, entries: &[FaceNormalEntry]) -> Result<(), FaceMapError> {
    let emitted: Vec<u32> = entries.iter().map(|e| e.value).collect();

    let duplicates = duplicate_values(&emitted);
    if !duplicates.is_empty() {
        return Err(FaceMapError::DuplicateValues(duplicates));
    }

    let missing: Vec<u32> = shape.values().filter(|v| !emitted.contains(v)).collect();
    if !missing.is_empty() {
        return Err(FaceMapError::MissingValues(missing));
    }

    // Emitted values outside the shape's range leave a gap of equal size, so
    // the missing-value check above already rejects them.
    Ok(())
}

fn duplicate_values(values: &[u32]) -> Vec<u32> {
    let mut duplicates: Vec<u32> = values
        .iter()
        .enumerate()
        .filter(|&(i, v)| values[..i].contains(v))
        .map(|(_, v)| *v)
        .collect();
    duplicates.sort_unstable();
    duplicates.dedup();
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::face_normals;

    #[test]
    fn test_triangle_normal_follows_winding() {
        let up = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Z);
        assert!(up.normal().dot(Vec3::NEG_Y) > 0.99);

        let flipped = Triangle::oriented(Vec3::ZERO, Vec3::X, Vec3::Z, Vec3::Y);
        assert!(flipped.normal().dot(Vec3::Y) > 0.99);
    }

    #[test]
    fn test_derive_catalog_succeeds_for_every_shape() {
        for shape in Shape::ALL {
            let map = derive_catalog(shape).unwrap_or_else(|e| {
                panic!("catalog derivation failed for {shape}: {e}");
            });
            assert_eq!(map.entries.len(), shape.face_count());
            assert_eq!(map.triangle_values.len(), crate::catalog::die_triangles(shape).len());
        }
    }

    #[test]
    fn test_derived_entries_match_static_catalog() {
        for shape in Shape::ALL {
            let derived = derive_catalog(shape).unwrap();
            let cataloged = face_normals(shape);
            for (d, c) in derived.entries.iter().zip(&cataloged) {
                assert_eq!(d.value, c.value, "{shape} value order diverged");
                assert!(
                    d.normal.dot(c.normal) > 0.9999,
                    "{shape} face {} normal diverged: derived {:?}, cataloged {:?}",
                    d.value,
                    d.normal,
                    c.normal
                );
            }
        }
    }

    #[test]
    fn test_every_triangle_is_labeled() {
        for shape in Shape::ALL {
            let map = derive_catalog(shape).unwrap();
            for value in &map.triangle_values {
                assert!(
                    shape.values().contains(value),
                    "{shape} triangle labeled with out-of-range value {value}"
                );
            }
        }
    }

    #[test]
    fn test_multi_triangle_faces_share_one_value() {
        // A cube face is two triangles; both must carry the face's value
        let map = derive_catalog(Shape::D6).unwrap();
        assert_eq!(map.triangle_values.len(), 12);
        for value in 1..=6u32 {
            let count = map.triangle_values.iter().filter(|&&v| v == value).count();
            assert_eq!(count, 2, "cube face {value} should own exactly 2 triangles");
        }
    }

    #[test]
    fn test_duplicate_values_are_rejected() {
        let triangles = crate::catalog::die_triangles(Shape::D4);
        let err = derive_face_map(&triangles, &[1, 2, 2, 3]).unwrap_err();
        assert_eq!(err, FaceMapError::DuplicateValues(vec![2]));
    }

    #[test]
    fn test_missing_values_are_reported() {
        // Hand the mapper a mesh with one face chopped off
        let mut triangles = crate::catalog::die_triangles(Shape::D8);
        triangles.pop();
        let err = derive_face_map(&triangles, &crate::catalog::authored_face_values(Shape::D8))
            .unwrap_err();
        assert_eq!(err, FaceMapError::MissingValues(vec![8]));
    }

    #[test]
    fn test_too_many_clusters_are_reported() {
        // An extra stray triangle forms an eleventh cluster on a d10
        let mut triangles = crate::catalog::die_triangles(Shape::D10);
        triangles.push(Triangle::new(
            Vec3::new(5.0, 5.0, 5.0),
            Vec3::new(6.0, 5.0, 5.0),
            Vec3::new(5.0, 6.0, 5.0),
        ));
        let err = derive_face_map(&triangles, &crate::catalog::authored_face_values(Shape::D10))
            .unwrap_err();
        assert_eq!(
            err,
            FaceMapError::FaceCountMismatch {
                expected: 10,
                found: 11
            }
        );
    }

    #[test]
    fn test_error_messages_name_the_values() {
        let msg = FaceMapError::MissingValues(vec![7, 8]).to_string();
        assert!(msg.contains('7') && msg.contains('8'), "got: {msg}");

        let msg = FaceMapError::DuplicateValues(vec![3]).to_string();
        assert!(msg.contains('3'), "got: {msg}");
    }
}
