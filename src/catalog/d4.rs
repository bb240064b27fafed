//! D4 catalog and canonical mesh.
//!
//! A d4 rests on a face and its result is read at the top vertex, so each
//! catalog entry stores the apex direction for its value: the direction
//! that points straight up when that value is rolled. The resting face's
//! outward normal is the negated entry normal.

use glam::Vec3;

use super::mapper::Triangle;
use super::FaceNormalEntry;

const S: f32 = 0.577_350_3; // 1/sqrt(3)

/// Tetrahedron vertices; vertex i carries value i + 1.
fn vertices() -> [Vec3; 4] {
    [
        Vec3::new(S, S, S),
        Vec3::new(S, -S, -S),
        Vec3::new(-S, S, -S),
        Vec3::new(-S, -S, S),
    ]
}

pub(super) fn entries() -> Vec<FaceNormalEntry> {
    vertices()
        .iter()
        .enumerate()
        .map(|(i, v)| FaceNormalEntry {
            value: (i + 1) as u32,
            normal: *v,
        })
        .collect()
}

/// One triangle per face, emitted in value order; face i is the one opposite
/// vertex i.
pub(super) fn triangles() -> Vec<Triangle> {
    let v = vertices();
    (0..4)
        .map(|i| {
            let others: Vec<Vec3> = (0..4).filter(|&j| j != i).map(|j| v[j]).collect();
            Triangle::oriented(others[0], others[1], others[2], -v[i])
        })
        .collect()
}
