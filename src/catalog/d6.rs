//! D6 catalog and canonical mesh. Opposite faces sum to 7.

use glam::Vec3;

use super::mapper::Triangle;
use super::FaceNormalEntry;

const HALF_EXTENT: f32 = 0.5;

pub(super) fn entries() -> Vec<FaceNormalEntry> {
    [
        (1, Vec3::NEG_Y),
        (2, Vec3::Z),
        (3, Vec3::X),
        (4, Vec3::NEG_X),
        (5, Vec3::NEG_Z),
        (6, Vec3::Y),
    ]
    .into_iter()
    .map(|(value, normal)| FaceNormalEntry { value, normal })
    .collect()
}

/// Two triangles per face, emitted in value order.
pub(super) fn triangles() -> Vec<Triangle> {
    entries()
        .iter()
        .flat_map(|entry| face_quad(entry.normal))
        .collect()
}

fn face_quad(normal: Vec3) -> [Triangle; 2] {
    // Build an orthonormal basis in the face plane
    let seed = if normal.y.abs() > 0.5 { Vec3::X } else { Vec3::Y };
    let w = normal.cross(seed).normalize();
    let u = w.cross(normal);

    let center = normal * HALF_EXTENT;
    let a = center + (u + w) * HALF_EXTENT;
    let b = center + (w - u) * HALF_EXTENT;
    let c = center - (u + w) * HALF_EXTENT;
    let d = center + (u - w) * HALF_EXTENT;

    [
        Triangle::oriented(a, b, c, normal),
        Triangle::oriented(a, c, d, normal),
    ]
}
