//! D8 catalog and canonical mesh. Opposite faces sum to 9.

use glam::Vec3;

use super::mapper::Triangle;
use super::FaceNormalEntry;

const S: f32 = 0.577_350_3; // 1/sqrt(3)
const APEX: f32 = 0.5;

pub(super) fn entries() -> Vec<FaceNormalEntry> {
    [
        (1, Vec3::new(S, S, S)),
        (2, Vec3::new(-S, S, S)),
        (3, Vec3::new(S, S, -S)),
        (4, Vec3::new(-S, S, -S)),
        (5, Vec3::new(S, -S, S)),
        (6, Vec3::new(-S, -S, S)),
        (7, Vec3::new(S, -S, -S)),
        (8, Vec3::new(-S, -S, -S)),
    ]
    .into_iter()
    .map(|(value, normal)| FaceNormalEntry { value, normal })
    .collect()
}

/// One triangle per octant face, emitted in value order.
pub(super) fn triangles() -> Vec<Triangle> {
    entries()
        .iter()
        .map(|entry| {
            let n = entry.normal;
            Triangle::oriented(
                Vec3::new(n.x.signum() * APEX, 0.0, 0.0),
                Vec3::new(0.0, n.y.signum() * APEX, 0.0),
                Vec3::new(0.0, 0.0, n.z.signum() * APEX),
                n,
            )
        })
        .collect()
}
