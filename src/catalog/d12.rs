//! D12 catalog and canonical mesh (regular dodecahedron).

use glam::Vec3;

use super::mapper::Triangle;
use super::FaceNormalEntry;

const PHI: f32 = 1.618_034; // golden ratio
const INV_PHI: f32 = 0.618_034;

const A: f32 = 0.525_731_1; // 1/sqrt(phi + 2)
const B: f32 = 0.850_650_8; // phi/sqrt(phi + 2)

/// A face's five vertices project onto its normal well above this cutoff;
/// every other vertex projects well below it.
const FACE_PLANE_CUTOFF: f32 = 1.2;

pub(super) fn entries() -> Vec<FaceNormalEntry> {
    [
        (1, Vec3::new(0.0, B, A)),
        (2, Vec3::new(0.0, B, -A)),
        (3, Vec3::new(0.0, -B, A)),
        (4, Vec3::new(0.0, -B, -A)),
        (5, Vec3::new(A, 0.0, B)),
        (6, Vec3::new(-A, 0.0, B)),
        (7, Vec3::new(A, 0.0, -B)),
        (8, Vec3::new(-A, 0.0, -B)),
        (9, Vec3::new(B, A, 0.0)),
        (10, Vec3::new(-B, A, 0.0)),
        (11, Vec3::new(B, -A, 0.0)),
        (12, Vec3::new(-B, -A, 0.0)),
    ]
    .into_iter()
    .map(|(value, normal)| FaceNormalEntry { value, normal })
    .collect()
}

/// The 20 dodecahedron vertices: a cube plus three mutually perpendicular
/// golden rectangles.
fn vertices() -> Vec<Vec3> {
    let mut verts = Vec::with_capacity(20);
    for sx in [-1.0f32, 1.0] {
        for sy in [-1.0f32, 1.0] {
            for sz in [-1.0f32, 1.0] {
                verts.push(Vec3::new(sx, sy, sz));
            }
        }
    }
    for s0 in [-1.0f32, 1.0] {
        for s1 in [-1.0f32, 1.0] {
            verts.push(Vec3::new(0.0, s0 * INV_PHI, s1 * PHI));
            verts.push(Vec3::new(s0 * INV_PHI, s1 * PHI, 0.0));
            verts.push(Vec3::new(s0 * PHI, 0.0, s1 * INV_PHI));
        }
    }
    verts
}

/// Five fan triangles per pentagonal face, faces emitted in value order.
///
/// Each face's ring is recovered from the vertex set: the five vertices that
/// project onto the face normal above the face-plane cutoff, ordered by
/// angle around the face axis.
pub(super) fn triangles() -> Vec<Triangle> {
    let verts = vertices();
    let mut triangles = Vec::with_capacity(60);

    for entry in entries() {
        let n = entry.normal;
        let mut ring: Vec<Vec3> = verts
            .iter()
            .copied()
            .filter(|v| v.dot(n) > FACE_PLANE_CUTOFF)
            .collect();

        // Order the pentagon's vertices around the face axis
        let seed = if n.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
        let u = n.cross(seed).normalize();
        let w = n.cross(u);
        ring.sort_by(|p, q| {
            let pa = p.dot(w).atan2(p.dot(u));
            let qa = q.dot(w).atan2(q.dot(u));
            pa.total_cmp(&qa)
        });

        let center = ring.iter().copied().sum::<Vec3>() / ring.len() as f32;
        for i in 0..ring.len() {
            let next = (i + 1) % ring.len();
            triangles.push(Triangle::oriented(center, ring[i], ring[next], n));
        }
    }

    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_face_ring_has_five_vertices() {
        let verts = vertices();
        for entry in entries() {
            let count = verts
                .iter()
                .filter(|v| v.dot(entry.normal) > FACE_PLANE_CUTOFF)
                .count();
            assert_eq!(count, 5, "face {} ring has {count} vertices", entry.value);
        }
    }

    #[test]
    fn test_fan_triangles_are_coplanar() {
        for (i, triangle) in triangles().iter().enumerate() {
            let face = entries()[i / 5];
            let dot = triangle.normal().dot(face.normal);
            assert!(
                dot > 0.9999,
                "triangle {i} of face {} is off-plane: dot = {dot}",
                face.value
            );
        }
    }
}
