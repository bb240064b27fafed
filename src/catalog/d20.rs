//! D20 catalog and canonical mesh (regular icosahedron).

use glam::Vec3;

use super::mapper::Triangle;
use super::FaceNormalEntry;

const PHI: f32 = 1.618_034; // golden ratio

/// The 12 icosahedron vertices: three mutually perpendicular golden
/// rectangles.
fn vertices() -> [Vec3; 12] {
    [
        Vec3::new(-1.0, PHI, 0.0),
        Vec3::new(1.0, PHI, 0.0),
        Vec3::new(-1.0, -PHI, 0.0),
        Vec3::new(1.0, -PHI, 0.0),
        Vec3::new(0.0, -1.0, PHI),
        Vec3::new(0.0, 1.0, PHI),
        Vec3::new(0.0, -1.0, -PHI),
        Vec3::new(0.0, 1.0, -PHI),
        Vec3::new(PHI, 0.0, -1.0),
        Vec3::new(PHI, 0.0, 1.0),
        Vec3::new(-PHI, 0.0, -1.0),
        Vec3::new(-PHI, 0.0, 1.0),
    ]
}

/// The 20 triangular faces by vertex index; face i carries value i + 1.
const FACES: [(usize, usize, usize); 20] = [
    (0, 11, 5),
    (0, 5, 1),
    (0, 1, 7),
    (0, 7, 10),
    (0, 10, 11),
    (1, 5, 9),
    (5, 11, 4),
    (11, 10, 2),
    (10, 7, 6),
    (7, 1, 8),
    (3, 9, 4),
    (3, 4, 2),
    (3, 2, 6),
    (3, 6, 8),
    (3, 8, 9),
    (4, 9, 5),
    (2, 4, 11),
    (6, 2, 10),
    (8, 6, 7),
    (9, 8, 1),
];

pub(super) fn entries() -> Vec<FaceNormalEntry> {
    let verts = vertices();
    FACES
        .iter()
        .enumerate()
        .map(|(i, &(a, b, c))| {
            let center = (verts[a] + verts[b] + verts[c]) / 3.0;
            FaceNormalEntry {
                value: (i + 1) as u32,
                normal: center.normalize(),
            }
        })
        .collect()
}

/// One triangle per face, emitted in value order.
pub(super) fn triangles() -> Vec<Triangle> {
    let verts = vertices();
    FACES
        .iter()
        .map(|&(a, b, c)| {
            let center = (verts[a] + verts[b] + verts[c]) / 3.0;
            Triangle::oriented(verts[a], verts[b], verts[c], center)
        })
        .collect()
}
