//! D10 catalog and canonical mesh (pentagonal trapezohedron).
//!
//! Ten kite-shaped faces: five tilting up toward the top pole carrying the
//! even values, five tilting down carrying the odd values. The pole height
//! is fixed by the planarity condition `T = h * (2 / (1 - cos 36°) - 1)`, so
//! every kite is an exactly planar quad and both of its triangles share one
//! normal.

use std::f32::consts::TAU;

use glam::Vec3;

use super::mapper::Triangle;
use super::FaceNormalEntry;

const RING_RADIUS: f32 = 1.0;
/// Ring half-height chosen so the planarity condition puts the poles at y = ±1.
const RING_HEIGHT: f32 = 0.105_572_81;
const POLE_HEIGHT: f32 = 1.0;
/// |y| / horizontal ratio of a face normal before normalization:
/// `RING_RADIUS * (1 - cos 36°) / (2 * RING_HEIGHT)`.
const NORMAL_SLOPE: f32 = 0.904_508_5;

/// Upper faces read the even values, lower faces the odd ones.
const UPPER_VALUES: [u32; 5] = [0, 2, 4, 6, 8];
const LOWER_VALUES: [u32; 5] = [3, 1, 9, 7, 5];

pub(super) fn entries() -> Vec<FaceNormalEntry> {
    let mut faces = Vec::with_capacity(10);
    for (i, &value) in UPPER_VALUES.iter().enumerate() {
        let angle = i as f32 * TAU / 5.0;
        faces.push(FaceNormalEntry {
            value,
            normal: Vec3::new(angle.cos(), NORMAL_SLOPE, angle.sin()).normalize(),
        });
    }
    for (i, &value) in LOWER_VALUES.iter().enumerate() {
        let angle = i as f32 * TAU / 5.0 + TAU / 10.0;
        faces.push(FaceNormalEntry {
            value,
            normal: Vec3::new(angle.cos(), -NORMAL_SLOPE, angle.sin()).normalize(),
        });
    }
    faces
}

/// Two triangles per kite, kites emitted in catalog order (upper five, then
/// lower five).
pub(super) fn triangles() -> Vec<Triangle> {
    let top = Vec3::new(0.0, POLE_HEIGHT, 0.0);
    let bottom = Vec3::new(0.0, -POLE_HEIGHT, 0.0);

    // Lower ring vertices sit on the upper-face axes; upper ring vertices on
    // the lower-face axes, interleaved by a half step.
    let lower_ring: Vec<Vec3> = (0..5)
        .map(|i| ring_vertex(i as f32 * TAU / 5.0, -RING_HEIGHT))
        .collect();
    let upper_ring: Vec<Vec3> = (0..5)
        .map(|i| ring_vertex(i as f32 * TAU / 5.0 + TAU / 10.0, RING_HEIGHT))
        .collect();

    let normals = entries();
    let mut triangles = Vec::with_capacity(20);

    // Upper kite i: top pole, flanking upper-ring vertices, and the
    // lower-ring vertex on the face axis
    for i in 0..5 {
        let n = normals[i].normal;
        let prev_upper = upper_ring[(i + 4) % 5];
        let axis_lower = lower_ring[i];
        let next_upper = upper_ring[i];
        triangles.push(Triangle::oriented(top, prev_upper, axis_lower, n));
        triangles.push(Triangle::oriented(top, axis_lower, next_upper, n));
    }

    // Lower kite i: bottom pole, flanking lower-ring vertices, and the
    // upper-ring vertex on the face axis
    for i in 0..5 {
        let n = normals[5 + i].normal;
        let prev_lower = lower_ring[i];
        let axis_upper = upper_ring[i];
        let next_lower = lower_ring[(i + 1) % 5];
        triangles.push(Triangle::oriented(bottom, prev_lower, axis_upper, n));
        triangles.push(Triangle::oriented(bottom, axis_upper, next_lower, n));
    }

    triangles
}

fn ring_vertex(angle: f32, y: f32) -> Vec3 {
    Vec3::new(angle.cos() * RING_RADIUS, y, angle.sin() * RING_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kites_are_planar() {
        // Both triangles of every kite must agree on one normal, otherwise
        // the face mapper would split the kite into two faces
        let triangles = triangles();
        for kite in triangles.chunks(2) {
            let dot = kite[0].normal().dot(kite[1].normal());
            assert!(dot > 0.9999, "kite triangles diverge: dot = {dot}");
        }
    }

    #[test]
    fn test_upper_faces_read_even_values() {
        for entry in entries() {
            if entry.normal.y > 0.0 {
                assert_eq!(entry.value % 2, 0);
            } else {
                assert_eq!(entry.value % 2, 1);
            }
        }
    }
}
