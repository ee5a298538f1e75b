//! Triangle extraction from geometry records

use crate::foundation::logging::warn;
use crate::foundation::math::Vec3;
use crate::nif::GeometryData;
use crate::physics::collision::Triangle;

/// Triangles of a geometry record in the record's local space
///
/// Absent or empty data yields nothing. Triangles referring to missing
/// vertices are dropped.
pub(super) fn extract_triangles(data: &GeometryData, name: &str) -> Vec<Triangle> {
    let vertices = data.vertices();
    if vertices.is_empty() {
        return Vec::new();
    }

    let indices: Vec<[u16; 3]> = match data {
        GeometryData::TriShape { triangles, .. } => triangles
            .chunks_exact(3)
            .map(|chunk| [chunk[0], chunk[1], chunk[2]])
            .collect(),
        GeometryData::TriStrips { strips, .. } => strips.iter().flat_map(|strip| strip_triangles(strip)).collect(),
    };

    let mut skipped = 0usize;
    let triangles: Vec<Triangle> = indices
        .into_iter()
        .filter_map(|[a, b, c]| {
            let triangle = match (vertices.get(usize::from(a)), vertices.get(usize::from(b)), vertices.get(usize::from(c))) {
                (Some(v0), Some(v1), Some(v2)) => Some(Triangle::new(*v0, *v1, *v2)),
                _ => None,
            };
            if triangle.is_none() {
                skipped += 1;
            }
            triangle
        })
        .collect();

    if skipped > 0 {
        warn!(
            "Geometry '{}': skipped {} triangle(s) with vertex indices beyond {} vertices",
            name,
            skipped,
            vertices.len()
        );
    }
    triangles
}

/// Expand one strip with alternating winding
///
/// Strips shorter than three indices produce nothing. Triangles repeating an
/// index are stitching degenerates and are dropped.
pub(super) fn strip_triangles(strip: &[u16]) -> impl Iterator<Item = [u16; 3]> + '_ {
    strip.windows(3).enumerate().filter_map(|(i, window)| {
        let (a, b, c) = (window[0], window[1], window[2]);
        if a == b || b == c || a == c {
            return None;
        }
        // Position of the last index in the strip is i + 2, same parity as i
        if i % 2 == 0 {
            Some([a, b, c])
        } else {
            Some([a, c, b])
        }
    })
}

/// Move every vertex of `triangles` with `f`
pub(super) fn transform_triangles(triangles: &[Triangle], f: impl Fn(&Vec3) -> Vec3) -> Vec<Triangle> {
    triangles.iter().map(|triangle| triangle.map(&f)).collect()
}
