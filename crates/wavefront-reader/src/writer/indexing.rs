//! Vertex deduplication and quad triangulation for indexed writer input

use crate::error::{Result, WavefrontError};
use crate::options::Tolerance;

/// Collapse repeated positions into a compact pool
///
/// Takes groups of positions (one group per wall/face) and returns the pool of
/// distinct positions plus, for every input group, the pool index of each of
/// its positions. A position joins the first pool entry it is close to under
/// `tolerance`; otherwise it is appended.
#[must_use = "returns the deduplicated pool and per-group indices"]
pub fn face_index(
    groups: &[Vec<[f64; 3]>],
    tolerance: &Tolerance,
) -> (Vec<[f64; 3]>, Vec<Vec<usize>>) {
    let mut pool: Vec<[f64; 3]> = Vec::new();

    let indices = groups
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|vert| {
                    pool.iter()
                        .position(|known| tolerance.rows_close(vert, known))
                        .unwrap_or_else(|| {
                            pool.push(*vert);
                            pool.len() - 1
                        })
                })
                .collect()
        })
        .collect();

    (pool, indices)
}

/// Split quads into triangles
///
/// Quad `[a, b, c, d]` becomes `[a, b, c]` and `[b, c, d]`: the two
/// overlapping windows of three starting at offsets 0 and 1. Triangles
/// `2k` and `2k + 1` come from quad `k`.
///
/// # Errors
///
/// Returns `NotQuads` if any group does not have exactly four indices.
pub fn fan_triangulate(quads: &[Vec<usize>]) -> Result<Vec<[usize; 3]>> {
    let mut triangles = Vec::with_capacity(quads.len() * 2);

    for (group, quad) in quads.iter().enumerate() {
        let &[a, b, c, d] = quad.as_slice() else {
            return Err(WavefrontError::NotQuads {
                group,
                found: quad.len(),
            });
        };
        triangles.push([a, b, c]);
        triangles.push([b, c, d]);
    }

    Ok(triangles)
}
