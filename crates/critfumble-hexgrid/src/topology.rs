//! Distance, adjacency and area queries.
//!
//! Every query converts to cube space first. Subtracting offset coordinates
//! directly gives wrong answers across rows of different parity.

use crate::coords::{CubeCoord, OffsetCoord};

/// Ranges and radii past the supported extent are clamped to it.
#[inline]
const fn clamp_radius(range: u32) -> u32 {
    let limit = OffsetCoord::LIMIT.unsigned_abs();
    if range > limit {
        limit
    } else {
        range
    }
}

/// Number of cells exactly `radius` steps from a center.
///
/// - Radius 0: 1 cell (the center)
/// - Radius n > 0: 6n cells
///
/// Radii past [`OffsetCoord::LIMIT`] count as the limit, like [`hex_ring`].
#[inline]
pub const fn cells_in_ring(radius: u32) -> usize {
    if radius == 0 {
        1
    } else {
        6 * clamp_radius(radius) as usize
    }
}

/// Number of cells within `range` steps of a center, inclusive.
///
/// Formula: 3r² + 3r + 1, with `r` clamped like [`hex_range`].
#[inline]
pub const fn cells_in_range(range: u32) -> usize {
    let r = clamp_radius(range) as usize;
    3 * r * r + 3 * r + 1
}

/// Steps between two cells.
pub fn hex_distance(a: OffsetCoord, b: OffsetCoord) -> u32 {
    a.to_cube().distance(&b.to_cube())
}

/// The six adjacent cells, always in the same order:
/// `(+1,0,-1), (+1,-1,0), (0,-1,+1), (-1,0,+1), (-1,+1,0), (0,+1,-1)` in cube
/// space.
pub fn hex_neighbors(hex: OffsetCoord) -> [OffsetCoord; 6] {
    hex.to_cube().neighbors().map(CubeCoord::to_offset)
}

/// Every cell within `range` steps of `center`, inclusive.
///
/// Enumerated column by column in cube space, so the order is stable. A range
/// of 0 yields just the center. Ranges past [`OffsetCoord::LIMIT`] are
/// clamped to it.
pub fn hex_range(center: OffsetCoord, range: u32) -> Vec<OffsetCoord> {
    let center = center.to_cube();
    let n = clamp_radius(range) as i32;
    let mut cells = Vec::with_capacity(cells_in_range(range));

    for dq in -n..=n {
        let lo = (-n).max(-dq - n);
        let hi = n.min(-dq + n);
        for dr in lo..=hi {
            cells.push((center + CubeCoord::new(dq, dr)).to_offset());
        }
    }

    cells
}

/// Cells exactly `radius` steps from `center`.
///
/// Starts at the cell `radius` steps in direction 4 and walks the six edges
/// in direction order. Radii past [`OffsetCoord::LIMIT`] are clamped to it.
pub fn hex_ring(center: OffsetCoord, radius: u32) -> Vec<OffsetCoord> {
    if radius == 0 {
        return vec![center];
    }

    let n = clamp_radius(radius) as i32;
    let mut cells = Vec::with_capacity(cells_in_ring(radius));
    let mut cursor = center.to_cube() + CubeCoord::DIRECTIONS[4] * n;

    for dir in CubeCoord::DIRECTIONS {
        for _ in 0..n {
            cells.push(cursor.to_offset());
            cursor = cursor + dir;
        }
    }

    cells
}
