//! Line drawing, line of sight and field of view.

use crate::blocked::BlockedSet;
use crate::coords::{FractionalCube, OffsetCoord};
use crate::topology::{hex_distance, hex_range};

/// Cells on the straight line from `start` to `end`, both included.
///
/// Samples `distance + 1` evenly spaced points between the two centers and
/// snaps each to a cell with [`FractionalCube::round`]. Consecutive cells are
/// always adjacent.
pub fn hex_line(start: OffsetCoord, end: OffsetCoord) -> Vec<OffsetCoord> {
    let n = hex_distance(start, end);
    if n == 0 {
        return vec![start];
    }

    let a = start.to_axial();
    let b = end.to_axial();
    let (dq, dr) = ((b.q - a.q) as f64, (b.r - a.r) as f64);

    (0..=n)
        .map(|i| {
            let t = i as f64 / n as f64;
            let q = a.q as f64 + dq * t;
            let r = a.r as f64 + dr * t;
            FractionalCube::from_axial(q, r).round().to_offset()
        })
        .collect()
}

/// Whether `end` can be seen from `start`.
///
/// Only cells strictly between the two can block; a blocked viewer or target
/// cell does not.
pub fn has_line_of_sight(start: OffsetCoord, end: OffsetCoord, blocked: &BlockedSet) -> bool {
    let line = hex_line(start, end);
    if line.len() <= 2 {
        return true;
    }
    !line[1..line.len() - 1].iter().any(|c| blocked.contains(c))
}

/// Cells within `range` of `origin` that `origin` can see.
///
/// Returned in [`hex_range`] order. The origin is always included.
pub fn hex_field_of_view(
    origin: OffsetCoord,
    range: u32,
    blocked: &BlockedSet,
) -> Vec<OffsetCoord> {
    hex_range(origin, range)
        .into_iter()
        .filter(|&cell| has_line_of_sight(origin, cell, blocked))
        .collect()
}
