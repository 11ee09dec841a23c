//! The set of cells that block movement and sight.
//!
//! Boards name blocked cells with `"col,row"` string keys. The set stores the
//! parsed coordinates instead, hashed on their integer fields, and accepts the
//! string form at construction.

use std::collections::HashSet;

use crate::coords::OffsetCoord;
use crate::Result;

/// Cells that cannot be entered or seen through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BlockedSet {
    cells: HashSet<OffsetCoord>,
}

impl BlockedSet {
    /// An empty set; nothing is blocked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `"col,row"` keys.
    ///
    /// Fails on the first malformed key.
    pub fn from_keys<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .map(|k| k.as_ref().parse::<OffsetCoord>())
            .collect()
    }

    /// Mark a cell as blocked. Returns false if it already was.
    pub fn insert(&mut self, cell: OffsetCoord) -> bool {
        self.cells.insert(cell)
    }

    #[inline]
    pub fn contains(&self, cell: &OffsetCoord) -> bool {
        self.cells.contains(cell)
    }

    /// Check a `"col,row"` key. Malformed keys are never blocked.
    pub fn contains_key(&self, key: &str) -> bool {
        key.parse::<OffsetCoord>()
            .map(|c| self.contains(&c))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OffsetCoord> {
        self.cells.iter()
    }

    /// The blocked cells as sorted `"col,row"` keys.
    pub fn keys(&self) -> Vec<String> {
        let mut cells: Vec<_> = self.cells.iter().collect();
        cells.sort();
        cells.into_iter().map(OffsetCoord::key).collect()
    }

    /// Smallest cube-space box holding every blocked cell, or `None` when
    /// nothing is blocked.
    pub(crate) fn cube_bounds(&self) -> Option<CubeBounds> {
        let mut cells = self.cells.iter().map(|c| c.to_cube());
        let first = cells.next()?;
        let mut bounds = CubeBounds {
            q: (first.q(), first.q()),
            r: (first.r(), first.r()),
            s: (first.s(), first.s()),
        };
        for c in cells {
            bounds.q = (bounds.q.0.min(c.q()), bounds.q.1.max(c.q()));
            bounds.r = (bounds.r.0.min(c.r()), bounds.r.1.max(c.r()));
            bounds.s = (bounds.s.0.min(c.s()), bounds.s.1.max(c.s()));
        }
        Some(bounds)
    }
}

/// Inclusive `(min, max)` per cube axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CubeBounds {
    pub q: (i32, i32),
    pub r: (i32, i32),
    pub s: (i32, i32),
}

impl CubeBounds {
    /// Whether a cell lies inside the box on all three axes.
    ///
    /// A cell outside on any axis sits in an open half-plane with no blocked
    /// cells, so it belongs to the unbounded region of the board.
    pub fn contains(&self, cell: OffsetCoord) -> bool {
        let c = cell.to_cube();
        let within = |v: i32, (lo, hi): (i32, i32)| lo <= v && v <= hi;
        within(c.q(), self.q) && within(c.r(), self.r) && within(c.s(), self.s)
    }
}

impl FromIterator<OffsetCoord> for BlockedSet {
    fn from_iter<T: IntoIterator<Item = OffsetCoord>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<OffsetCoord> for BlockedSet {
    fn extend<T: IntoIterator<Item = OffsetCoord>>(&mut self, iter: T) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a BlockedSet {
    type Item = &'a OffsetCoord;
    type IntoIter = std::collections::hash_set::Iter<'a, OffsetCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
