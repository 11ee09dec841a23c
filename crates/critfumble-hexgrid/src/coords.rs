//! Hexagonal coordinate systems and the conversions between them.
//!
//! Three representations are used:
//!
//! - **Offset** `(col, row)`: what boards store. Odd rows are shifted right by
//!   half a cell.
//! - **Axial** `(q, r)`: two axes at 60 degrees, used for interpolation and
//!   pixel math.
//! - **Cube** `(q, r, s)`: axial plus the implicit third axis `s = -q - r`,
//!   used for distance, directions and rounding.
//!
//! All integer conversions are lossless bijections.
//!
//! # Supported extent
//!
//! Cells are addressed with `i32`, but the axial and cube forms mix `col` and
//! `row`, so the grid is only supported for `|col|, |row| <=`
//! [`OffsetCoord::LIMIT`] (2^28). Within that extent every conversion,
//! distance and neighbor step stays clear of `i32` overflow, and parsed keys
//! outside it are rejected.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::{Error, Result};

/// A cell address in the odd-row-shifted-right layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetCoord {
    pub col: i32,
    pub row: i32,
}

impl OffsetCoord {
    /// Origin cell.
    pub const ORIGIN: Self = Self { col: 0, row: 0 };

    /// Largest `|col|` or `|row|` the grid math supports.
    pub const LIMIT: i32 = 1 << 28;

    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The `"col,row"` key used by boards to name blocked cells.
    pub fn key(&self) -> String {
        format!("{},{}", self.col, self.row)
    }

    /// Whether both components lie within [`OffsetCoord::LIMIT`].
    pub const fn is_supported(&self) -> bool {
        let limit = Self::LIMIT.unsigned_abs();
        self.col.unsigned_abs() <= limit && self.row.unsigned_abs() <= limit
    }

    pub fn to_axial(self) -> AxialCoord {
        offset_to_axial(self)
    }

    pub fn to_cube(self) -> CubeCoord {
        axial_to_cube(offset_to_axial(self))
    }
}

impl fmt::Display for OffsetCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.col, self.row)
    }
}

impl FromStr for OffsetCoord {
    type Err = Error;

    /// Parse a `"col,row"` key. Whitespace around either number is ignored,
    /// and cells outside [`OffsetCoord::LIMIT`] are refused.
    fn from_str(s: &str) -> Result<Self> {
        let (col, row) = s
            .split_once(',')
            .ok_or_else(|| Error::InvalidKey(s.to_string()))?;
        let col = col
            .trim()
            .parse()
            .map_err(|_| Error::InvalidKey(s.to_string()))?;
        let row = row
            .trim()
            .parse()
            .map_err(|_| Error::InvalidKey(s.to_string()))?;
        let cell = Self { col, row };
        if !cell.is_supported() {
            return Err(Error::OutOfRange(cell.key()));
        }
        Ok(cell)
    }
}

/// Two-axis hex coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxialCoord {
    pub q: i32,
    pub r: i32,
}

impl AxialCoord {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }
}

/// Three-axis hex coordinate.
///
/// `q + r + s == 0` always holds: `s` is derived on construction and the
/// fields cannot be written directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CubeCoord {
    q: i32,
    r: i32,
    s: i32,
}

impl CubeCoord {
    pub const ORIGIN: Self = Self { q: 0, r: 0, s: 0 };

    /// The six unit directions, in the fixed enumeration order used for
    /// neighbor lists.
    pub const DIRECTIONS: [Self; 6] = [
        Self { q: 1, r: 0, s: -1 },
        Self { q: 1, r: -1, s: 0 },
        Self { q: 0, r: -1, s: 1 },
        Self { q: -1, r: 0, s: 1 },
        Self { q: -1, r: 1, s: 0 },
        Self { q: 0, r: 1, s: -1 },
    ];

    /// Create a cube coordinate; `s` is derived as `-q - r`.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    #[inline]
    pub const fn q(&self) -> i32 {
        self.q
    }

    #[inline]
    pub const fn r(&self) -> i32 {
        self.r
    }

    #[inline]
    pub const fn s(&self) -> i32 {
        self.s
    }

    /// Distance in steps: half the sum of the axis deltas.
    ///
    /// Worked in `i64`, so any pair of cube coordinates is safe.
    pub fn distance(&self, other: &Self) -> u32 {
        let delta = |a: i32, b: i32| (i64::from(a) - i64::from(b)).unsigned_abs();
        let steps = (delta(self.q, other.q) + delta(self.r, other.r) + delta(self.s, other.s)) / 2;
        u32::try_from(steps).unwrap_or(u32::MAX)
    }

    /// The six adjacent cells in [`CubeCoord::DIRECTIONS`] order.
    pub fn neighbors(&self) -> [Self; 6] {
        Self::DIRECTIONS.map(|d| *self + d)
    }

    pub fn to_offset(self) -> OffsetCoord {
        axial_to_offset(cube_to_axial(self))
    }
}

impl Add for CubeCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.q + other.q, self.r + other.r)
    }
}

impl Sub for CubeCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.q - other.q, self.r - other.r)
    }
}

impl Neg for CubeCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.q, -self.r)
    }
}

impl Mul<i32> for CubeCoord {
    type Output = Self;

    #[inline]
    fn mul(self, k: i32) -> Self {
        Self::new(self.q * k, self.r * k)
    }
}

impl fmt::Display for CubeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

/// A cube coordinate with fractional components, produced by interpolation
/// or by inverting a pixel position. The axes sum to zero up to float error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FractionalCube {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalCube {
    /// Build from fractional axial components.
    pub fn from_axial(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Snap to the cell containing this point.
    ///
    /// Each axis is rounded on its own, halves toward positive infinity. The
    /// axis that moved furthest is then rebuilt from the other two so the
    /// result sums to zero. Ties go `q` first, then `r`, otherwise `s`; this
    /// order is fixed so lines and cursor picks are reproducible.
    ///
    /// Points far outside the grid are clamped to `±2 * LIMIT` on the `q` and
    /// `r` axes, and a NaN axis snaps to 0.
    pub fn round(self) -> CubeCoord {
        let q = round_half_up(self.q);
        let r = round_half_up(self.r);
        let s = round_half_up(self.s);

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        let (q, r) = if q_diff > r_diff && q_diff > s_diff {
            (-r - s, r)
        } else if r_diff > s_diff {
            (q, -q - s)
        } else {
            (q, r)
        };

        CubeCoord::new(clamp_axis(q), clamp_axis(r))
    }
}

#[inline]
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Widest axial component a rounded point may take.
const AXIS_CLAMP: f64 = 2.0 * OffsetCoord::LIMIT as f64;

/// `as` maps NaN to 0; the clamp keeps `s = -q - r` within `i32`.
#[inline]
fn clamp_axis(x: f64) -> i32 {
    x.clamp(-AXIS_CLAMP, AXIS_CLAMP) as i32
}

impl From<CubeCoord> for FractionalCube {
    fn from(c: CubeCoord) -> Self {
        Self {
            q: c.q as f64,
            r: c.r as f64,
            s: c.s as f64,
        }
    }
}

/// Offset to axial. Parity comes from `row & 1`, which is 1 for negative odd
/// rows as well.
pub fn offset_to_axial(offset: OffsetCoord) -> AxialCoord {
    let OffsetCoord { col, row } = offset;
    AxialCoord {
        q: col - (row - (row & 1)) / 2,
        r: row,
    }
}

/// Axial to offset; inverse of [`offset_to_axial`].
pub fn axial_to_offset(axial: AxialCoord) -> OffsetCoord {
    let AxialCoord { q, r } = axial;
    OffsetCoord {
        col: q + (r - (r & 1)) / 2,
        row: r,
    }
}

pub fn axial_to_cube(axial: AxialCoord) -> CubeCoord {
    CubeCoord::new(axial.q, axial.r)
}

pub fn cube_to_axial(cube: CubeCoord) -> AxialCoord {
    AxialCoord {
        q: cube.q,
        r: cube.r,
    }
}

impl From<OffsetCoord> for AxialCoord {
    fn from(value: OffsetCoord) -> Self {
        offset_to_axial(value)
    }
}

impl From<AxialCoord> for OffsetCoord {
    fn from(value: AxialCoord) -> Self {
        axial_to_offset(value)
    }
}

impl From<AxialCoord> for CubeCoord {
    fn from(value: AxialCoord) -> Self {
        axial_to_cube(value)
    }
}

impl From<CubeCoord> for AxialCoord {
    fn from(value: CubeCoord) -> Self {
        cube_to_axial(value)
    }
}

impl From<OffsetCoord> for CubeCoord {
    fn from(value: OffsetCoord) -> Self {
        value.to_cube()
    }
}

impl From<CubeCoord> for OffsetCoord {
    fn from(value: CubeCoord) -> Self {
        value.to_offset()
    }
}
