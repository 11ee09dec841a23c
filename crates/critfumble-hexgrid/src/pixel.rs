//! Mapping between cells and 2D pixel space for flat-top hexes.
//!
//! Flat-top means corners point left and right and the top and bottom are
//! flat edges. Pixel `y` grows downward or upward depending on the caller's
//! canvas; the math is the same.

use std::f64::consts::PI;
use std::fmt;

use crate::coords::{FractionalCube, OffsetCoord};
use crate::{Error, Result};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// How cells are laid out on a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLayout", into = "RawLayout"))]
pub struct HexLayout {
    size: f64,
    origin: Point,
}

impl HexLayout {
    /// Hex size used when none is configured.
    pub const DEFAULT_SIZE: f64 = 32.0;

    /// `size` is the center-to-corner radius; `(origin_x, origin_y)` is where
    /// the center of cell `(0, 0)` lands.
    pub fn new(size: f64, origin_x: f64, origin_y: f64) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(Error::InvalidLayoutSize(size));
        }
        Ok(Self {
            size,
            origin: Point::new(origin_x, origin_y),
        })
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }
}

impl Default for HexLayout {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            origin: Point::default(),
        }
    }
}

/// Unchecked wire form of [`HexLayout`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawLayout {
    size: f64,
    origin_x: f64,
    origin_y: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLayout> for HexLayout {
    type Error = Error;

    fn try_from(raw: RawLayout) -> Result<Self> {
        Self::new(raw.size, raw.origin_x, raw.origin_y)
    }
}

#[cfg(feature = "serde")]
impl From<HexLayout> for RawLayout {
    fn from(layout: HexLayout) -> Self {
        Self {
            size: layout.size,
            origin_x: layout.origin.x,
            origin_y: layout.origin.y,
        }
    }
}

/// Pixel position of a cell's center.
pub fn hex_to_pixel(hex: OffsetCoord, layout: &HexLayout) -> Point {
    let axial = hex.to_axial();
    let (q, r) = (axial.q as f64, axial.r as f64);
    Point {
        x: layout.size * 1.5 * q + layout.origin.x,
        y: layout.size * (SQRT_3 / 2.0 * q + SQRT_3 * r) + layout.origin.y,
    }
}

/// The cell under a pixel position.
///
/// Inverts [`hex_to_pixel`] to fractional axial coordinates and snaps with
/// [`FractionalCube::round`], so points on shared edges resolve the same way
/// lines do.
///
/// Non-finite or wildly distant points do not fail: NaN lands on axis 0 and
/// anything past the grid is clamped as [`FractionalCube::round`] describes.
pub fn pixel_to_hex(x: f64, y: f64, layout: &HexLayout) -> OffsetCoord {
    let px = (x - layout.origin.x) / layout.size;
    let py = (y - layout.origin.y) / layout.size;
    let q = 2.0 / 3.0 * px;
    let r = -1.0 / 3.0 * px + SQRT_3 / 3.0 * py;
    FractionalCube::from_axial(q, r).round().to_offset()
}

/// The six polygon vertices of a cell, at 0°, 60°, ... 300° from its center.
pub fn hex_corners(hex: OffsetCoord, layout: &HexLayout) -> [Point; 6] {
    let center = hex_to_pixel(hex, layout);
    std::array::from_fn(|i| {
        let angle = PI / 3.0 * i as f64;
        Point {
            x: center.x + layout.size * angle.cos(),
            y: center.y + layout.size * angle.sin(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn layout(size: f64) -> HexLayout {
        HexLayout::new(size, 0.0, 0.0).unwrap()
    }

    #[test]
    fn rejects_bad_sizes() {
        assert_eq!(HexLayout::new(0.0, 0.0, 0.0), Err(Error::InvalidLayoutSize(0.0)));
        assert!(HexLayout::new(-3.0, 0.0, 0.0).is_err());
        assert!(HexLayout::new(f64::NAN, 0.0, 0.0).is_err());
        assert!(HexLayout::new(f64::INFINITY, 0.0, 0.0).is_err());
    }

    #[test]
    fn origin_cell_sits_on_layout_origin() {
        let l = HexLayout::new(10.0, 100.0, 50.0).unwrap();
        assert_eq!(hex_to_pixel(OffsetCoord::ORIGIN, &l), Point::new(100.0, 50.0));
    }

    #[test]
    fn known_centers() {
        let l = layout(10.0);
        let p = hex_to_pixel(OffsetCoord::new(1, 0), &l);
        assert!((p.x - 15.0).abs() < EPS);
        assert!((p.y - 5.0 * SQRT_3).abs() < EPS);

        // (2,3) is axial (1,3)
        let p = hex_to_pixel(OffsetCoord::new(2, 3), &l);
        assert!((p.x - 15.0).abs() < EPS);
        assert!((p.y - 35.0 * SQRT_3).abs() < EPS);
    }

    #[test]
    fn centers_map_back_to_their_cell() {
        let l = layout(10.0);
        for col in -8..=8 {
            for row in -8..=8 {
                let hex = OffsetCoord::new(col, row);
                let p = hex_to_pixel(hex, &l);
                assert_eq!(pixel_to_hex(p.x, p.y, &l), hex);
            }
        }
    }

    #[test]
    fn points_near_center_pick_the_cell() {
        let l = HexLayout::new(32.0, -7.5, 3.25).unwrap();
        let hex = OffsetCoord::new(4, -3);
        let p = hex_to_pixel(hex, &l);
        assert_eq!(pixel_to_hex(p.x + 9.0, p.y - 6.0, &l), hex);
        assert_eq!(pixel_to_hex(p.x - 12.0, p.y + 4.0, &l), hex);
    }

    #[test]
    fn non_finite_pixels_stay_on_the_grid() {
        let l = HexLayout::default();
        let edge = OffsetCoord::LIMIT;
        assert_eq!(pixel_to_hex(f64::NAN, f64::NAN, &l), OffsetCoord::ORIGIN);
        // q = +inf, r = -inf clamp to (2L, -2L)
        assert_eq!(
            pixel_to_hex(f64::INFINITY, 0.0, &l),
            OffsetCoord::new(edge, -2 * edge)
        );
    }

    #[test]
    fn corners_lie_on_the_circumcircle() {
        let l = layout(10.0);
        let hex = OffsetCoord::new(3, 1);
        let center = hex_to_pixel(hex, &l);
        let corners = hex_corners(hex, &l);

        for corner in corners {
            assert!((corner.distance(&center) - 10.0).abs() < EPS);
        }
        // First corner points straight right
        assert!((corners[0].x - (center.x + 10.0)).abs() < EPS);
        assert!((corners[0].y - center.y).abs() < EPS);
        // Adjacent corners are one side length apart
        for i in 0..6 {
            let side = corners[i].distance(&corners[(i + 1) % 6]);
            assert!((side - 10.0).abs() < 1e-6);
        }
    }

    #[test]
    fn neighbors_share_corners() {
        let l = layout(10.0);
        let a = hex_corners(OffsetCoord::new(0, 0), &l);
        let b = hex_corners(OffsetCoord::new(1, 0), &l);
        let shared = a
            .iter()
            .filter(|p| b.iter().any(|q| p.distance(q) < 1e-6))
            .count();
        assert_eq!(shared, 2);
    }
}
