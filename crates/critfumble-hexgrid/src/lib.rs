//! Crit-Fumble Hex Grid
//!
//! Geometry and pathfinding for hexagonal tabletop boards.
//!
//! # Coordinates
//!
//! Boards address cells with offset coordinates `(col, row)` in which odd rows
//! are shifted right by half a cell. Internally everything is done in cube
//! coordinates `(q, r, s)` with `q + r + s = 0`, where distance, adjacency and
//! rounding are simple. See [`coords`] for the conversions.
//!
//! # Layers
//!
//! 1. [`coords`]: offset, axial and cube forms and cube rounding
//! 2. [`topology`]: distance, neighbors, rings and ranges
//! 3. [`visibility`]: lines, line of sight, field of view
//! 4. [`pathfind`]: A* over the six-connected grid
//!
//! [`pixel`] sits beside them and only depends on [`coords`].
//!
//! Every function is pure. Nothing is cached between calls, so any of them can
//! run from any number of threads at once.
//!
//! # Example
//!
//! ```
//! use critfumble_hexgrid::{hex_pathfind, has_line_of_sight, BlockedSet, OffsetCoord};
//!
//! let blocked = BlockedSet::from_keys(["0,2"]).unwrap();
//! let start = OffsetCoord::new(0, 0);
//! let goal = OffsetCoord::new(0, 4);
//!
//! assert!(!has_line_of_sight(start, goal, &blocked));
//! let path = hex_pathfind(start, goal, &blocked).unwrap();
//! assert_eq!(path.first(), Some(&start));
//! assert_eq!(path.last(), Some(&goal));
//! ```

pub mod blocked;
pub mod coords;
mod error;
pub mod pathfind;
pub mod pixel;
pub mod topology;
pub mod visibility;

pub use blocked::BlockedSet;
pub use coords::{
    axial_to_cube, axial_to_offset, cube_to_axial, offset_to_axial, AxialCoord, CubeCoord,
    FractionalCube, OffsetCoord,
};
pub use error::{Error, Result};
pub use pathfind::{hex_pathfind, hex_pathfind_with, PathfindOptions};
pub use pixel::{hex_corners, hex_to_pixel, pixel_to_hex, HexLayout, Point};
pub use topology::{cells_in_range, cells_in_ring, hex_distance, hex_neighbors, hex_range, hex_ring};
pub use visibility::{has_line_of_sight, hex_field_of_view, hex_line};

/// An ordered walk from start to goal, both included.
pub type Path = Vec<OffsetCoord>;

/// Neighbors per cell (invariant: always 6)
pub const NEIGHBORS_PER_CELL: usize = 6;

// Compile-time check that the direction table matches
const _: () = assert!(CubeCoord::DIRECTIONS.len() == NEIGHBORS_PER_CELL);
