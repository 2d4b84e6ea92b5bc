//! Board geometry: grid bounds and cell positions.
//!
//! The board is a bounded grid of `columns x rows` cells, 0-indexed, with
//! (0, 0) in the south-west corner. Both placement and movement validate
//! against the same `[0, columns-1] x [0, rows-1]` range, so the playable
//! area is exactly `columns x rows` cells.
//!
//! # Example
//!
//! ```rust
//! use gridbot::{BoardConfig, Direction, GridPosition};
//!
//! let board = BoardConfig::default(); // 6x6
//! assert!(board.contains(GridPosition::new(5, 5)));
//! assert!(!board.contains(GridPosition::new(6, 0)));
//!
//! // Stepping off the edge yields None
//! let corner = GridPosition::new(0, 5);
//! assert_eq!(board.step(corner, Direction::North), None);
//! assert_eq!(board.step(corner, Direction::East), Some(GridPosition::new(1, 5)));
//! ```

use crate::Direction;

/// Default number of columns on the board.
pub const DEFAULT_COLUMNS: i32 = 6;

/// Default number of rows on the board.
pub const DEFAULT_ROWS: i32 = 6;

/// A cell on the board.
///
/// Coordinates are 0-indexed; validity against a particular board is checked
/// by [`BoardConfig::contains`], not by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPosition {
    /// Column index (0 = west edge).
    pub x: i32,
    /// Row index (0 = south edge).
    pub y: i32,
}

impl GridPosition {
    /// Creates a position from column and row indices.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl core::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

/// Board dimensions.
///
/// Defaults to a 6x6 grid. Use the builder methods to configure a different
/// size:
///
/// ```rust
/// use gridbot::BoardConfig;
///
/// let board = BoardConfig::default().with_columns(8).with_rows(4);
/// assert_eq!(board.columns, 8);
/// assert_eq!(board.rows, 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    /// Number of columns (valid x range is `0..columns`).
    pub columns: i32,
    /// Number of rows (valid y range is `0..rows`).
    pub rows: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl BoardConfig {
    /// Set the number of columns.
    ///
    /// Values below 1 are clamped to 1 so the board always has at least
    /// one cell.
    pub fn with_columns(mut self, columns: i32) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Set the number of rows.
    ///
    /// Values below 1 are clamped to 1.
    pub fn with_rows(mut self, rows: i32) -> Self {
        self.rows = rows.max(1);
        self
    }

    /// Returns true if `position` is a valid cell on this board.
    pub fn contains(&self, position: GridPosition) -> bool {
        (0..self.columns).contains(&position.x) && (0..self.rows).contains(&position.y)
    }

    /// Returns the neighboring cell one step in `direction`, or `None` when
    /// the step would leave the board.
    pub fn step(&self, from: GridPosition, direction: Direction) -> Option<GridPosition> {
        let next = match direction {
            Direction::North => GridPosition::new(from.x, from.y + 1),
            Direction::South => GridPosition::new(from.x, from.y - 1),
            Direction::East => GridPosition::new(from.x + 1, from.y),
            Direction::West => GridPosition::new(from.x - 1, from.y),
        };
        self.contains(next).then_some(next)
    }
}
