//! Cardinal direction handling for the robot's facing.
//!
//! [`Direction`] is a cyclic enumeration over the four cardinal points in the
//! fixed order North, East, South, West. Rotation is pure: [`Direction::next`]
//! and [`Direction::previous`] return a new value via modular index arithmetic
//! rather than mutating in place.
//!
//! # Example
//!
//! ```rust
//! use gridbot::Direction;
//!
//! let facing = Direction::North;
//! assert_eq!(facing.next(), Direction::East);
//! assert_eq!(facing.previous(), Direction::West);
//! assert_eq!(facing.next().previous(), facing);
//! ```

/// Direction the robot is facing.
///
/// Cyclically ordered: North → East → South → West → North.
///
/// # Default
///
/// Defaults to [`North`](Self::North), the facing a freshly constructed
/// controller reports before any placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Facing up the grid (increasing y).
    #[default]
    North,
    /// Facing right (increasing x).
    East,
    /// Facing down the grid (decreasing y).
    South,
    /// Facing left (decreasing x).
    West,
}

/// The four directions in cycle order.
const CYCLE: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// Returns the next direction in the cycle (a clockwise quarter turn).
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbot::Direction;
    ///
    /// assert_eq!(Direction::North.next(), Direction::East);
    /// assert_eq!(Direction::West.next(), Direction::North);
    /// ```
    #[inline]
    pub const fn next(self) -> Self {
        CYCLE[(self as usize + 1) % CYCLE.len()]
    }

    /// Returns the previous direction in the cycle (a counter-clockwise
    /// quarter turn).
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbot::Direction;
    ///
    /// assert_eq!(Direction::North.previous(), Direction::West);
    /// assert_eq!(Direction::East.previous(), Direction::North);
    /// ```
    #[inline]
    pub const fn previous(self) -> Self {
        CYCLE[(self as usize + CYCLE.len() - 1) % CYCLE.len()]
    }

    /// Returns the direction name as displayed in reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbot::Direction;
    ///
    /// assert_eq!(Direction::North.as_str(), "North");
    /// assert_eq!(Direction::West.as_str(), "West");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }

    /// Parse a direction from text input.
    ///
    /// Supports two formats:
    /// - Full names: `"north"`, `"east"`, `"south"`, `"west"`
    /// - Single-letter abbreviations: `"n"`, `"e"`, `"s"`, `"w"`
    ///
    /// Input is trimmed and case-insensitive. Matching is exact per token;
    /// partial fragments like `"no"` or `"eas"` do not resolve.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbot::Direction;
    ///
    /// assert_eq!(Direction::from_text("north"), Some(Direction::North));
    /// assert_eq!(Direction::from_text("EAST"), Some(Direction::East));
    /// assert_eq!(Direction::from_text(" w "), Some(Direction::West));
    ///
    /// assert_eq!(Direction::from_text("no"), None);
    /// assert_eq!(Direction::from_text(""), None);
    /// ```
    pub fn from_text(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Some(Direction::North),
            "east" | "e" => Some(Direction::East),
            "south" | "s" => Some(Direction::South),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
