//! # gridbot
//!
//! Core logic for a toy robot simulator: a textual command interpreter and a
//! positional state machine on a bounded grid.
//!
//! ## Features
//!
//! - **Command interpreter**: free-form text (`place 1,2,east`, `move`,
//!   `left`, `right`, `report`) parsed into structured commands
//! - **Validated state machine**: placement and movement checked against the
//!   board bounds; rejections never mutate state
//! - **Observer seam**: a presentation layer registers a [`RobotObserver`]
//!   and receives exactly one synchronous callback per processed command
//! - **Structured outcomes**: every operation returns a [`CommandOutcome`],
//!   so callers never have to parse message text to detect failure
//!
//! ## Architecture
//!
//! The crate keeps the interpreter free of any rendering concern:
//!
//! - `direction` - cyclic cardinal direction with pure rotation
//! - `board` - grid bounds and cell stepping
//! - `commands` - command, outcome, and rejection types
//! - `parsing` - raw text to [`RobotCommand`]
//! - `robot` - the controller that ties everything together
//! - `observer` - the notification seam, with null and recording doubles
//!
//! ## Example
//!
//! ```rust
//! use gridbot::{CommandOutcome, NullObserver, RejectReason, RobotController};
//!
//! let mut robot = RobotController::new(NullObserver);
//!
//! // Commands before placement are rejected, not fatal
//! assert_eq!(
//!     robot.process_command("move"),
//!     CommandOutcome::Rejected(RejectReason::NotPlaced)
//! );
//!
//! robot.process_command("place 0,0,north");
//! robot.process_command("move");
//! robot.process_command("right");
//!
//! assert_eq!(
//!     robot.process_command("report"),
//!     CommandOutcome::Reported("Output: 0, 1, East".into())
//! );
//! ```

#![warn(missing_docs)]

/// Grid bounds and cell positions.
pub mod board;
/// Command, outcome, and rejection types.
pub mod commands;
/// Cyclic cardinal direction for the robot's facing.
pub mod direction;
/// Observer seam between controller and presentation layer.
pub mod observer;
/// Free-form text parsing for robot commands.
pub mod parsing;
/// Main controller coordinating parsing, validation, and notification.
pub mod robot;

/// JSON message types for structured collaborators (serde-based).
#[cfg(feature = "serde")]
pub mod messages;

// Re-exports for convenience
pub use board::{BoardConfig, GridPosition, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use commands::{CommandOutcome, RejectReason, RobotCommand};
pub use direction::Direction;
pub use observer::{NullObserver, ObserverEvent, RecordingObserver, RobotObserver};
pub use parsing::{parse_command, ParseError};
pub use robot::{RobotController, RobotSkin, RobotState};

// Message re-exports (for JSON collaborators)
#[cfg(feature = "serde")]
pub use messages::{CommandRequest, PlaceRequest, ReportResponse};
