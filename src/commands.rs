//! Command and outcome types for the robot controller.
//!
//! This module defines the structured command set the controller executes and
//! the outcome type every operation returns.
//!
//! # Command flow
//!
//! 1. Raw text arrives at [`RobotController::process_command`] and is parsed
//!    into a [`RobotCommand`] by the [`parsing`](crate::parsing) module.
//! 2. The controller validates the command against the current state and the
//!    board bounds.
//! 3. Every path produces exactly one [`CommandOutcome`] and one observer
//!    notification; rejections are ordinary outcomes, never panics or errors.
//!
//! # Outcomes
//!
//! [`CommandOutcome`] is the structured result callers match on instead of
//! inspecting message text:
//!
//! ```rust
//! use gridbot::{CommandOutcome, NullObserver, RejectReason, RobotController};
//!
//! let mut robot = RobotController::new(NullObserver);
//! let outcome = robot.process_command("move");
//! assert_eq!(outcome, CommandOutcome::Rejected(RejectReason::NotPlaced));
//! ```
//!
//! [`RobotController::process_command`]: crate::RobotController::process_command

use crate::{Direction, GridPosition};

// ============================================================================
// Commands
// ============================================================================

/// A parsed robot command.
///
/// Produced by the text parser or constructed directly by a collaborator
/// (e.g. a UI deriving a placement from a tap on a grid cell).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RobotCommand {
    /// Move one cell in the current facing direction.
    Move,
    /// Rotate facing one step counter-clockwise.
    Left,
    /// Rotate facing one step clockwise.
    Right,
    /// Report the current position and facing.
    Report,
    /// Place the robot at a cell, optionally changing its facing.
    ///
    /// `facing` is `None` when a re-placement omits the direction token;
    /// the current facing is kept.
    Place {
        /// Target cell.
        position: GridPosition,
        /// New facing, if one was given.
        facing: Option<Direction>,
    },
}

// ============================================================================
// Rejections
// ============================================================================

/// Reason a command was rejected.
///
/// Rejections are non-fatal: state is left untouched and the reason is
/// surfaced to the observer as report text via [`message`](Self::message).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RejectReason {
    /// Input text matched none of the known command verbs.
    UnrecognisedCommand,
    /// Malformed placement syntax, non-integer coordinates, or a target
    /// cell outside the board.
    IllegalPlacement,
    /// The move would exit the board.
    IllegalMove,
    /// Move or turn attempted before any successful placement.
    NotPlaced,
}

impl RejectReason {
    /// Returns the human-readable rejection message delivered to the
    /// observer.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbot::RejectReason;
    ///
    /// assert_eq!(RejectReason::NotPlaced.message(), "PLACE first");
    /// assert_eq!(RejectReason::IllegalMove.message(), "Illegal move");
    /// ```
    #[inline]
    pub const fn message(&self) -> &'static str {
        match self {
            RejectReason::UnrecognisedCommand => "Unrecognised command",
            RejectReason::IllegalPlacement => "Illegal placement",
            RejectReason::IllegalMove => "Illegal move",
            RejectReason::NotPlaced => "PLACE first",
        }
    }
}

impl core::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// Result of applying a command.
///
/// Returned by every controller operation so callers can distinguish success
/// from rejection programmatically rather than by parsing report text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CommandOutcome {
    /// The robot was placed at a new position.
    Placed,
    /// The robot moved one cell forward.
    Moved,
    /// The robot turned in place.
    Turned {
        /// True for a left (counter-clockwise) turn.
        is_left: bool,
    },
    /// A report was produced; carries the report message.
    Reported(String),
    /// The command was rejected; state is unchanged.
    Rejected(RejectReason),
}

impl CommandOutcome {
    /// Returns true if this outcome is a rejection.
    pub fn is_rejected(&self) -> bool {
        matches!(self, CommandOutcome::Rejected(_))
    }

    /// Returns the rejection reason, if any.
    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            CommandOutcome::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
