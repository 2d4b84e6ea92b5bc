//! Free-form text parsing for robot commands.
//!
//! Converts raw input such as `"PLACE 1,2,EAST"` into a structured
//! [`RobotCommand`]. Parsing is stateless except for one flag: placement
//! accepts a shorter field list when the robot already has a position, so the
//! caller passes `has_position` through.
//!
//! # Grammar
//!
//! ```text
//! command  := "move" | "left" | "right" | "report" | place
//! place    := "place " x "," y [ "," facing ]
//! ```
//!
//! Input is trimmed and lower-cased before matching. The facing clause is
//! required on first placement and optional on re-placement.
//!
//! # Example
//!
//! ```rust
//! use gridbot::parsing::parse_command;
//! use gridbot::{Direction, GridPosition, RobotCommand};
//!
//! let cmd = parse_command(" PLACE 1, 2, EAST ", false).unwrap();
//! assert_eq!(
//!     cmd,
//!     RobotCommand::Place {
//!         position: GridPosition::new(1, 2),
//!         facing: Some(Direction::East),
//!     }
//! );
//! ```

use log::debug;
use thiserror::Error;

use crate::{Direction, GridPosition, RejectReason, RobotCommand};

/// Error produced when input text does not parse to a command.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input matched none of the known command verbs.
    #[error("Unrecognised command")]
    UnrecognisedCommand,

    /// A `place` command with a bad field count or non-integer coordinates.
    #[error("Illegal placement")]
    IllegalPlacement,
}

impl From<ParseError> for RejectReason {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnrecognisedCommand => RejectReason::UnrecognisedCommand,
            ParseError::IllegalPlacement => RejectReason::IllegalPlacement,
        }
    }
}

/// Parse raw command text into a [`RobotCommand`].
///
/// `has_position` is true when the robot is already placed; re-placement may
/// then omit the facing token (2 fields instead of 3).
///
/// Dispatch is by exact verb match after trimming and lower-casing, except
/// `place`, which is matched by prefix so its arguments can follow.
///
/// # Errors
///
/// [`ParseError::UnrecognisedCommand`] for unknown verbs (including empty
/// input), [`ParseError::IllegalPlacement`] for malformed placement
/// arguments.
pub fn parse_command(raw: &str, has_position: bool) -> Result<RobotCommand, ParseError> {
    let text = raw.trim().to_ascii_lowercase();
    match text.as_str() {
        "move" => Ok(RobotCommand::Move),
        "left" => Ok(RobotCommand::Left),
        "right" => Ok(RobotCommand::Right),
        "report" => Ok(RobotCommand::Report),
        _ if text.starts_with("place ") => parse_place(&text["place ".len()..], has_position),
        _ => Err(ParseError::UnrecognisedCommand),
    }
}

/// Parse the argument list of a `place` command.
///
/// Fields are comma-separated; empty fields are dropped, so `"1,,north"`
/// counts two fields. First placement requires exactly (x, y, facing);
/// re-placement accepts (x, y) with facing optional. Fields past the third
/// are ignored.
fn parse_place(args: &str, has_position: bool) -> Result<RobotCommand, ParseError> {
    let fields: Vec<&str> = args
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect();

    let count_ok = if has_position {
        fields.len() >= 2
    } else {
        fields.len() == 3
    };
    if !count_ok {
        return Err(ParseError::IllegalPlacement);
    }

    let x: i32 = fields[0].parse().map_err(|_| ParseError::IllegalPlacement)?;
    let y: i32 = fields[1].parse().map_err(|_| ParseError::IllegalPlacement)?;

    let facing = match fields.get(2) {
        Some(token) => {
            let facing = Direction::from_text(token);
            if facing.is_none() {
                // An unresolvable facing token keeps the current facing
                // rather than rejecting the placement.
                debug!("facing token {token:?} did not resolve, keeping current facing");
            }
            facing
        }
        None => None,
    };

    Ok(RobotCommand::Place {
        position: GridPosition::new(x, y),
        facing,
    })
}
