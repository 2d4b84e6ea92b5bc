//! JSON message types for collaborators speaking structured requests.
//!
//! A presentation layer that transports commands as JSON (a web panel, a test
//! harness) can use these types instead of raw text. Available under the
//! `serde` feature.
//!
//! # Example
//!
//! ```rust
//! use gridbot::messages::PlaceRequest;
//!
//! let json = r#"{"x": 1, "y": 2, "facing": "east"}"#;
//! let req: PlaceRequest = serde_json::from_str(json).unwrap();
//! assert_eq!(req.x, 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::{Direction, GridPosition, RobotCommand};

// ============================================================================
// Request types
// ============================================================================

/// Request to place the robot at a cell.
///
/// # JSON examples
///
/// ```json
/// {"x": 1, "y": 2, "facing": "east"}
/// {"x": 3, "y": 4}
/// ```
///
/// `facing` may be omitted on re-placement, keeping the current facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceRequest {
    /// Target column.
    pub x: i32,
    /// Target row.
    pub y: i32,
    /// New facing; `None` keeps the current one.
    #[serde(default)]
    pub facing: Option<Direction>,
}

impl PlaceRequest {
    /// Create a placement request with a facing.
    pub fn new(x: i32, y: i32, facing: Direction) -> Self {
        Self {
            x,
            y,
            facing: Some(facing),
        }
    }

    /// Create a re-placement request keeping the current facing.
    pub fn keep_facing(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            facing: None,
        }
    }
}

impl From<PlaceRequest> for RobotCommand {
    fn from(req: PlaceRequest) -> Self {
        RobotCommand::Place {
            position: GridPosition::new(req.x, req.y),
            facing: req.facing,
        }
    }
}

/// Request carrying a raw text command.
///
/// # JSON example
///
/// ```json
/// {"command": "place 1,2,east"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    /// The raw command text, parsed exactly as keyboard input would be.
    pub command: String,
}

// ============================================================================
// Response types
// ============================================================================

/// Response carrying a report or rejection message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResponse {
    /// The message text, e.g. `"Output: 1, 2, East"` or `"Illegal move"`.
    pub message: String,
}

impl ReportResponse {
    /// Create a response from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_request_roundtrip() {
        let req = PlaceRequest::new(1, 2, Direction::East);
        let json = serde_json::to_string(&req).unwrap();
        let back: PlaceRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn place_request_facing_defaults_to_none() {
        let req: PlaceRequest = serde_json::from_str(r#"{"x": 3, "y": 4}"#).unwrap();
        assert_eq!(req, PlaceRequest::keep_facing(3, 4));
    }

    #[test]
    fn place_request_lowercase_facing() {
        let req: PlaceRequest =
            serde_json::from_str(r#"{"x": 0, "y": 0, "facing": "north"}"#).unwrap();
        assert_eq!(req.facing, Some(Direction::North));
    }

    #[test]
    fn place_request_converts_to_command() {
        let cmd: RobotCommand = PlaceRequest::new(2, 5, Direction::West).into();
        assert_eq!(
            cmd,
            RobotCommand::Place {
                position: GridPosition::new(2, 5),
                facing: Some(Direction::West),
            }
        );
    }

    #[test]
    fn command_request_parses() {
        let req: CommandRequest =
            serde_json::from_str(r#"{"command": "place 1,2,east"}"#).unwrap();
        assert_eq!(req.command, "place 1,2,east");
    }

    #[test]
    fn report_response_serializes() {
        let resp = ReportResponse::new("Output: 1, 2, East");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"message":"Output: 1, 2, East"}"#);
    }
}
