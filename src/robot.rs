//! Main robot controller tying parsing, validation, and notification together.
//!
//! [`RobotController`] owns the robot's facing, optional grid position, and
//! selected skin. Commands arrive either as raw text via
//! [`process_command`](RobotController::process_command) or as structured
//! calls (e.g. [`place`](RobotController::place) from a UI that derives a
//! cell from a tap). Every operation validates against the board bounds,
//! applies the transition or leaves state untouched, and notifies the
//! registered observer exactly once.
//!
//! # Example
//!
//! ```rust
//! use gridbot::{CommandOutcome, Direction, GridPosition, NullObserver, RobotController};
//!
//! let mut robot = RobotController::new(NullObserver);
//!
//! robot.process_command("place 1,2,east");
//! assert_eq!(robot.position(), Some(GridPosition::new(1, 2)));
//! assert_eq!(robot.facing(), Direction::East);
//!
//! robot.process_command("move");
//! robot.process_command("left");
//!
//! let outcome = robot.process_command("report");
//! assert_eq!(
//!     outcome,
//!     CommandOutcome::Reported("Output: 2, 2, North".into())
//! );
//! ```
//!
//! # State machine
//!
//! States are `Unplaced` and `Placed(x, y, facing)`. A valid `place` moves
//! either state to `Placed`; `move` and the turns require `Placed` and fail
//! with "PLACE first" otherwise; `report` works in both states; `reset`
//! returns to `Unplaced` keeping the facing. There is no terminal state.

use log::debug;

use crate::commands::{CommandOutcome, RejectReason, RobotCommand};
use crate::observer::RobotObserver;
use crate::parsing::parse_command;
use crate::{BoardConfig, Direction, GridPosition};

// ============================================================================
// Skin
// ============================================================================

/// Visual skin selected for the robot.
///
/// A presentation pass-through: the core never interprets it, but changing it
/// notifies the observer so a renderer can swap sprites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RobotSkin {
    /// Blue spacecraft (default).
    #[default]
    Blue,
    /// Red spacecraft.
    Red,
    /// Green spacecraft.
    Green,
    /// Yellow spacecraft.
    Yellow,
}

// ============================================================================
// Controller
// ============================================================================

/// The robot command interpreter and positional state machine.
///
/// # Type parameter
///
/// - `O`: the observer implementation ([`RobotObserver`]), injected at
///   construction and owned by the controller.
///
/// # Thread safety
///
/// The controller is synchronous and single-threaded by design; commands are
/// processed to completion one at a time.
pub struct RobotController<O: RobotObserver> {
    board: BoardConfig,
    facing: Direction,
    position: Option<GridPosition>,
    skin: RobotSkin,
    observer: O,
}

impl<O: RobotObserver> RobotController<O> {
    /// Creates a controller with the default 6x6 board, facing North,
    /// unplaced.
    pub fn new(observer: O) -> Self {
        Self {
            board: BoardConfig::default(),
            facing: Direction::North,
            position: None,
            skin: RobotSkin::default(),
            observer,
        }
    }

    /// Replaces the board configuration (builder pattern).
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    /// Process a raw text command.
    ///
    /// The text is trimmed, lower-cased, and dispatched; see
    /// [`parsing`](crate::parsing) for the grammar. Unknown input and
    /// malformed placements become rejections, so this never panics and
    /// never returns an error.
    pub fn process_command(&mut self, raw: &str) -> CommandOutcome {
        match parse_command(raw, self.position.is_some()) {
            Ok(command) => self.apply_command(command),
            Err(err) => self.reject(err.into()),
        }
    }

    /// Apply an already-parsed command.
    pub fn apply_command(&mut self, command: RobotCommand) -> CommandOutcome {
        debug!("applying {command:?}");
        match command {
            RobotCommand::Move => self.move_forward(),
            RobotCommand::Left => self.turn_left(),
            RobotCommand::Right => self.turn_right(),
            RobotCommand::Report => self.report(),
            RobotCommand::Place { position, facing } => self.place(position, facing),
        }
    }

    /// Place the robot at `position`, optionally changing its facing.
    ///
    /// The cell must lie on the board; otherwise the placement is rejected
    /// and state is unchanged. Used directly by collaborators that derive a
    /// cell from a pointer event instead of text.
    pub fn place(&mut self, position: GridPosition, facing: Option<Direction>) -> CommandOutcome {
        if !self.board.contains(position) {
            return self.reject(RejectReason::IllegalPlacement);
        }
        if let Some(facing) = facing {
            self.facing = facing;
        }
        self.position = Some(position);
        self.observer.on_placed();
        CommandOutcome::Placed
    }

    /// Move one cell in the current facing direction.
    ///
    /// Requires placement; a move that would leave the board is rejected and
    /// the position stays put.
    pub fn move_forward(&mut self) -> CommandOutcome {
        let Some(position) = self.position else {
            return self.reject(RejectReason::NotPlaced);
        };
        match self.board.step(position, self.facing) {
            Some(next) => {
                self.position = Some(next);
                self.observer.on_moved();
                CommandOutcome::Moved
            }
            None => self.reject(RejectReason::IllegalMove),
        }
    }

    /// Rotate facing one step counter-clockwise.
    pub fn turn_left(&mut self) -> CommandOutcome {
        self.turn(true)
    }

    /// Rotate facing one step clockwise.
    pub fn turn_right(&mut self) -> CommandOutcome {
        self.turn(false)
    }

    fn turn(&mut self, is_left: bool) -> CommandOutcome {
        if self.position.is_none() {
            return self.reject(RejectReason::NotPlaced);
        }
        self.facing = if is_left {
            self.facing.previous()
        } else {
            self.facing.next()
        };
        self.observer.on_turned(is_left);
        CommandOutcome::Turned { is_left }
    }

    /// Report the current position and facing.
    ///
    /// Always succeeds; an unplaced robot reports "No position" in place of
    /// coordinates.
    pub fn report(&mut self) -> CommandOutcome {
        let message = match self.position {
            Some(position) => format!("Output: {position}, {}", self.facing),
            None => format!("Output: No position, {}", self.facing),
        };
        self.observer.on_report(&message);
        CommandOutcome::Reported(message)
    }

    /// Return the robot to the unplaced state.
    ///
    /// The facing keeps its last value and the skin is untouched; only the
    /// position is cleared. No observer notification is emitted.
    pub fn reset(&mut self) {
        debug!("reset, clearing position");
        self.position = None;
    }

    fn reject(&mut self, reason: RejectReason) -> CommandOutcome {
        debug!("rejected: {reason}");
        self.observer.on_report(reason.message());
        CommandOutcome::Rejected(reason)
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// The selected skin.
    pub fn skin(&self) -> RobotSkin {
        self.skin
    }

    /// Select a skin and notify the observer.
    pub fn set_skin(&mut self, skin: RobotSkin) {
        self.skin = skin;
        self.observer.on_skin_changed(skin);
    }

    /// Current facing direction.
    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Current position, if placed.
    pub fn position(&self) -> Option<GridPosition> {
        self.position
    }

    /// True once a placement has succeeded (and until [`reset`](Self::reset)).
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// The board configuration.
    pub fn board(&self) -> BoardConfig {
        self.board
    }

    /// Full state snapshot for UI/API rendering.
    pub fn state(&self) -> RobotState {
        RobotState {
            facing: self.facing,
            position: self.position,
            skin: self.skin,
        }
    }

    /// Borrow the observer, e.g. to inspect a recording test double.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutably borrow the observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}

// ============================================================================
// State snapshot
// ============================================================================

/// Snapshot of the robot's state.
///
/// Serializable under the `serde` feature for collaborators that render or
/// transport state as JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotState {
    /// Current facing direction.
    pub facing: Direction,
    /// Current position; `None` until the first valid placement.
    pub position: Option<GridPosition>,
    /// Selected visual skin.
    pub skin: RobotSkin,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{NullObserver, ObserverEvent, RecordingObserver};

    fn placed_robot(x: i32, y: i32, facing: Direction) -> RobotController<NullObserver> {
        let mut robot = RobotController::new(NullObserver);
        robot.place(GridPosition::new(x, y), Some(facing));
        robot
    }

    #[test]
    fn new_controller_defaults() {
        let robot = RobotController::new(NullObserver);
        assert_eq!(robot.facing(), Direction::North);
        assert_eq!(robot.position(), None);
        assert_eq!(robot.skin(), RobotSkin::Blue);
        assert!(!robot.is_placed());
    }

    #[test]
    fn place_sets_position_and_facing() {
        let mut robot = RobotController::new(NullObserver);
        let outcome = robot.place(GridPosition::new(2, 3), Some(Direction::South));
        assert_eq!(outcome, CommandOutcome::Placed);
        assert_eq!(robot.position(), Some(GridPosition::new(2, 3)));
        assert_eq!(robot.facing(), Direction::South);
    }

    #[test]
    fn place_without_facing_keeps_current() {
        let mut robot = placed_robot(1, 1, Direction::West);
        robot.place(GridPosition::new(4, 4), None);
        assert_eq!(robot.facing(), Direction::West);
        assert_eq!(robot.position(), Some(GridPosition::new(4, 4)));
    }

    #[test]
    fn place_out_of_bounds_is_rejected_and_state_kept() {
        let mut robot = placed_robot(1, 1, Direction::East);
        let outcome = robot.place(GridPosition::new(6, 6), Some(Direction::North));
        assert_eq!(
            outcome,
            CommandOutcome::Rejected(RejectReason::IllegalPlacement)
        );
        // Neither position nor facing may change on rejection.
        assert_eq!(robot.position(), Some(GridPosition::new(1, 1)));
        assert_eq!(robot.facing(), Direction::East);
    }

    #[test]
    fn move_advances_in_facing_direction() {
        let mut robot = placed_robot(2, 2, Direction::North);
        assert_eq!(robot.move_forward(), CommandOutcome::Moved);
        assert_eq!(robot.position(), Some(GridPosition::new(2, 3)));

        robot.place(GridPosition::new(2, 2), Some(Direction::West));
        robot.move_forward();
        assert_eq!(robot.position(), Some(GridPosition::new(1, 2)));
    }

    #[test]
    fn move_before_place_is_rejected() {
        let mut robot = RobotController::new(NullObserver);
        assert_eq!(
            robot.move_forward(),
            CommandOutcome::Rejected(RejectReason::NotPlaced)
        );
        assert_eq!(robot.position(), None);
    }

    #[test]
    fn move_off_board_is_rejected_and_position_kept() {
        let mut robot = placed_robot(5, 5, Direction::North);
        assert_eq!(
            robot.move_forward(),
            CommandOutcome::Rejected(RejectReason::IllegalMove)
        );
        assert_eq!(robot.position(), Some(GridPosition::new(5, 5)));
    }

    #[test]
    fn turns_require_placement() {
        let mut robot = RobotController::new(NullObserver);
        assert_eq!(
            robot.turn_left(),
            CommandOutcome::Rejected(RejectReason::NotPlaced)
        );
        assert_eq!(
            robot.turn_right(),
            CommandOutcome::Rejected(RejectReason::NotPlaced)
        );
        assert_eq!(robot.facing(), Direction::North);
    }

    #[test]
    fn turn_left_then_right_restores_facing() {
        for facing in [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ] {
            let mut robot = placed_robot(3, 3, facing);
            robot.turn_left();
            robot.turn_right();
            assert_eq!(robot.facing(), facing);
        }
    }

    #[test]
    fn report_when_placed() {
        let mut robot = placed_robot(1, 2, Direction::East);
        assert_eq!(
            robot.report(),
            CommandOutcome::Reported("Output: 1, 2, East".into())
        );
    }

    #[test]
    fn report_when_unplaced() {
        let mut robot = RobotController::new(NullObserver);
        assert_eq!(
            robot.report(),
            CommandOutcome::Reported("Output: No position, North".into())
        );
    }

    #[test]
    fn reset_clears_position_keeps_facing_and_skin() {
        let mut robot = placed_robot(2, 2, Direction::South);
        robot.set_skin(RobotSkin::Green);
        robot.reset();
        assert_eq!(robot.position(), None);
        assert_eq!(robot.facing(), Direction::South);
        assert_eq!(robot.skin(), RobotSkin::Green);
    }

    #[test]
    fn set_skin_notifies_observer() {
        let mut robot = RobotController::new(RecordingObserver::new());
        robot.set_skin(RobotSkin::Yellow);
        assert_eq!(
            robot.observer().events(),
            &[ObserverEvent::SkinChanged(RobotSkin::Yellow)]
        );
        assert_eq!(robot.skin(), RobotSkin::Yellow);
    }

    #[test]
    fn state_snapshot_reflects_controller() {
        let mut robot = placed_robot(4, 0, Direction::West);
        robot.set_skin(RobotSkin::Red);
        let state = robot.state();
        assert_eq!(state.facing, Direction::West);
        assert_eq!(state.position, Some(GridPosition::new(4, 0)));
        assert_eq!(state.skin, RobotSkin::Red);
    }

    #[test]
    fn custom_board_bounds_apply() {
        let mut robot = RobotController::new(NullObserver)
            .with_board(BoardConfig::default().with_columns(2).with_rows(2));
        assert_eq!(
            robot.place(GridPosition::new(2, 0), Some(Direction::North)),
            CommandOutcome::Rejected(RejectReason::IllegalPlacement)
        );
        assert_eq!(
            robot.place(GridPosition::new(1, 1), Some(Direction::North)),
            CommandOutcome::Placed
        );
        assert_eq!(
            robot.move_forward(),
            CommandOutcome::Rejected(RejectReason::IllegalMove)
        );
    }
}
