//! Observer seam between the controller and the presentation layer.
//!
//! The presentation layer (grid renderer, CLI, web UI) implements
//! [`RobotObserver`] and is handed to the controller at construction. Every
//! processed command produces exactly one callback, synchronously, before the
//! controller method returns. Rejections arrive through [`on_report`] with
//! the rejection message; there is no separate error channel.
//!
//! All methods have empty default bodies so a collaborator implements only
//! what it renders.
//!
//! [`on_report`]: RobotObserver::on_report
//!
//! # Example
//!
//! ```rust
//! use gridbot::{RobotController, RobotObserver};
//!
//! struct Printer;
//!
//! impl RobotObserver for Printer {
//!     fn on_report(&mut self, message: &str) {
//!         println!("{message}");
//!     }
//! }
//!
//! let mut robot = RobotController::new(Printer);
//! robot.process_command("place 1,2,east");
//! robot.process_command("report"); // prints "Output: 1, 2, East"
//! ```

use crate::RobotSkin;

/// Callback interface for state-change notifications.
///
/// The controller owns its observer and calls it synchronously, at most once
/// per processed command.
pub trait RobotObserver {
    /// The selected skin changed.
    fn on_skin_changed(&mut self, skin: RobotSkin) {
        let _ = skin;
    }

    /// The robot was placed at a new position.
    fn on_placed(&mut self) {}

    /// The robot moved one cell forward.
    fn on_moved(&mut self) {}

    /// The robot turned in place; `is_left` is true for a counter-clockwise
    /// turn.
    fn on_turned(&mut self, is_left: bool) {
        let _ = is_left;
    }

    /// A report or rejection message was produced.
    fn on_report(&mut self, message: &str) {
        let _ = message;
    }
}

/// Observer that ignores every notification.
///
/// Useful when driving the controller headless, e.g. in tests that only
/// inspect returned [`CommandOutcome`](crate::CommandOutcome)s.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl RobotObserver for NullObserver {}

// ============================================================================
// Recording observer (test double)
// ============================================================================

/// A single recorded observer callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObserverEvent {
    /// `on_skin_changed` was called.
    SkinChanged(RobotSkin),
    /// `on_placed` was called.
    Placed,
    /// `on_moved` was called.
    Moved,
    /// `on_turned` was called.
    Turned {
        /// True for a left turn.
        is_left: bool,
    },
    /// `on_report` was called with this message.
    Report(String),
}

/// Observer that records every callback for verification.
///
/// The crate's test double, in the same spirit as a mock display: drive the
/// controller, then inspect [`events`](Self::events).
///
/// # Example
///
/// ```rust
/// use gridbot::{ObserverEvent, RecordingObserver, RobotController};
///
/// let mut robot = RobotController::new(RecordingObserver::new());
/// robot.process_command("place 0,0,north");
/// robot.process_command("move");
///
/// assert_eq!(
///     robot.observer().events(),
///     &[ObserverEvent::Placed, ObserverEvent::Moved]
/// );
/// ```
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Vec<ObserverEvent>,
}

impl RecordingObserver {
    /// Creates a new recording observer with no recorded events.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[ObserverEvent] {
        &self.events
    }

    /// The most recent event, if any.
    pub fn last(&self) -> Option<&ObserverEvent> {
        self.events.last()
    }

    /// All report messages received, oldest first.
    pub fn reports(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ObserverEvent::Report(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Clears the recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl RobotObserver for RecordingObserver {
    fn on_skin_changed(&mut self, skin: RobotSkin) {
        self.events.push(ObserverEvent::SkinChanged(skin));
    }

    fn on_placed(&mut self) {
        self.events.push(ObserverEvent::Placed);
    }

    fn on_moved(&mut self) {
        self.events.push(ObserverEvent::Moved);
    }

    fn on_turned(&mut self, is_left: bool) {
        self.events.push(ObserverEvent::Turned { is_left });
    }

    fn on_report(&mut self, message: &str) {
        self.events.push(ObserverEvent::Report(message.into()));
    }
}
