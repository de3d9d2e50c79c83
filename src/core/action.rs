//! Action representation: kind + board position.
//!
//! Every action names exactly one position. What the position means depends
//! on the kind:
//! - `Place(p)`: put a reserve piece on empty `p` (placing phase)
//! - `Lift(p)`: pick up the mover's piece at `p` (moving phase, first half)
//! - `Drop(p)`: put the lifted piece down on `p` (moving phase, second half)
//! - `Capture(p)`: remove the opponent's piece at `p` (after forming a mill)
//!
//! ## Flat encoding
//!
//! Agents with a single discrete action space use `index = kind * 24 + position`,
//! which covers `0..96`. The encoding is fixed: the same index always means the
//! same action.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::position::{Position, POSITION_COUNT};

/// Total size of the flat action space.
pub const ACTION_SPACE_SIZE: usize = ActionKind::ALL.len() * POSITION_COUNT;

/// The kind of action the side to move must submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Place,
    Lift,
    Drop,
    Capture,
}

impl ActionKind {
    /// All kinds, in flat-encoding order.
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Place,
        ActionKind::Lift,
        ActionKind::Drop,
        ActionKind::Capture,
    ];

    /// Offset of this kind's block in the flat encoding.
    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            ActionKind::Place => 0,
            ActionKind::Lift => POSITION_COUNT,
            ActionKind::Drop => 2 * POSITION_COUNT,
            ActionKind::Capture => 3 * POSITION_COUNT,
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionKind::Place => "place",
            ActionKind::Lift => "lift",
            ActionKind::Drop => "drop",
            ActionKind::Capture => "capture",
        };
        f.write_str(name)
    }
}

/// A complete game action.
///
/// ## Example
///
/// ```
/// use rust_mill::core::{Action, ActionKind, Position};
///
/// let place = Action::Place(Position::new(4).unwrap());
/// assert_eq!(place.kind(), ActionKind::Place);
/// assert_eq!(place.to_index(), 4);
///
/// let capture = Action::from_index(3 * 24 + 10).unwrap();
/// assert_eq!(capture, Action::Capture(Position::new(10).unwrap()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Place(Position),
    Lift(Position),
    Drop(Position),
    Capture(Position),
}

impl Action {
    /// Create an action of the given kind at `position`.
    #[must_use]
    pub const fn new(kind: ActionKind, position: Position) -> Self {
        match kind {
            ActionKind::Place => Action::Place(position),
            ActionKind::Lift => Action::Lift(position),
            ActionKind::Drop => Action::Drop(position),
            ActionKind::Capture => Action::Capture(position),
        }
    }

    /// Get the action kind.
    #[must_use]
    pub const fn kind(self) -> ActionKind {
        match self {
            Action::Place(_) => ActionKind::Place,
            Action::Lift(_) => ActionKind::Lift,
            Action::Drop(_) => ActionKind::Drop,
            Action::Capture(_) => ActionKind::Capture,
        }
    }

    /// Get the position the action refers to.
    #[must_use]
    pub const fn position(self) -> Position {
        match self {
            Action::Place(p) | Action::Lift(p) | Action::Drop(p) | Action::Capture(p) => p,
        }
    }

    /// Encode as a flat index in `0..ACTION_SPACE_SIZE`.
    #[must_use]
    pub const fn to_index(self) -> u16 {
        (self.kind().offset() + self.position().index()) as u16
    }

    /// Decode a flat index. Returns `None` outside `0..ACTION_SPACE_SIZE`.
    #[must_use]
    pub fn from_index(index: u16) -> Option<Self> {
        let index = index as usize;
        let kind = *ActionKind::ALL.get(index / POSITION_COUNT)?;
        let position = Position::new((index % POSITION_COUNT) as u8)?;
        Some(Action::new(kind, position))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.kind(), self.position())
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay/debugging and for search callers that need the line of
/// play leading to a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// Step number (0-based count of applied actions before this one).
    pub step: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: Player, action: Action, step: u32) -> Self {
        Self {
            player,
            action,
            step,
        }
    }
}
