//! Rejected actions.
//!
//! Every rule violation is reported as an `IllegalAction` naming the exact
//! precondition that failed. A rejected action never touches the state.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::core::{ActionKind, Position};

/// Why an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
pub enum IllegalAction {
    #[display("position {position} is already occupied")]
    OccupiedPosition { position: Position },

    #[display("position {position} does not hold a piece of the side to move")]
    NotOwnPiece { position: Position },

    #[display("{to} is not adjacent to {from}")]
    NotAdjacent { from: Position, to: Position },

    #[display("destination {position} is occupied")]
    DestinationOccupied { position: Position },

    #[display("position {position} does not hold an opponent piece")]
    NotOpponentPiece { position: Position },

    #[display("piece at {position} is protected by a mill")]
    ProtectedByMill { position: Position },

    #[display("expected a {expected} action, got {got}")]
    WrongPhaseAction { expected: ActionKind, got: ActionKind },

    #[display("the game has already terminated")]
    GameAlreadyTerminated,

    #[display("action index {index} is outside the action space")]
    UnknownAction { index: u16 },
}
