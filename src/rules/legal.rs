//! Legal-action enumeration.
//!
//! Computed fresh from the state on every call; nothing is cached between
//! transitions.

use smallvec::SmallVec;

use super::mills::capturable;
use crate::core::{Action, GameState, Stage};

/// Legal actions for one decision.
///
/// No stage ever offers more than 24 actions, so this never spills to the heap.
pub type LegalActions = SmallVec<[Action; 24]>;

/// Every action the side to move may submit.
///
/// - Placing: one `Place` per empty position
/// - Moving, nothing lifted: one `Lift` per own piece with an empty neighbor
/// - Moving, piece lifted: one `Drop` per empty neighbor of the lifted piece
/// - Capture pending: one `Capture` per capturable opponent piece
/// - Terminated: nothing
#[must_use]
pub fn legal_actions(state: &GameState) -> LegalActions {
    let board = state.board();
    match state.stage() {
        Stage::Placing(_) => board.empty_positions().map(Action::Place).collect(),
        Stage::Moving {
            player,
            lifted: None,
        } => board
            .pieces(player)
            .filter(|&p| board.can_step(p))
            .map(Action::Lift)
            .collect(),
        Stage::Moving {
            lifted: Some(from), ..
        } => board.empty_neighbors(from).map(Action::Drop).collect(),
        Stage::MustCapture(player) => capturable(board, player.opponent())
            .map(Action::Capture)
            .collect(),
        Stage::Terminated(_) => LegalActions::new(),
    }
}
