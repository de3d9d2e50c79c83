//! End-of-match detection.
//!
//! Checked every time the turn passes:
//! 1. A player who has captured seven pieces wins (the victim is down to two
//!    and can never form a mill again).
//! 2. A player in the moving phase with no piece able to step has lost.
//!
//! Truncation by step limit is applied by the engine on top of these.

use super::engine::{GameResult, TerminationReason};
use crate::core::{GameState, Player, LOSING_CAPTURE_COUNT};

/// Result and reason if the state is terminal under the capture and
/// locked-out rules, else `None`.
#[must_use]
pub fn evaluate(state: &GameState) -> Option<(GameResult, TerminationReason)> {
    for player in Player::ALL {
        if state.captured(player) >= LOSING_CAPTURE_COUNT {
            return Some((GameResult::Winner(player), TerminationReason::Captured));
        }
    }

    if is_locked_out(state, state.turn()) {
        let winner = state.turn().opponent();
        return Some((GameResult::Winner(winner), TerminationReason::LockedOut));
    }

    None
}

/// Whether `player` is in the moving phase with every piece boxed in.
///
/// Never true while either side still has pieces in reserve: the placing
/// phase always has an empty position to play.
#[must_use]
pub fn is_locked_out(state: &GameState, player: Player) -> bool {
    let placing_done = Player::ALL.iter().all(|&p| state.unplaced(p) == 0);
    let board = state.board();
    placing_done && !board.pieces(player).any(|p| board.can_step(p))
}
