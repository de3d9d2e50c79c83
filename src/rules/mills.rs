//! Mill queries and the protected-mill capture rule.
//!
//! A piece standing in a complete mill cannot be captured while its owner
//! still has a piece outside every mill. Once all of the owner's pieces sit
//! in mills, every one of them is fair game.

use crate::board::Board;
use crate::core::{Player, Position};

/// Whether the piece at `position` (of either side) stands in a mill.
#[must_use]
pub fn in_mill(board: &Board, position: Position) -> bool {
    board
        .get(position)
        .is_some_and(|owner| board.forms_mill(owner, position))
}

/// Whether every piece `player` has on the board stands in a mill.
///
/// Vacuously true when `player` has no pieces on the board.
#[must_use]
pub fn all_in_mills(board: &Board, player: Player) -> bool {
    board.pieces(player).all(|p| board.forms_mill(player, p))
}

/// Whether the piece at `position` is shielded from capture.
#[must_use]
pub fn is_protected(board: &Board, position: Position) -> bool {
    match board.get(position) {
        Some(owner) => board.forms_mill(owner, position) && !all_in_mills(board, owner),
        None => false,
    }
}

/// Pieces of `victim` that may be captured right now.
pub fn capturable(board: &Board, victim: Player) -> impl Iterator<Item = Position> + '_ {
    let everything = all_in_mills(board, victim);
    board
        .pieces(victim)
        .filter(move |&p| everything || !board.forms_mill(victim, p))
}
