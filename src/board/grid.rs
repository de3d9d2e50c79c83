//! Board contents: who owns each of the 24 positions.

use serde::{Deserialize, Serialize};

use super::topology::{mills_containing, neighbors};
use crate::core::{Player, Position, POSITION_COUNT};

/// Ownership of every board position. `None` is an empty intersection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Player>; POSITION_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit piece lists.
    ///
    /// Later entries win if a position appears in both lists.
    #[must_use]
    pub fn with_pieces(a: &[Position], b: &[Position]) -> Self {
        let mut board = Self::new();
        for &position in a {
            board.set(position, Some(Player::A));
        }
        for &position in b {
            board.set(position, Some(Player::B));
        }
        board
    }

    /// Owner of `position`, if any.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Player> {
        self.cells[position.index()]
    }

    pub(crate) fn set(&mut self, position: Position, owner: Option<Player>) {
        self.cells[position.index()] = owner;
    }

    /// Whether `position` is empty.
    #[must_use]
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    /// Whether `position` holds one of `player`'s pieces.
    #[must_use]
    pub fn is_owned_by(&self, position: Position, player: Player) -> bool {
        self.get(position) == Some(player)
    }

    /// All cells in position order.
    #[must_use]
    pub fn cells(&self) -> &[Option<Player>; POSITION_COUNT] {
        &self.cells
    }

    /// Positions held by `player`.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| self.is_owned_by(p, player))
    }

    /// Empty positions.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| self.is_empty(p))
    }

    /// Number of pieces `player` has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    /// Number of occupied positions.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Empty positions one step away from `position`.
    pub fn empty_neighbors(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        neighbors(position)
            .iter()
            .copied()
            .filter(move |&n| self.is_empty(n))
    }

    /// Whether the piece at `position` has anywhere to go.
    #[must_use]
    pub fn can_step(&self, position: Position) -> bool {
        self.empty_neighbors(position).next().is_some()
    }

    /// Whether `player` owns a full mill line through `position`.
    ///
    /// Only the two lines through `position` are inspected.
    #[must_use]
    pub fn forms_mill(&self, player: Player, position: Position) -> bool {
        mills_containing(position).any(|line| line.iter().all(|&p| self.is_owned_by(p, player)))
    }
}
