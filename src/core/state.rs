//! Game state: the complete mutable record of one match.
//!
//! ## GameState
//!
//! - Board contents
//! - Per-player unplaced and captured counters
//! - Side to move, lifted piece, pending capture
//! - Result once the match has ended
//! - Action history
//!
//! The phase is never stored: a player is placing while they have pieces in
//! reserve and moving afterwards.
//!
//! Only the rules engine mutates a `GameState`. Outside the crate it is read
//! through accessors, copied out as a `StateSnapshot`, or rebuilt from one.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionKind, ActionRecord};
use super::config::PIECES_PER_PLAYER;
use super::player::{Player, PlayerMap};
use super::position::Position;
use crate::board::Board;
use crate::rules::{GameResult, TerminationReason};

/// A player's phase, derived from their reserve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Pieces remain in reserve.
    Placing,
    /// All pieces have entered the board.
    Moving,
}

/// Where the match is in its turn structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// `player` must place a piece.
    Placing(Player),
    /// `player` must lift a piece, or drop the one already lifted.
    Moving {
        player: Player,
        lifted: Option<Position>,
    },
    /// `player` formed a mill and must remove an opponent piece.
    MustCapture(Player),
    /// The match is over.
    Terminated(GameResult),
}

/// Complete state of one match.
///
/// Uses `im` for the action history so cloning stays O(1) for search
/// callers that branch on states.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) unplaced: PlayerMap<u8>,
    pub(crate) captured: PlayerMap<u8>,
    pub(crate) turn: Player,
    pub(crate) lifted: Option<Position>,
    pub(crate) must_capture: bool,
    pub(crate) result: Option<GameResult>,
    pub(crate) reason: Option<TerminationReason>,
    pub(crate) step_count: u32,
    pub(crate) history: Vector<ActionRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create the opening state.
    ///
    /// ## Defaults
    ///
    /// - Empty board
    /// - 9 pieces in reserve per player, none captured
    /// - Player A to move
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            unplaced: PlayerMap::with_value(PIECES_PER_PLAYER),
            captured: PlayerMap::with_value(0),
            turn: Player::A,
            lifted: None,
            must_capture: false,
            result: None,
            reason: None,
            step_count: 0,
            history: Vector::new(),
        }
    }

    // === Board ===

    /// Get the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    // === Counters ===

    /// Pieces `player` still has in reserve.
    #[must_use]
    pub fn unplaced(&self, player: Player) -> u8 {
        self.unplaced[player]
    }

    /// Opponent pieces `player` has removed.
    #[must_use]
    pub fn captured(&self, player: Player) -> u8 {
        self.captured[player]
    }

    /// Applied actions so far.
    #[must_use]
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    // === Turn Structure ===

    /// Side expected to act next.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Piece picked up and awaiting its drop, if any.
    #[must_use]
    pub fn lifted(&self) -> Option<Position> {
        self.lifted
    }

    /// Whether the side to move owes a capture.
    #[must_use]
    pub fn must_capture(&self) -> bool {
        self.must_capture
    }

    /// Phase of `player`, derived from their reserve.
    #[must_use]
    pub fn phase(&self, player: Player) -> Phase {
        if self.unplaced[player] > 0 {
            Phase::Placing
        } else {
            Phase::Moving
        }
    }

    /// Current position in the turn structure.
    #[must_use]
    pub fn stage(&self) -> Stage {
        if let Some(result) = self.result {
            return Stage::Terminated(result);
        }
        if self.must_capture {
            return Stage::MustCapture(self.turn);
        }
        match self.phase(self.turn) {
            Phase::Placing => Stage::Placing(self.turn),
            Phase::Moving => Stage::Moving {
                player: self.turn,
                lifted: self.lifted,
            },
        }
    }

    /// Kind of action the side to move must submit, or `None` once terminated.
    #[must_use]
    pub fn action_kind(&self) -> Option<ActionKind> {
        match self.stage() {
            Stage::Placing(_) => Some(ActionKind::Place),
            Stage::Moving { lifted: None, .. } => Some(ActionKind::Lift),
            Stage::Moving { lifted: Some(_), .. } => Some(ActionKind::Drop),
            Stage::MustCapture(_) => Some(ActionKind::Capture),
            Stage::Terminated(_) => None,
        }
    }

    // === Termination ===

    /// Whether the match is over.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.result.is_some()
    }

    /// Final result, once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Winner, if the match ended with one.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.result.and_then(GameResult::winner)
    }

    /// Why the match ended.
    #[must_use]
    pub fn termination_reason(&self) -> Option<TerminationReason> {
        self.reason
    }

    // === Action History ===

    /// Every applied action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Total pieces accounted for: reserve + board + captured.
    ///
    /// Always `2 * PIECES_PER_PLAYER` for a reachable state.
    #[must_use]
    pub fn piece_total(&self) -> usize {
        Player::ALL
            .iter()
            .map(|&p| self.unplaced[p] as usize + self.captured[p] as usize)
            .sum::<usize>()
            + self.board.occupied()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        let placed = PIECES_PER_PLAYER - self.unplaced[self.turn];
        write!(f, "Player: {}. Pieces placed: {}, lifted: ", self.turn, placed)?;
        match self.lifted {
            Some(p) => write!(f, "{p}")?,
            None => write!(f, "none")?,
        }
        if let Some(result) = self.result {
            write!(f, ". Result: {result}")?;
        }
        Ok(())
    }
}
