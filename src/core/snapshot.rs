//! State snapshots: a plain copy of everything the rules read.
//!
//! A `StateSnapshot` is enough to rebuild the match exactly. Restoring one
//! validates it first, so a hand-built or deserialized snapshot can never
//! produce a state the rules could not have reached piece-wise.

use derive_more::{Display, Error};
use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::{LOSING_CAPTURE_COUNT, PIECES_PER_PLAYER};
use super::player::{Player, PlayerMap};
use super::position::Position;
use super::state::{GameState, Phase};
use crate::board::Board;
use crate::rules::termination;
use crate::rules::{GameResult, TerminationReason};

/// Copy of a match's rule-relevant state.
///
/// `phase` is the phase of the side to move. It is redundant with `unplaced`
/// and is checked on restore. Action history is not part of a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub board: Board,
    pub unplaced: PlayerMap<u8>,
    pub captured: PlayerMap<u8>,
    pub turn: Player,
    pub phase: Phase,
    pub lifted: Option<Position>,
    pub must_capture: bool,
    pub result: Option<GameResult>,
    pub reason: Option<TerminationReason>,
    pub step_count: u32,
}

impl StateSnapshot {
    /// Snapshot of a mid-match position with nothing pending.
    ///
    /// Captured counters are derived from what is missing, so the result
    /// always conserves pieces as long as the counts fit.
    ///
    /// ```
    /// use rust_mill::core::{GameState, Player, Position, StateSnapshot};
    /// use rust_mill::board::Board;
    ///
    /// let p = |i| Position::new(i).unwrap();
    /// let board = Board::with_pieces(&[p(0), p(1)], &[p(9)]);
    /// let snapshot = StateSnapshot::position(board, [7, 8], Player::B);
    ///
    /// let state = GameState::from_snapshot(&snapshot).unwrap();
    /// assert_eq!(state.captured(Player::A), 0);
    /// assert_eq!(state.turn(), Player::B);
    /// ```
    #[must_use]
    pub fn position(board: Board, unplaced: [u8; 2], turn: Player) -> Self {
        let unplaced = PlayerMap::new(|p| unplaced[p.index()]);
        let captured = PlayerMap::new(|p: Player| {
            let victim = p.opponent();
            let accounted = board.count(victim) + unplaced[victim] as usize;
            (PIECES_PER_PLAYER as usize).saturating_sub(accounted) as u8
        });
        let phase = if unplaced[turn] > 0 {
            Phase::Placing
        } else {
            Phase::Moving
        };
        Self {
            board,
            unplaced,
            captured,
            turn,
            phase,
            lifted: None,
            must_capture: false,
            result: None,
            reason: None,
            step_count: 0,
        }
    }

    /// Whether the snapshot is of a finished match.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.result.is_some()
    }

    /// Winner, if the match ended with one.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.result.and_then(GameResult::winner)
    }
}

/// Reasons a snapshot cannot be restored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum SnapshotError {
    #[display("{player} has a counter above 9")]
    CounterOutOfRange { player: Player },

    #[display(
        "{player} pieces do not add up: {on_board} on board + {unplaced} in reserve + {captured} captured != 9"
    )]
    PieceCountMismatch {
        player: Player,
        on_board: usize,
        unplaced: u8,
        captured: u8,
    },

    #[display("phase {phase:?} does not match the reserve of the side to move")]
    PhaseMismatch { phase: Phase },

    #[display("lifted position {position} is not a movable piece of the side to move")]
    InvalidLift { position: Position },

    #[display("inconsistent turn structure: {detail}")]
    InconsistentStage { detail: &'static str },
}

impl GameState {
    /// Copy out the rule-relevant state.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            board: self.board,
            unplaced: self.unplaced,
            captured: self.captured,
            turn: self.turn,
            phase: self.phase(self.turn),
            lifted: self.lifted,
            must_capture: self.must_capture,
            result: self.result,
            reason: self.reason,
            step_count: self.step_count,
        }
    }

    /// Rebuild a state from a snapshot, after validating it.
    ///
    /// The rebuilt state has an empty action history. A position the
    /// termination rules already decide (seven captures, or the side to move
    /// locked out) comes back terminated, with its result and reason set.
    ///
    /// # Errors
    ///
    /// Returns a `SnapshotError` if the snapshot breaks piece conservation,
    /// carries a stale phase, lifts a piece that cannot move, or mixes
    /// incompatible turn-structure flags.
    pub fn from_snapshot(snapshot: &StateSnapshot) -> Result<Self, SnapshotError> {
        validate(snapshot)?;
        let mut state = Self {
            board: snapshot.board,
            unplaced: snapshot.unplaced,
            captured: snapshot.captured,
            turn: snapshot.turn,
            lifted: snapshot.lifted,
            must_capture: snapshot.must_capture,
            result: snapshot.result,
            reason: snapshot.reason,
            step_count: snapshot.step_count,
            history: Vector::new(),
        };

        let settled = state.result.is_none() && state.lifted.is_none() && !state.must_capture;
        if settled {
            if let Some((result, reason)) = termination::evaluate(&state) {
                state.result = Some(result);
                state.reason = Some(reason);
            }
        }
        Ok(state)
    }
}

fn validate(s: &StateSnapshot) -> Result<(), SnapshotError> {
    for player in Player::ALL {
        if s.unplaced[player] > PIECES_PER_PLAYER || s.captured[player] > PIECES_PER_PLAYER {
            return Err(SnapshotError::CounterOutOfRange { player });
        }
    }

    for player in Player::ALL {
        let on_board = s.board.count(player);
        let unplaced = s.unplaced[player];
        let captured = s.captured[player.opponent()];
        if on_board + unplaced as usize + captured as usize != PIECES_PER_PLAYER as usize {
            return Err(SnapshotError::PieceCountMismatch {
                player,
                on_board,
                unplaced,
                captured,
            });
        }
    }

    let expected = if s.unplaced[s.turn] > 0 {
        Phase::Placing
    } else {
        Phase::Moving
    };
    if s.phase != expected {
        return Err(SnapshotError::PhaseMismatch { phase: s.phase });
    }

    if s.result.is_some() != s.reason.is_some() {
        return Err(SnapshotError::InconsistentStage {
            detail: "result and termination reason must be set together",
        });
    }

    if let Some(position) = s.lifted {
        if s.must_capture {
            return Err(SnapshotError::InconsistentStage {
                detail: "a piece is lifted while a capture is pending",
            });
        }
        let movable = s.phase == Phase::Moving
            && s.board.is_owned_by(position, s.turn)
            && s.board.can_step(position);
        if !movable {
            return Err(SnapshotError::InvalidLift { position });
        }
    }

    if s.must_capture && s.board.count(s.turn.opponent()) == 0 {
        return Err(SnapshotError::InconsistentStage {
            detail: "a capture is pending but the opponent has no pieces on the board",
        });
    }

    if s.must_capture && !s.board.pieces(s.turn).any(|p| s.board.forms_mill(s.turn, p)) {
        return Err(SnapshotError::InconsistentStage {
            detail: "a capture is pending but the side to move has no mill",
        });
    }

    let decided = Player::ALL
        .iter()
        .any(|&p| s.captured[p] >= LOSING_CAPTURE_COUNT);
    if decided && s.result.is_none() && (s.must_capture || s.lifted.is_some()) {
        return Err(SnapshotError::InconsistentStage {
            detail: "an action is pending in a match already won on captures",
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: u8) -> Position {
        Position::new(i).unwrap()
    }

    #[test]
    fn test_round_trip_opening() {
        let state = GameState::new();
        let restored = GameState::from_snapshot(&state.snapshot()).unwrap();
        assert_eq!(state, restored);
    }

    #[test]
    fn test_position_derives_captures() {
        let board = Board::with_pieces(&[p(0), p(1), p(2)], &[p(21), p(22), p(23)]);
        let snapshot = StateSnapshot::position(board, [0, 0], Player::A);

        assert_eq!(snapshot.captured[Player::A], 6);
        assert_eq!(snapshot.captured[Player::B], 6);
        assert_eq!(snapshot.phase, Phase::Moving);
        assert!(GameState::from_snapshot(&snapshot).is_ok());
    }

    #[test]
    fn test_rejects_counter_out_of_range() {
        let mut snapshot = GameState::new().snapshot();
        snapshot.unplaced[Player::B] = 10;

        assert_eq!(
            GameState::from_snapshot(&snapshot),
            Err(SnapshotError::CounterOutOfRange { player: Player::B })
        );
    }

    #[test]
    fn test_rejects_piece_mismatch() {
        let mut snapshot = GameState::new().snapshot();
        snapshot.board = Board::with_pieces(&[p(4)], &[]);

        let err = GameState::from_snapshot(&snapshot).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::PieceCountMismatch { player: Player::A, on_board: 1, .. }
        ));
    }

    #[test]
    fn test_rejects_stale_phase() {
        let mut snapshot = GameState::new().snapshot();
        snapshot.phase = Phase::Moving;

        assert_eq!(
            GameState::from_snapshot(&snapshot),
            Err(SnapshotError::PhaseMismatch { phase: Phase::Moving })
        );
    }

    #[test]
    fn test_rejects_bad_lift() {
        let board = Board::with_pieces(&[p(0), p(1), p(2)], &[p(9), p(4), p(14)]);
        let mut snapshot = StateSnapshot::position(board, [0, 0], Player::A);

        // Opponent piece.
        snapshot.lifted = Some(p(9));
        assert_eq!(
            GameState::from_snapshot(&snapshot),
            Err(SnapshotError::InvalidLift { position: p(9) })
        );

        // Own piece with no empty neighbor.
        snapshot.lifted = Some(p(1));
        assert_eq!(
            GameState::from_snapshot(&snapshot),
            Err(SnapshotError::InvalidLift { position: p(1) })
        );
    }

    #[test]
    fn test_rejects_result_without_reason() {
        let mut snapshot = GameState::new().snapshot();
        snapshot.result = Some(GameResult::Draw);

        assert!(matches!(
            GameState::from_snapshot(&snapshot),
            Err(SnapshotError::InconsistentStage { .. })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = SnapshotError::InvalidLift { position: p(5) };
        assert_eq!(
            err.to_string(),
            "lifted position 5 is not a movable piece of the side to move"
        );
    }

    #[test]
    fn test_snapshot_serialization() {
        let board = Board::with_pieces(&[p(0), p(13)], &[p(23)]);
        let snapshot = StateSnapshot::position(board, [7, 8], Player::B);

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: StateSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, deserialized);
    }
}
