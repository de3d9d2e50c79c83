//! State transitions for the four action kinds.
//!
//! Each transition checks all of its preconditions before writing anything,
//! so an `Err` always leaves the state exactly as it was.

use tracing::{debug, info};

use super::engine::{GameResult, TerminationReason, Transition};
use super::error::IllegalAction;
use super::mills::all_in_mills;
use super::termination;
use crate::board::is_adjacent;
use crate::core::{Action, ActionKind, GameState, Position};

/// Apply one protocol action for the side to move.
pub(crate) fn apply(state: &mut GameState, action: Action) -> Result<Transition, IllegalAction> {
    expect_kind(state, action.kind())?;
    match action {
        Action::Place(position) => place(state, position),
        Action::Lift(position) => lift(state, position),
        Action::Drop(position) => drop_lifted(state, position),
        Action::Capture(position) => capture(state, position),
    }
}

/// Lift and drop in one call. Nothing is written unless both halves are legal.
pub(crate) fn move_piece(
    state: &mut GameState,
    from: Position,
    to: Position,
) -> Result<Transition, IllegalAction> {
    expect_kind(state, ActionKind::Lift)?;
    if !state.board.is_owned_by(from, state.turn) {
        return Err(IllegalAction::NotOwnPiece { position: from });
    }
    if !is_adjacent(from, to) {
        return Err(IllegalAction::NotAdjacent { from, to });
    }
    if !state.board.is_empty(to) {
        return Err(IllegalAction::DestinationOccupied { position: to });
    }

    lift(state, from)?;
    drop_lifted(state, to)
}

fn expect_kind(state: &GameState, got: ActionKind) -> Result<(), IllegalAction> {
    match state.action_kind() {
        None => Err(IllegalAction::GameAlreadyTerminated),
        Some(expected) if expected != got => {
            Err(IllegalAction::WrongPhaseAction { expected, got })
        }
        Some(_) => Ok(()),
    }
}

fn place(state: &mut GameState, position: Position) -> Result<Transition, IllegalAction> {
    if !state.board.is_empty(position) {
        return Err(IllegalAction::OccupiedPosition { position });
    }

    let player = state.turn;
    state.board.set(position, Some(player));
    state.unplaced[player] -= 1;
    Ok(arrive(state, position))
}

fn lift(state: &mut GameState, position: Position) -> Result<Transition, IllegalAction> {
    if !state.board.is_owned_by(position, state.turn) {
        return Err(IllegalAction::NotOwnPiece { position });
    }
    // Lifting a boxed-in piece would leave no legal drop.
    if !state.board.can_step(position) {
        return Err(IllegalAction::DestinationOccupied { position });
    }

    state.lifted = Some(position);
    debug!(player = %state.turn, %position, "piece lifted");
    Ok(Transition::Lifted)
}

fn drop_lifted(state: &mut GameState, to: Position) -> Result<Transition, IllegalAction> {
    let Some(from) = state.lifted else {
        return Err(IllegalAction::WrongPhaseAction {
            expected: ActionKind::Lift,
            got: ActionKind::Drop,
        });
    };
    if !is_adjacent(from, to) {
        return Err(IllegalAction::NotAdjacent { from, to });
    }
    if !state.board.is_empty(to) {
        return Err(IllegalAction::DestinationOccupied { position: to });
    }

    let player = state.turn;
    state.board.set(from, None);
    state.board.set(to, Some(player));
    state.lifted = None;
    Ok(arrive(state, to))
}

fn capture(state: &mut GameState, target: Position) -> Result<Transition, IllegalAction> {
    let player = state.turn;
    let victim = player.opponent();
    if !state.board.is_owned_by(target, victim) {
        return Err(IllegalAction::NotOpponentPiece { position: target });
    }
    if state.board.forms_mill(victim, target) && !all_in_mills(&state.board, victim) {
        return Err(IllegalAction::ProtectedByMill { position: target });
    }

    state.board.set(target, None);
    state.captured[player] += 1;
    state.must_capture = false;
    debug!(%player, position = %target, captured = state.captured[player], "piece captured");
    Ok(switch_turn(state))
}

/// A piece of the side to move has just landed on `position`.
fn arrive(state: &mut GameState, position: Position) -> Transition {
    let player = state.turn;
    if !state.board.forms_mill(player, position) {
        return switch_turn(state);
    }

    if state.board.count(player.opponent()) == 0 {
        debug!(%player, %position, "mill formed with nothing to capture");
        return switch_turn(state);
    }

    state.must_capture = true;
    debug!(%player, %position, "mill formed");
    Transition::MillFormed
}

/// Pass the turn, then check whether the match is over.
fn switch_turn(state: &mut GameState) -> Transition {
    state.turn = state.turn.opponent();

    match termination::evaluate(state) {
        Some((result, reason)) => {
            finish(state, result, reason);
            Transition::Terminated(result)
        }
        None => {
            debug!(player = %state.turn, phase = ?state.phase(state.turn), "turn passed");
            Transition::TurnPassed
        }
    }
}

/// End the match. A lifted piece goes back down on its square and any owed
/// capture is dropped, so a finished state never has an action pending.
pub(crate) fn finish(state: &mut GameState, result: GameResult, reason: TerminationReason) {
    state.lifted = None;
    state.must_capture = false;
    state.result = Some(result);
    state.reason = Some(reason);
    info!(%result, ?reason, steps = state.step_count, "match over");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::{Player, StateSnapshot};

    fn p(i: u8) -> Position {
        Position::new(i).unwrap()
    }

    fn moving(a: &[u8], b: &[u8], turn: Player) -> GameState {
        let a: Vec<_> = a.iter().map(|&i| p(i)).collect();
        let b: Vec<_> = b.iter().map(|&i| p(i)).collect();
        let board = Board::with_pieces(&a, &b);
        GameState::from_snapshot(&StateSnapshot::position(board, [0, 0], turn)).unwrap()
    }

    #[test]
    fn test_place_switches_turn() {
        let mut state = GameState::new();

        let t = apply(&mut state, Action::Place(p(4))).unwrap();

        assert_eq!(t, Transition::TurnPassed);
        assert_eq!(state.board().get(p(4)), Some(Player::A));
        assert_eq!(state.unplaced(Player::A), 8);
        assert_eq!(state.turn(), Player::B);
    }

    #[test]
    fn test_place_on_occupied_is_rejected() {
        let mut state = GameState::new();
        apply(&mut state, Action::Place(p(4))).unwrap();
        let before = state.clone();

        let err = apply(&mut state, Action::Place(p(4))).unwrap_err();

        assert_eq!(err, IllegalAction::OccupiedPosition { position: p(4) });
        assert_eq!(state, before);
    }

    #[test]
    fn test_wrong_kind_is_rejected() {
        let mut state = GameState::new();

        let err = apply(&mut state, Action::Lift(p(0))).unwrap_err();

        assert_eq!(
            err,
            IllegalAction::WrongPhaseAction {
                expected: ActionKind::Place,
                got: ActionKind::Lift,
            }
        );
    }

    #[test]
    fn test_lift_then_drop() {
        let mut state = moving(&[0, 4, 22], &[1, 9, 20], Player::A);

        assert_eq!(apply(&mut state, Action::Lift(p(4))), Ok(Transition::Lifted));
        assert_eq!(state.turn(), Player::A);
        assert_eq!(state.lifted(), Some(p(4)));
        // The lifted piece stays on its square until dropped.
        assert_eq!(state.board().get(p(4)), Some(Player::A));

        assert_eq!(apply(&mut state, Action::Drop(p(7))), Ok(Transition::TurnPassed));
        assert_eq!(state.board().get(p(4)), None);
        assert_eq!(state.board().get(p(7)), Some(Player::A));
        assert_eq!(state.lifted(), None);
        assert_eq!(state.turn(), Player::B);
    }

    #[test]
    fn test_lift_boxed_in_piece_is_rejected() {
        let mut state = moving(&[0, 4, 22], &[1, 9, 20], Player::A);

        let err = apply(&mut state, Action::Lift(p(0))).unwrap_err();
        assert_eq!(err, IllegalAction::DestinationOccupied { position: p(0) });
    }

    #[test]
    fn test_drop_checks_adjacency_before_occupancy() {
        let mut state = moving(&[0, 4, 22], &[1, 9, 20], Player::A);
        apply(&mut state, Action::Lift(p(4))).unwrap();
        let before = state.clone();

        assert_eq!(
            apply(&mut state, Action::Drop(p(20))),
            Err(IllegalAction::NotAdjacent { from: p(4), to: p(20) })
        );
        assert_eq!(
            apply(&mut state, Action::Drop(p(1))),
            Err(IllegalAction::DestinationOccupied { position: p(1) })
        );
        assert_eq!(
            apply(&mut state, Action::Drop(p(4))),
            Err(IllegalAction::NotAdjacent { from: p(4), to: p(4) })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_piece_validates_in_order() {
        let mut state = moving(&[0, 4, 22], &[1, 9, 20], Player::A);
        let before = state.clone();

        assert_eq!(
            move_piece(&mut state, p(1), p(2)),
            Err(IllegalAction::NotOwnPiece { position: p(1) })
        );
        assert_eq!(
            move_piece(&mut state, p(0), p(2)),
            Err(IllegalAction::NotAdjacent { from: p(0), to: p(2) })
        );
        assert_eq!(
            move_piece(&mut state, p(0), p(1)),
            Err(IllegalAction::DestinationOccupied { position: p(1) })
        );
        assert_eq!(state, before);

        assert_eq!(move_piece(&mut state, p(22), p(23)), Ok(Transition::TurnPassed));
        assert_eq!(state.board().get(p(23)), Some(Player::A));
        assert_eq!(state.lifted(), None);
    }

    #[test]
    fn test_mill_then_capture() {
        let mut state = moving(&[0, 1, 14], &[21, 22, 10, 18], Player::A);

        assert_eq!(move_piece(&mut state, p(14), p(2)), Ok(Transition::MillFormed));
        assert_eq!(state.turn(), Player::A);
        assert!(state.must_capture());

        assert_eq!(
            apply(&mut state, Action::Capture(p(0))),
            Err(IllegalAction::NotOpponentPiece { position: p(0) })
        );
        assert_eq!(apply(&mut state, Action::Capture(p(10))), Ok(Transition::TurnPassed));
        assert_eq!(state.board().get(p(10)), None);
        assert_eq!(state.captured(Player::A), 6);
        assert_eq!(state.turn(), Player::B);
        assert!(!state.must_capture());
    }

    #[test]
    fn test_mill_with_no_opponent_pieces_passes_turn() {
        // B has pieces only in reserve.
        let board = Board::with_pieces(&[p(0), p(1)], &[]);
        let snapshot = StateSnapshot::position(board, [5, 3], Player::A);
        let mut state = GameState::from_snapshot(&snapshot).unwrap();

        assert_eq!(apply(&mut state, Action::Place(p(2))), Ok(Transition::TurnPassed));
        assert!(!state.must_capture());
        assert_eq!(state.turn(), Player::B);
    }

    #[test]
    fn test_terminated_rejects_everything() {
        let mut state = moving(&[0, 1, 14], &[21, 22, 10], Player::A);
        finish(&mut state, GameResult::Draw, TerminationReason::Truncated);

        assert_eq!(
            apply(&mut state, Action::Lift(p(14))),
            Err(IllegalAction::GameAlreadyTerminated)
        );
        assert_eq!(
            move_piece(&mut state, p(14), p(2)),
            Err(IllegalAction::GameAlreadyTerminated)
        );
    }
}
