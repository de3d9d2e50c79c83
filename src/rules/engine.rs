//! Rules engine trait and the Nine Men's Morris implementation.
//!
//! The engine is the only thing that mutates a `GameState`:
//! - What actions are legal
//! - How actions modify state
//! - When the match is over

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use super::error::IllegalAction;
use super::legal::{legal_actions, LegalActions};
use super::transition;
use crate::core::{Action, ActionRecord, GameState, MillConfig, Player, Position};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Draw (no winner). Only reached by truncation.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winner, if there is one.
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(p),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminationReason {
    /// The loser was reduced to two pieces.
    Captured,
    /// The loser had no piece able to move.
    LockedOut,
    /// The step limit was reached.
    Truncated,
}

/// What an accepted action did to the turn structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// The opponent is now to move.
    TurnPassed,
    /// A piece is in hand; the same player must drop it.
    Lifted,
    /// A mill was formed; the same player must capture.
    MillFormed,
    /// The match ended.
    Terminated(GameResult),
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty once the match is over
/// - `apply_action`: Must be deterministic, and must leave the state
///   untouched when it returns `Err`
/// - `is_terminal`: Return None if the match continues
pub trait RulesEngine {
    /// Get the match configuration.
    fn config(&self) -> &MillConfig;

    /// Enumerate every legal action for the side to move.
    fn legal_actions(&self, state: &GameState) -> LegalActions;

    /// Apply an action for the side to move.
    ///
    /// # Errors
    ///
    /// Returns the violated precondition as an `IllegalAction`.
    fn apply_action(
        &self,
        state: &mut GameState,
        action: Action,
    ) -> Result<Transition, IllegalAction>;

    /// Check if the match is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Whether `action` would be accepted right now.
    fn is_legal(&self, state: &GameState, action: Action) -> bool {
        self.legal_actions(state).contains(&action)
    }
}

/// Nine Men's Morris rules.
///
/// Stateless apart from its configuration, so one instance can drive any
/// number of independent matches.
///
/// ## Example
///
/// ```
/// use rust_mill::core::{Action, GameState, Position};
/// use rust_mill::rules::{MillRules, RulesEngine, Transition};
///
/// let rules = MillRules::default();
/// let mut state = GameState::new();
///
/// let place = Action::Place(Position::new(0).unwrap());
/// assert_eq!(rules.apply_action(&mut state, place), Ok(Transition::TurnPassed));
/// assert_eq!(rules.legal_actions(&state).len(), 23);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MillRules {
    config: MillConfig,
}

impl MillRules {
    /// Create rules with the given configuration.
    #[must_use]
    pub fn new(config: MillConfig) -> Self {
        Self { config }
    }

    /// Move a piece from `from` to `to` in one call.
    ///
    /// Equivalent to `Lift(from)` followed by `Drop(to)`, and recorded as
    /// those two actions. Nothing changes unless both halves are legal.
    ///
    /// # Errors
    ///
    /// `NotOwnPiece`, `NotAdjacent` and `DestinationOccupied`, checked in
    /// that order, plus `WrongPhaseAction` / `GameAlreadyTerminated` when
    /// the side to move is not about to lift.
    #[instrument(level = "debug", skip(self, state), fields(player = %state.turn()))]
    pub fn move_piece(
        &self,
        state: &mut GameState,
        from: Position,
        to: Position,
    ) -> Result<Transition, IllegalAction> {
        let player = state.turn;
        match transition::move_piece(state, from, to) {
            Ok(t) => {
                self.record(state, player, Action::Lift(from));
                self.record(state, player, Action::Drop(to));
                Ok(self.enforce_step_limit(state).unwrap_or(t))
            }
            Err(err) => {
                warn!(%from, %to, error = %err, "move rejected");
                Err(err)
            }
        }
    }

    fn record(&self, state: &mut GameState, player: Player, action: Action) {
        if self.config.record_history {
            let record = ActionRecord::new(player, action, state.step_count);
            state.history.push_back(record);
        }
        state.step_count += 1;
    }

    /// Truncate as a draw once the step limit is reached.
    fn enforce_step_limit(&self, state: &mut GameState) -> Option<Transition> {
        let limit = self.config.max_steps?;
        if state.is_terminated() || state.step_count < limit {
            return None;
        }
        transition::finish(state, GameResult::Draw, TerminationReason::Truncated);
        Some(Transition::Terminated(GameResult::Draw))
    }
}

impl RulesEngine for MillRules {
    fn config(&self) -> &MillConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> LegalActions {
        legal_actions(state)
    }

    #[instrument(level = "debug", skip(self, state, action), fields(player = %state.turn(), action = %action))]
    fn apply_action(
        &self,
        state: &mut GameState,
        action: Action,
    ) -> Result<Transition, IllegalAction> {
        let player = state.turn;
        match transition::apply(state, action) {
            Ok(t) => {
                self.record(state, player, action);
                Ok(self.enforce_step_limit(state).unwrap_or(t))
            }
            Err(err) => {
                warn!(%action, error = %err, "action rejected");
                Err(err)
            }
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.result()
    }
}
