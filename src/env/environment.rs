//! Step-based match driver.
//!
//! `MillEnv` owns one match and exposes it through the reset/step protocol a
//! learning agent expects. Illegal actions never raise: they come back in
//! `StepInfo::error` with the match untouched.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::mask::ActionMask;
use super::observation::{Observation, ObservationEncoder, PlanesEncoder};
use crate::core::{Action, GameState, MillConfig, Player, Position, SnapshotError, StateSnapshot};
use crate::rules::{
    GameResult, IllegalAction, LegalActions, MillRules, RulesEngine, TerminationReason, Transition,
};

/// Side information returned with every step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    /// Winner, once the match has ended with one.
    pub winner: Option<Player>,
    /// Why the submitted action was rejected.
    pub error: Option<IllegalAction>,
    /// Whether the match ended on the step limit.
    pub truncated: bool,
}

/// Everything a caller needs after one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    pub snapshot: StateSnapshot,
    pub mask: ActionMask,
    pub terminated: bool,
    pub info: StepInfo,
}

impl StepResult {
    /// Whether the submitted action was accepted.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.info.error.is_none()
    }
}

/// One match behind the reset/step protocol.
///
/// ## Example
///
/// ```
/// use rust_mill::core::{Action, Position};
/// use rust_mill::env::MillEnv;
///
/// let mut env = MillEnv::default();
/// env.reset();
///
/// let result = env.step(Action::Place(Position::new(4).unwrap()));
/// assert!(result.is_ok());
/// assert!(!result.terminated);
/// assert_eq!(result.mask.count(), 23);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MillEnv {
    rules: MillRules,
    state: GameState,
}

impl MillEnv {
    /// Create an environment at the opening position.
    #[must_use]
    pub fn new(config: MillConfig) -> Self {
        Self {
            rules: MillRules::new(config),
            state: GameState::new(),
        }
    }

    // === Protocol ===

    /// Start a fresh match.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) -> StateSnapshot {
        self.state = GameState::new();
        self.state.snapshot()
    }

    /// Submit one action for the side to move.
    #[instrument(level = "debug", skip(self, action), fields(player = %self.state.turn(), action = %action))]
    pub fn step(&mut self, action: Action) -> StepResult {
        let outcome = self.rules.apply_action(&mut self.state, action);
        self.result_of(outcome)
    }

    /// Submit an action by its flat index in `[0, 96)`.
    pub fn step_index(&mut self, index: u16) -> StepResult {
        match Action::from_index(index) {
            Some(action) => self.step(action),
            None => self.result_of(Err(IllegalAction::UnknownAction { index })),
        }
    }

    /// Lift and drop in one call.
    pub fn move_piece(&mut self, from: Position, to: Position) -> StepResult {
        let outcome = self.rules.move_piece(&mut self.state, from, to);
        self.result_of(outcome)
    }

    fn result_of(&self, outcome: Result<Transition, IllegalAction>) -> StepResult {
        let truncated = self.state.termination_reason() == Some(TerminationReason::Truncated);
        StepResult {
            snapshot: self.state.snapshot(),
            mask: ActionMask::from_state(&self.state),
            terminated: self.state.is_terminated(),
            info: StepInfo {
                winner: self.state.winner(),
                error: outcome.err(),
                truncated,
            },
        }
    }

    // === Queries ===

    /// Legal actions for the side to move.
    #[must_use]
    pub fn legal_actions(&self) -> LegalActions {
        self.rules.legal_actions(&self.state)
    }

    /// Legal actions as a position mask.
    #[must_use]
    pub fn action_mask(&self) -> ActionMask {
        ActionMask::from_state(&self.state)
    }

    /// Observation from `player`'s perspective, using `PlanesEncoder`.
    #[must_use]
    pub fn observe(&self, player: Player) -> Observation {
        self.observe_with(&PlanesEncoder, player)
    }

    /// Observation from `player`'s perspective with a custom encoder.
    #[must_use]
    pub fn observe_with(&self, encoder: &dyn ObservationEncoder, player: Player) -> Observation {
        Observation::new(encoder, &self.state, player)
    }

    /// Board picture followed by a status line.
    #[must_use]
    pub fn render(&self) -> String {
        self.state.to_string()
    }

    /// Final result, once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    /// Get the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get the rules driving this match.
    #[must_use]
    pub fn rules(&self) -> &MillRules {
        &self.rules
    }

    // === Snapshots ===

    /// Copy out the current state.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        self.state.snapshot()
    }

    /// Replace the match with one rebuilt from `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; the current match is kept.
    pub fn restore(&mut self, snapshot: &StateSnapshot) -> Result<(), SnapshotError> {
        self.state = GameState::from_snapshot(snapshot)?;
        Ok(())
    }
}
