//! # rust-mill
//!
//! A rules engine for Nine Men's Morris (Mill), built for agents and search.
//!
//! ## Design Principles
//!
//! 1. **Rules Own Mutation**: `GameState` is a passive record. Only
//!    `RulesEngine::apply_action` changes it, and a rejected action changes
//!    nothing.
//!
//! 2. **One Topology**: adjacency and mill lines are fixed tables, checked
//!    against each other by tests.
//!
//! 3. **Errors Are Values**: illegal actions return an `IllegalAction`;
//!    reaching the end of a match is a `Transition`, not an error.
//!
//! ## Architecture
//!
//! - **Two-Step Moves**: the moving phase is `Lift` then `Drop`, so every
//!   decision picks a single position and the action space stays 4 x 24.
//!
//! - **Persistent History**: O(1) cloning via `im` so search callers can
//!   branch on states freely.
//!
//! ## Modules
//!
//! - `core`: Players, positions, actions, configuration, state, snapshots
//! - `board`: Topology tables, the `Board` grid, text rendering
//! - `rules`: `RulesEngine` and the Mill rules
//! - `env`: Reset/step protocol, action masks, observations

pub mod core;
pub mod board;
pub mod rules;
pub mod env;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap,
    Position, OffBoard, POSITION_COUNT,
    Action, ActionKind, ActionRecord, ACTION_SPACE_SIZE,
    MillConfig, PIECES_PER_PLAYER, LOSING_CAPTURE_COUNT,
    GameState, Phase, Stage,
    StateSnapshot, SnapshotError,
};

pub use crate::board::{Board, MILLS, MILL_COUNT};

pub use crate::rules::{
    GameResult, IllegalAction, LegalActions, MillRules, RulesEngine, TerminationReason, Transition,
};

pub use crate::env::{
    ActionMask, MillEnv, Observation, ObservationEncoder, PlanesEncoder, StepInfo, StepResult,
    OBSERVATION_SIZE,
};
