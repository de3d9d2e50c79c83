//! Core types: players, positions, actions, configuration, state.
//!
//! Nothing in here knows the rules. `GameState` is a passive record; the
//! `rules` module decides what may happen to it.

pub mod player;
pub mod position;
pub mod action;
pub mod config;
pub mod state;
pub mod snapshot;

pub use player::{Player, PlayerMap};
pub use position::{OffBoard, Position, POSITION_COUNT};
pub use action::{Action, ActionKind, ActionRecord, ACTION_SPACE_SIZE};
pub use config::{MillConfig, LOSING_CAPTURE_COUNT, PIECES_PER_PLAYER};
pub use state::{GameState, Phase, Stage};
pub use snapshot::{SnapshotError, StateSnapshot};
