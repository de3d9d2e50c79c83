//! Observation encoding for learning agents.
//!
//! Transforms a `GameState` into a flat feature vector from one player's
//! perspective.

use serde::{Deserialize, Serialize};

use super::mask::ActionMask;
use crate::core::{ActionKind, GameState, Player, ACTION_SPACE_SIZE, POSITION_COUNT};

/// Length of the `PlanesEncoder` feature vector.
pub const OBSERVATION_SIZE: usize = 3 * POSITION_COUNT;

/// Encodes game state into features for a learning agent.
///
/// Each encoder defines:
/// - How to convert state to features from a player's perspective
/// - The shape of the output
/// - The size of the action space
pub trait ObservationEncoder: Send + Sync {
    /// Encode the game state from `perspective`.
    fn encode(&self, state: &GameState, perspective: Player) -> Vec<f32>;

    /// Shape of the encoded features.
    fn output_shape(&self) -> Vec<usize>;

    /// Size of the flat action space the policy must cover.
    fn action_space_size(&self) -> usize {
        ACTION_SPACE_SIZE
    }
}

/// Three 24-wide planes, concatenated:
///
/// 1. `perspective`'s pieces
/// 2. opponent pieces
/// 3. one-hot of the lifted piece (all zero when nothing is lifted)
///
/// Every value is `0.0` or `1.0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlanesEncoder;

impl ObservationEncoder for PlanesEncoder {
    fn encode(&self, state: &GameState, perspective: Player) -> Vec<f32> {
        let mut features = vec![0.0; OBSERVATION_SIZE];
        let board = state.board();

        for position in board.pieces(perspective) {
            features[position.index()] = 1.0;
        }
        for position in board.pieces(perspective.opponent()) {
            features[POSITION_COUNT + position.index()] = 1.0;
        }
        if let Some(position) = state.lifted() {
            features[2 * POSITION_COUNT + position.index()] = 1.0;
        }

        features
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![OBSERVATION_SIZE]
    }
}

/// What one player sees before acting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub features: Vec<f32>,
    pub mask: ActionMask,
}

impl Observation {
    /// Encode `state` from `perspective` with `encoder`.
    #[must_use]
    pub fn new(encoder: &dyn ObservationEncoder, state: &GameState, perspective: Player) -> Self {
        Self {
            features: encoder.encode(state, perspective),
            mask: ActionMask::from_state(state),
        }
    }

    /// Kind of action the side to move must submit.
    #[must_use]
    pub fn action_kind(&self) -> Option<ActionKind> {
        self.mask.kind
    }
}
