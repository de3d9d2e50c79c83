//! Action masks over the 24 positions.

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionKind, GameState, Position, ACTION_SPACE_SIZE, POSITION_COUNT};
use crate::rules::legal_actions;

/// Which positions the side to move may target, and with what kind of action.
///
/// Only one action kind is ever legal at a time, so a 24-wide mask plus the
/// kind describes the full legal set. `kind` is `None` once the match is over,
/// in which case the mask is all `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionMask {
    pub kind: Option<ActionKind>,
    pub mask: [bool; POSITION_COUNT],
}

impl ActionMask {
    /// Mask of the legal actions in `state`.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let mut mask = [false; POSITION_COUNT];
        for action in legal_actions(state) {
            mask[action.position().index()] = true;
        }
        Self {
            kind: state.action_kind(),
            mask,
        }
    }

    /// Whether `action` is legal.
    #[must_use]
    pub fn contains(&self, action: Action) -> bool {
        self.kind == Some(action.kind()) && self.mask[action.position().index()]
    }

    /// Number of legal actions.
    #[must_use]
    pub fn count(&self) -> usize {
        self.mask.iter().filter(|&&allowed| allowed).count()
    }

    /// Whether no action is legal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// The legal actions, in position order.
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        let kind = self.kind;
        Position::all()
            .filter(move |p| self.mask[p.index()])
            .filter_map(move |p| kind.map(|k| Action::new(k, p)))
    }

    /// Expand to the 96-wide flat action space.
    #[must_use]
    pub fn to_flat(&self) -> Vec<bool> {
        let mut flat = vec![false; ACTION_SPACE_SIZE];
        if let Some(kind) = self.kind {
            let offset = kind.offset();
            flat[offset..offset + POSITION_COUNT].copy_from_slice(&self.mask);
        }
        flat
    }
}
