//! Property tests over random legal play.
//!
//! Every reachable state must satisfy:
//! - 18 pieces accounted for (reserve + board + captured)
//! - each position held by at most one side
//! - the mask lists exactly the actions `apply_action` accepts
//! - rejected actions change nothing

mod common;

use proptest::prelude::*;
use rust_mill::core::{Action, GameState, Player, ACTION_SPACE_SIZE, PIECES_PER_PLAYER};
use rust_mill::env::ActionMask;
use rust_mill::rules::{MillRules, RulesEngine};

fn check_conservation(state: &GameState) {
    assert_eq!(state.piece_total(), 2 * PIECES_PER_PLAYER as usize);
    for player in Player::ALL {
        let on_board = state.board().count(player);
        let accounted = on_board
            + state.unplaced(player) as usize
            + state.captured(player.opponent()) as usize;
        assert_eq!(accounted, PIECES_PER_PLAYER as usize, "{player}");
    }
}

fn check_ownership(state: &GameState) {
    let board = state.board();
    assert_eq!(
        board.count(Player::A) + board.count(Player::B),
        board.occupied()
    );
    for position in board.pieces(Player::A) {
        assert!(!board.is_owned_by(position, Player::B));
    }
}

/// Try every flat index on a copy; accepted iff masked, and rejections are no-ops.
fn check_mask(rules: &MillRules, state: &GameState) {
    let flat = ActionMask::from_state(state).to_flat();
    for index in 0..ACTION_SPACE_SIZE as u16 {
        let Some(action) = Action::from_index(index) else {
            panic!("index {index} should decode");
        };
        let mut probe = state.clone();
        match rules.apply_action(&mut probe, action) {
            Ok(_) => assert!(flat[index as usize], "{action} accepted but not masked"),
            Err(err) => {
                assert!(!flat[index as usize], "{action} masked but rejected: {err}");
                assert_eq!(&probe, state, "{action} changed state on rejection");
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_random_play_keeps_invariants(choices in prop::collection::vec(any::<u16>(), 1..160)) {
        common::init_tracing();
        let rules = MillRules::default();
        let mut state = GameState::new();

        for choice in choices {
            check_conservation(&state);
            check_ownership(&state);
            check_mask(&rules, &state);

            let legal = rules.legal_actions(&state);
            if legal.is_empty() {
                prop_assert!(state.is_terminated());
                break;
            }
            let action = legal[choice as usize % legal.len()];
            prop_assert!(rules.apply_action(&mut state, action).is_ok());
            prop_assert_eq!(state.history().back().map(|r| r.action), Some(action));
        }
    }

    #[test]
    fn prop_snapshot_restores_equal_state(choices in prop::collection::vec(any::<u16>(), 1..120)) {
        let rules = MillRules::new(rust_mill::MillConfig::default().with_history(false));
        let mut state = GameState::new();

        for choice in choices {
            let legal = rules.legal_actions(&state);
            if legal.is_empty() {
                break;
            }
            let action = legal[choice as usize % legal.len()];
            rules.apply_action(&mut state, action).unwrap();

            let restored = GameState::from_snapshot(&state.snapshot());
            prop_assert_eq!(restored.as_ref(), Ok(&state));
        }
    }
}
