//! Rules of Nine Men's Morris.
//!
//! `MillRules` implements `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions modify state
//! - Win, loss and truncation
//!
//! A move in the moving phase is two protocol actions, `Lift` then `Drop`,
//! submitted by the same player. `MillRules::move_piece` does both at once.

pub mod engine;
pub mod error;
pub mod legal;
pub mod mills;
pub mod termination;

mod transition;

pub use engine::{GameResult, MillRules, RulesEngine, TerminationReason, Transition};
pub use error::IllegalAction;
pub use legal::{legal_actions, LegalActions};
pub use mills::{all_in_mills, capturable, in_mill, is_protected};
pub use termination::is_locked_out;
