//! Match configuration and rule constants.
//!
//! The rules themselves are fixed by the canonical game; `MillConfig` only
//! covers the knobs a host needs around them (step limits, history).

use serde::{Deserialize, Serialize};

/// Pieces each player starts with in reserve.
pub const PIECES_PER_PLAYER: u8 = 9;

/// Captures that win the match (opponent reduced to two pieces).
pub const LOSING_CAPTURE_COUNT: u8 = PIECES_PER_PLAYER - 2;

/// Match configuration.
///
/// ## Example
///
/// ```
/// use rust_mill::core::MillConfig;
///
/// let config = MillConfig::default().with_max_steps(1000);
/// assert_eq!(config.max_steps, Some(1000));
/// assert!(config.record_history);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MillConfig {
    /// Applied actions after which the match is truncated as a draw.
    /// `None` means no limit.
    pub max_steps: Option<u32>,

    /// Append every applied action to the state's history.
    pub record_history: bool,
}

impl Default for MillConfig {
    fn default() -> Self {
        Self {
            max_steps: None,
            record_history: true,
        }
    }
}

impl MillConfig {
    /// Truncate the match as a draw after `steps` applied actions.
    #[must_use]
    pub fn with_max_steps(mut self, steps: u32) -> Self {
        self.max_steps = Some(steps);
        self
    }

    /// Enable or disable action history.
    #[must_use]
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = MillConfig::default();
        assert_eq!(config.max_steps, None);
        assert!(config.record_history);
    }

    #[test]
    fn test_builder() {
        let config = MillConfig::default().with_max_steps(50).with_history(false);
        assert_eq!(config.max_steps, Some(50));
        assert!(!config.record_history);
    }

    #[test]
    fn test_constants() {
        assert_eq!(PIECES_PER_PLAYER, 9);
        assert_eq!(LOSING_CAPTURE_COUNT, 7);
    }

    #[test]
    fn test_serialization() {
        let config = MillConfig::default().with_max_steps(1000);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MillConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
