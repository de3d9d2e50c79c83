//! Step-based environment for agents.
//!
//! - `MillEnv`: reset/step over one match, with masks and observations
//! - `ActionMask`: legal positions plus the action kind they apply to
//! - `ObservationEncoder`: state to feature vector (`PlanesEncoder` by default)

pub mod environment;
pub mod mask;
pub mod observation;

pub use environment::{MillEnv, StepInfo, StepResult};
pub use mask::ActionMask;
pub use observation::{Observation, ObservationEncoder, PlanesEncoder, OBSERVATION_SIZE};
