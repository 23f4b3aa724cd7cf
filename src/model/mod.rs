pub mod event;
pub mod scores;
pub mod thresholds;

pub use event::{Coordinates, Event, Hit, NOISE_ID};
pub use scores::{GroupOutcome, Method, ScoreResult, Verdict};
pub use thresholds::{DegeneratePolicy, HitMatchingConfig, ParameterMatchingConfig};
