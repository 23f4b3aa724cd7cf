pub mod fit;
pub mod hits;
pub mod params;

use crate::error::ScoreError;
use crate::model::event::Event;
use crate::model::scores::{Method, ScoreResult};
use crate::model::thresholds::{HitMatchingConfig, ParameterMatchingConfig};

pub use fit::LineFit;
pub use hits::HitMatchingScorer;
pub use params::ParameterMatchingScorer;

/// A strategy that scores one event's labels against its ground truth.
///
/// `fit` is a pure function of its inputs and the scorer's configuration; the
/// returned `ScoreResult` is the only output.
pub trait Scorer {
    fn method(&self) -> Method;

    fn fit(&self, event: &Event, labels: &[i64]) -> Result<ScoreResult, ScoreError>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoringMode {
    Hits(HitMatchingConfig),
    Params(ParameterMatchingConfig),
}

impl ScoringMode {
    pub fn build(self) -> Result<Box<dyn Scorer>, ScoreError> {
        Ok(match self {
            ScoringMode::Hits(config) => Box::new(HitMatchingScorer::new(config)?),
            ScoringMode::Params(config) => Box::new(ParameterMatchingScorer::new(config)?),
        })
    }
}
