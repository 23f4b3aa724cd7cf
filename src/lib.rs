//! Track-reconstruction quality scoring.
//!
//! Compares a candidate hit labelling against ground-truth track ids and reports
//! reconstruction efficiency, ghost rate and clone rate, either by hit matching
//! or by matching fitted line parameters.

pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod report;
pub mod scoring;

pub use error::{FitSubject, InputError, ScoreError};
pub use model::{
    DegeneratePolicy, Event, Hit, HitMatchingConfig, NOISE_ID, ParameterMatchingConfig,
    ScoreResult,
};
pub use scoring::{HitMatchingScorer, ParameterMatchingScorer, Scorer, ScoringMode};
