use serde::Serialize;

use crate::error::ScoreError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HitMatchingConfig {
    /// Minimum group efficiency for the group to count as reconstructing its dominant track.
    pub eff_threshold: f64,
}

impl Default for HitMatchingConfig {
    fn default() -> Self {
        Self { eff_threshold: 0.5 }
    }
}

impl HitMatchingConfig {
    pub fn new(eff_threshold: f64) -> Self {
        Self { eff_threshold }
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        if !self.eff_threshold.is_finite() {
            return Err(ScoreError::InvalidConfig(format!(
                "eff_threshold must be finite, got {}",
                self.eff_threshold
            )));
        }
        Ok(())
    }
}

/// What the parameter scorer does when a line fit is ill-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Abort the event with `ScoreError::DegenerateFit`.
    #[default]
    Fail,
    /// Drop the track or group and keep scoring.
    Skip,
    /// Fit fewer than 2 hits, or hits without spread in X, as slope 0 through
    /// mean(y); the track or group stays in the counts. Non-finite input still fails.
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterMatchingConfig {
    pub delta_k: f64,
    pub delta_b: f64,
    pub on_degenerate: DegeneratePolicy,
}

impl ParameterMatchingConfig {
    pub fn new(delta_k: f64, delta_b: f64) -> Self {
        Self {
            delta_k,
            delta_b,
            on_degenerate: DegeneratePolicy::Fail,
        }
    }

    pub fn with_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.on_degenerate = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        for (name, value) in [("delta_k", self.delta_k), ("delta_b", self.delta_b)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoreError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
