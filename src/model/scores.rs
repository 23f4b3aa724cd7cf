use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Reconstructed,
    Clone,
    Ghost,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupOutcome {
    pub label: i64,
    pub n_hits: usize,
    /// Dominant TrackID for hit matching (may be the noise id); claimed or first
    /// matching true track for parameter matching.
    pub track_id: Option<i64>,
    pub efficiency: Option<f64>,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    HitMatching,
    ParameterMatching,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::HitMatching => "hit_matching",
            Method::ParameterMatching => "parameter_matching",
        }
    }
}

/// Scores of one event. Every rate is relative to `n_tracks` and is `0.0` when it is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub method: Method,
    pub efficiencies: Option<Vec<f64>>,
    pub avg_efficiency: Option<f64>,
    pub reconstruction_efficiency: f64,
    pub ghost_rate: f64,
    pub clone_rate: f64,
    pub n_tracks: usize,
    pub n_groups: usize,
    pub n_reconstructed: usize,
    pub n_ghosts: usize,
    pub n_clones: usize,
    pub groups: Vec<GroupOutcome>,
}

pub fn rate(count: usize, n_tracks: usize) -> f64 {
    if n_tracks == 0 {
        return 0.0;
    }
    count as f64 / n_tracks as f64
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
