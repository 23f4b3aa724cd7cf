use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use crate::error::ScoreError;
use crate::model::event::{Event, NOISE_ID, group_indices};
use crate::model::scores::{GroupOutcome, Method, ScoreResult, Verdict, mean, rate};
use crate::model::thresholds::HitMatchingConfig;
use crate::scoring::Scorer;

/// Matches each group to the true track most of its hits come from.
#[derive(Debug, Clone)]
pub struct HitMatchingScorer {
    config: HitMatchingConfig,
}

impl HitMatchingScorer {
    pub fn new(config: HitMatchingConfig) -> Result<Self, ScoreError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HitMatchingConfig {
        &self.config
    }
}

/// Most frequent TrackID among `rows` and its count. Ties go to the smallest id,
/// which may be the noise id.
pub fn dominant_track(track_ids: &[i64], rows: &[usize]) -> (i64, usize) {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for &r in rows {
        *counts.entry(track_ids[r]).or_insert(0) += 1;
    }
    let mut best = (NOISE_ID, 0usize);
    for (id, count) in counts {
        if count > best.1 {
            best = (id, count);
        }
    }
    best
}

impl Scorer for HitMatchingScorer {
    fn method(&self) -> Method {
        Method::HitMatching
    }

    fn fit(&self, event: &Event, labels: &[i64]) -> Result<ScoreResult, ScoreError> {
        event.check_labels(labels)?;
        let track_ids = event.track_ids();
        let n_tracks = event.n_tracks();

        let groups = group_indices(labels);
        let mut efficiencies = Vec::with_capacity(groups.len());
        let mut outcomes = Vec::with_capacity(groups.len());
        let mut reconstructed: BTreeSet<i64> = BTreeSet::new();
        let mut n_qualifying = 0usize;

        for (&label, rows) in &groups {
            let (dominant, count) = dominant_track(track_ids, rows);
            let efficiency = count as f64 / rows.len() as f64;
            efficiencies.push(efficiency);

            let qualifies = efficiency >= self.config.eff_threshold && dominant != NOISE_ID;
            let verdict = if !qualifies {
                Verdict::Ghost
            } else {
                n_qualifying += 1;
                if reconstructed.insert(dominant) {
                    Verdict::Reconstructed
                } else {
                    Verdict::Clone
                }
            };
            debug!(
                label,
                n_hits = rows.len(),
                dominant,
                efficiency,
                ?verdict,
                "group matched by hits"
            );

            outcomes.push(GroupOutcome {
                label,
                n_hits: rows.len(),
                track_id: Some(dominant),
                efficiency: Some(efficiency),
                verdict,
            });
        }

        let n_groups = groups.len();
        let n_reconstructed = reconstructed.len();
        let n_clones = n_qualifying - n_reconstructed;
        let n_ghosts = n_groups - n_qualifying;

        let result = ScoreResult {
            method: Method::HitMatching,
            avg_efficiency: mean(&efficiencies),
            efficiencies: Some(efficiencies),
            reconstruction_efficiency: rate(n_reconstructed, n_tracks),
            ghost_rate: rate(n_ghosts, n_tracks),
            clone_rate: rate(n_clones, n_tracks),
            n_tracks,
            n_groups,
            n_reconstructed,
            n_ghosts,
            n_clones,
            groups: outcomes,
        };
        info!(
            n_hits = event.len(),
            n_tracks,
            n_groups,
            reconstruction_efficiency = result.reconstruction_efficiency,
            ghost_rate = result.ghost_rate,
            clone_rate = result.clone_rate,
            "hit matching scored"
        );
        Ok(result)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/hits.rs"]
mod tests;
