use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::error::{FitSubject, ScoreError};
use crate::model::event::{Event, group_indices};
use crate::model::scores::{GroupOutcome, Method, ScoreResult, Verdict, rate};
use crate::model::thresholds::{DegeneratePolicy, ParameterMatchingConfig};
use crate::scoring::Scorer;
use crate::scoring::fit::{Degeneracy, LineFit};

/// Matches groups to true tracks by comparing fitted `(slope, intercept)` pairs.
///
/// Assignment is greedy and one-to-one: groups are visited by ascending label,
/// candidate tracks by ascending TrackID, and the first pair where both sides
/// are still free is taken. A group that fits no track at all is a ghost; a
/// group whose fitting tracks are all taken is a clone.
#[derive(Debug, Clone)]
pub struct ParameterMatchingScorer {
    config: ParameterMatchingConfig,
}

impl ParameterMatchingScorer {
    pub fn new(config: ParameterMatchingConfig) -> Result<Self, ScoreError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParameterMatchingConfig {
        &self.config
    }

    fn fit_all(
        &self,
        x: &[f64],
        y: &[f64],
        sets: &BTreeMap<i64, Vec<usize>>,
        kind: FitSubject,
    ) -> Result<Vec<FittedSet>, ScoreError> {
        let mut out = Vec::with_capacity(sets.len());
        for (&id, rows) in sets {
            let fitted = match LineFit::ols(x, y, rows) {
                Err(reason) if reason != Degeneracy::NonFinite
                    && self.config.on_degenerate == DegeneratePolicy::Flat =>
                {
                    debug!(%kind, id, n_hits = rows.len(), reason = reason.as_str(), "flat fit");
                    LineFit::flat(y, rows)
                }
                other => other,
            };
            match fitted {
                Ok(line) => out.push(FittedSet {
                    id,
                    n_hits: rows.len(),
                    line,
                }),
                Err(reason) if self.config.on_degenerate == DegeneratePolicy::Skip => {
                    warn!(%kind, id, n_hits = rows.len(), reason = reason.as_str(), "skipping degenerate fit");
                }
                Err(reason) => {
                    return Err(ScoreError::DegenerateFit {
                        kind,
                        id,
                        n_hits: rows.len(),
                        reason: reason.as_str(),
                    });
                }
            }
        }
        Ok(out)
    }
}

#[derive(Debug, Clone, Copy)]
struct FittedSet {
    id: i64,
    n_hits: usize,
    line: LineFit,
}

impl Scorer for ParameterMatchingScorer {
    fn method(&self) -> Method {
        Method::ParameterMatching
    }

    fn fit(&self, event: &Event, labels: &[i64]) -> Result<ScoreResult, ScoreError> {
        event.check_labels(labels)?;
        let coords = event.coordinates().ok_or(ScoreError::MissingCoordinates)?;
        let n_tracks = event.n_tracks();

        let true_params = self.fit_all(
            &coords.x,
            &coords.y,
            &event.true_tracks(),
            FitSubject::TrueTrack,
        )?;
        let params = self.fit_all(&coords.x, &coords.y, &group_indices(labels), FitSubject::Group)?;

        let mut true_used = vec![false; true_params.len()];
        let mut outcomes = Vec::with_capacity(params.len());
        let mut n_reconstructed = 0usize;
        let mut n_ghosts = 0usize;

        for group in &params {
            let mut n_matchings = 0usize;
            let mut claimed: Option<i64> = None;
            let mut first_match: Option<i64> = None;

            for (t, truth) in true_params.iter().enumerate() {
                if !group.line.matches(&truth.line, self.config.delta_k, self.config.delta_b) {
                    continue;
                }
                n_matchings += 1;
                if first_match.is_none() {
                    first_match = Some(truth.id);
                }
                if claimed.is_none() && !true_used[t] {
                    true_used[t] = true;
                    claimed = Some(truth.id);
                    n_reconstructed += 1;
                }
            }

            let verdict = match (claimed, n_matchings) {
                (Some(_), _) => Verdict::Reconstructed,
                (None, 0) => {
                    n_ghosts += 1;
                    Verdict::Ghost
                }
                (None, _) => Verdict::Clone,
            };
            debug!(
                label = group.id,
                slope = group.line.slope,
                intercept = group.line.intercept,
                n_matchings,
                ?verdict,
                "group matched by parameters"
            );

            outcomes.push(GroupOutcome {
                label: group.id,
                n_hits: group.n_hits,
                track_id: claimed.or(first_match),
                efficiency: None,
                verdict,
            });
        }

        let n_groups = params.len();
        let n_clones = n_groups - n_reconstructed - n_ghosts;

        let result = ScoreResult {
            method: Method::ParameterMatching,
            efficiencies: None,
            avg_efficiency: None,
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
            "parameter matching scored"
        );
        Ok(result)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/params.rs"]
mod tests;
