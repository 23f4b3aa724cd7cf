use std::collections::BTreeMap;

use crate::error::ScoreError;

/// Reserved id for hits outside any true track, or outside any reconstructed group.
pub const NOISE_ID: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub track_id: i64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Row-aligned hit table of one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    track_ids: Vec<i64>,
    coords: Option<Coordinates>,
}

impl Event {
    pub fn from_hits(hits: &[Hit]) -> Self {
        let mut track_ids = Vec::with_capacity(hits.len());
        let mut x = Vec::with_capacity(hits.len());
        let mut y = Vec::with_capacity(hits.len());
        for hit in hits {
            track_ids.push(hit.track_id);
            x.push(hit.x);
            y.push(hit.y);
        }
        Self {
            track_ids,
            coords: Some(Coordinates { x, y }),
        }
    }

    /// Event without coordinates. Enough for hit matching only.
    pub fn from_track_ids(track_ids: Vec<i64>) -> Self {
        Self {
            track_ids,
            coords: None,
        }
    }

    pub fn from_columns(track_ids: Vec<i64>, x: Vec<f64>, y: Vec<f64>) -> Result<Self, ScoreError> {
        for (column, len) in [("X", x.len()), ("y", y.len())] {
            if len != track_ids.len() {
                return Err(ScoreError::ColumnLength {
                    column,
                    expected: track_ids.len(),
                    actual: len,
                });
            }
        }
        Ok(Self {
            track_ids,
            coords: Some(Coordinates { x, y }),
        })
    }

    pub fn len(&self) -> usize {
        self.track_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.track_ids.is_empty()
    }

    pub fn track_ids(&self) -> &[i64] {
        &self.track_ids
    }

    pub fn coordinates(&self) -> Option<&Coordinates> {
        self.coords.as_ref()
    }

    /// Hit indices of every true track, keyed by ascending TrackID.
    pub fn true_tracks(&self) -> BTreeMap<i64, Vec<usize>> {
        group_indices(&self.track_ids)
    }

    pub fn n_tracks(&self) -> usize {
        distinct_ids(&self.track_ids)
    }

    pub fn check_labels(&self, labels: &[i64]) -> Result<(), ScoreError> {
        if labels.len() != self.len() {
            return Err(ScoreError::InputShape {
                hits: self.len(),
                labels: labels.len(),
            });
        }
        Ok(())
    }
}

/// Indices of each id's rows, ascending by id. `NOISE_ID` rows are dropped.
pub fn group_indices(ids: &[i64]) -> BTreeMap<i64, Vec<usize>> {
    let mut groups: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    for (idx, &id) in ids.iter().enumerate() {
        if id == NOISE_ID {
            continue;
        }
        groups.entry(id).or_default().push(idx);
    }
    groups
}

pub fn distinct_ids(ids: &[i64]) -> usize {
    let mut seen = ids.iter().copied().filter(|&id| id != NOISE_ID).collect::<Vec<_>>();
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/event.rs"]
mod tests;
