use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info};

use crate::error::InputError;
use crate::input::{io_err, open_maybe_gz, parse_id};
use crate::model::event::Event;

pub const TRACK_ID_COLUMN: &str = "TrackID";
pub const X_COLUMN: &str = "X";
pub const Y_COLUMN: &str = "y";

#[derive(Debug, Clone)]
pub struct HitTable {
    pub event: Event,
    /// Present when a labels column was requested.
    pub labels: Option<Vec<i64>>,
}

/// Loads a delimited hit table with a header row. The delimiter is a tab if the
/// header contains one, a comma otherwise. Column names match case-insensitively.
/// `X` and `y` are optional; without both the event carries no coordinates.
pub fn load_hit_table(path: &Path, labels_column: Option<&str>) -> Result<HitTable, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();

    let mut line_no = 0usize;
    let header = loop {
        buf.clear();
        let read = reader.read_line(&mut buf).map_err(|e| io_err(path, e))?;
        if read == 0 {
            return Err(InputError::Empty(path.to_path_buf()));
        }
        line_no += 1;
        let line = buf.trim_end();
        if !line.is_empty() {
            break line.to_string();
        }
    };
    let delim = if header.contains('\t') { '\t' } else { ',' };
    let columns: Vec<String> = header.split(delim).map(|s| s.trim().to_string()).collect();

    let find = |name: &str| columns.iter().position(|c| c.eq_ignore_ascii_case(name));
    let missing = |name: &str| InputError::MissingColumn {
        column: name.to_string(),
        path: path.to_path_buf(),
    };
    let track_col = find(TRACK_ID_COLUMN).ok_or_else(|| missing(TRACK_ID_COLUMN))?;
    let coord_cols = match (find(X_COLUMN), find(Y_COLUMN)) {
        (Some(x), Some(y)) => Some((x, y)),
        _ => None,
    };
    let label_col = match labels_column {
        Some(name) => Some((find(name).ok_or_else(|| missing(name))?, name)),
        None => None,
    };
    debug!(?columns, track_col, ?coord_cols, ?label_col, "hit table header");

    let mut track_ids = Vec::new();
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut labels = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf).map_err(|e| io_err(path, e))?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(delim).collect();
        let parse_err = |msg: String| InputError::Parse {
            path: path.to_path_buf(),
            line: line_no,
            msg,
        };
        let field = |idx: usize, name: &str| {
            fields
                .get(idx)
                .map(|s| s.trim())
                .ok_or_else(|| parse_err(format!("row has {} fields, no {name} value", fields.len())))
        };
        let id_value = |idx: usize, name: &str| -> Result<i64, InputError> {
            let raw = field(idx, name)?;
            parse_id(raw).ok_or_else(|| parse_err(format!("invalid {name} value {raw:?}")))
        };
        let real_value = |idx: usize, name: &str| -> Result<f64, InputError> {
            let raw = field(idx, name)?;
            match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                Ok(_) => Err(parse_err(format!("non-finite {name} value {raw:?}"))),
                Err(_) => Err(parse_err(format!("invalid {name} value {raw:?}"))),
            }
        };

        track_ids.push(id_value(track_col, TRACK_ID_COLUMN)?);
        if let Some((x_col, y_col)) = coord_cols {
            xs.push(real_value(x_col, X_COLUMN)?);
            ys.push(real_value(y_col, Y_COLUMN)?);
        }
        if let Some((col, name)) = label_col {
            labels.push(id_value(col, name)?);
        }
    }

    if track_ids.is_empty() {
        return Err(InputError::Empty(path.to_path_buf()));
    }
    info!(
        path = %path.display(),
        n_hits = track_ids.len(),
        coordinates = coord_cols.is_some(),
        "loaded hit table"
    );

    let event = match coord_cols {
        Some(_) => Event::from_columns(track_ids, xs, ys)?,
        None => Event::from_track_ids(track_ids),
    };
    Ok(HitTable {
        event,
        labels: label_col.map(|_| labels),
    })
}
