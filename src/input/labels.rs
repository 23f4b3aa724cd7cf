use std::io::BufRead;
use std::path::Path;

use crate::error::InputError;
use crate::input::{io_err, open_maybe_gz, parse_id};

/// Reads labels in row order; values may be split by whitespace, commas or newlines.
pub fn load_labels(path: &Path) -> Result<Vec<i64>, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    let mut labels = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf).map_err(|e| io_err(path, e))?;
        if read == 0 {
            break;
        }
        line_no += 1;
        for token in buf
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let label = parse_id(token).ok_or_else(|| InputError::Parse {
                path: path.to_path_buf(),
                line: line_no,
                msg: format!("invalid label {token:?}"),
            })?;
            labels.push(label);
        }
    }

    if labels.is_empty() {
        return Err(InputError::Empty(path.to_path_buf()));
    }
    Ok(labels)
}
