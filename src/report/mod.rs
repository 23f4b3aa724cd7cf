use std::fs;
use std::path::Path;

use crate::error::InputError;
use crate::input::io_err;
use crate::model::scores::ScoreResult;

pub mod json;
pub mod text;

pub use json::render_result_json;
pub use text::render_result_text;

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_opt_6(v: Option<f64>) -> String {
    match v {
        Some(v) => format_f64_6(v),
        None => "NA".to_string(),
    }
}

pub fn write_json_report(result: &ScoreResult, path: &Path) -> Result<(), InputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    let body = render_result_json(result)?;
    fs::write(path, body).map_err(|e| io_err(path, e))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
