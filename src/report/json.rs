use crate::model::scores::ScoreResult;

pub fn render_result_json(result: &ScoreResult) -> Result<String, serde_json::Error> {
    let mut value = serde_json::to_value(result)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert(
            "tool".to_string(),
            serde_json::json!({
                "name": "kira-trackqc",
                "version": env!("CARGO_PKG_VERSION"),
            }),
        );
    }
    let mut out = serde_json::to_string_pretty(&value)?;
    out.push('\n');
    Ok(out)
}
