use crate::report::{EvalSummary, ReportError};

pub fn render_summary_json(summary: &EvalSummary) -> Result<String, ReportError> {
    let mut json = serde_json::to_string_pretty(summary)?;
    json.push('\n');
    Ok(json)
}
