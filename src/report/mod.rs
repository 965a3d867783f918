pub mod json;
pub mod md;

use crate::error::RubricError;
use crate::types::report::EvaluationReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &EvaluationReport, format: OutputFormat) -> Result<String, RubricError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(RubricError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
