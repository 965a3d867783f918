use crate::types::report::EvaluationReport;

pub fn to_json(report: &EvaluationReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_report;
    use serde_json::Value;

    #[test]
    fn json_report_flattens_score_result() {
        let rendered = to_json(&sample_report()).expect("json should serialize");
        let value: Value = serde_json::from_str(&rendered).expect("json should parse");

        assert_eq!(value["phase1_score"], 25);
        assert_eq!(value["classification"], "Rejected");
        assert_eq!(value["categories"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["unrated"].as_array().map(Vec::len), Some(10));
        assert_eq!(value["green_flags"][0], "Evidence of leadership/initiative");
        assert!(value.get("candidate").is_none());
    }
}
