use crate::types::report::EvaluationReport;
use crate::types::rubric::MAX_RATING;

pub fn to_markdown(report: &EvaluationReport) -> String {
    let mut output = String::new();
    output.push_str("# Resume Review\n\n");
    if let Some(candidate) = &report.candidate {
        output.push_str(&format!(
            "Candidate: {} ({}) - status {}\n\n",
            candidate.name, candidate.id, candidate.status
        ));
    }
    output.push_str(&format!(
        "Phase 1 score: {}%\nPhase 2 score: {:.1}%\nClassification: {}\n\n",
        report.result.phase1_score, report.result.phase2_score, report.result.classification
    ));

    output.push_str("## Phase 1: Quick Assessment\n\n");
    for gate in &report.gates {
        output.push_str(&format!(
            "- [{}] {}\n",
            if gate.passed { "x" } else { " " },
            gate.label
        ));
    }
    output.push('\n');

    output.push_str("## Phase 2: Detailed Evaluation\n\n");
    for category in &report.categories {
        output.push_str(&format!(
            "### {} ({:.1}%, weight {})\n\n",
            category.label, category.score, category.total_weight
        ));
        for detail in report
            .criteria
            .iter()
            .filter(|detail| detail.category == category.category)
        {
            output.push_str(&format!(
                "- {} (weight {}): {}/{}",
                detail.label, detail.weight, detail.rating, MAX_RATING
            ));
            if !detail.notes.is_empty() {
                output.push_str(&format!(" - {}", detail.notes));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    if !report.is_complete() {
        output.push_str(&format!(
            "Unrated criteria: {}\n\n",
            report
                .unrated
                .iter()
                .map(|criterion| criterion.label())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    output.push_str("## Phase 3: Flags\n\n");
    push_list(&mut output, "Red flags", &report.red_flags);
    push_list(&mut output, "Green flags", &report.green_flags);

    output.push_str("## Interview Notes\n\n");
    if report.interview_notes.is_empty() {
        output.push_str("- none\n");
    } else {
        output.push_str(&report.interview_notes);
        output.push('\n');
    }

    output
}

fn push_list(output: &mut String, title: &str, items: &[String]) {
    output.push_str(&format!("{title}:\n"));
    if items.is_empty() {
        output.push_str("- none\n");
    } else {
        for item in items {
            output.push_str(&format!("- {item}\n"));
        }
    }
    output.push('\n');
}
