use crate::report::{EvalSummary, format_metric};

pub fn render_results(summary: &EvalSummary) -> String {
    let mut out = String::new();

    out.push_str("\n🔹 BERTScore Results:\n");
    out.push_str(&format!(
        "📌 Precision: {}\n",
        format_metric(summary.similarity.precision)
    ));
    out.push_str(&format!(
        "📌 Recall: {}\n",
        format_metric(summary.similarity.recall)
    ));
    out.push_str(&format!(
        "📌 F1 Score: {}\n",
        format_metric(summary.similarity.f1)
    ));

    out.push_str("\n🔹 Perplexity Results:\n");
    out.push_str(&format!(
        "📌 Average Perplexity: {}\n",
        format_metric(summary.perplexity.average_or_nan())
    ));

    out
}

pub fn render_report_text(summary: &EvalSummary) -> String {
    let mut out = String::new();

    out.push_str("Chatbot Response Quality Report\n");
    out.push_str("===============================\n\n");

    out.push_str("1. Run settings\n");
    out.push_str(&format!(
        "Tool: {} {}\n",
        summary.tool.name, summary.tool.version
    ));
    out.push_str(&format!("Chatbot endpoint: {}\n", summary.settings.chat_url));
    out.push_str(&format!("Model server: {}\n", summary.settings.model_server));
    out.push_str(&format!(
        "Similarity language: {}\n",
        summary.settings.lang
    ));
    out.push_str(&format!(
        "Language model: {} (max length {})\n\n",
        summary.settings.model, summary.settings.max_length
    ));

    out.push_str("2. Responses\n");
    for (i, case) in summary.cases.iter().enumerate() {
        out.push_str(&format!("[{}] Query: {}\n", i + 1, case.query));
        out.push_str(&format!("    Reference: {}\n", case.reference));
        out.push_str(&format!("    Candidate: {}\n", case.candidate));
        if let Some(reason) = &case.fetch_failure {
            out.push_str(&format!("    Fetch failed: {}\n", reason));
        }
    }
    out.push('\n');

    out.push_str("3. Similarity\n");
    out.push_str(&format!(
        "Precision: {}\nRecall: {}\nF1: {}\n",
        format_metric(summary.similarity.precision),
        format_metric(summary.similarity.recall),
        format_metric(summary.similarity.f1)
    ));
    if let Some(reason) = &summary.similarity.failure {
        out.push_str(&format!("Scores defaulted to zero: {}\n", reason));
    }
    out.push('\n');

    out.push_str("4. Fluency\n");
    out.push_str(&format!(
        "Average perplexity: {}\n",
        format_metric(summary.perplexity.average_or_nan())
    ));
    out.push_str(&format!(
        "Scored candidates: {} (skipped {})\n",
        summary.perplexity.scored, summary.perplexity.skipped
    ));
    if !summary.perplexity.per_candidate.is_empty() {
        let values = summary
            .perplexity
            .per_candidate
            .iter()
            .map(|v| format_metric(*v))
            .collect::<Vec<_>>();
        out.push_str(&format!("Per candidate: {}\n", values.join(", ")));
    }
    if let Some(reason) = &summary.perplexity.failure {
        out.push_str(&format!("Perplexity unavailable: {}\n", reason));
    }

    out
}
