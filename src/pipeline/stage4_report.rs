use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::input::EvalCase;
use crate::pipeline::stage1_fetch::Stage1Output;
use crate::pipeline::stage2_similarity::Stage2Output;
use crate::pipeline::stage3_fluency::Stage3Output;
use crate::report::json::render_summary_json;
use crate::report::text::{render_report_text, render_results};
use crate::report::{
    CaseRecord, EvalSummary, PerplexitySection, ReportError, RunSettings, SimilaritySection,
    ToolMeta, finite_or_none,
};

pub struct Stage4Input<'a> {
    pub cases: &'a [EvalCase],
    pub fetched: &'a Stage1Output,
    pub similarity: &'a Stage2Output,
    pub fluency: &'a Stage3Output,
    pub settings: RunSettings,
}

pub fn build_summary(input: &Stage4Input<'_>) -> EvalSummary {
    let cases = input
        .cases
        .iter()
        .zip(&input.fetched.candidates)
        .zip(&input.fetched.failures)
        .map(|((case, candidate), failure)| CaseRecord {
            query: case.query.to_string(),
            reference: case.reference.to_string(),
            candidate: candidate.clone(),
            fetch_failure: failure.clone(),
        })
        .collect();

    EvalSummary {
        tool: ToolMeta {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        settings: input.settings.clone(),
        cases,
        similarity: SimilaritySection {
            precision: input.similarity.scores.precision,
            recall: input.similarity.scores.recall,
            f1: input.similarity.scores.f1,
            failure: input.similarity.failure.clone(),
        },
        perplexity: PerplexitySection {
            average: finite_or_none(input.fluency.perplexity),
            per_candidate: input.fluency.per_candidate.clone(),
            scored: input.fluency.scored,
            skipped: input.fluency.skipped,
            failure: input.fluency.failure.clone(),
        },
    }
}

pub fn print_report(summary: &EvalSummary, out: &mut dyn Write) -> std::io::Result<()> {
    out.write_all(render_results(summary).as_bytes())?;
    out.flush()
}

pub fn write_reports(summary: &EvalSummary, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_summary_json(summary)?)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(summary))?;

    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
