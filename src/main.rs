use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use clap::builder::RangedU64ValueParser;
use tracing::{error, info};

use chatbot_eval::backend::{
    DEFAULT_LANGUAGE_MODEL, DEFAULT_MODEL_SERVER, HttpModelHub, HttpSimilarityBackend,
};
use chatbot_eval::chatbot::{DEFAULT_CHAT_URL, new_blocking_client};
use chatbot_eval::input::{self, demo_cases};
use chatbot_eval::logging::init_logging;
use chatbot_eval::pipeline::stage1_fetch::run_stage1;
use chatbot_eval::pipeline::stage2_similarity::{Stage2Inputs, run_stage2};
use chatbot_eval::pipeline::stage3_fluency::{Stage3Inputs, run_stage3};
use chatbot_eval::pipeline::stage4_report::{
    Stage4Input, build_summary, print_report, write_reports,
};
use chatbot_eval::report::{ReportError, RunSettings};
use chatbot_eval::scoring::{DEFAULT_LANG, MAX_SEQUENCE_LENGTH};

/// Scores live chatbot answers against reference answers with BERTScore
/// similarity and language-model perplexity.
#[derive(Debug, Clone, Parser)]
#[command(name = "chatbot-eval", version, about)]
struct Cli {
    /// Chatbot endpoint receiving `{"userInput": ...}`.
    #[arg(long, default_value = DEFAULT_CHAT_URL)]
    url: String,

    /// Base URL of the model server hosting the similarity and language models.
    #[arg(long, default_value = DEFAULT_MODEL_SERVER)]
    model_server: String,

    /// Language code passed to the similarity model.
    #[arg(long, default_value = DEFAULT_LANG)]
    lang: String,

    /// Language model used for perplexity.
    #[arg(long, default_value = DEFAULT_LANGUAGE_MODEL)]
    model: String,

    /// Token limit applied when tokenizing candidates.
    #[arg(
        long,
        default_value_t = MAX_SEQUENCE_LENGTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    max_length: usize,

    /// Also write summary.json and report.txt into this directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "debug")]
    log_level: String,
}

impl Cli {
    fn settings(&self) -> RunSettings {
        RunSettings {
            chat_url: self.url.clone(),
            model_server: self.model_server.clone(),
            lang: self.lang.clone(),
            model: self.model.clone(),
            max_length: self.max_length,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("failed to print results: {0}")]
    Stdout(std::io::Error),
    #[error("failed to write reports: {0}")]
    Report(#[from] ReportError),
}

enum Invocation {
    Run { cli: Cli, rejected: Option<String> },
    Print(String),
}

fn resolve_invocation<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Run {
            cli,
            rejected: None,
        }),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                Ok(Invocation::Print(err.to_string()))
            }
            _ => Ok(Invocation::Run {
                cli: Cli::try_parse_from(["chatbot-eval"])?,
                rejected: Some(err.to_string()),
            }),
        },
    }
}

fn main() {
    let (cli, rejected) = match resolve_invocation(std::env::args_os()) {
        Ok(Invocation::Run { cli, rejected }) => (cli, rejected),
        Ok(Invocation::Print(text)) => {
            print!("{text}");
            return;
        }
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    if let Err(err) = init_logging(&cli.log_level) {
        eprintln!("{err}");
    }
    if let Some(reason) = rejected {
        error!("Ignoring command line, running with defaults: {}", reason.trim_end());
    }
    // Every failure ends up here as a log line; the exit code stays 0.
    if let Err(err) = run(&cli) {
        error!("{err}");
    }
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let client = new_blocking_client()?;
    let cases = demo_cases();
    let queries = input::queries(cases);
    let references = input::references(cases);

    let stage1 = run_stage1(&client, &cli.url, &queries);
    info!(
        "Fetched {} responses ({} placeholders)",
        stage1.candidates.len(),
        stage1.n_failed()
    );

    let similarity_backend = HttpSimilarityBackend::new(client.clone(), &cli.model_server);
    let stage2 = run_stage2(&Stage2Inputs {
        backend: &similarity_backend,
        references: &references,
        candidates: &stage1.candidates,
        lang: &cli.lang,
    });

    let hub = HttpModelHub::new(client, &cli.model_server);
    let stage3 = run_stage3(&Stage3Inputs {
        hub: &hub,
        candidates: &stage1.candidates,
        model_name: &cli.model,
        max_length: cli.max_length,
    });

    let summary = build_summary(&Stage4Input {
        cases,
        fetched: &stage1,
        similarity: &stage2,
        fluency: &stage3,
        settings: cli.settings(),
    });

    print_report(&summary, &mut std::io::stdout().lock()).map_err(RunError::Stdout)?;

    if let Some(out_dir) = &cli.out {
        write_reports(&summary, out_dir)?;
        info!("Reports written to {}", out_dir.display());
    }

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
