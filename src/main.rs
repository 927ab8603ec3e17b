//! rapid-summarize CLI
//!
//! Extractive summarization from the command line: summarize a built-in
//! sample paragraph, or one line read from standard input.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rapid_summarizer::{RuleBasedAnalyzer, Summarizer, SummarizerSpec, Summary};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const SAMPLE_TEXT: &str = "
    Natural language processing (NLP) is a subfield of linguistics, computer science, and artificial intelligence concerned with the interactions between computers and human language, in particular how to program computers to process and analyze large amounts of natural language data. The goal is a computer capable of \"understanding\" the contents of documents, including the contextual nuances of the language within them. The technology can then accurately extract information and insights contained in the documents as well as categorize and organize the documents themselves. Challenges in natural language processing frequently involve speech recognition, natural language understanding, and natural language generation.
    ";

#[derive(Parser)]
#[command(name = "rapid-summarize")]
#[command(version)]
#[command(about = "Frequency-ranked extractive summarization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON summarizer spec (language, stop-words, scoring, limits)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print the scored summary as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the built-in sample paragraph
    Demo {
        /// Number of sentences in the summary [default: 2]
        #[arg(short = 'n', long)]
        sentences: Option<usize>,
    },

    /// Summarize one line read from standard input
    Stdin {
        /// Number of sentences in the summary [default: 3]
        #[arg(short = 'n', long)]
        sentences: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_summarizer(config: Option<&PathBuf>) -> anyhow::Result<Summarizer<RuleBasedAnalyzer>> {
    let Some(path) = config else {
        return Ok(Summarizer::new(RuleBasedAnalyzer::new()));
    };

    let spec = SummarizerSpec::from_path(path)
        .with_context(|| format!("failed to read spec {}", path.display()))?;
    for warning in spec.validate().warnings() {
        warn!("{warning}");
    }
    info!(path = %path.display(), language = spec.language().code(), "loaded summarizer spec");
    Ok(spec.into_summarizer()?)
}

/// Explicit `-n` wins, then the spec file, then the command's default.
fn sentence_count(
    summarizer: &Summarizer<RuleBasedAnalyzer>,
    requested: Option<usize>,
    has_spec: bool,
    default: usize,
) -> usize {
    match requested {
        Some(n) => n,
        None if has_spec => summarizer.config().num_sentences,
        None => default,
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let summarizer = load_summarizer(cli.config.as_ref())?;
    let has_spec = cli.config.is_some();

    match cli.command {
        Commands::Demo { sentences } => {
            let n = sentence_count(&summarizer, sentences, has_spec, 2);
            let summarizer = summarizer.with_num_sentences(n);
            let summary = summarizer.summarize_detailed(SAMPLE_TEXT)?;
            if cli.json {
                print_json(&summary)?;
            } else {
                println!("Original Text:");
                println!("{SAMPLE_TEXT}");
                println!("\nSummarized Text:");
                println!("{}", summary.text);
            }
        }
        Commands::Stdin { sentences } => {
            let n = sentence_count(
                &summarizer,
                sentences,
                has_spec,
                rapid_summarizer::DEFAULT_MAX_SENTENCES,
            );
            let summarizer = summarizer.with_num_sentences(n);
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("failed to read from stdin")?;

            let summary = summarizer.summarize_detailed(&line)?;
            if cli.json {
                print_json(&summary)?;
            } else {
                println!("{}", summary.text);
            }
        }
    }

    Ok(())
}

fn print_json(summary: &Summary) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
