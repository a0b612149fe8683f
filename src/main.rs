use std::io::{stdout, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, fmt};

use textnorm::io::file::{read_json_lines, read_string_from_file};
use textnorm::morph::RuleLemmatizer;
use textnorm::progress::{NoProgress, Progress};
use textnorm::{NormalizeOptions, Normalizer, RankedWords, RecordColumn, StopWords, Toolkit};

/// Normalize free-form text into stemmed or lemmatized token corpora.
#[derive(Debug, Parser)]
#[command(name = "textnorm", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
    /// Extra stop words, whitespace separated.
    #[arg(global = true, long, value_name = "FILE")]
    stopwords: Option<PathBuf>,
    /// Extra lemma exceptions, one `form<TAB>lemma` per line.
    #[arg(global = true, long, value_name = "FILE")]
    lemmas: Option<PathBuf>,
    /// Draw a progress bar on stderr.
    #[arg(global = true, long)]
    progress: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Split a text file into sentences and clean each one.
    Document(DocumentArgs),
    /// Clean one field of every record of a JSON lines file.
    Column(ColumnArgs),
    /// Clean one short text with the fixed social media cleanup.
    Single(SingleArgs),
    /// Rank the tokens of a cleaned document by frequency.
    Rank(RankArgs),
}

#[derive(Debug, Args)]
struct CleaningArgs {
    /// Regex whose matches are replaced by a space before lower-casing.
    #[arg(long)]
    pattern: Option<String>,
    /// Do not produce the stem corpus.
    #[arg(long)]
    no_stem: bool,
    /// Produce the lemma corpus.
    #[arg(long)]
    lemmatize: bool,
    /// JSON file with `pattern`, `stemming` and `lemmatizing`; flags override it.
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct DocumentArgs {
    file: PathBuf,
    #[command(flatten)]
    cleaning: CleaningArgs,
}

#[derive(Debug, Args)]
struct ColumnArgs {
    file: PathBuf,
    /// Field holding the text of each record.
    #[arg(long)]
    column: String,
    #[command(flatten)]
    cleaning: CleaningArgs,
}

#[derive(Debug, Args)]
struct SingleArgs {
    text: String,
}

#[derive(Debug, Args)]
struct RankArgs {
    file: PathBuf,
    /// Number of tokens to print.
    #[arg(long, default_value_t = 50)]
    top: usize,
    #[command(flatten)]
    cleaning: CleaningArgs,
}

impl CleaningArgs {
    fn resolve(&self) -> Result<NormalizeOptions> {
        let mut options = match &self.options {
            Some(path) => NormalizeOptions::from_json_file(path)
                .with_context(|| format!("reading options from {}", path.display()))?,
            None => NormalizeOptions::default(),
        };
        if let Some(pattern) = &self.pattern {
            options.pattern = Some(pattern.clone());
        }
        if self.no_stem {
            options.stemming = false;
        }
        if self.lemmatize {
            options.lemmatizing = true;
        }
        Ok(options)
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already installed");
    }
}

fn determine_log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn make_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} [{elapsed_precise}] {pos}/{len} units ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb.set_draw_target(ProgressDrawTarget::stderr_with_hz(12));
    pb
}

fn build_toolkit(cli: &Cli) -> Result<Toolkit> {
    let mut stop_words = StopWords::default();
    if let Some(path) = &cli.stopwords {
        stop_words
            .append_file(path)
            .with_context(|| format!("reading stop words from {}", path.display()))?;
    }

    let mut lemmatizer = RuleLemmatizer::english();
    if let Some(path) = &cli.lemmas {
        lemmatizer
            .append_file(path)
            .with_context(|| format!("reading lemma exceptions from {}", path.display()))?;
    }

    info!(stop_words = stop_words.len(), "toolkit ready");
    Ok(Toolkit::builder()
        .stop_words(stop_words)
        .lemmatizer(lemmatizer)
        .build())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(determine_log_level(cli.verbose));

    let toolkit = build_toolkit(&cli)?;
    let bar = make_progress_bar();
    let progress: &dyn Progress = if cli.progress { &bar } else { &NoProgress };
    let normalizer = Normalizer::new(&toolkit).progress(progress);

    match &cli.command {
        Commands::Document(args) => {
            let text = read_string_from_file(&args.file)
                .with_context(|| format!("reading {}", args.file.display()))?;
            let corpora = normalizer.document(&text, &args.cleaning.resolve()?)?;
            print_json(&corpora)
        }
        Commands::Column(args) => {
            let records = read_json_lines(&args.file)
                .with_context(|| format!("reading {}", args.file.display()))?;
            let column = RecordColumn::new(&records, &args.column);
            let corpora = normalizer.table_column(&column, &args.cleaning.resolve()?)?;
            print_json(&corpora)
        }
        Commands::Single(args) => {
            println!("{}", normalizer.single_text(&args.text));
            Ok(())
        }
        Commands::Rank(args) => {
            let text = read_string_from_file(&args.file)
                .with_context(|| format!("reading {}", args.file.display()))?;
            let options = args.cleaning.resolve()?;
            let corpora = normalizer.document(&text, &options)?;
            let corpus = if options.stemming {
                corpora.stems
            } else {
                corpora.lemmas
            };
            let ranked = RankedWords::rank(&corpus);
            print_json(&ranked.top(args.top))
        }
    }
}
