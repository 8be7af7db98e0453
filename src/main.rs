use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use dupfind::finder::DuplicateFinder;
use dupfind::output;
use dupfind::source::{DocumentQuery, SqliteSource};
use dupfind::text::Utf8String;

/// Corpus schema the ingestion pipeline writes.
const CORPUS_TABLE: &str = "data_table";
const FILTER_COLUMN: &str = "domains";
const CONTENT_COLUMN: &str = "doc_content";

#[derive(Parser)]
#[command(name = "dupfind")]
#[command(about = "Find the longest shared substrings between documents of a corpus")]
struct Cli {
    /// Path to the SQLite corpus database
    database: PathBuf,

    /// Where to write the JSON match list
    output: PathBuf,

    /// Domain value documents are filtered by
    domain: String,

    /// Minimum duplicate substring length, in code points
    threshold: usize,

    /// Trace progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Downstream automation keys on exit status 1 for every failure,
    // including argument errors, so clap's usual status 2 is normalized.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let verbose = cli.verbose;

    if verbose {
        eprintln!("opening database {}", cli.database.display());
    }
    let source = SqliteSource::open(&cli.database)
        .with_context(|| format!("failed to open database {}", cli.database.display()))?;

    if let Some(missing) = source.validate(CORPUS_TABLE, &[FILTER_COLUMN, CONTENT_COLUMN])? {
        anyhow::bail!("database validation failed: missing {missing}");
    }

    if verbose {
        eprintln!("loading documents for domain {:?}", cli.domain);
    }
    let query = DocumentQuery {
        table: CORPUS_TABLE,
        filter_column: FILTER_COLUMN,
        content_column: CONTENT_COLUMN,
        filter_value: &cli.domain,
    };
    let store = source.document_store(&query, Utf8String::from("$"), verbose)?;

    if verbose {
        eprintln!(
            "indexing {} code points across {} documents",
            store.concatenated().len(),
            store.doc_count()
        );
    }
    let matches = DuplicateFinder::default().find_duplicates(&store, cli.threshold)?;

    if verbose {
        eprintln!("writing matches to {}", cli.output.display());
    }
    output::write_matches(&cli.output, &matches)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!(
        "Found {} duplicate matches. Saved to {}",
        matches.len(),
        cli.output.display()
    );
    Ok(())
}
