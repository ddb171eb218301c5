//! lucina - converts the Lucina manuscript to TEI-XML and JSON

use std::{
    collections::BTreeMap,
    io::{Write, stdout},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use lucina_config::Config;
use lucina_engine::{
    BookId, Document, ExpectedPoems, PersonResolver, Report, default_expected_poems,
    export::{json, tei},
    parse_paragraphs_with, read_paragraphs,
};

#[derive(Parser)]
#[command(name = "lucina")]
#[command(version, about = "Builds the Lucina edition from the manuscript transcription", long_about = None)]
#[command(after_help = "EXAMPLES:
    lucina convert Lucina.docx              Write lucina.xml and lucina.json
    lucina convert Lucina.docx --tei out.xml
    lucina stats Lucina.docx                Show counts and missing poems
    lucina paragraphs Lucina.docx           Dump paragraphs as JSON Lines")]
struct Cli {
    /// Config file [default: ~/.config/lucina/config.toml]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the document and write TEI-XML and/or JSON
    Convert {
        /// Input file (.docx, or plain text with one paragraph per line)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// TEI-XML output path
        #[arg(long, value_name = "PATH")]
        tei: Option<PathBuf>,

        /// JSON output path
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,

        /// Flat JSON export for the web edition
        #[arg(long, value_name = "PATH")]
        edition: Option<PathBuf>,

        /// Directory for default output names
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Print parse statistics, meter/genre/person distribution and missing poems
    Stats {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
    /// Print the paragraph records as JSON Lines
    Paragraphs {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

/// Output files for `convert`.
#[derive(Debug, PartialEq)]
struct Outputs {
    tei: Option<PathBuf>,
    json: Option<PathBuf>,
    edition: Option<PathBuf>,
}

impl Outputs {
    /// Explicit paths win. With none given, TEI and JSON go to `lucina.xml`
    /// and `lucina.json` in `out_dir`, then the configured directory, then
    /// the current one.
    fn resolve(
        tei: Option<PathBuf>,
        json: Option<PathBuf>,
        edition: Option<PathBuf>,
        out_dir: Option<PathBuf>,
        config: &Config,
    ) -> Self {
        if tei.is_some() || json.is_some() || edition.is_some() {
            return Self { tei, json, edition };
        }
        let dir = out_dir
            .or_else(|| config.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            tei: Some(dir.join("lucina.xml")),
            json: Some(dir.join("lucina.json")),
            edition: None,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Convert {
            input,
            tei,
            json,
            edition,
            out_dir,
        } => {
            let doc = build(&input, &config)?;
            report_missing(&doc, &expected_poems(&config));
            let outputs = Outputs::resolve(tei, json, edition, out_dir, &config);
            convert(&doc, &outputs)?;
            println!(
                "{} poems, {} lines ({} dropped, {} unclassified paragraphs)",
                doc.poem_count(),
                doc.line_count(),
                doc.stats.dropped_poems,
                doc.stats.unclassified
            );
        }
        Command::Stats { input } => {
            let doc = build(&input, &config)?;
            print!("{}", doc.stats);
            print!("{}", Report::from_document(&doc));
            let missing = report_missing(&doc, &expected_poems(&config));
            for (book, numbers) in &missing {
                println!("missing in book {book}: {numbers:?}");
            }
        }
        Command::Paragraphs { input } => {
            let paragraphs = read_paragraphs(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let mut out = stdout().lock();
            for p in &paragraphs {
                writeln!(out, "{}", serde_json::to_string(p)?)?;
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            info!("Config path: {}", path.display());
            Config::load_from_path(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?
        }
        None => {
            info!("Config path: {}", Config::config_path().display());
            Config::load().context("Failed to load config file")?
        }
    };
    Ok(config.unwrap_or_default())
}

fn build(input: &Path, config: &Config) -> Result<Document> {
    let paragraphs =
        read_paragraphs(input).with_context(|| format!("Failed to read {}", input.display()))?;
    info!("{} paragraphs read from {}", paragraphs.len(), input.display());
    let resolver = PersonResolver::with_extra(&config.persons);
    Ok(parse_paragraphs_with(resolver, &paragraphs))
}

fn convert(doc: &Document, outputs: &Outputs) -> Result<()> {
    if let Some(path) = &outputs.tei {
        tei::write_file(doc, &tei::TeiOptions::default(), path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    if let Some(path) = &outputs.json {
        json::write_file(doc, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    if let Some(path) = &outputs.edition {
        json::write_edition_file(doc, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

/// Built-in counts, overridden per book by the config file.
fn expected_poems(config: &Config) -> ExpectedPoems {
    let mut expected = default_expected_poems();
    for (book, count) in &config.expected_poems {
        match BookId::try_from(book.clone()) {
            Ok(id) => {
                expected.insert(id, *count);
            }
            Err(e) => warn!("ignoring expected_poems entry: {e}"),
        }
    }
    expected
}

fn report_missing(doc: &Document, expected: &ExpectedPoems) -> BTreeMap<BookId, Vec<u32>> {
    let missing = doc.missing_poems(expected);
    for (book, numbers) in &missing {
        warn!("Book {book} missing {} poems: {numbers:?}", numbers.len());
    }
    missing
}
