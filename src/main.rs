//! amnesguide is a CLI tool that extracts structured substance records from the
//! Swedish Medical Products Agency's substance guide.
//!
//! The tool has three commands:
//! 1. `parse` - Parses a saved text dump or HTML page and writes records to a JSON file
//! 2. `fetch` - Downloads the guide page, parses its accordion items and writes records
//! 3. `summary` - Parses a saved document and reports classification counts

use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{LevelFilter, info};
use url::Url;

use amnesguide::{
    Catalog, Classification, Entry, InputFormat, Record, Summary, Vocabulary,
    compose::{compose_catalog, compose_records},
    constants::{DEFAULT_GUIDE_URL, DEFAULT_SOURCE_NAME},
    extract::{extract_entries, extract_records},
    fetch::fetch_page,
};
use scraper::Selector as ScraperSelector;

const SAMPLE_SIZE: usize = 5;

/// A CLI tool to extract substance records from the Swedish substance guide
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The command to execute (parse, fetch or summary)
    #[command(subcommand)]
    command: Command,

    #[arg(long, short, action = clap::ArgAction::Count, help = "Output v(v...)erbosity: error (0), warn (1), info (2), debug (3), trace (4)", global = true, default_value_t = 2)]
    verbose: u8,

    /// Path to a JSON file overriding the label vocabulary
    #[arg(long, global = true)]
    vocabulary: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a saved document and write records to a JSON file
    Parse {
        /// Path to the document to parse
        input: String,
        /// Path to the JSON output file
        output: String,
        /// Input format: "text" (default) or "html"
        #[arg(long, short, default_value = "text")]
        format: InputFormat,
        /// Write a classified catalog instead of a plain record array
        #[arg(long, short)]
        catalog: bool,
        /// CSS selector to limit the HTML subset searched for accordion items (optional)
        #[arg(long, short)]
        selector: Option<String>,
    },
    /// Download the guide page, parse it and write records to a JSON file
    Fetch {
        /// Path to the JSON output file
        output: String,
        /// URL of the guide page
        #[arg(long, short, default_value = DEFAULT_GUIDE_URL)]
        url: String,
        /// Write a classified catalog instead of a plain record array
        #[arg(long, short)]
        catalog: bool,
        /// CSS selector to limit the HTML subset searched for accordion items (optional)
        #[arg(long, short)]
        selector: Option<String>,
    },
    /// Parse a saved document and report classification counts
    Summary {
        /// Path to the document to parse
        input: String,
        /// Input format: "text" (default) or "html"
        #[arg(long, short, default_value = "text")]
        format: InputFormat,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    let vocabulary = match &cli.vocabulary {
        Some(path) => Vocabulary::from_file(path)?,
        None => Vocabulary::default(),
    };

    match cli.command {
        Command::Parse {
            input,
            output,
            format,
            catalog,
            selector,
        } => {
            let selector = parse_selector(selector)?;
            let content = read_input(&input)?;
            let entries = extract_entries(&content, format, &vocabulary, selector.as_ref())?;
            write_output(entries, &output, catalog, &input, None)
        }
        Command::Fetch {
            output,
            url,
            catalog,
            selector,
        } => handle_fetch_command(output, url, catalog, selector, &vocabulary).await,
        Command::Summary { input, format } => {
            let content = read_input(&input)?;
            let records = extract_records(&content, format, &vocabulary, None)?;
            report_summary(&records);
            Ok(())
        }
    }
}

async fn handle_fetch_command(
    output: String,
    url: String,
    catalog: bool,
    selector_query: Option<String>,
    vocabulary: &Vocabulary,
) -> Result<()> {
    let url = Url::parse(&url).map_err(|e| anyhow::anyhow!("Invalid guide url: {}", e))?;
    let selector = parse_selector(selector_query)?;

    let html = fetch_page(&url).await?;
    let entries = extract_entries(&html, InputFormat::Html, vocabulary, selector.as_ref())?;
    write_output(entries, &output, catalog, DEFAULT_SOURCE_NAME, Some(url.as_str()))
}

fn parse_selector(selector_query: Option<String>) -> Result<Option<ScraperSelector>> {
    match selector_query {
        Some(selector_query) => Ok(Some(
            ScraperSelector::parse(&selector_query)
                .map_err(|e| anyhow::anyhow!("Invalid CSS selector: {}", e))?,
        )),
        None => Ok(None),
    }
}

fn read_input(path: &str) -> Result<String> {
    fs::read_to_string(path).context(format!("Failed to read input file: {path}"))
}

fn write_output(
    entries: Vec<Entry>,
    output: &str,
    catalog: bool,
    source: &str,
    url: Option<&str>,
) -> Result<()> {
    if catalog {
        let catalog = Catalog::new(entries, source, url);
        report_summary(&records_of(&catalog.substances));
        compose_catalog(&catalog, output)
    } else {
        let records = records_of(&entries);
        report_summary(&records);
        compose_records(&records, output)
    }
}

fn records_of(entries: &[Entry]) -> Vec<Record> {
    entries.iter().map(|entry| entry.record.clone()).collect()
}

fn report_summary(records: &[Record]) {
    let summary = Summary::of(records);
    info!("Total substances: {}", summary.total);
    info!("Classified as medicine: {}", summary.medicines);
    info!("Not medicine: {}", summary.not_medicines);
    info!("Unknown: {}", summary.unknown);

    for record in records.iter().take(SAMPLE_SIZE) {
        let status = match record.classification {
            Classification::Yes => "Medicine",
            Classification::No => "Not medicine",
            Classification::Unknown => "Unknown",
        };
        info!("{status}: {}", record.name);
    }
}
