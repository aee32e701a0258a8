//! CLI that reads a saved HTML document and prints the readable article.
//!
//! The input path defaults to `index.dom` in the working directory and can
//! be overridden by argument or by the `READABLE_INPUT` environment
//! variable. Output goes to stdout as content HTML, plain text (`--text`),
//! or a single JSON object (`--json`).

use clap::Parser;
use rs_readable::{extract_file_with_options, Error, ExtractResult, Options};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "readable",
    version,
    about = "Extract the readable article from a saved HTML document"
)]
struct Cli {
    /// HTML document to read
    #[arg(env = "READABLE_INPUT", default_value = rs_readable::DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Print the article as plain text instead of content HTML
    #[arg(long, conflicts_with = "json")]
    text: bool,

    /// Print the full result as a single JSON object
    #[arg(long)]
    json: bool,

    /// Base URL used to resolve relative links in the document
    #[arg(long)]
    url: Option<String>,

    /// Exit non-zero when the document has no extractable content
    #[arg(long)]
    strict: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    title: Option<&'a str>,
    byline: Option<&'a str>,
    excerpt: Option<&'a str>,
    site_name: Option<&'a str>,
    content: Option<&'a str>,
    text: &'a str,
}

impl<'a> Output<'a> {
    fn from_result(result: &'a ExtractResult) -> Self {
        Self {
            title: result.metadata.title.as_deref(),
            byline: result.metadata.byline.as_deref(),
            excerpt: result.metadata.excerpt.as_deref(),
            site_name: result.metadata.site_name.as_deref(),
            content: result.content_html.as_deref(),
            text: &result.content_text,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("readable: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    let options = Options {
        url: cli.url.clone(),
        require_content: cli.strict,
        ..Options::default()
    };

    debug!(path = %cli.input.display(), "reading document");
    let result = extract_file_with_options(&cli.input, &options)?;

    for warning in &result.warnings {
        warn!("{warning}");
    }

    if cli.json {
        println!(
            "{}",
            serde_json::to_string(&Output::from_result(&result)).unwrap_or_default()
        );
    } else if cli.text {
        println!("{}", result.content_text);
    } else {
        println!(
            "{}",
            result.content_html.as_deref().unwrap_or(&result.content_text)
        );
    }

    Ok(())
}
