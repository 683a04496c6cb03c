//! Command-line front end: reads a page from a file or stdin and prints the
//! extracted article as text, HTML or JSON.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use rs_readability::{dom, encoding, extract_bytes_with_options, Article, DateFragment, FlagSet, Options};

/// Extract the main article from an HTML page
#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "readability")]
#[command(version)]
#[command(about = "Readability-style main content extraction for HTML pages")]
struct Args {
    /// HTML file to read; stdin when omitted
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// MIME type of the input, e.g. "text/html; charset=koi8-r"
    #[arg(long)]
    mime: Option<String>,

    /// Charset of the input; overrides --mime and any <meta> declaration
    #[arg(long)]
    charset: Option<String>,

    /// URL of the page, used to name footnote link hosts
    #[arg(long)]
    base_url: Option<String>,

    /// Keep elements whose class/id looks like boilerplate
    #[arg(long)]
    no_strip_unlikelys: bool,

    /// Ignore class/id keywords when scoring
    #[arg(long)]
    no_weight_classes: bool,

    /// Keep forms, tables, lists and divs that look like noise
    #[arg(long)]
    no_clean_conditionally: bool,

    /// Minimum article length in characters
    #[arg(long, default_value_t = 250)]
    min_length: usize,

    /// Strip inline styles from the article
    #[arg(long)]
    clean_styles: bool,

    /// Collapse runs of <br> tags
    #[arg(long)]
    kill_breaks: bool,

    /// Rewrite links as numbered footnotes
    #[arg(long)]
    footnotes: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

#[derive(Serialize)]
struct Output<'a> {
    title: &'a str,
    found: bool,
    content: Option<String>,
    text: String,
    dates: Vec<DateOutput<'a>>,
    attempts: &'a [FlagSet],
    footnotes: usize,
}

#[derive(Serialize)]
struct DateOutput<'a> {
    raw: &'a str,
    date: Option<String>,
}

impl<'a> Output<'a> {
    fn new(article: &'a Article) -> Self {
        Self {
            title: &article.title,
            found: article.is_found(),
            content: article.html(),
            text: article.text(),
            dates: article.dates.iter().map(DateOutput::new).collect(),
            attempts: &article.attempts,
            footnotes: article.footnotes,
        }
    }
}

impl<'a> DateOutput<'a> {
    fn new(fragment: &'a DateFragment) -> Self {
        Self {
            raw: &fragment.raw,
            date: fragment.date.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

impl Args {
    fn options(&self) -> Options {
        Options {
            strip_unlikely_candidates: !self.no_strip_unlikelys,
            weight_classes: !self.no_weight_classes,
            clean_conditionally: !self.no_clean_conditionally,
            min_content_length: self.min_length,
            clean_styles: self.clean_styles,
            kill_breaks: self.kill_breaks,
            convert_links_to_footnotes: self.footnotes,
            base_url: self.base_url.clone(),
            ..Options::default()
        }
    }

    fn charset(&self) -> Option<&str> {
        self.charset
            .as_deref()
            .or_else(|| self.mime.as_deref().and_then(encoding::charset_from_mime))
    }
}

fn read_input(path: Option<&PathBuf>) -> rs_readability::Result<Vec<u8>> {
    match path {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> rs_readability::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let html = read_input(args.input.as_ref())?;
    let article = extract_bytes_with_options(&html, args.charset(), &args.options());

    if !article.is_found() {
        tracing::warn!(attempts = article.attempts.len(), "no article found");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Text => {
            if !article.title.is_empty() {
                writeln!(out, "{}\n", article.title)?;
            }
            writeln!(out, "{}", article.text())?;
        }
        Format::Html => {
            if !article.title.is_empty() {
                writeln!(out, "<h1>{}</h1>", dom::escape_text(&article.title))?;
            }
            if let Some(html) = article.html() {
                writeln!(out, "{html}")?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &Output::new(&article))?;
            writeln!(out)?;
        }
    }

    Ok(())
}
