//! # rs-readability
//!
//! Readability-style main content extraction for HTML documents.
//!
//! Given a page cluttered with navigation, sidebars, comment threads and ad
//! slots, this library finds the block of markup holding the article, grows
//! it with related siblings, cleans it, and hands it back as its own tree.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readability::extract;
//!
//! let body = "Readers keep coming back to long, careful pieces of writing. ".repeat(6);
//! let html = format!(
//!     "<html><head><title>On Writing | Example</title></head>\
//!      <body><div class=\"sidebar\">Links</div><div id=\"post\"><p>{body}</p></div></body></html>"
//! );
//!
//! let article = extract(&html);
//! assert!(article.is_found());
//! assert!(article.text().starts_with("Readers keep coming back"));
//! ```
//!
//! ## How it works
//!
//! - **Pre-pass**: date fragments are pulled out, boilerplate blocks are
//!   dropped, and DIVs that act as paragraphs become `<p>`s
//! - **Scoring**: every paragraph gives points to its parent and half as many
//!   to its grandparent, weighted by commas, length and class/id keywords
//! - **Selection**: scores are scaled by link density and the best ancestor
//!   wins; related siblings are merged in
//! - **Cleanup**: forms, tables, lists and divs that look like noise go
//! - **Retry**: when the result is too short, the page is restored and the
//!   pipeline runs again with one heuristic disabled, at most four times

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod options;
mod result;

/// Keyword patterns and the regular expressions of the pipeline.
pub mod patterns;

/// Heuristic switches of one extraction attempt.
pub mod flags;

/// DOM operations adapter over dom_query.
pub mod dom;

/// Class/id based classification of elements.
pub mod classifier;

/// Link density of a subtree.
pub mod link_density;

/// Main content extraction (pre-pass, scoring, selection, cleanup, retries).
pub mod extractor;

/// Document preparation and presentation passes.
pub mod html_processing;

/// Article title heuristic.
pub mod title;

/// Links rewritten as footnotes.
pub mod footnotes;

/// Character encoding detection and transcoding.
pub mod encoding;

/// URL resolution for footnote hosts.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use flags::FlagSet;
pub use options::Options;
pub use patterns::{PatternKind, Patterns};
pub use result::{Article, ContentTree, DateFragment};

use tracing::debug;

/// Extracts the article from an HTML document using default options.
///
/// Never fails: a page without a usable article yields an [`Article`] whose
/// `content` is `None`.
///
/// # Example
///
/// ```rust
/// use rs_readability::extract;
///
/// let article = extract("<html><body><p>Hi</p></body></html>");
/// assert!(!article.is_found());
/// assert_eq!(article.attempts.len(), 4);
/// ```
#[must_use]
pub fn extract(html: &str) -> Article {
    extract_with_options(html, &Options::default())
}

/// Extracts the article from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use rs_readability::{extract_with_options, Options};
///
/// let options = Options {
///     clean_conditionally: false,
///     min_content_length: 100,
///     ..Options::default()
/// };
/// let article = extract_with_options("<html><body><p>Hi</p></body></html>", &options);
/// assert_eq!(article.attempts.len(), 3);
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> Article {
    let doc = dom::parse(html);
    html_processing::prep_document(&doc);

    let title = title::article_title(&doc);
    let extraction = extractor::grab_article(&doc, options);

    let footnotes = match &extraction.content {
        Some(content) if options.convert_links_to_footnotes => {
            footnotes::add_footnotes(content, options.base_url.as_deref())
        }
        _ => 0,
    };

    debug!(
        found = extraction.content.is_some(),
        attempts = extraction.attempts.len(),
        footnotes,
        "extraction complete"
    );

    Article {
        title,
        content: extraction.content,
        dates: extraction.dates,
        attempts: extraction.attempts,
        footnotes,
    }
}

/// Extracts the article from HTML bytes with automatic encoding detection.
///
/// The charset is taken from a byte order mark or a `<meta>` declaration,
/// defaulting to UTF-8. Invalid sequences become U+FFFD rather than errors.
///
/// # Example
///
/// ```rust
/// use rs_readability::extract_bytes;
///
/// let body = "Caf\u{e9} culture, with its long afternoons, is the subject here. ".repeat(6);
/// let (latin1, _, _) = encoding_rs::WINDOWS_1252.encode(&body);
/// let mut html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><div><p>".to_vec();
/// html.extend_from_slice(&latin1);
/// html.extend_from_slice(b"</p></div></body></html>");
///
/// let article = extract_bytes(&html);
/// assert!(article.text().contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8]) -> Article {
    extract_bytes_with_options(html, None, &Options::default())
}

/// Extracts the article from HTML bytes with custom options.
///
/// `charset` is an explicit label (for example from a `Content-Type`
/// header) that takes precedence over anything declared in the page.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], charset: Option<&str>, options: &Options) -> Article {
    let html = encoding::decode_html(html, charset);
    extract_with_options(&html, options)
}
