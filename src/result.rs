//! Result types for extraction output.
//!
//! This module defines what an extraction hands back: the detached article
//! tree, the best-guess title, date fragments found on the way, and the flag
//! sets of every attempt that was made.

use std::fmt;

use chrono::NaiveDate;

use crate::dom::{self, Document, NodeRef};
use crate::flags::FlagSet;
use crate::patterns::DATE_PARTS;

/// The extracted article body, detached from the source page.
///
/// Owns its own document; [`ContentTree::root`] is the article container
/// (a `<div>`).
pub struct ContentTree {
    document: Document,
}

impl ContentTree {
    /// Build a tree from the serialized article container.
    #[must_use]
    pub fn from_html(html: &str) -> Self {
        Self {
            document: dom::parse(html),
        }
    }

    /// The article container element.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.document.select("body > div").nodes().first().copied()
    }

    /// The owning document, for custom queries.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Outer HTML of the article container.
    #[must_use]
    pub fn html(&self) -> String {
        self.root().map(|root| dom::outer_html(&root).to_string()).unwrap_or_default()
    }

    /// Inner HTML of the article container.
    #[must_use]
    pub fn inner_html(&self) -> String {
        self.root().map(|root| dom::inner_html(&root).to_string()).unwrap_or_default()
    }

    /// Article text with whitespace collapsed.
    #[must_use]
    pub fn text(&self) -> String {
        self.root().map(|root| dom::inner_text(&root)).unwrap_or_default()
    }

    /// Length of [`ContentTree::text`] in characters.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.root().map_or(0, |root| dom::text_len(&root))
    }
}

impl Clone for ContentTree {
    fn clone(&self) -> Self {
        Self::from_html(&self.html())
    }
}

impl PartialEq for ContentTree {
    fn eq(&self, other: &Self) -> bool {
        self.html() == other.html()
    }
}

impl fmt::Debug for ContentTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentTree").field("html", &self.html()).finish()
    }
}

/// A short date string found during the pre-pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFragment {
    /// Element text, trimmed and with whitespace runs collapsed.
    pub raw: String,
    /// Calendar date, when the text names a valid English "Mon D, YYYY" date.
    pub date: Option<NaiveDate>,
}

impl DateFragment {
    #[must_use]
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let date = parse_english_date(&raw);
        Self { raw, date }
    }
}

fn parse_english_date(text: &str) -> Option<NaiveDate> {
    let caps = DATE_PARTS.captures(text)?;
    let month = match &caps["month"] {
        "Jan" => 1,
        "Feb" => 2,
        "Mar" => 3,
        "Apr" => 4,
        "May" => 5,
        "Jun" => 6,
        "Jul" => 7,
        "Aug" => 8,
        "Sep" => 9,
        "Oct" => 10,
        "Nov" => 11,
        "Dec" => 12,
        _ => return None,
    };
    let day = caps["day"].parse().ok()?;
    let year = caps["year"].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Result of extracting an article from an HTML document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Article {
    /// Best-guess article title (may be empty).
    pub title: String,

    /// The cleaned article body, `None` when no attempt yielded enough text.
    pub content: Option<ContentTree>,

    /// Date fragments of the last attempt, in document order.
    pub dates: Vec<DateFragment>,

    /// Flag set of every attempt, in the order they ran.
    pub attempts: Vec<FlagSet>,

    /// Number of links rewritten as footnotes.
    pub footnotes: usize,
}

impl Article {
    /// Whether an article body was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.content.is_some()
    }

    /// Article text, empty when nothing was found.
    #[must_use]
    pub fn text(&self) -> String {
        self.content.as_ref().map(ContentTree::text).unwrap_or_default()
    }

    /// Article markup, `None` when nothing was found.
    #[must_use]
    pub fn html(&self) -> Option<String> {
        self.content.as_ref().map(ContentTree::html)
    }
}
