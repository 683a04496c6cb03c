//! Article title heuristic.
//!
//! Page titles usually carry the site name ("Story | Site", "Site: Story").
//! The heuristic strips it off, or falls back to the page's only `<h1>` when
//! the title is implausibly short or long, and keeps the original title when
//! the result would be four words or fewer.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::dom::{self, Document};

/// A pipe or hyphen separator surrounded by spaces.
static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" [|\-] ").expect("SEPARATOR regex"));

/// Everything before the last separator.
static BEFORE_LAST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*)[|\-] .*").expect("BEFORE_LAST_SEPARATOR regex"));

/// Everything after the first separator character.
static AFTER_FIRST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^|\-]*[|\-](.*)").expect("AFTER_FIRST_SEPARATOR regex"));

static AFTER_LAST_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*:(.*)").expect("AFTER_LAST_COLON regex"));

static AFTER_FIRST_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^:]*:(.*)").expect("AFTER_FIRST_COLON regex"));

/// Titles outside this character range are replaced by a lone `<h1>`.
const MIN_TITLE_LEN: usize = 15;
const MAX_TITLE_LEN: usize = 150;

/// Word count as a space split, empty pieces included.
fn word_count(text: &str) -> usize {
    text.split(' ').count()
}

fn rewrite(text: &str, pattern: &Regex) -> String {
    pattern.replace_all(text, "$1").into_owned()
}

/// Best-guess article title for a parsed page.
#[must_use]
pub fn article_title(doc: &Document) -> String {
    let original = doc
        .select("title")
        .nodes()
        .first()
        .map(dom::inner_text)
        .unwrap_or_default();

    let mut title = original.clone();

    if SEPARATOR.is_match(&title) {
        title = rewrite(&original, &BEFORE_LAST_SEPARATOR);
        if word_count(&title) < 3 {
            title = rewrite(&original, &AFTER_FIRST_SEPARATOR);
        }
    } else if title.contains(": ") {
        title = rewrite(&original, &AFTER_LAST_COLON);
        if word_count(&title) < 3 {
            title = rewrite(&original, &AFTER_FIRST_COLON);
        }
    } else {
        let length = title.chars().count();
        if length > MAX_TITLE_LEN || length < MIN_TITLE_LEN {
            if let [h1] = doc.select("h1").nodes() {
                title = dom::inner_text(h1);
            }
        }
    }

    let title = title.trim();
    if word_count(title) <= 4 {
        original
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_of(html: &str) -> String {
        article_title(&dom::parse(html))
    }

    #[test]
    fn test_site_name_after_pipe_is_dropped() {
        let t = title_of("<title>How to Build a Parser in Rust | Example Blog</title>");
        assert_eq!(t, "How to Build a Parser in Rust");
    }

    #[test]
    fn test_site_name_before_hyphen_is_dropped() {
        let t = title_of("<title>Blog - Some Article Title Here Now</title>");
        assert_eq!(t, "Some Article Title Here Now");
    }

    #[test]
    fn test_colon_prefix_is_dropped() {
        let t = title_of("<title>Breaking: Scientists discover a new species today</title>");
        assert_eq!(t, "Scientists discover a new species today");
    }

    #[test]
    fn test_short_title_uses_single_h1() {
        let t = title_of("<title>Home</title><h1>A much longer and descriptive headline</h1>");
        assert_eq!(t, "A much longer and descriptive headline");
    }

    #[test]
    fn test_short_title_with_two_h1_is_kept() {
        let t = title_of("<title>Home</title><h1>First heading here</h1><h1>Second one</h1>");
        assert_eq!(t, "Home");
    }

    #[test]
    fn test_too_short_result_keeps_original() {
        let t = title_of("<title>News | Site</title>");
        assert_eq!(t, "News | Site");
    }

    #[test]
    fn test_missing_title_is_empty() {
        assert_eq!(title_of("<p>No title</p>"), "");
    }
}
