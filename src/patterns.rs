//! Compiled regex patterns used by the classifier, pre-pass and cleaner.
//!
//! The keyword tables are compiled once with `LazyLock` and copied into a
//! [`Patterns`] value, which callers may override kind by kind (for example
//! to localize the class/id keywords). Structural patterns that describe
//! markup rather than vocabulary stay static.

#![allow(clippy::expect_used)]

use std::fmt;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

// =============================================================================
// Keyword Patterns (overridable)
// =============================================================================

/// Class/id names of blocks that are almost never article content.
pub static UNLIKELY_CANDIDATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)combx|comment|community|disqus|extra|foot|header|menu|remark|rss|shoutbox|sidebar|sponsor|ad-break|agegate|pagination|pager|popup|tweet|twitter|reference|policy_text|hidden",
    )
    .expect("UNLIKELY_CANDIDATES regex")
});

/// Narrower override: an unlikely-looking name that still may hold content.
pub static MAYBE_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)and|article|body|column|main|shadow").expect("MAYBE_CANDIDATE regex")
});

/// Class/id names of elements that may carry a publication date.
pub static MAYBE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)date|dt|tmstmp").expect("MAYBE_DATE regex")
});

/// Class/id names that raise the class weight.
pub static POSITIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)article|body|content|entry|hentry|main|page|pagination|post|text|blog|story")
        .expect("POSITIVE regex")
});

/// Class/id names that lower the class weight.
pub static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)combx|comment|com-|contact|foot|footer|footnote|masthead|media|meta|outbrain|promo|related|scroll|shoutbox|sidebar|sponsor|shopping|tags|tool|widget|reference",
    )
    .expect("NEGATIVE regex")
});

/// Portal portlets, removed regardless of flags.
pub static PORTLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)portlet").expect("PORTLET regex")
});

/// Video hosts whose embeds survive cleaning.
pub static VIDEOS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://(www\.)?(youtube|vimeo)\.com").expect("VIDEOS regex")
});

/// "Jan 5, 2010 10:30 PM EST" style dates.
pub static DATE_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\w*\s+\d{1,2},\s+\d{4}(\s+\d{1,2}:\d{1,2}(:\d{1,2})?)?(\s*[AaPp][Mm])?(\s+[A-Z]{3}\W)?",
    )
    .expect("DATE_TEXT regex")
});

// =============================================================================
// Structural Patterns
// =============================================================================

/// Block-level tags whose presence keeps a DIV from becoming a paragraph.
pub static DIV_TO_P_ELEMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(a|blockquote|dl|div|img|ol|p|pre|table|ul)").expect("DIV_TO_P_ELEMENTS regex")
});

/// A period followed by a space or the end of the text.
pub static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.( |$)").expect("SENTENCE_END regex")
});

/// Link texts that are already reference markers and get no footnote.
pub static SKIP_FOOTNOTE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\[?[a-z0-9]{1,2}\]?|^|edit|citation needed)\s*$")
        .expect("SKIP_FOOTNOTE_LINK regex")
});

/// English month/day/year capture used to parse date fragments.
pub static DATE_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<month>Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\w*\s+(?P<day>\d{1,2}),\s+(?P<year>\d{4})")
        .expect("DATE_PARTS regex")
});

/// Identifies one of the overridable keyword patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    UnlikelyCandidates,
    MaybeCandidate,
    MaybeDate,
    Positive,
    Negative,
    Portlet,
    Videos,
    DateText,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UnlikelyCandidates => "unlikely-candidates",
            Self::MaybeCandidate => "maybe-candidate",
            Self::MaybeDate => "maybe-date",
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Portlet => "portlet",
            Self::Videos => "videos",
            Self::DateText => "date-text",
        };
        f.write_str(name)
    }
}

/// The keyword pattern set consulted during one extraction.
///
/// `Regex` clones share their compiled program, so copying the defaults is
/// cheap and a `Patterns` value can be reused across extractions.
///
/// # Example
///
/// ```rust
/// use rs_readability::patterns::{PatternKind, Patterns};
///
/// let patterns = Patterns::default()
///     .with_pattern(PatternKind::Positive, "artikel|inhalt|content")?;
/// assert!(patterns.positive.is_match("Artikel-Text"));
/// # Ok::<(), rs_readability::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Patterns {
    pub unlikely_candidates: Regex,
    pub maybe_candidate: Regex,
    pub maybe_date: Regex,
    pub positive: Regex,
    pub negative: Regex,
    pub portlet: Regex,
    pub videos: Regex,
    pub date_text: Regex,
}

impl Patterns {
    /// Replace one pattern with a case-insensitive compilation of `source`.
    pub fn with_pattern(mut self, kind: PatternKind, source: &str) -> Result<Self> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::InvalidPattern { kind, source })?;

        *self.slot(kind) = regex;
        Ok(self)
    }

    /// Pattern currently used for `kind`.
    #[must_use]
    pub fn get(&self, kind: PatternKind) -> &Regex {
        match kind {
            PatternKind::UnlikelyCandidates => &self.unlikely_candidates,
            PatternKind::MaybeCandidate => &self.maybe_candidate,
            PatternKind::MaybeDate => &self.maybe_date,
            PatternKind::Positive => &self.positive,
            PatternKind::Negative => &self.negative,
            PatternKind::Portlet => &self.portlet,
            PatternKind::Videos => &self.videos,
            PatternKind::DateText => &self.date_text,
        }
    }

    fn slot(&mut self, kind: PatternKind) -> &mut Regex {
        match kind {
            PatternKind::UnlikelyCandidates => &mut self.unlikely_candidates,
            PatternKind::MaybeCandidate => &mut self.maybe_candidate,
            PatternKind::MaybeDate => &mut self.maybe_date,
            PatternKind::Positive => &mut self.positive,
            PatternKind::Negative => &mut self.negative,
            PatternKind::Portlet => &mut self.portlet,
            PatternKind::Videos => &mut self.videos,
            PatternKind::DateText => &mut self.date_text,
        }
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self {
            unlikely_candidates: UNLIKELY_CANDIDATES.clone(),
            maybe_candidate: MAYBE_CANDIDATE.clone(),
            maybe_date: MAYBE_DATE.clone(),
            positive: POSITIVE.clone(),
            negative: NEGATIVE.clone(),
            portlet: PORTLET.clone(),
            videos: VIDEOS.clone(),
            date_text: DATE_TEXT.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlikely_candidates_match_boilerplate_names() {
        assert!(UNLIKELY_CANDIDATES.is_match("sidebar"));
        assert!(UNLIKELY_CANDIDATES.is_match("site-Footer"));
        assert!(UNLIKELY_CANDIDATES.is_match("disqus_thread"));
        assert!(!UNLIKELY_CANDIDATES.is_match("story-text"));
    }

    #[test]
    fn maybe_candidate_rescues_article_containers() {
        assert!(MAYBE_CANDIDATE.is_match("comment-body"));
        assert!(MAYBE_CANDIDATE.is_match("main-header"));
        assert!(!MAYBE_CANDIDATE.is_match("sidebar"));
    }

    #[test]
    fn date_text_matches_month_day_year() {
        assert!(DATE_TEXT.is_match("March 3, 2011"));
        assert!(DATE_TEXT.is_match("Jan 15, 2010 10:30 PM"));
        assert!(!DATE_TEXT.is_match("2010-01-15"));
    }

    #[test]
    fn div_to_p_detects_block_children() {
        assert!(DIV_TO_P_ELEMENTS.is_match("text <P>para</P>"));
        assert!(DIV_TO_P_ELEMENTS.is_match("<img src=x>"));
        assert!(!DIV_TO_P_ELEMENTS.is_match("plain <span>inline</span> <b>bold</b>"));
    }

    #[test]
    fn sentence_end_requires_space_or_end() {
        assert!(SENTENCE_END.is_match("It ended."));
        assert!(SENTENCE_END.is_match("One. Two"));
        assert!(SENTENCE_END.is_match("Dr. Who airs tonight"));
        assert!(!SENTENCE_END.is_match("version 1.5"));
    }

    #[test]
    fn videos_accept_http_and_https() {
        assert!(VIDEOS.is_match("http://www.youtube.com/embed/abc"));
        assert!(VIDEOS.is_match("https://vimeo.com/123"));
        assert!(!VIDEOS.is_match("https://example.com/video.mp4"));
    }

    #[test]
    fn override_replaces_single_pattern() {
        let patterns = Patterns::default()
            .with_pattern(PatternKind::Negative, "werbung")
            .unwrap();

        assert!(patterns.negative.is_match("WERBUNG-box"));
        assert!(!patterns.negative.is_match("sidebar"));
        assert!(patterns.get(PatternKind::Positive).is_match("article"));
    }

    #[test]
    fn invalid_override_reports_kind() {
        let err = Patterns::default()
            .with_pattern(PatternKind::Videos, "(unclosed")
            .unwrap_err();

        assert!(matches!(err, Error::InvalidPattern { kind: PatternKind::Videos, .. }));
        assert!(err.to_string().starts_with("invalid videos pattern"));
    }
}
