//! Element classification from class and id keywords.
//!
//! A [`Classifier`] binds the keyword [`Patterns`] to the [`FlagSet`] of the
//! current attempt, so every stage asks the same questions the same way:
//! what is this element's class weight, does it look like boilerplate, does
//! it hold a date.

use crate::dom::{self, NodeRef};
use crate::flags::FlagSet;
use crate::patterns::Patterns;

/// Weight added or subtracted per keyword match.
const KEYWORD_WEIGHT: i32 = 25;

/// Longest text (in characters) an element may hold to count as a date.
const MAX_DATE_TEXT_LEN: usize = 32;

/// Keyword classifier for one extraction attempt.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'p> {
    flags: FlagSet,
    patterns: &'p Patterns,
}

impl<'p> Classifier<'p> {
    #[must_use]
    pub const fn new(flags: FlagSet, patterns: &'p Patterns) -> Self {
        Self { flags, patterns }
    }

    /// Flags of the attempt this classifier serves.
    #[must_use]
    pub const fn flags(&self) -> FlagSet {
        self.flags
    }

    /// Signed keyword weight of the element's class and id.
    ///
    /// Zero while `WEIGHT_CLASSES` is inactive. Class and id are tested
    /// separately: -25 for a negative keyword, +25 for a positive one.
    #[must_use]
    pub fn class_weight(&self, node: &NodeRef) -> i32 {
        if !self.flags.contains(FlagSet::WEIGHT_CLASSES) {
            return 0;
        }

        [dom::class_name(node), dom::id(node)]
            .iter()
            .filter(|value| !value.is_empty())
            .map(|value| self.keyword_weight(value))
            .sum()
    }

    fn keyword_weight(&self, value: &str) -> i32 {
        let mut weight = 0;
        if self.patterns.negative.is_match(value) {
            weight -= KEYWORD_WEIGHT;
        }
        if self.patterns.positive.is_match(value) {
            weight += KEYWORD_WEIGHT;
        }
        weight
    }

    /// Boilerplate-looking name without a content-looking override.
    #[must_use]
    pub fn is_unlikely_candidate(&self, match_string: &str) -> bool {
        self.patterns.unlikely_candidates.is_match(match_string)
            && !self.patterns.maybe_candidate.is_match(match_string)
    }

    #[must_use]
    pub fn is_portlet(&self, match_string: &str) -> bool {
        self.patterns.portlet.is_match(match_string)
    }

    /// Text of a short date-bearing element, if `node` is one.
    #[must_use]
    pub fn date_text(&self, node: &NodeRef, match_string: &str) -> Option<String> {
        if !self.patterns.maybe_date.is_match(match_string) {
            return None;
        }

        let text = dom::inner_text(node);
        (text.chars().count() < MAX_DATE_TEXT_LEN && self.patterns.date_text.is_match(&text))
            .then_some(text)
    }

    /// Whether `value` references a known video host.
    #[must_use]
    pub fn is_video(&self, value: &str) -> bool {
        self.patterns.videos.is_match(value)
    }
}

/// Class immediately followed by id, the string the keyword tests run on.
#[must_use]
pub fn match_string(node: &NodeRef) -> String {
    let mut value = dom::class_name(node);
    value.push_str(&dom::id(node));
    value
}
