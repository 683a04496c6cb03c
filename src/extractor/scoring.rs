//! Paragraph scoring.
//!
//! Every scorable paragraph (P, TD or PRE with at least 25 characters of
//! text) credits its parent with its full score and its grandparent with
//! half of it. Contributions are plain sums, so the resulting scores do not
//! depend on the order paragraphs are visited in.

use dom_query::NodeRef;
use tracing::trace;

use crate::classifier::Classifier;
use crate::dom;

use super::state::ScoreTable;
use super::tags::Tag;

/// Paragraphs shorter than this (in characters) are ignored entirely.
pub const MIN_PARAGRAPH_LEN: usize = 25;

/// Score a paragraph with the given text contributes to its parent.
///
/// One point as a base, one per comma, and one per full 100 characters up to
/// three.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn paragraph_score(text: &str) -> f64 {
    let commas = text.matches(',').count();
    let length_bonus = (text.chars().count() / 100).min(3);
    (1 + commas + length_bonus) as f64
}

/// Credit every qualifying paragraph to its parent and grandparent.
///
/// Parents and grandparents are initialized on first use and become
/// candidates in that order.
pub fn score_paragraphs<'a>(
    paragraphs: &[NodeRef<'a>],
    table: &mut ScoreTable<'a>,
    classifier: &Classifier,
) {
    for paragraph in paragraphs {
        if !Tag::of(paragraph).is_scorable() {
            continue;
        }

        let Some(parent) = paragraph.parent().filter(NodeRef::is_element) else {
            continue;
        };

        let text = dom::inner_text(paragraph);
        if text.chars().count() < MIN_PARAGRAPH_LEN {
            continue;
        }

        let grandparent = parent.parent().filter(NodeRef::is_element);

        table.initialize(&parent, classifier);
        if let Some(grandparent) = &grandparent {
            table.initialize(grandparent, classifier);
        }

        let delta = paragraph_score(&text);
        table.add(parent.id, delta);
        if let Some(grandparent) = &grandparent {
            table.add(grandparent.id, delta / 2.0);
        }

        trace!(
            tag = %dom::tag_name(&parent).unwrap_or_default(),
            delta,
            "paragraph credited to parent"
        );
    }
}
