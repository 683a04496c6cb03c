//! Sibling merging.
//!
//! Articles are often split across several blocks (a lead paragraph, the
//! body, a continuation after an ad slot). After the top candidate is
//! chosen, its siblings are scanned in document order and the ones that
//! plausibly continue the article are moved into a fresh container.

use dom_query::{Document, NodeRef};
use tracing::trace;

use crate::dom;
use crate::link_density::link_density;
use crate::patterns::SENTENCE_END;

use super::state::ScoreTable;
use super::tags::Tag;

/// Floor of the sibling score threshold.
const MIN_SIBLING_THRESHOLD: f64 = 10.0;

/// Share of the top score used for the threshold and the shared-class bonus.
const SIBLING_SHARE: f64 = 0.2;

/// Paragraph length separating the "long" and "short" paragraph tests.
const PARAGRAPH_SPLIT_LEN: usize = 80;

/// Build the article container from the top candidate and its siblings.
///
/// The top candidate's class is read once before the scan, so every
/// sibling sharing it gets the bonus even after the candidate itself has
/// been merged (and lost its class).
pub fn merge_siblings<'a>(
    doc: &'a Document,
    top: &NodeRef<'a>,
    table: &ScoreTable<'a>,
) -> NodeRef<'a> {
    let container = dom::create_element(doc, "div");

    let top_score = table.score_or_zero(top.id);
    let threshold = MIN_SIBLING_THRESHOLD.max(top_score * SIBLING_SHARE);
    let top_class = dom::class_name(top);

    let siblings = match top.parent() {
        Some(parent) => dom::element_children(&parent),
        None => vec![*top],
    };

    for sibling in siblings {
        if !should_merge(&sibling, top, &top_class, top_score, threshold, table) {
            continue;
        }

        trace!(
            tag = %dom::tag_name(&sibling).unwrap_or_default(),
            id = %dom::id(&sibling),
            "appending sibling"
        );

        let block = as_block(doc, &sibling);
        dom::remove_attribute(&block, "class");
        dom::append_child(&container, &block);
    }

    container
}

fn should_merge(
    sibling: &NodeRef,
    top: &NodeRef,
    top_class: &str,
    top_score: f64,
    threshold: f64,
    table: &ScoreTable,
) -> bool {
    if sibling.id == top.id {
        return true;
    }

    let bonus = if !top_class.is_empty() && dom::class_name(sibling) == top_class {
        top_score * SIBLING_SHARE
    } else {
        0.0
    };

    if table.score(sibling.id).is_some_and(|score| score + bonus >= threshold) {
        return true;
    }

    if Tag::of(sibling) == Tag::P {
        let density = link_density(sibling);
        let content = dom::inner_text(sibling);
        let length = content.chars().count();

        if length > PARAGRAPH_SPLIT_LEN && density < 0.25 {
            return true;
        }
        if length < PARAGRAPH_SPLIT_LEN && density.abs() < f64::EPSILON && SENTENCE_END.is_match(&content) {
            return true;
        }
    }

    false
}

/// The sibling itself when it is a DIV or P, else a DIV copy of it.
///
/// The copy keeps the id and inner markup; the original stays in the page.
fn as_block<'a>(doc: &'a Document, sibling: &NodeRef<'a>) -> NodeRef<'a> {
    let Some(name) = dom::tag_name(sibling) else {
        return *sibling;
    };
    if Tag::from_name(&name).is_block_container() {
        return *sibling;
    }

    trace!(from = %name, "altering sibling to div");
    let block = dom::create_element(doc, "div");
    let id = dom::id(sibling);
    if !id.is_empty() {
        dom::set_attribute(&block, "id", &id);
    }
    dom::set_inner_html(&block, &dom::inner_html(sibling));
    block
}
