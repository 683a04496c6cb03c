//! Element normalization before scoring.
//!
//! One walk over every element under the page root, in document order:
//! short date blocks are recorded and skipped, portlets and (while
//! `STRIP_UNLIKELYS` is active) boilerplate-looking blocks are removed, and
//! DIVs used as paragraphs become real paragraphs.
//!
//! The element list is captured once up front. Removing an element detaches
//! its subtree from the page, and every later element of that subtree is
//! skipped because its ancestor chain no longer reaches the page root.

use std::collections::HashSet;

use dom_query::{Document, NodeId, NodeRef};
use tracing::trace;

use crate::classifier::{self, Classifier};
use crate::dom;
use crate::flags::FlagSet;
use crate::patterns::DIV_TO_P_ELEMENTS;

use super::tags::Tag;

/// What the pre-pass hands to the scorer.
#[derive(Default)]
pub struct Prepass<'a> {
    /// Paragraph-like elements to score, in the order they were found.
    pub paragraphs: Vec<NodeRef<'a>>,
    /// Raw text of every date block, in document order.
    pub dates: Vec<String>,
}

/// Normalize the elements under `page` in place.
pub fn normalize<'a>(doc: &'a Document, page: &NodeRef<'a>, classifier: &Classifier) -> Prepass<'a> {
    let elements = dom::select_all(page, "*");
    let strip_unlikelys = classifier.flags().contains(FlagSet::STRIP_UNLIKELYS);

    let mut out = Prepass::default();
    let mut excluded: HashSet<NodeId> = HashSet::new();

    for node in elements {
        if !is_live(&node, page.id, &excluded) {
            continue;
        }

        let match_string = classifier::match_string(&node);

        if let Some(date) = classifier.date_text(&node, &match_string) {
            trace!(%date, "date block");
            out.dates.push(date);
            excluded.insert(node.id);
            continue;
        }

        if classifier.is_portlet(&match_string) {
            trace!(%match_string, "removing portlet");
            dom::detach(&node);
            continue;
        }

        let tag = Tag::of(&node);

        if strip_unlikelys && tag != Tag::Body && classifier.is_unlikely_candidate(&match_string) {
            trace!(%match_string, "removing unlikely candidate");
            dom::detach(&node);
            continue;
        }

        if tag.is_scorable() {
            out.paragraphs.push(node);
        } else if tag == Tag::Div {
            normalize_div(doc, &node, &mut out.paragraphs);
        }
    }

    out
}

/// Whether `node` still hangs under the page without crossing an excluded block.
fn is_live(node: &NodeRef, page: NodeId, excluded: &HashSet<NodeId>) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.id == page {
            return true;
        }
        if excluded.contains(&parent.id) {
            return false;
        }
        current = parent.parent();
    }
    false
}

/// Turn a paragraph-like DIV into a P, or wrap the loose text of a block DIV.
fn normalize_div<'a>(doc: &'a Document, div: &NodeRef<'a>, paragraphs: &mut Vec<NodeRef<'a>>) {
    if !DIV_TO_P_ELEMENTS.is_match(&dom::inner_html(div)) {
        dom::rename(div, "p");
        paragraphs.push(*div);
        return;
    }

    for child in div.children() {
        if !child.is_text() || child.text().trim().is_empty() {
            continue;
        }
        let paragraph = dom::create_element(doc, "p");
        dom::insert_before(&child, &paragraph);
        dom::append_child(&paragraph, &child);
        paragraphs.push(paragraph);
    }
}
