//! Top candidate selection.

use dom_query::{Document, NodeRef};
use tracing::{debug, trace};

use crate::classifier::Classifier;
use crate::dom;
use crate::link_density::link_density;

use super::state::ScoreTable;
use super::tags::Tag;

/// Scale every candidate by `1 - link_density` and return the best one.
///
/// Each score is rescaled exactly once. Ties go to the candidate that was
/// initialized first. Returns `None` when there are no candidates.
pub fn best_candidate<'a>(table: &mut ScoreTable<'a>) -> Option<NodeRef<'a>> {
    let candidates = table.candidates().to_vec();
    let mut top: Option<(NodeRef<'a>, f64)> = None;

    for candidate in candidates {
        table.scale(candidate.id, 1.0 - link_density(&candidate));
        let score = table.score_or_zero(candidate.id);

        trace!(
            tag = %dom::tag_name(&candidate).unwrap_or_default(),
            class = %dom::class_name(&candidate),
            id = %dom::id(&candidate),
            score,
            "candidate"
        );

        let better = match top {
            Some((_, best)) => score > best,
            None => true,
        };
        if better {
            top = Some((candidate, score));
        }
    }

    top.map(|(node, _)| node)
}

/// Pick the top candidate, falling back to a wrapper around the whole page.
///
/// When nothing was scored, or the winner is the body or root element, every
/// child of `page` is moved into a fresh `<div>` appended to `page`, and that
/// div is initialized as the candidate.
pub fn select_top_candidate<'a>(
    doc: &'a Document,
    page: &NodeRef<'a>,
    table: &mut ScoreTable<'a>,
    classifier: &Classifier,
) -> NodeRef<'a> {
    if let Some(top) = best_candidate(table).filter(|node| !Tag::of(node).is_document_root()) {
        return top;
    }

    debug!("no usable candidate, wrapping the page body");
    let wrapper = dom::create_element(doc, "div");
    dom::move_children(page, &wrapper);
    dom::append_child(page, &wrapper);
    table.initialize(&wrapper, classifier);
    wrapper
}
