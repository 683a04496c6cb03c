//! Article cleanup after sibling merging.
//!
//! Two kinds of rules live here. Conditional cleaning (gated on
//! `CLEAN_CONDITIONALLY`) removes forms, tables, lists and divs that look
//! like noise by their counts of paragraphs, images, list items, inputs and
//! embeds. The structural rules (embeds, lone `h2`, headers, empty
//! paragraphs, stray breaks) always run.
//!
//! Every rule walks its matches in reverse document order, so a removal
//! never affects an element that is still to be visited.

use dom_query::NodeRef;
use tracing::trace;

use crate::classifier::Classifier;
use crate::dom;
use crate::flags::FlagSet;
use crate::link_density::link_density;

use super::state::ScoreTable;
use super::tags::Tag;

/// Bias subtracted from the list item count before comparing with paragraphs.
const LIST_ITEM_BIAS: i64 = 100;

/// Elements with at least this many commas are never noise.
const MIN_COMMAS_FOR_CONTENT: usize = 10;

/// Run the fixed cleanup sequence over the article container.
pub fn prepare_article(container: &NodeRef, table: &ScoreTable, classifier: &Classifier) {
    clean_conditionally(container, "form", table, classifier);
    clean_embeds(container, classifier);
    clean_single_h2(container);
    clean_headers(container, classifier);

    for tag in ["table", "ul", "div"] {
        clean_conditionally(container, tag, table, classifier);
    }

    remove_empty_paragraphs(container);
    drop_breaks_before_paragraphs(container);
}

/// Remove descendants named `tag` that look like noise.
///
/// No-op unless `CLEAN_CONDITIONALLY` is active.
pub fn clean_conditionally(container: &NodeRef, tag: &str, table: &ScoreTable, classifier: &Classifier) {
    if !classifier.flags().contains(FlagSet::CLEAN_CONDITIONALLY) {
        return;
    }

    let is_list = Tag::from_name(tag).is_list();

    for node in dom::select_all(container, tag).into_iter().rev() {
        let weight = classifier.class_weight(&node);
        let score = table.score_or_zero(node.id);

        let remove = if f64::from(weight) + score < 0.0 {
            true
        } else if comma_count(&node) < MIN_COMMAS_FOR_CONTENT {
            looks_like_noise(&node, is_list, weight, classifier)
        } else {
            false
        };

        if remove {
            trace!(tag, class = %dom::class_name(&node), id = %dom::id(&node), "conditionally removing");
            dom::detach(&node);
        }
    }
}

fn comma_count(node: &NodeRef) -> usize {
    dom::inner_text(node).matches(',').count()
}

/// The count-based noise heuristic for elements with few commas.
#[allow(clippy::cast_possible_wrap)]
fn looks_like_noise(node: &NodeRef, is_list: bool, weight: i32, classifier: &Classifier) -> bool {
    let p = dom::count(node, "p") as i64;
    let img = dom::count(node, "img") as i64;
    let li = dom::count(node, "li") as i64 - LIST_ITEM_BIAS;
    let input = dom::count(node, "input") as i64;

    let embeds = dom::select_all(node, "embed")
        .iter()
        .filter(|embed| !classifier.is_video(&dom::attr(embed, "src").unwrap_or_default()))
        .count();

    let density = link_density(node);
    let content_length = dom::text_len(node);

    img > p
        || (li > p && !is_list)
        || input > p / 3
        || (content_length < 25 && (img == 0 || img > 2))
        || (weight < 25 && density > 0.2)
        || (weight >= 25 && density > 0.5)
        || (embeds == 1 && content_length < 75)
        || embeds > 1
}

/// Remove `object` and `iframe` elements that do not point at a video host.
///
/// Attribute values and inner markup are both searched.
pub fn clean_embeds(container: &NodeRef, classifier: &Classifier) {
    for tag in ["object", "iframe"] {
        for node in dom::select_all(container, tag).into_iter().rev() {
            let attribute_values = dom::get_all_attributes(&node)
                .into_iter()
                .map(|(_, value)| value)
                .collect::<Vec<_>>()
                .join("|");

            if classifier.is_video(&attribute_values) || classifier.is_video(&dom::inner_html(&node)) {
                continue;
            }

            trace!(tag, "removing embed");
            dom::detach(&node);
        }
    }
}

/// A page with exactly one `h2` is using it as a title; drop it.
pub fn clean_single_h2(container: &NodeRef) {
    let headers = dom::select_all(container, "h2");
    if let [only] = headers.as_slice() {
        dom::detach(only);
    }
}

/// Remove `h1`/`h2` headers with a negative class weight or mostly link text.
pub fn clean_headers(container: &NodeRef, classifier: &Classifier) {
    for tag in ["h1", "h2"] {
        for header in dom::select_all(container, tag).into_iter().rev() {
            if classifier.class_weight(&header) < 0 || link_density(&header) > 0.33 {
                trace!(tag, "removing header");
                dom::detach(&header);
            }
        }
    }
}

/// Remove paragraphs with no text and no media.
pub fn remove_empty_paragraphs(container: &NodeRef) {
    for paragraph in dom::select_all(container, "p").into_iter().rev() {
        let has_media = dom::count(&paragraph, "img, embed, object") > 0;
        if !has_media && dom::inner_text(&paragraph).is_empty() {
            dom::detach(&paragraph);
        }
    }
}

/// Drop a `<br>` whose next non-blank sibling is a paragraph.
pub fn drop_breaks_before_paragraphs(container: &NodeRef) {
    for br in dom::select_all(container, "br") {
        if next_non_blank_sibling(&br).is_some_and(|next| dom::has_tag(&next, "p")) {
            dom::detach(&br);
        }
    }
}

fn next_non_blank_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut current = node.next_sibling();
    while let Some(sibling) = current {
        if !(sibling.is_text() && sibling.text().trim().is_empty()) {
            return Some(sibling);
        }
        current = sibling.next_sibling();
    }
    None
}
