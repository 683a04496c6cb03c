//! Links as footnotes.
//!
//! Every link in the article gets a numbered superscript marker after it,
//! and a footnote list at the end of the article repeats each link with its
//! host, so the text reads cleanly on paper or in a narrow reader view.

use tracing::debug;

use crate::dom::{self, NodeRef};
use crate::patterns::SKIP_FOOTNOTE_LINK;
use crate::result::ContentTree;
use crate::url_utils;

/// Class marking links that are never turned into footnotes.
pub const DO_NOT_FOOTNOTE: &str = "readability-DoNotFootnote";

/// Rewrite the links of `content` as footnotes; returns how many were made.
///
/// `base_url` resolves relative hrefs when naming each link's host.
pub fn add_footnotes(content: &ContentTree, base_url: Option<&str>) -> usize {
    let Some(root) = content.root() else {
        return 0;
    };
    let doc = content.document();
    let base = url_utils::parse_base(base_url);

    let mut items = String::new();
    let mut count = 0;

    for link in dom::select_all(&root, "a") {
        let text = dom::inner_text(&link);
        if dom::class_name(&link).contains(DO_NOT_FOOTNOTE) || SKIP_FOOTNOTE_LINK.is_match(&text) {
            continue;
        }
        count += 1;

        let marker = dom::create_element(doc, "a");
        dom::set_attribute(&marker, "href", &format!("#readabilityFootnoteLink-{count}"));
        dom::set_attribute(&marker, "class", DO_NOT_FOOTNOTE);
        dom::set_attribute(&marker, "style", "color: inherit;");
        dom::set_inner_html(&marker, &format!("<small><sup>[{count}]</sup></small>"));
        insert_after(&link, &marker);

        dom::set_attribute(&link, "name", &format!("readabilityLink-{count}"));
        dom::set_attribute(&link, "style", "color: inherit;");

        items.push_str(&footnote_item(&link, &text, count, base.as_ref()));
    }

    if count > 0 {
        let wrapper = dom::create_element(doc, "div");
        dom::set_inner_html(&wrapper, &format!("<ol>{items}</ol>"));
        dom::append_child(&root, &wrapper);
        debug!(count, "links converted to footnotes");
    }

    count
}

fn insert_after(node: &NodeRef, new_node: &NodeRef) {
    match node.next_sibling() {
        Some(next) => dom::insert_before(&next, new_node),
        None => {
            if let Some(parent) = node.parent() {
                dom::append_child(&parent, new_node);
            }
        }
    }
}

/// Markup of one footnote list item.
fn footnote_item(link: &NodeRef, text: &str, number: usize, base: Option<&url::Url>) -> String {
    let href = dom::attr(link, "href").map(|h| h.to_string()).unwrap_or_default();
    let title = dom::attr(link, "title").map(|t| t.to_string()).unwrap_or_default();
    let label = if title.is_empty() { text } else { title.as_str() };
    let host = url_utils::link_host(&href, base);

    format!(
        "<li><small><sup><a href=\"#readabilityLink-{number}\" title=\"Jump to Link in Article\">^</a></sup></small> \
         <a href=\"{href}\" name=\"readabilityFootnoteLink-{number}\">{label}</a><small> ({host})</small></li>",
        href = dom::escape_text(&href),
        label = dom::escape_text(label),
        host = dom::escape_text(&host),
    )
}
