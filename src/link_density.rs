//! Link Density
//!
//! The share of an element's text that sits inside anchors. Navigation
//! blocks, tag clouds and "related" lists are mostly link text, while
//! article prose rarely is, so candidate scores are scaled by
//! `1 - link_density` and the cleaners use it as a noise signal.

use crate::dom::{self, NodeRef};

/// Total text length of every anchor under `node`.
fn collect_link_length(node: &NodeRef) -> usize {
    dom::select_all(node, "a")
        .iter()
        .map(dom::text_len)
        .sum()
}

/// Anchor text length divided by total text length, in `[0, 1]`.
///
/// An element without text has density 0. Nested anchors can make the raw
/// ratio exceed 1, so the result is clamped.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn link_density(node: &NodeRef) -> f64 {
    let text_length = dom::text_len(node);
    if text_length == 0 {
        return 0.0;
    }

    let link_length = collect_link_length(node);
    (link_length as f64 / text_length as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn density(html: &str) -> f64 {
        let doc = dom::parse(html);
        let node = *doc.select("#target").nodes().first().unwrap();
        link_density(&node)
    }

    #[test]
    fn test_link_density_nav_menu() {
        let d = density(
            r##"<ul id="target"><li><a href="#">Home</a></li><li><a href="#">About</a></li></ul>"##,
        );
        assert!((d - 1.0).abs() < 1e-9, "nav menu should be all links, got {d}");
    }

    #[test]
    fn test_link_density_article_paragraph() {
        let d = density(
            r##"<p id="target">Most of this sentence is plain text with <a href="#">one link</a> in it.</p>"##,
        );
        assert!(d > 0.0 && d < 0.25, "got {d}");
    }

    #[test]
    fn test_link_density_no_links() {
        let d = density(r#"<div id="target">Just text, no anchors at all.</div>"#);
        assert!(d.abs() < f64::EPSILON);
    }

    #[test]
    fn test_link_density_empty_element_is_zero() {
        let d = density(r##"<div id="target"><a href="#"></a>   </div>"##);
        assert!(d.abs() < f64::EPSILON);
        assert!(!d.is_nan());
    }

    #[test]
    fn test_link_density_half() {
        let d = density(r##"<p id="target"><a href="#">abcd</a>efgh</p>"##);
        assert!((d - 0.5).abs() < 1e-9, "got {d}");
    }
}
