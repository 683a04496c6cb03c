//! HTML Processing
//!
//! Document preparation before extraction and the optional presentation
//! passes applied to the extracted article.

use dom_query::NodeRef;

use crate::dom::{self, Document};

/// Elements that never carry article text.
const TAGS_TO_CLEAN: &str = "script, style, noscript, link[rel~=stylesheet]";

/// Class that protects an element's inline style from [`clean_styles`].
pub const STYLED_CLASS: &str = "readability-styled";

/// Prepare a parsed document for extraction.
///
/// Removes scripts, style blocks, `<noscript>` fallbacks and linked style
/// sheets. This is the static-tree equivalent of disabling style sheets in a
/// live page.
pub fn prep_document(doc: &Document) {
    doc.select(TAGS_TO_CLEAN).remove();
}

/// Remove `style` attributes from `root` and every element below it.
///
/// Elements whose class is exactly `readability-styled` keep theirs.
pub fn clean_styles(root: &NodeRef) {
    let mut elements = vec![*root];
    elements.extend(dom::select_all(root, "*"));

    for element in elements {
        if dom::class_name(&element) != STYLED_CLASS {
            dom::remove_attribute(&element, "style");
        }
    }
}

/// Collapse every run of `<br>` tags (with blank text between) to one `<br>`.
///
/// Blank text directly after the last break of a run goes too.
pub fn kill_breaks(root: &NodeRef) {
    for br in dom::select_all(root, "br") {
        // Skip breaks already removed as part of an earlier run.
        if br.parent().is_none() {
            continue;
        }

        let mut current = br.next_sibling();
        while let Some(sibling) = current {
            let blank_text = sibling.is_text() && sibling.text().trim().is_empty();
            if !blank_text && !dom::has_tag(&sibling, "br") {
                break;
            }
            current = sibling.next_sibling();
            dom::detach(&sibling);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prep_document_removes_scripts_and_styles() {
        let doc = dom::parse(
            r#"<html><head><style>p{}</style><link rel="stylesheet" href="a.css"><link rel="icon" href="i.png"></head>
            <body><script>var x = 1;</script><noscript>Enable JS</noscript><p>Text</p></body></html>"#,
        );

        prep_document(&doc);

        assert!(doc.select("script, style, noscript").is_empty());
        assert!(doc.select("link[rel=stylesheet]").is_empty());
        assert!(doc.select("link[rel=icon]").exists());
        assert!(doc.select("p").exists());
    }

    #[test]
    fn test_clean_styles_spares_marked_elements() {
        let doc = dom::parse(
            r#"<div id="root" style="color:red"><p style="margin:0">a</p><p class="readability-styled" style="x">b</p></div>"#,
        );
        let root = *doc.select("#root").nodes().first().unwrap();

        clean_styles(&root);

        assert_eq!(doc.select("[style]").length(), 1);
        assert!(doc.select(".readability-styled[style]").exists());
    }

    #[test]
    fn test_kill_breaks_collapses_runs() {
        let doc = dom::parse("<div id=\"root\">one<br><br> \u{a0} <br>two<br>three</div>");
        let root = *doc.select("#root").nodes().first().unwrap();

        kill_breaks(&root);

        assert_eq!(doc.select("#root br").length(), 2);
        assert_eq!(dom::inner_text(&root), "onetwothree");
    }
}
