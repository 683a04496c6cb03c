//! DOM Operations Adapter
//!
//! Node-level operations over the `dom_query` arena tree. Every element keeps
//! a stable `NodeId` for the lifetime of its `Document`; detaching a node only
//! unlinks it from its parent, so the id stays valid and the pipeline can use
//! it as a key into side tables and treat detached nodes as tombstones.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> Option<StrTendril> {
    Selection::from(*node).attr(name)
}

/// Element `id`, empty when absent
#[must_use]
pub fn id(node: &NodeRef) -> String {
    attr(node, "id").map(|s| s.to_string()).unwrap_or_default()
}

/// Element `class`, empty when absent
#[must_use]
pub fn class_name(node: &NodeRef) -> String {
    attr(node, "class").map(|s| s.to_string()).unwrap_or_default()
}

/// Set an attribute value
#[inline]
pub fn set_attribute(node: &NodeRef, name: &str, value: &str) {
    Selection::from(*node).set_attr(name, value);
}

/// Remove an attribute
#[inline]
pub fn remove_attribute(node: &NodeRef, name: &str) {
    Selection::from(*node).remove_attr(name);
}

/// Get all attributes as key-value pairs
#[must_use]
pub fn get_all_attributes(node: &NodeRef) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

// === Tag/Node Information ===

/// Lowercase tag name, `None` for text, comment and document nodes
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<StrTendril> {
    if node.is_element() {
        node.node_name()
    } else {
        None
    }
}

/// Whether `node` is an element with the given (lowercase) tag name
#[must_use]
pub fn has_tag(node: &NodeRef, tag: &str) -> bool {
    tag_name(node).is_some_and(|t| t.eq_ignore_ascii_case(tag))
}

// === Text Content ===

/// Derived text, trimmed, with whitespace runs collapsed to one space
#[must_use]
pub fn inner_text(node: &NodeRef) -> String {
    node.text().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Length of [`inner_text`] in characters
#[must_use]
pub fn text_len(node: &NodeRef) -> usize {
    inner_text(node).chars().count()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).inner_html()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).html()
}

// === Tree Navigation ===

/// Direct element children, skipping text and comments
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_element).collect()
}

/// Descendant elements matching a CSS selector, in document order
#[must_use]
pub fn select_all<'a>(node: &NodeRef<'a>, selector: &str) -> Vec<NodeRef<'a>> {
    Selection::from(*node).select(selector).nodes().to_vec()
}

/// Number of descendant elements matching a CSS selector
#[must_use]
pub fn count(node: &NodeRef, selector: &str) -> usize {
    Selection::from(*node).select(selector).length()
}

/// The `<body>` element of a parsed document
#[must_use]
pub fn body(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select("body").nodes().first().copied()
}

// === Tree Manipulation ===

/// Create a detached element owned by `doc`
#[must_use]
pub fn create_element<'a>(doc: &'a Document, tag: &str) -> NodeRef<'a> {
    doc.tree.new_element(tag)
}

/// Unlink a node (and its subtree) from its parent
#[inline]
pub fn detach(node: &NodeRef) {
    Selection::from(*node).remove();
}

/// Move `child` to the end of `parent`'s children
pub fn append_child(parent: &NodeRef, child: &NodeRef) {
    child.remove_from_parent();
    parent.append_child(&child.id);
}

/// Move `node` directly before `anchor`
pub fn insert_before(anchor: &NodeRef, node: &NodeRef) {
    node.remove_from_parent();
    anchor.insert_before(&node.id);
}

/// Move every child of `from` (text included) to the end of `to`
pub fn move_children(from: &NodeRef, to: &NodeRef) {
    for child in from.children() {
        append_child(to, &child);
    }
}

/// Replace the node's children with parsed markup
#[inline]
pub fn set_inner_html(node: &NodeRef, html: &str) {
    Selection::from(*node).set_html(html);
}

/// Rename element tag in place, keeping attributes and children
#[inline]
pub fn rename(node: &NodeRef, new_tag: &str) {
    Selection::from(*node).rename(new_tag);
}

/// Escape text for inclusion in markup
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Replace the node's children with a single text node
pub fn set_text(node: &NodeRef, text: &str) {
    set_inner_html(node, &escape_text(text));
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
