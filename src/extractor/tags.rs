//! Tag catalog for the content scorer.
//!
//! Only the tags that carry a scoring or cleaning rule get their own variant;
//! everything else collapses into [`Tag::Other`].

use crate::dom::{self, NodeRef};

/// Element kinds the scorer and cleaner distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    P,
    Td,
    Pre,
    Blockquote,
    Address,
    Ol,
    Ul,
    Dl,
    Dd,
    Dt,
    Li,
    Form,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Th,
    A,
    Img,
    Object,
    Embed,
    Iframe,
    Body,
    Html,
    Other,
}

impl Tag {
    /// Map a tag name (any case) to its kind.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "div" => Self::Div,
            "p" => Self::P,
            "td" => Self::Td,
            "pre" => Self::Pre,
            "blockquote" => Self::Blockquote,
            "address" => Self::Address,
            "ol" => Self::Ol,
            "ul" => Self::Ul,
            "dl" => Self::Dl,
            "dd" => Self::Dd,
            "dt" => Self::Dt,
            "li" => Self::Li,
            "form" => Self::Form,
            "h1" => Self::H1,
            "h2" => Self::H2,
            "h3" => Self::H3,
            "h4" => Self::H4,
            "h5" => Self::H5,
            "h6" => Self::H6,
            "th" => Self::Th,
            "a" => Self::A,
            "img" => Self::Img,
            "object" => Self::Object,
            "embed" => Self::Embed,
            "iframe" => Self::Iframe,
            "body" => Self::Body,
            "html" => Self::Html,
            _ => Self::Other,
        }
    }

    /// Kind of an element node; non-elements are `Other`.
    #[must_use]
    pub fn of(node: &NodeRef) -> Self {
        dom::tag_name(node).map_or(Self::Other, |name| Self::from_name(&name))
    }

    /// Starting score of a freshly initialized candidate.
    #[must_use]
    pub const fn base_score(self) -> f64 {
        match self {
            Self::Div => 5.0,
            Self::Pre | Self::Td | Self::Blockquote => 3.0,
            Self::Address
            | Self::Ol
            | Self::Ul
            | Self::Dl
            | Self::Dd
            | Self::Dt
            | Self::Li
            | Self::Form => -3.0,
            Self::H1 | Self::H2 | Self::H3 | Self::H4 | Self::H5 | Self::H6 | Self::Th => -5.0,
            _ => 0.0,
        }
    }

    /// Paragraph-like elements whose text feeds the scorer.
    #[must_use]
    pub const fn is_scorable(self) -> bool {
        matches!(self, Self::P | Self::Td | Self::Pre)
    }

    /// `<body>` or `<html>`, never acceptable as the article itself.
    #[must_use]
    pub const fn is_document_root(self) -> bool {
        matches!(self, Self::Body | Self::Html)
    }

    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::Ul | Self::Ol)
    }

    /// Elements that are already block containers for the merged article.
    #[must_use]
    pub const fn is_block_container(self) -> bool {
        matches!(self, Self::Div | Self::P)
    }
}
