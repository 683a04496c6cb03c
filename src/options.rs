//! Configuration options for content extraction.
//!
//! The `Options` struct is threaded explicitly through every stage of the
//! pipeline; nothing is read from process-wide state, so independent
//! extractions with different settings can run side by side.

use crate::flags::FlagSet;
use crate::patterns::Patterns;

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_readability::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     clean_conditionally: false,
///     min_content_length: 500,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Delete elements whose class/id looks like boilerplate during the pre-pass.
    ///
    /// Default: `true`
    pub strip_unlikely_candidates: bool,

    /// Adjust candidate scores by class/id keyword weight.
    ///
    /// Default: `true`
    pub weight_classes: bool,

    /// Remove forms, tables, lists and divs that look like noise.
    ///
    /// Default: `true`
    pub clean_conditionally: bool,

    /// Keyword patterns consulted by the classifier and cleaner.
    ///
    /// Default: the classic readability keyword tables
    pub patterns: Patterns,

    /// Minimum text length (characters) of a successful attempt.
    ///
    /// Attempts yielding less are retried with one heuristic disabled.
    ///
    /// Default: `250`
    pub min_content_length: usize,

    /// Strip `style` attributes from the extracted content.
    ///
    /// Default: `false`
    pub clean_styles: bool,

    /// Collapse runs of `<br>` tags in the extracted content.
    ///
    /// Default: `false`
    pub kill_breaks: bool,

    /// Rewrite links in the extracted content as numbered footnotes.
    ///
    /// Default: `false`
    pub convert_links_to_footnotes: bool,

    /// URL of the document, used to resolve footnote link hosts.
    ///
    /// Default: `None`
    pub base_url: Option<String>,
}

impl Options {
    /// Flag set of the first extraction attempt.
    #[must_use]
    pub const fn initial_flags(&self) -> FlagSet {
        FlagSet::from_switches(
            self.strip_unlikely_candidates,
            self.weight_classes,
            self.clean_conditionally,
        )
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strip_unlikely_candidates: true,
            weight_classes: true,
            clean_conditionally: true,
            patterns: Patterns::default(),
            min_content_length: 250,
            clean_styles: false,
            kill_breaks: false,
            convert_links_to_footnotes: false,
            base_url: None,
        }
    }
}
