//! Extraction orchestration.
//!
//! One attempt runs the whole pipeline with a fixed [`FlagSet`]: pre-pass,
//! paragraph scoring, candidate selection, sibling merging and cleanup. When
//! the cleaned article is too short the page is restored from the snapshot
//! taken before the first attempt and the next attempt runs with one flag
//! fewer, in the order strip-unlikelys, weight-classes, clean-conditionally.
//! That bounds an extraction to at most four attempts.

use dom_query::{Document, NodeRef};
use tracing::debug;

use crate::classifier::Classifier;
use crate::dom;
use crate::flags::FlagSet;
use crate::html_processing;
use crate::options::Options;
use crate::result::{ContentTree, DateFragment};

use super::candidates::select_top_candidate;
use super::cleaning::prepare_article;
use super::prepass;
use super::scoring::score_paragraphs;
use super::siblings::merge_siblings;
use super::state::ScoreTable;

/// Outcome of [`grab_article`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// The cleaned article container, if any attempt yielded enough text.
    pub content: Option<ContentTree>,
    /// Date fragments seen by the last attempt.
    pub dates: Vec<DateFragment>,
    /// Flag set of every attempt, in order.
    pub attempts: Vec<FlagSet>,
}

enum Step {
    Attempt(FlagSet),
    Done(Option<ContentTree>),
}

/// What one attempt produced, before the yield check.
struct Attempt<'a> {
    container: NodeRef<'a>,
    dates: Vec<DateFragment>,
}

/// Find the article in `doc`.
///
/// The document is modified in place; after a failed attempt its body is
/// restored from the snapshot, after a successful one it is left as the
/// last attempt left it. The returned content is an independent copy.
pub fn grab_article(doc: &Document, options: &Options) -> Extraction {
    let Some(page) = dom::body(doc) else {
        return Extraction::default();
    };

    let snapshot = dom::inner_html(&page).to_string();
    let mut attempts = Vec::new();
    let mut dates = Vec::new();
    let mut step = Step::Attempt(options.initial_flags());

    loop {
        step = match step {
            Step::Attempt(flags) => {
                attempts.push(flags);
                let classifier = Classifier::new(flags, &options.patterns);
                let attempt = run_attempt(doc, &page, &classifier, options);
                let text_len = dom::text_len(&attempt.container);
                dates = attempt.dates;

                debug!(attempt = attempts.len(), %flags, text_len, "attempt finished");

                if text_len >= options.min_content_length {
                    let content = ContentTree::from_html(&dom::outer_html(&attempt.container));
                    Step::Done(Some(content))
                } else {
                    dom::set_inner_html(&page, &snapshot);
                    match flags.degrade() {
                        Some(next) => Step::Attempt(next),
                        None => {
                            debug!("no article found after {} attempts", attempts.len());
                            Step::Done(None)
                        }
                    }
                }
            }
            Step::Done(content) => {
                return Extraction {
                    content,
                    dates,
                    attempts,
                };
            }
        };
    }
}

/// Run the pipeline once with the classifier's flags.
fn run_attempt<'a>(
    doc: &'a Document,
    page: &NodeRef<'a>,
    classifier: &Classifier,
    options: &Options,
) -> Attempt<'a> {
    let prepass = prepass::normalize(doc, page, classifier);

    let mut table = ScoreTable::new();
    score_paragraphs(&prepass.paragraphs, &mut table, classifier);

    let top = select_top_candidate(doc, page, &mut table, classifier);
    debug!(
        tag = %dom::tag_name(&top).unwrap_or_default(),
        score = table.score_or_zero(top.id),
        candidates = table.len(),
        "top candidate"
    );

    let container = merge_siblings(doc, &top, &table);

    if options.clean_styles {
        html_processing::clean_styles(&container);
    }
    if options.kill_breaks {
        html_processing::kill_breaks(&container);
    }
    prepare_article(&container, &table, classifier);

    for date in &prepass.dates {
        let block = dom::create_element(doc, "div");
        dom::set_attribute(&block, "class", "date");
        dom::set_text(&block, date);
        dom::append_child(&container, &block);
    }

    Attempt {
        container,
        dates: prepass.dates.into_iter().map(DateFragment::parse).collect(),
    }
}
