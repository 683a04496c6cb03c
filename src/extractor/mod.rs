//! Main content extraction module.
//!
//! # Module Structure
//!
//! - `tags`: Tag kinds with their base scores
//! - `state`: Per-attempt score side table
//! - `prepass`: Element normalization (dates, unlikely blocks, DIV paragraphs)
//! - `scoring`: Paragraph scoring and propagation to ancestors
//! - `candidates`: Top candidate selection with the body fallback
//! - `siblings`: Merging related siblings into the article container
//! - `cleaning`: Conditional and structural cleanup of the container
//! - `pipeline`: The attempt loop tying it all together
//!
//! # Usage
//!
//! ```rust
//! use rs_readability::{dom, extractor, Options};
//!
//! let doc = dom::parse("<p>Too short to be an article.</p>");
//! let extraction = extractor::grab_article(&doc, &Options::default());
//!
//! assert!(extraction.content.is_none());
//! assert_eq!(extraction.attempts.len(), 4);
//! ```

pub mod candidates;
pub mod cleaning;
pub mod pipeline;
pub mod prepass;
pub mod scoring;
pub mod siblings;
pub mod state;
pub mod tags;

pub use pipeline::{grab_article, Extraction};
pub use state::ScoreTable;
pub use tags::Tag;
