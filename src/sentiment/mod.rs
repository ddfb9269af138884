//! # Sentiment Scoring
//!
//! Discrete 3-class classification, continuous lexicon scoring, and keyword
//! theme/segment detection for survey comments.

pub mod lexicon;
pub mod model;
pub mod themes;
mod weights;

pub use lexicon::{LexiconScore, LexiconScorer};
pub use model::{ModelError, SentimentLabel, SentimentModel};
pub use themes::{Segment, ThemeCatalog, UNCATEGORIZED_THEME};
