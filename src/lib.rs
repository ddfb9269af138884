//! # Survey Sentiment
//!
//! Sentiment and theme analysis of quarterly energy survey comments with
//! WTI oil price correlation.
//!
//! ## Modules
//!
//! - `api` - survey site client and page extraction
//! - `data` - records, preprocessing, the persisted table, and the daily
//!   price series
//! - `sentiment` - discrete classifier, lexicon scorer, and theme catalog
//! - `analysis` - period aggregation and correlation estimation
//! - `report` - PNG chart output
//!
//! ## Example Usage
//!
//! ```no_run
//! use survey_sentiment::analysis::label_records;
//! use survey_sentiment::api::SurveyClient;
//! use survey_sentiment::data::Period;
//! use survey_sentiment::sentiment::{LexiconScorer, SentimentModel, ThemeCatalog};
//!
//! #[tokio::main]
//! async fn main() {
//!     // Fetch one survey quarter
//!     let client = SurveyClient::new();
//!     let records = client.fetch_period(Period::new(2020, 1)).await.unwrap();
//!
//!     // Label every comment
//!     let model = SentimentModel::load();
//!     let lexicon = LexiconScorer::new();
//!     let catalog = ThemeCatalog::new();
//!     let labeled = label_records(&model, &lexicon, &catalog, &records).unwrap();
//!
//!     println!("labeled {} comments", labeled.len());
//! }
//! ```

pub mod analysis;
pub mod api;
pub mod data;
pub mod report;
pub mod sentiment;

// Re-exports for convenience
pub use analysis::{
    align_with_prices, correlation_with_se, label_records, lagged_correlations,
    mean_sentiment_by_period, theme_sentiment_counts, AlignedSeries, CorrelationEstimate,
};
pub use api::{SurveyClient, SurveyError};
pub use data::{
    load_daily_prices, quarterly_mean_price, CommentRecord, LabeledRecord, Period, RecordStore,
    SourceKind,
};
pub use sentiment::{
    LexiconScore, LexiconScorer, ModelError, Segment, SentimentLabel, SentimentModel,
    ThemeCatalog,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
