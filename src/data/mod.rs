//! # Data Module
//!
//! Record types, text preprocessing, the persisted labeled table, and the
//! external daily price series.

pub mod preprocessing;
pub mod prices;
pub mod records;
pub mod store;

pub use preprocessing::TextPreprocessor;
pub use prices::{load_daily_prices, quarterly_mean_price, PriceObservation};
pub use records::{CommentRecord, LabeledRecord, ParsePeriodError, Period, SourceKind};
pub use store::RecordStore;
