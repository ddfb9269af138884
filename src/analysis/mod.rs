//! # Analysis Module
//!
//! Correlation estimation and the period-level aggregation that feeds it.

pub mod correlation;
pub mod summary;

pub use correlation::{correlation_with_se, first_difference, pearson, shift, CorrelationEstimate};
pub use summary::{
    align_with_prices, label_records, lagged_correlations, mean_polarity_by_label,
    mean_sentiment_by_period, theme_sentiment_counts, AlignedSeries, LaggedCorrelations,
};
