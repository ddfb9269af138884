//! # Aggregation and Reporting
//!
//! Turns collected comments into labeled records, builds the
//! theme × sentiment × period summary, and aligns the per-period mean
//! sentiment with the quarterly price series for correlation reporting.

use crate::analysis::correlation::{
    correlation_with_se, first_difference, shift, CorrelationEstimate,
};
use crate::data::records::{CommentRecord, LabeledRecord, Period};
use crate::sentiment::lexicon::LexiconScorer;
use crate::sentiment::model::{ModelError, SentimentLabel, SentimentModel};
use crate::sentiment::themes::ThemeCatalog;
use std::collections::BTreeMap;

/// Apply the sentiment model, lexicon scorer, and theme catalog to every
/// collected comment.
///
/// Model inference failures propagate: a comment the model cannot score
/// aborts the labeling pass rather than receiving a default label.
pub fn label_records(
    model: &SentimentModel,
    lexicon: &LexiconScorer,
    catalog: &ThemeCatalog,
    records: &[CommentRecord],
) -> Result<Vec<LabeledRecord>, ModelError> {
    records
        .iter()
        .map(|record| {
            let sentiment = model.classify(&record.text)?;
            let lexicon_score = lexicon.score(&record.text);
            Ok(LabeledRecord {
                text: record.text.clone(),
                source: record.source,
                period: record.period,
                sentiment,
                polarity: lexicon_score.polarity,
                subjectivity: lexicon_score.subjectivity,
                themes: catalog.detect_themes(&record.text),
                segment: catalog.detect_segment(&record.text),
            })
        })
        .collect()
}

/// Count labeled records by (theme, sentiment, period).
///
/// Multi-theme records are exploded first, so a record with N themes
/// contributes to N groups. The `BTreeMap` keying makes the grouping
/// order-independent.
pub fn theme_sentiment_counts(
    records: &[LabeledRecord],
) -> BTreeMap<(String, SentimentLabel, Period), usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        for theme in &record.themes {
            *counts
                .entry((theme.clone(), record.sentiment, record.period))
                .or_insert(0) += 1;
        }
    }
    counts
}

/// Arithmetic mean of the mapped sentiment scores (-1, 0, +1) per period.
///
/// The result is keyed by quarter, so it comes back sorted chronologically
/// with one entry per period, the required shape for lag and difference
/// transforms downstream.
pub fn mean_sentiment_by_period(records: &[LabeledRecord]) -> Vec<(Period, f64)> {
    let mut sums: BTreeMap<Period, (f64, u32)> = BTreeMap::new();
    for record in records {
        let entry = sums.entry(record.period).or_insert((0.0, 0));
        entry.0 += record.sentiment.score();
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(period, (sum, count))| (period, sum / count as f64))
        .collect()
}

/// Mean lexicon polarity grouped by the model's discrete label, used to
/// sanity-check that the two scorers agree in direction.
pub fn mean_polarity_by_label(records: &[LabeledRecord]) -> BTreeMap<SentimentLabel, f64> {
    let mut sums: BTreeMap<SentimentLabel, (f64, u32)> = BTreeMap::new();
    for record in records {
        let entry = sums.entry(record.sentiment).or_insert((0.0, 0));
        entry.0 += record.polarity;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(label, (sum, count))| (label, sum / count as f64))
        .collect()
}

/// Per-period sentiment and price, aligned by a left join on the sentiment
/// series' periods.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSeries {
    /// Periods in chronological order.
    pub periods: Vec<Period>,
    /// Mean sentiment score per period.
    pub sentiment: Vec<Option<f64>>,
    /// Quarterly mean price, `None` where the price series has no entry.
    pub price: Vec<Option<f64>>,
}

/// Left-join the quarterly price series onto the sentiment series.
///
/// Every sentiment period survives; periods absent from the price series
/// get a missing price. Both inputs are expected sorted and deduplicated
/// (the per-period aggregations produce exactly that).
pub fn align_with_prices(
    sentiment: &[(Period, f64)],
    prices: &[(Period, f64)],
) -> AlignedSeries {
    let price_by_period: BTreeMap<Period, f64> = prices.iter().copied().collect();

    let mut series = AlignedSeries {
        periods: Vec::with_capacity(sentiment.len()),
        sentiment: Vec::with_capacity(sentiment.len()),
        price: Vec::with_capacity(sentiment.len()),
    };
    for &(period, score) in sentiment {
        series.periods.push(period);
        series.sentiment.push(Some(score));
        series.price.push(price_by_period.get(&period).copied());
    }
    series
}

/// Correlation estimates at the lags the report covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaggedCorrelations {
    /// Sentiment(t) vs price(t).
    pub same_quarter: CorrelationEstimate,
    /// Sentiment(t) vs price(t-1).
    pub price_lag1: CorrelationEstimate,
    /// Sentiment(t) vs price(t+1).
    pub price_lead1: CorrelationEstimate,
    /// ΔSentiment(t) vs Δprice(t+1).
    pub delta_vs_next_delta: CorrelationEstimate,
}

/// Compute the four reported correlations over an aligned series.
pub fn lagged_correlations(series: &AlignedSeries) -> LaggedCorrelations {
    let price_lag1 = shift(&series.price, 1);
    let price_lead1 = shift(&series.price, -1);

    let delta_sentiment = first_difference(&series.sentiment);
    let delta_price = first_difference(&series.price);
    let delta_price_next = shift(&delta_price, -1);

    LaggedCorrelations {
        same_quarter: correlation_with_se(&series.sentiment, &series.price),
        price_lag1: correlation_with_se(&series.sentiment, &price_lag1),
        price_lead1: correlation_with_se(&series.sentiment, &price_lead1),
        delta_vs_next_delta: correlation_with_se(&delta_sentiment, &delta_price_next),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::records::SourceKind;
    use crate::sentiment::themes::Segment;

    fn labeled(
        text: &str,
        period: Period,
        sentiment: SentimentLabel,
        themes: &[&str],
    ) -> LabeledRecord {
        LabeledRecord {
            text: text.to_string(),
            source: SourceKind::Comment,
            period,
            sentiment,
            polarity: sentiment.score() * 0.5,
            subjectivity: 0.5,
            themes: themes.iter().map(|t| t.to_string()).collect(),
            segment: Segment::Unknown,
        }
    }

    #[test]
    fn test_label_records_end_to_end() {
        let model = SentimentModel::load();
        let lexicon = LexiconScorer::new();
        let catalog = ThemeCatalog::new();
        let records = vec![CommentRecord::new(
            "Oil prices are falling due to oversupply",
            SourceKind::Comment,
            Period::new(2020, 1),
        )];

        let labeled = label_records(&model, &lexicon, &catalog, &records).unwrap();
        assert_eq!(labeled.len(), 1);
        assert_eq!(labeled[0].sentiment, SentimentLabel::Negative);
        assert_eq!(labeled[0].themes, vec!["Oil Price Outlook".to_string()]);
        assert_eq!(labeled[0].segment, Segment::Unknown);
        assert!(labeled[0].polarity < 0.0);
    }

    #[test]
    fn test_label_records_propagates_model_errors() {
        let model = SentimentModel::load();
        let lexicon = LexiconScorer::new();
        let catalog = ThemeCatalog::new();
        let records = vec![CommentRecord::new(
            "...",
            SourceKind::Comment,
            Period::new(2020, 1),
        )];

        assert!(label_records(&model, &lexicon, &catalog, &records).is_err());
    }

    #[test]
    fn test_counts_explode_multi_theme_records() {
        let period = Period::new(2021, 2);
        let records = vec![
            labeled("a", period, SentimentLabel::Negative, &["Oil Price Outlook", "Cost Inflation"]),
            labeled("b", period, SentimentLabel::Negative, &["Oil Price Outlook"]),
        ];

        let counts = theme_sentiment_counts(&records);
        assert_eq!(
            counts[&("Oil Price Outlook".to_string(), SentimentLabel::Negative, period)],
            2
        );
        assert_eq!(
            counts[&("Cost Inflation".to_string(), SentimentLabel::Negative, period)],
            1
        );
        // two records, three exploded rows
        assert_eq!(counts.values().sum::<usize>(), 3);
    }

    #[test]
    fn test_mean_sentiment_is_sorted_and_averaged() {
        let q1 = Period::new(2020, 1);
        let q2 = Period::new(2020, 2);
        let records = vec![
            labeled("a", q2, SentimentLabel::Positive, &["Uncategorized"]),
            labeled("b", q1, SentimentLabel::Negative, &["Uncategorized"]),
            labeled("c", q1, SentimentLabel::Neutral, &["Uncategorized"]),
        ];

        let means = mean_sentiment_by_period(&records);
        assert_eq!(means, vec![(q1, -0.5), (q2, 1.0)]);
    }

    #[test]
    fn test_align_keeps_all_sentiment_periods() {
        let q1 = Period::new(2020, 1);
        let q2 = Period::new(2020, 2);
        let sentiment = vec![(q1, -1.0), (q2, 1.0)];
        let prices = vec![(q1, 20.0)];

        let aligned = align_with_prices(&sentiment, &prices);
        assert_eq!(aligned.periods, vec![q1, q2]);
        assert_eq!(aligned.price, vec![Some(20.0), None]);
    }

    #[test]
    fn test_two_quarter_correlation_example() {
        let sentiment = vec![(Period::new(2020, 1), -1.0), (Period::new(2020, 2), 1.0)];
        let prices = vec![(Period::new(2020, 1), 20.0), (Period::new(2020, 2), 40.0)];

        let aligned = align_with_prices(&sentiment, &prices);
        let report = lagged_correlations(&aligned);
        assert_eq!(report.same_quarter.r, 1.0);
        assert_eq!(report.same_quarter.n, 2);
        assert_eq!(report.same_quarter.se, None);
    }

    #[test]
    fn test_lagged_correlations_use_shifted_series() {
        // price follows sentiment one quarter later
        let periods: Vec<Period> = (1..=4).map(|q| Period::new(2021, q)).collect();
        let sentiment: Vec<(Period, f64)> = periods
            .iter()
            .zip([-1.0, 0.0, 1.0, 0.0])
            .map(|(&p, s)| (p, s))
            .collect();
        let prices: Vec<(Period, f64)> = periods
            .iter()
            .zip([30.0, 20.0, 25.0, 30.0])
            .map(|(&p, v)| (p, v))
            .collect();

        let aligned = align_with_prices(&sentiment, &prices);
        let report = lagged_correlations(&aligned);

        // price(t+1) = [20, 25, 30, None] tracks sentiment = [-1, 0, 1, 0]
        assert_eq!(report.price_lead1.n, 3);
        assert!((report.price_lead1.r - 1.0).abs() < 1e-12);
        assert_eq!(report.price_lag1.n, 3);
    }
}
