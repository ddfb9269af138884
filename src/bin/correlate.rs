//! Correlate quarterly survey sentiment with WTI oil prices: report the
//! correlation estimates at several lags and render the PNG charts. All
//! parameters are constants; run with no arguments after `collect`.

use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;
use survey_sentiment::analysis::{
    align_with_prices, first_difference, lagged_correlations, mean_sentiment_by_period, shift,
    CorrelationEstimate,
};
use survey_sentiment::data::{load_daily_prices, quarterly_mean_price, RecordStore};
use survey_sentiment::report::{dual_axis_lines, scatter_plot};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Labeled table written by `collect`.
const LABELED_PATH: &str = "survey_sentiment.csv";

/// Daily WTI spot price series.
const PRICE_PATH: &str = "DCOILWTICO.csv";

/// Price observations before this date are ignored.
const PRICE_WINDOW_START: (i32, u32, u32) = (2017, 1, 1);

const DELTA_SCATTER_PATH: &str = "scatter_delta_sentiment_vs_next_wti.png";
const LEVEL_SCATTER_PATH: &str = "scatter_sentiment_vs_wti.png";
const LINES_PATH: &str = "sentiment_vs_wti.png";

fn log_estimate(name: &str, estimate: &CorrelationEstimate) {
    match estimate.se {
        Some(se) => info!("{}: {:.3} ± {:.3} (n={})", name, estimate.r, se, estimate.n),
        None => info!(
            "{}: {:.3} (standard error undefined, n={})",
            name, estimate.r, estimate.n
        ),
    }
}

/// Pair up two optional series, keeping complete pairs only.
fn complete_pairs(x: &[Option<f64>], y: &[Option<f64>]) -> Vec<(f64, f64)> {
    x.iter()
        .zip(y.iter())
        .filter_map(|(&a, &b)| match (a, b) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        })
        .collect()
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let labeled = RecordStore::load(LABELED_PATH)?;
    info!("loaded {} labeled rows from {}", labeled.len(), LABELED_PATH);
    let sentiment = mean_sentiment_by_period(&labeled);

    let observations = load_daily_prices(PRICE_PATH)?;
    let (year, month, day) = PRICE_WINDOW_START;
    let window_start = NaiveDate::from_ymd_opt(year, month, day).expect("valid window start");
    let prices = quarterly_mean_price(&observations, window_start);
    info!(
        "resampled {} daily observations to {} quarters",
        observations.len(),
        prices.len()
    );

    let aligned = align_with_prices(&sentiment, &prices);
    let report = lagged_correlations(&aligned);
    log_estimate("Correlation (t)", &report.same_quarter);
    log_estimate(
        "Correlation (SentimentScore_t vs WTI_t-1)",
        &report.price_lag1,
    );
    log_estimate(
        "Correlation (SentimentScore_t vs WTI_t+1)",
        &report.price_lead1,
    );
    log_estimate(
        "Correlation between ΔSentiment(t) and ΔWTI(t+1)",
        &report.delta_vs_next_delta,
    );

    let delta_sentiment = first_difference(&aligned.sentiment);
    let delta_price_next = shift(&first_difference(&aligned.price), -1);
    scatter_plot(
        Path::new(DELTA_SCATTER_PATH),
        &complete_pairs(&delta_sentiment, &delta_price_next),
        "ΔWTI (t+1) vs. ΔSentiment (t)",
        "ΔSentiment (this quarter)",
        "ΔWTI (next quarter)",
    )?;
    info!("wrote {}", DELTA_SCATTER_PATH);

    scatter_plot(
        Path::new(LEVEL_SCATTER_PATH),
        &complete_pairs(&aligned.sentiment, &aligned.price),
        "WTI Oil Price vs. Sentiment Score",
        "Sentiment Score (-1 to +1)",
        "WTI Oil Price ($/bbl)",
    )?;
    info!("wrote {}", LEVEL_SCATTER_PATH);

    dual_axis_lines(
        Path::new(LINES_PATH),
        &aligned.periods,
        &aligned.sentiment,
        &aligned.price,
    )?;
    info!("wrote {}", LINES_PATH);

    Ok(())
}
