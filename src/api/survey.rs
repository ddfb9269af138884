//! # Survey Site Client
//!
//! Client for fetching quarterly survey result pages and extracting the
//! comment and special-question lists. Pages are addressed by a
//! deterministic (year, quarter) path; fetching is sequential with a
//! bounded timeout, and any single period's failure is logged and skipped
//! so a partial run still yields data.

use crate::data::records::{CommentRecord, Period, SourceKind};
use reqwest::{Client, StatusCode};
use scraper::{Html, Selector};
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

/// Survey results base URL.
const SURVEY_BASE_URL: &str = "https://www.dallasfed.org/research/surveys/des";

/// Per-request timeout (seconds).
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// First survey year fetched.
pub const FIRST_SURVEY_YEAR: i32 = 2017;

/// Last survey year fetched.
pub const LAST_SURVEY_YEAR: i32 = 2025;

/// Container id of the comments section.
const COMMENTS_SECTION_ID: &str = "tab-comments";

/// Container id of the special-questions section.
const QUESTIONS_SECTION_ID: &str = "tab-questions";

/// Errors that can occur when fetching a survey page.
#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("unexpected status {status} for {url}")]
    BadStatus { status: StatusCode, url: String },

    #[error("invalid selector {0:?}")]
    InvalidSelector(String),
}

/// Survey site client.
pub struct SurveyClient {
    client: Client,
    base_url: String,
}

impl Default for SurveyClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveyClient {
    /// Create a client with the production base URL.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: SURVEY_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (used by tests against a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Deterministic report URL for a period: `{base}/{year}/{yy}{qq}`.
    pub fn report_url(&self, period: Period) -> String {
        format!(
            "{}/{}/{:02}{:02}",
            self.base_url,
            period.year(),
            period.year() % 100,
            period.quarter()
        )
    }

    /// Fetch one period's page and extract its comment and question items.
    pub async fn fetch_period(&self, period: Period) -> Result<Vec<CommentRecord>, SurveyError> {
        let url = self.report_url(period);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SurveyError::BadStatus { status, url });
        }
        let html = response.text().await?;

        let mut records = Vec::new();
        for (section_id, source) in [
            (COMMENTS_SECTION_ID, SourceKind::Comment),
            (QUESTIONS_SECTION_ID, SourceKind::Question),
        ] {
            for text in extract_section_items(&html, section_id)? {
                records.push(CommentRecord::new(text, source, period));
            }
        }
        Ok(records)
    }

    /// Walk the full (year, quarter) grid sequentially, skipping periods
    /// that fail.
    ///
    /// A non-success status is logged at WARN (quarters before the survey
    /// existed simply 404); transport and parse errors are logged at ERROR.
    /// Neither aborts the run.
    pub async fn collect_all(&self) -> Vec<CommentRecord> {
        let mut records = Vec::new();
        for year in FIRST_SURVEY_YEAR..=LAST_SURVEY_YEAR {
            for quarter in 1..=4 {
                let period = Period::new(year, quarter);
                match self.fetch_period(period).await {
                    Ok(items) => {
                        info!("collected {} items from {}", items.len(), period);
                        records.extend(items);
                    }
                    Err(err @ SurveyError::BadStatus { .. }) => {
                        warn!("skipped {}: {}", period, err);
                    }
                    Err(err) => {
                        error!("error fetching {}: {}", period, err);
                    }
                }
            }
        }
        records
    }
}

/// Extract the visible text of every list item inside the given container.
///
/// A page without the container yields an empty list, matching a survey
/// quarter that published no such section. Item text is whitespace-collapsed
/// and empty items are dropped.
fn extract_section_items(html: &str, section_id: &str) -> Result<Vec<String>, SurveyError> {
    let document = Html::parse_document(html);
    let selector_str = format!("div#{section_id} li");
    let selector = Selector::parse(&selector_str)
        .map_err(|_| SurveyError::InvalidSelector(selector_str.clone()))?;

    let mut items = Vec::new();
    for element in document.select(&selector) {
        let raw = element.text().collect::<String>();
        let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if !text.is_empty() {
            items.push(text);
        }
    }
    Ok(items)
}
