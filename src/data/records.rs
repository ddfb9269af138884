//! # Survey Records
//!
//! Record types for collected survey comments and the labels derived from
//! them. A [`CommentRecord`] is the unit fact produced by the collector; a
//! [`LabeledRecord`] is the same fact extended with classifier output and is
//! never mutated after derivation.

use crate::sentiment::model::SentimentLabel;
use crate::sentiment::themes::Segment;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single calendar quarter, displayed and parsed as `YYYYQn` (e.g. `2020Q1`).
///
/// Ordering is chronological, so periods sort correctly as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    quarter: u8,
}

/// Error returned when a period string does not match `YYYYQn`.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid period {0:?}, expected YYYYQn")]
pub struct ParsePeriodError(String);

impl Period {
    /// Create a period for the given year and quarter.
    ///
    /// # Panics
    /// Panics if `quarter` is not in `1..=4`.
    pub fn new(year: i32, quarter: u8) -> Self {
        assert!((1..=4).contains(&quarter), "quarter must be in 1..=4");
        Self { year, quarter }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The quarter within the year, in `1..=4`.
    pub fn quarter(&self) -> u8 {
        self.quarter
    }

    /// The quarter containing a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            quarter: (date.month0() / 3) as u8 + 1,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Q{}", self.year, self.quarter)
    }
}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, quarter) = s
            .split_once('Q')
            .ok_or_else(|| ParsePeriodError(s.to_string()))?;
        let year: i32 = year.parse().map_err(|_| ParsePeriodError(s.to_string()))?;
        let quarter: u8 = quarter
            .parse()
            .map_err(|_| ParsePeriodError(s.to_string()))?;
        if !(1..=4).contains(&quarter) {
            return Err(ParsePeriodError(s.to_string()));
        }
        Ok(Self { year, quarter })
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Which survey section a comment was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    /// The free-form comments section.
    Comment,
    /// The special-questions section.
    Question,
}

impl SourceKind {
    /// String form used in the persisted table.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Comment => "Comment",
            SourceKind::Question => "Question",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single collected survey comment, tagged with its origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Visible text of the list item.
    pub text: String,
    /// Section the item was extracted from.
    pub source: SourceKind,
    /// Survey quarter the item belongs to.
    pub period: Period,
}

impl CommentRecord {
    /// Create a record for a collected item.
    pub fn new(text: impl Into<String>, source: SourceKind, period: Period) -> Self {
        Self {
            text: text.into(),
            source,
            period,
        }
    }
}

/// A comment record extended with classifier output.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledRecord {
    /// Original comment text.
    pub text: String,
    /// Section the comment came from.
    pub source: SourceKind,
    /// Survey quarter.
    pub period: Period,
    /// Discrete sentiment label from the pretrained classifier.
    pub sentiment: SentimentLabel,
    /// Lexicon polarity in `[-1, 1]`.
    pub polarity: f64,
    /// Lexicon subjectivity in `[0, 1]`.
    pub subjectivity: f64,
    /// Matched themes; never empty (`Uncategorized` when nothing matches).
    pub themes: Vec<String>,
    /// Business-sector classification.
    pub segment: Segment,
}

impl LabeledRecord {
    /// Themes as the comma-joined string used in the persisted table.
    pub fn themes_joined(&self) -> String {
        self.themes.join(", ")
    }

    /// Split a comma-joined theme string back into individual themes.
    pub fn split_themes(joined: &str) -> Vec<String> {
        joined
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_display() {
        assert_eq!(Period::new(2020, 1).to_string(), "2020Q1");
        assert_eq!(Period::new(2017, 4).to_string(), "2017Q4");
    }

    #[test]
    fn test_period_parse_round_trip() {
        let period: Period = "2023Q3".parse().unwrap();
        assert_eq!(period, Period::new(2023, 3));
        assert_eq!(period.to_string(), "2023Q3");
    }

    #[test]
    fn test_period_parse_rejects_garbage() {
        assert!("2023".parse::<Period>().is_err());
        assert!("2023Q5".parse::<Period>().is_err());
        assert!("Q1".parse::<Period>().is_err());
        assert!("20x3Q1".parse::<Period>().is_err());
    }

    #[test]
    fn test_period_ordering_is_chronological() {
        let mut periods = vec![
            Period::new(2020, 3),
            Period::new(2017, 4),
            Period::new(2020, 1),
            Period::new(2019, 2),
        ];
        periods.sort();
        assert_eq!(
            periods,
            vec![
                Period::new(2017, 4),
                Period::new(2019, 2),
                Period::new(2020, 1),
                Period::new(2020, 3),
            ]
        );
    }

    #[test]
    fn test_period_from_date() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 31).unwrap();
        assert_eq!(Period::from_date(date), Period::new(2021, 1));
        let date = NaiveDate::from_ymd_opt(2021, 10, 1).unwrap();
        assert_eq!(Period::from_date(date), Period::new(2021, 4));
    }

    #[test]
    fn test_split_themes_round_trip() {
        let themes = vec!["Oil Price Outlook".to_string(), "Tariffs & Trade".to_string()];
        let joined = themes.join(", ");
        assert_eq!(LabeledRecord::split_themes(&joined), themes);
    }
}
