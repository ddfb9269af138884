//! # Labeled Table Persistence
//!
//! CSV save/load for the labeled comment table. Column names match the
//! published table layout; `Theme(s)` is a comma-joined string rebuilt into
//! a theme list on load.

use crate::data::records::{LabeledRecord, Period, SourceKind};
use crate::sentiment::model::SentimentLabel;
use crate::sentiment::themes::Segment;
use anyhow::{Context, Result};
use csv::{Reader, Writer};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// One row of the persisted table.
#[derive(Debug, Serialize, Deserialize)]
struct LabeledRow {
    #[serde(rename = "Comment")]
    comment: String,
    #[serde(rename = "Source")]
    source: SourceKind,
    #[serde(rename = "Time")]
    time: Period,
    #[serde(rename = "Sentiment")]
    sentiment: SentimentLabel,
    #[serde(rename = "Theme(s)")]
    themes: String,
    #[serde(rename = "Segment")]
    segment: Segment,
    #[serde(rename = "Polarity")]
    polarity: f64,
    #[serde(rename = "Subjectivity")]
    subjectivity: f64,
}

impl From<&LabeledRecord> for LabeledRow {
    fn from(record: &LabeledRecord) -> Self {
        Self {
            comment: record.text.clone(),
            source: record.source,
            time: record.period,
            sentiment: record.sentiment,
            themes: record.themes_joined(),
            segment: record.segment,
            polarity: record.polarity,
            subjectivity: record.subjectivity,
        }
    }
}

impl From<LabeledRow> for LabeledRecord {
    fn from(row: LabeledRow) -> Self {
        Self {
            text: row.comment,
            source: row.source,
            period: row.time,
            sentiment: row.sentiment,
            polarity: row.polarity,
            subjectivity: row.subjectivity,
            themes: LabeledRecord::split_themes(&row.themes),
            segment: row.segment,
        }
    }
}

/// Save/load for the labeled comment table.
pub struct RecordStore;

impl RecordStore {
    /// Write the labeled table to a CSV file.
    pub fn save<P: AsRef<Path>>(records: &[LabeledRecord], path: P) -> Result<()> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create file: {:?}", path.as_ref()))?;

        let mut writer = Writer::from_writer(file);
        for record in records {
            writer.serialize(LabeledRow::from(record))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Load a labeled table previously written by [`RecordStore::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledRecord>> {
        let file = File::open(&path)
            .with_context(|| format!("Failed to open file: {:?}", path.as_ref()))?;

        let mut reader = Reader::from_reader(file);
        let mut records = Vec::new();
        for result in reader.deserialize() {
            let row: LabeledRow = result.context("Failed to parse labeled row")?;
            records.push(LabeledRecord::from(row));
        }
        Ok(records)
    }
}
