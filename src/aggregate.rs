// 🌡️ Daily Aggregation
// CSV rows → readings → per-day sum/count → sorted daily means
//
// Two phases:
// 1. accumulate every valid reading into its day's aggregate
// 2. finalize each aggregate into a mean, then sort by date

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDate};
use csv::{ByteRecord, ReaderBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AggregatorError, Result};
use crate::quoting::check_quotes;

/// Date key format, fixed width so string order equals date order
const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// CORE TYPES
// ============================================================================

/// Reading - One timestamp + temperature pair taken from a valid row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub timestamp: DateTime<FixedOffset>,
    pub temperature: f64,
}

impl Reading {
    /// Parse a CSV record: column 0 = RFC3339 timestamp, column 1 = temperature
    ///
    /// Returns `None` for rows with fewer than two fields or either field
    /// unparseable (invalid UTF-8 included). Extra columns are ignored and
    /// never decoded. Non-finite temperatures (`NaN`, `inf`, overflow such
    /// as `1e400`) count as unparseable.
    pub fn from_record(record: &ByteRecord) -> Option<Self> {
        if record.len() < 2 {
            return None;
        }

        let timestamp = parse_timestamp(std::str::from_utf8(record.get(0)?).ok()?)?;
        let temperature = std::str::from_utf8(record.get(1)?)
            .ok()?
            .parse::<f64>()
            .ok()
            .filter(|t| t.is_finite())?;

        Some(Reading {
            timestamp,
            temperature,
        })
    }

    /// Calendar date in the timestamp's own offset (no conversion)
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn date_key(&self) -> String {
        self.date().format(DATE_FORMAT).to_string()
    }
}

/// Strict RFC3339: `T` between date and time, offset `Z` or `±HH:MM`
///
/// chrono alone also takes `t` or a space as separator and a lowercase `z`.
fn parse_timestamp(field: &str) -> Option<DateTime<FixedOffset>> {
    if field.as_bytes().get(10) != Some(&b'T') || field.ends_with('z') {
        return None;
    }
    DateTime::parse_from_rfc3339(field).ok()
}

/// DayAggregate - Running sum and count for one calendar date
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayAggregate {
    pub sum: f64,
    pub count: usize,
}

impl DayAggregate {
    pub fn add(&mut self, temperature: f64) {
        self.sum += temperature;
        self.count += 1;
    }

    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// DayAverage - Finalized mean temperature for one date
///
/// Serialized as `{"dato": "YYYY-MM-DD", "gjennomsnitt": <float>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAverage {
    #[serde(rename = "dato")]
    pub date: String,
    #[serde(rename = "gjennomsnitt")]
    pub mean: f64,
}

/// Result of aggregating one CSV source
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateReport {
    /// Raw data rows in the source, header excluded, valid or not
    pub rows_read: usize,
    /// One entry per date, ascending
    pub days: Vec<DayAverage>,
}

// ============================================================================
// AGGREGATOR
// ============================================================================

/// DailyAggregator - Accumulates readings keyed by calendar date
#[derive(Debug, Default)]
pub struct DailyAggregator {
    per_day: HashMap<String, DayAggregate>,
}

impl DailyAggregator {
    pub fn new() -> Self {
        DailyAggregator::default()
    }

    pub fn add(&mut self, reading: &Reading) {
        self.per_day
            .entry(reading.date_key())
            .or_default()
            .add(reading.temperature);
    }

    /// Feed one CSV record; rows that don't parse are dropped silently
    pub fn add_record(&mut self, record: &ByteRecord) {
        if let Some(reading) = Reading::from_record(record) {
            self.add(&reading);
        }
    }

    /// Number of distinct dates seen so far
    pub fn day_count(&self) -> usize {
        self.per_day.len()
    }

    /// Finalize every aggregate into a mean, sorted by date string
    pub fn finish(self) -> Vec<DayAverage> {
        let mut days: Vec<DayAverage> = self
            .per_day
            .into_iter()
            .map(|(date, agg)| DayAverage {
                date,
                mean: agg.mean(),
            })
            .collect();

        days.sort_by(|a, b| a.date.cmp(&b.date));
        days
    }
}

// ============================================================================
// CSV ENTRY POINTS
// ============================================================================

/// Aggregate a CSV file into daily means
///
/// # Arguments
/// * `path` - CSV file with a header row, then `timestamp,temperature` rows
///
/// # Returns
/// * `Ok(AggregateReport)` - Daily means sorted by date (possibly empty)
/// * `Err(CsvRead)` - File can't be opened or read
/// * `Err(MalformedCsv)` - Broken quoting anywhere in the file
/// * `Err(NoDataRows)` - Nothing after the header
pub fn aggregate_file(path: &Path) -> Result<AggregateReport> {
    let file = File::open(path).map_err(|e| AggregatorError::csv_read(path, e.into()))?;
    aggregate_reader(file, path)
}

/// Aggregate CSV from any reader; `source` is only used in error messages
pub fn aggregate_reader<R: Read>(mut reader: R, source: &Path) -> Result<AggregateReport> {
    // Whole file in memory before any row is looked at, so a malformed
    // line anywhere fails the run without partial results.
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .map_err(|e| AggregatorError::csv_read(source, e.into()))?;

    check_quotes(&raw).map_err(|e| AggregatorError::MalformedCsv {
        path: source.to_path_buf(),
        source: e,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(raw.as_slice());

    // Byte records: undecodable fields fail per row, not per file
    let records = reader
        .byte_records()
        .collect::<std::result::Result<Vec<ByteRecord>, csv::Error>>()
        .map_err(|e| AggregatorError::csv_read(source, e))?;

    // Counts raw rows: a file of nothing but garbage rows still succeeds.
    if records.is_empty() {
        return Err(AggregatorError::NoDataRows {
            path: source.to_path_buf(),
        });
    }

    let mut aggregator = DailyAggregator::new();
    for record in &records {
        aggregator.add_record(record);
    }

    debug!(
        rows = records.len(),
        days = aggregator.day_count(),
        "aggregated CSV rows"
    );

    Ok(AggregateReport {
        rows_read: records.len(),
        days: aggregator.finish(),
    })
}
