// 🚨 Error taxonomy for the daily aggregation run
//
// Every variant is fatal. Rows that fail to parse are not errors at all:
// they are dropped inside the aggregator and never reach this type.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AggregatorError>;

/// Fatal failures of a run, in pipeline order
#[derive(Error, Debug)]
pub enum AggregatorError {
    /// None of the candidate input files exist
    #[error("found neither {} in {}", .candidates.join(" nor "), .dir.display())]
    InputNotFound {
        dir: PathBuf,
        candidates: Vec<String>,
    },

    /// The CSV could not be opened or is structurally malformed
    #[error("failed to read CSV {}: {source}", .path.display())]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The CSV has broken quoting; checked before any row is read
    #[error("malformed CSV {}: {source}", .path.display())]
    MalformedCsv {
        path: PathBuf,
        #[source]
        source: QuoteError,
    },

    /// The CSV holds a header (or nothing) but no data rows
    #[error("no data rows in CSV {}", .path.display())]
    NoDataRows { path: PathBuf },

    /// The result could not be serialized or written
    #[error("failed to write output {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: OutputError,
    },
}

/// Quoting violation found in raw CSV bytes
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteError {
    #[error("bare \" in non-quoted field on line {line}")]
    Bare { line: u64 },

    #[error("extraneous \" after quoted field on line {line}")]
    Extraneous { line: u64 },

    #[error("quoted field opened on line {line} is never closed")]
    Unterminated { line: u64 },
}

/// Cause of an [`AggregatorError::OutputWrite`]
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON has no representation for NaN or infinity
    #[error("non-finite mean {mean} for {date}")]
    NonFinite { date: String, mean: f64 },
}

impl AggregatorError {
    pub fn csv_read(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        AggregatorError::CsvRead {
            path: path.into(),
            source,
        }
    }

    pub fn output_write(path: impl Into<PathBuf>, source: impl Into<OutputError>) -> Self {
        AggregatorError::OutputWrite {
            path: path.into(),
            source: source.into(),
        }
    }
}
