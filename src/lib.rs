// Daily Temperature Aggregator - Core Library
// Exposes the pipeline for the CLI binary and for tests

pub mod config;
pub mod error;
pub mod input;
pub mod quoting;
pub mod aggregate;
pub mod output;
pub mod pipeline;

// Re-export commonly used types
pub use config::AggregatorConfig;
pub use error::{AggregatorError, OutputError, QuoteError};
pub use input::resolve_input;
pub use quoting::check_quotes;
pub use aggregate::{
    Reading, DayAggregate, DayAverage, DailyAggregator, AggregateReport,
    aggregate_file, aggregate_reader,
};
pub use output::{to_json, write_json};
pub use pipeline::{run, RunSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
