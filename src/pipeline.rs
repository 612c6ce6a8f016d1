// 🔁 Pipeline: resolve input → aggregate → write JSON
//
// The output file is only touched after aggregation succeeded, so any
// failure leaves whatever was there before.

use std::path::PathBuf;

use tracing::info;

use crate::aggregate::{aggregate_file, DayAverage};
use crate::config::AggregatorConfig;
use crate::error::Result;
use crate::input::resolve_input;
use crate::output::write_json;

/// What a successful run did
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub rows_read: usize,
    pub days: Vec<DayAverage>,
}

impl RunSummary {
    pub fn days_written(&self) -> usize {
        self.days.len()
    }
}

/// Run one aggregation over the locations in `config`
pub fn run(config: &AggregatorConfig) -> Result<RunSummary> {
    let input_path = resolve_input(config)?;
    let report = aggregate_file(&input_path)?;

    let output_path = config.output_path();
    write_json(&output_path, &report.days)?;

    info!(
        input = %input_path.display(),
        rows = report.rows_read,
        days = report.days.len(),
        "daily aggregation complete"
    );

    Ok(RunSummary {
        input_path,
        output_path,
        rows_read: report.rows_read,
        days: report.days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AggregatorError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_writes_output_next_to_input() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("data.csv"),
            "tid,temperatur\n2025-06-01T08:00:00+02:00,10.0\n2025-06-01T20:00:00+02:00,14.0\n",
        )
        .unwrap();

        let summary = run(&AggregatorConfig::new(dir.path())).unwrap();

        assert_eq!(summary.input_path, dir.path().join("data.csv"));
        assert_eq!(summary.output_path, dir.path().join("data.json"));
        assert_eq!(summary.rows_read, 2);
        assert_eq!(summary.days_written(), 1);
        assert!(summary.output_path.exists());
    }

    #[test]
    fn test_no_data_rows_leaves_existing_output_alone() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("data.csv"), "tid,temperatur\n").unwrap();
        fs::write(dir.path().join("data.json"), "previous").unwrap();

        let err = run(&AggregatorConfig::new(dir.path())).unwrap_err();

        assert!(matches!(err, AggregatorError::NoDataRows { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join("data.json")).unwrap(),
            "previous"
        );
    }

    #[test]
    fn test_broken_quoting_leaves_existing_output_alone() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("data.csv"),
            "tid,temperatur\n2025-06-01T08:00:00Z,10.0\n\"2025-06-01T09:00:00Z,12.0\n",
        )
        .unwrap();
        fs::write(dir.path().join("data.json"), "previous").unwrap();

        let err = run(&AggregatorConfig::new(dir.path())).unwrap_err();

        assert!(matches!(err, AggregatorError::MalformedCsv { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join("data.json")).unwrap(),
            "previous"
        );
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();

        let err = run(&AggregatorConfig::new(dir.path())).unwrap_err();

        assert!(matches!(err, AggregatorError::InputNotFound { .. }));
        assert!(!dir.path().join("data.json").exists());
    }
}
