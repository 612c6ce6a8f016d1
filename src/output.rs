// 💾 JSON Output
// Pretty-printed array of daily means, written in one go

use std::fs;
use std::path::Path;

use tracing::info;

use crate::aggregate::DayAverage;
use crate::error::{AggregatorError, OutputError};

/// Render daily means as a two-space indented JSON array, order preserved
///
/// Fails on a NaN or infinite mean instead of letting it become `null`.
pub fn to_json(days: &[DayAverage]) -> Result<String, OutputError> {
    if let Some(day) = days.iter().find(|d| !d.mean.is_finite()) {
        return Err(OutputError::NonFinite {
            date: day.date.clone(),
            mean: day.mean,
        });
    }
    Ok(serde_json::to_string_pretty(days)?)
}

/// Serialize and write to `path`, replacing any existing file
///
/// The parent directory must already exist.
pub fn write_json(path: &Path, days: &[DayAverage]) -> crate::error::Result<()> {
    let json = to_json(days).map_err(|e| AggregatorError::output_write(path, e))?;
    fs::write(path, json).map_err(|e| AggregatorError::output_write(path, e))?;

    info!(path = %path.display(), days = days.len(), "wrote daily averages");
    Ok(())
}
