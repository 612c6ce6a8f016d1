// 📂 Input resolution
// First existing candidate wins; nothing is opened here

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::AggregatorConfig;
use crate::error::{AggregatorError, Result};

/// Return the first candidate path that exists on disk
///
/// # Arguments
/// * `config` - Supplies the data directory and the ordered candidate names
///
/// # Returns
/// * `Ok(PathBuf)` - The first existing candidate
/// * `Err(AggregatorError::InputNotFound)` - If none of them exist
pub fn resolve_input(config: &AggregatorConfig) -> Result<PathBuf> {
    for candidate in config.input_candidates() {
        if candidate.exists() {
            info!(path = %candidate.display(), "using input file");
            return Ok(candidate);
        }
        debug!(path = %candidate.display(), "input candidate absent");
    }

    Err(AggregatorError::InputNotFound {
        dir: config.data_dir().to_path_buf(),
        candidates: config.input_files.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_primary_preferred_when_both_exist() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("data.csv"), "tid,temperatur\n").unwrap();
        fs::write(dir.path().join("dummy.csv"), "tid,temperatur\n").unwrap();

        let config = AggregatorConfig::new(dir.path());
        assert_eq!(resolve_input(&config).unwrap(), dir.path().join("data.csv"));
    }

    #[test]
    fn test_falls_back_to_dummy() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("dummy.csv"), "tid,temperatur\n").unwrap();

        let config = AggregatorConfig::new(dir.path());
        assert_eq!(resolve_input(&config).unwrap(), dir.path().join("dummy.csv"));
    }

    #[test]
    fn test_input_not_found() {
        let dir = TempDir::new().unwrap();
        let config = AggregatorConfig::new(dir.path());

        match resolve_input(&config) {
            Err(AggregatorError::InputNotFound { candidates, .. }) => {
                assert_eq!(candidates, vec!["data.csv", "dummy.csv"]);
            }
            other => panic!("expected InputNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_candidate_list() {
        let dir = TempDir::new().unwrap();
        let config = AggregatorConfig::new(dir.path()).with_input_files(Vec::<String>::new());
        assert!(matches!(
            resolve_input(&config),
            Err(AggregatorError::InputNotFound { .. })
        ));
    }
}
