// ⚙️ Aggregator Configuration
// Where the pipeline looks for input and where it writes its output

use std::path::{Path, PathBuf};

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "../data";

/// Primary input file name
pub const PRIMARY_INPUT: &str = "data.csv";

/// Fallback input file name, used when the primary is absent
pub const FALLBACK_INPUT: &str = "dummy.csv";

/// Output file name
pub const DEFAULT_OUTPUT: &str = "data.json";

/// AggregatorConfig - Locations the daily aggregation run works with
///
/// Input candidates are tried in order; the first one that exists wins.
/// Every name is resolved relative to `data_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorConfig {
    pub data_dir: PathBuf,
    pub input_files: Vec<String>,
    pub output_file: String,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        AggregatorConfig {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            input_files: vec![PRIMARY_INPUT.to_string(), FALLBACK_INPUT.to_string()],
            output_file: DEFAULT_OUTPUT.to_string(),
        }
    }
}

impl AggregatorConfig {
    /// Default file names inside a custom data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        AggregatorConfig {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    /// Builder pattern: replace the ordered input candidates
    pub fn with_input_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Builder pattern: replace the output file name
    pub fn with_output_file(mut self, file: impl Into<String>) -> Self {
        self.output_file = file.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Input candidates joined onto the data directory, in lookup order
    pub fn input_candidates(&self) -> Vec<PathBuf> {
        self.input_files
            .iter()
            .map(|name| self.data_dir.join(name))
            .collect()
    }

    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.output_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locations() {
        let config = AggregatorConfig::default();
        assert_eq!(config.data_dir(), Path::new("../data"));
        assert_eq!(
            config.input_candidates(),
            vec![
                PathBuf::from("../data/data.csv"),
                PathBuf::from("../data/dummy.csv"),
            ]
        );
        assert_eq!(config.output_path(), PathBuf::from("../data/data.json"));
    }

    #[test]
    fn test_custom_data_dir_keeps_default_names() {
        let config = AggregatorConfig::new("/tmp/weather");
        assert_eq!(config.input_files, vec!["data.csv", "dummy.csv"]);
        assert_eq!(config.output_path(), PathBuf::from("/tmp/weather/data.json"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = AggregatorConfig::new("in")
            .with_input_files(["a.csv"])
            .with_output_file("out.json");

        assert_eq!(config.input_candidates(), vec![PathBuf::from("in/a.csv")]);
        assert_eq!(config.output_path(), PathBuf::from("in/out.json"));
    }
}
