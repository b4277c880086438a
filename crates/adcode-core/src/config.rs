//! Conversion paths.

use std::path::PathBuf;

use crate::convert::{ConvertReport, convert};
use crate::error::Result;

/// Legacy location of the raw code table, relative to the working directory.
pub const DEFAULT_INPUT: &str = "../administrative_division_code.txt";

/// Legacy location of the generated JSON table.
pub const DEFAULT_OUTPUT: &str = "../region.json";

/// Input and output paths for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ConvertConfig {
    #[must_use]
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn run(&self) -> Result<ConvertReport> {
        convert(&self.input, &self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_legacy_paths() {
        let config = ConvertConfig::default();
        assert_eq!(config.input, PathBuf::from("../administrative_division_code.txt"));
        assert_eq!(config.output, PathBuf::from("../region.json"));
    }

    #[test]
    fn builders_override_one_path() {
        let config = ConvertConfig::default().with_output("out.json");
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.output, PathBuf::from("out.json"));
    }
}
