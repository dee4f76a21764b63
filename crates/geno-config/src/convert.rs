//! Conversion defaults for the `convert` command.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default report file extension.
fn default_extension() -> String {
    "xml".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConvertConfig {
    /// Directory for bundle output. Unset writes each bundle next to its report.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Pretty-print bundle JSON.
    #[serde(default)]
    pub pretty: bool,

    /// Descend into subdirectories when a directory is given.
    #[serde(default)]
    pub recursive: bool,

    /// Extension (without the dot) a file needs to be picked up from a directory.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Stop at the first document that fails.
    #[serde(default)]
    pub fail_fast: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            pretty: false,
            recursive: false,
            extension: default_extension(),
            fail_fast: false,
        }
    }
}

impl ConvertConfig {
    /// Whether `path` carries the configured extension, compared case-insensitively.
    pub fn matches_extension(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(self.extension.trim_start_matches('.')))
    }
}
