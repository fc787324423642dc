use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "kmp_times.json";

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Where to look for logs and where to write the workbook.
///
/// Every field falls back to its default when absent from the JSON file:
///
/// ```json
/// { "input_dir": "exp", "output_file": "algorithm_times.xlsx" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory scanned for candidate logs.
    pub input_dir: PathBuf,
    /// Workbook path; overwritten on every run.
    pub output_file: PathBuf,
    pub file_prefix: String,
    pub file_suffix: String,
    pub sheet_name: String,
    /// Chart window size in logical pixels.
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_file: PathBuf::from("algorithm_times.xlsx"),
            file_prefix: "experiment_".to_string(),
            file_suffix: ".txt".to_string(),
            sheet_name: "Algorithm Times".to_string(),
            window_width: 1000.0,
            window_height: 600.0,
        }
    }
}

impl Config {
    /// Load from `path`, or use defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No {} found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };

        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
