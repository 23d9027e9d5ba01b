//! JSON runtime configuration for the demo binary.

use crate::cost::CostParams;
use crate::error::{AnalysisError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Where to write the report as pretty JSON.
    pub json_out: Option<PathBuf>,
    /// Directory for the rendered raster and histogram PNGs.
    pub debug_dir: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub cost: CostParams,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

fn default_verbose() -> bool {
    true
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AnalysisError::configuration(format!("failed to read config {}: {e}", path.display()))
    })?;
    let config: RuntimeConfig = serde_json::from_str(&contents).map_err(|e| {
        AnalysisError::configuration(format!("failed to parse config {}: {e}", path.display()))
    })?;
    Ok(config)
}
