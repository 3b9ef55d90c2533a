//! Configuration loading from benchplot.toml
//!
//! BenchPlot configuration can be specified in a `benchplot.toml` file.
//! The configuration is automatically discovered by walking up from the current directory.

use benchplot_stats::{CANONICAL_METHODS, DEFAULT_BASELINE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// BenchPlot configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlotConfig {
    /// Method labels and baseline
    #[serde(default)]
    pub methods: MethodsConfig,
    /// Chart dimensions
    #[serde(default)]
    pub chart: ChartConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Method configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodsConfig {
    /// Method that speedups are measured against
    #[serde(default = "default_baseline")]
    pub baseline: String,
    /// Display order for known methods; others follow in first-seen order
    #[serde(default = "default_order")]
    pub order: Vec<String>,
}

impl Default for MethodsConfig {
    fn default() -> Self {
        Self {
            baseline: default_baseline(),
            order: default_order(),
        }
    }
}

fn default_baseline() -> String {
    DEFAULT_BASELINE.to_string()
}
fn default_order() -> Vec<String> {
    CANONICAL_METHODS.iter().map(|m| m.to_string()).collect()
}

/// Chart configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Chart width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Chart height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> u32 {
    1200
}
fn default_height() -> u32 {
    600
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for chart images (default: next to the input CSV)
    #[serde(default)]
    pub directory: Option<String>,
    /// Summary format: "human", "json", "csv", "none"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl PlotConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("benchplot.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# BenchPlot Configuration

[methods]
# Method that speedups are computed against
baseline = "SerialCPU"
# Display order for known methods; unknown labels follow in first-seen order
order = ["SerialCPU", "ParallelCPU", "ParallelGPU"]

[chart]
# Image dimensions in pixels
width = 1200
height = 600

[output]
# Directory for chart images (defaults to the input file's directory)
# directory = "results"
# Summary format: human, json, csv, none
format = "human"
"#
        .to_string()
    }
}
