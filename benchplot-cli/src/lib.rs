#![warn(missing_docs)]
//! BenchPlot CLI Library
//!
//! Command line front-end: argument parsing, `benchplot.toml` discovery,
//! logging setup and the load → aggregate → render pipeline.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     benchplot_cli::run()
//! }
//! ```

mod config;
mod pipeline;

pub use config::*;
pub use pipeline::{
    NO_METHODS_MESSAGE, PipelineConfig, PipelineOutcome, build_report, format_human_output,
    generate_charts, write_chart_pair,
};

use anyhow::Context;
use benchplot_report::{ChartStyle, OutputFormat, generate_csv_report, generate_json_report};
use clap::{CommandFactory, Parser};
use std::io::Write;
use std::path::PathBuf;

/// BenchPlot CLI arguments
#[derive(Parser, Debug)]
#[command(name = "benchplot")]
#[command(
    author,
    version,
    about = "BenchPlot - time, speedup and count charts from benchmark result CSVs"
)]
pub struct Cli {
    /// Results CSV with columns file, method, millis, count
    pub input: Option<PathBuf>,

    /// Method that speedups are computed against
    #[arg(long)]
    pub baseline: Option<String>,

    /// Directory for chart images (default: next to the input file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Summary format: human, json, csv, none
    #[arg(long)]
    pub format: Option<String>,

    /// Write the summary to a file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Chart width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Chart height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Configuration file (default: discover benchplot.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the BenchPlot CLI with process arguments.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the BenchPlot CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let Some(input) = cli.input.clone() else {
        println!("{}", Cli::command().render_usage());
        return Ok(());
    };

    // Initialize logging
    let filter = if cli.verbose {
        "benchplot=debug"
    } else {
        "benchplot=info"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = match &cli.config {
        Some(path) => PlotConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PlotConfig::discover().unwrap_or_default(),
    };

    let format_name = cli.format.as_deref().unwrap_or(&config.output.format);
    let format: OutputFormat = format_name.parse().unwrap_or_else(|e| {
        eprintln!("Warning: {}; using human output", e);
        OutputFormat::Human
    });

    let pipeline_config = build_pipeline_config(&cli, &config);
    let outcome = generate_charts(&input, &pipeline_config)?;

    let report = build_report(&outcome, &pipeline_config);
    let output = match format {
        OutputFormat::Human => format_human_output(&report),
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Csv => generate_csv_report(&report)?,
        OutputFormat::None => return Ok(()),
    };

    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        file.write_all(output.as_bytes())?;
        println!("Summary written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    Ok(())
}

/// Build a PipelineConfig by layering: benchplot.toml defaults → CLI overrides.
fn build_pipeline_config(cli: &Cli, config: &PlotConfig) -> PipelineConfig {
    PipelineConfig {
        baseline: cli
            .baseline
            .clone()
            .unwrap_or_else(|| config.methods.baseline.clone()),
        method_order: config.methods.order.clone(),
        style: ChartStyle {
            width: cli.width.unwrap_or(config.chart.width),
            height: cli.height.unwrap_or(config.chart.height),
        },
        output_dir: cli
            .output_dir
            .clone()
            .or_else(|| config.output.directory.as_ref().map(PathBuf::from)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_positional_input() {
        let cli = Cli::parse_from(["benchplot", "results/results.csv"]);
        assert_eq!(cli.input, Some(PathBuf::from("results/results.csv")));
        assert!(!cli.verbose);
    }

    #[test]
    fn missing_input_prints_usage_and_succeeds() {
        let cli = Cli::parse_from(["benchplot"]);
        assert!(cli.input.is_none());
        assert!(run_with_cli(cli).is_ok());
    }

    #[test]
    fn cli_flags_override_config() {
        let cli = Cli::parse_from([
            "benchplot",
            "r.csv",
            "--baseline",
            "ParallelCPU",
            "--width",
            "640",
            "--output-dir",
            "charts",
        ]);
        let config = PlotConfig::default();
        let pipeline = build_pipeline_config(&cli, &config);

        assert_eq!(pipeline.baseline, "ParallelCPU");
        assert_eq!(pipeline.style.width, 640);
        assert_eq!(pipeline.style.height, 600);
        assert_eq!(pipeline.output_dir, Some(PathBuf::from("charts")));
    }

    #[test]
    fn config_values_apply_without_flags() {
        let cli = Cli::parse_from(["benchplot", "r.csv"]);
        let mut config = PlotConfig::default();
        config.methods.baseline = "ParallelGPU".to_string();
        config.chart.height = 480;
        config.output.directory = Some("out".to_string());

        let pipeline = build_pipeline_config(&cli, &config);
        assert_eq!(pipeline.baseline, "ParallelGPU");
        assert_eq!(pipeline.style.height, 480);
        assert_eq!(pipeline.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn run_writes_json_summary() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("results.csv");
        std::fs::write(
            &input,
            "file,method,millis,count\na.txt,SerialCPU,10,2\na.txt,ParallelGPU,2,2\n",
        )
        .unwrap();
        let summary = dir.path().join("summary.json");

        let cli = Cli::parse_from([
            "benchplot".into(),
            input.clone().into_os_string(),
            "--format".into(),
            "json".into(),
            "--width".into(),
            "400".into(),
            "--height".into(),
            "300".into(),
            "-o".into(),
            summary.clone().into_os_string(),
        ]);
        run_with_cli(cli).unwrap();

        let json = std::fs::read_to_string(&summary).unwrap();
        let report: benchplot_report::Report = serde_json::from_str(&json).unwrap();
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[1].speedup, Some(5.0));
        assert!(dir.path().join("results_speedup_annotated.png").exists());
    }
}
