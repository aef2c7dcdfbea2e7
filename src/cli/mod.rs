//! Command-line parsing for the least-squares curve fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::ModelKind;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "lsq", version, about = "Least-Squares Curve Fitter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a model to a sheet, print the summary, and optionally plot/export.
    Fit(FitArgs),
    /// List the sheets in a data file (or the demo session).
    Sheets(FitArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same underlying fit pipeline as `lsq fit`, but renders
    /// results in a terminal UI using Ratatui.
    Tui(FitArgs),
}

/// Common options for fitting and listing.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Workbook (.json) or sheet (.csv) to load. Omit to use generated demo sheets.
    #[arg(short = 'd', long)]
    pub data: Option<PathBuf>,

    /// Sheet to fit (defaults to the first sheet).
    #[arg(short = 's', long)]
    pub sheet: Option<String>,

    /// Model family to fit.
    #[arg(short = 'm', long, value_enum, default_value_t = ModelKind::Linear)]
    pub model: ModelKind,

    /// Points per generated demo sheet.
    #[arg(long, default_value_t = 40)]
    pub count: usize,

    /// Random seed for demo sheet generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Demo noise level (absolute for the linear sheet, log-scale for the others).
    #[arg(long, default_value_t = 0.5)]
    pub noise: f64,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the sampled fitted curve to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,
}
