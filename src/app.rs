//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads a workbook (or generates demo sheets)
//! - runs the fit pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, FitArgs};
use crate::domain::FitConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `lsq` binary.
pub fn run() -> Result<(), AppError> {
    // We want `lsq` and `lsq -d data.json` to behave like `lsq tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Sheets(args) => handle_sheets(args),
        Command::Tui(args) => crate::tui::run(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args);
    let (loaded, run) = pipeline::run_fit(&config)?;

    println!("{}", crate::report::format_run_summary(&loaded, &run));

    if config.plot {
        let plot = crate::plot::render_ascii_plot(
            &run.dataset.samples,
            &run.curve,
            &run.fit.to_string(),
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    if let Some(path) = &config.export {
        crate::io::export::write_curve_csv(path, &run.curve)?;
    }

    Ok(())
}

fn handle_sheets(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args);
    let loaded = pipeline::load_session(&config)?;
    print!("{}", crate::report::format_sheet_list(&loaded));
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        data_path: args.data.clone(),
        sheet: args.sheet.clone(),
        model: args.model,
        sample_count: args.count,
        sample_seed: args.seed,
        noise: args.noise,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export: args.export.clone(),
    }
}

/// Rewrite argv so `lsq` defaults to `lsq tui`.
///
/// Rules:
/// - `lsq`                     -> `lsq tui`
/// - `lsq -d data.json ...`    -> `lsq tui -d data.json ...`
/// - `lsq --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "sheets" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_becomes_tui() {
        assert_eq!(rewrite_args(v(&["lsq"])), v(&["lsq", "tui"]));
        assert_eq!(
            rewrite_args(v(&["lsq", "-d", "data.json"])),
            v(&["lsq", "tui", "-d", "data.json"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(v(&["lsq", "fit", "-m", "power"])),
            v(&["lsq", "fit", "-m", "power"])
        );
        assert_eq!(rewrite_args(v(&["lsq", "--help"])), v(&["lsq", "--help"]));
    }
}
