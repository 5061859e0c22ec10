//! Ledger ETL CLI.

use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use ledger_cli::logging::{LogConfig, LogFormat, init_logging};
use ledger_cli::pipeline::{CLEANED_FILE_NAME, RunConfig, SUMMARY_FILE_NAME, run_pipeline};
use ledger_cli::summary::{print_columns, print_run_summary};
use ledger_cli::types::RunReport;
use ledger_model::PipelineOptions;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, RunArgs};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Run(args) => match run(&args) {
            Ok(report) => {
                print_run_summary(&report);
                0
            }
            Err(error) => {
                // The single failure boundary of the job: no stage recovers,
                // the full error chain lands here.
                println!("ERROR occurred during ETL run");
                println!("{error:?}");
                eprintln!("ERROR: {error}");
                1
            }
        },
        Command::Columns => {
            print_columns();
            0
        }
    };
    std::process::exit(exit_code);
}

/// Build the run configuration from CLI arguments and execute the pipeline.
fn run(args: &RunArgs) -> Result<RunReport> {
    let default_dir = args
        .input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("output");
    let cleaned_dir = args.cleaned_dir.clone().unwrap_or_else(|| default_dir.clone());
    let summary_dir = args.summary_dir.clone().unwrap_or(default_dir);

    let mut options = PipelineOptions::default().with_age_threshold(args.age_threshold);
    if let Some(date) = args.ingestion_date {
        options = options.with_ingestion_date(date);
    }

    let config = RunConfig {
        input: args.input.clone(),
        cleaned_path: cleaned_dir.join(CLEANED_FILE_NAME),
        summary_path: summary_dir.join(SUMMARY_FILE_NAME),
        options,
        report_json: args.report_json.clone(),
    };
    run_pipeline(&config)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };
    config
}
