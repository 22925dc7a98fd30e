use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches};
use colored::Colorize;

use crate::core::config::{OutputFormat, ReportConfig, DEFAULT_NVIDIA_SMI, DEFAULT_REPORT_FILE};
use crate::core::output::write_report;
use crate::core::report::{Report, ReportAggregator};

/// Flags shared by the top-level command
pub fn args() -> Vec<Arg> {
    vec![
        Arg::new("output")
            .short('o')
            .long("output")
            .value_name("PATH")
            .help("File the report is written to")
            .value_parser(value_parser!(PathBuf))
            .default_value(DEFAULT_REPORT_FILE),
        Arg::new("no-file")
            .long("no-file")
            .help("Do not write the report to a file")
            .action(ArgAction::SetTrue),
        Arg::new("quiet")
            .short('q')
            .long("quiet")
            .help("Do not print the report to the console")
            .action(ArgAction::SetTrue),
        Arg::new("json")
            .long("json")
            .help("Render the report as JSON")
            .action(ArgAction::SetTrue),
        Arg::new("interval")
            .long("interval")
            .value_name("MS")
            .help("CPU usage sampling window in milliseconds")
            .value_parser(value_parser!(u64))
            .default_value("1000"),
        Arg::new("gpu-timeout")
            .long("gpu-timeout")
            .value_name("SECS")
            .help("Maximum time to wait for nvidia-smi")
            .value_parser(value_parser!(u64).range(1..))
            .default_value("10"),
        Arg::new("nvidia-smi")
            .long("nvidia-smi")
            .value_name("PATH")
            .help("nvidia-smi executable to query")
            .default_value(DEFAULT_NVIDIA_SMI),
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("Enable debug logging")
            .action(ArgAction::SetTrue),
    ]
}

/// Build a [`ReportConfig`] from parsed flags
pub fn config_from_matches(matches: &ArgMatches) -> Result<ReportConfig> {
    let defaults = ReportConfig::default();

    let interval_ms = matches
        .get_one::<u64>("interval")
        .copied()
        .context("interval argument is required")?;
    let gpu_timeout_secs = matches
        .get_one::<u64>("gpu-timeout")
        .copied()
        .context("gpu-timeout argument is required")?;

    Ok(ReportConfig {
        sample_interval: Duration::from_millis(interval_ms),
        gpu_timeout: Duration::from_secs(gpu_timeout_secs),
        nvidia_smi: matches
            .get_one::<String>("nvidia-smi")
            .cloned()
            .unwrap_or(defaults.nvidia_smi),
        output_path: matches
            .get_one::<PathBuf>("output")
            .cloned()
            .unwrap_or(defaults.output_path),
        write_file: !matches.get_flag("no-file"),
        print_console: !matches.get_flag("quiet"),
        format: if matches.get_flag("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
    })
}

/// Serialize the report in the requested format
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => {
            let mut json = report.to_json().context("Failed to serialize report")?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = config_from_matches(matches)?;
    run(&config)
}

/// Collect, render and emit one report
pub fn run(config: &ReportConfig) -> Result<()> {
    eprintln!("{}", "Collecting system information...".cyan().bold());

    let mut aggregator = ReportAggregator::from_config(config);
    let report = aggregator
        .build_report()
        .context("Failed to build system report")?;
    let rendered = render(&report, config.format)?;

    if config.print_console {
        print!("{}", rendered);
    }

    if config.write_file {
        write_report(&config.output_path, &rendered).with_context(|| {
            format!("Failed to write report to {}", config.output_path.display())
        })?;
        eprintln!(
            "{} {}",
            "Report saved to".green(),
            config.output_path.display().to_string().white().bold()
        );
    }

    Ok(())
}
