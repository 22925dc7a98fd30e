use anyhow::Result;
use clap::Command;
use colored::*;

use sysreport::commands;

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = Command::new("sysreport")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Collects a one-shot system telemetry report")
        .long_about(
            "Collects a one-shot system telemetry report\n\n\
             Sections: System Information, Boot Time, CPU Info, Memory Usage,\n\
             Disk Usage, GPU Usage (via nvidia-smi) and Network Information.\n\
             The report is printed and saved to system_report.txt by default.",
        )
        .args(commands::report::args())
        .subcommand(Command::new("version").about("Shows version information"))
        .get_matches();

    sysreport::init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("version", _)) => commands::version(),
        _ => commands::report(&matches),
    }
}
