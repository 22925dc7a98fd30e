use std::fs;

use sysreport::commands::report::{render, run};
use sysreport::core::output::write_report;
use sysreport::core::report::{MetricSection, Report, SectionStatus};
use sysreport::{OutputFormat, ReportConfig};
use tempfile::TempDir;

fn sample_report() -> Report {
    Report::new(vec![
        MetricSection::new(
            "Boot Time",
            vec!["Boot Time: 2024-05-01 09:30:00".to_string()],
            SectionStatus::Complete,
        ),
        MetricSection::new(
            "GPU Usage",
            vec!["nvidia-smi not available or failed; skipping GPU info.".to_string()],
            SectionStatus::Degraded,
        ),
    ])
}

#[test]
fn test_text_report_written_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("system_report.txt");

    let rendered = render(&sample_report(), OutputFormat::Text).unwrap();
    write_report(&path, &rendered).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), rendered);
}

#[test]
fn test_json_report_round_trips_through_serde_json() {
    let rendered = render(&sample_report(), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    let sections = value["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[1]["status"], "degraded");
}

#[test]
fn test_run_against_live_host_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.txt");

    let config = ReportConfig {
        sample_interval: std::time::Duration::ZERO,
        nvidia_smi: "sysreport-test-missing-nvidia-smi".to_string(),
        output_path: path.clone(),
        print_console: false,
        ..Default::default()
    };

    run(&config).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let headers: Vec<&str> = text.lines().filter(|l| l.starts_with("===== ")).collect();
    assert_eq!(
        headers,
        vec![
            "===== System Information =====",
            "===== Boot Time =====",
            "===== CPU Info =====",
            "===== Memory Usage =====",
            "===== Disk Usage =====",
            "===== GPU Usage =====",
            "===== Network Information =====",
        ]
    );
    assert!(text.contains("nvidia-smi not available or failed; skipping GPU info."));
    assert!(text.contains("**omitted due to security restrictions**"));
}
