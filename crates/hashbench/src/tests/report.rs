// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::PathBuf;

use hashbench_cipher::GeneratedFile;
use hashbench_guard::LimitStatus;
use hashbench_probe::SystemInfo;
use hashbench_runner::{
    AlgorithmRun, BenchError, ExecutionMode, MeasurementSample, RunReport, aggregate,
};

use crate::cli::OutputFormat;
use crate::report::{write_generated, write_report, write_system_info};

fn sample_report() -> RunReport {
    let sample = MeasurementSample {
        elapsed_secs: 0.25,
        cpu_delta: 50.0,
        memory_delta_mb: 1.5,
    };

    RunReport {
        mode: ExecutionMode::Multi,
        workers: 2,
        limits: LimitStatus::default(),
        runs: vec![
            AlgorithmRun {
                name: "blake3".to_string(),
                outcome: Ok(aggregate("blake3", &[sample])),
            },
            AlgorithmRun {
                name: "md5".to_string(),
                outcome: Err(BenchError::InvalidRepetitions),
            },
        ],
    }
}

fn render(report: &RunReport, format: OutputFormat) -> String {
    let mut out = Vec::new();
    write_report(&mut out, report, format).expect("Failed to write_report(..)");
    String::from_utf8(out).expect("report is UTF-8")
}

#[test]
fn test_table_lists_every_run_in_order() {
    let table = render(&sample_report(), OutputFormat::Table);

    assert!(table.starts_with("Mode: multi (2 workers)"));
    let blake3 = table.find("blake3").expect("blake3 row");
    let md5 = table.find("md5").expect("md5 row");
    assert!(blake3 < md5);

    assert!(table.contains("0.250000"));
    assert!(table.contains("50.00"));
    // 10 + 0.6 * 50 and 35 + 0.5 * 50
    assert!(table.contains("40.00"));
    assert!(table.contains("60.00"));
    assert!(table.contains("md5      FAILED: repetitions must be at least 1"));
}

#[test]
fn test_json_lines_one_object_per_run() {
    let json = render(&sample_report(), OutputFormat::Json);
    let lines: Vec<serde_json::Value> = json
        .lines()
        .map(|l| serde_json::from_str(l).expect("Failed to parse line"))
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["hash"], "blake3");
    assert_eq!(lines[0]["speed"], 0.25);
    assert_eq!(lines[0]["cpu_usage"], 50.0);
    assert_eq!(lines[0]["memory_usage"], 1.5);
    assert_eq!(lines[0]["estimated_power_w"], 40.0);
    assert_eq!(lines[0]["estimated_temperature_c"], 60.0);
    assert_eq!(lines[1]["hash"], "md5");
    assert_eq!(lines[1]["error"], "repetitions must be at least 1");
}

#[test]
fn test_system_info_formats() {
    let info = SystemInfo {
        logical_cpus: 8,
        online_cpus: 8,
        total_memory_bytes: 16 * 1024 * 1024 * 1024,
        available_memory_bytes: 8 * 1024 * 1024 * 1024,
        process_rss_bytes: 4096,
    };

    let mut table = Vec::new();
    write_system_info(&mut table, &info, OutputFormat::Table).expect("Failed to write table");
    let table = String::from_utf8(table).expect("UTF-8");
    assert!(table.contains("Logical CPUs:     8"));
    assert!(table.contains("Total memory:     16.00 GB"));
    assert!(table.contains("Available memory: 8.00 GB"));

    let mut json = Vec::new();
    write_system_info(&mut json, &info, OutputFormat::Json).expect("Failed to write json");
    let value: serde_json::Value = serde_json::from_slice(&json).expect("Failed to parse");
    assert_eq!(value["logical_cpus"], 8);
    assert_eq!(value["process_rss_bytes"], 4096);
}

#[test]
fn test_generated_listing() {
    let files = vec![
        GeneratedFile {
            size_mb: 10,
            plain: PathBuf::from("upload/10MB.bin"),
            encrypted: Some(PathBuf::from("upload/10MB.enc")),
        },
        GeneratedFile {
            size_mb: 100,
            plain: PathBuf::from("upload/100MB.bin"),
            encrypted: None,
        },
    ];

    let mut out = Vec::new();
    write_generated(&mut out, &files).expect("Failed to write_generated(..)");
    let out = String::from_utf8(out).expect("UTF-8");

    assert_eq!(
        out,
        "    10 MB  upload/10MB.bin  upload/10MB.enc\n   100 MB  upload/100MB.bin\n"
    );
}
