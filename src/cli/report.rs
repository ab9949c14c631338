use anyhow::Result;
use enum_retrofit::{BatchReport, Direction, FileOutcome, FileReport};

use super::utils::{display_path, pluralize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Plain,
        }
    }
}

pub fn print_batch(report: &BatchReport, format: OutputFormat, verbose: bool) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Plain => print_plain(report, verbose),
    }
    Ok(())
}

fn print_plain(report: &BatchReport, verbose: bool) {
    let verb = match (report.direction, report.dry_run) {
        (Direction::Apply, false) => "Retrofitted",
        (Direction::Apply, true) => "Would retrofit",
        (Direction::Revert, false) => "Reverted",
        (Direction::Revert, true) => "Would revert",
    };

    for file in &report.files {
        let path = display_path(&file.path, &report.root);
        match &file.outcome {
            FileOutcome::Rewritten => println!("  ✏️  {}", path),
            FileOutcome::Skipped { missing } => println!("  ⚠️  {} skipped: {}", path, missing),
            FileOutcome::Unchanged { reason } if verbose => println!("  ·  {} ({})", path, reason),
            FileOutcome::Unchanged { .. } => {}
        }
    }

    let stats = report.stats();
    println!(
        "\n{} {} of {} scanned ({} unchanged, {} skipped)",
        verb,
        pluralize("file", stats.rewritten),
        stats.scanned,
        stats.unchanged,
        stats.skipped
    );
    if stats.skipped > 0 {
        println!("💡 Skipped files need a recognizable code and description field; add them by hand or extend [heuristics] in retrofit.toml.");
    }
}

pub fn print_detection(report: &BatchReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Plain => {
            for file in report.files.iter().filter(|f| f.detection.is_some()) {
                println!("{}", detection_line(file, &report.root));
            }
        }
    }
    Ok(())
}

fn detection_line(file: &FileReport, root: &std::path::Path) -> String {
    let describe = |field: Option<&enum_retrofit::FieldDescriptor>| match field {
        Some(f) => format!("{} {}", f.declared_type, f.name),
        None => "-".to_string(),
    };
    let detection = file.detection.as_ref();
    format!(
        "{}\tcode: {}\tdesc: {}\t[{}]",
        display_path(&file.path, root),
        describe(detection.and_then(|d| d.code.as_ref())),
        describe(detection.and_then(|d| d.desc.as_ref())),
        outcome_label(&file.outcome)
    )
}

fn outcome_label(outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Rewritten => "ready".to_string(),
        FileOutcome::Skipped { missing } => missing.to_string(),
        FileOutcome::Unchanged { reason } => reason.to_string(),
    }
}
