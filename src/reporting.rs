// Reporting and output for BoundaryGuard
// Renders scan results as text, JSON, Markdown or CSV and exports them to timestamped files

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::OutputFormat;
use crate::error::{Error, Result};
use crate::models::Boundary;

/// Aggregated result of a directory scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub total_files: usize,
    #[serde(rename = "total_boundaries")]
    pub total_bounds: usize,
    pub boundaries: Vec<Boundary>,
}

impl Report {
    pub fn new(total_files: usize, boundaries: Vec<Boundary>) -> Self {
        Self {
            total_files,
            total_bounds: boundaries.len(),
            boundaries,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.boundaries.is_empty()
    }
}

/// Escape CSV field to prevent formula injection attacks
/// Cells starting with =, +, -, @, or tab are prefixed with single quote
fn escape_csv_field(field: &str) -> String {
    let Some(first_char) = field.chars().next() else {
        return String::new();
    };
    let needs_escaping = matches!(first_char, '=' | '+' | '-' | '@' | '\t');

    if needs_escaping {
        format!("\"'{}\"", field.replace('"', "\"\""))
    } else if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str("\u{1f6e1}\u{fe0f}  BoundaryGuard Report\n");
    out.push_str(&format!(
        "   Files scanned: {} | Boundaries found: {}\n\n",
        report.total_files, report.total_bounds
    ));
    for (i, b) in report.boundaries.iter().enumerate() {
        out.push_str(&format!("[{}] {}:{}\n", i + 1, b.file, b.line));
        out.push_str(&format!(
            "    Type: {} | Source: {} | Var: {}\n",
            b.kind, b.source, b.variable
        ));
        out.push_str(&format!("    Rules: {}\n", b.validation.join("; ")));
        out.push_str(&format!("    Fuzz:  {}\n\n", b.fuzz_inputs.join(", ")));
    }
    if report.is_clean() {
        out.push_str("   No unguarded boundaries found. Clean!\n");
    }
    out
}

pub fn render_json(report: &Report) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

pub fn render_markdown(report: &Report) -> String {
    let mut out = String::new();
    out.push_str("# BoundaryGuard Report\n\n");
    out.push_str(&format!(
        "Generated {} | Files scanned: {} | Boundaries found: {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        report.total_files,
        report.total_bounds
    ));
    for b in &report.boundaries {
        out.push_str(&format!(
            "- **{}** `{}` in {}:{} ({})\n",
            b.kind, b.variable, b.file, b.line, b.source
        ));
        out.push_str(&format!("  - Rules: {}\n", b.validation.join("; ")));
    }
    if report.is_clean() {
        out.push_str("No unguarded boundaries found.\n");
    }
    out
}

pub fn render_csv(report: &Report) -> String {
    let mut out = String::from("File,Line,Type,Source,Variable\n");
    for b in &report.boundaries {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            escape_csv_field(&b.file),
            b.line,
            b.kind,
            escape_csv_field(&b.source),
            escape_csv_field(&b.variable)
        ));
    }
    out
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
        OutputFormat::Markdown => Ok(render_markdown(report)),
        OutputFormat::Csv => Ok(render_csv(report)),
    }
}

/// Write the report to `dir/boundaryguard_report_<timestamp>.<ext>` and return the path
pub fn export_report(report: &Report, format: OutputFormat, dir: &Path) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("boundaryguard_report_{}.{}", timestamp, format.extension()));
    let body = render(report, format)?;

    let mut file = File::create(&path).map_err(|e| Error::io(&path, e))?;
    file.write_all(body.as_bytes()).map_err(|e| Error::io(&path, e))?;

    tracing::info!(path = %path.display(), "report exported");
    Ok(path)
}
