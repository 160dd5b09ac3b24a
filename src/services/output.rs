use crate::domain::models::{
    InspectReport, JsonErr, JsonFailedOut, JsonOut, LogScan, QueryTable, VerifyReport,
};
use crate::error::InspectError;
use crate::services::verify::recorded_text;
use serde::Serialize;
use std::fmt::Write as _;

pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

pub fn print_json_failed<T: Serialize>(data: T, err: &InspectError) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonFailedOut {
            ok: false,
            data,
            error: err.to_dto()
        })?
    );
    Ok(())
}

pub fn print_json_error(err: &InspectError) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonErr {
            ok: false,
            error: err.to_dto()
        })?
    );
    Ok(())
}

/// Column mode with headers: dashes under each header, two-space gaps, every
/// cell (the last one included) padded or cut to the column width. Empty
/// results render nothing.
pub fn render_table(table: &QueryTable) -> String {
    if table.rows.is_empty() {
        return String::new();
    }
    let widths: Vec<usize> = match &table.widths {
        Some(w) => (0..table.columns.len())
            .map(|i| w.get(i).copied().unwrap_or_else(|| natural_width(table, i)))
            .collect(),
        None => (0..table.columns.len())
            .map(|i| natural_width(table, i))
            .collect(),
    };

    let mut out = String::new();
    push_line(&mut out, table.columns.iter().map(String::as_str), &widths);
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, dashes.iter().map(String::as_str), &widths);
    for row in &table.rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn natural_width(table: &QueryTable, col: usize) -> usize {
    let header = table.columns[col].chars().count();
    table
        .rows
        .iter()
        .filter_map(|r| r.get(col))
        .map(|c| c.chars().count())
        .fold(header, usize::max)
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let cut: String = cell.chars().take(*width).collect();
        let _ = write!(line, "{:<width$}", cut, width = *width);
    }
    out.push_str(&line);
    out.push('\n');
}

pub fn render_log_scan(scan: &LogScan) -> String {
    match scan {
        LogScan::Skipped { path } => format!(
            "No DB_Commit.log found at {}; skipping log scan.\n",
            path.display()
        ),
        LogScan::Unreadable { path, reason } => format!(
            "Could not read {} ({}); skipping log scan.\n",
            path.display(),
            reason
        ),
        LogScan::Matches { lines, .. } => lines
            .iter()
            .map(|m| format!("{}:{}\n", m.line_number, m.text))
            .collect(),
    }
}

pub fn render_verify(report: &VerifyReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "fingerprint version {} (latest version {})",
        report.fingerprint_version,
        report
            .current_version
            .map(|v| v.to_string())
            .unwrap_or_else(|| "none".to_string())
    );
    for c in &report.checks {
        let _ = writeln!(
            out,
            "{}\trecorded={}\tactual={}\t{}",
            c.table,
            recorded_text(c),
            c.actual,
            if c.ok { "ok" } else { "MISMATCH" }
        );
    }
    out
}

pub fn render_report(report: &InspectReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Using glimmondb directory: {}", report.directory.display());
    let _ = writeln!(out, "Database: {}", report.database.display());
    out.push('\n');
    out.push_str("== Latest build fingerprint ==\n");
    out.push_str(&render_table(&report.fingerprint));
    out.push('\n');
    out.push_str("== Latest version ==\n");
    out.push_str(&render_table(&report.version));
    out.push('\n');
    out.push_str("== Recent fingerprint log entries ==\n");
    out.push_str(&render_log_scan(&report.log));
    if let Some(v) = &report.verify {
        out.push('\n');
        out.push_str("== Fingerprint count check ==\n");
        out.push_str(&render_verify(v));
    }
    out.push('\n');
    out.push_str("Done.\n");
    out
}
