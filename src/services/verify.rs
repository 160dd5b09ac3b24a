//! Recount the tables a build fingerprint summarizes and compare with the newest record.

use crate::domain::models::{CountCheck, VerifyReport};
use crate::error::InspectError;
use rusqlite::{Connection, OptionalExtension};

const COUNTED_TABLES: &[(&str, &str)] = &[
    ("limits", "limit_count"),
    ("expected_states", "state_count"),
    ("versions", "version_count"),
];

fn query_err(table: &'static str) -> impl Fn(rusqlite::Error) -> InspectError {
    move |source| InspectError::Query { table, source }
}

pub fn verify_counts(conn: &Connection) -> Result<VerifyReport, InspectError> {
    let recorded = conn
        .query_row(
            "SELECT version, limit_count, state_count, version_count
             FROM build_fingerprints ORDER BY version DESC LIMIT 1",
            [],
            |r| {
                Ok((
                    r.get::<_, i64>(0)?,
                    [
                        r.get::<_, Option<i64>>(1)?,
                        r.get::<_, Option<i64>>(2)?,
                        r.get::<_, Option<i64>>(3)?,
                    ],
                ))
            },
        )
        .optional()
        .map_err(query_err("build_fingerprints"))?;
    let Some((fingerprint_version, recorded_counts)) = recorded else {
        return Err(InspectError::NoFingerprint);
    };

    let current_version: Option<i64> = conn
        .query_row("SELECT MAX(version) FROM versions", [], |r| r.get(0))
        .map_err(query_err("versions"))?;

    let mut checks = Vec::with_capacity(COUNTED_TABLES.len());
    for (&(table, column), recorded) in COUNTED_TABLES.iter().zip(recorded_counts) {
        let actual: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))
            .map_err(query_err(table))?;
        log::debug!("{}: recorded {}={:?} actual {}", table, column, recorded, actual);
        checks.push(CountCheck {
            table: table.to_string(),
            recorded,
            actual,
            ok: recorded == Some(actual),
        });
    }

    Ok(VerifyReport {
        fingerprint_version,
        current_version,
        checks,
    })
}

pub fn recorded_text(check: &CountCheck) -> String {
    check
        .recorded
        .map(|n| n.to_string())
        .unwrap_or_else(|| "NULL".to_string())
}

/// Turn a failed report into the error the run exits with.
pub fn mismatch_error(report: &VerifyReport) -> Option<InspectError> {
    if report.ok() {
        return None;
    }
    let mut problems: Vec<String> = report
        .checks
        .iter()
        .filter(|c| !c.ok)
        .map(|c| format!("{} recorded {} actual {}", c.table, recorded_text(c), c.actual))
        .collect();
    if report.current_version != Some(report.fingerprint_version) {
        problems.push(format!(
            "fingerprint version {} but latest version is {}",
            report.fingerprint_version,
            report
                .current_version
                .map(|v| v.to_string())
                .unwrap_or_else(|| "none".to_string())
        ));
    }
    Some(InspectError::FingerprintMismatch(problems.join("; ")))
}
