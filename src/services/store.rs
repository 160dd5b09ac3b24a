use crate::domain::constants::{DATABASE_FILE, FINGERPRINT_WIDTHS};
use crate::domain::models::QueryTable;
use crate::error::InspectError;
use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

const LATEST_FINGERPRINT_SQL: &str = "SELECT version,
        substr(limit_hash, 1, 14) || '...' AS limit_hash,
        substr(state_hash, 1, 14) || '...' AS state_hash,
        substr(version_hash, 1, 14) || '...' AS version_hash,
        substr(db_sha256, 1, 12) || '...' AS db_sha256,
        db_size_bytes, limit_count, state_count, version_count, created_at
    FROM build_fingerprints
    ORDER BY version DESC
    LIMIT 1";

const LATEST_VERSION_SQL: &str =
    "SELECT version, datesec, date FROM versions ORDER BY version DESC LIMIT 1";

pub fn database_path(dir: &Path) -> PathBuf {
    dir.join(DATABASE_FILE)
}

pub fn ensure_database(dir: &Path) -> Result<PathBuf, InspectError> {
    let path = database_path(dir);
    if !path.is_file() {
        return Err(InspectError::MissingDatabase { path });
    }
    Ok(path)
}

pub fn open_read_only(path: &Path) -> Result<Connection, InspectError> {
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|source| InspectError::Open {
        path: path.to_path_buf(),
        source,
    })
}

pub fn latest_fingerprint(conn: &Connection) -> Result<QueryTable, InspectError> {
    let mut table = run_query(conn, "build_fingerprints", LATEST_FINGERPRINT_SQL)?;
    table.widths = Some(FINGERPRINT_WIDTHS.to_vec());
    Ok(table)
}

pub fn latest_version(conn: &Connection) -> Result<QueryTable, InspectError> {
    run_query(conn, "versions", LATEST_VERSION_SQL)
}

fn run_query(conn: &Connection, table: &'static str, sql: &str) -> Result<QueryTable, InspectError> {
    let wrap = |source| InspectError::Query { table, source };
    let mut stmt = conn.prepare(sql).map_err(wrap)?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let width = columns.len();
    let rows = stmt
        .query_map([], |row| {
            (0..width)
                .map(|i| row.get::<_, Value>(i).map(|v| render_value(&v)))
                .collect::<Result<Vec<_>, _>>()
        })
        .map_err(wrap)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(wrap)?;
    log::debug!("{} returned {} row(s)", table, rows.len());
    Ok(QueryTable {
        columns,
        rows,
        widths: None,
    })
}

/// Text form of a dynamic SQLite value; NULL renders empty.
pub fn render_value(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => render_real(*f),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => String::from_utf8_lossy(b).into_owned(),
    }
}

/// `%!.15g` as the sqlite3 shell prints reals: 15 significant digits, trailing
/// zeros dropped but at least one fractional digit kept, exponent form outside
/// `1e-4..1e15`.
pub fn render_real(f: f64) -> String {
    if f.is_nan() {
        return String::new();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Inf".into() } else { "-Inf".into() };
    }
    if f == 0.0 {
        return if f.is_sign_negative() { "-0.0".into() } else { "0.0".into() };
    }
    let sci = format!("{:.14e}", f);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if !(-4..15).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", keep_one_decimal(mantissa), sign, exp.abs());
    }
    let fixed = format!("{:.*}", (14 - exp) as usize, f);
    keep_one_decimal(&fixed)
}

fn keep_one_decimal(digits: &str) -> String {
    if !digits.contains('.') {
        return format!("{}.0", digits);
    }
    let trimmed = digits.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}
