#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use rusqlite::Connection;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DB_FILE: &str = "glimmondb.sqlite3";
pub const LOG_FILE: &str = "DB_Commit.log";

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().canonicalize().expect("canonical temp dir");
        Self { _tmp: tmp, root }
    }

    /// A directory under the temp root; created but left empty.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let p = self.root.join(rel);
        fs::create_dir_all(&p).expect("create fixture dir");
        p
    }

    /// Command with both directory variables cleared.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("glimmon-inspect");
        cmd.env_remove("GLIMMONDATA")
            .env_remove("SKA_DATA")
            .env_remove("RUST_LOG")
            .current_dir(&self.root);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// glimmondb layout: fingerprints for versions 1..=n plus matching version rows,
/// with `limits`/`expected_states` sized to match the newest fingerprint.
pub fn make_fixture_db(dir: &Path, versions: i64) -> PathBuf {
    let path = dir.join(DB_FILE);
    let conn = Connection::open(&path).expect("open fixture db");
    conn.execute_batch(
        "CREATE TABLE build_fingerprints(
            id INTEGER PRIMARY KEY,
            version INTEGER UNIQUE,
            limit_hash TEXT,
            state_hash TEXT,
            version_hash TEXT,
            limit_count INTEGER,
            state_count INTEGER,
            version_count INTEGER,
            db_sha256 TEXT,
            db_size_bytes INTEGER,
            source_file TEXT,
            source_revision TEXT,
            source_date TEXT,
            created_at TEXT DEFAULT CURRENT_TIMESTAMP);
         CREATE TABLE versions(id INTEGER PRIMARY KEY, version INTEGER UNIQUE, datesec REAL, date TEXT);
         CREATE TABLE limits(msid TEXT, setkey INTEGER);
         CREATE TABLE expected_states(msid TEXT, setkey INTEGER);",
    )
    .expect("create schema");

    for v in 1..=versions {
        conn.execute(
            "INSERT INTO versions(version, datesec, date) VALUES (?1, ?2, ?3)",
            rusqlite::params![v, 500_000_000.0 + v as f64 * 86_400.0, format!("2015:{:03}:00:00:00.000", v)],
        )
        .expect("insert version");
        conn.execute(
            "INSERT INTO build_fingerprints(version, limit_hash, state_hash, version_hash,
                limit_count, state_count, version_count, db_sha256, db_size_bytes,
                source_file, source_revision, source_date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            rusqlite::params![
                v,
                format!("{}limit{:0>40}", v, v),
                format!("{}state{:0>40}", v, v),
                format!("{}vers{:0>40}", v, v),
                v * 2,
                v,
                v,
                format!("{}sha{:0>60}", v, v),
                4096 * v,
                format!("G_LIMMON_2.{}.dec", v),
                format!("2.{}", v),
                format!("2015:{:03}", v),
                format!("2024-01-{:02} 12:00:00", v),
            ],
        )
        .expect("insert fingerprint");
    }
    for i in 0..versions * 2 {
        conn.execute("INSERT INTO limits VALUES ('tephin', ?1)", [i])
            .expect("insert limit");
    }
    for i in 0..versions {
        conn.execute("INSERT INTO expected_states VALUES ('ebt2rly3', ?1)", [i])
            .expect("insert state");
    }
    path
}

pub fn write_log(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join(LOG_FILE);
    fs::write(&path, lines.join("\n") + "\n").expect("write log");
    path
}
