use crate::error::InspectErrorDto;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

// Paths may be non-UTF-8; JSON gets the lossy form instead of an error.
fn lossy_path<P: AsRef<Path>, S: Serializer>(path: &P, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&path.as_ref().to_string_lossy())
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// A report that printed in full but still fails the run (verify problems).
#[derive(Serialize)]
pub struct JsonFailedOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
    pub error: InspectErrorDto,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: InspectErrorDto,
}

/// Where the base directory came from.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DirectorySource {
    Argument,
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    pub path: PathBuf,
    pub source: DirectorySource,
}

/// Result of one literal query, cells already rendered as text.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct QueryTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Explicit display widths; `None` means size to content.
    #[serde(skip)]
    pub widths: Option<Vec<usize>>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct LogMatch {
    pub line_number: usize,
    pub text: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LogScan {
    Skipped {
        #[serde(serialize_with = "lossy_path")]
        path: PathBuf,
    },
    Matches {
        #[serde(serialize_with = "lossy_path")]
        path: PathBuf,
        lines: Vec<LogMatch>,
    },
    Unreadable {
        #[serde(serialize_with = "lossy_path")]
        path: PathBuf,
        reason: String,
    },
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CountCheck {
    pub table: String,
    /// `None` when the fingerprint column is NULL.
    pub recorded: Option<i64>,
    pub actual: i64,
    pub ok: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub fingerprint_version: i64,
    pub current_version: Option<i64>,
    pub checks: Vec<CountCheck>,
}

impl VerifyReport {
    pub fn ok(&self) -> bool {
        self.current_version == Some(self.fingerprint_version) && self.checks.iter().all(|c| c.ok)
    }
}

#[derive(Debug, Serialize)]
pub struct InspectReport {
    #[serde(serialize_with = "lossy_path")]
    pub directory: PathBuf,
    pub source: DirectorySource,
    #[serde(serialize_with = "lossy_path")]
    pub database: PathBuf,
    pub fingerprint: QueryTable,
    pub version: QueryTable,
    pub log: LogScan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify: Option<VerifyReport>,
}
