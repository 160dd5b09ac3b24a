//! Stable error codes and exit statuses for the inspection run.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Missing required environment variable(s): {primary}, {secondary}")]
    MissingSource {
        primary: &'static str,
        secondary: &'static str,
    },

    #[error("Configured path does not exist or is not accessible: {}: {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configured path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Database not found at {}", path.display())]
    MissingDatabase { path: PathBuf },

    #[error("Could not open database {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Query against {table} failed: {source}")]
    Query {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("No build fingerprint recorded in build_fingerprints")]
    NoFingerprint,

    #[error("Fingerprint does not match database contents: {0}")]
    FingerprintMismatch(String),
}

impl InspectError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingSource { .. } => "CONFIG_ERROR",
            Self::Directory { .. } | Self::NotADirectory { .. } => "FILESYSTEM_ERROR",
            Self::MissingDatabase { .. } => "MISSING_DATABASE",
            Self::Open { .. } | Self::Query { .. } => "QUERY_ERROR",
            Self::NoFingerprint | Self::FingerprintMismatch(_) => "FINGERPRINT_MISMATCH",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingSource { .. } => 2,
            Self::Directory { .. } | Self::NotADirectory { .. } => 3,
            Self::MissingDatabase { .. } => 4,
            Self::Open { .. } | Self::Query { .. } => 5,
            Self::NoFingerprint | Self::FingerprintMismatch(_) => 6,
        }
    }

    /// Failures raised only after the full report has been printed.
    pub fn follows_report(&self) -> bool {
        matches!(self, Self::NoFingerprint | Self::FingerprintMismatch(_))
    }

    pub fn to_dto(&self) -> InspectErrorDto {
        InspectErrorDto {
            code: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InspectErrorDto {
    pub code: String,
    pub message: String,
}
