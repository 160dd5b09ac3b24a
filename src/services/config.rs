use crate::domain::constants::{PRIMARY_DIR_VAR, SECONDARY_DIR_VAR, SECONDARY_SUBPATH};
use crate::domain::models::{DirectorySource, ResolvedSource};
use crate::error::InspectError;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Snapshot of every place the base directory may come from. Values stay
/// OS strings so non-UTF-8 paths are honored, not skipped.
#[derive(Debug, Clone, Default)]
pub struct DirectorySources {
    pub arg: Option<OsString>,
    pub primary: Option<OsString>,
    pub secondary: Option<OsString>,
}

impl DirectorySources {
    pub fn from_env(arg: Option<PathBuf>) -> Self {
        Self {
            arg: arg.map(PathBuf::into_os_string),
            primary: std::env::var_os(PRIMARY_DIR_VAR),
            secondary: std::env::var_os(SECONDARY_DIR_VAR),
        }
    }
}

fn non_empty(v: &Option<OsString>) -> Option<&OsStr> {
    v.as_deref().filter(|s| !s.is_empty())
}

/// Argument first, then `GLIMMONDATA`, then `SKA_DATA/glimmon_archive`.
pub fn resolve_directory(sources: &DirectorySources) -> Result<ResolvedSource, InspectError> {
    if let Some(arg) = non_empty(&sources.arg) {
        return Ok(ResolvedSource {
            path: PathBuf::from(arg),
            source: DirectorySource::Argument,
        });
    }
    if let Some(dir) = non_empty(&sources.primary) {
        return Ok(ResolvedSource {
            path: PathBuf::from(dir),
            source: DirectorySource::Primary,
        });
    }
    if let Some(root) = non_empty(&sources.secondary) {
        return Ok(ResolvedSource {
            path: Path::new(root).join(SECONDARY_SUBPATH),
            source: DirectorySource::Secondary,
        });
    }
    Err(InspectError::MissingSource {
        primary: PRIMARY_DIR_VAR,
        secondary: SECONDARY_DIR_VAR,
    })
}

pub fn normalize_directory(path: &Path) -> Result<PathBuf, InspectError> {
    let canonical = path.canonicalize().map_err(|source| InspectError::Directory {
        path: path.to_path_buf(),
        source,
    })?;
    if !canonical.is_dir() {
        return Err(InspectError::NotADirectory { path: canonical });
    }
    Ok(canonical)
}
