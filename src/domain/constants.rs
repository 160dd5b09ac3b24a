/// Environment variable naming the glimmondb directory directly.
pub const PRIMARY_DIR_VAR: &str = "GLIMMONDATA";
/// Environment variable naming the parent data root.
pub const SECONDARY_DIR_VAR: &str = "SKA_DATA";
/// Subdirectory of `SKA_DATA` holding the glimmondb archive.
pub const SECONDARY_SUBPATH: &str = "glimmon_archive";

pub const DATABASE_FILE: &str = "glimmondb.sqlite3";
pub const LOG_FILE: &str = "DB_Commit.log";

pub const LOG_PATTERN: &str = "(?i)fingerprint|hash";
pub const DEFAULT_TAIL: usize = 5;

/// Column widths for the fingerprint table; hashes are cut to 14 (sha to 12) plus `...`.
pub const FINGERPRINT_WIDTHS: &[usize] = &[8, 17, 17, 17, 15, 13, 11, 11, 13, 19];
