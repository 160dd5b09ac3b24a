use crate::cli::Cli;
use crate::domain::models::InspectReport;
use crate::error::InspectError;
use crate::services::config::{normalize_directory, resolve_directory, DirectorySources};
use crate::services::logscan::scan_log_in;
use crate::services::output::{print_json, print_json_failed, render_report};
use crate::services::{store, verify};

#[derive(Debug, Clone, Copy)]
pub struct InspectOptions {
    pub tail: usize,
    pub verify: bool,
}

impl From<&Cli> for InspectOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            tail: cli.tail,
            verify: cli.verify,
        }
    }
}

/// A finished run. `failure` is a verify problem found after both queries
/// succeeded; it is reported after the output is printed.
#[derive(Debug)]
pub struct Inspection {
    pub report: InspectReport,
    pub failure: Option<InspectError>,
}

pub fn inspect(
    sources: &DirectorySources,
    opts: InspectOptions,
) -> Result<Inspection, InspectError> {
    let resolved = resolve_directory(sources)?;
    log::info!(
        "resolved {} from {:?}",
        resolved.path.display(),
        resolved.source
    );
    let directory = normalize_directory(&resolved.path)?;
    let database = store::ensure_database(&directory)?;
    log::debug!("database at {}", database.display());

    let conn = store::open_read_only(&database)?;
    let fingerprint = store::latest_fingerprint(&conn)?;
    let version = store::latest_version(&conn)?;
    let log = scan_log_in(&directory, opts.tail);
    let (verify, failure) = if opts.verify {
        match verify::verify_counts(&conn) {
            Ok(report) => {
                let failure = verify::mismatch_error(&report);
                (Some(report), failure)
            }
            Err(InspectError::NoFingerprint) => (None, Some(InspectError::NoFingerprint)),
            Err(e) => return Err(e),
        }
    } else {
        (None, None)
    };

    Ok(Inspection {
        report: InspectReport {
            directory,
            source: resolved.source,
            database,
            fingerprint,
            version,
            log,
            verify,
        },
        failure,
    })
}

pub fn handle_inspect(cli: &Cli, sources: &DirectorySources) -> anyhow::Result<()> {
    let Inspection { report, failure } = inspect(sources, InspectOptions::from(cli))?;
    if cli.json {
        match &failure {
            Some(err) => print_json_failed(&report, err)?,
            None => print_json(&report)?,
        }
    } else {
        print!("{}", render_report(&report));
    }
    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
