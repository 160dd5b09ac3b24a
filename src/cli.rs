use crate::domain::constants::DEFAULT_TAIL;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "glimmon-inspect",
    version,
    about = "Show the latest glimmondb build fingerprint, version and commit-log hash entries",
    after_help = "If DIRECTORY is omitted, GLIMMONDATA is used, then SKA_DATA/glimmon_archive."
)]
pub struct Cli {
    #[arg(help = "glimmondb directory (overrides GLIMMONDATA and SKA_DATA)")]
    pub directory: Option<PathBuf>,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, default_value_t = DEFAULT_TAIL, help = "Number of matching log lines to show")]
    pub tail: usize,
    #[arg(
        long,
        default_value_t = false,
        help = "Recount limits/expected_states/versions and compare with the latest fingerprint"
    )]
    pub verify: bool,
}

pub const USAGE: &str = "usage: glimmon-inspect [DIRECTORY]  (or set GLIMMONDATA, or SKA_DATA)";
