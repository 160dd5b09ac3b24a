use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod error;
mod services;

use cli::{Cli, USAGE};
use error::InspectError;
use services::config::DirectorySources;
use services::output::print_json_error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let sources = DirectorySources::from_env(cli.directory.clone());

    match commands::handle_inspect(&cli, &sources) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&cli, &err),
    }
}

fn report_failure(cli: &Cli, err: &anyhow::Error) -> ExitCode {
    let Some(e) = err.downcast_ref::<InspectError>() else {
        eprintln!("error: {:#}", err);
        return ExitCode::FAILURE;
    };
    log::debug!("failing with {}", e.code());
    if cli.json && !e.follows_report() {
        if let Err(out_err) = print_json_error(e) {
            eprintln!("error: {:#}", out_err);
        }
    }
    eprintln!("error: {}", e);
    if matches!(e, InspectError::MissingSource { .. }) {
        eprintln!("{}", USAGE);
    }
    ExitCode::from(e.exit_code())
}
