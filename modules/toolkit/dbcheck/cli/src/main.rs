mod args;

use args::Args;
use clap::Parser;
use dbcheck_rs::{check_database, CheckConfig, Console};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let config: CheckConfig = Args::parse().into();
    log::debug!("Running with {config:?}");

    let mut console = Console::stdio();
    match check_database(&config, &mut console) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:?}");
            ExitCode::FAILURE
        }
    }
}
