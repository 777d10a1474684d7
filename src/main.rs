use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use holiday_fetch::*;

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();
    let cwd = match std::env::current_dir().context("cannot determine the working directory") {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let result = if args.yes {
        run(&args, &cwd, &mut AssumeYes {})
    } else {
        run(&args, &cwd, &mut StdinPrompt {})
    };
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(HolidayError::UserCancelled) => {
            println!("Download cancelled");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
