pub mod error;
pub mod paths;
pub mod prompt;
pub mod source;
pub mod store;
mod utils;

use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use clap::Parser;

pub use crate::error::{HolidayError, Result};
pub use crate::prompt::{AssumeYes, Prompt, StdinPrompt};
pub use crate::source::{HolidaySource, HOLIDAY_CN_BASE_URL};

/// Download Chinese public holiday data (holiday-cn) for one year.
///
/// Source: https://github.com/NateScarlet/holiday-cn
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Year to download, e.g. 2025
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
    /// Output directory or file [default: calendar-service/assets/holiday-cn/]
    pub output_path: Option<PathBuf>,
    /// Mirror to download from instead of GitHub
    #[arg(long, env = "HOLIDAY_CN_BASE_URL", default_value = HOLIDAY_CN_BASE_URL)]
    pub base_url: String,
    /// Answer yes to every confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,
}

pub const EARLIEST_YEAR: i32 = 1990;

pub fn is_plausible_year(year: i32, current_year: i32) -> bool {
    (EARLIEST_YEAR..=current_year + 10).contains(&year)
}

/// Runs one download from `cwd`. Returns the path written.
pub fn run(args: &Cli, cwd: &Path, prompt: &mut dyn Prompt) -> Result<PathBuf> {
    let current_year = Local::now().year();
    if !is_plausible_year(args.year, current_year) {
        log::warn!("year {} outside {EARLIEST_YEAR}..={}", args.year, current_year + 10);
        println!("Warning: year {} may not be in the valid range", args.year);
        if !prompt.confirm("Continue downloading?") {
            return Err(HolidayError::UserCancelled);
        }
    }

    let candidate = paths::resolve(args.year, args.output_path.as_deref(), cwd);
    println!("Downloading holiday data for {}...", args.year);
    println!("Output path: {}", candidate.display());

    let source = HolidaySource::new(&args.base_url)?;
    let written = store::fetch_and_persist(&source, args.year, &candidate, prompt)?;
    println!("Saved {} holiday data to: {}", args.year, written.display());
    Ok(written)
}
