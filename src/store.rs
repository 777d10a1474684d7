use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde_json::Value;

use crate::error::{HolidayError, Result};
use crate::paths;
use crate::prompt::Prompt;
use crate::source::HolidaySource;
use crate::utils::write_string_2_file;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// What to do with a file that is already at the write location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictDecision {
    Overwrite,
    Timestamped(PathBuf),
}

/// Fetches `year` from `source` and writes it at (or next to) `candidate`.
/// Returns the path actually written.
pub fn fetch_and_persist(
    source: &HolidaySource,
    year: i32,
    candidate: &Path,
    prompt: &mut dyn Prompt,
) -> Result<PathBuf> {
    let payload = source.fetch(year)?;
    persist(year, candidate, &payload, prompt)
}

/// Writes an already fetched payload, applying the conflict policy.
pub fn persist(
    year: i32,
    candidate: &Path,
    payload: &Value,
    prompt: &mut dyn Prompt,
) -> Result<PathBuf> {
    let target = paths::settle(year, candidate);
    let final_path = match resolve_conflict(&target, prompt, Local::now().naive_local()) {
        None | Some(ConflictDecision::Overwrite) => target,
        Some(ConflictDecision::Timestamped(path)) => {
            println!("File will be saved as: {}", path.display());
            path
        }
    };

    let text = to_pretty_json(payload).map_err(|e| HolidayError::io(&final_path, e.into()))?;
    write_string_2_file(&text, &final_path)?;
    log::info!("wrote {} bytes to {}", text.len(), final_path.display());
    Ok(final_path)
}

/// `None` when nothing exists at `target`.
pub fn resolve_conflict(
    target: &Path,
    prompt: &mut dyn Prompt,
    now: NaiveDateTime,
) -> Option<ConflictDecision> {
    if !target.exists() {
        return None;
    }
    println!("File {} already exists!", target.display());
    if prompt.confirm("Overwrite?") {
        log::debug!("overwriting {}", target.display());
        Some(ConflictDecision::Overwrite)
    } else {
        let renamed = timestamped_path(target, now);
        log::debug!("keeping {}, writing {} instead", target.display(), renamed.display());
        Some(ConflictDecision::Timestamped(renamed))
    }
}

/// Inserts `_<YYYYMMDD_HHMMSS>` between the file stem and the extension.
pub fn timestamped_path(path: &Path, now: NaiveDateTime) -> PathBuf {
    let mut name = OsString::from(path.file_stem().unwrap_or_default());
    name.push("_");
    name.push(now.format(TIMESTAMP_FORMAT).to_string());
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

/// Two-space indented JSON with non-ASCII characters left as they are.
pub fn to_pretty_json(payload: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(payload)
}
