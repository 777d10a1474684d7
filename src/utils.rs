use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{HolidayError, Result};

/// Writes `content` to `file_name`, creating missing parent directories and
/// replacing whatever was there before.
pub fn write_string_2_file(content: &str, file_name: &Path) -> Result<()> {
    if let Some(parent) = file_name.parent() {
        fs::create_dir_all(parent).map_err(|e| HolidayError::io(parent, e))?;
    }
    File::create(file_name)
        .and_then(|mut f| f.write_all(content.as_bytes()))
        .map_err(|e| HolidayError::io(file_name, e))
}
