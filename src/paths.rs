use std::path::{Component, Path, PathBuf};

/// Directory used when no output path is given, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: [&str; 3] = ["calendar-service", "assets", "holiday-cn"];

/// Where the user asked the data to go.
///
/// A user supplied path can mean either a directory to drop `<year>.json`
/// into or the exact file to write. The ambiguity is decided once, when the
/// target is classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Default,
    Directory(PathBuf),
    File(PathBuf),
}

impl OutputTarget {
    /// Classifies `output` against the filesystem, after making it absolute.
    /// A trailing separator always means a directory, existing or not.
    pub fn classify(output: Option<&Path>, cwd: &Path) -> Self {
        match output {
            None => OutputTarget::Default,
            Some(raw) => {
                let path = absolutize(raw, cwd);
                if has_trailing_separator(raw) || path.is_dir() {
                    OutputTarget::Directory(path)
                } else {
                    OutputTarget::File(path)
                }
            }
        }
    }

    /// The file this target points at for `year`.
    pub fn candidate(&self, year: i32, cwd: &Path) -> PathBuf {
        match self {
            OutputTarget::Default => {
                let dir = DEFAULT_OUTPUT_DIR
                    .iter()
                    .fold(absolutize(Path::new(""), cwd), |dir, part| dir.join(part));
                dir.join(year_file_name(year))
            }
            OutputTarget::Directory(dir) => dir.join(year_file_name(year)),
            OutputTarget::File(file) => file.clone(),
        }
    }
}

/// Computes the candidate path for `year`. Never fails.
pub fn resolve(year: i32, output: Option<&Path>, cwd: &Path) -> PathBuf {
    let target = OutputTarget::classify(output, cwd);
    log::debug!("output target for {year}: {target:?}");
    target.candidate(year, cwd)
}

/// Re-checks the candidate right before writing. A candidate that has become
/// a directory since it was resolved gets `<year>.json` appended.
pub fn settle(year: i32, candidate: &Path) -> PathBuf {
    if candidate.is_dir() {
        log::debug!("{} is a directory, writing {} inside it", candidate.display(), year_file_name(year));
        candidate.join(year_file_name(year))
    } else {
        candidate.to_path_buf()
    }
}

fn has_trailing_separator(path: &Path) -> bool {
    path.as_os_str()
        .to_string_lossy()
        .ends_with(std::path::is_separator)
}

pub fn year_file_name(year: i32) -> String {
    format!("{year}.json")
}

/// Joins `path` to `cwd` when relative and drops `.` and `..` lexically.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
