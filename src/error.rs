use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HolidayError {
    #[error("no holiday data published for {year}")]
    NotFound { year: i32 },

    #[error("download of {url} failed: {}", describe_transport(.status, .source))]
    Transport {
        url: String,
        status: Option<StatusCode>,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("response is not valid JSON: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("download cancelled")]
    UserCancelled,

    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HolidayError>;

impl HolidayError {
    /// Process exit status for this error. Cancelling is not a failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            HolidayError::UserCancelled => 0,
            _ => 1,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        HolidayError::Io {
            path: path.into(),
            source,
        }
    }
}

fn describe_transport(status: &Option<StatusCode>, source: &Option<reqwest::Error>) -> String {
    match (status, source) {
        (Some(status), _) => format!("http status {status}"),
        (None, Some(e)) => e.to_string(),
        (None, None) => "unknown transport error".to_string(),
    }
}
