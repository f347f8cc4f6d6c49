// src/error.rs

use std::path::PathBuf;

/// Everything that can stop a run. A rejected submission is not in here:
/// it is reported as [`crate::tracker::Submission::Rejected`] and the run goes on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("headers different than expected: first column is {found:?}, expected \"Family\"")]
    UnexpectedHeader { found: String },

    #[error("opening control file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reading control file: {0}")]
    Csv(#[from] csv::Error),

    #[error(
        "malformed control row{}: expected 18 fields, found {found}",
        .line.map(|l| format!(" at line {l}")).unwrap_or_default()
    )]
    MalformedRow { line: Option<u64>, found: usize },

    #[error("transport failure talking to the issue tracker: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("encoding issue payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for the errors raised before any submission is attempted.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Config(_) | Error::UnexpectedHeader { .. } | Error::Open { .. }
        )
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
