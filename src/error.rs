use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced while loading, scoring or writing a carer batch.
///
/// Every variant is fatal to the run; nothing in the crate retries.
#[derive(Debug, Error)]
pub enum RatingError {
    /// A row is missing a column or a numeric cell does not parse.
    #[error("malformed input at line {line}: {message}")]
    MalformedInput { line: u64, message: String },

    /// A record was assembled without one of its required fields.
    #[error("carer record is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RatingError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = RatingError> = std::result::Result<T, E>;
