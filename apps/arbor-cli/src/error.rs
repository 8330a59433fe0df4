//! Error type for the command line front end.

use arbor_records::RecordsError;
use arbor_tree::BuildError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read records: {0}")]
    Records(#[from] RecordsError),

    #[error("Records do not form a tree: {0}")]
    Build(#[from] BuildError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
