//! CLI errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("option `{0}` needs a value")]
    MissingValue(&'static str),

    #[error("unsupported language standard `{0}` (expected c++03 or c++11)")]
    InvalidStandard(String),

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),

    #[error("cannot encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code: 2 for usage errors, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::UnknownOption(_) | CliError::MissingValue(_) | CliError::InvalidStandard(_) => 2,
            CliError::Read { .. } | CliError::Stdin(_) | CliError::Write(_) | CliError::Json(_) => 1,
        }
    }
}
