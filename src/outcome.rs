use std::{fmt, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Success,
    NetworkError,
    NotAnImage,
    WriteError,
    InvalidInput,
}

impl FetchStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            FetchStatus::Success => 0,
            FetchStatus::InvalidInput => 2,
            FetchStatus::NetworkError => 3,
            FetchStatus::NotAnImage => 4,
            FetchStatus::WriteError => 5,
        }
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchStatus::Success => "success",
            FetchStatus::NetworkError => "network error",
            FetchStatus::NotAnImage => "not an image",
            FetchStatus::WriteError => "write error",
            FetchStatus::InvalidInput => "invalid input",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Network or request error: {0}")]
    Network(String),

    #[error("The URL does not appear to be an image (Content-Type: {0}).")]
    NotAnImage(String),

    #[error("Failed to save image: {0}")]
    Write(String),
}

impl FetchError {
    pub fn status(&self) -> FetchStatus {
        match self {
            FetchError::InvalidInput(_) => FetchStatus::InvalidInput,
            FetchError::Network(_) => FetchStatus::NetworkError,
            FetchError::NotAnImage(_) => FetchStatus::NotAnImage,
            FetchError::Write(_) => FetchStatus::WriteError,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::Write(err.to_string())
    }
}

/// Outcome of one download attempt.
///
/// `path` is set only on success, `detail` only on failure.
#[derive(Debug)]
pub struct FetchResult {
    pub status: FetchStatus,
    pub path: Option<PathBuf>,
    pub detail: Option<String>,
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        self.status == FetchStatus::Success
    }
}

impl From<Result<PathBuf, FetchError>> for FetchResult {
    fn from(result: Result<PathBuf, FetchError>) -> Self {
        match result {
            Ok(path) => Self {
                status: FetchStatus::Success,
                path: Some(path),
                detail: None,
            },
            Err(err) => Self {
                status: err.status(),
                path: None,
                detail: Some(err.to_string()),
            },
        }
    }
}
