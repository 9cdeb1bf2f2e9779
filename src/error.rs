use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which side of the optimization a size measurement belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSide {
    Original,
    Optimized,
}

impl fmt::Display for SizeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeSide::Original => write!(f, "original"),
            SizeSide::Optimized => write!(f, "new"),
        }
    }
}

#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Error reading {side} file size ({}): {source}", path.display())]
    ReadSize {
        side: SizeSide,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error optimizing PDF: {0}")]
    Optimization(#[from] EngineError),

    #[error("Failed to write report: {0}")]
    Report(std::io::Error),
}

impl OptimizeError {
    pub fn invalid(message: impl Into<String>) -> Self {
        OptimizeError::InvalidArgument(message.into())
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("failed to execute {binary}: {source}")]
    Spawn {
        binary: String,
        source: std::io::Error,
    },

    #[error("{binary} failed (exit code {code}): {stderr}")]
    Failed {
        binary: String,
        code: String,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
