// Copyright (c) 2026 rezky_nightky

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not running in a terminal")]
    NotATerminal,

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install logger: {0}")]
    Logger(String),

    #[error("{0}")]
    InvalidArgument(String),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}
