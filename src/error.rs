//! Error types for the kill ring, clipboard, configuration, logging and session.
//!
//! Only `KillRingError` is meant to reach callers of the editing core.
//! Clipboard errors are logged and dropped where they occur.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KillRingError {
    #[error("kill ring size must be at least 1, got {size}")]
    InvalidArgument { size: usize },
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("system clipboard is unavailable")]
    Unavailable,

    #[error("clipboard access failed: {0}")]
    Access(#[from] arboard::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to write config file at {config_path}: {source}")]
    Write {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("kill_ring.max_size in {config_path} must be at least 1")]
    InvalidMaxSize { config_path: PathBuf },
}

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("failed to open log file at {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("logger already installed: {0}")]
    Install(#[from] log::SetLoggerError),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    KillRing(#[from] KillRingError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
