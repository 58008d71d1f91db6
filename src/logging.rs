//! File logging for the terminal host.
//!
//! Everything goes through the `log` facade. Verbose per-event output is
//! gated by categories, so `--log` alone only records session lifecycle,
//! clipboard trouble and no-op commands.

use crate::error::LogInitError;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::Path;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    /// Every kill ring mutation
    Ring,
    /// Yank anchors and replaced lengths
    Yank,
    /// Every key event routed by the host
    Keys,
}

impl LogCategory {
    fn bit(self) -> u8 {
        match self {
            LogCategory::Ring => 1,
            LogCategory::Yank => 1 << 1,
            LogCategory::Keys => 1 << 2,
        }
    }
}

static ENABLED: AtomicU8 = AtomicU8::new(0);

/// Install a debug-level file logger at `path` and enable `categories`.
pub fn init(path: &Path, categories: &[LogCategory]) -> Result<(), LogInitError> {
    let file = File::create(path).map_err(|source| LogInitError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Off)
        .build();
    WriteLogger::init(LevelFilter::Debug, config, file)?;

    for category in categories {
        enable(*category);
    }
    Ok(())
}

pub fn enable(category: LogCategory) {
    ENABLED.fetch_or(category.bit(), Ordering::Relaxed);
}

pub fn enabled(category: LogCategory) -> bool {
    ENABLED.load(Ordering::Relaxed) & category.bit() != 0
}
