//! Error types for the external boundary
//!
//! The simulation itself cannot fail; only presentation, the rematch prompt
//! and settings loading can.

use std::io;
use std::path::PathBuf;

/// Frame sink failure. Fatal for the session.
#[derive(Debug, thiserror::Error)]
pub enum PresentError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("terminal too small: {cols}x{rows} (need at least {min_cols}x{min_rows})")]
    TooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },
}

/// Rematch answer could not be obtained. Treated as a decline.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("prompt I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("prompt unavailable")]
    Unavailable,
}

/// Settings file could not be used. Defaults apply.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
