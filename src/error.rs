use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XdebugError {
    #[error("Only one action flag is allowed (--enable, --disable, --toggle, --status)")]
    ConflictingActions,

    #[error("Ini file not found at {path}")]
    IniNotFound { path: PathBuf },

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No `php` interpreter found on PATH: {source}")]
    PhpNotFound { source: which::Error },

    #[error("Failed to run the php interpreter: {source}")]
    PhpQuery { source: std::io::Error },

    #[error("The active php interpreter reports no loaded ini file")]
    NoLoadedIni,

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),
}

impl XdebugError {
    /// A follow-up hint the CLI prints under the error line, when one exists.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            XdebugError::IniNotFound { .. } => Some("Use --force to generate the file"),
            XdebugError::NoLoadedIni => {
                Some("Check that php runs with a loaded configuration file (php --ini)")
            }
            _ => None,
        }
    }
}
