//! Asking the active php interpreter which ini file it loaded.
//!
//! This is the only module that touches the ambient environment. The
//! resolver in [`ini`](crate::ini) takes the result as a plain path, so
//! everything downstream stays deterministic in tests.

use std::path::PathBuf;
use std::process::Command;

use crate::error::XdebugError;

/// Query `php_ini_loaded_file()` from the `php` binary on PATH.
///
/// Returns the path of the ini file the interpreter actually loaded.
/// An interpreter running without any ini file prints nothing, which is
/// reported as [`XdebugError::NoLoadedIni`].
pub fn active_ini_path() -> Result<PathBuf, XdebugError> {
    let php = which::which("php").map_err(|source| XdebugError::PhpNotFound { source })?;
    tracing::debug!(php = %php.display(), "querying loaded ini file");

    let output = Command::new(&php)
        .args(["-r", "echo php_ini_loaded_file();"])
        .output()
        .map_err(|source| XdebugError::PhpQuery { source })?;

    let reported = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if reported.is_empty() {
        return Err(XdebugError::NoLoadedIni);
    }
    Ok(PathBuf::from(reported))
}
