//! Ini file location and loading.
//!
//! PHP setups that split configuration between web and command-line
//! interpreters keep two sibling files: `php.ini` (the default variant)
//! and `php-cli.ini` (the CLI variant). The interpreter reports which one
//! it actually loaded; this module takes that **active path as an explicit
//! argument** and resolves the file for the variant the user asked for:
//!
//! - The active file already is the requested variant — use it directly.
//! - Otherwise swap the variant-specific fragment of the file name to get
//!   the sibling path (`php.ini` ↔ `php-cli.ini`).
//! - A missing sibling is an error, unless `force_create` is set, in which
//!   case the active file's exact bytes are copied into place first.
//!
//! Keeping the active path a parameter (instead of querying the
//! interpreter in here) means every resolution rule is testable against
//! plain temp files. The one place that talks to a real `php` binary is
//! [`php`](crate::php).

use std::path::{Path, PathBuf};

use crate::error::XdebugError;

/// Which of the two sibling ini files is being targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// `php-cli.ini`, loaded by command-line invocations.
    Cli,
    /// `php.ini`, loaded by the web/default interpreter.
    Default,
}

impl Variant {
    /// The variant-specific file name fragment used for sibling substitution.
    pub fn fragment(self) -> &'static str {
        match self {
            Variant::Cli => "php-cli.ini",
            Variant::Default => "php.ini",
        }
    }

    /// Classify a path by its file name. Anything ending in `cli.ini` is
    /// the CLI variant; everything else is the default one.
    pub fn of_path(path: &Path) -> Variant {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if name.ends_with("cli.ini") {
            Variant::Cli
        } else {
            Variant::Default
        }
    }

    /// Human-readable name used in creation messages.
    pub fn describe(self) -> &'static str {
        match self {
            Variant::Cli => "CLI",
            Variant::Default => "default",
        }
    }
}

/// A resolved ini file with its full text loaded.
#[derive(Debug)]
pub struct IniFile {
    pub path: PathBuf,
    pub content: String,
    pub variant: Variant,
}

impl IniFile {
    /// Read the file at `path` into memory.
    pub fn load(path: PathBuf, variant: Variant) -> Result<IniFile, XdebugError> {
        let content = std::fs::read_to_string(&path).map_err(|source| XdebugError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(IniFile {
            path,
            content,
            variant,
        })
    }

    /// Re-read `content` from disk, after a write.
    pub fn reload(&mut self) -> Result<(), XdebugError> {
        self.content = std::fs::read_to_string(&self.path).map_err(|source| XdebugError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Base file name for status lines (`php.ini`, not the full path).
    pub fn base_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("php.ini")
    }
}

/// Outcome of [`resolve`]: the loaded file, plus the path of a sibling
/// that had to be force-created (so the caller can report it).
#[derive(Debug)]
pub struct Resolved {
    pub ini: IniFile,
    pub created: Option<PathBuf>,
}

/// Compute the sibling path for `requested` given the active file's path.
///
/// Substitutes the active variant's fragment in the file name only; the
/// directory is always shared between siblings.
fn sibling_path(active: &Path, requested: Variant) -> PathBuf {
    let active_variant = Variant::of_path(active);
    let name = active.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let sibling = name.replace(active_variant.fragment(), requested.fragment());
    active.with_file_name(sibling)
}

/// Resolve and load the ini file for `requested`.
///
/// `active` is the path the running interpreter reports as loaded. When
/// the requested variant's file does not exist and `force_create` is set,
/// it is created by copying the active file's exact bytes.
pub fn resolve(
    active: &Path,
    requested: Variant,
    force_create: bool,
) -> Result<Resolved, XdebugError> {
    if Variant::of_path(active) == requested {
        tracing::debug!(path = %active.display(), "active ini matches requested variant");
        let ini = IniFile::load(active.to_path_buf(), requested)?;
        return Ok(Resolved { ini, created: None });
    }

    let sibling = sibling_path(active, requested);
    let mut created = None;

    if !sibling.exists() {
        if !force_create {
            return Err(XdebugError::IniNotFound { path: sibling });
        }
        std::fs::copy(active, &sibling).map_err(|source| XdebugError::Io {
            path: sibling.clone(),
            source,
        })?;
        tracing::debug!(from = %active.display(), to = %sibling.display(), "generated ini file");
        created = Some(sibling.clone());
    }

    let ini = IniFile::load(sibling, requested)?;
    Ok(Resolved { ini, created })
}
