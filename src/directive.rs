//! Directive toggling: rewrite the Xdebug load line while preserving the
//! rest of the file byte-for-byte.
//!
//! The original tool built a regex out of the directive string and ran a
//! multiline substitution over the whole file. Dynamic patterns assembled
//! from escaped literals are fragile, so this module works line by line
//! instead: a line matches when its text **starts with** the directive
//! form, and a rewrite swaps that prefix and keeps the line's remainder.
//! This reproduces the `/^…/m` prefix semantics without any pattern
//! compilation.
//!
//! The pure functions here never touch the filesystem. [`set_directive`]
//! is the I/O wrapper: it rewrites in memory, writes the whole file via a
//! temp file + atomic rename (a failed write can never leave a truncated
//! ini behind), and reloads from disk so the caller reports what the file
//! actually contains.

use std::io::Write;
use std::path::Path;

use crate::error::XdebugError;
use crate::ini::IniFile;

/// The directive line in its active (loaded) form.
pub const ACTIVE: &str = "zend_extension=\"xdebug.so\"";

/// The directive line in its commented-out (disabled) form.
pub const COMMENTED: &str = ";zend_extension=\"xdebug.so\"";

/// True iff some line of `content` starts with the active directive form.
pub fn directive_enabled(content: &str) -> bool {
    content.lines().any(|line| line.starts_with(ACTIVE))
}

/// Pure function: replace the `from` prefix with `to` on every line that
/// starts with `from`, keeping each line's remainder and every other byte
/// of the file (including the presence or absence of a final newline).
///
/// Returns the rewritten content and the number of lines changed. Zero is
/// a legitimate result — the caller decides whether to mention it.
pub fn rewrite_lines(content: &str, from: &str, to: &str) -> (String, usize) {
    let mut out = String::with_capacity(content.len());
    let mut changed = 0;

    // split_inclusive keeps each segment's trailing '\n', so reassembly
    // is byte-exact for untouched lines.
    for segment in content.split_inclusive('\n') {
        if segment.starts_with(from) {
            out.push_str(to);
            out.push_str(&segment[from.len()..]);
            changed += 1;
        } else {
            out.push_str(segment);
        }
    }

    (out, changed)
}

/// Write `content` to `path` through a temp file in the same directory,
/// then atomically rename over the original.
fn write_atomic(path: &Path, content: &str) -> Result<(), XdebugError> {
    let io_err = |source| XdebugError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(content.as_bytes()).map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

/// Rewrite the ini file so the directive ends up in the requested state,
/// write it back, and reload from disk.
///
/// Returns the number of lines changed. A file that contains neither form
/// of the directive yields zero changes and is left untouched on disk.
pub fn set_directive(ini: &mut IniFile, enable: bool) -> Result<usize, XdebugError> {
    let (from, to) = if enable {
        (COMMENTED, ACTIVE)
    } else {
        (ACTIVE, COMMENTED)
    };

    let (rewritten, changed) = rewrite_lines(&ini.content, from, to);
    tracing::debug!(path = %ini.path.display(), changed, enable, "rewrote directive");

    if changed > 0 {
        write_atomic(&ini.path, &rewritten)?;
    }
    // Reload even when nothing matched: reported status must reflect the
    // live on-disk content, not the in-memory copy.
    ini.reload()?;
    Ok(changed)
}
