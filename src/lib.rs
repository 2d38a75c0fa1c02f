//! Inspect and toggle the Xdebug load directive in PHP ini files.
//!
//! Xdebug is loaded by a single line in the active ini file:
//!
//! ```ini
//! zend_extension="xdebug.so"
//! ```
//!
//! Commenting that line out (a leading `;`) disables the extension. This
//! crate flips exactly that one line and nothing else — there is no ini
//! parser here, just prefix matching per line — and reports the state the
//! file is left in.
//!
//! ```sh
//! xdebugctl                # status of php.ini (default action)
//! xdebugctl --enable       # uncomment the directive
//! xdebugctl --cli --toggle # flip it in php-cli.ini
//! xdebugctl --cli --force  # copy php.ini into a new php-cli.ini first
//! ```
//!
//! # How a run works
//!
//! 1. The `php` binary on PATH is asked which ini file it loaded
//!    ([`php::active_ini_path`]).
//! 2. [`ini::resolve`] maps that to the file for the requested variant —
//!    the active file itself, or its `php.ini` ↔ `php-cli.ini` sibling,
//!    force-created from the active file's bytes with `--force`.
//! 3. [`directive`] rewrites the matching line (enable/disable/toggle) or
//!    leaves the file alone (status). Writes go through a temp file and
//!    an atomic rename, and the file is re-read before reporting, so the
//!    printed status always reflects what is actually on disk.
//! 4. When the default (web) variant changed and the
//!    `xdebug.restart_valet` config flag is on, `valet restart` runs as a
//!    best-effort side effect ([`valet`]). Its failure is a warning, not
//!    an error.
//!
//! All the pieces take explicit inputs — the active ini path, the parsed
//! [`Action`](cli::Action), a [`ProxyRestarter`](valet::ProxyRestarter)
//! implementation — so the full pipeline in [`run`](run::run) is
//! exercised against temp files in tests, with no PHP install and no
//! Valet anywhere near them.
//!
//! # Concurrency
//!
//! None. One invocation, one file, read-modify-write without locking.
//! Concurrent invocations against the same ini race (last writer wins);
//! the tool is meant for interactive single-operator use.

pub mod cli;
pub mod config;
pub mod directive;
pub mod error;
pub mod ini;
pub mod php;
pub mod run;
pub mod valet;

pub use cli::{Action, Cli};
pub use error::XdebugError;
pub use ini::{IniFile, Variant};
pub use run::{Outcome, run};
