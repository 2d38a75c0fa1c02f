//! The per-invocation pipeline: locate, act, reload, report, side effect.
//!
//! [`run`] operates on explicit inputs (the active ini path, the parsed
//! action, the restart flag, a [`ProxyRestarter`]) and performs no
//! environment lookups of its own, so the whole pipeline runs against
//! temp files in tests. Steps:
//!
//! 1. Resolve and load the target ini file (force-creating it if asked)
//! 2. Apply the action — a rewrite for enable/disable/toggle, nothing
//!    for status
//! 3. Report the state the reloaded file actually has
//! 4. Restart the dev proxy when the change warrants it

use std::fmt;
use std::path::{Path, PathBuf};

use crate::cli::Action;
use crate::directive;
use crate::error::XdebugError;
use crate::ini::{self, Variant};
use crate::valet::ProxyRestarter;

/// What an invocation did, for display. Returned instead of printed so
/// tests can assert on it.
#[derive(Debug)]
pub struct Outcome {
    /// Directive state after the action, read back from disk.
    pub enabled: bool,
    /// Base name of the resolved ini file (`php.ini` / `php-cli.ini`).
    pub file_name: String,
    /// Set when `--force` generated the target file.
    pub created: Option<(Variant, PathBuf)>,
    /// Lines changed by a mutating action. `None` for status.
    pub changed: Option<usize>,
    /// Non-fatal complaint from the proxy restart, if one ran and failed.
    pub restart_warning: Option<String>,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some((variant, path)) = &self.created {
            writeln!(
                f,
                "Generated new {} ini file at {}",
                variant.describe(),
                path.display()
            )?;
        }
        if self.changed == Some(0) {
            writeln!(f, "Nothing to change in {} (directive not found)", self.file_name)?;
        }
        write!(
            f,
            "Xdebug is {} ({})",
            if self.enabled { "enabled" } else { "disabled" },
            self.file_name
        )?;
        if let Some(warning) = &self.restart_warning {
            write!(f, "\nWarning: {warning}")?;
        }
        Ok(())
    }
}

/// Execute one invocation against the ini file for `variant`.
///
/// `active` is the path the running interpreter reports as loaded (see
/// [`php::active_ini_path`](crate::php::active_ini_path)). The restart
/// side effect fires only when the action rewrote the **default** (web)
/// variant's file and `restart_valet` authorizes it; its failure becomes
/// a warning on the [`Outcome`], never an error.
pub fn run(
    active: &Path,
    variant: Variant,
    action: Action,
    force: bool,
    restart_valet: bool,
    restarter: &dyn ProxyRestarter,
) -> Result<Outcome, XdebugError> {
    let resolved = ini::resolve(active, variant, force)?;
    let mut ini = resolved.ini;
    let created = resolved.created.map(|path| (variant, path));

    let changed = match action {
        Action::Status => None,
        Action::Enable => Some(directive::set_directive(&mut ini, true)?),
        Action::Disable => Some(directive::set_directive(&mut ini, false)?),
        Action::Toggle => {
            let enable = !directive::directive_enabled(&ini.content);
            Some(directive::set_directive(&mut ini, enable)?)
        }
    };

    let enabled = directive::directive_enabled(&ini.content);

    let mut restart_warning = None;
    if action.mutates() && variant == Variant::Default && restart_valet {
        tracing::debug!("restarting dev proxy after directive change");
        if let Err(warning) = restarter.restart() {
            tracing::warn!(%warning, "proxy restart failed");
            restart_warning = Some(warning);
        }
    }

    Ok(Outcome {
        enabled,
        file_name: ini.base_name().to_string(),
        created,
        changed,
        restart_warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valet::stub::RecordingRestarter;
    use std::fs;
    use tempfile::TempDir;

    const COMMENTED_FILE: &str = "[PHP]\nmemory_limit = 512M\n;zend_extension=\"xdebug.so\"\n";

    fn active_ini(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("php.ini");
        fs::write(&path, content).unwrap();
        path
    }

    fn quiet() -> RecordingRestarter {
        RecordingRestarter::default()
    }

    #[test]
    fn enable_reports_enabled_with_base_name() {
        let dir = TempDir::new().unwrap();
        let active = active_ini(&dir, COMMENTED_FILE);

        let outcome = run(
            &active,
            Variant::Default,
            Action::Enable,
            false,
            false,
            &quiet(),
        )
        .unwrap();

        assert!(outcome.enabled);
        assert_eq!(outcome.changed, Some(1));
        assert_eq!(outcome.to_string(), "Xdebug is enabled (php.ini)");
        assert!(fs::read_to_string(&active)
            .unwrap()
            .contains("\nzend_extension=\"xdebug.so\"\n"));
    }

    #[test]
    fn status_reads_without_writing() {
        let dir = TempDir::new().unwrap();
        let active = active_ini(&dir, COMMENTED_FILE);
        let before = fs::metadata(&active).unwrap().modified().unwrap();

        let outcome = run(
            &active,
            Variant::Default,
            Action::Status,
            false,
            true,
            &quiet(),
        )
        .unwrap();

        assert!(!outcome.enabled);
        assert_eq!(outcome.changed, None);
        assert_eq!(outcome.to_string(), "Xdebug is disabled (php.ini)");
        assert_eq!(fs::read_to_string(&active).unwrap(), COMMENTED_FILE);
        assert_eq!(fs::metadata(&active).unwrap().modified().unwrap(), before);
    }

    #[test]
    fn toggle_twice_restores_original_content() {
        let dir = TempDir::new().unwrap();
        let active = active_ini(&dir, COMMENTED_FILE);

        let first = run(
            &active,
            Variant::Default,
            Action::Toggle,
            false,
            false,
            &quiet(),
        )
        .unwrap();
        assert!(first.enabled);

        let second = run(
            &active,
            Variant::Default,
            Action::Toggle,
            false,
            false,
            &quiet(),
        )
        .unwrap();
        assert!(!second.enabled);
        assert_eq!(second.to_string(), "Xdebug is disabled (php.ini)");
        assert_eq!(fs::read_to_string(&active).unwrap(), COMMENTED_FILE);
    }

    #[test]
    fn mutation_without_matching_line_reports_nothing_to_change() {
        let dir = TempDir::new().unwrap();
        let active = active_ini(&dir, "[PHP]\nmemory_limit = 512M\n");

        let outcome = run(
            &active,
            Variant::Default,
            Action::Enable,
            false,
            false,
            &quiet(),
        )
        .unwrap();

        assert_eq!(outcome.changed, Some(0));
        let rendered = outcome.to_string();
        assert!(rendered.contains("Nothing to change in php.ini"));
        assert!(rendered.ends_with("Xdebug is disabled (php.ini)"));
    }

    #[test]
    fn force_creates_cli_sibling_and_reports_it() {
        let dir = TempDir::new().unwrap();
        let active = active_ini(&dir, COMMENTED_FILE);

        let outcome = run(
            &active,
            Variant::Cli,
            Action::Enable,
            true,
            true,
            &quiet(),
        )
        .unwrap();

        assert!(outcome.enabled);
        assert_eq!(outcome.file_name, "php-cli.ini");
        let rendered = outcome.to_string();
        assert!(rendered.starts_with("Generated new CLI ini file at "));
        assert!(rendered.ends_with("Xdebug is enabled (php-cli.ini)"));
        // The active default file is untouched.
        assert_eq!(fs::read_to_string(&active).unwrap(), COMMENTED_FILE);
    }

    #[test]
    fn missing_sibling_without_force_fails_before_any_write() {
        let dir = TempDir::new().unwrap();
        let active = active_ini(&dir, COMMENTED_FILE);

        let err = run(
            &active,
            Variant::Cli,
            Action::Enable,
            false,
            false,
            &quiet(),
        )
        .unwrap_err();

        assert!(matches!(err, XdebugError::IniNotFound { .. }));
        assert_eq!(fs::read_to_string(&active).unwrap(), COMMENTED_FILE);
        assert!(!dir.path().join("php-cli.ini").exists());
    }

    // --- restart gating ---

    #[test]
    fn restart_fires_for_default_variant_mutation_when_authorized() {
        let dir = TempDir::new().unwrap();
        let active = active_ini(&dir, COMMENTED_FILE);
        let restarter = quiet();

        run(
            &active,
            Variant::Default,
            Action::Enable,
            false,
            true,
            &restarter,
        )
        .unwrap();
        assert!(restarter.called.get());
    }

    #[test]
    fn restart_skipped_without_config_flag() {
        let dir = TempDir::new().unwrap();
        let active = active_ini(&dir, COMMENTED_FILE);
        let restarter = quiet();

        run(
            &active,
            Variant::Default,
            Action::Enable,
            false,
            false,
            &restarter,
        )
        .unwrap();
        assert!(!restarter.called.get());
    }

    #[test]
    fn restart_skipped_for_cli_variant() {
        let dir = TempDir::new().unwrap();
        let active = active_ini(&dir, COMMENTED_FILE);
        fs::write(dir.path().join("php-cli.ini"), COMMENTED_FILE).unwrap();
        let restarter = quiet();

        run(
            &active,
            Variant::Cli,
            Action::Enable,
            false,
            true,
            &restarter,
        )
        .unwrap();
        assert!(!restarter.called.get());
    }

    #[test]
    fn restart_skipped_for_status() {
        let dir = TempDir::new().unwrap();
        let active = active_ini(&dir, COMMENTED_FILE);
        let restarter = quiet();

        run(
            &active,
            Variant::Default,
            Action::Status,
            false,
            true,
            &restarter,
        )
        .unwrap();
        assert!(!restarter.called.get());
    }

    #[test]
    fn restart_failure_becomes_a_warning_not_an_error() {
        let dir = TempDir::new().unwrap();
        let active = active_ini(&dir, COMMENTED_FILE);
        let restarter = RecordingRestarter {
            fail_with: Some("valet restart exited with exit status: 1"),
            ..Default::default()
        };

        let outcome = run(
            &active,
            Variant::Default,
            Action::Enable,
            false,
            true,
            &restarter,
        )
        .unwrap();

        assert!(outcome.enabled);
        let rendered = outcome.to_string();
        assert!(rendered.contains("Xdebug is enabled (php.ini)"));
        assert!(rendered.contains("Warning: valet restart exited with"));
    }
}
