//! Valet restart side effect, behind a port so tests never spawn anything.

use std::process::Command;

/// Port for the "restart the local dev proxy" side effect.
///
/// [`run`](crate::run::run) decides *whether* to restart; implementors
/// only know *how*. Failure is reported back as an `Err` message the
/// caller turns into a warning — a broken Valet install should not fail
/// the directive change that already happened.
pub trait ProxyRestarter {
    fn restart(&self) -> Result<(), String>;
}

/// Real implementation: spawn `valet restart` and wait for it.
///
/// Blocks until the process returns; there is deliberately no timeout
/// (parity with the original tool — a hung Valet hangs the invocation).
pub struct ValetRestarter;

impl ProxyRestarter for ValetRestarter {
    fn restart(&self) -> Result<(), String> {
        eprintln!("Restarting valet...");
        let status = Command::new("valet")
            .arg("restart")
            .status()
            .map_err(|e| format!("could not run valet: {e}"))?;

        if status.success() {
            Ok(())
        } else {
            Err(format!("valet restart exited with {status}"))
        }
    }
}
