//! Command-line interface.
//!
//! The action flags are deliberately *not* wired as a clap `ArgGroup`:
//! the tool owns the conflict message and the exit code (1, like every
//! other failure) instead of clap's usage error and exit code 2. The
//! flags parse freely and [`Cli::action`] enforces mutual exclusion.

use clap::Parser;

use crate::error::XdebugError;
use crate::ini::Variant;

/// What a single invocation does to the directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Enable,
    Disable,
    Toggle,
    Status,
}

impl Action {
    /// Whether this action rewrites the ini file.
    pub fn mutates(self) -> bool {
        !matches!(self, Action::Status)
    }
}

/// Handy tool to manage the Xdebug load directive.
#[derive(Parser, Debug)]
#[command(name = "xdebugctl", version)]
pub struct Cli {
    /// Operate on php-cli.ini instead of php.ini.
    #[arg(long)]
    pub cli: bool,

    /// Generate the target ini file (by copying the active one) if it
    /// does not exist.
    #[arg(long)]
    pub force: bool,

    /// Enable Xdebug.
    #[arg(long)]
    pub enable: bool,

    /// Disable Xdebug.
    #[arg(long)]
    pub disable: bool,

    /// Toggle Xdebug based on its current state.
    #[arg(long)]
    pub toggle: bool,

    /// Show Xdebug status (the default action).
    #[arg(long)]
    pub status: bool,

    /// Log debug detail to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The ini variant this invocation targets.
    pub fn variant(&self) -> Variant {
        if self.cli { Variant::Cli } else { Variant::Default }
    }

    /// Resolve the action flags into a single [`Action`].
    ///
    /// No flag means `Status`; more than one flag is a usage error.
    pub fn action(&self) -> Result<Action, XdebugError> {
        let given = [
            (self.enable, Action::Enable),
            (self.disable, Action::Disable),
            (self.toggle, Action::Toggle),
            (self.status, Action::Status),
        ];

        let mut selected: Vec<Action> = given
            .into_iter()
            .filter_map(|(flag, action)| flag.then_some(action))
            .collect();

        match selected.len() {
            0 => Ok(Action::Status),
            1 => Ok(selected.remove(0)),
            _ => Err(XdebugError::ConflictingActions),
        }
    }
}
