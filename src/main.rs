use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use xdebugctl::valet::ValetRestarter;
use xdebugctl::{Cli, XdebugError, config, php, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            if let Some(hint) = err.hint() {
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<(), XdebugError> {
    let action = cli.action()?;
    let config = config::load()?;
    let active = php::active_ini_path()?;

    let outcome = run::run(
        &active,
        cli.variant(),
        action,
        cli.force,
        config.xdebug.restart_valet,
        &ValetRestarter,
    )?;

    println!("{outcome}");
    Ok(())
}

/// `--verbose` wins over the default filter; `RUST_LOG` wins over both.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
