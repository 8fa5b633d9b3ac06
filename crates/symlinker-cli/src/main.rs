mod commands;
mod logging;
mod progress;

use std::env;
use std::io::{self, StdinLock, Stdout};
use std::process;

use clap::Parser;
use colored::*;
use commands::{Cli, Commands};
use console::Term;
use dotenv::dotenv;
use progress::CliReporter;
use symlinker_core::{Error, LinkManager, Session};
use tracing::{debug, error};

type StdioSession<'a> = Session<'a, StdinLock<'static>, Stdout>;

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match symlinker_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();
    let manager = LinkManager::new(config);
    let reporter = CliReporter::new();

    match args.command {
        Some(Commands::Create { name }) => {
            run_action(&manager, &reporter, |session| session.create_named(&name))?
        }
        Some(Commands::Delete { name }) => {
            run_action(&manager, &reporter, |session| session.delete_named(&name))?
        }
        Some(Commands::Report) => run_action(&manager, &reporter, |session| session.report())?,
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:#?}", manager.config());
        }
        None => run_interactive(&manager, &reporter)?,
    }

    Ok(())
}

fn run_interactive(manager: &LinkManager, reporter: &CliReporter) -> anyhow::Result<()> {
    let _ = Term::stdout().clear_screen();
    println!("Current Working Directory: {}", env::current_dir()?.display());

    let mut session = Session::new(manager, reporter, io::stdin().lock(), io::stdout());
    session.run()?;
    Ok(())
}

/// Runs a single action outside the menu. Action errors are printed and the
/// process still exits successfully.
fn run_action<F>(manager: &LinkManager, reporter: &CliReporter, action: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut StdioSession<'_>) -> Result<(), Error>,
{
    let mut session = Session::new(manager, reporter, io::stdin().lock(), io::stdout());
    match action(&mut session) {
        Ok(()) | Err(Error::InputClosed) => Ok(()),
        Err(err) if err.is_recoverable() => {
            debug!("Action failed: {}", err);
            eprintln!("{} {}", "Error:".red(), err);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
