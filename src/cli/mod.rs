//! Command-line front end over the projection engine.

mod args;
mod commands;
pub mod output;

pub use args::{parse, suggest, Command};
pub use commands::{execute, execute_standalone, starter_budget, CommandContext};

use cashflow_config::ConfigManager;
use cashflow_engine::SystemClock;

use crate::errors::CashflowError;

/// Parses `args` (without the program name) and runs the command. Commands
/// other than `help` and `version` use the configuration found through
/// `$CASHFLOW_HOME`.
pub fn run_cli<I, S>(args: I) -> Result<(), CashflowError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokens: Vec<String> = args.into_iter().map(Into::into).collect();
    let command = match execute_standalone(parse(&tokens)?) {
        Ok(()) => return Ok(()),
        Err(command) => command,
    };

    let manager = ConfigManager::from_env()?;
    let config = manager.load()?;
    output::configure(config.color_output);

    let ctx = CommandContext {
        manager: &manager,
        config: &config,
        clock: &SystemClock,
    };
    execute(command, &ctx)
}
