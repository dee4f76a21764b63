use geno_config::GenoConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, config: &GenoConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Convert(args) => commands::convert::handle(&args, config, flags),
        Commands::Inspect(args) => commands::inspect::handle(&args, flags),
    }
}
