mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logger = logging::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Bootstrap {
            host,
            overlays,
            overlay_dir,
        } => commands::bootstrap(
            &cli.store,
            &cli.namespace,
            &host,
            &overlays,
            overlay_dir.as_deref(),
        ),
        Commands::Show { registry, query } => {
            commands::show(&cli.store, &cli.namespace, registry, &query)
        }
        Commands::Welcome { set } => commands::welcome(&cli.store, &cli.namespace, set),
        Commands::Hosts => commands::list_hosts(),
    }
}
