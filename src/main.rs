use clap::Parser;

use herald::cli::commands;
use herald::cli::{Cli, Commands, ConfigAction};
use herald::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);

    match cli.command {
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init { force, path } => commands::config::handle_init(force, path).await,
            ConfigAction::Show { path } => commands::config::handle_show(path).await,
            ConfigAction::Validate { path } => commands::config::handle_validate(path).await,
            ConfigAction::Path => commands::config::handle_path().await,
        },
        None => {
            println!("herald - personal news digest aggregator");
            println!("Use --help to see available commands");
            Ok(())
        }
    }
}
