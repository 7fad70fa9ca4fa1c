use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "herald", author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize configuration file from the documented example
    Init {
        /// Overwrite an existing config file without asking
        #[arg(short, long)]
        force: bool,
        /// Config file location (default: ./config.yaml)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the effective configuration
    Show {
        /// Config file location (default: ./config.yaml)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Validate the configuration and report every violation
    Validate {
        /// Config file location (default: ./config.yaml)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Print the resolved config file path
    Path,
}
