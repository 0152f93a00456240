use anyhow::Result;
use clap::Parser;

mod cli;
mod config_cmds;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing (output to stderr, initialize only once)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();
    let format = cli.format.clone();

    match cli.command {
        Commands::Config { root } => config_cmds::handle_config(root, format),
        Commands::Dependency { path, root } => config_cmds::handle_dependency(path, root, format),
        Commands::Validate { root } => config_cmds::handle_validate(root),
    }
}
