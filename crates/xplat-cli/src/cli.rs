use clap::{Parser, Subcommand};
use std::path::PathBuf;
use xplat_core::OutputFormat;

#[derive(Parser)]
#[command(name = "xplat")]
#[command(about = "Resolve native project configuration for cross-platform apps")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve and print the project's iOS configuration
    Config {
        /// Project root (defaults to CWD)
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Resolve a native dependency's iOS configuration
    Dependency {
        /// Path to the dependency package
        path: PathBuf,

        /// Host project root (defaults to CWD)
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Check the configuration file against the schema
    Validate {
        /// Project root (defaults to CWD)
        #[arg(long)]
        root: Option<PathBuf>,
    },
}
