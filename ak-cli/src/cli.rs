use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ak")]
#[command(about = "AuthKit command-line client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (overrides the configured base URL)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,
}
