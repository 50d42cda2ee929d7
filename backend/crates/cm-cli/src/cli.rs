use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Clinic management demo against in-memory services")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
