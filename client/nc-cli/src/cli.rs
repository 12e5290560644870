use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "nc")]
#[command(about = "NutriChecker identity and push registration tool")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Registration endpoint URL (overrides config)
    #[arg(long, global = true)]
    pub(crate) endpoint: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
