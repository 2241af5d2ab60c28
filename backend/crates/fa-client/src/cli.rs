use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "fa")]
#[command(about = "FaceAttend command-line client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (defaults to NEXT_PUBLIC_API_BASE_URL, FA_API_BASE_URL or config.toml)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    pub(crate) verbose: bool,
}
