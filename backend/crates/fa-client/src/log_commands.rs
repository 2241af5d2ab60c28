use clap::Subcommand;

#[derive(Subcommand)]
pub enum LogCommands {
    /// All recognition logs, newest first
    All,
    /// Logs for a class
    Class { id: String },
    /// Logs for a session
    Session { id: String },
}
