use clap::Subcommand;

#[derive(Subcommand)]
pub enum SessionCommands {
    /// List sessions, optionally for one class
    List {
        #[arg(long)]
        class_id: Option<String>,
    },
    /// Get a session by ID
    Get { id: String },
    /// Schedule a session
    Create {
        #[arg(long)]
        class_id: String,
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// scheduled, ongoing or completed
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a session
    Delete { id: String },
}
