use clap::Subcommand;

#[derive(Subcommand)]
pub enum ClassCommands {
    /// List all classes
    List,
    /// Get a class with its roster
    Get { id: String },
    /// Create a class
    Create {
        #[arg(long)]
        name: String,
        /// Student UUIDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        students: Vec<String>,
    },
    /// Delete a class
    Delete { id: String },
}
