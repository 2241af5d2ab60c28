use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum StudentCommands {
    /// List students
    List {
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = 100)]
        limit: u32,
    },
    /// Get a student by UUID or student code
    Get { id: String },
    /// Create a student
    Create {
        /// External student code
        #[arg(long)]
        student_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        class_name: Option<String>,
    },
    /// Delete a student with their embeddings and attendance
    Delete { id: String },
    /// Enroll a face embedding read from a JSON array of floats
    Enroll {
        id: String,
        #[arg(long)]
        embedding: PathBuf,
        #[arg(long)]
        photo_url: Option<String>,
    },
}
