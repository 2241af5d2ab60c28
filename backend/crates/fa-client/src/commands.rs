use crate::{
    attendance_commands::AttendanceCommands, class_commands::ClassCommands,
    dashboard_commands::DashboardCommands, log_commands::LogCommands,
    session_commands::SessionCommands, student_commands::StudentCommands,
};

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Check that the backend is reachable
    Health,

    /// Log in and store the access token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "FA_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create a teacher account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "FA_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored access token
    Logout,

    /// Show whether a token is stored and which links are available
    Status,

    /// Show the identity behind the stored token
    Whoami,

    /// Student operations
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },

    /// Class operations
    Class {
        #[command(subcommand)]
        action: ClassCommands,
    },

    /// Class session operations
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },

    /// Attendance operations
    Attendance {
        #[command(subcommand)]
        action: AttendanceCommands,
    },

    /// Take attendance from detector output
    Recognize {
        /// Class session ID (UUID)
        #[arg(long)]
        session_id: String,
        /// JSON file with one image's detections; repeat per image
        #[arg(long = "image", required = true)]
        images: Vec<PathBuf>,
    },

    /// Recognition log operations
    Logs {
        #[command(subcommand)]
        action: LogCommands,
    },

    /// Dashboard statistics
    Dashboard {
        #[command(subcommand)]
        action: DashboardCommands,
    },
}
