use clap::Subcommand;

#[derive(Subcommand)]
pub enum AttendanceCommands {
    /// Mark one student manually
    Mark {
        /// Student UUID
        student_id: String,
        #[arg(long)]
        session_id: String,
        /// present, absent or late
        #[arg(long, default_value = "present")]
        status: String,
    },
    /// Attendance history for a student
    Student { id: String },
    /// Attendance sheet for a session
    Session { id: String },
}
