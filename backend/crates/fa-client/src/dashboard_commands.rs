use clap::Subcommand;

#[derive(Subcommand)]
pub enum DashboardCommands {
    /// Attendance overview for the dashboard
    Stats,
    /// Students with the best attendance
    Top {
        #[arg(long, default_value_t = 5)]
        limit: u32,
    },
}
