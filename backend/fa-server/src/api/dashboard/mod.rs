pub mod dashboard;
pub mod dashboard_stats_response;
pub mod top_students_query;
