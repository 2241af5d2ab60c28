mod error;
mod list_students_query;
