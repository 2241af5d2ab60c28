use serde::Deserialize;

pub const DEFAULT_TOP_STUDENTS: usize = 5;

#[derive(Debug, Deserialize)]
pub struct TopStudentsQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_TOP_STUDENTS
}
