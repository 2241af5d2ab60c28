use serde::Deserialize;

/// Body for both create and update; update replaces the roster
#[derive(Debug, Deserialize)]
pub struct ClassRequest {
    pub class_name: String,

    /// Student UUIDs
    #[serde(default)]
    pub student_ids: Vec<String>,
}
