use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateSessionRequest {
    #[serde(default)]
    pub session_date: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub attendance_marked: Option<bool>,
}
