use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// Class UUID; the class must exist
    pub class_id: String,

    /// YYYY-MM-DD
    pub session_date: String,

    /// scheduled (default), ongoing or completed
    #[serde(default)]
    pub status: Option<String>,
}
