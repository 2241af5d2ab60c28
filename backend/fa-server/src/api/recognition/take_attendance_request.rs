use fa_core::FaceDetection;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TakeAttendanceRequest {
    pub class_session_id: String,

    /// Detector output, one list of faces per classroom photo
    pub images: Vec<Vec<FaceDetection>>,
}
