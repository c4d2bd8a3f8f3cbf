use serde::{Deserialize, Serialize};

/// Response of `POST /api/screen/{id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
}

impl SaveResponse {
    pub fn saved() -> Self {
        SaveResponse {
            success: true,
            message: "Configuration saved".into(),
        }
    }
}

/// Response of `POST /api/upload`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    /// Public URL of the stored file.
    pub url: String,
    /// Name the file was stored under (timestamp + token + sanitized name).
    pub filename: String,
    /// `image` or `video`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Response of `POST /api/generate/{id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub message: String,
    /// Public viewing URL of the generated page.
    pub url: String,
    /// Filesystem path the page was written to.
    pub path: String,
}

/// Login form body (`POST /login`).
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub password: String,
}
