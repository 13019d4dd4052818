use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
}
