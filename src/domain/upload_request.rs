use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequestBody {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    /// Base64-encoded file contents.
    pub data: Option<String>,
}
