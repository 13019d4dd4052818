use std::time::Duration;

use crate::domain::{ObjectStore, ObjectStoreError};
use crate::utils::Config;

/// Upload passthrough to the managed bucket: save the bytes, hand back the
/// object's public URL. Nothing else of the storage API is exposed.
pub struct BucketObjectStore {
    http: reqwest::Client,
    base_url: String,
    bucket: String,
}

impl BucketObjectStore {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.storage_timeout_seconds()))
            .build()?;

        Ok(Self {
            http,
            base_url: config.storage_base_url().trim_end_matches('/').to_owned(),
            bucket: config.storage_bucket().to_owned(),
        })
    }
}

#[async_trait::async_trait]
impl ObjectStore for BucketObjectStore {
    async fn save(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ObjectStoreError> {
        let upload_url = format!(
            "{}/upload/storage/v1/b/{}/o?uploadType=media&name={}",
            self.base_url, self.bucket, file_name
        );

        let response = self
            .http
            .post(upload_url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| ObjectStoreError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(ObjectStoreError::Unavailable(format!("HTTP {}", status)));
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ObjectStoreError::Rejected(format!(
                "HTTP {}: {}",
                status, detail
            )));
        }

        Ok(format!("{}/{}/{}", self.base_url, self.bucket, file_name))
    }
}
