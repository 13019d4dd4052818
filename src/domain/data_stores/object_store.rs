use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ObjectStoreError {
    #[error("bucket rejected the object: {0}")]
    Rejected(String),

    #[error("object storage unavailable: {0}")]
    Unavailable(String),
}

/// Handle to the managed object store the upload route writes through.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Saves the object and returns its public URL.
    async fn save(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ObjectStoreError>;
}
