use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::domain::{ObjectStore, ObjectStoreError};

#[derive(Debug, Clone, PartialEq)]
pub struct SavedObject {
    pub file_name: String,
    pub content_type: String,
    pub size: usize,
}

/// Records uploads instead of talking to a bucket. `set_failing` makes the
/// next saves report an outage, for exercising the 500 path.
pub struct MockObjectStore {
    saved: Mutex<Vec<SavedObject>>,
    failing: AtomicBool,
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn saved(&self) -> Vec<SavedObject> {
        self.saved.lock().unwrap().clone()
    }
}

impl Default for MockObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ObjectStore for MockObjectStore {
    async fn save(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ObjectStoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ObjectStoreError::Unavailable("mock outage".to_owned()));
        }

        self.saved.lock().unwrap().push(SavedObject {
            file_name: file_name.to_owned(),
            content_type: content_type.to_owned(),
            size: bytes.len(),
        });

        Ok(format!("https://storage.mock.local/{}", file_name))
    }
}
