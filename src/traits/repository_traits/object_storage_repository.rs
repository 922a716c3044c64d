use crate::common::*;

use crate::enums::fetch_error::*;

#[async_trait]
pub trait ObjectStorageRepository: Send + Sync {
    async fn get_object(&self, key: &str) -> Result<Vec<u8>, FetchError>;
    #[allow(dead_code)]
    async fn put_object(&self, local_path: &str, key: &str) -> Result<(), FetchError>;
}
