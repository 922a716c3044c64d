use crate::common::*;

use crate::enums::fetch_error::*;

use crate::model::configs::storage_config::*;

use crate::traits::repository_traits::object_storage_repository::*;

#[derive(Debug, Clone)]
pub struct S3RepositoryImpl {
    s3_client: S3Client,
    bucket_name: String,
}

impl S3RepositoryImpl {
    #[doc = r#"
        Builds the S3 client for the configured bucket. Credentials come from
        the default provider chain (environment variables loaded via dotenv),
        the region from the storage configuration.
    "#]
    pub async fn new(storage_config: &StorageConfig) -> Self {
        let region: Region = Region::new(storage_config.region_name().to_string());

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        S3RepositoryImpl {
            s3_client: S3Client::new(&sdk_config),
            bucket_name: storage_config.bucket_name().to_string(),
        }
    }

    #[doc = "Maps an S3 GetObject failure onto the fetch error taxonomy"]
    fn classify_get_error(key: &str, err: SdkError<GetObjectError>) -> FetchError {
        match &err {
            SdkError::ServiceError(service_err) => {
                let inner: &GetObjectError = service_err.err();

                if inner.is_no_such_key() {
                    FetchError::NotFound(key.to_string())
                } else if inner.code() == Some("AccessDenied") {
                    FetchError::AccessDenied(key.to_string())
                } else {
                    FetchError::Transport(format!("'{}': {:?}", key, err))
                }
            }
            _ => FetchError::Transport(format!("'{}': {:?}", key, err)),
        }
    }
}

#[async_trait]
impl ObjectStorageRepository for S3RepositoryImpl {
    async fn get_object(&self, key: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .s3_client
            .get_object()
            .bucket(&self.bucket_name)
            .key(key)
            .send()
            .await
            .map_err(|e| Self::classify_get_error(key, e))?;

        let bytes: Vec<u8> = response
            .body
            .collect()
            .await
            .map_err(|e| {
                FetchError::Transport(format!(
                    "[S3RepositoryImpl->get_object] Failed to collect body of '{}': {}",
                    key, e
                ))
            })?
            .into_bytes()
            .to_vec();

        Ok(bytes)
    }

    async fn put_object(&self, local_path: &str, key: &str) -> Result<(), FetchError> {
        let body: ByteStream = ByteStream::from_path(local_path).await.map_err(|e| {
            FetchError::Transport(format!(
                "[S3RepositoryImpl->put_object] Failed to read '{}': {}",
                local_path, e
            ))
        })?;

        self.s3_client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                FetchError::Transport(format!(
                    "[S3RepositoryImpl->put_object] Upload failed for '{}': {:?}",
                    key, e
                ))
            })?;

        Ok(())
    }
}
