//! Storage client construction

use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use tracing::info;

/// Handle for the Minio-compatible object storage bucket
///
/// The page loader performs no storage I/O itself; the handle exists so the
/// storage configuration contract is validated and the client constructed
/// exactly once at startup, then shared read-only across requests.
pub struct BucketClient {
    s3_client: Arc<S3Client>,
    bucket_name: String,
}

impl BucketClient {
    /// Creates a bucket client from a pre-configured S3 client
    #[must_use]
    pub fn new(s3_client: Arc<S3Client>, bucket_name: String) -> Self {
        info!("initialized object storage client for bucket: {bucket_name}");
        Self {
            s3_client,
            bucket_name,
        }
    }

    /// Name of the configured bucket
    #[must_use]
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// The underlying S3 client
    #[must_use]
    pub fn s3_client(&self) -> &S3Client {
        &self.s3_client
    }
}
