//! S3-backed redirect store.
//!
//! Each mapping is an empty, publicly readable object whose key is the code and
//! whose `WebsiteRedirectLocation` is the target URL. With static website
//! hosting enabled on the bucket, fetching `/<code>` answers with a `301` to
//! the target; this crate never serves redirects itself.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::domain::entities::{Mapping, MappingHandle};
use crate::domain::repositories::RedirectStore;
use crate::error::StoreError;

/// Redirect store writing website-redirect objects into a single bucket.
///
/// The SDK client is cheap to clone and safe to share across requests.
#[derive(Debug, Clone)]
pub struct S3RedirectStore {
    client: Client,
    bucket: String,
}

impl S3RedirectStore {
    /// Creates a store over an already-configured client.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Builds an S3 client from the ambient AWS credentials chain and the
    /// region/endpoint settings in `config`, then wraps it.
    pub async fn connect(config: &Config) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.s3_force_path_style);

        if let Some(ref endpoint) = config.s3_endpoint {
            s3_config = s3_config.endpoint_url(endpoint);
        }

        let client = Client::from_conf(s3_config.build());
        info!(
            bucket = %config.bucket,
            region = %config.region,
            endpoint = config.s3_endpoint.as_deref().unwrap_or("default"),
            "S3 client initialised"
        );

        Self::new(client, config.bucket.clone())
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl RedirectStore for S3RedirectStore {
    #[instrument(skip(self), fields(bucket = %self.bucket))]
    async fn put(&self, code: &str, target_url: &str) -> Result<MappingHandle, StoreError> {
        let result = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(code)
            .website_redirect_location(target_url)
            .acl(ObjectCannedAcl::PublicRead)
            .body(ByteStream::from_static(b""))
            .send()
            .await;

        match result {
            Ok(output) => {
                debug!(e_tag = ?output.e_tag(), "redirect object stored");
                Ok(MappingHandle::new(
                    Mapping::new(code, target_url),
                    output.e_tag().map(str::to_string),
                ))
            }
            Err(err) => {
                let message = DisplayErrorContext(&err).to_string();
                warn!(error = %message, "S3 PutObject failed");
                Err(StoreError::put(code, message))
            }
        }
    }

    #[instrument(skip(self), fields(bucket = %self.bucket))]
    async fn delete(&self, code: &str) -> Result<(), StoreError> {
        let result = self
            .client
            .delete_object()
            .bucket(&self.bucket)
            .key(code)
            .send()
            .await;

        match result {
            Ok(_) => {
                debug!("redirect object deleted");
                Ok(())
            }
            Err(err) => {
                let message = DisplayErrorContext(&err).to_string();
                warn!(error = %message, "S3 DeleteObject failed");
                Err(StoreError::delete(code, message))
            }
        }
    }

    /// Probes the bucket with `HeadBucket`.
    ///
    /// Requires `s3:ListBucket` on the bucket in addition to the
    /// `s3:PutObject`/`s3:DeleteObject` grants the registry itself needs;
    /// without it the probe reports the store as unreachable.
    async fn health_check(&self) -> bool {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => true,
            Err(err) => {
                warn!(
                    bucket = %self.bucket,
                    error = %DisplayErrorContext(&err),
                    "S3 HeadBucket failed"
                );
                false
            }
        }
    }
}
