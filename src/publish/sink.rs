//! Upload destination trait and the object-store implementation.
//!
//! [`ObjectSink`] is the single "put object" operation the publisher needs.
//! [`StoreSink`] implements it over any [`object_store::ObjectStore`]; in
//! production that is S3 (or an S3-compatible endpoint) configured from the
//! standard `AWS_*` environment variables.

use super::headers::ObjectHeaders;
use crate::config::PublishConfig;
use async_trait::async_trait;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as ObjectPath;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("invalid object key {key}: {source}")]
    InvalidKey {
        key: String,
        source: object_store::path::Error,
    },
    #[error(transparent)]
    Store(#[from] object_store::Error),
}

/// Destination for uploaded files.
///
/// Shared by every upload worker, hence `Send + Sync`.
#[async_trait]
pub trait ObjectSink: Send + Sync {
    /// Store `body` under `key`, replacing any existing object.
    async fn put(&self, key: &str, body: Vec<u8>, headers: ObjectHeaders)
    -> Result<(), SinkError>;
}

pub struct StoreSink {
    store: Arc<dyn ObjectStore>,
}

impl StoreSink {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// S3 client for `bucket`, credentials from the environment.
    pub fn s3(bucket: &str, config: &PublishConfig) -> Result<Self, object_store::Error> {
        let mut builder = AmazonS3Builder::from_env().with_bucket_name(bucket);
        if let Some(region) = &config.region {
            builder = builder.with_region(region);
        }
        if let Some(endpoint) = &config.endpoint {
            builder = builder.with_endpoint(endpoint);
        }
        let store = builder.build()?;
        Ok(Self::new(Arc::new(store)))
    }
}

#[async_trait]
impl ObjectSink for StoreSink {
    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        headers: ObjectHeaders,
    ) -> Result<(), SinkError> {
        let location = ObjectPath::parse(key).map_err(|source| SinkError::InvalidKey {
            key: key.to_string(),
            source,
        })?;

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, headers.content_type.into());
        attributes.insert(Attribute::CacheControl, headers.cache_control.into());
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        self.store
            .put_opts(&location, PutPayload::from(body), opts)
            .await?;
        Ok(())
    }
}
