// SPDX-License-Identifier: GPL-3.0-only

//! Remote object store boundary
//!
//! Uploads are addressed by an [`ObjectKey`] of the form
//! `<collection>/<file name>`. Two stores are provided:
//!
//! - [`LocalBucket`]: a directory standing in for the bucket
//! - [`HttpBucket`]: an endpoint accepting `PUT <endpoint>/<key>`

pub mod http;
pub mod local;

pub use http::HttpBucket;
pub use local::LocalBucket;

use crate::config::BucketConfig;
use crate::errors::TransferError;
use crate::storage::FileRef;
use futures::future::BoxFuture;
use std::sync::Arc;

/// Destination of an upload inside the bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Key for `file_name` inside `collection`
    pub fn new(collection: &str, file_name: &str) -> Self {
        let collection = collection.trim_matches('/');
        if collection.is_empty() {
            ObjectKey(file_name.to_string())
        } else {
            ObjectKey(format!("{}/{}", collection, file_name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments of the key
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transfers local files into a bucket
pub trait ObjectStore: Send + Sync {
    /// Upload the referenced file to `key`; resolves once, with the transfer result
    fn put_file(&self, file: FileRef, key: ObjectKey) -> BoxFuture<'static, Result<(), TransferError>>;
}

/// Build the store described by the configuration
pub fn from_config(config: &BucketConfig) -> Arc<dyn ObjectStore> {
    match config {
        BucketConfig::Local { root } => Arc::new(LocalBucket::new(root.clone())),
        BucketConfig::Http { endpoint, token } => {
            Arc::new(HttpBucket::new(endpoint.clone(), token.clone()))
        }
    }
}
