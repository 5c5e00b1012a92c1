// SPDX-License-Identifier: GPL-3.0-only

//! Bucket reached over HTTP
//!
//! Each upload is a single `PUT <endpoint>/<key>` carrying the file bytes.

use super::{ObjectKey, ObjectStore};
use crate::errors::TransferError;
use crate::storage::FileRef;
use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct HttpBucket {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpBucket {
    pub fn new(endpoint: String, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            token,
        }
    }

    /// URL `key` is uploaded to
    pub fn object_url(&self, key: &ObjectKey) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), key)
    }
}

impl ObjectStore for HttpBucket {
    fn put_file(&self, file: FileRef, key: ObjectKey) -> BoxFuture<'static, Result<(), TransferError>> {
        let url = self.object_url(&key);
        let client = self.client.clone();
        let token = self.token.clone();

        async move {
            let source = file
                .to_path()
                .ok_or_else(|| TransferError::InvalidReference(file.to_string()))?;
            let body = tokio::fs::read(&source).await?;
            debug!(url = %url, bytes = body.len(), "Uploading object");

            let mut request = client
                .put(&url)
                .header(CONTENT_TYPE, HeaderValue::from_static("image/jpeg"))
                .body(body);
            if let Some(token) = token {
                request = request.bearer_auth(token);
            }

            let response = request.send().await?.error_for_status()?;
            info!(url = %url, status = %response.status(), "Stored object");
            Ok(())
        }
        .boxed()
    }
}
