// SPDX-License-Identifier: GPL-3.0-only

//! Bucket backed by a local directory

use super::{ObjectKey, ObjectStore};
use crate::errors::TransferError;
use crate::storage::FileRef;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct LocalBucket {
    root: PathBuf,
}

impl LocalBucket {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Where `key` is stored
    pub fn object_path(&self, key: &ObjectKey) -> PathBuf {
        key.segments()
            .filter(|segment| *segment != "..")
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

impl ObjectStore for LocalBucket {
    fn put_file(&self, file: FileRef, key: ObjectKey) -> BoxFuture<'static, Result<(), TransferError>> {
        let destination = self.object_path(&key);
        async move {
            let source = file
                .to_path()
                .ok_or_else(|| TransferError::InvalidReference(file.to_string()))?;

            if let Some(parent) = destination.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            let bytes = tokio::fs::copy(&source, &destination).await?;

            info!(key = %key, bytes, destination = %destination.display(), "Stored object");
            Ok(())
        }
        .boxed()
    }
}
