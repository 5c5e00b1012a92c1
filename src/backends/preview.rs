// SPDX-License-Identifier: GPL-3.0-only

//! Preview surface
//!
//! Decodes a captured image, scales it to fill the preview area and crops the
//! overflow around the center. When the image cannot be decoded an error
//! placeholder is drawn instead, so the surface never keeps showing a stale
//! picture.

use crate::config::PreviewSettings;
use crate::constants::ERROR_PLACEHOLDER_RGBA;
use crate::errors::RenderError;
use futures::FutureExt;
use futures::future::BoxFuture;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Somewhere an image can be loaded and shown
pub trait ImageSurface: Send + Sync {
    /// Load `path` and render it; resolves once, with the render result
    fn load(&self, path: PathBuf) -> BoxFuture<'static, Result<(), RenderError>>;
}

/// Renders previews into an image file
#[derive(Debug, Clone)]
pub struct PreviewRenderer {
    width: u32,
    height: u32,
    output: PathBuf,
}

impl PreviewRenderer {
    pub fn new(settings: &PreviewSettings) -> Self {
        Self {
            width: settings.width.max(1),
            height: settings.height.max(1),
            output: settings.output.clone(),
        }
    }

    /// Where rendered previews are written
    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl ImageSurface for PreviewRenderer {
    fn load(&self, path: PathBuf) -> BoxFuture<'static, Result<(), RenderError>> {
        let renderer = self.clone();
        async move {
            // Decoding and scaling are CPU-bound
            tokio::task::spawn_blocking(move || renderer.render(&path))
                .await
                .map_err(|e| RenderError::Task(e.to_string()))?
        }
        .boxed()
    }
}

impl PreviewRenderer {
    fn render(&self, path: &Path) -> Result<(), RenderError> {
        match image::open(path) {
            Ok(img) => {
                debug!(
                    path = %path.display(),
                    width = img.width(),
                    height = img.height(),
                    "Decoded image for preview"
                );
                let preview = img.resize_to_fill(self.width, self.height, FilterType::Triangle);
                self.write(preview)
            }
            Err(e) => {
                let placeholder =
                    RgbaImage::from_pixel(self.width, self.height, Rgba(ERROR_PLACEHOLDER_RGBA));
                self.write(DynamicImage::ImageRgba8(placeholder))?;
                Err(RenderError::Decode(e.to_string()))
            }
        }
    }

    fn write(&self, preview: DynamicImage) -> Result<(), RenderError> {
        if let Some(parent) = self.output.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RenderError::Io(e.to_string()))?;
        }
        preview
            .to_rgba8()
            .save_with_format(&self.output, ImageFormat::Png)
            .map_err(|e| RenderError::Io(e.to_string()))
    }
}
