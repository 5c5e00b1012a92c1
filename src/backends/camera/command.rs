// SPDX-License-Identifier: GPL-3.0-only

//! Camera backed by an external command
//!
//! The command line comes from the configuration. `{output}` is replaced with
//! the placeholder path and `{uri}` with its file reference, so both
//! `fswebcam --no-banner {output}` and tools expecting a URI work.

use super::{CaptureLauncher, CaptureOutcome, CaptureRequest};
use crate::constants::CAMERA_INTERRUPTED_EXIT_CODE;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tracing::{debug, error, info};

#[derive(Debug, Clone)]
pub struct ExternalCamera {
    argv: Vec<String>,
}

impl ExternalCamera {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }

    /// Substitute the request into the configured command line
    fn command_line(&self, request: &CaptureRequest) -> Vec<String> {
        let output = request.path_string();
        self.argv
            .iter()
            .map(|arg| {
                arg.replace("{output}", &output)
                    .replace("{uri}", request.file_ref.as_str())
            })
            .collect()
    }
}

impl CaptureLauncher for ExternalCamera {
    fn launch(&self, request: &CaptureRequest) -> BoxFuture<'static, CaptureOutcome> {
        let argv = self.command_line(request);
        let output = request.path.clone();

        async move {
            let Some((program, args)) = argv.split_first() else {
                error!("No camera command configured");
                return CaptureOutcome::Other(None);
            };

            info!(program = %program, output = %output.display(), "Launching camera");
            let status = tokio::process::Command::new(program)
                .args(args)
                .stdin(Stdio::null())
                .status()
                .await;

            match status {
                Ok(status) => classify_exit(status, &output).await,
                Err(e) => {
                    error!(program = %program, error = %e, "Failed to launch camera");
                    CaptureOutcome::Other(None)
                }
            }
        }
        .boxed()
    }
}

/// Map the camera's exit status to a capture outcome
///
/// A clean exit only counts as a capture if something was written.
async fn classify_exit(status: ExitStatus, output: &Path) -> CaptureOutcome {
    match status.code() {
        Some(0) => {
            let written = tokio::fs::metadata(output)
                .await
                .map(|meta| meta.len() > 0)
                .unwrap_or(false);
            if written {
                CaptureOutcome::Success
            } else {
                debug!(output = %output.display(), "Camera exited without writing a picture");
                CaptureOutcome::Cancelled
            }
        }
        Some(CAMERA_INTERRUPTED_EXIT_CODE) | None => CaptureOutcome::Cancelled,
        Some(code) => CaptureOutcome::Other(Some(code)),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use chrono::Utc;

    fn request(dir: &Path) -> CaptureRequest {
        CaptureRequest::prepare(dir, "COLLAGE_", &Utc::now()).unwrap()
    }

    fn sh(script: &str) -> ExternalCamera {
        ExternalCamera::new(vec![
            "sh".to_string(),
            "-c".to_string(),
            script.to_string(),
        ])
    }

    #[test]
    fn test_placeholders_are_substituted() {
        let dir = tempfile::tempdir().unwrap();
        let request = request(dir.path());
        let camera = ExternalCamera::new(vec![
            "cam".to_string(),
            "--out={output}".to_string(),
            "{uri}".to_string(),
        ]);

        let argv = camera.command_line(&request);
        assert_eq!(argv[1], format!("--out={}", request.path_string()));
        assert_eq!(argv[2], request.file_ref.as_str());
    }

    #[tokio::test]
    async fn test_written_file_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let request = request(dir.path());
        let camera = ExternalCamera::new(vec![
            "sh".to_string(),
            "-c".to_string(),
            "printf jpeg > \"$0\"".to_string(),
            "{output}".to_string(),
        ]);

        assert_eq!(camera.launch(&request).await, CaptureOutcome::Success);
    }

    #[tokio::test]
    async fn test_clean_exit_without_picture_is_cancelled() {
        let dir = tempfile::tempdir().unwrap();
        let request = request(dir.path());

        assert_eq!(sh("exit 0").launch(&request).await, CaptureOutcome::Cancelled);
        assert_eq!(sh("exit 130").launch(&request).await, CaptureOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_failure_code_is_other() {
        let dir = tempfile::tempdir().unwrap();
        let request = request(dir.path());

        assert_eq!(
            sh("exit 3").launch(&request).await,
            CaptureOutcome::Other(Some(3))
        );
        assert_eq!(
            ExternalCamera::new(Vec::new()).launch(&request).await,
            CaptureOutcome::Other(None)
        );
    }
}
